//! Inventory record normalization engine.
//!
//! Per-field validators, extractors, and classifiers, plus the record
//! processor that combines them and the batch driver that runs it over a
//! table.
//!
//! # Overview
//!
//! - **Primitive validators**: [`validate_ipv4`], [`validate_hostname`],
//!   [`validate_fqdn`], [`validate_mac`]
//! - **Composite rules**: [`check_consistency`], [`ptr_record`]
//! - **Extractors and classifiers**: [`OwnerParser`], [`DeviceClassifier`],
//!   [`normalize_site`]
//! - **Aggregation**: [`RecordProcessor`] and [`process_batch`]
//!
//! # Example
//!
//! ```
//! use inv_model::{AnomalyLog, RawRecord};
//! use inv_normalize::RecordProcessor;
//!
//! let processor = RecordProcessor::default();
//! let raw = RawRecord::from_pairs("1", [("ip", "192.168.010.005"), ("mac", "AABB.CCDD.EEFF")]);
//! let mut log = AnomalyLog::new();
//! let record = processor.process(&raw, &mut log);
//! assert_eq!(record.ip, "192.168.10.5");
//! assert_eq!(record.mac, "aa:bb:cc:dd:ee:ff");
//! ```
//!
//! # Design Principles
//!
//! - **Total functions**: validators return a [`inv_model::FieldResult`] for
//!   every input and never fail
//! - **Table-driven**: vocabularies come from [`inv_tables::Tables`]
//! - **Deterministic**: output depends only on the row and the tables

#![deny(unsafe_code)]

pub mod batch;
pub mod device;
pub mod hostname;
pub mod ipv4;
pub mod mac;
pub mod owner;
pub mod processor;
pub mod ptr;
pub mod site;

pub use batch::{BatchOutcome, process_batch};
pub use device::{
    ClassificationStrategy, DEFAULT_STRATEGIES, DeviceClassifier, DeviceInput, DeviceTypeOracle,
    NoopOracle,
};
pub use hostname::{Consistency, check_consistency, validate_fqdn, validate_hostname};
pub use ipv4::{classify_ipv4, private_subnet, validate_ipv4};
pub use mac::validate_mac;
pub use owner::{OwnerFields, OwnerParser};
pub use processor::RecordProcessor;
pub use ptr::{ptr, ptr_record};
pub use site::normalize_site;
