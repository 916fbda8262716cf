//! Record processor: applies every field rule to one raw row.

use inv_model::{AnomalyEntry, AnomalyLog, CleanRecord, FieldResult, RawRecord, Reason};
use inv_tables::{SiteTables, Tables};
use tracing::{debug, trace};

use crate::device::{DeviceClassifier, DeviceInput, DeviceTypeOracle};
use crate::hostname::{Consistency, check_consistency, validate_fqdn, validate_hostname};
use crate::ipv4::{classify_ipv4, private_subnet, validate_ipv4};
use crate::mac::validate_mac;
use crate::owner::OwnerParser;
use crate::ptr::ptr_record;
use crate::site::normalize_site;

/// Turns [`RawRecord`]s into [`CleanRecord`]s and anomaly entries.
///
/// The processor holds only immutable configuration, so one instance can be
/// reused for a whole batch.
#[derive(Debug)]
pub struct RecordProcessor {
    owner_parser: OwnerParser,
    classifier: DeviceClassifier,
    site_tables: SiteTables,
}

impl RecordProcessor {
    pub fn new(tables: &Tables) -> Self {
        Self {
            owner_parser: OwnerParser::new(&tables.team),
            classifier: DeviceClassifier::new(tables.device.clone()),
            site_tables: tables.site.clone(),
        }
    }

    /// Replace the device-type oracle consulted after the deterministic strategies.
    pub fn with_oracle(mut self, oracle: Box<dyn DeviceTypeOracle>) -> Self {
        self.classifier = self.classifier.with_oracle(oracle);
        self
    }

    pub fn with_classifier(mut self, classifier: DeviceClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Clean one record, appending its anomalies to `log` in field order.
    ///
    /// Never fails: a row with every field malformed still yields a complete
    /// [`CleanRecord`] carrying the trimmed inputs.
    pub fn process(&self, raw: &RawRecord, log: &mut AnomalyLog) -> CleanRecord {
        let record_id = raw.record_id.as_str();
        let mut recorder = Recorder::new(record_id, log);
        let mut steps = Vec::new();
        trace!(record_id, columns = ?raw.columns(), "processing record");

        // ip, subnet, ptr
        let raw_ip = raw.get("ip");
        let ip = validate_ipv4(raw_ip);
        recorder.field("ip", raw_ip, &ip);
        steps.push(
            match &ip {
                FieldResult::Valid { .. } => "ip_normalize",
                FieldResult::Missing => "ip_missing",
                FieldResult::Invalid { .. } => "ip_invalid",
            }
            .to_string(),
        );
        let ip_type = ip
            .is_valid()
            .then(|| classify_ipv4(ip.normalized_value()))
            .flatten();
        let subnet_cidr = if ip.is_valid() {
            private_subnet(ip.normalized_value()).unwrap_or_default()
        } else {
            String::new()
        };
        let ptr = match ptr_record(&ip) {
            Some(name) => {
                steps.push("ptr_generate".to_string());
                name
            }
            None => {
                recorder.record("ptr_record", raw_ip, Reason::PtrUnavailable);
                String::new()
            }
        };

        // hostname, fqdn, consistency
        let raw_hostname = raw.get("hostname");
        let hostname = validate_hostname(raw_hostname);
        recorder.field("hostname", raw_hostname, &hostname);
        if !hostname.is_missing() {
            steps.push("hostname_validate".to_string());
        }
        let raw_fqdn = raw.get("fqdn");
        let fqdn = validate_fqdn(raw_fqdn);
        recorder.field("fqdn", raw_fqdn, &fqdn);
        if !fqdn.is_missing() {
            steps.push("fqdn_validate".to_string());
        }
        let consistency = check_consistency(&hostname, &fqdn);
        match consistency {
            Consistency::Consistent => steps.push("fqdn_consistency_check".to_string()),
            Consistency::Mismatch => {
                steps.push("fqdn_consistency_check".to_string());
                recorder.record(
                    "fqdn_consistent",
                    format!("{} / {}", raw_hostname.trim(), raw_fqdn.trim()),
                    Reason::HostnameFqdnMismatch,
                );
            }
            Consistency::NotChecked => {}
        }

        // mac
        let raw_mac = raw.get("mac");
        let mac = validate_mac(raw_mac);
        recorder.field("mac", raw_mac, &mac);
        if mac.is_valid() {
            steps.push("mac_normalize".to_string());
        }

        // owner
        let raw_owner = raw.get("owner");
        let owner = self.owner_parser.parse(raw_owner);
        if raw_owner.trim().is_empty() {
            recorder.record("owner", raw_owner, Reason::Missing);
        } else {
            steps.push("owner_parse".to_string());
            if owner.email.is_empty() {
                recorder.record("owner", raw_owner, Reason::OwnerEmailMissing);
            }
        }

        // device type
        let notes = raw.get("notes").trim();
        let classification = self.classifier.classify(&DeviceInput {
            device_type: raw.get("device_type"),
            hostname: raw_hostname,
            notes,
        });
        steps.push("device_type_classify".to_string());

        // site
        let raw_site = raw.get("site");
        let site = normalize_site(raw_site, &self.site_tables);
        if !raw_site.trim().is_empty() {
            steps.push("site_normalize".to_string());
        }

        let anomalies = recorder.finish();
        debug!(
            record_id,
            anomalies,
            device_type = %classification.device_type,
            confidence = %classification.confidence,
            "record processed"
        );

        CleanRecord {
            record_id: record_id.to_string(),
            ip_valid: ip.is_valid(),
            ip: ip.normalized_value().to_string(),
            ip_type,
            subnet_cidr,
            ptr_record: ptr,
            hostname_valid: hostname.is_valid(),
            hostname: hostname.normalized_value().to_string(),
            fqdn_valid: fqdn.is_valid(),
            fqdn: fqdn.normalized_value().to_string(),
            fqdn_consistent: consistency.is_consistent(),
            mac_valid: mac.is_valid(),
            mac: mac.normalized_value().to_string(),
            owner: raw_owner.trim().to_string(),
            owner_name: owner.name,
            owner_email: owner.email,
            owner_team: owner.team,
            device_type: classification.device_type,
            device_type_confidence: classification.confidence,
            notes: notes.to_string(),
            site,
            normalization_steps: steps,
            passthrough: raw.passthrough().cloned().collect(),
        }
    }
}

impl Default for RecordProcessor {
    fn default() -> Self {
        Self::new(&Tables::default())
    }
}

/// Appends anomalies for one record and counts them.
struct Recorder<'a> {
    record_id: &'a str,
    log: &'a mut AnomalyLog,
    recorded: usize,
}

impl<'a> Recorder<'a> {
    fn new(record_id: &'a str, log: &'a mut AnomalyLog) -> Self {
        Self {
            record_id,
            log,
            recorded: 0,
        }
    }

    /// Record the outcome of a validator: its failure, or its normalization note.
    fn field(&mut self, field: &str, original: &str, result: &FieldResult) {
        match result {
            FieldResult::Valid { note: Some(note), .. } => self.record(field, original, *note),
            FieldResult::Valid { note: None, .. } => {}
            FieldResult::Missing | FieldResult::Invalid { .. } => {
                self.record(field, original, result.reason());
            }
        }
    }

    fn record(&mut self, field: &str, original: impl Into<String>, reason: Reason) {
        let entry = AnomalyEntry::new(self.record_id, field, original, reason);
        trace!(
            record_id = self.record_id,
            field,
            reason = %reason,
            severity = %entry.severity,
            "anomaly recorded"
        );
        self.log.push(entry);
        self.recorded += 1;
    }

    fn finish(self) -> usize {
        self.recorded
    }
}
