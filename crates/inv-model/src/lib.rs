pub mod anomaly;
pub mod classification;
pub mod field;
pub mod record;

pub use anomaly::{AnomalyEntry, AnomalyLog, Severity};
pub use classification::{Classification, Confidence, Strategy, UNKNOWN_DEVICE_TYPE};
pub use field::{FieldResult, Reason};
pub use record::{
    CLEAN_COLUMNS, CleanRecord, IpType, RECOGNIZED_COLUMNS, RawRecord, SOURCE_ROW_ID_COLUMN,
    is_recognized,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anomaly_log_counts() {
        let mut log = AnomalyLog::new();
        log.push(AnomalyEntry::new("1", "ip", "999.1.1.1", Reason::InvalidIpv4Format));
        log.push(AnomalyEntry::new("1", "mac", "", Reason::Missing));
        log.push(AnomalyEntry::new("2", "owner", "Jane", Reason::OwnerEmailMissing));
        assert_eq!(log.len(), 3);
        assert_eq!(log.count_by_severity(Severity::Error), 1);
        assert_eq!(log.count_by_severity(Severity::Warning), 1);
        assert_eq!(log.count_by_severity(Severity::Info), 1);
        assert!(log.has_errors());
        assert_eq!(log.for_record("1").count(), 2);
    }

    #[test]
    fn clean_record_serializes() {
        let record = CleanRecord {
            record_id: "7".to_string(),
            ip: "10.0.0.1".to_string(),
            ip_valid: true,
            ip_type: Some(IpType::Private),
            ..CleanRecord::default()
        };
        let json = serde_json::to_string(&record).expect("serialize record");
        let round: CleanRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round.ip_type, Some(IpType::Private));
        assert_eq!(round.record_id, "7");
    }
}
