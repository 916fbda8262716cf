use std::fs;

use inv_model::{AnomalyEntry, AnomalyLog, CLEAN_COLUMNS, CleanRecord, Confidence, Reason};
use inv_output::{
    ANOMALY_SCHEMA, CLEAN_TABLE_FILE, build_anomaly_payload, write_anomaly_log_json,
    write_clean_csv,
};
use tempfile::TempDir;

fn sample_record() -> CleanRecord {
    CleanRecord {
        record_id: "1".to_string(),
        ip: "10.0.0.1".to_string(),
        ip_valid: true,
        hostname: "web01".to_string(),
        hostname_valid: true,
        owner: "Doe, Jane".to_string(),
        owner_name: "Doe, Jane".to_string(),
        device_type: "server".to_string(),
        device_type_confidence: Confidence::High,
        normalization_steps: vec!["ip_normalize".to_string(), "ptr_generate".to_string()],
        passthrough: vec![("rack".to_string(), "R1".to_string())],
        ..CleanRecord::default()
    }
}

#[test]
fn clean_csv_has_fixed_columns_then_passthrough() {
    let dir = TempDir::new().expect("temp dir");
    let out = dir.path().join("out");
    let path = write_clean_csv(&out, &[sample_record()], &["rack".to_string()]).expect("write csv");
    assert_eq!(path, out.join(CLEAN_TABLE_FILE));

    let mut reader = csv::Reader::from_path(&path).expect("open csv");
    let headers: Vec<String> = reader
        .headers()
        .expect("headers")
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(headers.len(), CLEAN_COLUMNS.len() + 1);
    assert_eq!(headers[0], "record_id");
    assert_eq!(headers[1], "ip");
    assert_eq!(headers.last().map(String::as_str), Some("rack"));

    let row = reader.records().next().expect("one row").expect("parse row");
    let get = |column: &str| {
        let idx = headers.iter().position(|h| h == column).expect("column");
        row.get(idx).unwrap_or_default().to_string()
    };
    assert_eq!(get("record_id"), "1");
    assert_eq!(get("ip_valid"), "true");
    assert_eq!(get("fqdn_valid"), "false");
    assert_eq!(get("owner"), "Doe, Jane");
    assert_eq!(get("device_type_confidence"), "high");
    assert_eq!(get("normalization_steps"), "ip_normalize|ptr_generate");
    assert_eq!(get("rack"), "R1");
}

#[test]
fn anomaly_payload_counts_and_order() {
    let mut log = AnomalyLog::new();
    log.push(AnomalyEntry::new("1", "ip", "fe80::1", Reason::Ipv6NotSupported));
    log.push(AnomalyEntry::new("1", "ptr_record", "fe80::1", Reason::PtrUnavailable));
    log.push(AnomalyEntry::new("2", "mac", "", Reason::Missing));

    let payload = build_anomaly_payload("inventory.csv", 2, &log);
    assert_eq!(payload.schema, ANOMALY_SCHEMA);
    assert_eq!(payload.error_count, 1);
    assert_eq!(payload.warning_count, 1);
    assert_eq!(payload.info_count, 1);

    let dir = TempDir::new().expect("temp dir");
    let path = write_anomaly_log_json(dir.path(), "inventory.csv", 2, &log).expect("write json");
    let text = fs::read_to_string(path).expect("read json");
    let value: serde_json::Value = serde_json::from_str(&text).expect("parse json");
    assert_eq!(value["schema_version"], 1);
    assert_eq!(value["record_count"], 2);
    assert_eq!(value["source"], "inventory.csv");
    let fields: Vec<&str> = value["anomalies"]
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|entry| entry["field"].as_str())
        .collect();
    assert_eq!(fields, vec!["ip", "ptr_record", "mac"]);
    assert_eq!(value["anomalies"][0]["reason"], "ipv6_not_supported");
    assert_eq!(value["anomalies"][0]["severity"], "error");
}
