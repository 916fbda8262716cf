//! Integration tests for the clean pipeline.

use std::fs;
use std::path::PathBuf;

use inv_cli::pipeline::{CleanOptions, run_clean};
use inv_model::{CLEAN_COLUMNS, Severity};
use tempfile::TempDir;

const INVENTORY: &str = "\
source_row_id,ip,hostname,fqdn,mac,owner,device_type,notes,site,rack
A1,192.168.010.005,web01,web01.corp.example.com,AA-BB-CC-DD-EE-FF,Jane Doe (Platform) jane@example.com,srv,,hq-bldg-1,R1
A2,fe80::1,web02,web01.corp.example.com,aabb.ccdd.eeff,ops team,,lobby camera,BLR campus,R2
,10.0.0.300,-bad-,,zz,,,,n/a,R3
";

fn write_input(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("inventory_raw.csv");
    fs::write(&path, INVENTORY).expect("write input");
    path
}

#[test]
fn clean_writes_table_and_log_next_to_input() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_input(&dir);
    let result = run_clean(&CleanOptions::new(&input)).expect("clean");

    assert_eq!(result.records, 3);
    assert_eq!(result.passthrough_columns, vec!["source_row_id", "rack"]);
    assert!(result.missing_columns.is_empty());
    assert!(result.has_errors());

    let table_path = result.outputs.clean_table.clone().expect("clean table path");
    assert_eq!(table_path.parent(), Some(dir.path()));
    let mut reader = csv::Reader::from_path(&table_path).expect("open clean table");
    let headers: Vec<String> = reader
        .headers()
        .expect("headers")
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(&headers[..CLEAN_COLUMNS.len()], CLEAN_COLUMNS);
    assert_eq!(&headers[CLEAN_COLUMNS.len()..], ["source_row_id", "rack"]);

    let rows: Vec<csv::StringRecord> = reader.records().map(|row| row.expect("row")).collect();
    let cell = |row: usize, column: &str| {
        let idx = headers.iter().position(|h| h == column).expect("column");
        rows[row].get(idx).unwrap_or_default().to_string()
    };
    assert_eq!(cell(0, "ip"), "192.168.10.5");
    assert_eq!(cell(0, "subnet_cidr"), "192.168.10.0/24");
    assert_eq!(cell(0, "ptr_record"), "5.10.168.192.in-addr.arpa");
    assert_eq!(cell(0, "mac"), "aa:bb:cc:dd:ee:ff");
    assert_eq!(cell(0, "owner_email"), "jane@example.com");
    assert_eq!(cell(0, "device_type"), "server");
    assert_eq!(cell(0, "site"), "HQ Building 1");
    assert_eq!(cell(0, "rack"), "R1");
    assert_eq!(cell(1, "ip_valid"), "false");
    assert_eq!(cell(1, "fqdn_consistent"), "false");
    assert_eq!(cell(1, "device_type"), "iot");
    assert_eq!(cell(1, "device_type_confidence"), "medium");
    assert_eq!(cell(1, "site"), "BLR Campus");
    assert_eq!(cell(2, "site"), "");
    assert_eq!(cell(2, "ip"), "10.0.0.300");
    assert_eq!(cell(0, "record_id"), "A1");
    assert_eq!(cell(2, "record_id"), "3");
    assert_eq!(cell(2, "source_row_id"), "");

    let log_path = result.outputs.anomaly_log.clone().expect("anomaly log path");
    let payload: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(log_path).expect("read log")).expect("parse log");
    assert_eq!(payload["record_count"], 3);
    assert_eq!(
        payload["error_count"],
        result.anomalies.count_by_severity(Severity::Error)
    );
    let first = &payload["anomalies"][0];
    assert_eq!(first["record_id"], "A1");
    assert_eq!(first["reason"], "leading_zeros_stripped");
    let blank_id_entry = payload["anomalies"]
        .as_array()
        .expect("array")
        .iter()
        .find(|entry| entry["field"] == "hostname" && entry["original_value"] == "-bad-")
        .expect("hostname anomaly for the row without source_row_id");
    assert_eq!(blank_id_entry["record_id"], cell(2, "record_id").as_str());
}

#[test]
fn field_counts_follow_column_order() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_input(&dir);
    let mut options = CleanOptions::new(&input);
    options.dry_run = true;
    let result = run_clean(&options).expect("clean");

    let fields: Vec<String> = result
        .field_counts()
        .into_iter()
        .map(|(field, _)| field)
        .collect();
    assert_eq!(
        fields,
        vec!["ip", "ptr_record", "hostname", "fqdn", "fqdn_consistent", "mac", "owner"]
    );
    let ip = result
        .field_counts()
        .into_iter()
        .find(|(field, _)| field == "ip")
        .map(|(_, counts)| counts)
        .expect("ip counts");
    assert_eq!(ip.errors, 2);
    assert_eq!(ip.info, 1);
    assert_eq!(result.device_types.get("server"), Some(&1));
    assert_eq!(result.device_types.get("unknown"), Some(&1));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_input(&dir);
    let out = dir.path().join("out");
    let options = CleanOptions {
        input,
        output_dir: Some(out.clone()),
        tables: None,
        dry_run: true,
    };
    let result = run_clean(&options).expect("clean");
    assert!(result.outputs.clean_table.is_none());
    assert!(result.outputs.anomaly_log.is_none());
    assert!(!out.exists());
}

#[test]
fn tables_override_is_applied() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_input(&dir);
    let tables = dir.path().join("tables.toml");
    fs::write(
        &tables,
        "[site]\nabbreviations = { blr = \"Bangalore\" }\n",
    )
    .expect("write tables");
    let options = CleanOptions {
        input,
        output_dir: Some(dir.path().join("out")),
        tables: Some(tables),
        dry_run: false,
    };
    let result = run_clean(&options).expect("clean");
    let table_path = result.outputs.clean_table.expect("clean table");
    let text = fs::read_to_string(table_path).expect("read table");
    assert!(text.contains("Bangalore Campus"));
    assert!(text.contains("Hq Bldg 1"));
}

#[test]
fn missing_input_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let error = run_clean(&CleanOptions::new(dir.path().join("absent.csv")))
        .expect_err("missing input");
    assert!(format!("{error:#}").contains("CSV file not found"));
}

#[test]
fn invalid_tables_file_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_input(&dir);
    let tables = dir.path().join("tables.toml");
    fs::write(&tables, "[vendors]\n").expect("write tables");
    let options = CleanOptions {
        input,
        tables: Some(tables),
        dry_run: true,
        ..CleanOptions::default()
    };
    let error = run_clean(&options).expect_err("invalid tables");
    assert!(format!("{error:#}").contains("load lookup tables"));
}

#[test]
fn output_dir_defaults_to_input_directory() {
    assert_eq!(
        CleanOptions::new("inventory.csv").resolved_output_dir(),
        PathBuf::from(".")
    );
    assert_eq!(
        CleanOptions::new("data/inventory.csv").resolved_output_dir(),
        PathBuf::from("data")
    );
}

#[test]
fn blank_header_columns_keep_their_own_values() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("inventory_raw.csv");
    fs::write(&input, "ip,,\n10.0.0.1,first,second\n").expect("write input");
    let result = run_clean(&CleanOptions::new(&input)).expect("clean");
    assert_eq!(result.passthrough_columns, vec!["column_2", "column_3"]);

    let table_path = result.outputs.clean_table.expect("clean table path");
    let mut reader = csv::Reader::from_path(&table_path).expect("open clean table");
    let headers: Vec<String> = reader
        .headers()
        .expect("headers")
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(&headers[CLEAN_COLUMNS.len()..], ["column_2", "column_3"]);
    let row = reader.records().next().expect("one row").expect("parse row");
    assert_eq!(row.get(CLEAN_COLUMNS.len()), Some("first"));
    assert_eq!(row.get(CLEAN_COLUMNS.len() + 1), Some("second"));
}
