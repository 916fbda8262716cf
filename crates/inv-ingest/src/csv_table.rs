use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use inv_model::{RawRecord, SOURCE_ROW_ID_COLUMN, is_recognized};

use crate::error::{IngestError, Result};

/// Raw inventory rows in input order, plus the header they were read with.
#[derive(Debug, Clone, Default)]
pub struct InventoryTable {
    pub headers: Vec<String>,
    pub records: Vec<RawRecord>,
}

impl InventoryTable {
    /// Header columns the engine does not interpret, in input order.
    pub fn passthrough_columns(&self) -> Vec<String> {
        self.headers
            .iter()
            .filter(|header| !is_recognized(header))
            .cloned()
            .collect()
    }

    /// Recognized columns absent from the header. Every row reads them as empty.
    pub fn missing_columns(&self) -> Vec<&'static str> {
        inv_model::RECOGNIZED_COLUMNS
            .iter()
            .copied()
            .filter(|column| !self.headers.iter().any(|header| header == column))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Trim, drop a byte-order mark, and collapse inner whitespace. Recognized
/// columns and the row-id column are lowercased so lookups are exact.
fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}').trim();
    let collapsed = trimmed.split_whitespace().collect::<Vec<_>>().join(" ");
    if is_recognized(&collapsed) || collapsed.eq_ignore_ascii_case(SOURCE_ROW_ID_COLUMN) {
        collapsed.to_lowercase()
    } else {
        collapsed
    }
}

fn normalize_cell(raw: &str) -> String {
    raw.trim_matches('\u{feff}').to_string()
}

/// Read an inventory CSV file into [`RawRecord`]s.
///
/// The first non-blank row is the header. Blank rows are skipped, short rows
/// are padded with empty cells, and cell text is otherwise kept verbatim so
/// anomaly entries can quote the original value. Each record is identified by
/// its `source_row_id` cell when present and non-blank, else by its 1-based
/// data row number.
pub fn read_inventory_csv(path: &Path) -> Result<InventoryTable> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut headers: Option<Vec<String>> = None;
    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        if headers.is_none() {
            headers = Some(parse_header(path, &row)?);
            continue;
        }
        let columns = headers.as_deref().unwrap_or_default();

        let row_number = records.len() + 1;
        let pairs: Vec<(String, String)> = columns
            .iter()
            .enumerate()
            .map(|(idx, column)| (column.clone(), row.get(idx).cloned().unwrap_or_default()))
            .collect();
        if row.len() > columns.len() {
            debug!(
                path = %path.display(),
                row_number,
                extra_cells = row.len() - columns.len(),
                "ignoring cells beyond the header"
            );
        }
        let record_id = pairs
            .iter()
            .find(|(column, _)| column == SOURCE_ROW_ID_COLUMN)
            .map(|(_, value)| value.trim())
            .filter(|value| !value.is_empty())
            .map_or_else(|| row_number.to_string(), str::to_string);
        records.push(RawRecord::new(record_id, pairs));
    }

    let Some(headers) = headers else {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    };
    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = records.len(),
        "read inventory table"
    );
    Ok(InventoryTable { headers, records })
}

/// Normalize header cells. A blank cell is named `column_<n>` after its
/// 1-based position so every column stays addressable by name.
fn parse_header(path: &Path, row: &[String]) -> Result<Vec<String>> {
    let headers: Vec<String> = row
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            let header = normalize_header(value);
            if header.is_empty() {
                format!("column_{}", idx + 1)
            } else {
                header
            }
        })
        .collect();
    let mut seen = BTreeSet::new();
    for header in &headers {
        if !seen.insert(header.to_lowercase()) {
            return Err(IngestError::DuplicateColumn {
                column: header.clone(),
                path: path.to_path_buf(),
            });
        }
    }
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_normalization() {
        assert_eq!(normalize_header("\u{feff}IP "), "ip");
        assert_eq!(normalize_header(" Device_Type"), "device_type");
        assert_eq!(normalize_header("Source_Row_ID"), "source_row_id");
        assert_eq!(normalize_header("Rack   Unit"), "Rack Unit");
    }

    #[test]
    fn cells_keep_surrounding_whitespace() {
        assert_eq!(normalize_cell(" 10.0.0.1 "), " 10.0.0.1 ");
        assert_eq!(normalize_cell("\u{feff}x"), "x");
    }
}
