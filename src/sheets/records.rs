//! Conversion of raw worksheet rows into header-keyed records
//!
//! The first row of the worksheet is the header row; every following row
//! becomes one record keyed by those headers, in sheet column order.

use serde_json::Value;

/// A single worksheet row keyed by the header row, in sheet column order
///
/// `serde_json::Map` preserves insertion order here (the `preserve_order`
/// feature), so serialized records list columns left to right as they
/// appear in the sheet.
pub type QuoteRecord = serde_json::Map<String, Value>;

/// Convert raw cell rows into header-keyed records
///
/// The first row supplies the keys. Rows shorter than the header row are
/// padded with empty strings; cells beyond the header row are dropped. A
/// worksheet with no rows, or only a header row, yields no records.
pub fn records_from_rows(rows: Vec<Vec<Value>>) -> Vec<QuoteRecord> {
    let mut rows = rows.into_iter();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(cell_text).collect(),
        None => return Vec::new(),
    };

    rows.map(|row| {
        let mut record = QuoteRecord::new();
        for (i, header) in headers.iter().enumerate() {
            let value = row.get(i).map(cell_text).unwrap_or_default();
            record.insert(header.clone(), Value::String(value));
        }
        record
    })
    .collect()
}

/// Render one cell as text. The API serves formatted values, so cells are
/// normally strings already; anything else is stringified and empty cells
/// become empty strings.
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn string_row(cells: &[&str]) -> Vec<Value> {
        cells.iter().map(|c| json!(c)).collect()
    }

    #[test]
    fn test_rows_become_header_keyed_records() {
        let rows = vec![
            string_row(&["quote", "author"]),
            string_row(&["Stay hungry", "Jobs"]),
            string_row(&["Less is more", "Rohe"]),
        ];

        let records = records_from_rows(rows);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["quote"], json!("Stay hungry"));
        assert_eq!(records[0]["author"], json!("Jobs"));
        assert_eq!(records[1]["quote"], json!("Less is more"));
        assert_eq!(records[1]["author"], json!("Rohe"));
    }

    #[test]
    fn test_records_keep_sheet_column_order() {
        let rows = vec![string_row(&["z", "a", "m"]), string_row(&["1", "2", "3"])];

        let records = records_from_rows(rows);

        let keys: Vec<&str> = records[0].keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_no_rows_yield_no_records() {
        assert!(records_from_rows(Vec::new()).is_empty());
    }

    #[test]
    fn test_header_only_yields_no_records() {
        let rows = vec![string_row(&["quote", "author"])];
        assert!(records_from_rows(rows).is_empty());
    }

    #[test]
    fn test_short_rows_are_padded_with_empty_strings() {
        let rows = vec![string_row(&["quote", "author"]), string_row(&["Onward"])];

        let records = records_from_rows(rows);

        assert_eq!(records[0]["quote"], json!("Onward"));
        assert_eq!(records[0]["author"], json!(""));
    }

    #[test]
    fn test_cells_beyond_headers_are_dropped() {
        let rows = vec![
            string_row(&["quote"]),
            string_row(&["Onward", "stray cell"]),
        ];

        let records = records_from_rows(rows);

        assert_eq!(records[0].len(), 1);
        assert_eq!(records[0]["quote"], json!("Onward"));
    }

    #[test]
    fn test_non_string_cells_are_stringified() {
        let rows = vec![
            string_row(&["quote", "year", "checked"]),
            vec![json!("Forty-two"), json!(1979), json!(true)],
        ];

        let records = records_from_rows(rows);

        assert_eq!(records[0]["year"], json!("1979"));
        assert_eq!(records[0]["checked"], json!("true"));
    }

    #[test]
    fn test_null_cells_become_empty_strings() {
        let rows = vec![
            string_row(&["quote", "author"]),
            vec![json!("Onward"), Value::Null],
        ];

        let records = records_from_rows(rows);

        assert_eq!(records[0]["author"], json!(""));
    }

    #[test]
    fn test_duplicate_header_keeps_first_position_and_last_value() {
        let rows = vec![
            string_row(&["quote", "author", "quote"]),
            string_row(&["first", "someone", "second"]),
        ];

        let records = records_from_rows(rows);

        let keys: Vec<&str> = records[0].keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["quote", "author"]);
        assert_eq!(records[0]["quote"], json!("second"));
    }
}
