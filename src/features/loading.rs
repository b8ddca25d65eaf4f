//! Building tables from CSV and JSON data
//!
//! Enabled with the `data-loading` feature. Readers are supplied by the
//! caller; nothing here opens files.

use std::io::Read;

use crate::core::emitter::Emitter;
use crate::core::options::EmitterOptions;
use crate::core::table::{CellValue, Table};
use crate::utils::error::{EmitError, EmitResult};

/// Build a table from CSV data
///
/// The first record becomes the header and fixes the column count. Cells are
/// kept as written; empty cells and NaN become the blank placeholder.
pub fn table_from_csv<R: Read>(reader: R, options: EmitterOptions) -> EmitResult<Table> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mut table = Table::with_options(headers.len(), options)?;
    table.add_header(headers.iter())?;

    for record in csv_reader.records() {
        let record = record?;
        table.add_row(record.iter().map(CellValue::parse))?;
    }

    log::debug!(
        "loaded {} CSV rows into a {}-column table",
        table.fragment().len(),
        table.columns()
    );
    Ok(table)
}

/// Parse rows from a JSON array of arrays
///
/// Cells may be strings, numbers, booleans or `null` (blank).
pub fn rows_from_json(input: &str) -> EmitResult<Vec<Vec<CellValue>>> {
    let rows: Vec<Vec<CellValue>> = serde_json::from_str(input)?;
    Ok(rows)
}

/// Append JSON rows to an existing table
pub fn extend_from_json(table: &mut Table, input: &str) -> EmitResult<()> {
    let rows = rows_from_json(input)?;
    // Validate every row first so a bad row leaves the table untouched
    if let Some(bad) = rows.iter().find(|row| row.len() != table.columns()) {
        return Err(EmitError::column_count(table.columns(), bad.len()));
    }
    for row in rows {
        table.add_row(row)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_csv_table() {
        let data = "Name,Score\nAlice,9\nBob,nan\nCarol,\n";
        let table = table_from_csv(data.as_bytes(), EmitterOptions::default()).unwrap();
        assert_eq!(table.columns(), 2);
        assert_eq!(table.header(), Some("Name & Score \\\\"));
        assert_eq!(
            table.fragment().lines(),
            &["Alice & 9 \\\\", "Bob & ~ \\\\", "Carol & ~ \\\\"]
        );
    }

    #[test]
    fn test_csv_cells_kept_verbatim() {
        let data = "id,zip,reading,big,sci\nA,02139,1.50,12345678901234567891,1e3\n";
        let table = table_from_csv(data.as_bytes(), EmitterOptions::default()).unwrap();
        assert_eq!(
            table.fragment().lines()[0],
            "A & 02139 & 1.50 & 12345678901234567891 & 1e3 \\\\"
        );
    }

    #[test]
    fn test_csv_ragged_row() {
        let data = "a,b\n1,2,3\n";
        let err = table_from_csv(data.as_bytes(), EmitterOptions::default()).unwrap_err();
        assert_eq!(
            err,
            EmitError::ColumnCount {
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn test_json_rows() {
        let rows = rows_from_json(r#"[["Alice", 9], ["Bob", null], ["Eve", 2.5]]"#).unwrap();
        assert_eq!(rows[0][1], CellValue::Integer(9));
        assert_eq!(rows[1][1], CellValue::Missing);
        assert_eq!(rows[2][1], CellValue::Float(2.5));
    }

    #[test]
    fn test_json_invalid() {
        assert!(matches!(
            rows_from_json("{\"not\": \"rows\"}"),
            Err(EmitError::Data { .. })
        ));
    }

    #[test]
    fn test_extend_from_json_all_or_nothing() {
        let mut table = Table::new(2).unwrap();
        let err = extend_from_json(&mut table, r#"[["a", 1], ["b"]]"#).unwrap_err();
        assert!(matches!(err, EmitError::ColumnCount { .. }));
        assert!(table.fragment().is_empty());

        extend_from_json(&mut table, r#"[["a", 1], ["b", true]]"#).unwrap();
        assert_eq!(table.fragment().lines()[1], "b & true \\\\");
    }
}
