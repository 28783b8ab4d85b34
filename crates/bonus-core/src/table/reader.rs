//! Loading bonus rows from CSV files and spreadsheets.

use std::io::Read;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use tracing::debug;

use super::columns::ColumnIndex;
use crate::error::{Result, TableError};
use crate::models::bonus::BonusRow;

/// Spreadsheet extensions handled by the workbook reader.
const WORKBOOK_EXTENSIONS: [&str; 4] = ["xlsx", "xlsm", "xls", "ods"];

/// Read bonus rows from a file, picking the reader by extension.
pub fn read_rows(path: &Path) -> Result<Vec<BonusRow>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let rows = match extension.as_str() {
        "csv" => read_csv(std::fs::File::open(path)?)?,
        ext if WORKBOOK_EXTENSIONS.contains(&ext) => read_workbook(path)?,
        _ => return Err(TableError::UnsupportedFormat(extension).into()),
    };

    debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Read bonus rows from CSV data with a header row.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<BonusRow>> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let index = ColumnIndex::from_headers(rdr.headers()?)?;

    let mut rows = Vec::new();
    for record in rdr.records() {
        let cells: Vec<String> = record?.iter().map(str::to_string).collect();
        rows.push(index.row(&cells));
    }

    Ok(rows)
}

/// Read bonus rows from the first worksheet of a spreadsheet.
///
/// Rows with no content at all are skipped.
pub fn read_workbook(path: &Path) -> Result<Vec<BonusRow>> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| TableError::Workbook(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(TableError::Empty)?
        .map_err(|e| TableError::Workbook(e.to_string()))?;

    let mut sheet_rows = range.rows();
    let header: Vec<String> = sheet_rows
        .next()
        .ok_or(TableError::Empty)?
        .iter()
        .map(cell_text)
        .collect();
    let index = ColumnIndex::from_headers(&header)?;

    let rows = sheet_rows
        .map(|cells| cells.iter().map(cell_text).collect::<Vec<_>>())
        .filter(|cells| cells.iter().any(|c| !c.is_empty()))
        .map(|cells| index.row(&cells))
        .collect();

    Ok(rows)
}

/// Render a spreadsheet cell as text.
///
/// Integral floats lose the trailing `.0` so numeric ids read as typed.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        other => other.to_string(),
    }
}
