//! Export of processed rows as CSV, XLSX or JSON.

use std::io::Write;
use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};
use tracing::debug;

use super::columns::{CURRENCY, USER_ID};
use super::TableFormat;
use crate::error::{Result, TableError};
use crate::models::bonus::ProcessedRow;
use crate::models::config::OutputConfig;

/// Header row of the output table.
pub fn output_headers(config: &OutputConfig) -> [&str; 6] {
    [
        USER_ID,
        CURRENCY,
        &config.deposit_header,
        &config.bet_header,
        &config.free_spin_header,
        &config.original_header,
    ]
}

/// One output record; extracted and unparsed rows leave the other side empty.
fn record(row: &ProcessedRow) -> [&str; 6] {
    [
        &row.user_id,
        &row.currency,
        row.result.deposit().unwrap_or(""),
        row.result.bet().unwrap_or(""),
        row.result.free_spin().unwrap_or(""),
        row.result.original().unwrap_or(""),
    ]
}

/// Write rows as CSV.
pub fn write_csv<W: Write>(writer: W, rows: &[ProcessedRow], config: &OutputConfig) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(output_headers(config))?;
    for row in rows {
        wtr.write_record(record(row))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write rows as a pretty-printed JSON array.
pub fn write_json<W: Write>(writer: W, rows: &[ProcessedRow]) -> Result<()> {
    serde_json::to_writer_pretty(writer, rows)?;
    Ok(())
}

/// Write rows to an XLSX workbook with a single worksheet.
pub fn write_xlsx(path: &Path, rows: &[ProcessedRow], config: &OutputConfig) -> Result<()> {
    write_xlsx_inner(path, rows, config).map_err(|e| TableError::XlsxWrite(e).into())
}

fn write_xlsx_inner(
    path: &Path,
    rows: &[ProcessedRow],
    config: &OutputConfig,
) -> std::result::Result<(), rust_xlsxwriter::XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&config.sheet_name)?;

    for (col, header) in output_headers(config).into_iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, header, &header_format)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let excel_row = (i + 1) as u32;
        for (col, value) in record(row).into_iter().enumerate() {
            if !value.is_empty() {
                worksheet.write_string(excel_row, col as u16, value)?;
            }
        }
    }

    workbook.save(path)
}

/// Write rows to a file in the given format.
pub fn write_table(
    path: &Path,
    format: TableFormat,
    rows: &[ProcessedRow],
    config: &OutputConfig,
) -> Result<()> {
    match format {
        TableFormat::Csv => write_csv(std::fs::File::create(path)?, rows, config)?,
        TableFormat::Json => write_json(std::io::BufWriter::new(std::fs::File::create(path)?), rows)?,
        TableFormat::Xlsx => write_xlsx(path, rows, config)?,
    }

    debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}
