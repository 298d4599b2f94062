//! Spreadsheet export of the full results table.
//!
//! Column headers match the on-screen table; the file lands in the user's
//! download directory (or the working directory when none exists).

use std::{env, fs, io, path::PathBuf};

use rust_xlsxwriter::{Workbook, XlsxError};
use thiserror::Error;

use crate::domain::PriceRow;

pub const EXPORT_FILE_NAME: &str = "precios_albion_actualizados.xlsx";

const SHEET_HEADERS: [&str; 5] = [
    "Ciudad",
    "Ítem",
    "Precio Venta (jugadores)",
    "Precio Compra (jugadores)",
    "Ganancia Potencial",
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to build spreadsheet: {0}")]
    Workbook(#[from] XlsxError),
    #[error("failed to write spreadsheet: {0}")]
    Io(#[from] io::Error),
}

/// Serializes every row (the full, unsummarized table) into an xlsx buffer.
pub fn build_workbook(rows: &[PriceRow]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, header) in SHEET_HEADERS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }
    for (index, row) in rows.iter().enumerate() {
        let line = (index + 1) as u32;
        sheet.write_string(line, 0, row.city.as_str())?;
        sheet.write_string(line, 1, row.item_name.as_str())?;
        sheet.write_number(line, 2, row.sell_price_min as f64)?;
        sheet.write_number(line, 3, row.buy_price_max as f64)?;
        sheet.write_number(line, 4, row.potential_profit as f64)?;
    }

    Ok(workbook.save_to_buffer()?)
}

/// Builds the workbook and writes it under the fixed export name. Returns the
/// path the file was written to.
pub fn save_table(rows: &[PriceRow]) -> Result<PathBuf, ExportError> {
    let bytes = build_workbook(rows)?;
    let path = export_dir()?.join(EXPORT_FILE_NAME);
    fs::write(&path, bytes)?;
    Ok(path)
}

fn export_dir() -> Result<PathBuf, io::Error> {
    match dirs::download_dir() {
        Some(dir) => Ok(dir),
        None => env::current_dir(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workbook_buffer_is_a_zip_archive() {
        let rows = vec![PriceRow::new(
            "Martlock".into(),
            "T4_ORE".into(),
            "Mineral T4".into(),
            100,
            40,
        )];
        let bytes = build_workbook(&rows).expect("workbook");
        // xlsx is a zip container; check the magic instead of unpacking.
        assert_eq!(&bytes[..4], b"PK\x03\x04");
    }

    #[test]
    fn test_empty_table_still_serializes_headers() {
        let bytes = build_workbook(&[]).expect("workbook");
        assert!(!bytes.is_empty());
    }
}
