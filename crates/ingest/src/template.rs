//! Downloadable import template: the two required columns and one example row.

use crate::import::{QUESTION_COLUMN, RESPONSE_COLUMN};
use crate::reader::SheetFormat;
use faqbot_core::{AppError, AppResult};
use rust_xlsxwriter::Workbook;
use std::path::Path;

pub const EXAMPLE_QUESTION: &str = "Example question";
pub const EXAMPLE_RESPONSE: &str = "Example response";

/// Write the template to `path`: CSV for `.csv`, otherwise an xlsx workbook.
pub fn write_template(path: &Path) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    match SheetFormat::from_path(path) {
        SheetFormat::Csv => write_csv(path)?,
        _ => write_xlsx(path)?,
    }

    tracing::info!("Wrote import template to {:?}", path);
    Ok(())
}

fn write_xlsx(path: &Path) -> AppResult<()> {
    let xlsx_err = |e: rust_xlsxwriter::XlsxError| {
        AppError::Import(format!("Failed to write template {:?}: {}", path, e))
    };

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, QUESTION_COLUMN).map_err(xlsx_err)?;
    sheet.write_string(0, 1, RESPONSE_COLUMN).map_err(xlsx_err)?;
    sheet.write_string(1, 0, EXAMPLE_QUESTION).map_err(xlsx_err)?;
    sheet.write_string(1, 1, EXAMPLE_RESPONSE).map_err(xlsx_err)?;
    workbook.save(path).map_err(xlsx_err)?;
    Ok(())
}

fn write_csv(path: &Path) -> AppResult<()> {
    let csv_err =
        |e: csv::Error| AppError::Import(format!("Failed to write template {:?}: {}", path, e));

    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;
    writer
        .write_record([QUESTION_COLUMN, RESPONSE_COLUMN])
        .map_err(csv_err)?;
    writer
        .write_record([EXAMPLE_QUESTION, EXAMPLE_RESPONSE])
        .map_err(csv_err)?;
    writer.flush()?;
    Ok(())
}
