//! Spreadsheet readers: Excel/OpenDocument workbooks and CSV files.
//!
//! The first worksheet is read; its first row is the header. Fully empty
//! rows are dropped, everything else is kept in file order.

use crate::table::Table;
use calamine::{open_workbook_auto, Data, Reader};
use faqbot_core::{AppError, AppResult};
use std::path::Path;

/// Spreadsheet format classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Workbook,
    Csv,
    Unknown,
}

impl SheetFormat {
    /// Detect format from file extension.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("xlsx") | Some("xlsm") | Some("xlsb") | Some("xls") | Some("ods") => {
                Self::Workbook
            }
            Some("csv") => Self::Csv,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Workbook => "workbook",
            Self::Csv => "csv",
            Self::Unknown => "unknown",
        }
    }
}

/// Read a spreadsheet into a [`Table`], picking the reader by extension.
pub fn read_table(path: &Path) -> AppResult<Table> {
    let format = SheetFormat::from_path(path);
    tracing::debug!("Reading {:?} as {}", path, format.as_str());

    let table = match format {
        SheetFormat::Workbook => read_workbook(path)?,
        SheetFormat::Csv => read_csv(path)?,
        SheetFormat::Unknown => {
            return Err(AppError::Import(format!(
                "Unsupported file type {:?}. Use .xlsx, .xls, .ods or .csv",
                path
            )))
        }
    };

    tracing::debug!(
        "Read {} rows with columns {:?}",
        table.len(),
        table.headers
    );
    Ok(table)
}

fn read_workbook(path: &Path) -> AppResult<Table> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| AppError::Import(format!("Failed to open {:?}: {}", path, e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::Import(format!("{:?} contains no worksheets", path)))?
        .map_err(|e| AppError::Import(format!("Failed to read worksheet: {}", e)))?;

    let mut rows = range.rows();
    let headers = match rows.next() {
        Some(header) => header
            .iter()
            .map(|cell| cell_text(cell).unwrap_or_default())
            .collect(),
        None => return Ok(Table::default()),
    };

    let mut table = Table::new(headers);
    for row in rows {
        push_if_not_blank(&mut table, row.iter().map(cell_text).collect());
    }

    Ok(table)
}

fn read_csv(path: &Path) -> AppResult<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| AppError::Import(format!("Failed to open {:?}: {}", path, e)))?;

    let headers = reader
        .headers()
        .map_err(|e| AppError::Import(format!("Failed to read CSV header: {}", e)))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut table = Table::new(headers);
    for record in reader.records() {
        let record =
            record.map_err(|e| AppError::Import(format!("Failed to read CSV row: {}", e)))?;
        let cells = record
            .iter()
            .map(|field| (!field.is_empty()).then(|| field.to_string()))
            .collect();
        push_if_not_blank(&mut table, cells);
    }

    Ok(table)
}

fn push_if_not_blank(table: &mut Table, cells: Vec<Option<String>>) {
    if cells.iter().any(Option::is_some) {
        table.rows.push(cells);
    }
}

/// Text of a workbook cell; numbers and booleans are stringified.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(f.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}
