//! Workbook access for the code and variant spreadsheets.
//!
//! Only the first sheet of a workbook is read. Positions are absolute
//! (row 0 is the first row of the sheet, even when the used range starts
//! further down).

use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The first sheet of a workbook, as parsed by calamine.
pub type Sheet = Range<Data>;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("cannot open workbook {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },
    #[error("workbook {} has no sheets", .0.display())]
    NoSheets(PathBuf),
    #[error("variant configuration is missing required column \"{0}\"")]
    MissingColumn(&'static str),
}

/// Opens `path` (xlsx, xlsm, xls or ods) and returns its first sheet.
pub fn open_first_sheet(path: &Path) -> Result<Sheet, SheetError> {
    let open_err = |source| SheetError::Open {
        path: path.to_path_buf(),
        source,
    };
    let mut workbook = open_workbook_auto(path).map_err(open_err)?;
    match workbook.worksheet_range_at(0) {
        Some(range) => range.map_err(open_err),
        None => Err(SheetError::NoSheets(path.to_path_buf())),
    }
}

/// Number of rows up to and including the last used one.
pub fn row_count(sheet: &Sheet) -> u32 {
    sheet.end().map_or(0, |(row, _)| row + 1)
}

/// Number of columns up to and including the last used one.
pub fn column_count(sheet: &Sheet) -> u32 {
    sheet.end().map_or(0, |(_, col)| col + 1)
}

/// Text of the cell at (`row`, `col`), trimmed. Missing cells are `""`.
pub fn cell_text(sheet: &Sheet, row: u32, col: u32) -> String {
    sheet
        .get_value((row, col))
        .map(data_text)
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Renders a cell the way a user reads it in the spreadsheet: whole floats
/// lose their `.0`, errors read as empty.
fn data_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Builds an in-memory sheet from string rows (tests only).
#[cfg(test)]
pub(crate) fn sheet_from_rows(rows: &[&[&str]]) -> Sheet {
    let height = rows.len() as u32;
    let width = rows.iter().map(|r| r.len()).max().unwrap_or(0) as u32;
    if height == 0 || width == 0 {
        return Range::empty();
    }
    let mut sheet = Range::new((0, 0), (height - 1, width - 1));
    for (r, cells) in rows.iter().enumerate() {
        for (c, value) in cells.iter().enumerate() {
            if !value.is_empty() {
                sheet.set_value((r as u32, c as u32), Data::String((*value).to_string()));
            }
        }
    }
    sheet
}
