//! Product codes from column 0 of the code sheet.

use std::fmt;
use std::path::Path;

use crate::sheet::{cell_text, open_first_sheet, row_count, Sheet, SheetError};

/// Default first data row (row 0 is the header).
pub const DEFAULT_START_ROW: u32 = 1;

/// A trimmed, non-empty product code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductCode(String);

impl ProductCode {
    /// Trims `raw`; returns `None` when nothing is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of the code sheet. `code` is `None` for a blank cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeRow {
    pub row: u32,
    pub code: Option<ProductCode>,
}

/// Rows from `start_row` to the last used row, in order.
pub fn code_rows(sheet: &Sheet, start_row: u32) -> impl Iterator<Item = CodeRow> + '_ {
    (start_row..row_count(sheet)).map(move |row| CodeRow {
        row,
        code: ProductCode::parse(&cell_text(sheet, row, 0)),
    })
}

/// Opens the code workbook at `path` and collects its rows from `start_row`.
pub fn load_code_rows(path: &Path, start_row: u32) -> Result<Vec<CodeRow>, SheetError> {
    let sheet = open_first_sheet(path)?;
    Ok(code_rows(&sheet, start_row).collect())
}
