//! Header-driven column lookup for the variant sheet.

use crate::sheet::{cell_text, column_count, Sheet, SheetError};

/// Columns the variant sheet header must contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    Category,
    Prefix,
    Suffix,
    Get,
    Desc,
    Fmt,
    Qty,
    Wid,
    Hei,
    Size,
    Extend,
    Column1,
    Column2,
}

impl Column {
    pub const ALL: [Column; 14] = [
        Column::Id,
        Column::Category,
        Column::Prefix,
        Column::Suffix,
        Column::Get,
        Column::Desc,
        Column::Fmt,
        Column::Qty,
        Column::Wid,
        Column::Hei,
        Column::Size,
        Column::Extend,
        Column::Column1,
        Column::Column2,
    ];

    /// Header text, matched exactly (case-sensitive) after trimming.
    pub fn name(self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::Category => "category",
            Column::Prefix => "prefix",
            Column::Suffix => "suffix",
            Column::Get => "get",
            Column::Desc => "desc",
            Column::Fmt => "fmt",
            Column::Qty => "qty",
            Column::Wid => "wid",
            Column::Hei => "hei",
            Column::Size => "size",
            Column::Extend => "extend",
            Column::Column1 => "column1",
            Column::Column2 => "column2",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Sheet column index for every [`Column`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    indices: [u32; 14],
}

impl ColumnMap {
    /// Resolves every required column from row 0 of `sheet`.
    ///
    /// The leftmost matching header cell wins. Fails on the first required
    /// column (in [`Column::ALL`] order) that has no header cell.
    pub fn from_header(sheet: &Sheet) -> Result<Self, SheetError> {
        let header: Vec<String> = (0..column_count(sheet))
            .map(|col| cell_text(sheet, 0, col))
            .collect();

        let mut indices = [0u32; 14];
        for column in Column::ALL {
            let pos = header
                .iter()
                .position(|cell| cell == column.name())
                .ok_or(SheetError::MissingColumn(column.name()))?;
            indices[column.slot()] = pos as u32;
        }
        Ok(Self { indices })
    }

    pub fn get(&self, column: Column) -> u32 {
        self.indices[column.slot()]
    }
}
