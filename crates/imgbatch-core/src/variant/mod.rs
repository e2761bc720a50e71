//! Image variants: one descriptor per active row of the variant sheet.
//!
//! Column positions are resolved from the header row, so the order of
//! columns in the spreadsheet does not matter.

mod columns;
mod load;

pub use columns::{Column, ColumnMap};
pub use load::{load_variants, variants_from_sheet};

/// One image variant to fetch for every product code.
///
/// Field values are opaque URL fragments taken verbatim (trimmed) from the
/// configuration sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantDescriptor {
    pub prefix: String,
    pub suffix: String,
    /// `fmt` column; also picks the output extension.
    pub format: String,
    /// `qty` column.
    pub quantity: String,
    /// `wid` column.
    pub width: String,
    /// `hei` column.
    pub height: String,
    pub size: String,
    pub extend: String,
    pub column1: String,
    pub column2: String,
    /// True when the `get` column reads `1`.
    pub active: bool,
}
