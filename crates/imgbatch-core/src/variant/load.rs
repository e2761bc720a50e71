//! Variant sheet loading.

use std::path::Path;

use super::columns::{Column, ColumnMap};
use super::VariantDescriptor;
use crate::sheet::{cell_text, open_first_sheet, row_count, Sheet, SheetError};

/// Value of the `get` column that marks a row active.
const ACTIVE_FLAG: &str = "1";

/// Opens the variant workbook at `path` and loads its active variants.
pub fn load_variants(path: &Path) -> Result<Vec<VariantDescriptor>, SheetError> {
    let sheet = open_first_sheet(path)?;
    variants_from_sheet(&sheet)
}

/// Loads active variants from an already opened sheet, in row order.
///
/// Rows whose `get` cell is anything other than `1` (after trimming) are
/// skipped without comment.
pub fn variants_from_sheet(sheet: &Sheet) -> Result<Vec<VariantDescriptor>, SheetError> {
    let columns = ColumnMap::from_header(sheet)?;
    let field = |row: u32, column: Column| cell_text(sheet, row, columns.get(column));

    let variants = (1..row_count(sheet))
        .filter(|&row| field(row, Column::Get) == ACTIVE_FLAG)
        .map(|row| VariantDescriptor {
            prefix: field(row, Column::Prefix),
            suffix: field(row, Column::Suffix),
            format: field(row, Column::Fmt),
            quantity: field(row, Column::Qty),
            width: field(row, Column::Wid),
            height: field(row, Column::Hei),
            size: field(row, Column::Size),
            extend: field(row, Column::Extend),
            column1: field(row, Column::Column1),
            column2: field(row, Column::Column2),
            active: true,
        })
        .collect();
    Ok(variants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::sheet_from_rows;

    const HEADER: [&str; 14] = [
        "id", "category", "prefix", "suffix", "get", "desc", "fmt", "qty", "wid", "hei", "size",
        "extend", "column1", "column2",
    ];

    fn row<'a>(prefix: &'a str, get: &'a str, fmt: &'a str) -> [&'a str; 14] {
        ["7", "shoes", prefix, "_BC", get, "back view", fmt, "80", "1000", "1200", "Z", "", "op", ""]
    }

    #[test]
    fn only_rows_with_get_one_are_loaded() {
        let rows = [
            row("A", "1", "jpg"),
            row("B", "0", "jpg"),
            row("C", " 1 ", "png"),
            row("D", "", "jpg"),
            row("E", "yes", "jpg"),
            row("F", "11", "jpg"),
        ];
        let mut grid: Vec<&[&str]> = vec![&HEADER];
        grid.extend(rows.iter().map(|r| &r[..]));
        let variants = variants_from_sheet(&sheet_from_rows(&grid)).unwrap();
        let prefixes: Vec<&str> = variants.iter().map(|v| v.prefix.as_str()).collect();
        assert_eq!(prefixes, ["A", "C"]);
        assert!(variants.iter().all(|v| v.active));
    }

    #[test]
    fn fields_are_trimmed_and_mapped() {
        let data = [
            "1", "cat", " AB ", " _S ", "1", "d", " jpg", "1 ", "100", "200", " Z ", "e=1", "c=1",
            "c=2",
        ];
        let variants = variants_from_sheet(&sheet_from_rows(&[&HEADER, &data])).unwrap();
        assert_eq!(
            variants,
            vec![VariantDescriptor {
                prefix: "AB".into(),
                suffix: "_S".into(),
                format: "jpg".into(),
                quantity: "1".into(),
                width: "100".into(),
                height: "200".into(),
                size: "Z".into(),
                extend: "e=1".into(),
                column1: "c=1".into(),
                column2: "c=2".into(),
                active: true,
            }]
        );
    }

    #[test]
    fn missing_cells_become_empty_strings() {
        let header = ["get", "prefix", "id", "category", "suffix", "desc", "fmt", "qty", "wid",
            "hei", "size", "extend", "column1", "column2"];
        let variants = variants_from_sheet(&sheet_from_rows(&[&header, &["1", "P"]])).unwrap();
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].prefix, "P");
        assert_eq!(variants[0].format, "");
        assert_eq!(variants[0].column2, "");
    }

    #[test]
    fn header_only_sheet_yields_no_variants() {
        let variants = variants_from_sheet(&sheet_from_rows(&[&HEADER])).unwrap();
        assert!(variants.is_empty());
    }

    #[test]
    fn missing_header_column_aborts_loading() {
        let err = variants_from_sheet(&sheet_from_rows(&[&HEADER[..13]])).unwrap_err();
        assert!(matches!(err, SheetError::MissingColumn("column2")));
    }
}
