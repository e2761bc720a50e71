//! Spreadsheet fixtures written with rust_xlsxwriter.

use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};

pub const VARIANT_HEADER: [&str; 14] = [
    "id", "category", "prefix", "suffix", "get", "desc", "fmt", "qty", "wid", "hei", "size",
    "extend", "column1", "column2",
];

/// Writes `rows` to the first sheet of a new workbook at `dir/name`.
/// Empty strings leave the cell blank.
pub fn write_workbook(dir: &Path, name: &str, rows: &[Vec<&str>]) -> PathBuf {
    let path = dir.join(name);
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (r, cells) in rows.iter().enumerate() {
        for (c, value) in cells.iter().enumerate() {
            if !value.is_empty() {
                sheet.write_string(r as u32, c as u16, *value).unwrap();
            }
        }
    }
    workbook.save(&path).unwrap();
    path
}

/// Code workbook: header "code" in row 0, then one code per row.
pub fn write_codes(dir: &Path, codes: &[&str]) -> PathBuf {
    let mut rows = vec![vec!["code"]];
    rows.extend(codes.iter().map(|c| vec![*c]));
    write_workbook(dir, "codes.xlsx", &rows)
}

/// One variant row in `VARIANT_HEADER` order.
pub fn variant_row<'a>(prefix: &'a str, suffix: &'a str, get: &'a str, fmt: &'a str) -> Vec<&'a str> {
    vec!["1", "cat", prefix, suffix, get, "desc", fmt, "1", "100", "100", "Z", "", "", ""]
}

/// Variant workbook with the standard header and `rows`.
pub fn write_variants(dir: &Path, rows: &[Vec<&str>]) -> PathBuf {
    let mut all = vec![VARIANT_HEADER.to_vec()];
    all.extend(rows.iter().cloned());
    write_workbook(dir, "images.xlsx", &all)
}
