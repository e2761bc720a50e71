//! Output file names for fetched images.

use crate::codes::ProductCode;
use crate::variant::VariantDescriptor;

/// `jpg` when the variant format is exactly `jpg`, otherwise `png`.
///
/// Formats such as `gif` or `webp` are saved under `.png` as well.
pub fn image_extension(format: &str) -> &'static str {
    if format == "jpg" {
        "jpg"
    } else {
        "png"
    }
}

/// `<prefix><code><suffix>.<ext>`.
///
/// Two variants sharing prefix, suffix and format map to the same name; the
/// later write wins.
pub fn image_file_name(code: &ProductCode, variant: &VariantDescriptor) -> String {
    format!(
        "{}{}{}.{}",
        variant.prefix,
        code,
        variant.suffix,
        image_extension(&variant.format)
    )
}
