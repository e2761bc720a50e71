//! URL templating and output file naming.
//!
//! Both are pure functions of (product code, variant descriptor).

mod filename;
mod template;

pub use filename::{image_extension, image_file_name};
pub use template::{Placeholder, TemplateError, UrlTemplate, DEFAULT_URL_TEMPLATE};
