//! Output directory and image files.
//!
//! Each run writes into a fresh directory: `images` if it does not exist
//! yet, otherwise `images_<random>`. Directories are never cleaned. Image
//! bodies go to a uniquely named `.part` file in the target directory and
//! are then renamed onto the final name.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Default output directory name, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "images";

/// Temporary file suffix used before the rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Creates the run's output directory and returns its path.
///
/// Uses `preferred` when it can be created; if it already exists, picks
/// `<preferred>_<random u64>` next to it so an earlier run is never
/// overwritten.
pub fn create_output_dir(preferred: &Path) -> Result<PathBuf> {
    if let Some(parent) = preferred.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let mut candidate = preferred.to_path_buf();
    loop {
        match fs::create_dir(&candidate) {
            Ok(()) => return Ok(candidate),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                candidate = alternate_dir(preferred, rand::random::<u64>());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to create output dir {}", candidate.display()))
            }
        }
    }
}

fn alternate_dir(preferred: &Path, salt: u64) -> PathBuf {
    let mut name = preferred
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.into());
    name.push(format!("_{}", salt));
    preferred.with_file_name(name)
}

/// Writes `body` to `final_path`, replacing any existing file.
///
/// Each call writes its own temp file, so concurrent writes to the same
/// name all succeed and the last rename wins.
pub fn write_image(final_path: &Path, body: &[u8]) -> io::Result<()> {
    let dir = final_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let mut tmp = tempfile::Builder::new()
        .prefix(".")
        .suffix(TEMP_SUFFIX)
        .tempfile_in(dir)?;
    tmp.write_all(body)?;
    tmp.persist(final_path).map(|_| ()).map_err(|e| e.error)
}
