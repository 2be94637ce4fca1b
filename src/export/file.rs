//! Filename generation and file writing for exports.

use super::ExportError;
use chrono::Local;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `format` - File extension (e.g., "png")
///
/// Fails with [`ExportError::Template`] when the template holds an unknown
/// specifier.
pub fn generate_filename(template: &str, format: &str) -> Result<String, ExportError> {
    let mut filename = String::new();
    write!(filename, "{}", Local::now().format(template))
        .map_err(|_| ExportError::Template(template.to_string()))?;
    Ok(format!("{}.{}", filename, format))
}

/// Ensure the export directory exists, creating it if necessary.
///
/// Returns the canonicalized directory path.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Picks a path in `directory` for `filename` that does not exist yet.
///
/// `sketch.png` becomes `sketch_1.png`, `sketch_2.png`, ... on collisions.
fn unique_path(directory: &Path, filename: &str) -> PathBuf {
    let candidate = directory.join(filename);
    if !candidate.exists() {
        return candidate;
    }

    let (stem, extension) = match filename.rsplit_once('.') {
        Some((stem, ext)) => (stem, format!(".{}", ext)),
        None => (filename, String::new()),
    };
    (1..)
        .map(|n| directory.join(format!("{}_{}{}", stem, n, extension)))
        .find(|path| !path.exists())
        .unwrap_or(candidate)
}

/// Writes PNG bytes into `directory` using the filename template.
///
/// Returns the path of the saved file.
pub fn save_png(
    image_data: &[u8],
    directory: &Path,
    filename_template: &str,
) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(directory)?;
    let filename = generate_filename(filename_template, "png")?;
    let file_path = unique_path(&directory, &filename);

    log::info!(
        "Saving export to: {} ({} bytes)",
        file_path.display(),
        image_data.len()
    );

    fs::write(&file_path, image_data)?;

    log::info!("Export saved successfully: {}", file_path.display());
    Ok(file_path)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
