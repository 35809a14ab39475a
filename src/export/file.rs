//! Saving exported images to disk.

use super::types::ExportError;
use crate::config::ExportConfig;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the export action writes images.
#[derive(Debug, Clone)]
pub struct FileSaveConfig {
    /// Directory to save exports to.
    pub save_directory: PathBuf,
    /// Filename template (supports chrono format specifiers).
    pub filename_template: String,
    /// Image format extension.
    pub format: String,
}

impl From<&ExportConfig> for FileSaveConfig {
    fn from(config: &ExportConfig) -> Self {
        Self {
            save_directory: expand_tilde(&config.directory),
            filename_template: config.filename_template.clone(),
            format: "png".to_string(),
        }
    }
}

/// Generate a filename based on the template and current time.
pub fn generate_filename(template: &str, format: &str) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, format)
}

/// First path in `directory` for `filename` that does not exist yet.
///
/// Collisions get a numeric suffix before the extension: `sketch.png`,
/// `sketch_1.png`, `sketch_2.png`, ...
pub fn next_free_path(directory: &Path, filename: &str) -> PathBuf {
    let candidate = directory.join(filename);
    if !candidate.exists() {
        return candidate;
    }

    let (stem, extension) = match filename.rsplit_once('.') {
        Some((stem, extension)) if !stem.is_empty() => (stem, Some(extension)),
        _ => (filename, None),
    };
    (1u32..)
        .map(|n| match extension {
            Some(extension) => directory.join(format!("{stem}_{n}.{extension}")),
            None => directory.join(format!("{stem}_{n}")),
        })
        .find(|path| !path.exists())
        .unwrap_or(candidate)
}

/// Ensure the save directory exists, creating it if necessary.
///
/// Returns the canonicalized path when possible.
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

/// Save PNG bytes into the configured directory under a timestamped name.
///
/// Never replaces an earlier export: if the name is taken (two exports in the
/// same second), a numeric suffix is added.
///
/// # Returns
/// Path to the saved file
pub fn save_png(image_data: &[u8], config: &FileSaveConfig) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&config.save_directory)?;
    let filename = generate_filename(&config.filename_template, &config.format);
    let file_path = next_free_path(&directory, &filename);

    save_png_to(image_data, &file_path)?;
    Ok(file_path)
}

/// Save PNG bytes to an explicit path, replacing any existing file.
pub fn save_png_to(image_data: &[u8], path: &Path) -> Result<(), ExportError> {
    log::info!(
        "Saving export to: {} ({} bytes)",
        path.display(),
        image_data.len()
    );

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        ensure_directory_exists(parent)?;
    }

    fs::write(path, image_data)?;

    let written_size = fs::metadata(path)?.len();
    log::debug!("File written: {} bytes", written_size);

    // User read/write only
    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, Permissions::from_mode(0o600))?;
    }

    Ok(())
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
