//! Saving the canvas as an image file.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Filename used when nothing else is configured.
pub const DEFAULT_FILENAME: &str = "painting.png";

/// Errors that can occur while exporting the canvas.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to save image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode image: {0}")]
    Encode(String),
}

/// Where an exported image is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTarget {
    /// Directory to save the image to.
    pub directory: PathBuf,
    /// File name, including the `.png` extension.
    pub filename: String,
}

impl Default for ExportTarget {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            filename: DEFAULT_FILENAME.to_string(),
        }
    }
}

impl ExportTarget {
    /// Builds a target from an explicit output path.
    ///
    /// A path naming an existing directory, ending in a separator, or without
    /// a file name (e.g. `..`) is treated as the directory and keeps the
    /// default filename.
    pub fn from_path(path: &Path) -> Self {
        let names_directory = path.is_dir()
            || path
                .as_os_str()
                .to_string_lossy()
                .ends_with(std::path::is_separator);
        match path.file_name().filter(|_| !names_directory) {
            Some(name) => Self {
                directory: path
                    .parent()
                    .filter(|parent| !parent.as_os_str().is_empty())
                    .map_or_else(|| PathBuf::from("."), Path::to_path_buf),
                filename: name.to_string_lossy().into_owned(),
            },
            None => Self {
                directory: path.to_path_buf(),
                filename: DEFAULT_FILENAME.to_string(),
            },
        }
    }

    /// Full path of the exported file.
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }
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

/// Write PNG bytes to the export target, creating the directory if needed.
///
/// # Returns
/// Path to the saved file
pub fn save_png(image_data: &[u8], target: &ExportTarget) -> Result<PathBuf, ExportError> {
    if !target.directory.exists() {
        log::info!("Creating export directory: {}", target.directory.display());
        fs::create_dir_all(&target.directory)?;
    }

    let file_path = target.path();
    log::info!(
        "Saving painting to: {} ({} bytes)",
        file_path.display(),
        image_data.len()
    );

    fs::write(&file_path, image_data)?;

    let written_size = fs::metadata(&file_path)?.len();
    log::debug!("File written: {} bytes", written_size);

    Ok(file_path)
}
