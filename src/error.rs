//! Error types for the asset generator

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or writing store assets
///
/// Font problems never surface here: the font book falls back to the
/// built-in bitmap face instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem failure while creating directories or writing outputs
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The branding icon exists but could not be decoded
    #[error("Failed to load icon {}: {source}", path.display())]
    Icon {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// PNG encoding or other image-crate failure
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Failed to render a scene
    #[error("Rendering failed: {0}")]
    Render(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Failed to serialize the digest manifest
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Attach the offending path to an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_mentions_path() {
        let err = Error::io(
            "store-assets/README.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("store-assets/README.txt"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn config_error_display() {
        let err = Error::Config("output directory is empty".into());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: output directory is empty"
        );
    }
}
