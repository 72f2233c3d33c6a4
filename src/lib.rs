//! PII Prompt Shield store assets
//!
//! Procedurally renders the Chrome Web Store listing images for the PII
//! Prompt Shield extension: three 1280x800 screenshots and three
//! promotional tiles, plus a `README.txt` listing them.
//!
//! Each image is a [`scenes::Scene`]: a gradient background and a display
//! list of primitive paint commands at fixed coordinates. The
//! [`rendering`] module executes display lists on an RGBA canvas, resolving
//! text through a chain of candidate fonts with a built-in bitmap fallback.
//!
//! # Example
//!
//! ```no_run
//! use shield_assets::{AssetGenerator, GeneratorConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GeneratorConfig::for_root("path/to/extension");
//! let report = AssetGenerator::new(config)?.generate()?;
//! for asset in &report.assets {
//!     println!("{} {}x{}", asset.path.display(), asset.width, asset.height);
//! }
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

pub mod error;
pub use error::{Error, Result};

pub mod generator;
pub mod manifest;
pub mod rendering;
pub mod scenes;

pub use generator::{AssetGenerator, GeneratedAsset, GenerationReport};
pub use rendering::{FontBook, FontSearch, Screenshot};
pub use scenes::{AssetKind, Branding, Category, Scene};

/// Output directory, relative to the extension root.
pub const DEFAULT_OUT_DIR: &str = "store-assets";
/// Branding icon, relative to the extension root.
pub const DEFAULT_ICON: &str = "icons/icon-128.png";

/// Canvas dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Configuration for the asset generator
///
/// The defaults mirror running the generator from the extension root:
/// assets go to `store-assets/`, the icon is read from
/// `icons/icon-128.png` when present, and fonts are searched in the
/// platform font directories.
///
/// # Examples
///
/// ```
/// let cfg = shield_assets::GeneratorConfig::default();
/// assert!(cfg.out_dir.ends_with("store-assets"));
/// assert_eq!(cfg.selected_kinds().len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory receiving `screenshots/`, `promotional/` and `README.txt`
    pub out_dir: PathBuf,
    /// Optional product icon drawn on the promotional tiles
    pub icon_path: PathBuf,
    /// Font candidate chains and search directories
    pub fonts: FontSearch,
    /// Restrict generation to these assets (empty means all)
    pub only: Vec<AssetKind>,
    /// Also write `manifest.json` with per-file SHA-256 digests
    pub write_digest_manifest: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::for_root(".")
    }
}

impl GeneratorConfig {
    /// Default layout below an extension checkout at `root`.
    pub fn for_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            out_dir: root.join(DEFAULT_OUT_DIR),
            icon_path: root.join(DEFAULT_ICON),
            fonts: FontSearch::default(),
            only: Vec::new(),
            write_digest_manifest: false,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.out_dir.as_os_str().is_empty() {
            return Err(Error::Config("output directory is empty".into()));
        }
        Ok(())
    }

    /// Assets to generate, in catalogue order.
    pub fn selected_kinds(&self) -> Vec<AssetKind> {
        AssetKind::ALL
            .into_iter()
            .filter(|k| self.only.is_empty() || self.only.contains(k))
            .collect()
    }
}
