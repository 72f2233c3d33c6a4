//! Manifests written next to the generated images
//!
//! `README.txt` is the human-readable listing that ships with the assets.
//! `manifest.json` is optional and records a SHA-256 per file so changed
//! renders are easy to spot in review.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::scenes::{AssetKind, Category};
use crate::{Error, Result, Size};

pub const NOTES_FILE: &str = "README.txt";
pub const DIGEST_FILE: &str = "manifest.json";

/// Text of `README.txt` listing `kinds`, grouped by category.
pub fn notes_text(kinds: &[AssetKind]) -> String {
    let of = |category: Category| -> Vec<&AssetKind> {
        kinds.iter().filter(|k| k.category() == category).collect()
    };
    let screenshots = of(Category::Screenshot);
    let promotional = of(Category::Promotional);

    let mut lines = vec![
        "Generated store assets for Chrome Web Store listing.".to_string(),
        String::new(),
    ];
    if !screenshots.is_empty() {
        let Size { width, height } = screenshots[0].size();
        lines.push(format!("Screenshots ({width}x{height}):"));
        lines.extend(screenshots.iter().map(|k| format!("- {}", k.relative_path())));
        lines.push(String::new());
    }
    if !promotional.is_empty() {
        lines.push("Promotional assets:".to_string());
        lines.extend(promotional.iter().map(|k| format!("- {}", k.relative_path())));
        lines.push(String::new());
    }
    lines.push("These are polished mockups for store listing use.".to_string());
    lines.join("\n")
}

pub fn write_notes(path: &Path, kinds: &[AssetKind]) -> Result<()> {
    fs::write(path, notes_text(kinds)).map_err(|e| Error::io(path, e))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigestEntry {
    pub name: String,
    pub path: String,
    pub category: String,
    pub width: u32,
    pub height: u32,
    pub sha256: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigestManifest {
    pub product: String,
    pub assets: Vec<DigestEntry>,
}

impl DigestManifest {
    pub fn new(product: &str) -> Self {
        Self {
            product: product.to_string(),
            assets: Vec::new(),
        }
    }

    pub fn record(&mut self, kind: AssetKind, sha256: String) {
        let Size { width, height } = kind.size();
        self.assets.push(DigestEntry {
            name: kind.name().to_string(),
            path: kind.relative_path(),
            category: kind.category().dir_name().to_string(),
            width,
            height,
            sha256,
        });
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| Error::io(path, e))
    }
}
