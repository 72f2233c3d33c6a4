//! Scene catalogue: the six store-listing images and how to paint them
//!
//! Each [`AssetKind`] knows where its file lives, how large it is, and how to
//! build the [`DisplayList`] that paints it. Building is pure; nothing here
//! touches the filesystem except [`Branding::load`].

pub mod chrome;
pub mod promo;
pub mod screenshots;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::RgbaImage;
use log::debug;

use crate::rendering::DisplayList;
use crate::{Error, Result, Size};

pub const PRODUCT_NAME: &str = "PII Prompt Shield";

pub const SCREENSHOT_SIZE: Size = Size::new(1280, 800);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum AssetKind {
    BlockReview,
    Redaction,
    Settings,
    SmallTile,
    LargeTile,
    Marquee,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Screenshot,
    Promotional,
}

impl Category {
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Screenshot => "screenshots",
            Category::Promotional => "promotional",
        }
    }
}

impl AssetKind {
    /// Catalogue order; also the order files are generated and listed in.
    pub const ALL: [AssetKind; 6] = [
        AssetKind::BlockReview,
        AssetKind::Redaction,
        AssetKind::Settings,
        AssetKind::SmallTile,
        AssetKind::LargeTile,
        AssetKind::Marquee,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AssetKind::BlockReview => "block-review",
            AssetKind::Redaction => "redaction",
            AssetKind::Settings => "settings",
            AssetKind::SmallTile => "small-tile",
            AssetKind::LargeTile => "large-tile",
            AssetKind::Marquee => "marquee",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            AssetKind::BlockReview | AssetKind::Redaction | AssetKind::Settings => Category::Screenshot,
            AssetKind::SmallTile | AssetKind::LargeTile | AssetKind::Marquee => Category::Promotional,
        }
    }

    pub fn size(&self) -> Size {
        match self {
            AssetKind::BlockReview | AssetKind::Redaction | AssetKind::Settings => SCREENSHOT_SIZE,
            AssetKind::SmallTile => Size::new(440, 280),
            AssetKind::LargeTile => Size::new(920, 680),
            AssetKind::Marquee => Size::new(1400, 560),
        }
    }

    /// e.g. `01-block-review-1280x800.png` or `small-tile-440x280.png`.
    pub fn file_name(&self) -> String {
        let Size { width, height } = self.size();
        let stem = match self.category() {
            Category::Screenshot => {
                let position = Self::ALL
                    .iter()
                    .filter(|k| k.category() == Category::Screenshot)
                    .position(|k| k == self)
                    .unwrap_or(0);
                format!("{:02}-{}", position + 1, self.name())
            }
            Category::Promotional => self.name().to_string(),
        };
        format!("{stem}-{width}x{height}.png")
    }

    /// Path below the output directory, always `/`-separated.
    pub fn relative_path(&self) -> String {
        format!("{}/{}", self.category().dir_name(), self.file_name())
    }

    pub fn output_path(&self, out_dir: &Path) -> PathBuf {
        out_dir.join(self.category().dir_name()).join(self.file_name())
    }

    pub fn build(&self, branding: &Branding) -> Scene {
        let display_list = match self {
            AssetKind::BlockReview => screenshots::block_review(),
            AssetKind::Redaction => screenshots::redaction(),
            AssetKind::Settings => screenshots::settings(),
            AssetKind::SmallTile => promo::small_tile(branding),
            AssetKind::LargeTile => promo::large_tile(branding),
            AssetKind::Marquee => promo::marquee(branding),
        };
        Scene {
            kind: *self,
            size: self.size(),
            display_list,
        }
    }
}

/// One output image, ready for the rasterizer.
#[derive(Debug, Clone)]
pub struct Scene {
    pub kind: AssetKind,
    pub size: Size,
    pub display_list: DisplayList,
}

/// Optional product icon shown on the promotional tiles.
#[derive(Debug, Clone, Default)]
pub struct Branding {
    icon: Option<Arc<RgbaImage>>,
}

impl Branding {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_icon(icon: RgbaImage) -> Self {
        Self {
            icon: Some(Arc::new(icon)),
        }
    }

    /// Load the icon if the file exists. A missing icon is not an error; an
    /// unreadable one is.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("no icon at {}; promotional tiles use the fallback badge", path.display());
            return Ok(Self::none());
        }
        let icon = image::open(path)
            .map_err(|source| Error::Icon {
                path: path.to_path_buf(),
                source,
            })?
            .into_rgba8();
        debug!("loaded icon {} ({}x{})", path.display(), icon.width(), icon.height());
        Ok(Self::with_icon(icon))
    }

    pub fn icon(&self) -> Option<&Arc<RgbaImage>> {
        self.icon.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn file_names_follow_listing_convention() {
        let names: Vec<String> = AssetKind::ALL.iter().map(|k| k.relative_path()).collect();
        assert_eq!(
            names,
            vec![
                "screenshots/01-block-review-1280x800.png",
                "screenshots/02-redaction-1280x800.png",
                "screenshots/03-settings-1280x800.png",
                "promotional/small-tile-440x280.png",
                "promotional/large-tile-920x680.png",
                "promotional/marquee-1400x560.png",
            ]
        );
    }

    #[test]
    fn cli_names_match_asset_names() {
        for kind in AssetKind::ALL {
            let parsed = AssetKind::from_str(kind.name(), false).unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn build_uses_catalogue_size() {
        let branding = Branding::none();
        for kind in AssetKind::ALL {
            let scene = kind.build(&branding);
            assert_eq!(scene.size, kind.size());
            assert_eq!(scene.kind, kind);
            assert!(!scene.display_list.commands.is_empty());
        }
    }

    #[test]
    fn missing_icon_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let branding = Branding::load(&dir.path().join("icon-128.png")).unwrap();
        assert!(branding.icon().is_none());
    }

    #[test]
    fn corrupt_icon_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon-128.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        let err = Branding::load(&path).unwrap_err();
        assert!(matches!(err, Error::Icon { .. }));
    }
}
