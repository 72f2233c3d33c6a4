//! Asset generator: renders every selected scene and writes it to disk

use std::fs;
use std::path::PathBuf;

use log::{debug, info};

use crate::manifest::{self, DigestManifest};
use crate::rendering::{rasterize, FontBook, Screenshot};
use crate::scenes::{AssetKind, Branding, Category, Scene, PRODUCT_NAME};
use crate::{Error, GeneratorConfig, Result};

/// One file written by [`AssetGenerator::generate`].
#[derive(Debug, Clone)]
pub struct GeneratedAsset {
    pub kind: AssetKind,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub sha256: String,
}

#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub out_dir: PathBuf,
    pub assets: Vec<GeneratedAsset>,
    pub notes_path: PathBuf,
    pub digest_path: Option<PathBuf>,
    /// True when at least one weight rendered with the bitmap font.
    pub used_fallback_font: bool,
}

/// Renders scenes with fonts and branding loaded once up front.
#[derive(Debug)]
pub struct AssetGenerator {
    config: GeneratorConfig,
    fonts: FontBook,
    branding: Branding,
}

impl AssetGenerator {
    /// Validate `config`, resolve fonts and load the icon.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let fonts = FontBook::load(&config.fonts);
        let branding = Branding::load(&config.icon_path)?;
        debug!("font book: {:?}", fonts);
        Ok(Self {
            config,
            fonts,
            branding,
        })
    }

    /// Build from already-resolved parts.
    pub fn with_parts(config: GeneratorConfig, fonts: FontBook, branding: Branding) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            fonts,
            branding,
        })
    }

    pub fn scene(&self, kind: AssetKind) -> Scene {
        kind.build(&self.branding)
    }

    pub fn render(&self, kind: AssetKind) -> Result<Screenshot> {
        let scene = self.scene(kind);
        debug!(
            "rendering {} ({} commands)",
            kind.name(),
            scene.display_list.commands.len()
        );
        rasterize(&scene.display_list, scene.size, &self.fonts)
    }

    /// Render and write the selected assets, then the manifest(s).
    pub fn generate(&self) -> Result<GenerationReport> {
        let out_dir = self.config.out_dir.clone();
        for category in [Category::Screenshot, Category::Promotional] {
            let dir = out_dir.join(category.dir_name());
            fs::create_dir_all(&dir).map_err(|e| Error::io(&dir, e))?;
        }

        let mut assets = Vec::new();
        let mut digests = DigestManifest::new(PRODUCT_NAME);
        for kind in self.config.selected_kinds() {
            let shot = self.render(kind)?;
            let path = kind.output_path(&out_dir);
            fs::write(&path, &shot.png_data).map_err(|e| Error::io(&path, e))?;
            let sha256 = shot.sha256_hex();
            info!("wrote {} ({}x{})", path.display(), shot.width, shot.height);
            digests.record(kind, sha256.clone());
            assets.push(GeneratedAsset {
                kind,
                path,
                width: shot.width,
                height: shot.height,
                sha256,
            });
        }

        let notes_path = out_dir.join(manifest::NOTES_FILE);
        manifest::write_notes(&notes_path, &AssetKind::ALL)?;
        info!("wrote {}", notes_path.display());

        let digest_path = if self.config.write_digest_manifest {
            let path = out_dir.join(manifest::DIGEST_FILE);
            digests.write(&path)?;
            info!("wrote {}", path.display());
            Some(path)
        } else {
            None
        };

        Ok(GenerationReport {
            out_dir,
            assets,
            notes_path,
            digest_path,
            used_fallback_font: self.fonts.uses_fallback(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::FontSearch;

    fn config_in(dir: &std::path::Path) -> GeneratorConfig {
        GeneratorConfig {
            fonts: FontSearch::none(),
            ..GeneratorConfig::for_root(dir)
        }
    }

    #[test]
    fn new_rejects_invalid_config() {
        let cfg = GeneratorConfig {
            out_dir: PathBuf::new(),
            ..config_in(std::path::Path::new("."))
        };
        assert!(matches!(AssetGenerator::new(cfg), Err(Error::Config(_))));
    }

    #[test]
    fn render_matches_catalogue_size() {
        let dir = tempfile::tempdir().unwrap();
        let generator = AssetGenerator::new(config_in(dir.path())).unwrap();
        let shot = generator.render(AssetKind::SmallTile).unwrap();
        assert_eq!((shot.width, shot.height), (440, 280));
        let pixels = shot.decode().unwrap();
        assert_eq!(pixels.dimensions(), (440, 280));
    }

    #[test]
    fn generate_subset_still_writes_full_notes() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = GeneratorConfig {
            only: vec![AssetKind::SmallTile],
            write_digest_manifest: true,
            ..config_in(dir.path())
        };
        let report = AssetGenerator::new(cfg).unwrap().generate().unwrap();
        assert_eq!(report.assets.len(), 1);
        assert!(report.used_fallback_font);
        assert!(report.assets[0].path.is_file());
        let notes = fs::read_to_string(&report.notes_path).unwrap();
        assert!(notes.contains("marquee-1400x560.png"));
        assert!(report.digest_path.unwrap().is_file());
        assert!(report.out_dir.join("screenshots").is_dir());
    }
}
