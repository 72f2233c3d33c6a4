//! Font resolution and glyph rasterization
//!
//! Text goes through the [`Face`] trait, which has two backends:
//!
//! - [`OutlineFace`]: a TrueType / OpenType file (first face of a `.ttc`)
//!   rasterized with `ab_glyph`
//! - [`BitmapFace`]: the built-in 5x8 bitmap font, used when no candidate
//!   font file can be loaded
//!
//! [`FontBook::load`] walks a chain of candidate fonts per weight and never
//! fails; the bitmap face is the last resort.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use ab_glyph::{point, Font, FontVec, Glyph, PxScale, ScaleFont};
use log::{debug, warn};

use super::bitmap_font::{self, ADVANCE, GLYPH_ROWS};
use super::layout::TextBounds;
use super::paint::Weight;

/// How deep bare font names are searched for below each font directory.
const MAX_SEARCH_DEPTH: usize = 6;

/// A typeface able to measure and rasterize a single line of text.
///
/// Coordinates are relative to the text origin: the left edge at the
/// ascender line. `plot` receives pixel positions with a coverage in `0..=1`.
pub trait Face: Send + Sync {
    fn name(&self) -> &str;

    fn measure(&self, text: &str, size: f32) -> TextBounds;

    fn rasterize(&self, text: &str, size: f32, plot: &mut dyn FnMut(i32, i32, f32));

    /// True for the built-in bitmap face.
    fn is_fallback(&self) -> bool {
        false
    }
}

/// Outline font loaded from disk.
pub struct OutlineFace {
    name: String,
    font: FontVec,
}

impl OutlineFace {
    pub fn from_bytes(name: impl Into<String>, data: Vec<u8>) -> Result<Self, ab_glyph::InvalidFont> {
        let font = FontVec::try_from_vec_and_index(data, 0)?;
        Ok(Self {
            name: name.into(),
            font,
        })
    }

    /// `size` is an em size; ab_glyph scales by ascent-to-descent height.
    fn scale(&self, size: f32) -> PxScale {
        let units_per_em = self.font.units_per_em().unwrap_or(1000.0);
        PxScale::from(size * self.font.height_unscaled() / units_per_em)
    }

    /// Positioned glyphs plus the final caret x.
    fn layout(&self, text: &str, size: f32) -> (Vec<Glyph>, f32) {
        let scale = self.scale(size);
        let scaled = self.font.as_scaled(scale);
        let mut caret = point(0.0, scaled.ascent());
        let mut previous = None;
        let mut glyphs = Vec::with_capacity(text.len());
        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = previous {
                caret.x += scaled.kern(prev, id);
            }
            glyphs.push(id.with_scale_and_position(scale, caret));
            caret.x += scaled.h_advance(id);
            previous = Some(id);
        }
        (glyphs, caret.x)
    }
}

impl Face for OutlineFace {
    fn name(&self) -> &str {
        &self.name
    }

    fn measure(&self, text: &str, size: f32) -> TextBounds {
        let (glyphs, advance) = self.layout(text, size);
        let mut ink: Option<ab_glyph::Rect> = None;
        for glyph in glyphs {
            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let b = outlined.px_bounds();
                ink = Some(match ink {
                    None => b,
                    Some(acc) => ab_glyph::Rect {
                        min: point(acc.min.x.min(b.min.x), acc.min.y.min(b.min.y)),
                        max: point(acc.max.x.max(b.max.x), acc.max.y.max(b.max.y)),
                    },
                });
            }
        }
        match ink {
            Some(b) => TextBounds {
                left: b.min.x.floor() as i32,
                top: b.min.y.floor() as i32,
                right: b.max.x.ceil() as i32,
                bottom: b.max.y.ceil() as i32,
            },
            // whitespace only
            None => TextBounds {
                left: 0,
                top: 0,
                right: advance.ceil() as i32,
                bottom: 0,
            },
        }
    }

    fn rasterize(&self, text: &str, size: f32, plot: &mut dyn FnMut(i32, i32, f32)) {
        let (glyphs, _) = self.layout(text, size);
        for glyph in glyphs {
            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let b = outlined.px_bounds();
                let (ox, oy) = (b.min.x as i32, b.min.y as i32);
                outlined.draw(|x, y, coverage| plot(ox + x as i32, oy + y as i32, coverage));
            }
        }
    }
}

/// Built-in bitmap font scaled by whole pixels.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitmapFace {
    bold: bool,
}

impl BitmapFace {
    pub fn new(weight: Weight) -> Self {
        Self {
            bold: weight == Weight::Bold,
        }
    }

    /// Integer pixel multiplier for an em size.
    pub fn pixel_scale(size: f32) -> i32 {
        ((size / GLYPH_ROWS as f32).round() as i32).max(1)
    }
}

impl Face for BitmapFace {
    fn name(&self) -> &str {
        if self.bold {
            "builtin-bitmap-bold"
        } else {
            "builtin-bitmap"
        }
    }

    fn measure(&self, text: &str, size: f32) -> TextBounds {
        let count = text.chars().count() as i32;
        if count == 0 {
            return TextBounds::default();
        }
        let s = Self::pixel_scale(size);
        TextBounds {
            left: 0,
            top: 0,
            right: (count * ADVANCE as i32 - 1) * s + i32::from(self.bold),
            bottom: GLYPH_ROWS as i32 * s,
        }
    }

    fn rasterize(&self, text: &str, size: f32, plot: &mut dyn FnMut(i32, i32, f32)) {
        let s = Self::pixel_scale(size);
        let extra = i32::from(self.bold);
        for (i, ch) in text.chars().enumerate() {
            let x0 = i as i32 * ADVANCE as i32 * s;
            for (cx, column) in bitmap_font::glyph(ch).iter().enumerate() {
                for row in 0..GLYPH_ROWS {
                    if (*column >> row) & 1 == 0 {
                        continue;
                    }
                    for dy in 0..s {
                        for dx in 0..s + extra {
                            plot(x0 + cx as i32 * s + dx, row as i32 * s + dy, 1.0);
                        }
                    }
                }
            }
        }
    }

    fn is_fallback(&self) -> bool {
        true
    }
}

/// Candidate chains and directories used to find font files.
#[derive(Debug, Clone)]
pub struct FontSearch {
    /// Directories searched (recursively) for bare file names, in order.
    pub dirs: Vec<PathBuf>,
    pub regular: Vec<String>,
    pub bold: Vec<String>,
}

impl Default for FontSearch {
    fn default() -> Self {
        Self {
            dirs: system_font_dirs(),
            regular: vec![
                "DejaVuSans.ttf".to_string(),
                "/System/Library/Fonts/Supplemental/Arial.ttf".to_string(),
                "/System/Library/Fonts/Supplemental/Helvetica.ttc".to_string(),
            ],
            bold: vec![
                "DejaVuSans-Bold.ttf".to_string(),
                "/System/Library/Fonts/Supplemental/Arial Bold.ttf".to_string(),
                "/System/Library/Fonts/Supplemental/Helvetica.ttc".to_string(),
            ],
        }
    }
}

impl FontSearch {
    /// No candidates at all: always resolves to the bitmap face.
    pub fn none() -> Self {
        Self {
            dirs: Vec::new(),
            regular: Vec::new(),
            bold: Vec::new(),
        }
    }

    /// Default candidate names looked up only below `dirs`; platform font
    /// directories and absolute system paths are left out.
    pub fn user_dirs_only<I>(dirs: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let bare = |names: Vec<String>| -> Vec<String> {
            names
                .into_iter()
                .filter(|n| Path::new(n).components().count() == 1)
                .collect()
        };
        let defaults = Self::default();
        Self {
            dirs: dirs.into_iter().collect(),
            regular: bare(defaults.regular),
            bold: bare(defaults.bold),
        }
    }

    /// Search `dirs` before the existing directories.
    pub fn prepend_dirs<I>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut all: Vec<PathBuf> = dirs.into_iter().collect();
        all.append(&mut self.dirs);
        self.dirs = all;
        self
    }

    pub fn candidates(&self, weight: Weight) -> &[String] {
        match weight {
            Weight::Regular => &self.regular,
            Weight::Bold => &self.bold,
        }
    }

    /// Turn a candidate into an existing file path.
    ///
    /// Paths with a directory part are used as-is. Bare file names are
    /// tried in the working directory, then searched for below `dirs`.
    pub fn resolve(&self, candidate: &str) -> Option<PathBuf> {
        let path = Path::new(candidate);
        if path.is_file() {
            return Some(path.to_path_buf());
        }
        if path.is_absolute() || path.components().count() > 1 {
            return None;
        }
        self.dirs
            .iter()
            .find_map(|dir| find_file(dir, path.as_os_str(), MAX_SEARCH_DEPTH))
    }
}

fn find_file(dir: &Path, name: &std::ffi::OsStr, depth: usize) -> Option<PathBuf> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)
        .ok()?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .collect();
    entries.sort();

    if let Some(hit) = entries
        .iter()
        .find(|p| p.file_name() == Some(name) && p.is_file())
    {
        return Some(hit.clone());
    }
    if depth == 0 {
        return None;
    }
    entries
        .iter()
        .filter(|p| p.is_dir())
        .find_map(|p| find_file(p, name, depth - 1))
}

/// Platform font directories that exist on this machine.
pub fn system_font_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        dirs.push(home.join(".local/share/fonts"));
        dirs.push(home.join(".fonts"));
        dirs.push(home.join("Library/Fonts"));
    }
    if let Some(data_dirs) = std::env::var_os("XDG_DATA_DIRS") {
        dirs.extend(std::env::split_paths(&data_dirs).map(|d| d.join("fonts")));
    }
    for fixed in [
        "/usr/share/fonts",
        "/usr/local/share/fonts",
        "/Library/Fonts",
        "/System/Library/Fonts",
        "C:\\Windows\\Fonts",
    ] {
        dirs.push(PathBuf::from(fixed));
    }
    if let Some(windir) = std::env::var_os("WINDIR").map(PathBuf::from) {
        dirs.push(windir.join("Fonts"));
    }

    let mut seen = Vec::new();
    dirs.retain(|d| {
        let keep = d.is_dir() && !seen.contains(d);
        if keep {
            seen.push(d.clone());
        }
        keep
    });
    dirs
}

/// Resolved regular and bold faces.
pub struct FontBook {
    regular: Box<dyn Face>,
    bold: Box<dyn Face>,
}

impl FontBook {
    /// Resolve both weights. Never fails: falls back to the bitmap face.
    pub fn load(search: &FontSearch) -> Self {
        Self {
            regular: load_face(search, Weight::Regular),
            bold: load_face(search, Weight::Bold),
        }
    }

    pub fn bitmap() -> Self {
        Self {
            regular: Box::new(BitmapFace::new(Weight::Regular)),
            bold: Box::new(BitmapFace::new(Weight::Bold)),
        }
    }

    pub fn face(&self, weight: Weight) -> &dyn Face {
        match weight {
            Weight::Regular => self.regular.as_ref(),
            Weight::Bold => self.bold.as_ref(),
        }
    }

    pub fn uses_fallback(&self) -> bool {
        self.regular.is_fallback() || self.bold.is_fallback()
    }
}

impl fmt::Debug for FontBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontBook")
            .field("regular", &self.regular.name())
            .field("bold", &self.bold.name())
            .finish()
    }
}

fn load_face(search: &FontSearch, weight: Weight) -> Box<dyn Face> {
    let candidates = search.candidates(weight);
    for candidate in candidates {
        let Some(path) = search.resolve(candidate) else {
            debug!("font candidate {candidate:?} not found");
            continue;
        };
        let bytes = match fs::read(&path) {
            Ok(b) => b,
            Err(e) => {
                debug!("failed to read font {}: {e}", path.display());
                continue;
            }
        };
        match OutlineFace::from_bytes(path.display().to_string(), bytes) {
            Ok(face) => {
                debug!("using {} for {:?} text", path.display(), weight);
                return Box::new(face);
            }
            Err(e) => debug!("failed to parse font {}: {e}", path.display()),
        }
    }
    warn!(
        "no usable {:?} font among {} candidate(s); using built-in bitmap font",
        weight,
        candidates.len()
    );
    Box::new(BitmapFace::new(weight))
}
