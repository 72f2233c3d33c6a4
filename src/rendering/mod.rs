//! Rendering pipeline: display lists, fonts, rasterization

pub mod bitmap_font;
pub mod fonts;
pub mod layout;
pub mod paint;
pub mod raster;

use sha2::{Digest, Sha256};

pub use fonts::{BitmapFace, Face, FontBook, FontSearch, OutlineFace};
pub use layout::{Point, Rect, TextBounds};
pub use paint::{rgb, rgba, BlendMode, Color, DisplayList, Gradient, PaintCommand, Stroke, TextStyle, Weight};
pub use raster::{rasterize, Canvas};

/// An encoded PNG together with its dimensions.
#[derive(Debug, Clone)]
pub struct Screenshot {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

impl Screenshot {
    /// Hex-encoded SHA-256 of the PNG bytes.
    pub fn sha256_hex(&self) -> String {
        hex::encode(Sha256::digest(&self.png_data))
    }

    /// Decode the PNG back into pixels.
    pub fn decode(&self) -> crate::Result<image::RgbaImage> {
        Ok(image::load_from_memory(&self.png_data)?.into_rgba8())
    }
}
