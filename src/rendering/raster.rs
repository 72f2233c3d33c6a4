/// Rasterizer: executes display lists on an RGBA canvas and encodes PNGs

use std::io::Cursor;

use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgba, RgbaImage};

use super::fonts::{Face, FontBook};
use super::layout::{centered_origin, Point, Rect};
use super::paint::{rgba, BlendMode, Color, DisplayList, Gradient, PaintCommand, Stroke, TextStyle};
use crate::rendering::Screenshot;
use crate::{Error, Result, Size};

/// Shadows fall slightly below the card that casts them.
pub const SHADOW_OFFSET_Y: i32 = 6;

/// Source-over blend of `src` (straight alpha scaled by `coverage`) onto `dst`.
pub fn blend_over(dst: Color, src: Color, coverage: f32) -> Color {
    let sa = f32::from(src[3]) / 255.0 * coverage.clamp(0.0, 1.0);
    if sa <= 0.0 {
        return dst;
    }
    let da = f32::from(dst[3]) / 255.0;
    let out_a = sa + da * (1.0 - sa);
    let channel = |i: usize| {
        let c = (f32::from(src[i]) * sa + f32::from(dst[i]) * da * (1.0 - sa)) / out_a;
        c.round().clamp(0.0, 255.0) as u8
    };
    Rgba([
        channel(0),
        channel(1),
        channel(2),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}

/// Coverage-weighted write of `src` onto `dst`: at full coverage the result
/// is exactly `src`, alpha included.
pub fn replace_with(dst: Color, src: Color, coverage: f32) -> Color {
    let t = coverage.clamp(0.0, 1.0);
    if t <= 0.0 {
        return dst;
    }
    if t >= 1.0 {
        return src;
    }
    let sa = f32::from(src[3]) / 255.0;
    let da = f32::from(dst[3]) / 255.0;
    let out_a = sa * t + da * (1.0 - t);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }
    let channel = |i: usize| {
        let c = (f32::from(src[i]) * sa * t + f32::from(dst[i]) * da * (1.0 - t)) / out_a;
        c.round().clamp(0.0, 255.0) as u8
    };
    Rgba([
        channel(0),
        channel(1),
        channel(2),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}

/// Signed distance from `(px, py)` to a rounded box covering the pixels of
/// `rect`; negative inside.
fn rounded_rect_distance(px: f32, py: f32, rect: &Rect, radius: f32) -> f32 {
    let (left, top) = (rect.x1 as f32, rect.y1 as f32);
    let (right, bottom) = ((rect.x2 + 1) as f32, (rect.y2 + 1) as f32);
    let hw = (right - left) / 2.0;
    let hh = (bottom - top) / 2.0;
    let r = radius.min(hw).min(hh).max(0.0);
    let qx = (px - (left + hw)).abs() - (hw - r);
    let qy = (py - (top + hh)).abs() - (hh - r);
    let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
    let inside = qx.max(qy).min(0.0);
    outside + inside - r
}

fn ellipse_distance(px: f32, py: f32, rect: &Rect) -> f32 {
    let a = (rect.x2 + 1 - rect.x1) as f32 / 2.0;
    let b = (rect.y2 + 1 - rect.y1) as f32 / 2.0;
    if a <= 0.0 || b <= 0.0 {
        return f32::INFINITY;
    }
    let dx = (px - (rect.x1 as f32 + a)) / a;
    let dy = (py - (rect.y1 as f32 + b)) / b;
    ((dx * dx + dy * dy).sqrt() - 1.0) * a.min(b)
}

/// Anti-aliased coverage of a pixel whose center is `d` away from an edge.
fn coverage(d: f32) -> f32 {
    (0.5 - d).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    /// Fully transparent canvas.
    pub fn new(size: Size) -> Self {
        Self {
            pixels: RgbaImage::new(size.width, size.height),
        }
    }

    /// Opaque canvas filled one row at a time from `top` to `bottom`.
    pub fn vertical_gradient(size: Size, top: [u8; 3], bottom: [u8; 3]) -> Self {
        let mut pixels = RgbaImage::new(size.width, size.height);
        let denom = f64::from(size.height.saturating_sub(1).max(1));
        for y in 0..size.height {
            let t = f64::from(y) / denom;
            let mix = |i: usize| {
                let c = f64::from(top[i]) + (f64::from(bottom[i]) - f64::from(top[i])) * t;
                c as u8
            };
            let row = Rgba([mix(0), mix(1), mix(2), 255]);
            for x in 0..size.width {
                pixels.put_pixel(x, y, row);
            }
        }
        Self { pixels }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        *self.pixels.get_pixel(x, y)
    }

    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Paint one pixel; positions outside the canvas are ignored.
    pub fn apply(&mut self, x: i32, y: i32, color: Color, cov: f32, mode: BlendMode) {
        if x < 0 || y < 0 || x >= self.pixels.width() as i32 || y >= self.pixels.height() as i32 {
            return;
        }
        let dst = self.pixels.get_pixel_mut(x as u32, y as u32);
        *dst = match mode {
            BlendMode::Over => blend_over(*dst, color, cov),
            BlendMode::Replace => replace_with(*dst, color, cov),
        };
    }

    pub fn blend(&mut self, x: i32, y: i32, color: Color, cov: f32) {
        self.apply(x, y, color, cov, BlendMode::Over);
    }

    /// Pixel span of `rect` clipped to the canvas, or `None` if disjoint.
    fn clip(&self, rect: &Rect) -> Option<(i32, i32, i32, i32)> {
        let x1 = rect.x1.max(0);
        let y1 = rect.y1.max(0);
        let x2 = rect.x2.min(self.pixels.width() as i32 - 1);
        let y2 = rect.y2.min(self.pixels.height() as i32 - 1);
        (x1 <= x2 && y1 <= y2).then_some((x1, y1, x2, y2))
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color, mode: BlendMode) {
        let Some((x1, y1, x2, y2)) = self.clip(&rect) else {
            return;
        };
        for y in y1..=y2 {
            for x in x1..=x2 {
                self.apply(x, y, color, 1.0, mode);
            }
        }
    }

    /// Rounded rectangle; the outline, if any, is laid inside the edge.
    pub fn rounded_rect(
        &mut self,
        rect: Rect,
        radius: u32,
        fill: Option<Color>,
        outline: Option<Stroke>,
        mode: BlendMode,
    ) {
        let Some((x1, y1, x2, y2)) = self.clip(&rect) else {
            return;
        };
        let radius = radius as f32;
        for y in y1..=y2 {
            for x in x1..=x2 {
                let d = rounded_rect_distance(x as f32 + 0.5, y as f32 + 0.5, &rect, radius);
                let outer = coverage(d);
                if outer <= 0.0 {
                    continue;
                }
                match outline {
                    Some(stroke) => {
                        let inner = coverage(d + stroke.width as f32);
                        if let Some(fill) = fill {
                            self.apply(x, y, fill, inner, mode);
                        }
                        self.apply(x, y, stroke.color, outer - inner, mode);
                    }
                    None => {
                        if let Some(fill) = fill {
                            self.apply(x, y, fill, outer, mode);
                        }
                    }
                }
            }
        }
    }

    pub fn ellipse(&mut self, rect: Rect, color: Color) {
        let Some((x1, y1, x2, y2)) = self.clip(&rect) else {
            return;
        };
        for y in y1..=y2 {
            for x in x1..=x2 {
                let d = ellipse_distance(x as f32 + 0.5, y as f32 + 0.5, &rect);
                self.blend(x, y, color, coverage(d));
            }
        }
    }

    pub fn text(&mut self, face: &dyn Face, origin: Point, text: &str, style: &TextStyle) {
        let color = style.color;
        face.rasterize(text, style.size, &mut |x: i32, y: i32, c: f32| {
            self.blend(origin.x + x, origin.y + y, color, c)
        });
    }

    /// Alpha-composite `layer` with its top-left corner at `(x, y)`.
    pub fn composite(&mut self, layer: &RgbaImage, x: i32, y: i32) {
        for (lx, ly, p) in layer.enumerate_pixels() {
            if p[3] == 0 {
                continue;
            }
            self.blend(x + lx as i32, y + ly as i32, *p, 1.0);
        }
    }

    /// Rounded panel drawn on a `width x height` layer and composited at
    /// its top-left corner.
    pub fn card(&mut self, rect: Rect, radius: u32, fill: Color) {
        let (w, h) = (rect.width(), rect.height());
        if w <= 0 || h <= 0 {
            return;
        }
        let mut layer = Canvas::new(Size::new(w as u32, h as u32));
        layer.rounded_rect(rect.translate(-rect.x1, -rect.y1), radius, Some(fill), None, BlendMode::Over);
        self.composite(&layer.pixels, rect.x1, rect.y1);
    }

    /// Blurred black rounded rect below the card at `rect`.
    pub fn drop_shadow(&mut self, rect: Rect, radius: u32, alpha: u8, blur: u32) {
        let pad = blur as i32;
        let (w, h) = (rect.width().max(0), rect.height().max(0));
        if w + 2 * pad <= 0 || h + 2 * pad <= 0 {
            return;
        }
        let mut layer = Canvas::new(Size::new((w + 2 * pad) as u32, (h + 2 * pad) as u32));
        layer.rounded_rect(
            Rect::new(pad, pad, pad + w, pad + h),
            radius,
            Some(rgba(0, 0, 0, alpha)),
            None,
            BlendMode::Over,
        );
        let sigma = (blur / 2) as f32;
        let shadow = if sigma > 0.0 {
            imageops::blur(&layer.pixels, sigma)
        } else {
            layer.pixels
        };
        self.composite(&shadow, rect.x1 - pad, rect.y1 - pad + SHADOW_OFFSET_Y);
    }

    /// Resample `image` to `size` x `size` and composite it at `origin`.
    pub fn draw_image(&mut self, origin: Point, size: u32, image: &RgbaImage) {
        if size == 0 || image.width() == 0 || image.height() == 0 {
            return;
        }
        let scaled = imageops::resize(image, size, size, FilterType::Lanczos3);
        self.composite(&scaled, origin.x, origin.y);
    }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        self.pixels.write_to(&mut buf, ImageFormat::Png)?;
        Ok(buf.into_inner())
    }

    /// Execute one paint command.
    pub fn execute(&mut self, cmd: &PaintCommand, fonts: &FontBook) {
        match cmd {
            PaintCommand::FillRect { rect, color, mode } => self.fill_rect(*rect, *color, *mode),
            PaintCommand::RoundedRect {
                rect,
                radius,
                fill,
                outline,
                mode,
            } => self.rounded_rect(*rect, *radius, *fill, *outline, *mode),
            PaintCommand::Card { rect, radius, fill } => self.card(*rect, *radius, *fill),
            PaintCommand::Ellipse { rect, color } => self.ellipse(*rect, *color),
            PaintCommand::Text {
                origin,
                text,
                style,
            } => self.text(fonts.face(style.weight), *origin, text, style),
            PaintCommand::CenteredText {
                area,
                text,
                style,
                nudge,
            } => {
                let face = fonts.face(style.weight);
                let measured = face.measure(text, style.size);
                let at = centered_origin(*area, measured, *nudge);
                self.text(face, at, text, style);
            }
            PaintCommand::Shadow {
                rect,
                radius,
                alpha,
                blur,
            } => self.drop_shadow(*rect, *radius, *alpha, *blur),
            PaintCommand::Image {
                origin,
                size,
                image,
            } => self.draw_image(*origin, *size, image),
        }
    }
}

/// Paint a display list onto a fresh canvas.
pub fn paint(display_list: &DisplayList, size: Size, fonts: &FontBook) -> Canvas {
    let mut canvas = match display_list.background {
        Gradient::Vertical { top, bottom } => Canvas::vertical_gradient(size, top, bottom),
    };
    for cmd in &display_list.commands {
        canvas.execute(cmd, fonts);
    }
    canvas
}

/// Paint a display list and encode the result as PNG.
pub fn rasterize(display_list: &DisplayList, size: Size, fonts: &FontBook) -> Result<Screenshot> {
    if size.width == 0 || size.height == 0 {
        return Err(Error::Render(format!(
            "cannot rasterize an empty {}x{} canvas",
            size.width, size.height
        )));
    }
    let canvas = paint(display_list, size, fonts);
    let png_data = canvas.encode_png()?;
    Ok(Screenshot {
        width: size.width,
        height: size.height,
        png_data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::paint::rgb;

    #[test]
    fn gradient_endpoints_and_truncation() {
        let c = Canvas::vertical_gradient(Size::new(4, 3), [12, 44, 96], [12, 98, 140]);
        assert_eq!(c.pixel(0, 0), rgb(12, 44, 96));
        assert_eq!(c.pixel(3, 2), rgb(12, 98, 140));
        // midpoint: 44 + 54 * 0.5 = 71, 96 + 44 * 0.5 = 118
        assert_eq!(c.pixel(1, 1), rgb(12, 71, 118));
    }

    #[test]
    fn single_row_gradient_uses_top_color() {
        let c = Canvas::vertical_gradient(Size::new(2, 1), [1, 2, 3], [200, 200, 200]);
        assert_eq!(c.pixel(1, 0), rgb(1, 2, 3));
    }

    #[test]
    fn blend_over_opaque_and_translucent() {
        let dst = rgb(246, 249, 255);
        assert_eq!(blend_over(dst, rgb(1, 2, 3), 1.0), rgb(1, 2, 3));
        assert_eq!(blend_over(dst, rgb(1, 2, 3), 0.0), dst);
        let dimmed = blend_over(dst, rgba(7, 15, 28, 138), 1.0);
        assert_eq!(dimmed[3], 255);
        assert!(dimmed[0] < 130 && dimmed[0] > 100);
    }

    #[test]
    fn rounded_rect_fills_center_and_skips_corner() {
        let mut c = Canvas::vertical_gradient(Size::new(40, 40), [0, 0, 0], [0, 0, 0]);
        c.rounded_rect(Rect::new(0, 0, 39, 39), 12, Some(rgb(255, 0, 0)), None, BlendMode::Over);
        assert_eq!(c.pixel(20, 20), rgb(255, 0, 0));
        assert_eq!(c.pixel(0, 0), rgb(0, 0, 0));
        assert_eq!(c.pixel(20, 0), rgb(255, 0, 0));
    }

    #[test]
    fn outline_sits_inside_edge() {
        let mut c = Canvas::vertical_gradient(Size::new(30, 30), [0, 0, 0], [0, 0, 0]);
        c.rounded_rect(
            Rect::new(5, 5, 24, 24),
            0,
            Some(rgb(255, 255, 255)),
            Some(Stroke {
                color: rgb(0, 255, 0),
                width: 3,
            }),
            BlendMode::Replace,
        );
        assert_eq!(c.pixel(5, 15), rgb(0, 255, 0));
        assert_eq!(c.pixel(7, 15), rgb(0, 255, 0));
        assert_eq!(c.pixel(8, 15), rgb(255, 255, 255));
        assert_eq!(c.pixel(4, 15), rgb(0, 0, 0));
    }

    #[test]
    fn replace_writes_translucent_fill_through() {
        let mut c = Canvas::vertical_gradient(Size::new(300, 100), [12, 44, 96], [12, 98, 140]);
        c.rounded_rect(Rect::new(10, 20, 298, 82), 20, Some(rgba(18, 69, 145, 200)), None, BlendMode::Replace);
        assert_eq!(c.pixel(150, 40), rgba(18, 69, 145, 200));
        assert_eq!(c.pixel(2, 40)[3], 255);

        c.fill_rect(Rect::new(0, 0, 5, 5), rgba(255, 255, 255, 240), BlendMode::Replace);
        assert_eq!(c.pixel(3, 3), rgba(255, 255, 255, 240));
    }

    #[test]
    fn over_keeps_canvas_opaque() {
        let mut c = Canvas::vertical_gradient(Size::new(20, 20), [246, 249, 255], [246, 249, 255]);
        c.fill_rect(Rect::new(0, 0, 19, 19), rgba(7, 15, 28, 138), BlendMode::Over);
        let p = c.pixel(10, 10);
        assert_eq!(p[3], 255);
        assert_eq!(p, blend_over(rgb(246, 249, 255), rgba(7, 15, 28, 138), 1.0));
    }

    #[test]
    fn replace_with_partial_coverage_mixes() {
        let dst = rgb(0, 0, 0);
        assert_eq!(replace_with(dst, rgb(200, 100, 50), 0.0), dst);
        assert_eq!(replace_with(dst, rgb(200, 100, 50), 0.5), rgb(100, 50, 25));
        assert_eq!(replace_with(dst, rgba(200, 100, 50, 0), 1.0), rgba(200, 100, 50, 0));
    }

    #[test]
    fn card_leaves_far_column_and_row_alone() {
        let bg = rgb(12, 44, 96);
        let mut c = Canvas::vertical_gradient(Size::new(130, 80), [12, 44, 96], [12, 44, 96]);
        c.card(Rect::new(10, 10, 110, 60), 8, rgb(246, 249, 255));
        assert_eq!(c.pixel(60, 35), rgb(246, 249, 255));
        assert_eq!(c.pixel(109, 35), rgb(246, 249, 255));
        assert_eq!(c.pixel(110, 35), bg);
        assert_eq!(c.pixel(60, 60), bg);
        assert_eq!(c.pixel(10, 35), rgb(246, 249, 255));
    }

    #[test]
    fn card_composites_translucent_fill() {
        let mut c = Canvas::vertical_gradient(Size::new(40, 40), [200, 200, 200], [200, 200, 200]);
        c.card(Rect::new(0, 0, 40, 40), 4, rgba(15, 23, 37, 250));
        let p = c.pixel(20, 20);
        assert_eq!(p[3], 255);
        assert_eq!(p, blend_over(rgb(200, 200, 200), rgba(15, 23, 37, 250), 1.0));
    }

    #[test]
    fn ellipse_covers_center_only() {
        let mut c = Canvas::new(Size::new(12, 12));
        c.ellipse(Rect::new(0, 0, 11, 11), rgb(236, 98, 88));
        assert_eq!(c.pixel(6, 6), rgb(236, 98, 88));
        assert_eq!(c.pixel(0, 0)[3], 0);
    }

    #[test]
    fn shadow_darkens_below_card_edge() {
        let mut c = Canvas::vertical_gradient(Size::new(120, 120), [200, 200, 200], [200, 200, 200]);
        c.drop_shadow(Rect::new(30, 30, 90, 80), 8, 90, 14);
        let below = c.pixel(60, 85);
        assert!(below[0] < 200, "expected shadow below card, got {:?}", below);
        assert_eq!(c.pixel(2, 2), rgb(200, 200, 200));
    }

    #[test]
    fn draw_image_resamples_to_target() {
        let icon = RgbaImage::from_pixel(128, 128, rgb(10, 200, 30));
        let mut c = Canvas::new(Size::new(100, 100));
        c.draw_image(Point::new(10, 10), 40, &icon);
        assert_eq!(c.pixel(30, 30), rgb(10, 200, 30));
        assert_eq!(c.pixel(60, 60)[3], 0);
    }

    #[test]
    fn centered_text_lands_inside_area() {
        let fonts = FontBook::bitmap();
        let area = Rect::new(10, 10, 110, 50);
        let mut dl = DisplayList::vertical([0, 0, 0], [0, 0, 0]);
        dl.centered_text(area, "Cancel", TextStyle::bold(16.0, rgb(255, 255, 255)), -1);
        let c = paint(&dl, Size::new(120, 60), &fonts);
        let mut lit = 0;
        for (x, y, p) in c.image().enumerate_pixels() {
            if p[0] == 255 {
                lit += 1;
                assert!(area.contains(Point::new(x as i32, y as i32)));
            }
        }
        assert!(lit > 0);
    }

    #[test]
    fn rasterize_rejects_empty_canvas() {
        let dl = DisplayList::vertical([0, 0, 0], [0, 0, 0]);
        assert!(rasterize(&dl, Size::new(0, 10), &FontBook::bitmap()).is_err());
    }

    #[test]
    fn rasterize_emits_png() {
        let dl = DisplayList::vertical([0, 0, 0], [255, 255, 255]);
        let shot = rasterize(&dl, Size::new(16, 8), &FontBook::bitmap()).unwrap();
        assert_eq!(&shot.png_data[0..8], b"\x89PNG\r\n\x1a\n");
        assert_eq!((shot.width, shot.height), (16, 8));
    }
}
