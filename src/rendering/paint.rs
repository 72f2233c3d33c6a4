/// Paint command set and display lists produced by the scene builders

use std::sync::Arc;

use image::{Rgba, RgbaImage};

use super::layout::{Point, Rect};

/// Straight (non-premultiplied) RGBA color.
pub type Color = Rgba<u8>;

pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
    Rgba([r, g, b, a])
}

pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Rgba([r, g, b, 255])
}

/// Canvas background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gradient {
    /// Top-to-bottom linear blend, one color per row.
    Vertical { top: [u8; 3], bottom: [u8; 3] },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weight {
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Em size in pixels.
    pub size: f32,
    pub weight: Weight,
    pub color: Color,
}

impl TextStyle {
    pub fn regular(size: f32, color: Color) -> Self {
        Self {
            size,
            weight: Weight::Regular,
            color,
        }
    }

    pub fn bold(size: f32, color: Color) -> Self {
        Self {
            size,
            weight: Weight::Bold,
            color,
        }
    }
}

/// How a fill meets the pixels already on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    /// Source-over compositing.
    Over,
    /// Write the color through, alpha included, wherever the shape covers
    /// the pixel fully.
    Replace,
}

/// Outline drawn inside a shape's edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    FillRect {
        rect: Rect,
        color: Color,
        mode: BlendMode,
    },
    RoundedRect {
        rect: Rect,
        radius: u32,
        fill: Option<Color>,
        outline: Option<Stroke>,
        mode: BlendMode,
    },
    /// Rounded panel painted on its own `width x height` layer and then
    /// composited, so column `x2` and row `y2` are left untouched.
    Card {
        rect: Rect,
        radius: u32,
        fill: Color,
    },
    Ellipse {
        rect: Rect,
        color: Color,
    },
    /// Text anchored at the left edge of its ascender line.
    Text {
        origin: Point,
        text: String,
        style: TextStyle,
    },
    /// Text centered inside `area` using its measured bounds.
    CenteredText {
        area: Rect,
        text: String,
        style: TextStyle,
        nudge: i32,
    },
    /// Blurred rounded-rect drop shadow cast by a card at `rect`.
    Shadow {
        rect: Rect,
        radius: u32,
        alpha: u8,
        blur: u32,
    },
    /// Square bitmap resampled to `size` pixels.
    Image {
        origin: Point,
        size: u32,
        image: Arc<RgbaImage>,
    },
}

/// Everything needed to paint one scene, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayList {
    pub background: Gradient,
    pub commands: Vec<PaintCommand>,
}

impl DisplayList {
    pub fn new(background: Gradient) -> Self {
        Self {
            background,
            commands: Vec::new(),
        }
    }

    pub fn vertical(top: [u8; 3], bottom: [u8; 3]) -> Self {
        Self::new(Gradient::Vertical { top, bottom })
    }

    pub fn push(&mut self, cmd: PaintCommand) -> &mut Self {
        self.commands.push(cmd);
        self
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) -> &mut Self {
        self.push(PaintCommand::FillRect {
            rect,
            color,
            mode: BlendMode::Replace,
        })
    }

    /// Translucent wash over `rect`, blended with what is below.
    pub fn overlay(&mut self, rect: Rect, color: Color) -> &mut Self {
        self.push(PaintCommand::FillRect {
            rect,
            color,
            mode: BlendMode::Over,
        })
    }

    pub fn rounded_rect(&mut self, rect: Rect, radius: u32, fill: Color) -> &mut Self {
        self.push(PaintCommand::RoundedRect {
            rect,
            radius,
            fill: Some(fill),
            outline: None,
            mode: BlendMode::Replace,
        })
    }

    pub fn outlined_rounded_rect(
        &mut self,
        rect: Rect,
        radius: u32,
        fill: Color,
        outline: Color,
        width: u32,
    ) -> &mut Self {
        self.push(PaintCommand::RoundedRect {
            rect,
            radius,
            fill: Some(fill),
            outline: Some(Stroke {
                color: outline,
                width,
            }),
            mode: BlendMode::Replace,
        })
    }

    pub fn ellipse(&mut self, rect: Rect, color: Color) -> &mut Self {
        self.push(PaintCommand::Ellipse { rect, color })
    }

    pub fn text(&mut self, x: i32, y: i32, text: &str, style: TextStyle) -> &mut Self {
        self.push(PaintCommand::Text {
            origin: Point::new(x, y),
            text: text.to_string(),
            style,
        })
    }

    pub fn centered_text(&mut self, area: Rect, text: &str, style: TextStyle, nudge: i32) -> &mut Self {
        self.push(PaintCommand::CenteredText {
            area,
            text: text.to_string(),
            style,
            nudge,
        })
    }

    /// Card with a soft shadow offset slightly downward.
    pub fn shadowed_card(
        &mut self,
        rect: Rect,
        radius: u32,
        fill: Color,
        shadow_alpha: u8,
        shadow_blur: u32,
    ) -> &mut Self {
        self.push(PaintCommand::Shadow {
            rect,
            radius,
            alpha: shadow_alpha,
            blur: shadow_blur,
        });
        self.push(PaintCommand::Card { rect, radius, fill })
    }

    pub fn image(&mut self, x: i32, y: i32, size: u32, image: Arc<RgbaImage>) -> &mut Self {
        self.push(PaintCommand::Image {
            origin: Point::new(x, y),
            size,
            image,
        })
    }

    /// All text strings in paint order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                PaintCommand::Text { text, .. } | PaintCommand::CenteredText { text, .. } => {
                    Some(text.as_str())
                }
                _ => None,
            })
            .collect()
    }
}
