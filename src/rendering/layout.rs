/// Geometry primitives used by scene builders and the rasterizer

/// A pixel position on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Corner-inclusive box: both `(x1, y1)` and `(x2, y2)` are painted.
///
/// `width()` and `height()` are the coordinate spans (`x2 - x1`), which is
/// what the mockup layouts are written against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Rect {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }

    pub fn translate(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.x1 + dx, self.y1 + dy, self.x2 + dx, self.y2 + dy)
    }

    /// Shrink by `by` on every side.
    pub fn inset(&self, by: i32) -> Rect {
        Rect::new(self.x1 + by, self.y1 + by, self.x2 - by, self.y2 - by)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x1 && p.x <= self.x2 && p.y >= self.y1 && p.y <= self.y2
    }
}

/// Measured extent of a run of text, relative to its draw origin.
///
/// The origin is the left edge at the ascender line, so `top` is usually a
/// small positive number for fonts whose capitals sit below the ascender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBounds {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Origin that centers text with the given measured bounds inside `area`.
/// `nudge` is added to the vertical position afterwards.
pub fn centered_origin(area: Rect, text: TextBounds, nudge: i32) -> Point {
    let x = area.x1 + (area.width() - text.width()).div_euclid(2);
    let y = area.y1 + (area.height() - text.height()).div_euclid(2) + nudge;
    Point::new(x, y)
}
