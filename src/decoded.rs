//! Caller-facing decode results

/// A scan point in image pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point { x, y }
    }
}

/// Axis-aligned bounding box in image pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Smallest rectangle spanning all `points`, or `None` when there are
    /// none.
    ///
    /// Width and height are `max - min`, so a single point yields a
    /// zero-sized rectangle. Spans wider than `i32::MAX` saturate.
    pub fn bounding(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let (mut x_min, mut x_max) = (first.x, first.x);
        let (mut y_min, mut y_max) = (first.y, first.y);
        for p in &points[1..] {
            x_min = x_min.min(p.x);
            x_max = x_max.max(p.x);
            y_min = y_min.min(p.y);
            y_max = y_max.max(p.y);
        }

        Some(Rect {
            left: x_min,
            top: y_min,
            width: span(x_min, x_max),
            height: span(y_min, y_max),
        })
    }

    pub fn right(&self) -> i32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }

    /// Inclusive on all four edges
    pub fn contains(&self, p: Point) -> bool {
        (self.left..=self.right()).contains(&p.x) && (self.top..=self.bottom()).contains(&p.y)
    }
}

fn span(min: i32, max: i32) -> i32 {
    i32::try_from(max.abs_diff(min)).unwrap_or(i32::MAX)
}

/// Orientation of a symbol relative to the image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Unknown,
    Up,
    Right,
    Down,
    Left,
}

impl From<i32> for Orientation {
    fn from(value: i32) -> Self {
        match value {
            0 => Self::Up,
            1 => Self::Right,
            2 => Self::Down,
            3 => Self::Left,
            _ => Self::Unknown,
        }
    }
}

/// One decoded symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Raw payload bytes
    pub data: Vec<u8>,
    pub symbol_type: crate::SymbolType,
    /// Bounding box of the scan points
    pub rect: Rect,
    /// Relative confidence; larger is better
    pub quality: i32,
    pub orientation: Orientation,
    /// Raw scan points, only kept when requested
    pub locations: Option<Vec<Point>>,
}

impl Decoded {
    /// The payload as text, if it is valid UTF-8
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.data).ok()
    }
}
