/// A position in logical (canvas-scaled) pixel units.
///
/// Pixel `(i, j)` covers `[i, i + 1) x [j, j + 1)`, so its center sits at
/// `(i + 0.5, j + 0.5)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Maps element-relative device coordinates onto the logical grid.
    pub fn from_device(x: f64, y: f64, scale: f64) -> Self {
        Self {
            x: x / scale,
            y: y / scale,
        }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Shortest distance from `self` to the segment `a..b`.
    pub fn distance_to_segment(self, a: Point, b: Point) -> f64 {
        let (dx, dy) = (b.x - a.x, b.y - a.y);
        let len_sq = dx * dx + dy * dy;
        if len_sq == 0.0 {
            return self.distance_to(a);
        }
        let t = (((self.x - a.x) * dx + (self.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
        self.distance_to(Point::new(a.x + t * dx, a.y + t * dy))
    }
}
