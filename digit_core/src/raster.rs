use crate::geometry::Point;

/// Full ink intensity.
pub const INK: u8 = u8::MAX;

/// Row-major single-channel pixel grid that strokes are painted into.
///
/// Shapes are anti-aliased: a pixel whose center lies within `radius` of the
/// shape gets full coverage, and coverage fades out linearly over the next
/// half pixel. Ink is white and composited source-over, so painting never
/// lowers an intensity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, fill: u8) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.index(x as usize, y as usize)).copied()
    }

    pub fn fill(&mut self, value: u8) {
        self.pixels.fill(value);
    }

    /// Paints a filled circle.
    pub fn fill_disc(&mut self, center: Point, radius: f64) {
        self.paint_capsule(center, center, radius);
    }

    /// Paints a line of the given width with round caps.
    pub fn stroke_segment(&mut self, from: Point, to: Point, width: f64) {
        self.paint_capsule(from, to, width / 2.0);
    }

    fn paint_capsule(&mut self, a: Point, b: Point, radius: f64) {
        let reach = radius + 0.5;
        let x0 = (a.x.min(b.x) - reach).floor().max(0.0);
        let y0 = (a.y.min(b.y) - reach).floor().max(0.0);
        let x1 = (a.x.max(b.x) + reach).ceil().min(self.width as f64);
        let y1 = (a.y.max(b.y) + reach).ceil().min(self.height as f64);
        if !(x0 < x1 && y0 < y1) {
            return;
        }

        for y in y0 as usize..y1 as usize {
            for x in x0 as usize..x1 as usize {
                let center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                let coverage = (reach - center.distance_to_segment(a, b)).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    let idx = self.index(x, y);
                    self.pixels[idx] = composite(self.pixels[idx], coverage);
                }
            }
        }
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width as usize + x
    }
}

fn composite(dst: u8, coverage: f64) -> u8 {
    let dst = f64::from(dst);
    (dst + (f64::from(INK) - dst) * coverage).round() as u8
}
