//! The drawing surface: pixel buffer plus the pointer state of the stroke in
//! progress.

use log::debug;

use crate::config::SurfaceConfig;
use crate::geometry::Point;
use crate::image::GrayScaleImage;
use crate::pointer::PointerInput;
use crate::raster::PixelBuffer;

/// Most recent marks kept for inspection; older ones are dropped first.
pub const MARK_HISTORY: usize = 1024;

/// Something a pointer handler painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mark {
    /// Start of a stroke with no previous position.
    Dot { at: Point },
    /// Continuation of a stroke from the previous position.
    Segment { from: Point, to: Point },
}

pub struct DrawingSurface {
    config: SurfaceConfig,
    buffer: PixelBuffer,
    previous: Option<Point>,
    current: Option<Point>,
    marks: Vec<Mark>,
}

impl DrawingSurface {
    pub fn new(config: SurfaceConfig) -> Self {
        let buffer = PixelBuffer::new(config.width, config.height, config.background);
        Self {
            config,
            buffer,
            previous: None,
            current: None,
            marks: Vec::new(),
        }
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// The last [`MARK_HISTORY`] marks painted since creation or the last
    /// [`clear`](Self::clear), oldest first. Only a record: the pixels live in
    /// the buffer.
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    pub fn previous(&self) -> Option<Point> {
        self.previous
    }

    pub fn current(&self) -> Option<Point> {
        self.current
    }

    /// Starts a fresh stroke with a dot, whatever button went down.
    pub fn pointer_down(&mut self, input: PointerInput) -> Option<Mark> {
        self.current = None;
        self.advance(input)
    }

    pub fn pointer_move(&mut self, input: PointerInput) -> Option<Mark> {
        if !input.primary_held() {
            return None;
        }
        self.advance(input)
    }

    pub fn pointer_up(&mut self, _input: PointerInput) {
        self.end_stroke();
    }

    /// Draws up to the exit position when dragging out, then ends the stroke.
    pub fn pointer_leave(&mut self, input: PointerInput) -> Option<Mark> {
        let mark = if input.primary_held() {
            self.advance(input)
        } else {
            None
        };
        self.end_stroke();
        mark
    }

    /// Dragging back in starts over at the entry point; the gap to where the
    /// pointer left stays unpainted.
    pub fn pointer_enter(&mut self, input: PointerInput) -> Option<Mark> {
        if !input.primary_held() {
            return None;
        }
        self.advance(input)
    }

    /// Wipes the canvas back to the background. An active stroke carries on.
    pub fn clear(&mut self) {
        self.buffer.fill(self.config.background);
        self.marks.clear();
        debug!("cleared {}x{} surface", self.config.width, self.config.height);
    }

    /// Copies out the ink coverage of every pixel: background where nothing
    /// was drawn (0 by default), up to 255 under a full stroke.
    pub fn extract(&self) -> GrayScaleImage {
        let image = GrayScaleImage::from_buffer(&self.buffer);
        debug!("extracted image: {:?}", image.data());
        image
    }

    fn advance(&mut self, input: PointerInput) -> Option<Mark> {
        let point = Point::from_device(input.x, input.y, self.config.scale);
        self.previous = self.current;
        self.current = Some(point);

        let mark = match self.previous {
            Some(from) => {
                self.buffer.stroke_segment(from, point, self.config.line_width);
                Mark::Segment { from, to: point }
            }
            None => {
                // Filled circle of a quarter line width, outlined with a full line width.
                let radius = self.config.line_width / 4.0 + self.config.line_width / 2.0;
                self.buffer.fill_disc(point, radius);
                Mark::Dot { at: point }
            }
        };
        if self.marks.len() == MARK_HISTORY {
            self.marks.remove(0);
        }
        self.marks.push(mark);
        Some(mark)
    }

    fn end_stroke(&mut self) {
        self.previous = None;
        self.current = None;
    }
}

impl Default for DrawingSurface {
    fn default() -> Self {
        Self::new(SurfaceConfig::default())
    }
}
