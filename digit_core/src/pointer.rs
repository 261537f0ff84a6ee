/// Bit set in [`PointerInput::buttons`] while the primary button is down.
pub const PRIMARY_BUTTON: u16 = 1;
pub const SECONDARY_BUTTON: u16 = 2;
pub const AUXILIARY_BUTTON: u16 = 4;
pub const FOURTH_BUTTON: u16 = 8;
pub const FIFTH_BUTTON: u16 = 16;

/// One mouse event as seen by the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    /// Horizontal device offset from the surface's left edge.
    pub x: f64,
    /// Vertical device offset from the surface's top edge.
    pub y: f64,
    /// Held-button bitmask, same layout as DOM `MouseEvent.buttons`.
    pub buttons: u16,
}

impl PointerInput {
    pub const fn new(x: f64, y: f64, buttons: u16) -> Self {
        Self { x, y, buttons }
    }

    /// Only the primary button is held. Chords with other buttons don't draw.
    pub const fn primary_held(&self) -> bool {
        self.buttons == PRIMARY_BUTTON
    }
}
