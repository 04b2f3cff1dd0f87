//! Indicator ring capability: N-pixel RGB display.

/// Index of the status pixel. The remaining pixels form the ambient ring.
pub const STATUS_PIXEL: usize = 0;

/// N-pixel display capability.
///
/// Calls mutate an internal frame buffer; nothing reaches the pixels
/// until `show`.
pub trait IndicatorRing {
    /// Set one pixel's color in the frame buffer.
    fn set_pixel(&mut self, index: usize, r: u8, g: u8, b: u8);

    /// Halve the brightness of every pixel in the frame buffer.
    fn dim(&mut self);

    /// Push the frame buffer to the pixels.
    fn show(&mut self);

    /// Black out the frame buffer.
    fn clear(&mut self);
}
