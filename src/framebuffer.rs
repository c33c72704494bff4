//! RGB frame buffer: the canvas the renderer writes into, row-major RGB24.

/// Frame width in pixels. The renderer targets one fixed resolution.
pub const WIDTH: u32 = 320;
/// Frame height in pixels.
pub const HEIGHT: u32 = 200;

/// RGB24 pixel buffer for software rendering.
///
/// Allocated once per frame, zero-filled. Each cell is written exactly once
/// by the base pass; the reflection pass additionally reads already-committed
/// cells on the vertically mirrored row.
pub struct FrameBuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    /// Create a new zeroed buffer at the renderer's fixed resolution.
    pub fn new() -> Self {
        Self::with_size(WIDTH, HEIGHT)
    }

    /// Create a new zeroed buffer with a custom resolution (tests only).
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0; (width * height * 3) as usize],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check if coordinates are within bounds
    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Calculate byte offset for pixel at (x, y)
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        ((y * self.width + x) * 3) as usize
    }

    /// Set a single pixel (bounds checked)
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, r: u8, g: u8, b: u8) {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            self.pixels[idx] = r;
            self.pixels[idx + 1] = g;
            self.pixels[idx + 2] = b;
        }
    }

    /// Read a pixel from the buffer (bounds checked)
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<(u8, u8, u8)> {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            Some((self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]))
        } else {
            None
        }
    }

    /// Raw bytes in row-major RGB order, for the encoder.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Mutable raw bytes, for whole-frame post passes.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_zeroed_with_expected_size() {
        let fb = FrameBuffer::new();
        assert_eq!(fb.as_bytes().len(), (WIDTH * HEIGHT * 3) as usize);
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_set_get_roundtrip() {
        let mut fb = FrameBuffer::with_size(8, 8);
        fb.set_pixel(3, 5, 10, 20, 30);
        assert_eq!(fb.get_pixel(3, 5), Some((10, 20, 30)));
        assert_eq!(fb.get_pixel(0, 0), Some((0, 0, 0)));
    }

    #[test]
    fn test_out_of_bounds_is_harmless() {
        let mut fb = FrameBuffer::with_size(4, 4);
        fb.set_pixel(-1, 0, 255, 255, 255);
        fb.set_pixel(0, 4, 255, 255, 255);
        assert_eq!(fb.get_pixel(-1, 0), None);
        assert_eq!(fb.get_pixel(4, 0), None);
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_row_major_layout() {
        let mut fb = FrameBuffer::with_size(4, 2);
        fb.set_pixel(1, 1, 9, 8, 7);
        let idx = ((1 * 4 + 1) * 3) as usize;
        assert_eq!(&fb.as_bytes()[idx..idx + 3], &[9, 8, 7]);
    }
}
