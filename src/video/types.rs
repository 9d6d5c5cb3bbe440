use image::{ImageBuffer, Rgb, RgbImage};

/// Represents a single video frame
///
/// This is a simple wrapper around an RGB image buffer that provides
/// convenient methods for pixel manipulation used by effects, plus raw-byte
/// round-trips for the rawvideo pipe to and from FFmpeg.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    buffer: RgbImage,
}

impl Frame {
    /// Create a new frame from an RGB image buffer
    pub fn new(buffer: RgbImage) -> Self {
        Self { buffer }
    }

    /// Create a new frame with the given dimensions filled with black
    pub fn new_black(width: u32, height: u32) -> Self {
        let buffer = ImageBuffer::new(width, height);
        Self { buffer }
    }

    /// Create a new frame with the given dimensions filled with the specified color
    pub fn new_filled(width: u32, height: u32, color: [u8; 3]) -> Self {
        let buffer = ImageBuffer::from_fn(width, height, |_, _| Rgb(color));
        Self { buffer }
    }

    /// Get the width of the frame
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    /// Get the height of the frame
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Get the (width, height) pair of the frame
    pub fn dimensions(&self) -> (u32, u32) {
        self.buffer.dimensions()
    }

    /// Get a pixel at the given coordinates (returns RGB array)
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let pixel = self.buffer.get_pixel(x, y);
        [pixel[0], pixel[1], pixel[2]]
    }

    /// Get a mutable reference to a pixel at the given coordinates
    pub fn get_pixel_mut(&mut self, x: u32, y: u32) -> &mut [u8] {
        let pixel = self.buffer.get_pixel_mut(x, y);
        &mut pixel.0
    }

    /// Set a pixel at the given coordinates
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 3]) {
        self.buffer.put_pixel(x, y, Rgb(color));
    }

    /// Get the underlying image buffer
    pub fn as_image(&self) -> &RgbImage {
        &self.buffer
    }

    /// Get a mutable reference to the underlying image buffer
    pub fn as_image_mut(&mut self) -> &mut RgbImage {
        &mut self.buffer
    }

    /// Consume the frame and return the underlying image buffer
    pub fn into_image(self) -> RgbImage {
        self.buffer
    }

    /// View the frame as raw RGB24 bytes, row-major, no padding
    pub fn as_raw_bytes(&self) -> &[u8] {
        self.buffer.as_raw()
    }

    /// Create a frame from raw RGB24 bytes
    ///
    /// Returns `None` when the byte count does not match `width * height * 3`.
    pub fn from_raw_bytes(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        ImageBuffer::from_raw(width, height, data).map(|buffer| Self { buffer })
    }

    /// Save the frame as a PNG file
    pub fn save_png<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), image::ImageError> {
        self.buffer.save(path)
    }
}

/// Stream properties reported by the decoding collaborator
#[derive(Debug, Clone, PartialEq)]
pub struct VideoMetadata {
    /// Frame width in pixels
    pub width: u32,

    /// Frame height in pixels
    pub height: u32,

    /// Frames per second
    pub fps: f64,
}

/// Encoding parameters handed to the video sink
#[derive(Debug, Clone)]
pub struct OutputParams {
    /// Output frame width in pixels
    pub width: u32,

    /// Output frame height in pixels
    pub height: u32,

    /// Frames per second
    pub fps: f64,

    /// FFmpeg encoder name, e.g. "mpeg4"
    pub encoder: String,

    /// Four-character codec tag written into the container
    pub fourcc: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_byte_roundtrip() {
        let frame = Frame::new_filled(3, 2, [10, 20, 30]);
        let bytes = frame.as_raw_bytes().to_vec();
        assert_eq!(bytes.len(), 3 * 2 * 3);

        let restored = Frame::from_raw_bytes(3, 2, bytes).unwrap();
        assert_eq!(restored, frame);
    }

    #[test]
    fn from_raw_bytes_rejects_short_buffer() {
        assert!(Frame::from_raw_bytes(4, 4, vec![0u8; 5]).is_none());
    }

    #[test]
    fn pixel_accessors() {
        let mut frame = Frame::new_black(2, 2);
        frame.set_pixel(1, 0, [1, 2, 3]);
        assert_eq!(frame.get_pixel(1, 0), [1, 2, 3]);
        assert_eq!(frame.get_pixel(0, 0), [0, 0, 0]);

        frame.get_pixel_mut(0, 1)[2] = 9;
        assert_eq!(frame.get_pixel(0, 1), [0, 0, 9]);
    }
}
