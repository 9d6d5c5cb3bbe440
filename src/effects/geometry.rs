//! Geometric rearrangement effects: mirrors, quadrant swaps, strip flips,
//! and the blocky pixelation resample.
//!
//! The mirror and corner effects rebuild the frame from floor-truncated
//! halves, so an odd input dimension shrinks by one pixel in the output.
//! [`Effect::output_dimensions`] reports the shrink so the driver can size
//! the sink to match.

use image::imageops::{self, FilterType};
use image::RgbImage;

use crate::{effects::traits::Effect, error::Result, video::types::Frame};

/// Reflects the left half of the frame onto the right
pub struct Mirror;

impl Mirror {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Mirror {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for Mirror {
    fn name(&self) -> &str {
        "mirror"
    }

    fn description(&self) -> &str {
        "Left half of the frame reflected onto the right half"
    }

    fn output_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        (2 * (width / 2), height)
    }

    fn apply(&self, frame: &Frame) -> Result<Frame> {
        let (width, height) = frame.dimensions();
        let half = width / 2;

        let left = imageops::crop_imm(frame.as_image(), 0, 0, half, height).to_image();
        let right = imageops::flip_horizontal(&left);

        let mut out = RgbImage::new(2 * half, height);
        imageops::replace(&mut out, &left, 0, 0);
        imageops::replace(&mut out, &right, half as i64, 0);
        Ok(Frame::new(out))
    }
}

/// Reflects the top half of the frame onto the bottom
pub struct VMirror;

impl VMirror {
    pub fn new() -> Self {
        Self
    }
}

impl Default for VMirror {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for VMirror {
    fn name(&self) -> &str {
        "vmirror"
    }

    fn description(&self) -> &str {
        "Top half of the frame reflected onto the bottom half"
    }

    fn output_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        (width, 2 * (height / 2))
    }

    fn apply(&self, frame: &Frame) -> Result<Frame> {
        let (width, height) = frame.dimensions();
        let half = height / 2;

        let top = imageops::crop_imm(frame.as_image(), 0, 0, width, half).to_image();
        let bottom = imageops::flip_vertical(&top);

        let mut out = RgbImage::new(width, 2 * half);
        imageops::replace(&mut out, &top, 0, 0);
        imageops::replace(&mut out, &bottom, 0, half as i64);
        Ok(Frame::new(out))
    }
}

/// Swaps the frame's quadrants diagonally
///
/// Top-left and bottom-right trade places while the other two quadrants
/// stay put, producing a checkerboard-swap rearrangement.
pub struct Corners;

impl Corners {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Corners {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for Corners {
    fn name(&self) -> &str {
        "corners"
    }

    fn description(&self) -> &str {
        "Quarters the frame and swaps diagonally opposite corners"
    }

    fn output_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        (2 * (width / 2), 2 * (height / 2))
    }

    fn apply(&self, frame: &Frame) -> Result<Frame> {
        let (width, height) = frame.dimensions();
        let half_w = width / 2;
        let half_h = height / 2;
        let source = frame.as_image();

        let top_left = imageops::crop_imm(source, 0, 0, half_w, half_h).to_image();
        let top_right = imageops::crop_imm(source, half_w, 0, half_w, half_h).to_image();
        let bottom_left = imageops::crop_imm(source, 0, half_h, half_w, half_h).to_image();
        let bottom_right = imageops::crop_imm(source, half_w, half_h, half_w, half_h).to_image();

        let mut out = RgbImage::new(2 * half_w, 2 * half_h);
        imageops::replace(&mut out, &bottom_right, 0, 0);
        imageops::replace(&mut out, &top_right, half_w as i64, 0);
        imageops::replace(&mut out, &bottom_left, 0, half_h as i64);
        imageops::replace(&mut out, &top_left, half_w as i64, half_h as i64);
        Ok(Frame::new(out))
    }
}

/// Blocky pixelation: downsample to a small fixed grid, then scale back up
/// with nearest-neighbor so the output dimensions always match the input.
pub struct Pixelated {
    block_width: u32,
    block_height: u32,
}

impl Pixelated {
    /// Create a pixelation effect with the given intermediate grid size
    pub fn new(block_width: u32, block_height: u32) -> Self {
        Self {
            block_width: block_width.max(1),
            block_height: block_height.max(1),
        }
    }
}

impl Default for Pixelated {
    fn default() -> Self {
        Self::new(64, 64)
    }
}

impl Effect for Pixelated {
    fn name(&self) -> &str {
        "pixelated"
    }

    fn description(&self) -> &str {
        "Retro pixelation: linear downsample to a coarse grid, nearest-neighbor back up"
    }

    fn apply(&self, frame: &Frame) -> Result<Frame> {
        let (width, height) = frame.dimensions();

        let small = imageops::resize(
            frame.as_image(),
            self.block_width,
            self.block_height,
            FilterType::Triangle,
        );
        let restored = imageops::resize(&small, width, height, FilterType::Nearest);
        Ok(Frame::new(restored))
    }
}

/// Strip boundaries at the quarter points of `extent`, truncated the way the
/// strips are cut: each boundary independently, by float multiplication.
fn quarter_bounds(extent: u32) -> [u32; 5] {
    [
        0,
        (extent as f32 * 0.25) as u32,
        (extent as f32 * 0.50) as u32,
        (extent as f32 * 0.75) as u32,
        extent,
    ]
}

/// Slices the frame into four horizontal strips and flips the 2nd and 4th
/// ones left-to-right. The strips tile the frame exactly, so the output
/// dimensions equal the input dimensions.
pub struct HStrip;

impl HStrip {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HStrip {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for HStrip {
    fn name(&self) -> &str {
        "hstrip"
    }

    fn description(&self) -> &str {
        "Four horizontal strips with every other strip flipped left-to-right"
    }

    fn apply(&self, frame: &Frame) -> Result<Frame> {
        let (width, height) = frame.dimensions();
        let bounds = quarter_bounds(height);

        let mut out = RgbImage::new(width, height);
        for i in 0..4 {
            let top = bounds[i];
            let strip_height = bounds[i + 1] - top;
            let mut strip =
                imageops::crop_imm(frame.as_image(), 0, top, width, strip_height).to_image();
            if i % 2 == 1 {
                strip = imageops::flip_horizontal(&strip);
            }
            imageops::replace(&mut out, &strip, 0, top as i64);
        }
        Ok(Frame::new(out))
    }
}

/// Slices the frame into four vertical strips and flips the 2nd and 4th
/// ones top-to-bottom.
pub struct VStrip;

impl VStrip {
    pub fn new() -> Self {
        Self
    }
}

impl Default for VStrip {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for VStrip {
    fn name(&self) -> &str {
        "vstrip"
    }

    fn description(&self) -> &str {
        "Four vertical strips with every other strip flipped top-to-bottom"
    }

    fn apply(&self, frame: &Frame) -> Result<Frame> {
        let (width, height) = frame.dimensions();
        let bounds = quarter_bounds(width);

        let mut out = RgbImage::new(width, height);
        for i in 0..4 {
            let left = bounds[i];
            let strip_width = bounds[i + 1] - left;
            let mut strip =
                imageops::crop_imm(frame.as_image(), left, 0, strip_width, height).to_image();
            if i % 2 == 1 {
                strip = imageops::flip_vertical(&strip);
            }
            imageops::replace(&mut out, &strip, left as i64, 0);
        }
        Ok(Frame::new(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Frame whose pixel at (x, y) encodes its own coordinates
    fn coordinate_frame(width: u32, height: u32) -> Frame {
        let mut frame = Frame::new_black(width, height);
        for y in 0..height {
            for x in 0..width {
                frame.set_pixel(x, y, [x as u8, y as u8, 0]);
            }
        }
        frame
    }

    #[test]
    fn mirror_reflects_left_half() {
        let frame = coordinate_frame(4, 4);
        let out = Mirror::new().apply(&frame).unwrap();

        assert_eq!(out.dimensions(), (4, 4));
        for y in 0..4 {
            for x in 0..2 {
                assert_eq!(out.get_pixel(x, y), frame.get_pixel(x, y));
                // Right side mirrors the left: column 3 equals column 0
                assert_eq!(out.get_pixel(3 - x, y), frame.get_pixel(x, y));
            }
        }
    }

    #[test]
    fn mirror_truncates_odd_width() {
        let frame = coordinate_frame(5, 3);
        let out = Mirror::new().apply(&frame).unwrap();
        assert_eq!(out.dimensions(), (4, 3));
        assert_eq!(
            Mirror::new().output_dimensions(5, 3),
            out.dimensions()
        );
    }

    #[test]
    fn vmirror_reflects_top_half() {
        let frame = coordinate_frame(3, 4);
        let out = VMirror::new().apply(&frame).unwrap();

        assert_eq!(out.dimensions(), (3, 4));
        for x in 0..3 {
            assert_eq!(out.get_pixel(x, 3), frame.get_pixel(x, 0));
            assert_eq!(out.get_pixel(x, 2), frame.get_pixel(x, 1));
        }
    }

    #[test]
    fn vmirror_truncates_odd_height() {
        let frame = coordinate_frame(3, 5);
        let out = VMirror::new().apply(&frame).unwrap();
        assert_eq!(out.dimensions(), (3, 4));
    }

    #[test]
    fn corners_swaps_diagonals() {
        let frame = coordinate_frame(4, 4);
        let out = Corners::new().apply(&frame).unwrap();

        assert_eq!(out.dimensions(), (4, 4));
        // Bottom-right quadrant moved to the top-left
        assert_eq!(out.get_pixel(0, 0), frame.get_pixel(2, 2));
        // Top-left quadrant moved to the bottom-right
        assert_eq!(out.get_pixel(2, 2), frame.get_pixel(0, 0));
        // Top-right and bottom-left stay in place
        assert_eq!(out.get_pixel(2, 0), frame.get_pixel(2, 0));
        assert_eq!(out.get_pixel(0, 2), frame.get_pixel(0, 2));
    }

    #[test]
    fn corners_truncates_odd_dimensions() {
        let frame = coordinate_frame(5, 7);
        let out = Corners::new().apply(&frame).unwrap();
        assert_eq!(out.dimensions(), (4, 6));
    }

    #[test]
    fn pixelated_preserves_dimensions() {
        for (w, h) in [(100, 80), (64, 64), (7, 130)] {
            let frame = Frame::new_filled(w, h, [50, 100, 150]);
            let out = Pixelated::default().apply(&frame).unwrap();
            assert_eq!(out.dimensions(), (w, h));
        }
    }

    #[test]
    fn pixelated_uniform_frame_is_unchanged() {
        let frame = Frame::new_filled(32, 32, [200, 10, 60]);
        let out = Pixelated::default().apply(&frame).unwrap();
        assert_eq!(out, frame);
    }

    #[test]
    fn hstrip_flips_second_and_fourth_strips() {
        let frame = coordinate_frame(8, 8);
        let out = HStrip::new().apply(&frame).unwrap();

        assert_eq!(out.dimensions(), (8, 8));
        // Strip 1 (rows 0..2) untouched
        assert_eq!(out.get_pixel(0, 0), frame.get_pixel(0, 0));
        // Strip 2 (rows 2..4) flipped left-to-right
        assert_eq!(out.get_pixel(0, 2), frame.get_pixel(7, 2));
        // Strip 3 (rows 4..6) untouched
        assert_eq!(out.get_pixel(3, 5), frame.get_pixel(3, 5));
        // Strip 4 (rows 6..8) flipped left-to-right
        assert_eq!(out.get_pixel(7, 7), frame.get_pixel(0, 7));
    }

    #[test]
    fn vstrip_flips_second_and_fourth_strips() {
        let frame = coordinate_frame(8, 8);
        let out = VStrip::new().apply(&frame).unwrap();

        assert_eq!(out.dimensions(), (8, 8));
        // Strip 2 (columns 2..4) flipped top-to-bottom
        assert_eq!(out.get_pixel(2, 0), frame.get_pixel(2, 7));
        // Strip 1 and 3 untouched
        assert_eq!(out.get_pixel(0, 3), frame.get_pixel(0, 3));
        assert_eq!(out.get_pixel(5, 3), frame.get_pixel(5, 3));
    }

    #[test]
    fn strip_effects_tile_odd_extents() {
        // Boundaries truncate independently but the strips still cover the
        // whole frame, so dimensions are preserved even for odd sizes
        let frame = coordinate_frame(9, 11);
        assert_eq!(HStrip::new().apply(&frame).unwrap().dimensions(), (9, 11));
        assert_eq!(VStrip::new().apply(&frame).unwrap().dimensions(), (9, 11));
    }

    #[test]
    fn quarter_bounds_truncate() {
        assert_eq!(quarter_bounds(10), [0, 2, 5, 7, 10]);
        assert_eq!(quarter_bounds(8), [0, 2, 4, 6, 8]);
    }
}
