//! Blur-driven focus effects: a soft circular focus region and a
//! luminance-keyed portrait blur. Both composite a sharp frame against a
//! Gaussian-blurred copy through a mask.

use image::GrayImage;

use crate::{
    effects::compositing::{alpha_blend, blur_mask, gaussian_blur, invert_mask, luminance},
    effects::traits::Effect,
    error::Result,
    video::types::Frame,
};

/// Luminance threshold separating foreground from background in
/// [`PortraitMode`]
const PORTRAIT_THRESHOLD: u8 = 120;

/// Keeps a centered circular region sharp and blurs everything outside it
///
/// The circle is always centered with radius a quarter of the frame height,
/// and the mask itself is blurred so the sharp region fades smoothly into
/// the blurred surround.
pub struct CircleFocusBlur;

impl CircleFocusBlur {
    pub fn new() -> Self {
        Self
    }

    fn circle_mask(width: u32, height: u32) -> GrayImage {
        let cx = (width / 2) as i64;
        let cy = (height / 2) as i64;
        let radius = (height / 4) as i64;
        let radius_sq = radius * radius;

        GrayImage::from_fn(width, height, |x, y| {
            let dx = x as i64 - cx;
            let dy = y as i64 - cy;
            if dx * dx + dy * dy <= radius_sq {
                image::Luma([255])
            } else {
                image::Luma([0])
            }
        })
    }
}

impl Default for CircleFocusBlur {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for CircleFocusBlur {
    fn name(&self) -> &str {
        "circle_focus_blur"
    }

    fn description(&self) -> &str {
        "Sharp circular focus region in the center, Gaussian blur everywhere else"
    }

    fn apply(&self, frame: &Frame) -> Result<Frame> {
        let (width, height) = frame.dimensions();

        let mask = blur_mask(&Self::circle_mask(width, height));
        let blurred = gaussian_blur(frame);

        // Weight 0 inside the circle keeps the sharp frame there
        alpha_blend(frame, &blurred, &invert_mask(&mask))
    }
}

/// Fake depth-of-field: bright pixels are treated as background and blurred,
/// dark pixels keep the sharp frame. The binary mask is used directly with
/// no feathering.
pub struct PortraitMode;

impl PortraitMode {
    pub fn new() -> Self {
        Self
    }

    fn threshold_mask(frame: &Frame) -> GrayImage {
        let (width, height) = frame.dimensions();
        GrayImage::from_fn(width, height, |x, y| {
            if luminance(frame.get_pixel(x, y)) > PORTRAIT_THRESHOLD {
                image::Luma([255])
            } else {
                image::Luma([0])
            }
        })
    }
}

impl Default for PortraitMode {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for PortraitMode {
    fn name(&self) -> &str {
        "portrait_mode"
    }

    fn description(&self) -> &str {
        "Luminance-keyed portrait blur: bright regions blurred, dark regions sharp"
    }

    fn apply(&self, frame: &Frame) -> Result<Frame> {
        let mask = Self::threshold_mask(frame);
        let blurred = gaussian_blur(frame);
        alpha_blend(frame, &blurred, &mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_focus_preserves_dimensions() {
        let frame = Frame::new_filled(32, 24, [80, 120, 200]);
        let out = CircleFocusBlur::new().apply(&frame).unwrap();
        assert_eq!(out.dimensions(), (32, 24));
    }

    #[test]
    fn circle_focus_keeps_center_on_uniform_frame() {
        // A uniform frame blurs to itself, so the composite is the identity
        let frame = Frame::new_filled(20, 20, [90, 90, 90]);
        let out = CircleFocusBlur::new().apply(&frame).unwrap();
        assert_eq!(out.get_pixel(10, 10), [90, 90, 90]);
    }

    #[test]
    fn circle_mask_shape() {
        let mask = CircleFocusBlur::circle_mask(40, 40);
        // Center inside the radius, corner outside
        assert_eq!(mask.get_pixel(20, 20)[0], 255);
        assert_eq!(mask.get_pixel(0, 0)[0], 0);
        // Radius is a quarter of the height
        assert_eq!(mask.get_pixel(20, 20 + 9)[0], 255);
        assert_eq!(mask.get_pixel(20, 20 + 11)[0], 0);
    }

    #[test]
    fn portrait_mode_blurs_only_bright_regions() {
        // Left half dark (sharp), right half bright (blurred)
        let mut frame = Frame::new_black(16, 8);
        for y in 0..8 {
            for x in 8..16 {
                frame.set_pixel(x, y, [255, 255, 255]);
            }
        }

        let out = PortraitMode::new().apply(&frame).unwrap();
        assert_eq!(out.dimensions(), (16, 8));
        // A dark pixel far from the boundary passes through untouched
        assert_eq!(out.get_pixel(0, 4), [0, 0, 0]);
        // A bright pixel near the boundary picks up blurred-in darkness
        assert!(out.get_pixel(8, 4)[0] < 255);
    }

    #[test]
    fn portrait_mask_thresholds_on_luminance() {
        let mut frame = Frame::new_black(2, 1);
        frame.set_pixel(0, 0, [255, 255, 255]);
        frame.set_pixel(1, 0, [100, 100, 100]);

        let mask = PortraitMode::threshold_mask(&frame);
        assert_eq!(mask.get_pixel(0, 0)[0], 255);
        assert_eq!(mask.get_pixel(1, 0)[0], 0);
    }
}
