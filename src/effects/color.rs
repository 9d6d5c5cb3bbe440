//! Color remapping effects: forced-saturation remap, constant-color
//! overlays, and the per-pixel complement.

use crate::{
    effects::compositing::{hsv_to_rgb, rgb_to_hsv},
    effects::traits::Effect,
    error::Result,
    video::types::Frame,
};

/// Saturation forced onto every pixel by [`HueSaturation`], on a 0-255 scale
const FORCED_SATURATION: f32 = 199.0;

/// Weight of the saturation-forced image in the output blend
const ADJUSTED_WEIGHT: f32 = 0.25;

/// Constant brightness offset added after blending
const BRIGHTNESS_OFFSET: f32 = 0.23;

/// Forces saturation and value in HSV space, then blends a quarter of the
/// result back over the original with a small brightness lift.
pub struct HueSaturation;

impl HueSaturation {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HueSaturation {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for HueSaturation {
    fn name(&self) -> &str {
        "hue_saturation"
    }

    fn description(&self) -> &str {
        "Vivid color remap: saturation and value forced in HSV space, blended 25% over the original"
    }

    fn apply(&self, frame: &Frame) -> Result<Frame> {
        let (width, height) = frame.dimensions();
        let mut out = Frame::new_black(width, height);

        for y in 0..height {
            for x in 0..width {
                let original = frame.get_pixel(x, y);
                let (h, _, _) = rgb_to_hsv(original);
                let adjusted = hsv_to_rgb(h, FORCED_SATURATION / 255.0, 1.0);

                let pixel = out.get_pixel_mut(x, y);
                for channel in 0..3 {
                    let value = adjusted[channel] as f32 * ADJUSTED_WEIGHT
                        + original[channel] as f32
                        + BRIGHTNESS_OFFSET;
                    pixel[channel] = value.round().clamp(0.0, 255.0) as u8;
                }
            }
        }

        Ok(out)
    }
}

/// Alpha-blends a constant-color overlay over every frame
///
/// The overlay keeps the original at full weight, so `intensity` 0 is the
/// identity and higher intensities progressively tint and brighten.
pub struct ColorOverlay {
    intensity: f32,
    color: [u8; 3],
}

impl ColorOverlay {
    /// Create an overlay with the given intensity in [0, 1] and RGB color
    pub fn new(intensity: f32, color: [u8; 3]) -> Self {
        Self {
            intensity: intensity.clamp(0.0, 1.0),
            color,
        }
    }
}

impl Default for ColorOverlay {
    fn default() -> Self {
        Self::new(0.5, [0, 218, 0])
    }
}

impl Effect for ColorOverlay {
    fn name(&self) -> &str {
        "color_overlay"
    }

    fn description(&self) -> &str {
        "Tints the frame with a constant color overlay at a configurable intensity"
    }

    fn apply(&self, frame: &Frame) -> Result<Frame> {
        Ok(blend_overlay(frame, self.color, self.intensity))
    }
}

/// Classic sepia tone, same overlay mechanism as [`ColorOverlay`] with a
/// fixed warm brown.
pub struct Sepia {
    intensity: f32,
}

/// Sepia overlay tone
const SEPIA_TONE: [u8; 3] = [112, 66, 20];

impl Sepia {
    pub fn new(intensity: f32) -> Self {
        Self {
            intensity: intensity.clamp(0.0, 1.0),
        }
    }
}

impl Default for Sepia {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl Effect for Sepia {
    fn name(&self) -> &str {
        "sepia"
    }

    fn description(&self) -> &str {
        "Warm sepia tint over the whole frame"
    }

    fn apply(&self, frame: &Frame) -> Result<Frame> {
        Ok(blend_overlay(frame, SEPIA_TONE, self.intensity))
    }
}

/// Weighted add of a constant color over the frame: the original keeps full
/// weight and the overlay is scaled by `intensity`, saturating at white.
fn blend_overlay(frame: &Frame, color: [u8; 3], intensity: f32) -> Frame {
    let (width, height) = frame.dimensions();
    let mut out = Frame::new_black(width, height);

    for y in 0..height {
        for x in 0..width {
            let original = frame.get_pixel(x, y);
            let pixel = out.get_pixel_mut(x, y);
            for channel in 0..3 {
                let value = color[channel] as f32 * intensity + original[channel] as f32;
                pixel[channel] = value.round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    out
}

/// Per-pixel bitwise complement of all channels
pub struct Invert;

impl Invert {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Invert {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for Invert {
    fn name(&self) -> &str {
        "invert"
    }

    fn description(&self) -> &str {
        "Negative image: every channel of every pixel complemented"
    }

    fn apply(&self, frame: &Frame) -> Result<Frame> {
        let mut buffer = frame.as_image().clone();
        image::imageops::invert(&mut buffer);
        Ok(Frame::new(buffer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_frame(width: u32, height: u32) -> Frame {
        let mut frame = Frame::new_black(width, height);
        for y in 0..height {
            for x in 0..width {
                frame.set_pixel(x, y, [(x * 37 % 256) as u8, (y * 91 % 256) as u8, 120]);
            }
        }
        frame
    }

    #[test]
    fn invert_is_an_involution() {
        let frame = gradient_frame(5, 4);
        let effect = Invert::new();

        let twice = effect.apply(&effect.apply(&frame).unwrap()).unwrap();
        assert_eq!(twice, frame);
    }

    #[test]
    fn invert_complements_channels() {
        let frame = Frame::new_filled(2, 2, [0, 100, 255]);
        let inverted = Invert::new().apply(&frame).unwrap();
        assert_eq!(inverted.get_pixel(0, 0), [255, 155, 0]);
    }

    #[test]
    fn color_overlay_zero_intensity_is_identity() {
        let frame = gradient_frame(6, 3);
        let effect = ColorOverlay::new(0.0, [0, 218, 0]);
        assert_eq!(effect.apply(&frame).unwrap(), frame);
    }

    #[test]
    fn sepia_zero_intensity_is_identity() {
        let frame = gradient_frame(6, 3);
        let effect = Sepia::new(0.0);
        assert_eq!(effect.apply(&frame).unwrap(), frame);
    }

    #[test]
    fn overlay_brightens_toward_tint() {
        let frame = Frame::new_filled(2, 2, [10, 10, 10]);
        let tinted = ColorOverlay::new(1.0, [0, 218, 0]).apply(&frame).unwrap();
        // Overlay adds on top of the original rather than replacing it
        assert_eq!(tinted.get_pixel(0, 0), [10, 228, 10]);
    }

    #[test]
    fn overlay_saturates_at_white() {
        let frame = Frame::new_filled(1, 1, [200, 200, 200]);
        let tinted = ColorOverlay::new(1.0, [255, 255, 255]).apply(&frame).unwrap();
        assert_eq!(tinted.get_pixel(0, 0), [255, 255, 255]);
    }

    #[test]
    fn hue_saturation_preserves_dimensions() {
        let frame = gradient_frame(7, 5);
        let out = HueSaturation::new().apply(&frame).unwrap();
        assert_eq!(out.dimensions(), frame.dimensions());
    }

    #[test]
    fn hue_saturation_never_darkens() {
        // The blend keeps the original at full weight and only adds on top
        let frame = gradient_frame(4, 4);
        let out = HueSaturation::new().apply(&frame).unwrap();
        for y in 0..4 {
            for x in 0..4 {
                let before = frame.get_pixel(x, y);
                let after = out.get_pixel(x, y);
                for channel in 0..3 {
                    assert!(after[channel] >= before[channel]);
                }
            }
        }
    }
}
