//! Shared compositing primitives used by the blur and color effects:
//! the per-pixel alpha blend, grayscale masks, Gaussian blur, and the
//! RGB/HSV conversions.

use image::GrayImage;

use crate::{
    error::{EffectError, Result},
    video::types::Frame,
};

/// Standard deviation of the Gaussian blur used by the focus effects
pub const BLUR_SIGMA: f32 = 11.0;

/// Blend two frames of identical dimensions through a per-pixel mask
///
/// Each mask value is interpreted as a blend weight `w = mask / 255`, and the
/// output channel is `round(frame_1 * (1 - w) + frame_2 * w)`. A mask of all
/// zeros returns `frame_1`, a mask of all 255 returns `frame_2`.
pub fn alpha_blend(frame_1: &Frame, frame_2: &Frame, mask: &GrayImage) -> Result<Frame> {
    let (width, height) = frame_1.dimensions();
    if frame_2.dimensions() != (width, height) || mask.dimensions() != (width, height) {
        return Err(EffectError::ShapeMismatch {
            details: format!(
                "alpha_blend inputs {}x{}, {}x{}, mask {}x{}",
                width,
                height,
                frame_2.width(),
                frame_2.height(),
                mask.width(),
                mask.height()
            ),
        }
        .into());
    }

    let mut out = Frame::new_black(width, height);
    for y in 0..height {
        for x in 0..width {
            let weight = mask.get_pixel(x, y)[0] as f32 / 255.0;
            let a = frame_1.get_pixel(x, y);
            let b = frame_2.get_pixel(x, y);

            let pixel = out.get_pixel_mut(x, y);
            for channel in 0..3 {
                let blended =
                    a[channel] as f32 * (1.0 - weight) + b[channel] as f32 * weight;
                pixel[channel] = blended.round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    Ok(out)
}

/// Gaussian-blur a frame with the fixed focus-effect kernel
pub fn gaussian_blur(frame: &Frame) -> Frame {
    Frame::new(image::imageops::blur(frame.as_image(), BLUR_SIGMA))
}

/// Gaussian-blur a grayscale mask with the fixed focus-effect kernel
pub fn blur_mask(mask: &GrayImage) -> GrayImage {
    image::imageops::blur(mask, BLUR_SIGMA)
}

/// Per-pixel complement of a mask
pub fn invert_mask(mask: &GrayImage) -> GrayImage {
    let mut inverted = mask.clone();
    for pixel in inverted.pixels_mut() {
        pixel[0] = 255 - pixel[0];
    }
    inverted
}

/// Rec. 601 luminance of an RGB pixel, matching common video grayscale
pub fn luminance(pixel: [u8; 3]) -> u8 {
    let luma =
        0.299 * pixel[0] as f32 + 0.587 * pixel[1] as f32 + 0.114 * pixel[2] as f32;
    luma.round().clamp(0.0, 255.0) as u8
}

/// Convert an RGB pixel to (hue, saturation, value)
///
/// Hue is in degrees [0, 360), saturation and value in [0, 1].
pub fn rgb_to_hsv(pixel: [u8; 3]) -> (f32, f32, f32) {
    let r = pixel[0] as f32 / 255.0;
    let g = pixel[1] as f32 / 255.0;
    let b = pixel[2] as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta).rem_euclid(6.0))
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    let s = if max == 0.0 { 0.0 } else { delta / max };

    (h, s, max)
}

/// Convert (hue, saturation, value) back to an RGB pixel
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [u8; 3] {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    [
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    ]
}
