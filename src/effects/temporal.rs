//! The ghost-trail effect, the one transform that carries state between
//! frames.

use crate::{
    effects::traits::{Effect, EffectKind, TemporalState},
    error::Result,
    video::types::Frame,
};

/// Number of frames between reference-frame refreshes
pub const REFERENCE_REFRESH_INTERVAL: u32 = 10;

/// Ghost-trail effect: blends each frame 50/50 with a retained reference
/// frame that is only refreshed every [`REFERENCE_REFRESH_INTERVAL`] frames
///
/// Because the reference stays stale between refreshes, consecutive frames
/// keep blending against the same old image, which builds up the drifting
/// ghost trail. A frame whose dimensions differ from the reference (or an
/// unseeded state, from an empty source) passes through unchanged.
pub struct Goost;

impl Goost {
    pub fn new() -> Self {
        Self
    }

    fn blend_half(a: &Frame, b: &Frame) -> Frame {
        let (width, height) = a.dimensions();
        let mut out = Frame::new_black(width, height);
        for y in 0..height {
            for x in 0..width {
                let pa = a.get_pixel(x, y);
                let pb = b.get_pixel(x, y);
                let pixel = out.get_pixel_mut(x, y);
                for channel in 0..3 {
                    pixel[channel] =
                        ((pa[channel] as u16 + pb[channel] as u16 + 1) / 2) as u8;
                }
            }
        }
        out
    }
}

impl Default for Goost {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for Goost {
    fn name(&self) -> &str {
        "goost"
    }

    fn description(&self) -> &str {
        "Ghost trail: frames blended against a slowly-refreshing reference frame"
    }

    fn kind(&self) -> EffectKind {
        EffectKind::Temporal
    }

    /// Stateless fallback: without a reference frame there is nothing to
    /// blend against, so the frame passes through
    fn apply(&self, frame: &Frame) -> Result<Frame> {
        Ok(frame.clone())
    }

    fn apply_temporal(&self, frame: &Frame, state: &mut TemporalState) -> Result<Frame> {
        let blended = match state.reference.as_ref() {
            Some(reference) if reference.dimensions() == frame.dimensions() => {
                Self::blend_half(frame, reference)
            }
            // Shape mismatch or missing seed degrades to pass-through
            _ => frame.clone(),
        };

        state.counter += 1;
        if state.counter == REFERENCE_REFRESH_INTERVAL {
            state.reference = Some(blended.clone());
            state.counter = 0;
        }

        Ok(blended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blends_half_and_half() {
        let mut state = TemporalState::new();
        state.seed(Frame::new_filled(4, 4, [0, 0, 0]));

        let frame = Frame::new_filled(4, 4, [200, 100, 50]);
        let out = Goost::new().apply_temporal(&frame, &mut state).unwrap();
        assert_eq!(out.get_pixel(0, 0), [100, 50, 25]);
    }

    #[test]
    fn reference_refreshes_on_the_tenth_call_only() {
        let effect = Goost::new();
        let mut state = TemporalState::new();
        let seed = Frame::new_filled(4, 4, [0, 0, 0]);
        state.seed(seed.clone());

        let white = Frame::new_filled(4, 4, [255, 255, 255]);
        for call in 1..=9u32 {
            effect.apply_temporal(&white, &mut state).unwrap();
            assert_eq!(state.counter, call);
            // Reference stays the stale seed for the first nine calls
            assert_eq!(state.reference.as_ref().unwrap(), &seed);
        }

        // Tenth call snapshots the blended output and resets the counter
        let tenth = effect.apply_temporal(&white, &mut state).unwrap();
        assert_eq!(state.counter, 0);
        assert_eq!(state.reference.as_ref().unwrap(), &tenth);
        assert_ne!(state.reference.as_ref().unwrap(), &seed);

        // And the cycle begins again
        effect.apply_temporal(&white, &mut state).unwrap();
        assert_eq!(state.counter, 1);
    }

    #[test]
    fn counter_cycles_over_eleven_identical_frames() {
        let effect = Goost::new();
        let mut state = TemporalState::new();
        let frame = Frame::new_filled(2, 2, [80, 80, 80]);
        state.seed(frame.clone());

        let mut refreshes = 0;
        let mut counters = Vec::new();
        for _ in 0..11 {
            let before = state.reference.clone();
            effect.apply_temporal(&frame, &mut state).unwrap();
            counters.push(state.counter);
            if state.counter == 0 {
                refreshes += 1;
            }
            // Identical frames blend to themselves, so even the refresh
            // leaves the reference pixel-identical
            assert_eq!(state.reference, before);
        }

        assert_eq!(refreshes, 1);
        assert_eq!(counters, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1]);
    }

    #[test]
    fn shape_mismatch_passes_through() {
        let mut state = TemporalState::new();
        state.seed(Frame::new_filled(8, 8, [0, 0, 0]));

        let frame = Frame::new_filled(4, 4, [123, 45, 67]);
        let out = Goost::new().apply_temporal(&frame, &mut state).unwrap();
        assert_eq!(out, frame);
    }

    #[test]
    fn unseeded_state_passes_through() {
        let mut state = TemporalState::new();
        let frame = Frame::new_filled(4, 4, [9, 8, 7]);
        let out = Goost::new().apply_temporal(&frame, &mut state).unwrap();
        assert_eq!(out, frame);
        assert_eq!(state.counter, 1);
    }
}
