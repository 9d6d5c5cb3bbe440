use crate::{error::Result, video::types::Frame};

/// Dispatch tag telling the driver whether an effect needs temporal state
///
/// The driver decides which apply method to call by matching on this tag,
/// never by comparing effect identities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectKind {
    /// The effect maps one input frame to one output frame
    Stateless,

    /// The effect additionally reads and updates a [`TemporalState`]
    Temporal,
}

/// State threaded through a temporal effect by the driver
///
/// The driver owns one of these per run, seeds it with the first decoded
/// frame, and passes it by mutable reference into every temporal apply call.
/// The effect replaces the reference frame and counter as it sees fit.
#[derive(Clone, Debug, Default)]
pub struct TemporalState {
    /// The retained reference frame, `None` until seeding succeeds
    pub reference: Option<Frame>,

    /// Rolling counter controlling when the reference frame is refreshed
    pub counter: u32,
}

impl TemporalState {
    /// Create an unseeded state
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `frame` as the reference frame, leaving the counter untouched
    pub fn seed(&mut self, frame: Frame) {
        self.reference = Some(frame);
    }
}

/// Core trait that all frame effects implement
///
/// Effects are pure mappings from an input frame to an output frame, except
/// for [`EffectKind::Temporal`] effects which also thread a [`TemporalState`].
/// An effect must return a frame of the dimensions promised by
/// [`output_dimensions`](Effect::output_dimensions) for its input size.
pub trait Effect: Send + Sync {
    /// Returns the unique name of this effect, used for output file naming
    fn name(&self) -> &str;

    /// Returns a human-readable description of this effect
    fn description(&self) -> &str;

    /// Returns the dispatch tag for this effect
    fn kind(&self) -> EffectKind {
        EffectKind::Stateless
    }

    /// Output dimensions produced for an input of the given size
    ///
    /// Geometric effects that rebuild the frame from floor-truncated halves
    /// override this to shrink odd dimensions by one pixel. The driver uses
    /// the result to configure the video sink before streaming begins.
    fn output_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        (width, height)
    }

    /// Apply the effect to a single frame
    fn apply(&self, frame: &Frame) -> Result<Frame>;

    /// Apply a temporal effect to a frame, updating the threaded state
    ///
    /// The default implementation ignores the state and behaves statelessly;
    /// only [`EffectKind::Temporal`] effects override it.
    fn apply_temporal(&self, frame: &Frame, state: &mut TemporalState) -> Result<Frame> {
        let _ = state;
        self.apply(frame)
    }
}
