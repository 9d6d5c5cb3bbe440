//! The per-effect processing loop
//!
//! One run moves through three phases. Opening: the collaborators are
//! already connected and the first decoded frame is read as the temporal
//! seed. Streaming: frames are read, transformed, and written strictly in
//! order, one frame in flight. Closed: both collaborators are released,
//! on every exit path.

use tracing::{debug, info};

use crate::{
    effects::{Effect, EffectKind, TemporalState},
    error::Result,
    video::sink::FrameSink,
    video::source::FrameSource,
};

/// What a completed driver run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingReport {
    /// Number of frames written to the sink
    pub frames_written: u64,
}

/// Run one full Opening, Streaming, Closed cycle for a single effect
///
/// The first decoded frame only seeds the temporal reference slot and is
/// never transformed or written, so the first output frame corresponds to
/// the second decoded frame and a one-frame source produces an empty
/// output. The seed is read for every effect, temporal or not.
pub fn process_video<S, K>(
    source: &mut S,
    sink: &mut K,
    effect: &dyn Effect,
) -> Result<ProcessingReport>
where
    S: FrameSource,
    K: FrameSink,
{
    info!("Processing stream with effect '{}'", effect.name());

    // Opening: seed the temporal state. An empty source leaves it unseeded,
    // which the temporal effect tolerates as pass-through.
    let mut state = TemporalState::new();
    match source.read_frame() {
        Some(seed) => state.seed(seed),
        None => debug!("source yielded no frames; temporal state left unseeded"),
    }

    let mut frames_written: u64 = 0;
    let stream_result = loop {
        // "No frame" covers both end-of-stream and decode failure
        let frame = match source.read_frame() {
            Some(frame) => frame,
            None => break Ok(()),
        };

        let processed = match effect.kind() {
            EffectKind::Stateless => effect.apply(&frame),
            EffectKind::Temporal => effect.apply_temporal(&frame, &mut state),
        };

        match processed.and_then(|out| sink.write_frame(&out)) {
            Ok(()) => frames_written += 1,
            Err(e) => break Err(e),
        }
    };

    // Closed: release both collaborators regardless of how streaming ended
    source.close();
    let finish_result = sink.finish();
    stream_result.and(finish_result)?;

    debug!("Wrote {} frames with effect '{}'", frames_written, effect.name());
    Ok(ProcessingReport { frames_written })
}
