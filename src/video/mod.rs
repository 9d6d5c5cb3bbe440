//! # Video Processing Module
//!
//! Frame types, the FFmpeg-backed decode/encode collaborators, and the
//! per-effect processing loop that connects them.

pub mod driver;
pub mod sink;
pub mod source;
pub mod types;

pub use driver::{process_video, ProcessingReport};
pub use sink::{FfmpegSink, FrameSink};
pub use source::{FfmpegSource, FrameSource};
pub use types::{Frame, OutputParams, VideoMetadata};
