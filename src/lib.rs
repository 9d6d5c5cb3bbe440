//! # framefx
//!
//! Batch per-frame video effects: feed in one clip, get one output video per
//! effect.
//!
//! The crate is a small library of independent frame transforms plus the
//! driver loop that streams a video through one of them. Decoding and
//! encoding are delegated to an external FFmpeg installation; frames travel
//! through the pipeline as raw RGB buffers.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use framefx::{
//!     batch::BatchRunner,
//!     config::Config,
//!     effects::EffectRegistry,
//! };
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::default();
//! let registry = EffectRegistry::new();
//! let effects: Vec<_> = registry.iter().collect();
//!
//! let runner = BatchRunner::new(config);
//! let summary = runner.run(
//!     "clip.mp4".as_ref(),
//!     "output/".as_ref(),
//!     &effects,
//! )?;
//! println!("{} effects succeeded", summary.succeeded.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`effects`] - The frame transform library and effect registry
//! - [`video`] - Frame types, FFmpeg collaborators, and the driver loop
//! - [`batch`] - One driver run per effect with failure isolation
//! - [`config`] - Output encoding configuration
//!
//! ## Creating Custom Effects
//!
//! Implement the [`Effect`](effects::Effect) trait and register it:
//!
//! ```rust
//! use framefx::effects::{Effect, EffectRegistry};
//! use framefx::video::Frame;
//! use framefx::Result;
//!
//! struct Grayscale;
//!
//! impl Effect for Grayscale {
//!     fn name(&self) -> &str {
//!         "grayscale"
//!     }
//!
//!     fn description(&self) -> &str {
//!         "Collapse every pixel to its luminance"
//!     }
//!
//!     fn apply(&self, frame: &Frame) -> Result<Frame> {
//!         // Your effect implementation
//!         Ok(frame.clone())
//!     }
//! }
//!
//! let mut registry = EffectRegistry::new();
//! registry.register(Box::new(Grayscale));
//! ```

pub mod batch;
pub mod config;
pub mod effects;
pub mod error;
pub mod video;

// Re-export commonly used types for convenience
pub use crate::{
    batch::{BatchRunner, BatchSummary},
    config::Config,
    effects::{Effect, EffectRegistry},
    error::{FramefxError, Result},
    video::Frame,
};
