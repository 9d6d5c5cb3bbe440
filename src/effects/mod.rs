//! # Frame Transform Library
//!
//! Independent per-frame effects, each mapping one input frame to one output
//! frame. The single exception is the ghost-trail effect, which also threads
//! a [`TemporalState`] holding a retained reference frame and counter.
//!
//! ## Built-in effects
//!
//! - **Color**: `hue_saturation`, `color_overlay`, `sepia`, `invert`
//! - **Focus**: `circle_focus_blur`, `portrait_mode`
//! - **Geometry**: `mirror`, `vmirror`, `corners`, `pixelated`, `hstrip`, `vstrip`
//! - **Temporal**: `goost`
//!
//! ## Usage
//!
//! ```rust
//! use framefx::effects::EffectRegistry;
//!
//! let registry = EffectRegistry::new();
//! let mirror = registry.get("mirror").unwrap();
//! // Apply to frames during video processing
//! ```

pub mod color;
pub mod compositing;
pub mod focus;
pub mod geometry;
pub mod registry;
pub mod temporal;
pub mod traits;

// Re-exports for convenience
pub use registry::EffectRegistry;
pub use traits::{Effect, EffectKind, TemporalState};
