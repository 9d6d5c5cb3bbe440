//! # Batch Orchestrator
//!
//! Runs the processing driver once per selected effect, sequentially,
//! writing one output video per effect. Effects are isolated from each
//! other: a failure is logged and recorded, and the batch moves on.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::{
    config::Config,
    effects::Effect,
    error::Result,
    video::driver::{process_video, ProcessingReport},
    video::sink::FfmpegSink,
    video::source::{FfmpegSource, FrameSource},
    video::types::OutputParams,
};

/// Per-effect outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Names of effects whose output was written successfully
    pub succeeded: Vec<String>,

    /// Names and error descriptions of effects that failed
    pub failed: Vec<(String, String)>,
}

impl BatchSummary {
    /// True when every effect in the batch completed
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Runs one driver cycle per effect against a single input video
pub struct BatchRunner {
    config: Config,
}

impl BatchRunner {
    /// Create a new batch runner with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Process `input` with every effect in `effects`, in order
    ///
    /// Output files land in `output_dir` (created if missing), named
    /// `<input-basename>_<effect-name>.<ext>`. One effect failing does not
    /// stop the rest of the batch.
    pub fn run(
        &self,
        input: &Path,
        output_dir: &Path,
        effects: &[&dyn Effect],
    ) -> Result<BatchSummary> {
        fs::create_dir_all(output_dir)?;

        let mut summary = BatchSummary::default();
        for effect in effects {
            let output_path = output_path_for(
                input,
                output_dir,
                effect.name(),
                &self.config.output.extension,
            );
            info!("Executing effect '{}' -> {}", effect.name(), output_path.display());

            match self.run_single(input, &output_path, *effect) {
                Ok(report) => {
                    info!(
                        "Effect '{}' complete: {} frames written",
                        effect.name(),
                        report.frames_written
                    );
                    summary.succeeded.push(effect.name().to_string());
                }
                Err(e) => {
                    warn!("Effect '{}' failed: {}", effect.name(), e);
                    summary.failed.push((effect.name().to_string(), e.to_string()));
                }
            }
        }

        info!(
            "Batch complete: {} succeeded, {} failed",
            summary.succeeded.len(),
            summary.failed.len()
        );
        Ok(summary)
    }

    /// Run a single effect against `input`, writing to `output_path`
    pub fn run_single(
        &self,
        input: &Path,
        output_path: &Path,
        effect: &dyn Effect,
    ) -> Result<ProcessingReport> {
        let mut source = FfmpegSource::open(input)?;

        // The sink takes the effect-adjusted dimensions so geometric effects
        // that truncate odd sizes always agree with the encoder.
        let metadata = source.metadata().clone();
        let (width, height) = effect.output_dimensions(metadata.width, metadata.height);
        let params = OutputParams {
            width,
            height,
            fps: metadata.fps,
            encoder: self.config.output.encoder.clone(),
            fourcc: self.config.output.fourcc.clone(),
        };

        let mut sink = match FfmpegSink::create(output_path, &params) {
            Ok(sink) => sink,
            Err(e) => {
                source.close();
                return Err(e);
            }
        };

        process_video(&mut source, &mut sink, effect)
    }
}

/// Build the output path for one effect:
/// `<output_dir>/<input-basename>_<effect_name>.<extension>`
pub fn output_path_for(
    input: &Path,
    output_dir: &Path,
    effect_name: &str,
    extension: &str,
) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("video");
    output_dir.join(format!("{}_{}.{}", stem, effect_name, extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_layout() {
        let path = output_path_for(
            Path::new("/media/clips/holiday.mp4"),
            Path::new("./output"),
            "mirror",
            "avi",
        );
        assert_eq!(path, PathBuf::from("./output/holiday_mirror.avi"));
    }

    #[test]
    fn output_path_without_extension() {
        let path = output_path_for(
            Path::new("clip"),
            Path::new("/tmp/fx"),
            "sepia",
            "avi",
        );
        assert_eq!(path, PathBuf::from("/tmp/fx/clip_sepia.avi"));
    }
}
