use std::io::Write;
use std::path::Path;
use std::process::{Child, ChildStdin, Command, Stdio};

use tracing::{debug, warn};

use crate::error::{Result, VideoError};
use crate::video::types::{Frame, OutputParams};

/// A sequential sink of encoded video frames
///
/// This is the driver's encoding collaborator. Frames are appended in call
/// order; `finish` flushes and releases the encoder and must be called on
/// every exit path (a `Drop` backstop kills a sink that was never finished).
pub trait FrameSink {
    /// Append one frame to the output in arrival order
    fn write_frame(&mut self, frame: &Frame) -> Result<()>;

    /// Flush pending frames and release the encoding collaborator. Idempotent.
    fn finish(&mut self) -> Result<()>;
}

/// Encoding sink backed by an external FFmpeg process
///
/// Raw RGB24 frames are fed to the child's stdin pipe; FFmpeg encodes them
/// at the configured dimensions and frame rate, tagging the stream with the
/// configured four-character codec tag.
pub struct FfmpegSink {
    child: Option<Child>,
    stdin: Option<ChildStdin>,
    params: OutputParams,
    path: String,
}

impl FfmpegSink {
    /// Spawn the encoding process writing to `path`
    pub fn create<P: AsRef<Path>>(path: P, params: &OutputParams) -> Result<Self> {
        let path = path.as_ref().display().to_string();

        if params.width == 0 || params.height == 0 {
            return Err(VideoError::InvalidParameters {
                details: format!("output dimensions {}x{}", params.width, params.height),
            }
            .into());
        }

        let mut child = Command::new("ffmpeg")
            .args([
                "-v",
                "error",
                "-y",
                "-f",
                "rawvideo",
                "-pix_fmt",
                "rgb24",
                "-s",
                &format!("{}x{}", params.width, params.height),
                "-r",
                &params.fps.to_string(),
                "-i",
                "-",
                "-c:v",
                &params.encoder,
                "-vtag",
                &params.fourcc,
                "-pix_fmt",
                "yuv420p",
                &path,
            ])
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| VideoError::EncodingFailed {
                reason: format!("failed to spawn ffmpeg: {}", e),
            })?;

        let stdin = child.stdin.take().ok_or_else(|| VideoError::EncodingFailed {
            reason: "ffmpeg stdin was not captured".to_string(),
        })?;

        debug!(
            "Opened video sink: {} ({}x{} @ {:.1} fps, {} [{}])",
            path, params.width, params.height, params.fps, params.encoder, params.fourcc
        );

        Ok(Self {
            child: Some(child),
            stdin: Some(stdin),
            params: params.clone(),
            path,
        })
    }
}

impl FrameSink for FfmpegSink {
    fn write_frame(&mut self, frame: &Frame) -> Result<()> {
        if frame.dimensions() != (self.params.width, self.params.height) {
            return Err(VideoError::EncodingFailed {
                reason: format!(
                    "frame is {}x{} but the sink was opened for {}x{}",
                    frame.width(),
                    frame.height(),
                    self.params.width,
                    self.params.height
                ),
            }
            .into());
        }

        let stdin = self.stdin.as_mut().ok_or_else(|| VideoError::EncodingFailed {
            reason: "sink is already finished".to_string(),
        })?;

        stdin
            .write_all(frame.as_raw_bytes())
            .map_err(|e| VideoError::EncodingFailed {
                reason: format!("failed to pipe frame to encoder: {}", e),
            })?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        // Closing stdin signals end-of-stream to the encoder
        self.stdin = None;

        let Some(mut child) = self.child.take() else {
            return Ok(());
        };

        let status = child.wait().map_err(|e| VideoError::EncodingFailed {
            reason: format!("failed to wait for encoder: {}", e),
        })?;

        if !status.success() {
            return Err(VideoError::EncodingFailed {
                reason: format!("encoder exited with status {} for {}", status, self.path),
            }
            .into());
        }

        debug!("Finished video sink: {}", self.path);
        Ok(())
    }
}

impl Drop for FfmpegSink {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take() {
            warn!("video sink for {} dropped without finish; killing encoder", self.path);
            self.stdin = None;
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}
