use std::io::Read;
use std::path::Path;
use std::process::{Child, ChildStdout, Command, Stdio};

use tracing::{debug, info, warn};

use crate::error::{Result, VideoError};
use crate::video::types::{Frame, VideoMetadata};

/// Frame rate assumed when the probe cannot determine one
const DEFAULT_FPS: f64 = 30.0;

/// A sequential source of decoded video frames
///
/// This is the driver's decoding collaborator. `read_frame` returning `None`
/// means "no frame available" and always ends the stream; end-of-stream and
/// decode failures are not distinguished.
pub trait FrameSource {
    /// Stream properties reported when the source was opened
    fn metadata(&self) -> &VideoMetadata;

    /// Read the next frame in decode order, or `None` when the stream ends
    fn read_frame(&mut self) -> Option<Frame>;

    /// Release the decoding collaborator. Idempotent.
    fn close(&mut self);
}

/// Check that an external tool responds to `-version`
pub fn check_tool_available(tool: &str) -> bool {
    Command::new(tool)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Decoding source backed by an external FFmpeg process
///
/// Metadata comes from `ffprobe`; frames are streamed as raw RGB24 bytes
/// over the child's stdout pipe, one `width * height * 3` chunk per frame.
pub struct FfmpegSource {
    metadata: VideoMetadata,
    child: Option<Child>,
    stdout: Option<ChildStdout>,
    frame_len: usize,
}

impl FfmpegSource {
    /// Probe the file and spawn the decoding process
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(VideoError::OpenFailed {
                path: path.display().to_string(),
            }
            .into());
        }

        for tool in ["ffprobe", "ffmpeg"] {
            if !check_tool_available(tool) {
                return Err(VideoError::ToolMissing {
                    tool: tool.to_string(),
                }
                .into());
            }
        }

        let metadata = probe_metadata(path)?;
        info!(
            "Opened video source: {} ({}x{} @ {:.1} fps)",
            path.display(),
            metadata.width,
            metadata.height,
            metadata.fps
        );

        let mut child = Command::new("ffmpeg")
            .args([
                "-v",
                "error",
                "-i",
                &path.display().to_string(),
                "-f",
                "rawvideo",
                "-pix_fmt",
                "rgb24",
                "-",
            ])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| VideoError::DecodingFailed {
                reason: format!("failed to spawn ffmpeg: {}", e),
            })?;

        let stdout = child.stdout.take().ok_or_else(|| VideoError::DecodingFailed {
            reason: "ffmpeg stdout was not captured".to_string(),
        })?;

        let frame_len = metadata.width as usize * metadata.height as usize * 3;

        Ok(Self {
            metadata,
            child: Some(child),
            stdout: Some(stdout),
            frame_len,
        })
    }
}

impl FrameSource for FfmpegSource {
    fn metadata(&self) -> &VideoMetadata {
        &self.metadata
    }

    fn read_frame(&mut self) -> Option<Frame> {
        let stdout = self.stdout.as_mut()?;
        let mut buffer = vec![0u8; self.frame_len];

        // A short read means end-of-stream or a decoder failure; either way
        // there is no frame, and the caller stops streaming.
        if stdout.read_exact(&mut buffer).is_err() {
            return None;
        }

        Frame::from_raw_bytes(self.metadata.width, self.metadata.height, buffer)
    }

    fn close(&mut self) {
        self.stdout = None;
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            match child.wait() {
                Ok(status) if !status.success() => {
                    debug!("decoder exited with status {status}");
                }
                Ok(_) => {}
                Err(e) => debug!("failed to reap decoder process: {e}"),
            }
        }
    }
}

impl Drop for FfmpegSource {
    fn drop(&mut self) {
        self.close();
    }
}

/// Query `ffprobe` for the first video stream's dimensions and frame rate
fn probe_metadata(path: &Path) -> Result<VideoMetadata> {
    let output = Command::new("ffprobe")
        .args([
            "-v",
            "quiet",
            "-print_format",
            "json",
            "-show_streams",
            "-select_streams",
            "v:0",
            &path.display().to_string(),
        ])
        .output()
        .map_err(|e| VideoError::ProbeFailed {
            path: path.display().to_string(),
            reason: format!("failed to run ffprobe: {}", e),
        })?;

    if !output.status.success() {
        return Err(VideoError::ProbeFailed {
            path: path.display().to_string(),
            reason: format!("ffprobe exited with status {}", output.status),
        }
        .into());
    }

    let json = String::from_utf8(output.stdout).map_err(|_| VideoError::ProbeFailed {
        path: path.display().to_string(),
        reason: "ffprobe produced invalid UTF-8".to_string(),
    })?;

    let width = extract_json_number(&json, "width");
    let height = extract_json_number(&json, "height");
    let (width, height) = match (width, height) {
        (Some(w), Some(h)) if w > 0.0 && h > 0.0 => (w as u32, h as u32),
        _ => {
            return Err(VideoError::ProbeFailed {
                path: path.display().to_string(),
                reason: "no video stream dimensions reported".to_string(),
            }
            .into())
        }
    };

    let fps = extract_fps_from_json(&json).unwrap_or_else(|| {
        warn!("could not determine frame rate, assuming {DEFAULT_FPS}");
        DEFAULT_FPS
    });

    Ok(VideoMetadata { width, height, fps })
}

/// Pull the first numeric value following `"key":` out of a JSON blob
fn extract_json_number(json: &str, key: &str) -> Option<f64> {
    let pattern = format!("\"{}\":", key);
    let start = json.find(&pattern)? + pattern.len();
    let remaining = json[start..].trim_start().trim_start_matches('"');
    let end = remaining
        .find(|c: char| !c.is_ascii_digit() && c != '.' && c != '-')
        .unwrap_or(remaining.len());
    remaining[..end].trim_end_matches('"').parse().ok()
}

/// Parse the `avg_frame_rate` fraction, e.g. "30000/1001"
fn extract_fps_from_json(json: &str) -> Option<f64> {
    let start = json.find("\"avg_frame_rate\":")? + 17;
    let remaining = json[start..].trim_start().trim_start_matches('"');
    let end = remaining.find('"')?;
    let fps_str = &remaining[..end];

    let slash_pos = fps_str.find('/')?;
    let num: f64 = fps_str[..slash_pos].parse().ok()?;
    let den: f64 = fps_str[slash_pos + 1..].parse().ok()?;
    if den != 0.0 && num > 0.0 {
        Some(num / den)
    } else {
        None
    }
}
