use thiserror::Error;

/// Main error type for the framefx library
#[derive(Error, Debug)]
pub enum FramefxError {
    #[error("Video processing error: {0}")]
    Video(#[from] VideoError),

    #[error("Effect error: {0}")]
    Effect(#[from] EffectError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generic error: {0}")]
    Generic(String),
}

/// Video-specific errors
#[derive(Error, Debug)]
pub enum VideoError {
    #[error("Failed to open video file: {path}")]
    OpenFailed { path: String },

    #[error("Failed to probe video metadata: {path} - {reason}")]
    ProbeFailed { path: String, reason: String },

    #[error("Required tool not found on PATH: {tool}")]
    ToolMissing { tool: String },

    #[error("Video encoding failed: {reason}")]
    EncodingFailed { reason: String },

    #[error("Video decoding failed: {reason}")]
    DecodingFailed { reason: String },

    #[error("Invalid video parameters: {details}")]
    InvalidParameters { details: String },
}

/// Effect-specific errors
#[derive(Error, Debug)]
pub enum EffectError {
    #[error("Effect not found: {name}")]
    NotFound { name: String },

    #[error("Effect application failed: {effect} - {reason}")]
    ApplyFailed { effect: String, reason: String },

    #[error("Frame shape mismatch: {details}")]
    ShapeMismatch { details: String },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path}")]
    ParseFailed { path: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

/// Convenience type alias for Results using FramefxError
pub type Result<T> = std::result::Result<T, FramefxError>;

impl FramefxError {
    /// Create a generic error with a custom message
    pub fn generic<S: Into<String>>(message: S) -> Self {
        Self::Generic(message.into())
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Video(VideoError::OpenFailed { path }) => {
                format!("Could not open video file '{}'. Please check the file exists and is a supported format.", path)
            }
            Self::Video(VideoError::ToolMissing { tool }) => {
                format!("'{}' was not found on PATH. Please install FFmpeg.", tool)
            }
            Self::Effect(EffectError::NotFound { name }) => {
                format!("Effect '{}' not found. Run with --list-effects to see what is available.", name)
            }
            Self::Config(ConfigError::FileNotFound { path }) => {
                format!("Configuration file '{}' not found.", path)
            }
            _ => self.to_string(),
        }
    }
}
