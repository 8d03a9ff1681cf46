//! Waveform pipeline error types

use thiserror::Error;

/// Errors that can occur while resampling or mapping a viewport
///
/// All of these are local, deterministic validation failures: the
/// computations are pure, so retrying with the same inputs reproduces
/// the same error. None are downgraded to a default value.
#[derive(Error, Debug)]
pub enum WaveformError {
    /// Zoom scale must be positive (it divides the reference rate)
    #[error("Invalid zoom scale: {scale} (must be a positive, finite number)")]
    InvalidScale { scale: f64 },

    /// Input buffer has no samples
    #[error("Sample buffer is empty")]
    EmptyBuffer,

    /// Viewport width must be at least one pixel column
    #[error("Viewport too narrow: width {width} (must be positive)")]
    ViewportTooNarrow { width: i64 },

    /// A resample engine backend reported a failure
    #[error("Resample engine error: {0}")]
    Backend(String),
}

/// Result type for waveform operations
pub type WaveformResult<T> = Result<T, WaveformError>;
