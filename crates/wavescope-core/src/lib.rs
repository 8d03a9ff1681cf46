//! Wavescope Core - audio buffer types and multi-resolution resampling
//!
//! This crate holds the sample-domain half of the waveform display
//! pipeline: the stereo `SampleBuffer`, the error taxonomy, and the
//! `Resampler` that reduces a full-rate buffer to a zoom-dependent
//! rate so redraws only index the reduced data.

pub mod error;
pub mod resample;
pub mod types;

pub use error::{WaveformError, WaveformResult};
pub use resample::{target_rate_for_scale, LinearEngine, ResampleEngine, Resampler, SincEngine};
pub use types::*;
