//! Multi-resolution resampling driven by the zoom scale
//!
//! A zoom "scale" (percent of the reference rate) picks a target sample
//! rate; resampling the full-rate buffer down to that rate once per zoom
//! change gives the viewport mapper a reduced buffer it can index
//! cheaply on every redraw.
//!
//! The numerical filter is a pluggable capability behind
//! [`ResampleEngine`]: a stateless linear interpolator for previews and
//! a band-limited sinc engine built on rubato. The [`Resampler`] owns
//! the rate arithmetic and the output-length contract; engines only
//! convert samples.

mod linear;
mod sinc;

pub use linear::LinearEngine;
pub use sinc::SincEngine;

use crate::error::{WaveformError, WaveformResult};
use crate::types::{Sample, SampleBuffer};

/// Reference rate for the percent-zoom convention (scale 1.0 = 1000 Hz)
const REFERENCE_RATE: f64 = 1000.0;

/// Doubling factor reserving headroom for sub-pixel detail at high zoom
const DETAIL_HEADROOM: f64 = 2.0;

/// Compute the target sample rate for a zoom scale
///
/// `target = (1000 / scale) * 2`. Fails with `InvalidScale` when the
/// scale is zero, negative, or not finite (it divides the reference
/// rate).
pub fn target_rate_for_scale(scale: f64) -> WaveformResult<f64> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(WaveformError::InvalidScale { scale });
    }
    Ok(REFERENCE_RATE / scale * DETAIL_HEADROOM)
}

/// Pluggable sample rate conversion backend
///
/// Engines convert planar stereo data by the given ratio
/// (`target_rate / source_rate`). They should return at least
/// `output_frames` frames when the input allows it; the caller trims or
/// zero-pads to the exact contract length, so engines with group delay
/// or chunked output do not need to be frame-exact.
pub trait ResampleEngine: Send + Sync {
    fn convert(
        &self,
        left: &[Sample],
        right: &[Sample],
        ratio: f64,
        output_frames: usize,
    ) -> WaveformResult<(Vec<Sample>, Vec<Sample>)>;
}

/// Zoom-level resampler
///
/// Produces a fresh, reduced `SampleBuffer` for a zoom scale. The input
/// is never mutated and the output never aliases it. Output length is
/// exactly `floor(input_len * target_rate / source_rate)` regardless of
/// the engine in use.
pub struct Resampler {
    engine: Box<dyn ResampleEngine>,
}

impl Resampler {
    /// Create a resampler with a custom engine
    pub fn new(engine: Box<dyn ResampleEngine>) -> Self {
        Self { engine }
    }

    /// Create a resampler using linear interpolation (fast, preview quality)
    pub fn linear() -> Self {
        Self::new(Box::new(LinearEngine))
    }

    /// Create a resampler using band-limited sinc interpolation (rubato)
    pub fn sinc() -> Self {
        Self::new(Box::new(SincEngine))
    }

    /// Resample a buffer for the given zoom scale
    ///
    /// Fails with `InvalidScale` when `scale <= 0` and `EmptyBuffer`
    /// when the input has no samples.
    pub fn resample(&self, buffer: &SampleBuffer, scale: f64) -> WaveformResult<SampleBuffer> {
        let target_rate = target_rate_for_scale(scale)?;
        if buffer.is_empty() {
            return Err(WaveformError::EmptyBuffer);
        }

        let source_rate = buffer.sample_rate() as f64;
        let ratio = target_rate / source_rate;
        let output_frames = (buffer.len() as f64 * ratio).floor() as usize;

        log::debug!(
            "resample: scale={} target_rate={:.2}Hz ratio={:.6} frames {} -> {}",
            scale,
            target_rate,
            ratio,
            buffer.len(),
            output_frames
        );

        let (left, right) = buffer.to_channels();
        let (mut out_left, mut out_right) = self.engine.convert(&left, &right, ratio, output_frames)?;

        // Enforce the length contract: truncate engine overshoot, pad
        // undershoot (filter tails) with silence.
        out_left.resize(output_frames, 0.0);
        out_right.resize(output_frames, 0.0);

        let out_rate = target_rate.round().max(1.0) as u32;
        Ok(SampleBuffer::from_channels(&out_left, &out_right, out_rate))
    }
}

impl Default for Resampler {
    fn default() -> Self {
        Self::linear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp_buffer(len: usize, sample_rate: u32) -> SampleBuffer {
        let left: Vec<f32> = (0..len).map(|i| i as f32 / len as f32).collect();
        let right: Vec<f32> = left.iter().map(|v| -v).collect();
        SampleBuffer::from_channels(&left, &right, sample_rate)
    }

    #[test]
    fn test_target_rate_mapping() {
        assert_eq!(target_rate_for_scale(1.0).unwrap(), 2000.0);
        assert_eq!(target_rate_for_scale(2.0).unwrap(), 1000.0);
        assert_eq!(target_rate_for_scale(0.5).unwrap(), 4000.0);
    }

    #[test]
    fn test_invalid_scale_rejected() {
        for scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                target_rate_for_scale(scale),
                Err(WaveformError::InvalidScale { .. })
            ));
        }
    }

    #[test]
    fn test_resample_rejects_empty_buffer() {
        let buffer = SampleBuffer::silence(0, 48000);
        let result = Resampler::linear().resample(&buffer, 1.0);
        assert!(matches!(result, Err(WaveformError::EmptyBuffer)));
    }

    #[test]
    fn test_output_length_formula() {
        let resampler = Resampler::linear();
        // 10 seconds at 48kHz
        let buffer = ramp_buffer(480_000, 48000);

        for scale in [0.25f64, 1.0, 2.0, 3.0, 10.0, 100.0] {
            let target = 1000.0 / scale * 2.0;
            let expected = (480_000.0 * target / 48000.0).floor() as usize;
            let reduced = resampler.resample(&buffer, scale).unwrap();
            assert_eq!(reduced.len(), expected, "scale={}", scale);
        }
    }

    #[test]
    fn test_unity_ratio_passthrough() {
        // Source rate equal to the target rate for scale 1.0 (2000 Hz)
        let buffer = ramp_buffer(2000, 2000);
        let reduced = Resampler::linear().resample(&buffer, 1.0).unwrap();
        assert_eq!(reduced.len(), buffer.len());
        assert_eq!(reduced.as_slice(), buffer.as_slice());
    }

    #[test]
    fn test_input_not_mutated() {
        let buffer = ramp_buffer(4000, 48000);
        let before = buffer.clone();
        let _ = Resampler::linear().resample(&buffer, 2.0).unwrap();
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_sinc_engine_length_contract() {
        let resampler = Resampler::sinc();
        let buffer = ramp_buffer(48_000, 48000);

        for scale in [1.0f64, 4.0] {
            let target = 1000.0 / scale * 2.0;
            let expected = (48_000.0 * target / 48000.0).floor() as usize;
            let reduced = resampler.resample(&buffer, scale).unwrap();
            assert_eq!(reduced.len(), expected, "scale={}", scale);
            assert!(reduced.as_slice().iter().all(|s| s.left.is_finite() && s.right.is_finite()));
        }
    }
}
