//! Linear interpolation resample engine
//!
//! Simple and fast; good enough for waveform preview reduction where
//! the output is decimated to one value per pixel anyway. For
//! band-limited quality use [`super::SincEngine`].

use super::ResampleEngine;
use crate::error::WaveformResult;
use crate::types::Sample;

/// Stateless linear interpolation engine
///
/// Produces exactly `floor(input_frames * ratio)` frames, so the caller
/// never needs to trim or pad its output.
pub struct LinearEngine;

impl ResampleEngine for LinearEngine {
    fn convert(
        &self,
        left: &[Sample],
        right: &[Sample],
        ratio: f64,
        _output_frames: usize,
    ) -> WaveformResult<(Vec<Sample>, Vec<Sample>)> {
        Ok((resample_channel(left, ratio), resample_channel(right, ratio)))
    }
}

fn resample_channel(samples: &[Sample], ratio: f64) -> Vec<Sample> {
    if samples.is_empty() {
        return Vec::new();
    }
    if (ratio - 1.0).abs() < f64::EPSILON {
        return samples.to_vec();
    }

    let output_len = (samples.len() as f64 * ratio).floor() as usize;
    let last = samples.len() - 1;
    let mut output = Vec::with_capacity(output_len);

    for n in 0..output_len {
        // n < floor(len * ratio) guarantees pos < len
        let pos = n as f64 / ratio;
        let idx = pos.floor() as usize;
        let frac = (pos - idx as f64) as Sample;
        let a = samples[idx.min(last)];
        let b = samples[(idx + 1).min(last)];
        output.push(a + (b - a) * frac);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(resample_channel(&[], 0.5).is_empty());
    }

    #[test]
    fn test_unity_ratio_is_identity() {
        let input = [0.1, -0.2, 0.3, -0.4];
        assert_eq!(resample_channel(&input, 1.0), input.to_vec());
    }

    #[test]
    fn test_downsample_by_two_keeps_every_other_sample() {
        let input: Vec<f32> = (0..8).map(|i| i as f32).collect();
        let out = resample_channel(&input, 0.5);
        assert_eq!(out, vec![0.0, 2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_upsample_interpolates_midpoints() {
        let input = [0.0, 1.0];
        let out = resample_channel(&input, 2.0);
        assert_eq!(out.len(), 4);
        assert_eq!(out[0], 0.0);
        assert!((out[1] - 0.5).abs() < 1e-6);
        assert_eq!(out[2], 1.0);
    }

    #[test]
    fn test_output_length_is_floor_of_scaled_len() {
        let input = vec![0.0f32; 1001];
        assert_eq!(resample_channel(&input, 0.3).len(), 300);
        assert_eq!(resample_channel(&input, 1.5).len(), 1501);
    }
}
