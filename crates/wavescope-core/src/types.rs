//! Common types for Wavescope
//!
//! This module contains the fundamental audio types used throughout the
//! waveform display pipeline: the stereo sample pair and the owned
//! stereo buffer that carries its sample rate.

use std::ops::Index;

/// Audio sample type (32-bit float, amplitudes nominally in [-1.0, 1.0])
pub type Sample = f32;

/// Number of channels (stereo is fixed for the whole pipeline)
pub const CHANNELS: usize = 2;

/// A single stereo sample (left and right channels)
///
/// Uses `#[repr(C)]` to ensure predictable memory layout: [left, right].
/// This enables zero-copy conversion between `&[StereoSample]` and `&[f32]`
/// (interleaved format) using bytemuck.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StereoSample {
    pub left: Sample,
    pub right: Sample,
}

impl StereoSample {
    /// Create a new stereo sample
    #[inline]
    pub fn new(left: Sample, right: Sample) -> Self {
        Self { left, right }
    }

    /// Create a silent stereo sample
    #[inline]
    pub fn silence() -> Self {
        Self::default()
    }

    /// Create a mono sample (same value in both channels)
    #[inline]
    pub fn mono(value: Sample) -> Self {
        Self { left: value, right: value }
    }

    /// Get the peak amplitude (max of abs(left), abs(right))
    #[inline]
    pub fn peak(&self) -> Sample {
        self.left.abs().max(self.right.abs())
    }
}

/// An owned stereo sample buffer with its sample rate
///
/// This is the buffer type handed between the resampler and the viewport
/// mapper. It is immutable by convention once produced: the resampler
/// allocates a fresh buffer per zoom level and the mapper only reads.
/// `SampleBuffer` is `Send + Sync`, so a caller may share one behind an
/// `Arc` and atomically swap in a replacement when a background
/// re-resample for a new zoom level lands; a redraw in flight keeps its
/// own reference and never observes a half-written buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<StereoSample>,
    sample_rate: u32,
}

impl SampleBuffer {
    /// Create a buffer filled with silence
    pub fn silence(len: usize, sample_rate: u32) -> Self {
        Self {
            samples: vec![StereoSample::silence(); len],
            sample_rate,
        }
    }

    /// Create a buffer from interleaved samples [L, R, L, R, ...]
    pub fn from_interleaved(interleaved: &[Sample], sample_rate: u32) -> Self {
        assert!(interleaved.len() % 2 == 0, "Interleaved buffer must have even length");
        let samples = interleaved
            .chunks_exact(2)
            .map(|chunk| StereoSample::new(chunk[0], chunk[1]))
            .collect();
        Self { samples, sample_rate }
    }

    /// Create a buffer from separate left and right channel slices
    pub fn from_channels(left: &[Sample], right: &[Sample], sample_rate: u32) -> Self {
        assert_eq!(left.len(), right.len(), "Channel lengths must match");
        let samples = left
            .iter()
            .zip(right.iter())
            .map(|(&l, &r)| StereoSample::new(l, r))
            .collect();
        Self { samples, sample_rate }
    }

    /// Get the number of stereo samples in the buffer
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the buffer is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample rate of this buffer in Hz
    #[inline]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Get a slice of the samples
    #[inline]
    pub fn as_slice(&self) -> &[StereoSample] {
        &self.samples
    }

    /// Get a zero-copy view of samples as interleaved f32 [L, R, L, R, ...]
    ///
    /// This is a zero-cost operation thanks to `#[repr(C)]` on StereoSample.
    #[inline]
    pub fn as_interleaved(&self) -> &[Sample] {
        bytemuck::cast_slice(&self.samples)
    }

    /// Split into planar left/right channel vectors
    ///
    /// The resample engines operate on planar data, one channel at a time.
    pub fn to_channels(&self) -> (Vec<Sample>, Vec<Sample>) {
        let mut left = Vec::with_capacity(self.samples.len());
        let mut right = Vec::with_capacity(self.samples.len());
        for sample in &self.samples {
            left.push(sample.left);
            right.push(sample.right);
        }
        (left, right)
    }

    /// Get the peak amplitude in the buffer
    pub fn peak(&self) -> Sample {
        self.samples.iter().map(|s| s.peak()).fold(0.0, Sample::max)
    }

    /// Duration in seconds at this buffer's sample rate
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

impl Index<usize> for SampleBuffer {
    type Output = StereoSample;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.samples[index]
    }
}
