//! Viewport mapping: scroll window, playhead pinning, trace building
//!
//! The scroll window keeps the playhead visible while guaranteeing that
//! every sample index read stays inside the buffer. The guarantee comes
//! from the window computation itself, not from per-pixel clamping.

use wavescope_core::{SampleBuffer, WaveformError, WaveformResult};

use crate::geometry::{ChannelTrace, PixelPoint, ViewportGeometry};
use crate::markers::MarkerSet;

/// Per-redraw viewport parameters
///
/// All configuration is explicit; there are no hidden defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportParams {
    /// Scroll/playback position in pre-scale units
    pub scroll_position: f64,
    /// Viewport width in pixels
    pub width: i64,
    /// Viewport height in pixels (split evenly between the channels)
    pub height: f32,
    /// Zoom scale (percent of the reference rate)
    pub scale: f64,
    /// Vertical padding inside each channel band, in pixels
    pub pad: f32,
}

/// Visible sample window and playhead column
///
/// Three mutually exclusive cases, evaluated in order: playhead
/// centered, window pinned to the buffer start, window pinned to the
/// buffer end. In every case the playhead column is in `[0, width)` and
/// the window `[start, start + width)` stays inside the buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollWindow {
    /// First visible sample index
    pub start: usize,
    /// Playhead column within the viewport
    pub playhead_pixel: usize,
}

impl ScrollWindow {
    /// Compute the window for a scaled position
    ///
    /// `buffer_len` and `width` must be positive (validated by
    /// [`map_viewport`]). Positions at or past the buffer end are
    /// clamped to the last sample so the playhead stays visible.
    pub fn compute(scaled_pos: usize, buffer_len: usize, width: usize) -> Self {
        debug_assert!(buffer_len > 0 && width > 0);
        let pos = scaled_pos.min(buffer_len - 1);
        if pos != scaled_pos {
            log::debug!(
                "scroll position {} past buffer end, clamped to {}",
                scaled_pos,
                pos
            );
        }

        // Short buffer: the whole buffer fits, window starts at zero
        if buffer_len <= width {
            return Self {
                start: 0,
                playhead_pixel: pos,
            };
        }

        let offset_middle = width / 2;
        if offset_middle <= pos && pos < buffer_len - offset_middle {
            // Centered. The lower bound is inclusive: at
            // pos == offset_middle this produces the same window as the
            // start-pinned case (start 0, playhead at pos), and keeps
            // the end-pinned branch from firing with pos far from the
            // buffer end.
            Self {
                start: pos - offset_middle,
                playhead_pixel: offset_middle,
            }
        } else if pos < offset_middle {
            // Near the beginning: pin the window to the buffer start
            Self {
                start: 0,
                playhead_pixel: pos,
            }
        } else {
            // Near the end: pin the window's right edge to the buffer end.
            // Here pos >= buffer_len - offset_middle >= buffer_len - width,
            // so the playhead column is in [width - offset_middle, width).
            Self {
                start: buffer_len - width,
                playhead_pixel: pos - (buffer_len - width),
            }
        }
    }
}

/// Map a reduced buffer to draw geometry for one frame
///
/// Pure and deterministic: identical arguments against an unmodified
/// buffer yield bit-identical geometry.
///
/// Fails with `EmptyBuffer` for a zero-length buffer,
/// `ViewportTooNarrow` for a non-positive width, and `InvalidScale`
/// for a non-positive scale.
pub fn map_viewport(
    buffer: &SampleBuffer,
    params: &ViewportParams,
    markers: &MarkerSet,
) -> WaveformResult<ViewportGeometry> {
    if buffer.is_empty() {
        return Err(WaveformError::EmptyBuffer);
    }
    if params.width <= 0 {
        return Err(WaveformError::ViewportTooNarrow {
            width: params.width,
        });
    }
    if !params.scale.is_finite() || params.scale <= 0.0 {
        return Err(WaveformError::InvalidScale {
            scale: params.scale,
        });
    }

    let width = params.width as usize;
    let scaled_pos = (params.scroll_position * params.scale).floor().max(0.0) as usize;
    let window = ScrollWindow::compute(scaled_pos, buffer.len(), width);

    // In the short-buffer case fewer columns than width are drawn;
    // otherwise the window proof gives exactly `width` in-bounds columns.
    let columns = width.min(buffer.len() - window.start);

    log::debug!(
        "map_viewport: scaled_pos={} start={} playhead_pixel={} columns={}",
        scaled_pos,
        window.start,
        window.playhead_pixel,
        columns
    );

    let channel_height = params.height / 2.0;
    let half_amplitude = (channel_height / 2.0 - params.pad).max(0.0);
    let mid_left = channel_height / 2.0;
    let mid_right = channel_height + channel_height / 2.0;

    let samples = buffer.as_slice();
    let mut left = ChannelTrace::with_capacity(mid_left, columns);
    let mut right = ChannelTrace::with_capacity(mid_right, columns);
    for i in 0..columns {
        let sample = samples[window.start + i];
        let x = i as f32;
        left.points.push(PixelPoint {
            x,
            y: mid_left - sample.left * half_amplitude,
        });
        right.points.push(PixelPoint {
            x,
            y: mid_right - sample.right * half_amplitude,
        });
    }

    Ok(ViewportGeometry {
        start: window.start,
        playhead_pixel: window.playhead_pixel,
        channels: [left, right],
        in_marker: markers.in_pixel(params.scale, window.start, columns),
        out_marker: markers.out_pixel(params.scale, window.start, columns),
    })
}
