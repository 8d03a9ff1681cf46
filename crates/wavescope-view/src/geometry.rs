//! Draw geometry handed to the renderer
//!
//! Pure data, no rendering logic: the renderer draws each channel trace
//! as a polyline around its mid-line and vertical lines at the playhead
//! and marker columns. serde derives let a harness snapshot geometry for
//! comparison across runs.

use serde::{Deserialize, Serialize};

/// A point in viewport pixel space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f32,
    pub y: f32,
}

/// Polyline for one channel, plus the mid-line it is centered on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelTrace {
    /// One point per visible pixel column, in column order
    pub points: Vec<PixelPoint>,
    /// Vertical center of this channel's band, in pixels
    pub mid_y: f32,
}

impl ChannelTrace {
    pub(crate) fn with_capacity(mid_y: f32, columns: usize) -> Self {
        Self {
            points: Vec::with_capacity(columns),
            mid_y,
        }
    }
}

/// Everything the renderer needs for one frame
///
/// All pixel coordinates lie within `[0, width) x [0, height)`. The
/// playhead column is always present; marker columns are present only
/// when the marker is set and falls inside the visible window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportGeometry {
    /// First visible sample index in the reduced buffer
    pub start: usize,
    /// Playhead column within the viewport
    pub playhead_pixel: usize,
    /// Left and right channel traces, in that order
    pub channels: [ChannelTrace; 2],
    /// In-point marker column, if visible
    pub in_marker: Option<usize>,
    /// Out-point marker column, if visible
    pub out_marker: Option<usize>,
}
