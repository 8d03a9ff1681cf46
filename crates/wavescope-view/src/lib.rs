//! Wavescope View - viewport mapping for stereo waveform display
//!
//! This crate turns a reduced [`wavescope_core::SampleBuffer`], a scroll
//! position and a pixel viewport into pure draw geometry: one polyline
//! per channel, a playhead column, and optional in/out marker columns.
//!
//! Rendering itself is an external concern. The structures here are pure
//! data; whatever owns the canvas (and its pen state) consumes them and
//! releases its drawing resources after each frame. Geometry is
//! recomputed per redraw, which is cheap because it only indexes the
//! already-reduced buffer.

pub mod geometry;
pub mod markers;
pub mod viewport;

pub use geometry::{ChannelTrace, PixelPoint, ViewportGeometry};
pub use markers::{marker_pixel, MarkerSet};
pub use viewport::{map_viewport, ScrollWindow, ViewportParams};
