//! In/out selection markers
//!
//! Markers are user-set positions in pre-scale units (the same units as
//! the scroll position); `None` means unset, so a marker at position
//! zero is representable. Pixel mapping tests span membership rather
//! than exact index equality: truncation at high scale factors could
//! otherwise make a marker vanish between pixel columns.

/// User-set in/out selection points
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MarkerSet {
    /// Selection start, in pre-scale position units
    pub in_point: Option<f64>,
    /// Selection end, in pre-scale position units
    pub out_point: Option<f64>,
}

impl MarkerSet {
    /// A marker set with neither point set
    pub fn none() -> Self {
        Self::default()
    }

    /// Pixel column of the in point, if set and visible
    pub fn in_pixel(&self, scale: f64, start: usize, columns: usize) -> Option<usize> {
        self.in_point
            .and_then(|p| marker_pixel(p, scale, start, columns))
    }

    /// Pixel column of the out point, if set and visible
    pub fn out_pixel(&self, scale: f64, start: usize, columns: usize) -> Option<usize> {
        self.out_point
            .and_then(|p| marker_pixel(p, scale, start, columns))
    }
}

/// Map a marker position to its visible pixel column
///
/// The column showing sample `x` covers the scaled-index span
/// `[x, x + 1)`; a marker whose scaled index falls in that span is
/// assigned to that column. At most one column can match. Returns
/// `None` when the marker lies outside the visible window.
pub fn marker_pixel(position: f64, scale: f64, start: usize, columns: usize) -> Option<usize> {
    if !position.is_finite() || position < 0.0 {
        return None;
    }
    let scaled = (position * scale).floor();
    if !scaled.is_finite() || scaled < 0.0 {
        return None;
    }
    let index = scaled as usize;
    if index >= start && index < start + columns {
        Some(index - start)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_inside_window() {
        // Scaled index 150, window [100, 300)
        assert_eq!(marker_pixel(150.0, 1.0, 100, 200), Some(50));
    }

    #[test]
    fn test_marker_outside_window() {
        assert_eq!(marker_pixel(50.0, 1.0, 100, 200), None);
        assert_eq!(marker_pixel(300.0, 1.0, 100, 200), None);
    }

    #[test]
    fn test_fractional_scaled_index_still_lands_on_a_column() {
        // 100.4 * 0.7 = 70.28 -> span [70, 71) -> column 70
        assert_eq!(marker_pixel(100.4, 0.7, 0, 200), Some(70));
    }

    #[test]
    fn test_marker_at_position_zero_is_representable() {
        let markers = MarkerSet {
            in_point: Some(0.0),
            out_point: None,
        };
        assert_eq!(markers.in_pixel(1.0, 0, 100), Some(0));
        assert_eq!(markers.out_pixel(1.0, 0, 100), None);
    }

    #[test]
    fn test_at_most_one_column_per_marker() {
        let hits: Vec<usize> = (0..200usize)
            .filter(|&col| marker_pixel(42.9, 2.5, 0, 200) == Some(col))
            .collect();
        assert_eq!(hits.len(), 1);
        // 42.9 * 2.5 = 107.25 -> column 107
        assert_eq!(hits[0], 107);
    }

    #[test]
    fn test_negative_or_unset_markers_yield_none() {
        assert_eq!(marker_pixel(-1.0, 1.0, 0, 100), None);
        assert_eq!(MarkerSet::none().in_pixel(1.0, 0, 100), None);
    }
}
