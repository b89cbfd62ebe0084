// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Conversions between slider values and vertical positions.
//!
//! Values grow upwards: the knob sits at `bounds_height - margin` for the
//! minimum value and at `margin` for the maximum value.
//!
//! ```text
//!   0 ┬───────────────
//!     │ margin
//!     ├── max_value ──  ← y = margin
//!     │
//!     │ track_length
//!     │
//!     ├── min_value ──  ← y = bounds_height - margin
//!     │ margin
//!   h ┴───────────────
//! ```
//!
//! Everything here is pure arithmetic on [`TrackGeometry`].

use crate::SliderConfig;

/// The parameters of the value/position mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    /// Height of the control's bounds.
    pub bounds_height: f64,
    /// Inset of the track from the top and bottom of the bounds.
    pub margin: f64,
    /// Value at the bottom of the track.
    pub min_value: f64,
    /// Value at the top of the track.
    pub max_value: f64,
}

impl TrackGeometry {
    /// Creates the geometry for a control of the given height.
    pub fn new(bounds_height: f64, margin: f64, min_value: f64, max_value: f64) -> Self {
        Self {
            bounds_height,
            margin,
            min_value,
            max_value,
        }
    }

    /// Creates the geometry for `config` laid out in bounds of the given height.
    pub fn from_config(config: &SliderConfig, bounds_height: f64) -> Self {
        Self::new(
            bounds_height,
            config.margin,
            config.min_value,
            config.max_value,
        )
    }

    /// The distance the knob's center travels between the minimum and maximum value.
    pub fn track_length(&self) -> f64 {
        self.bounds_height - 2.0 * self.margin
    }

    /// Whether the bounds leave no room for a usable track.
    ///
    /// This is true before the first layout, when the bounds are still empty,
    /// and for unbounded heights.
    pub fn is_degenerate(&self) -> bool {
        let length = self.track_length();
        !length.is_finite() || length <= 0.0
    }

    /// Y coordinate of the top end of the track.
    pub fn track_top(&self) -> f64 {
        self.margin
    }

    /// Y coordinate of the bottom end of the track.
    pub fn track_bottom(&self) -> f64 {
        self.bounds_height - self.margin
    }

    fn span(&self) -> f64 {
        self.max_value - self.min_value
    }
}

/// Returns the y coordinate of the knob's center for `value`.
///
/// The result isn't restricted to the track: values outside the range map
/// to positions beyond its ends.
/// Returns `0.0` if the geometry is [degenerate](TrackGeometry::is_degenerate).
pub fn value_to_y(value: f64, geometry: &TrackGeometry) -> f64 {
    if geometry.is_degenerate() {
        return 0.0;
    }
    let raw_y = ((value - geometry.min_value) * geometry.track_length()) / geometry.span();
    geometry.track_bottom() - raw_y
}

/// Returns the value whose knob center sits at `y`.
///
/// This is the inverse of [`value_to_y`]. The result isn't clamped, callers
/// which need a valid value should pass it through [`clamp_value`].
/// Returns `min_value` if the geometry is [degenerate](TrackGeometry::is_degenerate).
pub fn y_to_value(y: f64, geometry: &TrackGeometry) -> f64 {
    if geometry.is_degenerate() {
        return geometry.min_value;
    }
    let offset_y = geometry.track_bottom() - y;
    geometry.min_value + (offset_y * geometry.span()) / geometry.track_length()
}

/// Restricts `value` to `min..=max`.
///
/// NaN is mapped to `min`, so a stored value is always inside the range.
pub fn clamp_value(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

/// Returns `value` as a fraction of the range `min..=max`.
///
/// Empty or inverted ranges give `0.0`.
pub fn normalized(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span > 0.0 {
        (value - min) / span
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;

    fn unit_geometry() -> TrackGeometry {
        TrackGeometry::new(204.0, 20.0, 0.0, 1.0)
    }

    #[test]
    fn track_length_excludes_both_margins() {
        assert_eq!(unit_geometry().track_length(), 164.0);
        assert!(!unit_geometry().is_degenerate());
        assert!(TrackGeometry::new(40.0, 20.0, 0.0, 1.0).is_degenerate());
        assert!(TrackGeometry::new(0.0, 20.0, 0.0, 1.0).is_degenerate());
    }

    #[test]
    fn range_ends_map_to_track_ends() {
        let geometry = unit_geometry();
        assert_eq!(value_to_y(0.0, &geometry), 184.0);
        assert_eq!(value_to_y(1.0, &geometry), 20.0);
        assert_eq!(y_to_value(184.0, &geometry), 0.0);
        assert_eq!(y_to_value(20.0, &geometry), 1.0);
    }

    #[test]
    fn initial_value_position() {
        // 184 - 0.45 * 164
        assert!(approx_eq!(
            f64,
            value_to_y(0.45, &unit_geometry()),
            110.2,
            epsilon = 1e-9
        ));
    }

    #[test]
    fn offset_range_uses_full_track() {
        let geometry = TrackGeometry::new(120.0, 10.0, -50.0, 50.0);
        assert_eq!(value_to_y(-50.0, &geometry), 110.0);
        assert_eq!(value_to_y(0.0, &geometry), 60.0);
        assert_eq!(value_to_y(50.0, &geometry), 10.0);
        assert_eq!(y_to_value(60.0, &geometry), 0.0);
    }

    #[test]
    fn positions_outside_track_are_not_clamped() {
        let geometry = unit_geometry();
        assert!(y_to_value(0.0, &geometry) > 1.0);
        assert!(y_to_value(204.0, &geometry) < 0.0);
    }

    #[test]
    fn degenerate_geometry_returns_sentinels() {
        let geometry = TrackGeometry::new(30.0, 20.0, 2.0, 8.0);
        assert_eq!(value_to_y(5.0, &geometry), 0.0);
        assert_eq!(y_to_value(12.0, &geometry), 2.0);

        let nan = TrackGeometry::new(f64::NAN, 20.0, 2.0, 8.0);
        assert_eq!(value_to_y(5.0, &nan), 0.0);
        assert_eq!(y_to_value(12.0, &nan), 2.0);
    }

    #[test]
    fn unbounded_height_is_degenerate() {
        let unbounded = TrackGeometry::new(f64::INFINITY, 20.0, 2.0, 8.0);
        assert!(unbounded.is_degenerate());
        assert_eq!(value_to_y(2.0, &unbounded), 0.0);
        assert_eq!(y_to_value(12.0, &unbounded), 2.0);

        let infinite_margin = TrackGeometry::new(f64::INFINITY, f64::INFINITY, 2.0, 8.0);
        assert!(infinite_margin.is_degenerate());
    }

    #[test]
    fn clamping() {
        assert_eq!(clamp_value(1.7, 0.0, 1.0), 1.0);
        assert_eq!(clamp_value(-0.2, 0.0, 1.0), 0.0);
        assert_eq!(clamp_value(0.3, 0.0, 1.0), 0.3);
        assert_eq!(clamp_value(f64::NAN, 0.0, 1.0), 0.0);
    }

    #[test]
    fn normalized_fraction() {
        assert_eq!(normalized(0.45, 0.0, 1.0), 0.45);
        assert_eq!(normalized(15.0, 10.0, 30.0), 0.25);
        assert_eq!(normalized(4.0, 4.0, 4.0), 0.0);
        assert_eq!(normalized(1.0, 2.0, 0.0), 0.0);
    }

    #[test]
    fn tiny_range_is_still_a_range() {
        assert_eq!(normalized(1e-17, 0.0, 1e-17), 1.0);
        assert_eq!(normalized(0.0, 0.0, 1e-17), 0.0);
    }
}
