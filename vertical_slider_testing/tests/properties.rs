// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Properties of the value/position mapping and the drag state machine.

use proptest::prelude::*;
use vertical_slider::geometry::{TrackGeometry, clamp_value, value_to_y, y_to_value};
use vertical_slider::kurbo::{Point, Size};
use vertical_slider::{PointerButton, SliderConfig, SliderImages, VerticalSlider};
use vertical_slider_testing::{TestHarness, TestImage};

/// A laid-out geometry with a positive track length.
fn geometry() -> impl Strategy<Value = TrackGeometry> {
    (
        -1000.0..1000.0_f64,
        0.01..1000.0_f64,
        0.0..50.0_f64,
        1.0..2000.0_f64,
    )
        .prop_map(|(min, span, margin, track_length)| {
            TrackGeometry::new(track_length + 2.0 * margin, margin, min, min + span)
        })
}

proptest! {
    #[test]
    fn round_trip(geometry in geometry(), fraction in 0.0..=1.0_f64) {
        let value = geometry.min_value + fraction * (geometry.max_value - geometry.min_value);
        let back = y_to_value(value_to_y(value, &geometry), &geometry);
        let tolerance = 1e-9 * (geometry.max_value - geometry.min_value).max(1.0)
            + 1e-9 * geometry.min_value.abs();
        prop_assert!((back - value).abs() <= tolerance, "{value} came back as {back}");
    }

    #[test]
    fn larger_values_sit_higher(
        geometry in geometry(),
        a in 0.0..=1.0_f64,
        b in 0.0..=1.0_f64,
    ) {
        prop_assume!((a - b).abs() > 1e-6);
        let span = geometry.max_value - geometry.min_value;
        let (low, high) = (a.min(b), a.max(b));
        let v1 = geometry.min_value + low * span;
        let v2 = geometry.min_value + high * span;
        prop_assert!(value_to_y(v1, &geometry) > value_to_y(v2, &geometry));
    }

    #[test]
    fn positions_past_the_ends_clamp(geometry in geometry(), overshoot in 0.001..500.0_f64) {
        let above = y_to_value(geometry.track_top() - overshoot, &geometry);
        let below = y_to_value(geometry.track_bottom() + overshoot, &geometry);
        prop_assert_eq!(
            clamp_value(above, geometry.min_value, geometry.max_value),
            geometry.max_value
        );
        prop_assert_eq!(
            clamp_value(below, geometry.min_value, geometry.max_value),
            geometry.min_value
        );
    }

    #[test]
    fn drags_never_leave_the_range(ys in prop::collection::vec(-400.0..600.0_f64, 1..20)) {
        let slider = VerticalSlider::<TestImage>::new(
            SliderConfig::new(-3.0, 5.0),
            SliderImages::empty(),
        );
        let mut harness = TestHarness::create_with_size(slider, Size::new(43.0, 204.0));
        harness.mouse_move_to_knob();
        harness.mouse_button_press(PointerButton::Primary);

        let mut previous = harness.slider().value();
        for y in ys {
            harness.mouse_move(Point::new(20.0, y));
            let value = harness.slider().value();
            prop_assert!((-3.0..=5.0).contains(&value));
            match harness.pop_action() {
                Some((notified, _)) => {
                    prop_assert_eq!(notified, value);
                    prop_assert!(notified != previous);
                }
                None => {
                    prop_assert_eq!(value, previous);
                }
            }
            previous = value;
        }
        prop_assert!(harness.pop_action().is_none());
    }
}
