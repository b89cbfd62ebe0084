// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Default dimensions and values for the vertical slider.
//!
//! These match the artwork the slider was designed around: a 43x31 knob
//! travelling over a 164px track inside a 204px tall control.

use kurbo::{Rect, Size};

/// Lower bound of the default value range.
pub const SLIDER_MIN_VALUE: f64 = 0.0;
/// Upper bound of the default value range.
pub const SLIDER_MAX_VALUE: f64 = 1.0;
/// Value a freshly created slider starts at.
pub const SLIDER_INITIAL_VALUE: f64 = 0.45;

/// Inset of the knob's travel from the top and bottom of the control.
pub const SLIDER_MARGIN: f64 = 20.0;
/// Size of the knob image.
pub const SLIDER_KNOB_SIZE: Size = Size::new(43.0, 31.0);

/// Where the track image is drawn, relative to the control's origin.
pub const SLIDER_TRACK_FRAME: Rect = Rect::new(2.0, 10.0, 40.0, 154.0);

/// Size the control is designed for.
pub const SLIDER_DEFAULT_SIZE: Size = Size::new(43.0, 204.0);
