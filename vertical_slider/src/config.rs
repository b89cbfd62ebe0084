// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt;

use kurbo::{Rect, Size};

use crate::SliderTag;
use crate::theme;

/// The fixed parameters of a [`VerticalSlider`](crate::VerticalSlider).
///
/// A config is set when the slider is created and doesn't change afterwards,
/// except for the value range which can be replaced through
/// [`VerticalSlider::set_range`](crate::VerticalSlider::set_range).
///
/// The track length isn't part of the config: it's derived from the
/// control's bounds on every layout.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderConfig {
    /// Smallest value the slider can hold.
    pub min_value: f64,
    /// Largest value the slider can hold.
    pub max_value: f64,
    /// Value the slider starts at. Clamped to the range on construction.
    pub initial_value: f64,
    /// Inset of the knob's travel from the top and bottom of the bounds.
    pub margin: f64,
    /// Dimensions of the knob.
    pub knob_size: Size,
    /// Rectangle the track image is clipped to, in local coordinates.
    pub track_frame: Rect,
    /// Identifier passed along with every change notification.
    pub tag: SliderTag,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min_value: theme::SLIDER_MIN_VALUE,
            max_value: theme::SLIDER_MAX_VALUE,
            initial_value: theme::SLIDER_INITIAL_VALUE,
            margin: theme::SLIDER_MARGIN,
            knob_size: theme::SLIDER_KNOB_SIZE,
            track_frame: theme::SLIDER_TRACK_FRAME,
            tag: SliderTag::default(),
        }
    }
}

impl SliderConfig {
    /// Creates a config with the default dimensions and the given range.
    pub fn new(min_value: f64, max_value: f64) -> Self {
        Self::default().with_range(min_value, max_value)
    }

    /// Sets the value range.
    pub fn with_range(mut self, min_value: f64, max_value: f64) -> Self {
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }

    /// Sets the value the slider starts at.
    pub fn with_initial_value(mut self, value: f64) -> Self {
        self.initial_value = value;
        self
    }

    /// Sets the inset of the knob's travel from the top and bottom of the bounds.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the knob's dimensions.
    pub fn with_knob_size(mut self, knob_size: impl Into<Size>) -> Self {
        self.knob_size = knob_size.into();
        self
    }

    /// Sets the rectangle the track image is clipped to.
    pub fn with_track_frame(mut self, track_frame: Rect) -> Self {
        self.track_frame = track_frame;
        self
    }

    /// Sets the identifier sent with change notifications.
    pub fn with_tag(mut self, tag: impl Into<SliderTag>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Checks the invariants the value/geometry mapping relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_value.is_finite() || !self.max_value.is_finite() {
            return Err(ConfigError::NonFiniteRange {
                min: self.min_value,
                max: self.max_value,
            });
        }
        if self.min_value >= self.max_value {
            return Err(ConfigError::InvertedRange {
                min: self.min_value,
                max: self.max_value,
            });
        }
        if is_negative_or_nan(self.knob_size.width) || is_negative_or_nan(self.knob_size.height) {
            return Err(ConfigError::NegativeKnobSize(self.knob_size));
        }
        if is_negative_or_nan(self.margin) {
            return Err(ConfigError::NegativeMargin(self.margin));
        }
        Ok(())
    }
}

fn is_negative_or_nan(x: f64) -> bool {
    x.is_nan() || x < 0.0
}

/// A [`SliderConfig`] which breaks one of the slider's invariants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// `min_value` is not strictly below `max_value`.
    InvertedRange {
        /// The configured lower bound.
        min: f64,
        /// The configured upper bound.
        max: f64,
    },
    /// One of the range bounds is NaN or infinite.
    NonFiniteRange {
        /// The configured lower bound.
        min: f64,
        /// The configured upper bound.
        max: f64,
    },
    /// The knob has a negative (or NaN) dimension.
    NegativeKnobSize(Size),
    /// The margin is negative (or NaN).
    NegativeMargin(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedRange { min, max } => {
                write!(f, "slider range is empty or inverted: {min} >= {max}")
            }
            Self::NonFiniteRange { min, max } => {
                write!(f, "slider range must be finite, got {min}..={max}")
            }
            Self::NegativeKnobSize(size) => {
                write!(
                    f,
                    "slider knob size must not be negative, got {}x{}",
                    size.width, size.height
                )
            }
            Self::NegativeMargin(margin) => {
                write!(f, "slider margin must not be negative, got {margin}")
            }
        }
    }
}

impl Error for ConfigError {}
