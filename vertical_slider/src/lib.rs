// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! A vertical slider control drawn from two images: a fixed track and a
//! draggable knob.
//!
//! This crate holds everything about the slider that doesn't depend on a
//! windowing system:
//!
//! - The mapping between values and vertical positions, in [`geometry`].
//! - [`VerticalSlider`], which owns the current value and knob rectangle and
//!   turns pointer events into value changes.
//! - The two capabilities a host needs to embed the slider:
//!   [`Renderable`] for layout and drawing, and [`PointerTarget`] for input.
//! - [`DrawList`], the retained draw commands a rendering backend replays.
//! - A default [`tracing`] setup in [`tracing_backend`].
//!
//! The host supplies bounds, pointer events and already-decoded images,
//! and repaints when an event's [`EventCtx`] asks for it.
//!
//! # Example
//!
//! ```
//! use vertical_slider::kurbo::{Point, Size};
//! use vertical_slider::{
//!     EventCtx, PointerButton, PointerEvent, PointerState, PointerTarget, Renderable,
//!     SliderConfig, SliderImages, SliderTag, VerticalSlider,
//! };
//! # #[derive(Clone)]
//! # struct Image;
//! # impl vertical_slider::RasterImage for Image {
//! #     fn size(&self) -> Size { Size::new(43.0, 31.0) }
//! # }
//!
//! let mut slider = VerticalSlider::new(SliderConfig::default(), SliderImages::<Image>::empty());
//! slider.layout(Size::new(43.0, 204.0));
//! let _subscription = slider.on_value_changed(|value: f64, tag: SliderTag| {
//!     println!("slider {tag} is now at {value}");
//! });
//!
//! let knob = slider.knob_rect().center();
//! let mut ctx = EventCtx::new();
//! slider.on_pointer_event(
//!     &mut ctx,
//!     &PointerEvent::Down(PointerButton::Primary, PointerState::touch(knob)),
//! );
//! slider.on_pointer_event(
//!     &mut ctx,
//!     &PointerEvent::Move(PointerState::touch(Point::new(knob.x, 0.0))),
//! );
//! assert_eq!(slider.value(), 1.0);
//! assert!(ctx.paint_requested());
//! ```
//!
//! # Feature flags
//!
//! - `serde`: Derives `Serialize` and `Deserialize` for [`SliderConfig`].

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use {accesskit, cursor_icon, kurbo};

pub mod geometry;
pub mod theme;
pub mod tracing_backend;

mod config;
mod contexts;
mod events;
mod observer;
mod paint;
mod slider;
mod widget;

pub use config::{ConfigError, SliderConfig};
pub use contexts::EventCtx;
pub use events::{PointerButton, PointerEvent, PointerState, PointerType};
pub use geometry::TrackGeometry;
pub use observer::{SliderTag, Subscription, ValueObserver};
pub use paint::{DrawImage, DrawList, RasterImage, SliderImages, SliderPart};
pub use slider::{TrackingState, VerticalSlider};
pub use widget::{PointerTarget, Renderable};
