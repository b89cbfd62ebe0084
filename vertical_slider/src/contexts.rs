// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! The context through which the slider talks back to its host.

/// Requests a slider makes while handling an event.
///
/// The host creates a fresh context for every event, passes it to
/// [`PointerTarget::on_pointer_event`](crate::PointerTarget::on_pointer_event),
/// and then acts on what was requested.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EventCtx {
    handled: bool,
    paint_requested: bool,
    pointer_capture: Option<bool>,
}

impl EventCtx {
    /// Creates a context with no pending requests.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the event as handled, so the host doesn't forward it elsewhere.
    pub fn set_handled(&mut self) {
        self.handled = true;
    }

    /// Whether the slider consumed the event.
    pub fn is_handled(&self) -> bool {
        self.handled
    }

    /// Ask the host to repaint the slider.
    pub fn request_paint(&mut self) {
        self.paint_requested = true;
    }

    /// Whether the host must repaint the slider.
    pub fn paint_requested(&self) -> bool {
        self.paint_requested
    }

    /// Ask the host to route further pointer events to this slider,
    /// even when they leave its bounds.
    pub fn capture_pointer(&mut self) {
        self.pointer_capture = Some(true);
    }

    /// Give up a previous [`capture_pointer`](Self::capture_pointer).
    pub fn release_pointer(&mut self) {
        self.pointer_capture = Some(false);
    }

    /// The capture change requested while handling the event, if any.
    ///
    /// `Some(true)` means capture, `Some(false)` means release.
    pub fn pointer_capture(&self) -> Option<bool> {
        self.pointer_capture
    }
}
