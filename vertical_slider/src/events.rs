// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer events delivered by the host.

use kurbo::Point;

/// An indicator of which pointer button was pressed.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
#[repr(u8)]
pub enum PointerButton {
    /// No mouse button.
    None,
    /// Primary button, commonly the left mouse button, touch contact, pen contact.
    Primary,
    /// Secondary button, commonly the right mouse button, pen barrel button.
    Secondary,
    /// Auxiliary button, commonly the middle mouse button.
    Auxiliary,
}

/// The kind of device a pointer event comes from.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Hash)]
pub enum PointerType {
    /// A mouse or trackpad.
    #[default]
    Mouse,
    /// A finger on a touch screen.
    Touch,
    /// A stylus.
    Pen,
}

/// The state of a pointer at the time of an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    /// Position in the slider's local coordinate space.
    pub position: Point,
    /// The device the event comes from.
    pub pointer_type: PointerType,
}

impl PointerState {
    /// A mouse pointer at `position`.
    pub fn mouse(position: impl Into<Point>) -> Self {
        Self {
            position: position.into(),
            pointer_type: PointerType::Mouse,
        }
    }

    /// A touch contact at `position`.
    pub fn touch(position: impl Into<Point>) -> Self {
        Self {
            position: position.into(),
            pointer_type: PointerType::Touch,
        }
    }
}

/// A pointer-related event.
///
/// A pointer in this context can be a mouse, a pen, a touch screen, etc.
/// Only one pointer is tracked at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// A pointer was pressed.
    Down(PointerButton, PointerState),
    /// A pointer was moved.
    Move(PointerState),
    /// A pointer was released.
    Up(PointerButton, PointerState),
    /// The host took the pointer away, e.g. because a scroll view claimed the gesture.
    Cancel,
}

impl PointerEvent {
    /// The pointer's position, for events that carry one.
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::Down(_, state) | Self::Move(state) | Self::Up(_, state) => Some(state.position),
            Self::Cancel => None,
        }
    }

    /// Short name of the event, for logging.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Down(..) => "Down",
            Self::Move(..) => "Move",
            Self::Up(..) => "Up",
            Self::Cancel => "Cancel",
        }
    }
}
