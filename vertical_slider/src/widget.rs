// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use accesskit::{Node, Role};
use cursor_icon::CursorIcon;
use kurbo::Size;

use crate::{DrawList, EventCtx, PointerEvent};

/// A component that can be laid out and drawn by a host.
///
/// The host calls [`layout`](Self::layout) whenever the component's bounds
/// change and [`paint`](Self::paint) whenever it needs a fresh picture.
/// Painting never changes state, so it can happen as often as the host likes.
pub trait Renderable {
    /// The host's image handle type.
    type Image;

    /// Assign new bounds, in the component's local coordinate space.
    fn layout(&mut self, bounds: Size);

    /// Record the draw commands for the current state into `list`.
    fn paint(&self, list: &mut DrawList<Self::Image>);

    /// The accessibility role of the component.
    fn accessibility_role(&self) -> Role;

    /// Describe the component to assistive technologies.
    fn accessibility(&self, node: &mut Node);
}

/// A component which reacts to pointer input.
pub trait PointerTarget {
    /// Handle a pointer event.
    ///
    /// Positions in `event` are in the component's local coordinate space.
    /// Requests for the host (repaint, pointer capture) go through `ctx`.
    fn on_pointer_event(&mut self, ctx: &mut EventCtx, event: &PointerEvent);

    /// The cursor to show while the pointer is over the component.
    fn cursor(&self) -> CursorIcon {
        CursorIcon::Default
    }
}
