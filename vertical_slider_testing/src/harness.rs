// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Tools and infrastructure for testing sliders.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use tracing::debug;
use vertical_slider::kurbo::{Point, Size};
use vertical_slider::theme::SLIDER_DEFAULT_SIZE;
use vertical_slider::{
    DrawList, EventCtx, PointerButton, PointerEvent, PointerState, PointerTarget, PointerType,
    RasterImage, Renderable, SliderTag, VerticalSlider,
};

/// A stand-in for a decoded image: it only knows its size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestImage {
    /// The image's intrinsic size.
    pub size: Size,
}

impl TestImage {
    /// An image of the given dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
        }
    }
}

impl RasterImage for TestImage {
    fn size(&self) -> Size {
        self.size
    }
}

/// A safe headless host to test a slider in.
///
/// `TestHarness` plays the part of the windowing system: it gives the slider
/// bounds, turns simulated mouse and touch input into [`PointerEvent`]s, and
/// records what the slider asks of its host.
///
/// ## Workflow
///
/// - Create a harness with some slider.
/// - Send events to the slider as if you were a user interacting with a window.
/// - Check the notifications with [`pop_action`](Self::pop_action), and the
///   slider's state through [`slider`](Self::slider).
///
/// ## Example
///
/// ```
/// use vertical_slider::kurbo::Point;
/// use vertical_slider::{SliderConfig, SliderImages, SliderTag, VerticalSlider};
/// use vertical_slider_testing::{TestHarness, TestImage};
///
/// let slider = VerticalSlider::<TestImage>::new(SliderConfig::default(), SliderImages::empty());
/// let mut harness = TestHarness::create(slider);
///
/// harness.mouse_move_to_knob();
/// harness.mouse_button_press(vertical_slider::PointerButton::Primary);
/// harness.mouse_move(Point::new(10.0, 20.0));
/// assert_eq!(harness.pop_action(), Some((1.0, SliderTag(0))));
/// ```
pub struct TestHarness<I = TestImage> {
    slider: VerticalSlider<I>,
    actions: Rc<RefCell<VecDeque<(f64, SliderTag)>>>,
    pointer_position: Point,
    pointer_type: PointerType,
    paint_requests: usize,
    pointer_captured: bool,
}

impl<I: RasterImage + Clone> TestHarness<I> {
    /// Builds the harness around `slider`, laid out at the default size.
    pub fn create(slider: VerticalSlider<I>) -> Self {
        Self::create_with_size(slider, SLIDER_DEFAULT_SIZE)
    }

    /// Builds the harness around `slider`, laid out at `size`.
    ///
    /// The harness registers itself as the slider's observer.
    pub fn create_with_size(mut slider: VerticalSlider<I>, size: Size) -> Self {
        let actions = Rc::new(RefCell::new(VecDeque::new()));
        let queue = actions.clone();
        let _subscription = slider.on_value_changed(move |value, tag| {
            queue.borrow_mut().push_back((value, tag));
        });
        slider.layout(size);
        Self {
            slider,
            actions,
            pointer_position: Point::ZERO,
            pointer_type: PointerType::Mouse,
            paint_requests: 0,
            pointer_captured: false,
        }
    }

    // --- MARK: EVENTS

    /// Send a pointer event to the slider and act on its requests.
    pub fn process_pointer_event(&mut self, event: PointerEvent) -> EventCtx {
        if let Some(position) = event.position() {
            self.pointer_position = position;
        }
        let mut ctx = EventCtx::new();
        self.slider.on_pointer_event(&mut ctx, &event);
        if ctx.paint_requested() {
            self.paint_requests += 1;
        }
        if let Some(captured) = ctx.pointer_capture() {
            self.pointer_captured = captured;
        }
        debug!(
            event = event.short_name(),
            handled = ctx.is_handled(),
            "harness event"
        );
        ctx
    }

    fn pointer_state(&self, position: Point) -> PointerState {
        PointerState {
            position,
            pointer_type: self.pointer_type,
        }
    }

    /// Move the mouse to `position`, in the slider's local coordinates.
    pub fn mouse_move(&mut self, position: impl Into<Point>) -> EventCtx {
        self.pointer_type = PointerType::Mouse;
        let state = self.pointer_state(position.into());
        self.process_pointer_event(PointerEvent::Move(state))
    }

    /// Move the mouse to the center of the knob.
    pub fn mouse_move_to_knob(&mut self) -> EventCtx {
        let center = self.slider.knob_rect().center();
        self.mouse_move(center)
    }

    /// Press `button` at the current mouse position.
    pub fn mouse_button_press(&mut self, button: PointerButton) -> EventCtx {
        self.pointer_type = PointerType::Mouse;
        let state = self.pointer_state(self.pointer_position);
        self.process_pointer_event(PointerEvent::Down(button, state))
    }

    /// Release `button` at the current mouse position.
    pub fn mouse_button_release(&mut self, button: PointerButton) -> EventCtx {
        let state = self.pointer_state(self.pointer_position);
        self.process_pointer_event(PointerEvent::Up(button, state))
    }

    /// Press and release the primary button at `position`.
    pub fn mouse_click_at(&mut self, position: impl Into<Point>) {
        self.mouse_move(position);
        self.mouse_button_press(PointerButton::Primary);
        self.mouse_button_release(PointerButton::Primary);
    }

    /// Put a finger down at `position`.
    pub fn touch_down(&mut self, position: impl Into<Point>) -> EventCtx {
        self.pointer_type = PointerType::Touch;
        let state = self.pointer_state(position.into());
        self.process_pointer_event(PointerEvent::Down(PointerButton::Primary, state))
    }

    /// Slide the finger to `position`.
    pub fn touch_move(&mut self, position: impl Into<Point>) -> EventCtx {
        self.pointer_type = PointerType::Touch;
        let state = self.pointer_state(position.into());
        self.process_pointer_event(PointerEvent::Move(state))
    }

    /// Lift the finger.
    pub fn touch_up(&mut self) -> EventCtx {
        let state = self.pointer_state(self.pointer_position);
        self.process_pointer_event(PointerEvent::Up(PointerButton::Primary, state))
    }

    /// Take the pointer away from the slider.
    pub fn pointer_cancel(&mut self) -> EventCtx {
        self.process_pointer_event(PointerEvent::Cancel)
    }

    /// Give the slider new bounds.
    pub fn resize(&mut self, size: Size) {
        self.slider.layout(size);
    }

    // --- MARK: GETTERS

    /// The slider under test.
    pub fn slider(&self) -> &VerticalSlider<I> {
        &self.slider
    }

    /// Mutable access to the slider, for calls a real host would make.
    pub fn slider_mut(&mut self) -> &mut VerticalSlider<I> {
        &mut self.slider
    }

    /// Pop the oldest notification the slider sent.
    pub fn pop_action(&mut self) -> Option<(f64, SliderTag)> {
        self.actions.borrow_mut().pop_front()
    }

    /// Number of events after which the slider asked to be repainted.
    pub fn paint_requests(&self) -> usize {
        self.paint_requests
    }

    /// Whether the slider currently holds the pointer capture.
    pub fn has_pointer_capture(&self) -> bool {
        self.pointer_captured
    }

    /// The last pointer position sent to the slider.
    pub fn pointer_position(&self) -> Point {
        self.pointer_position
    }

    /// Paint the slider into a fresh list.
    pub fn render(&self) -> DrawList<I> {
        let mut list = DrawList::new();
        self.slider.paint(&mut list);
        list
    }
}

impl<I> std::fmt::Debug for TestHarness<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestHarness")
            .field("slider", &self.slider)
            .field("pending_actions", &self.actions.borrow().len())
            .field("pointer_position", &self.pointer_position)
            .field("pointer_type", &self.pointer_type)
            .field("paint_requests", &self.paint_requests)
            .field("pointer_captured", &self.pointer_captured)
            .finish()
    }
}
