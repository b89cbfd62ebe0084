// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use accesskit::{Node, Orientation, Role};
use cursor_icon::CursorIcon;
use kurbo::{Point, Rect, Size};
use tracing::{debug, trace, trace_span};

use crate::geometry::{self, TrackGeometry};
use crate::observer::ObserverSlot;
use crate::{
    ConfigError, DrawImage, DrawList, EventCtx, PointerButton, PointerEvent, PointerTarget,
    RasterImage, Renderable, SliderConfig, SliderImages, SliderPart, SliderTag, Subscription,
    ValueObserver,
};

/// Whether pointer movement currently drives the value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackingState {
    /// Waiting for a press on the knob.
    #[default]
    Idle,
    /// The knob was pressed and follows the pointer until release.
    Tracking,
}

/// A vertical slider drawn from two images.
///
/// The value grows upwards along a track inset by the config's margin from
/// the top and bottom of the bounds. Only the knob is a touch target: a
/// press on the knob starts tracking, each move while tracking sets the
/// value under the pointer, and release (or cancel) stops tracking.
///
/// The current value is always inside `min_value..=max_value`, and the knob
/// rectangle always reflects the current value and bounds.
///
/// Observers registered with [`subscribe`](Self::subscribe) are told about
/// every value a drag produces. Assignments through
/// [`set_value`](Self::set_value) are not reported back.
pub struct VerticalSlider<I> {
    config: SliderConfig,
    bounds: Size,
    value: f64,
    knob_rect: Rect,
    state: TrackingState,
    enabled: bool,
    images: SliderImages<I>,
    observer: ObserverSlot,
}

// --- MARK: BUILDERS
impl<I> VerticalSlider<I> {
    /// Creates a slider from `config`, with empty bounds.
    ///
    /// The knob stays at a fixed position until the first
    /// [`layout`](Renderable::layout) gives the track a positive length.
    ///
    /// # Panics
    ///
    /// If `config` is invalid, see [`SliderConfig::validate`].
    pub fn new(config: SliderConfig, images: SliderImages<I>) -> Self {
        if let Err(err) = config.validate() {
            panic!("invalid slider config: {err}");
        }
        Self::new_unchecked(config, images)
    }

    /// Creates a slider from `config`, or reports why `config` is invalid.
    pub fn try_new(config: SliderConfig, images: SliderImages<I>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new_unchecked(config, images))
    }

    fn new_unchecked(config: SliderConfig, images: SliderImages<I>) -> Self {
        let mut slider = Self {
            config,
            bounds: Size::ZERO,
            value: config.min_value,
            knob_rect: Rect::ZERO,
            state: TrackingState::Idle,
            enabled: true,
            images,
            observer: ObserverSlot::default(),
        };
        slider.assign_value(config.initial_value);
        slider
    }

    /// Builder-style method for setting the images.
    pub fn with_images(mut self, images: SliderImages<I>) -> Self {
        self.images = images;
        self
    }
}

// --- MARK: GETTERS
impl<I> VerticalSlider<I> {
    /// The current value, always in `min_value..=max_value`.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The current value as a fraction of the range, in `0.0..=1.0`.
    pub fn normalized_value(&self) -> f64 {
        geometry::normalized(self.value, self.config.min_value, self.config.max_value)
    }

    /// Smallest value the slider can hold.
    pub fn min_value(&self) -> f64 {
        self.config.min_value
    }

    /// Largest value the slider can hold.
    pub fn max_value(&self) -> f64 {
        self.config.max_value
    }

    /// The config the slider was created with, including later range changes.
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// The identifier sent with change notifications.
    pub fn tag(&self) -> SliderTag {
        self.config.tag
    }

    /// The bounds from the last layout. Empty before the first layout.
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// The parameters of the value/position mapping for the current bounds.
    pub fn geometry(&self) -> TrackGeometry {
        TrackGeometry::from_config(&self.config, self.bounds.height)
    }

    /// Distance the knob's center travels between the ends of the range.
    pub fn track_length(&self) -> f64 {
        self.geometry().track_length()
    }

    /// Where the knob is drawn and where it can be grabbed.
    pub fn knob_rect(&self) -> Rect {
        self.knob_rect
    }

    /// Where the track image is drawn.
    pub fn track_rect(&self) -> Rect {
        self.config.track_frame
    }

    /// Whether the slider is idle or following the pointer.
    pub fn state(&self) -> TrackingState {
        self.state
    }

    /// Whether a press on the knob is currently being followed.
    pub fn is_tracking(&self) -> bool {
        self.state == TrackingState::Tracking
    }

    /// Whether the slider responds to pointer input.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The images used for painting.
    pub fn images(&self) -> &SliderImages<I> {
        &self.images
    }
}

// --- MARK: WIDGETMUT
impl<I> VerticalSlider<I> {
    /// Sets the value, clamped to the range.
    ///
    /// Observers are not notified. The caller is responsible for repainting.
    pub fn set_value(&mut self, value: f64) {
        self.assign_value(value);
    }

    /// Replaces the value range, clamping the current value into it.
    ///
    /// # Panics
    ///
    /// If `min_value` isn't strictly below `max_value`, or either is not finite.
    pub fn set_range(&mut self, min_value: f64, max_value: f64) {
        let config = self.config.with_range(min_value, max_value);
        if let Err(err) = config.validate() {
            panic!("invalid slider range: {err}");
        }
        self.config = config;
        self.assign_value(self.value);
    }

    /// Sets the identifier sent with change notifications.
    pub fn set_tag(&mut self, tag: impl Into<SliderTag>) {
        self.config.tag = tag.into();
    }

    /// Enables or disables pointer input.
    ///
    /// Disabling the slider while the knob is held stops tracking.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled && self.is_tracking() {
            debug!(tag = %self.config.tag, "slider disabled while tracking");
            self.state = TrackingState::Idle;
        }
    }

    /// Replaces the images used for painting.
    pub fn set_images(&mut self, images: SliderImages<I>) {
        self.images = images;
    }

    /// Registers `observer` for change notifications, replacing any previous one.
    pub fn subscribe(&mut self, observer: impl ValueObserver + 'static) -> Subscription {
        self.observer.subscribe(Box::new(observer))
    }

    /// Registers a closure for change notifications, replacing any previous observer.
    pub fn on_value_changed(
        &mut self,
        callback: impl FnMut(f64, SliderTag) + 'static,
    ) -> Subscription {
        self.subscribe(callback)
    }

    /// Removes the observer registered with `subscription`.
    ///
    /// Returns false if the subscription was already replaced or removed.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.observer.unsubscribe(subscription)
    }
}

// --- MARK: INTERNALS
impl<I> VerticalSlider<I> {
    /// Every write to `value` goes through here, so the knob never goes stale.
    fn assign_value(&mut self, value: f64) {
        self.value = geometry::clamp_value(value, self.config.min_value, self.config.max_value);
        self.update_knob_rect();
    }

    fn update_knob_rect(&mut self) {
        let center_y = geometry::value_to_y(self.value, &self.geometry());
        let knob = self.config.knob_size;
        let origin = Point::new(0.0, center_y - knob.height / 2.0);
        self.knob_rect = Rect::from_origin_size(origin, knob);
    }

    fn pointer_down(&mut self, ctx: &mut EventCtx, position: Point) {
        if !self.enabled {
            trace!("ignoring press on disabled slider");
            return;
        }
        if !self.knob_rect.contains(position) {
            trace!(?position, knob = ?self.knob_rect, "press outside knob");
            return;
        }
        if self.state == TrackingState::Idle {
            debug!(tag = %self.config.tag, value = self.value, "started tracking");
            self.state = TrackingState::Tracking;
        }
        ctx.capture_pointer();
        ctx.set_handled();
    }

    fn pointer_move(&mut self, ctx: &mut EventCtx, position: Point) {
        if self.state != TrackingState::Tracking {
            return;
        }
        ctx.set_handled();

        let track = self.geometry();
        if track.is_degenerate() {
            trace!(bounds = ?self.bounds, "no track to follow before layout");
            return;
        }
        if !position.y.is_finite() {
            trace!(?position, "ignoring move to a non-finite position");
            return;
        }
        let value = geometry::clamp_value(
            geometry::y_to_value(position.y, &track),
            self.config.min_value,
            self.config.max_value,
        );
        if value == self.value {
            return;
        }
        self.assign_value(value);
        self.observer.notify(self.value, self.config.tag);
        ctx.request_paint();
    }

    fn end_tracking(&mut self, ctx: &mut EventCtx) {
        if self.state != TrackingState::Tracking {
            return;
        }
        debug!(tag = %self.config.tag, value = self.value, "stopped tracking");
        self.state = TrackingState::Idle;
        ctx.release_pointer();
        ctx.set_handled();
    }
}

// --- MARK: IMPL WIDGET
impl<I: RasterImage + Clone> Renderable for VerticalSlider<I> {
    type Image = I;

    fn layout(&mut self, bounds: Size) {
        if bounds == self.bounds {
            return;
        }
        self.bounds = bounds;
        if self.geometry().is_degenerate() {
            trace!(?bounds, "bounds leave no room for the track");
        }
        self.update_knob_rect();
    }

    fn paint(&self, list: &mut DrawList<I>) {
        if let Some(track) = &self.images.track {
            list.push(DrawImage::new(
                SliderPart::Track,
                track.clone(),
                self.track_rect(),
            ));
        }
        if let Some(knob) = &self.images.knob {
            list.push(DrawImage::new(
                SliderPart::Knob,
                knob.clone(),
                self.knob_rect,
            ));
        }
    }

    fn accessibility_role(&self) -> Role {
        Role::Slider
    }

    fn accessibility(&self, node: &mut Node) {
        node.set_orientation(Orientation::Vertical);
        node.set_numeric_value(self.value);
        node.set_min_numeric_value(self.config.min_value);
        node.set_max_numeric_value(self.config.max_value);
        if !self.enabled {
            node.set_disabled();
        }
    }
}

impl<I> PointerTarget for VerticalSlider<I> {
    fn on_pointer_event(&mut self, ctx: &mut EventCtx, event: &PointerEvent) {
        let _span = trace_span!("VerticalSlider", tag = self.config.tag.0).entered();
        match *event {
            PointerEvent::Down(PointerButton::Primary, state) => {
                self.pointer_down(ctx, state.position);
            }
            PointerEvent::Down(button, _) => {
                trace!(?button, "ignoring press of non-primary button");
            }
            PointerEvent::Move(state) => self.pointer_move(ctx, state.position),
            PointerEvent::Up(..) | PointerEvent::Cancel => self.end_tracking(ctx),
        }
    }

    fn cursor(&self) -> CursorIcon {
        if !self.enabled {
            CursorIcon::NotAllowed
        } else if self.is_tracking() {
            CursorIcon::Grabbing
        } else {
            CursorIcon::Grab
        }
    }
}

impl<I> std::fmt::Debug for VerticalSlider<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerticalSlider")
            .field("config", &self.config)
            .field("bounds", &self.bounds)
            .field("value", &self.value)
            .field("knob_rect", &self.knob_rect)
            .field("state", &self.state)
            .field("enabled", &self.enabled)
            .field("subscribed", &self.observer.is_subscribed())
            .finish_non_exhaustive()
    }
}
