// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! The channel through which the host learns about value changes.

use std::fmt;

/// Identifies a slider in change notifications.
///
/// Hosts with several sliders sharing one observer use it to tell them apart.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderTag(pub i64);

impl From<i64> for SliderTag {
    fn from(tag: i64) -> Self {
        Self(tag)
    }
}

impl fmt::Display for SliderTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Receives the slider's value every time a drag changes it.
///
/// Any `FnMut(f64, SliderTag)` closure is an observer.
pub trait ValueObserver {
    /// Called synchronously with the new (already clamped) value.
    fn value_changed(&mut self, value: f64, tag: SliderTag);
}

impl<F: FnMut(f64, SliderTag)> ValueObserver for F {
    fn value_changed(&mut self, value: f64, tag: SliderTag) {
        self(value, tag);
    }
}

/// Handle returned by [`VerticalSlider::subscribe`](crate::VerticalSlider::subscribe).
///
/// The host keeps it to [unsubscribe](crate::VerticalSlider::unsubscribe) later.
/// A handle becomes stale once another observer has been subscribed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "dropping the handle makes it impossible to unsubscribe"]
pub struct Subscription(u64);

/// The slot holding the registered observer.
#[derive(Default)]
pub(crate) struct ObserverSlot {
    observer: Option<Box<dyn ValueObserver>>,
    generation: u64,
}

impl ObserverSlot {
    pub(crate) fn subscribe(&mut self, observer: Box<dyn ValueObserver>) -> Subscription {
        self.generation += 1;
        self.observer = Some(observer);
        Subscription(self.generation)
    }

    /// Returns true if `subscription` was the current one.
    pub(crate) fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        if self.observer.is_some() && subscription.0 == self.generation {
            self.observer = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn is_subscribed(&self) -> bool {
        self.observer.is_some()
    }

    pub(crate) fn notify(&mut self, value: f64, tag: SliderTag) {
        if let Some(observer) = &mut self.observer {
            observer.value_changed(value, tag);
        }
    }
}

impl fmt::Debug for ObserverSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverSlot")
            .field("observer", &self.observer.as_ref().map(|_| ".."))
            .field("generation", &self.generation)
            .finish()
    }
}
