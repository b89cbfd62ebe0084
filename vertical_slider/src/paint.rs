// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Draw commands produced by the slider.
//!
//! The slider never decodes or looks up images. The host resolves them once
//! and hands them over as [`SliderImages`]; painting only records which image
//! goes into which rectangle, and the host's backend replays the list.

use std::rc::Rc;
use std::sync::Arc;

use kurbo::{Point, Rect, Size};
use smallvec::SmallVec;

/// A decoded image owned by the host.
///
/// Images are read-only once loaded, so one image can back any number of
/// sliders. Wrap it in an [`Arc`] or [`Rc`] to share it.
pub trait RasterImage {
    /// The intrinsic size the image is drawn at.
    fn size(&self) -> Size;
}

impl<T: RasterImage + ?Sized> RasterImage for Arc<T> {
    fn size(&self) -> Size {
        (**self).size()
    }
}

impl<T: RasterImage + ?Sized> RasterImage for Rc<T> {
    fn size(&self) -> Size {
        (**self).size()
    }
}

impl<T: RasterImage + ?Sized> RasterImage for &T {
    fn size(&self) -> Size {
        (**self).size()
    }
}

/// The two images making up a slider.
///
/// Either image may be missing, in which case it is simply not drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderImages<I> {
    /// Background drawn into the track rectangle.
    pub track: Option<I>,
    /// Indicator drawn into the knob rectangle.
    pub knob: Option<I>,
}

impl<I> SliderImages<I> {
    /// Both images present.
    pub fn new(track: I, knob: I) -> Self {
        Self {
            track: Some(track),
            knob: Some(knob),
        }
    }

    /// No images; the slider paints nothing until they are set.
    pub fn empty() -> Self {
        Self {
            track: None,
            knob: None,
        }
    }
}

impl<I> Default for SliderImages<I> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Which part of the slider a command draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliderPart {
    /// The fixed background.
    Track,
    /// The draggable indicator.
    Knob,
}

/// Draw `image` at `dest`, clipped to `clip`.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawImage<I> {
    /// What is being drawn.
    pub part: SliderPart,
    /// The image to draw.
    pub image: I,
    /// Nothing outside this rectangle may be touched.
    pub clip: Rect,
    /// Where the image goes, at its intrinsic size.
    pub dest: Rect,
}

impl<I: RasterImage> DrawImage<I> {
    /// Places `image` at the pixel-aligned origin of `clip`.
    pub fn new(part: SliderPart, image: I, clip: Rect) -> Self {
        let origin = Point::new((clip.x0 + 0.5).floor(), (clip.y0 + 0.5).floor());
        let dest = Rect::from_origin_size(origin, image.size());
        Self {
            part,
            image,
            clip,
            dest,
        }
    }
}

/// The commands recorded by one paint pass, in drawing order.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList<I> {
    commands: SmallVec<[DrawImage<I>; 2]>,
}

impl<I> Default for DrawList<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> DrawList<I> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            commands: SmallVec::new(),
        }
    }

    /// Appends a command.
    pub fn push(&mut self, command: DrawImage<I>) {
        self.commands.push(command);
    }

    /// Removes all commands, keeping the allocation.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// The recorded commands, back to front.
    pub fn commands(&self) -> &[DrawImage<I>] {
        &self.commands
    }

    /// The command drawing `part`, if one was recorded.
    pub fn find(&self, part: SliderPart) -> Option<&DrawImage<I>> {
        self.commands.iter().find(|command| command.part == part)
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl<'a, I> IntoIterator for &'a DrawList<I> {
    type Item = &'a DrawImage<I>;
    type IntoIter = std::slice::Iter<'a, DrawImage<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
