// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! A minimal host for a slider, without a window.
//!
//! It lays a slider out, drags the knob from the bottom of the track to the
//! top, and logs each value and the draw commands a backend would replay.
//! Run with `RUST_LOG=trace` to also see the slider's own events.

use std::error::Error;
use std::sync::Arc;

use tracing::info;
use vertical_slider::kurbo::{Point, Size};
use vertical_slider::tracing_backend::try_init_tracing;
use vertical_slider::{
    DrawList, EventCtx, PointerButton, PointerEvent, PointerState, PointerTarget, RasterImage,
    Renderable, SliderConfig, SliderImages, SliderTag, VerticalSlider,
};

/// Stands in for a decoded bitmap.
#[derive(Debug)]
struct Bitmap {
    name: &'static str,
    size: Size,
}

impl RasterImage for Bitmap {
    fn size(&self) -> Size {
        self.size
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    try_init_tracing()?;

    let images = SliderImages::new(
        Arc::new(Bitmap {
            name: "track",
            size: Size::new(38.0, 144.0),
        }),
        Arc::new(Bitmap {
            name: "knob",
            size: Size::new(43.0, 31.0),
        }),
    );
    let config = SliderConfig {
        initial_value: 0.0,
        tag: SliderTag(1),
        ..SliderConfig::default()
    };
    let mut slider = VerticalSlider::try_new(config, images)?;
    slider.layout(Size::new(43.0, 204.0));
    let _subscription = slider.on_value_changed(|value, tag| {
        info!(%tag, value, "value changed");
    });

    let knob = slider.knob_rect().center();
    let press = PointerEvent::Down(PointerButton::Primary, PointerState::mouse(knob));
    let mut events = vec![press];
    events.extend((0..=4_u8).map(|step| {
        let y = knob.y - f64::from(step) * 41.0;
        PointerEvent::Move(PointerState::mouse(Point::new(knob.x, y)))
    }));
    events.push(PointerEvent::Up(
        PointerButton::Primary,
        PointerState::mouse(Point::new(knob.x, 20.0)),
    ));

    for event in &events {
        let mut ctx = EventCtx::new();
        slider.on_pointer_event(&mut ctx, event);
        if ctx.paint_requested() {
            let mut list = DrawList::new();
            slider.paint(&mut list);
            for command in &list {
                info!(image = command.image.name, dest = ?command.dest, "draw");
            }
        }
    }

    info!(value = slider.value(), "done");
    Ok(())
}
