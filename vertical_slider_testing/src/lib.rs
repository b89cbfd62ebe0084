// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Headless host for testing [`vertical_slider`] controls.
//!
//! The primary type from this crate is [`TestHarness`], which owns a slider
//! and acts as its host.
//!
//! The testing harness can:
//!
//! - Simulate mouse and touch input, including cancelled gestures.
//! - Resize the slider as a layout pass would.
//! - Collect the slider's change notifications in order, and count repaint requests.
//! - Paint the slider into a [`DrawList`](vertical_slider::DrawList) for inspection.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET

mod harness;

pub use harness::{TestHarness, TestImage};
