// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Default [`tracing`] setup for programs hosting sliders.
//!
//! Log lines carry the UTC time of day with millisecond precision and no
//! target. `RUST_LOG` overrides the default filter, which shows
//! [`DEBUG`](tracing::Level::DEBUG) messages in debug builds and
//! [`INFO`](tracing::Level::INFO) messages in release builds.
//!
//! Nothing here replaces a subscriber the host already installed.

use std::error::Error;
use std::fmt;

use time::macros::format_description;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;

/// Reads `RUST_LOG`, using `default_level` for everything it doesn't mention.
///
/// A malformed variable is described in the second field. The directives
/// which did parse still apply.
fn filter_from_env(default_level: LevelFilter) -> (EnvFilter, Option<String>) {
    let builder = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var("RUST_LOG");
    let problem = builder
        .from_env()
        .err()
        .map(|err| format!("ignoring parts of RUST_LOG: {err:#}"));
    (builder.from_env_lossy(), problem)
}

/// Builds the console subscriber installed by [`try_init_tracing`].
///
/// Also returns a description of anything wrong with `RUST_LOG`. Hosts that
/// want the slider's logs only in some scope can pass the subscriber to
/// [`tracing::subscriber::with_default`].
pub fn default_tracing_subscriber(
    default_level: LevelFilter,
) -> (impl Subscriber + Send + Sync, Option<String>) {
    let (filter, problem) = filter_from_env(default_level);
    // The `Z` marks the time as UTC.
    let timer = UtcTime::new(format_description!(
        "[hour repr:24]:[minute]:[second].[subsecond digits:3]Z"
    ));
    let console = tracing_subscriber::fmt::layer()
        .with_timer(timer)
        .with_target(false)
        .with_filter(filter);
    (tracing_subscriber::registry().with(console), problem)
}

/// A global tracing subscriber was already installed.
#[derive(Debug)]
pub struct TracingSubscriberHasBeenSetError;

impl fmt::Display for TracingSubscriberHasBeenSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad("a global tracing subscriber is already set")
    }
}

impl Error for TracingSubscriberHasBeenSetError {}

fn install(default_level: LevelFilter) -> Result<(), TracingSubscriberHasBeenSetError> {
    // `has_been_set` is doc(hidden) but stable for all of tracing-core 0.1.
    if tracing_core::dispatcher::has_been_set() {
        return Err(TracingSubscriberHasBeenSetError);
    }
    let (subscriber, problem) = default_tracing_subscriber(default_level);
    // Only fails if another thread won the race, which leaves a usable subscriber.
    let _ = tracing::subscriber::set_global_default(subscriber);
    if let Some(problem) = problem {
        tracing::warn!("{problem}");
    }
    Ok(())
}

/// Installs the default subscriber for a test.
///
/// Only warnings and errors are shown unless `RUST_LOG` says otherwise.
pub fn try_init_test_tracing() -> Result<(), TracingSubscriberHasBeenSetError> {
    install(LevelFilter::WARN)
}

/// Installs the default subscriber for a program hosting sliders.
pub fn try_init_tracing() -> Result<(), TracingSubscriberHasBeenSetError> {
    // DEBUG shows the start and end of every drag.
    let default_level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    install(default_level)
}
