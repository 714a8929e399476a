// Copyright 2022-2026 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Log setup shared by the `mailbox` tools. The library itself only emits `tracing` events; installing a
//! subscriber is up to the program using it.

use anyhow::Context;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs a global formatting subscriber that writes to stderr. The filter is read from `RUST_LOG`, falling
/// back to `default_level` when the variable is unset or unparseable.
pub fn init(default_level: Level) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.to_string()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("setting default subscriber failed")
}
