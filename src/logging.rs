// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Log setup for the binary. The library only emits `tracing` events; it never
//! installs a subscriber itself.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Default directive when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "fieldtune=info";

/// Install a stderr formatter filtered by `RUST_LOG`.
///
/// `verbose` raises the crate's level: 1 is debug, 2 or more is trace. An
/// explicit `RUST_LOG` always wins. Calling this twice is harmless.
pub fn init(verbose: u8) {
    let fallback = match verbose {
        0 => DEFAULT_FILTER,
        1 => "fieldtune=debug",
        _ => "fieldtune=trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
