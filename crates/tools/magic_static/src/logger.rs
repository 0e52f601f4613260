// Copyright 2026
// SPDX-License-Identifier: Apache-2.0

use crate::config::DEFAULT_LOG_LEVEL;
use tracing_subscriber::EnvFilter;

/// Initialises the global stderr subscriber.
///
/// `level` is an `EnvFilter` directive; `None` or an unparsable directive
/// falls back to `info`. Safe to call more than once: later calls are
/// ignored.
pub fn init_logger(level: Option<&str>) {
    let filter = level
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .try_init();
}
