// Copyright 2026
// SPDX-License-Identifier: Apache-2.0

use crate::config::Config;
use crate::logger::init_logger;
use crate::{APP_NAME, APP_VERSION};
use std::ffi::OsString;

/// Parses `args` and initialises logging at the configured level.
#[must_use]
pub fn init_main<I, T>(args: I) -> Config
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let config = Config::from_cli(args);
    init_logger(Some(&config.log_level));

    tracing::debug!(
        app = APP_NAME,
        version = APP_VERSION,
        candidates = ?config.candidates,
        output = %config.output.display(),
        symbol = %config.symbol,
        "Configuration loaded"
    );
    config
}
