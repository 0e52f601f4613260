// Copyright 2026
// SPDX-License-Identifier: Apache-2.0

use crate::config::{CANDIDATES_ENV, Config, DEFAULT_CANDIDATE, candidates_from_env};
use clap::Parser;
use std::collections::HashSet;
use std::ffi::OsString;
use std::path::PathBuf;

/// implements config init from cli arguments
impl Config {
    /// loads config from cli arguments, filling the candidate list from the
    /// environment or the default when no `--candidate` was given, then
    /// dropping repeated candidates while keeping the first occurrence of each
    #[must_use]
    pub fn from_cli<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut config = Config::parse_from(args);
        if config.candidates.is_empty() {
            config.candidates = std::env::var_os(CANDIDATES_ENV)
                .map(|value| candidates_from_env(&value))
                .unwrap_or_default();
        }
        if config.candidates.is_empty() {
            config.candidates = vec![PathBuf::from(DEFAULT_CANDIDATE)];
        }

        let mut seen = HashSet::new();
        config
            .candidates
            .retain(|candidate| seen.insert(candidate.clone()));
        config
    }
}
