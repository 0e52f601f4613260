// Copyright 2026
// SPDX-License-Identifier: Apache-2.0
//
// magic-static: turn a compiled magic database into a static C byte array
// that can be compiled straight into a binary.

pub mod config;
pub mod config_from_cli;
pub mod error;
pub mod generator;
pub mod locate;
pub mod logger;
pub mod main_init;
pub mod render;

pub use error::GenerateError;
pub use generator::{Generator, Report};

pub static APP_NAME: &str = env!("CARGO_PKG_NAME");
pub static APP_VERSION: &str = env!("CARGO_PKG_VERSION");
