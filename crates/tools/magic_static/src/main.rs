// Copyright 2026
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use magic_static::config::Config;
use magic_static::error::EXIT_WRITE_FAILED;
use magic_static::main_init::init_main;
use magic_static::{GenerateError, Generator, Report};
use std::process::ExitCode;

fn run(config: &Config) -> Result<Report> {
    let generator = Generator::from_config(config).context("invalid configuration")?;
    let report = generator.run().with_context(|| {
        format!(
            "could not generate '{}' from the magic database",
            generator.output().display()
        )
    })?;
    Ok(report)
}

fn main() -> ExitCode {
    let config = init_main(std::env::args_os());

    match run(&config) {
        Ok(report) => {
            tracing::info!(
                "Embedded {} bytes from {} into {}",
                report.len,
                report.source.display(),
                report.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{err:#}");
            let code = err
                .downcast_ref::<GenerateError>()
                .map_or(EXIT_WRITE_FAILED, GenerateError::exit_code);
            ExitCode::from(code)
        }
    }
}
