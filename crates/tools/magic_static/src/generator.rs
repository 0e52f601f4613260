// Copyright 2026
// SPDX-License-Identifier: Apache-2.0
//
// Generator: locate the magic database, then replace the output file with its
// rendered array declaration.

use crate::config::{Config, is_c_identifier};
use crate::error::GenerateError;
use crate::locate::{ProbeFailure, locate};
use crate::render::write_array;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::Builder;

#[derive(Debug, Clone)]
pub struct Generator {
    candidates: Vec<PathBuf>,
    output: PathBuf,
    symbol: String,
}

/// Outcome of a successful run.
#[derive(Debug)]
pub struct Report {
    /// candidate the bytes were read from
    pub source: PathBuf,
    pub output: PathBuf,
    pub len: usize,
    /// candidates that failed before `source` was found
    pub skipped: Vec<ProbeFailure>,
}

impl Generator {
    /// # Errors
    /// `NoCandidates` for an empty candidate list, `InvalidSymbol` when
    /// `symbol` is not a C identifier.
    pub fn new(
        candidates: Vec<PathBuf>,
        output: impl Into<PathBuf>,
        symbol: impl Into<String>,
    ) -> Result<Self, GenerateError> {
        if candidates.is_empty() {
            return Err(GenerateError::NoCandidates);
        }
        let symbol = symbol.into();
        if !is_c_identifier(&symbol) {
            return Err(GenerateError::InvalidSymbol(symbol));
        }
        Ok(Self {
            candidates,
            output: output.into(),
            symbol,
        })
    }

    /// # Errors
    /// see [`Generator::new`]
    pub fn from_config(config: &Config) -> Result<Self, GenerateError> {
        Self::new(
            config.candidates.clone(),
            config.output.clone(),
            config.symbol.clone(),
        )
    }

    #[must_use]
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Reads the first readable candidate and writes its array declaration.
    /// The output file is left untouched unless the whole declaration was
    /// written successfully.
    ///
    /// # Errors
    /// `NoDatabase` when every candidate fails, `Write` when the output
    /// cannot be produced.
    pub fn run(&self) -> Result<Report, GenerateError> {
        let located = locate(&self.candidates)?;
        let database = located.database;

        self.write_output(&database.bytes)?;

        tracing::info!(
            source = %database.path.display(),
            output = %self.output.display(),
            bytes = database.bytes.len(),
            "generated magic database array"
        );

        Ok(Report {
            source: database.path,
            output: self.output.clone(),
            len: database.bytes.len(),
            skipped: located.skipped,
        })
    }

    fn write_output(&self, bytes: &[u8]) -> Result<(), GenerateError> {
        let write_err = |source: io::Error| GenerateError::Write {
            path: self.output.clone(),
            source,
        };

        // a symlinked destination is written through to its target, not replaced
        let target = match fs::canonicalize(&self.output) {
            Ok(resolved) => resolved,
            Err(err) if err.kind() == io::ErrorKind::NotFound => self.output.clone(),
            Err(err) => return Err(write_err(err)),
        };

        // the temp file must live next to the destination for persist to be a rename
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut builder = Builder::new();
        builder.prefix(".magic_static");
        // NamedTempFile defaults to 0600; generated headers are ordinary sources
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(0o644));
        }

        let tmp = builder.tempfile_in(dir).map_err(write_err)?;
        let mut writer = BufWriter::new(tmp);
        write_array(&mut writer, &self.symbol, bytes).map_err(write_err)?;
        writer.flush().map_err(write_err)?;

        let tmp = writer.into_inner().map_err(|e| write_err(e.into_error()))?;
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(&target).map_err(|e| write_err(e.error))?;
        Ok(())
    }
}
