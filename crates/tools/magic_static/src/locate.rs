// Copyright 2026
// SPDX-License-Identifier: Apache-2.0
//
// Candidate probing: read the first magic database that can be opened.

use crate::error::GenerateError;
use std::fs;
use std::path::{Path, PathBuf};

/// Contents of the first readable candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagicDatabase {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

/// A candidate that could not be read, with the reason reported by the OS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeFailure {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug)]
pub enum Lookup {
    Found(MagicDatabase),
    NotFound,
}

/// Result of a successful probe: the database plus the candidates skipped
/// before it.
#[derive(Debug)]
pub struct Located {
    pub database: MagicDatabase,
    pub skipped: Vec<ProbeFailure>,
}

/// Reads one candidate. Any open or read error is reported back as a
/// `ProbeFailure`; nothing else is caught here.
fn probe(path: &Path) -> Result<MagicDatabase, ProbeFailure> {
    match fs::read(path) {
        Ok(bytes) => Ok(MagicDatabase {
            path: path.to_path_buf(),
            bytes,
        }),
        Err(err) => Err(ProbeFailure {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }),
    }
}

/// Tries `candidates` in order and stops at the first one that reads.
/// Later candidates are never opened once one succeeds.
pub fn probe_candidates(candidates: &[PathBuf]) -> (Lookup, Vec<ProbeFailure>) {
    let mut failures = Vec::new();

    for candidate in candidates {
        match probe(candidate) {
            Ok(database) => {
                tracing::debug!(
                    path = %database.path.display(),
                    bytes = database.bytes.len(),
                    "read magic database"
                );
                return (Lookup::Found(database), failures);
            }
            Err(failure) => {
                tracing::warn!(
                    path = %failure.path.display(),
                    error = %failure.reason,
                    "Failed to open magic database: {}",
                    failure.path.display()
                );
                failures.push(failure);
            }
        }
    }

    (Lookup::NotFound, failures)
}

/// Like [`probe_candidates`], but turns exhaustion into
/// [`GenerateError::NoDatabase`].
pub fn locate(candidates: &[PathBuf]) -> Result<Located, GenerateError> {
    match probe_candidates(candidates) {
        (Lookup::Found(database), skipped) => Ok(Located { database, skipped }),
        (Lookup::NotFound, attempted) => Err(GenerateError::NoDatabase { attempted }),
    }
}
