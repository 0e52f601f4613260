// Copyright 2026
// SPDX-License-Identifier: Apache-2.0

use crate::locate::ProbeFailure;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub const EXIT_WRITE_FAILED: u8 = 1;
pub const EXIT_INVALID_CONFIG: u8 = 2;
pub const EXIT_NO_DATABASE: u8 = 3;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("no candidate paths configured")]
    NoCandidates,

    #[error("'{0}' is not a valid C identifier")]
    InvalidSymbol(String),

    #[error("no magic database found among configured paths: {}", attempted_paths(.attempted))]
    NoDatabase { attempted: Vec<ProbeFailure> },

    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GenerateError {
    /// Process exit status for this failure.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::NoCandidates | Self::InvalidSymbol(_) => EXIT_INVALID_CONFIG,
            Self::NoDatabase { .. } => EXIT_NO_DATABASE,
            Self::Write { .. } => EXIT_WRITE_FAILED,
        }
    }
}

fn attempted_paths(attempted: &[ProbeFailure]) -> String {
    attempted
        .iter()
        .map(|failure| failure.path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_database_lists_every_path() {
        let err = GenerateError::NoDatabase {
            attempted: vec![
                ProbeFailure {
                    path: PathBuf::from("misc/magic.mgc"),
                    reason: "No such file or directory (os error 2)".to_string(),
                },
                ProbeFailure {
                    path: PathBuf::from("/usr/share/misc/magic.mgc"),
                    reason: "Permission denied (os error 13)".to_string(),
                },
            ],
        };
        assert_eq!(
            err.to_string(),
            "no magic database found among configured paths: misc/magic.mgc, /usr/share/misc/magic.mgc"
        );
        assert_eq!(err.exit_code(), EXIT_NO_DATABASE);
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        let write = GenerateError::Write {
            path: PathBuf::from("out.h"),
            source: io::Error::other("disk full"),
        };
        assert_eq!(write.exit_code(), EXIT_WRITE_FAILED);
        assert_eq!(write.to_string(), "failed to write 'out.h': disk full");
        assert_eq!(GenerateError::NoCandidates.exit_code(), EXIT_INVALID_CONFIG);
        assert_ne!(EXIT_NO_DATABASE, EXIT_WRITE_FAILED);
        assert_ne!(EXIT_NO_DATABASE, EXIT_INVALID_CONFIG);
    }
}
