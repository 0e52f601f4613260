// Copyright 2026
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::ffi::OsStr;
use std::path::PathBuf;

pub const DEFAULT_CANDIDATE: &str = "misc/magic.mgc";
pub const DEFAULT_OUTPUT: &str = "magic_static.h";
pub const DEFAULT_SYMBOL: &str = "g_magic_database_buffer";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const CANDIDATES_ENV: &str = "MAGIC_STATIC_CANDIDATES";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "magic-static",
    version,
    about = "Embed a compiled magic database as a static C byte array"
)]
pub struct Config {
    /// Candidate database paths, tried in order; the first readable one wins.
    /// Repeatable. Without it, `MAGIC_STATIC_CANDIDATES` (a `PATH`-style
    /// list) is used, then `misc/magic.mgc`
    #[arg(long = "candidate", value_name = "PATH")]
    pub candidates: Vec<PathBuf>,

    /// Destination of the generated header, replaced on every run
    #[arg(
        long,
        value_name = "PATH",
        env = "MAGIC_STATIC_OUTPUT",
        default_value = DEFAULT_OUTPUT
    )]
    pub output: PathBuf,

    /// Name of the generated array
    #[arg(
        long,
        value_name = "IDENT",
        env = "MAGIC_STATIC_SYMBOL",
        default_value = DEFAULT_SYMBOL
    )]
    pub symbol: String,

    /// Log filter (`off`, `warn`, `info`, `debug`, or an `EnvFilter` directive)
    #[arg(
        long,
        value_name = "FILTER",
        env = "MAGIC_STATIC_LOG",
        default_value = DEFAULT_LOG_LEVEL
    )]
    pub log_level: String,
}

/// Splits a candidate list the way `PATH` is split (`:` on Unix, `;` on
/// Windows), so commas inside a path survive. Empty entries are dropped.
#[must_use]
pub fn candidates_from_env(value: &OsStr) -> Vec<PathBuf> {
    std::env::split_paths(value)
        .filter(|path| !path.as_os_str().is_empty())
        .collect()
}

/// C89 through C23 keywords, including the underscore-prefixed spellings.
const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while", "alignas", "alignof", "bool",
    "constexpr", "false", "nullptr", "static_assert", "thread_local", "true", "typeof",
    "typeof_unqual", "_Alignas", "_Alignof", "_Atomic", "_BitInt", "_Bool", "_Complex",
    "_Decimal128", "_Decimal32", "_Decimal64", "_Generic", "_Imaginary", "_Noreturn",
    "_Static_assert", "_Thread_local",
];

/// Returns true when `symbol` is usable as a C identifier: the identifier
/// grammar, minus reserved words.
#[must_use]
pub fn is_c_identifier(symbol: &str) -> bool {
    let mut chars = symbol.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric()) && !C_KEYWORDS.contains(&symbol)
}
