// Copyright 2026
// SPDX-License-Identifier: Apache-2.0
//
// Rendering of a byte buffer as a C array declaration:
//
//     static const unsigned char <symbol>[<N>] = {<b0>,<b1>,...};
//
// Bytes are written as unsigned decimal literals, comma-separated, with no
// whitespace, no trailing comma and no trailing newline.

use std::fmt;
use std::io::{self, Write};

/// The array declaration for `bytes`, formatted on demand.
#[derive(Debug, Clone, Copy)]
pub struct ArrayDecl<'a> {
    pub symbol: &'a str,
    pub bytes: &'a [u8],
}

impl fmt::Display for ArrayDecl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "static const unsigned char {}[{}] = {{",
            self.symbol,
            self.bytes.len()
        )?;

        let mut first = true;
        for byte in self.bytes {
            if first {
                first = false;
            } else {
                f.write_str(",")?;
            }
            write!(f, "{byte}")?;
        }

        f.write_str("};")
    }
}

/// Writes the declaration for `bytes` to `writer`.
pub fn write_array<W>(mut writer: W, symbol: &str, bytes: &[u8]) -> io::Result<()>
where
    W: Write,
{
    write!(writer, "{}", ArrayDecl { symbol, bytes })
}

/// Renders the declaration into a `String`.
#[must_use]
pub fn render_array(symbol: &str, bytes: &[u8]) -> String {
    ArrayDecl { symbol, bytes }.to_string()
}
