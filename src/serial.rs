//! Serial console input parsing.
//!
//! Bytes arrive one at a time; [`LineBuffer`] turns them into lines in a
//! fixed-capacity buffer, and the parsers below read numbers out of a
//! line the way the Arduino `Stream::parseInt` does.

use std::io::{self, Read};
use std::ops::ControlFlow;

use heapless::String;

/// Accumulates console bytes until a newline.
///
/// `\r` is dropped. Bytes past capacity are discarded until the next
/// newline, so an overlong line comes out truncated rather than split.
#[derive(Debug, Default)]
pub struct LineBuffer<const N: usize> {
    line: String<N>,
}

impl<const N: usize> LineBuffer<N> {
    pub fn new() -> Self {
        Self { line: String::new() }
    }

    /// Feed one byte. Returns the finished line on `\n`.
    pub fn push(&mut self, byte: u8) -> Option<String<N>> {
        match byte {
            b'\n' => Some(core::mem::take(&mut self.line)),
            b'\r' => None,
            b => {
                // Non-ASCII bytes are replaced so the line stays valid UTF-8.
                let ch = if b.is_ascii() { b as char } else { '?' };
                let _ = self.line.push(ch);
                None
            }
        }
    }

    pub fn pending(&self) -> &str {
        &self.line
    }

    /// Drain `reader` line by line, trimming each line before `handle`
    /// sees it. A final line without a newline is still delivered.
    /// Stops early when `handle` breaks.
    pub fn read_lines<R, E, F>(&mut self, reader: R, mut handle: F) -> Result<(), E>
    where
        R: Read,
        E: From<io::Error>,
        F: FnMut(&str) -> Result<ControlFlow<()>, E>,
    {
        for byte in reader.bytes() {
            if let Some(line) = self.push(byte?) {
                if handle(line.trim())?.is_break() {
                    return Ok(());
                }
            }
        }
        let last = core::mem::take(&mut self.line);
        if !last.trim().is_empty() {
            let _ = handle(last.trim())?;
        }
        Ok(())
    }
}

/// Read the first integer in `input`.
///
/// Leading characters that are neither a digit nor `-` are skipped; the
/// number ends at the first non-digit. `None` when no digit is found.
/// Values beyond `i32` saturate.
pub fn parse_int(input: &str) -> Option<i32> {
    let bytes = input.as_bytes();
    let start = bytes
        .iter()
        .position(|b| b.is_ascii_digit() || *b == b'-')?;

    let mut negative = false;
    let mut value: i64 = 0;
    let mut seen_digit = false;

    for (i, b) in bytes[start..].iter().enumerate() {
        match b {
            b'-' if i == 0 => negative = true,
            b'0'..=b'9' => {
                seen_digit = true;
                value = (value * 10 + (b - b'0') as i64).min(i64::from(i32::MAX) + 1);
            }
            _ => break,
        }
    }

    if !seen_digit {
        // A lone '-' restarts the scan after it.
        return parse_int(&input[start + 1..]);
    }
    let value = if negative { -value } else { value };
    Some(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

/// Parse an IR code typed on the console: `0x`-prefixed hex, plain
/// decimal, or the `*` / `#` aliases for the stock remote.
pub fn parse_ir_code(input: &str, star: u32, hash: u32) -> Option<u32> {
    let token = input.trim();
    match token {
        "*" => Some(star),
        "#" => Some(hash),
        _ => {
            if let Some(hex) = token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
            {
                u32::from_str_radix(hex, 16).ok()
            } else {
                token.parse().ok()
            }
        }
    }
}
