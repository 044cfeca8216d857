//! Fuzz target: serial console parsing
//!
//! Streams arbitrary bytes through `LineBuffer` and hands every line to
//! `parse_int` and `parse_ir_code`. Nothing may panic and no line may
//! exceed the buffer capacity.
//!
//! cargo fuzz run fuzz_serial_parse

#![no_main]

use libfuzzer_sys::fuzz_target;
use robocode::drivers::ir::{BTN_HASH, BTN_STAR};
use robocode::serial::{LineBuffer, parse_int, parse_ir_code};

fuzz_target!(|data: &[u8]| {
    let mut lines: LineBuffer<64> = LineBuffer::new();
    for &byte in data {
        if let Some(line) = lines.push(byte) {
            assert!(line.len() <= 64);
            let _ = parse_int(&line);
            let _ = parse_ir_code(&line, BTN_STAR, BTN_HASH);
        }
    }
    let _ = parse_int(lines.pending());
});
