//! Fuzz target: `sorting::sort`
//!
//! Interprets the input as little-endian `i32`s, sorts them with a trace
//! log attached, and checks the result against the standard library sort
//! and the trace against the summary.
//!
//! cargo fuzz run fuzz_bubble_sort

#![no_main]

use libfuzzer_sys::fuzz_target;
use robocode::sorting::{self, TraceEvent, TraceLog, is_sorted};

fuzz_target!(|data: &[u8]| {
    let mut buf: Vec<i32> = data
        .chunks_exact(4)
        .take(64)
        .map(|c| i32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    let mut expected = buf.clone();
    expected.sort_unstable();

    let mut log = TraceLog::new();
    let Ok(summary) = sorting::sort(&mut buf, &mut log) else {
        assert!(buf.is_empty(), "only an empty buffer may be rejected");
        assert!(log.events().is_empty());
        return;
    };

    assert!(is_sorted(&buf));
    assert_eq!(buf, expected, "sort must permute the input");

    assert_eq!(log.swap_count(), summary.swaps);
    assert_eq!(
        log.events().last(),
        Some(&TraceEvent::SortCompleted {
            total_passes: summary.total_passes
        })
    );
});
