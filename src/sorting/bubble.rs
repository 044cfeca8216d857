//! Traced bubble sort with early exit.
//!
//! Ascending, in place, strict `>` comparison (equal neighbours never
//! swap, so the sort is stable). After pass `i` the last `i + 1` slots
//! hold the largest values in final position; later passes never touch
//! them.

use crate::error::SortError;

use super::trace::{SortSummary, TraceEvent, TraceSink};

/// Sort `buffer` ascending, reporting every pass boundary and swap to `sink`.
///
/// An empty buffer is rejected before anything is emitted. A single
/// element runs zero passes and emits only `SortCompleted`.
pub fn sort(buffer: &mut [i32], sink: &mut impl TraceSink) -> Result<SortSummary, SortError> {
    let size = buffer.len();
    if size == 0 {
        return Err(SortError::InvalidSize);
    }

    let mut summary = SortSummary::default();

    for pass in 0..size - 1 {
        sink.emit(&TraceEvent::PassStarted { pass_index: pass });
        summary.total_passes = pass + 1;

        let mut swapped = false;
        for j in 0..size - 1 - pass {
            if buffer[j] > buffer[j + 1] {
                buffer.swap(j, j + 1);
                swapped = true;
                summary.swaps += 1;
                sink.emit(&TraceEvent::Swapped {
                    left_index: j,
                    right_index: j + 1,
                    buffer_snapshot: buffer.to_vec(),
                });
            }
        }

        if !swapped {
            sink.emit(&TraceEvent::NoSwapsDetected { pass_index: pass });
            summary.early_exit = true;
            break;
        }

        sink.emit(&TraceEvent::PassEnded {
            pass_index: pass,
            moved_to_end_value: buffer[size - 1 - pass],
        });
    }

    sink.emit(&TraceEvent::SortCompleted {
        total_passes: summary.total_passes,
    });
    Ok(summary)
}

/// Check if a slice is sorted in ascending order.
#[inline]
pub fn is_sorted(data: &[i32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
