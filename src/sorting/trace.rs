//! Sort trace events and the sink port that consumes them.
//!
//! The sort never prints. Each observable step becomes a [`TraceEvent`]
//! handed to a caller-supplied [`TraceSink`]; adapters on the other side
//! decide whether it goes to the console, a JSON stream or nowhere.

use serde::{Deserialize, Serialize};

/// One observable step of a single sort invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent {
    /// Pass `pass_index` (0-based) begins.
    PassStarted { pass_index: usize },

    /// Adjacent slots were exchanged. `buffer_snapshot` is the whole
    /// buffer immediately after this exchange.
    Swapped {
        left_index: usize,
        right_index: usize,
        buffer_snapshot: Vec<i32>,
    },

    /// Pass finished with at least one swap; `moved_to_end_value` is now
    /// fixed at the tail.
    PassEnded {
        pass_index: usize,
        moved_to_end_value: i32,
    },

    /// Pass finished without swaps; the sort stops here.
    NoSwapsDetected { pass_index: usize },

    /// Always the last event of a successful sort.
    SortCompleted { total_passes: usize },
}

/// Outcome of a successful sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSummary {
    /// Passes executed, including the pass that detected no swaps.
    pub total_passes: usize,
    /// True when a swap-free pass ended the sort.
    pub early_exit: bool,
    /// Number of `Swapped` events emitted.
    pub swaps: usize,
}

/// Consumer of [`TraceEvent`]s. Must not influence the sort.
pub trait TraceSink {
    fn emit(&mut self, event: &TraceEvent);
}

/// Discards every event (headless callers).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl TraceSink for NoopSink {
    fn emit(&mut self, _event: &TraceEvent) {}
}

impl<F> TraceSink for F
where
    F: FnMut(&TraceEvent),
{
    fn emit(&mut self, event: &TraceEvent) {
        self(event);
    }
}

/// Collects a full trace for later inspection.
#[derive(Debug, Default, Clone)]
pub struct TraceLog {
    events: Vec<TraceEvent>,
}

impl TraceLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Number of `Swapped` events recorded.
    pub fn swap_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, TraceEvent::Swapped { .. }))
            .count()
    }

    /// Tail values fixed by each pass that swapped, in order.
    pub fn tail_values(&self) -> Vec<i32> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TraceEvent::PassEnded {
                    moved_to_end_value, ..
                } => Some(*moved_to_end_value),
                _ => None,
            })
            .collect()
    }
}

impl TraceSink for TraceLog {
    fn emit(&mut self, event: &TraceEvent) {
        self.events.push(event.clone());
    }
}
