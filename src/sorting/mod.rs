//! Sorting demo core: random array builder and traced bubble sort.
//!
//! Pure logic, zero I/O. The host owns the buffer; [`fill`] overwrites it,
//! [`sort`] reorders it in place and reports progress through a
//! [`TraceSink`].

pub mod bubble;
pub mod fill;
pub mod trace;

pub use bubble::{is_sorted, sort};
pub use fill::{Range, fill, seeded_rng};
pub use trace::{NoopSink, SortSummary, TraceEvent, TraceLog, TraceSink};
