//! JSON-lines sink adapter.
//!
//! Serialises each event as one JSON object per line on any
//! [`std::io::Write`]. Sinks cannot fail, so the first write error is
//! latched, later events are dropped, and [`JsonLines::finish`] reports it.

use std::io::Write;

use log::warn;
use serde::Serialize;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::sorting::{TraceEvent, TraceSink};

pub struct JsonLines<W: Write> {
    out: W,
    error: Option<serde_json::Error>,
    written: usize,
}

impl<W: Write> JsonLines<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            error: None,
            written: 0,
        }
    }

    /// Lines successfully written.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and hand back the writer, or the first error seen.
    pub fn finish(mut self) -> Result<W, serde_json::Error> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush().map_err(serde_json::Error::io)?;
        Ok(self.out)
    }

    fn write_line<T: Serialize + ?Sized>(&mut self, value: &T) {
        if self.error.is_some() {
            return;
        }
        let result = serde_json::to_writer(&mut self.out, value)
            .and_then(|()| self.out.write_all(b"\n").map_err(serde_json::Error::io));
        match result {
            Ok(()) => self.written += 1,
            Err(e) => {
                warn!("JSON sink write failed: {}", e);
                self.error = Some(e);
            }
        }
    }
}

impl<W: Write> TraceSink for JsonLines<W> {
    fn emit(&mut self, event: &TraceEvent) {
        self.write_line(event);
    }
}

impl<W: Write> EventSink for JsonLines<W> {
    fn emit(&mut self, event: &AppEvent) {
        self.write_line(event);
    }
}
