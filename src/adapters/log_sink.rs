//! Log-based sink adapters.
//!
//! [`LogEventSink`] implements [`EventSink`] by writing application events
//! through the `log` facade, which the host routes to the console.
//! [`LogTraceSink`] prints a sort trace for students to follow:
//! pass headers, each swap with 1-based positions followed by the whole
//! array, and the value that bubbled to the end.

use core::fmt::Write;

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::diagnostics::{format_uptime, progress_bar};
use crate::sorting::{TraceEvent, TraceSink};

/// Join values with `sep`.
pub fn join_values(values: &[i32], sep: &str) -> String {
    let mut out = String::new();
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        let _ = write!(out, "{v}");
    }
    out
}

// ───────────────────────────────────────────────────────────────
// Sort trace
// ───────────────────────────────────────────────────────────────

/// Prints every [`TraceEvent`] to the console log.
#[derive(Debug, Default)]
pub struct LogTraceSink {
    in_progress: bool,
}

impl LogTraceSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TraceSink for LogTraceSink {
    fn emit(&mut self, event: &TraceEvent) {
        if !self.in_progress {
            info!("=== Bubble sort started ===");
            self.in_progress = true;
        }
        match event {
            TraceEvent::PassStarted { pass_index } => {
                info!("Pass #{}", pass_index + 1);
            }
            TraceEvent::Swapped {
                left_index,
                right_index,
                buffer_snapshot,
            } => {
                info!("  Swapped elements {} and {}:", left_index + 1, right_index + 1);
                info!("  {}", join_values(buffer_snapshot, "\t"));
            }
            TraceEvent::PassEnded {
                moved_to_end_value, ..
            } => {
                info!("Bubble surfaced: {}", moved_to_end_value);
            }
            TraceEvent::NoSwapsDetected { .. } => {
                info!("  No swaps: array already sorted.");
            }
            TraceEvent::SortCompleted { total_passes } => {
                info!("=== Sort complete after {} passes ===", total_passes);
                self.in_progress = false;
            }
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Application events
// ───────────────────────────────────────────────────────────────

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink {
    trace: LogTraceSink,
}

impl LogEventSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::BootStep { label, percent } => {
                info!(" -> {}... [OK]", label);
                info!("{}", progress_bar(*percent));
            }
            AppEvent::Started { mode, servo_angle } => {
                info!("START | mode={:?} | servo={}\u{00b0}", mode, servo_angle);
            }
            AppEvent::MenuShown { current } => {
                info!("=============== MAIN MENU ===============");
                info!(" [0] IR button monitor");
                info!(" [1] LED control");
                info!(" [2] Servo control");
                info!(" [3] Service mode (diagnostics)");
                info!(" Current: [{}] {}", current.key(), current);
                info!("=========================================");
            }
            AppEvent::ModeChanged { to, .. } => {
                info!("[ACTION] Mode: {}.", to);
            }
            AppEvent::UnknownModeKey { key } => {
                warn!("[ERROR] Unknown mode {:?}. Try again.", key);
            }
            AppEvent::IrCodeReceived { code, .. } => {
                info!("[IR] Received code: 0x{:X}", code);
            }
            AppEvent::LedSwitched { on } => {
                info!("[ACTION] LED {}.", if *on { "ON (*)" } else { "OFF (#)" });
            }
            AppEvent::ServoMoved { angle, .. } => {
                info!("[ACTION] Servo at {}\u{00b0}.", angle);
            }
            AppEvent::AngleRejected { angle, min, max } => {
                warn!(
                    "[ERROR] Value {} is outside {}-{}\u{00b0}.",
                    angle, min, max
                );
            }
            AppEvent::ServiceStatus(report) => {
                info!("=============== SERVICE MODE ===============");
                info!(" Mode         : {}", report.mode);
                info!(" LED          : {}", if report.led_on { "ON" } else { "OFF" });
                info!(" Servo        : attached, angle = {}\u{00b0}", report.servo_angle);
                info!(" Uptime       : {}", format_uptime(report.uptime_secs));
                info!("============================================");
            }
            AppEvent::ArrayFilled { values } => {
                info!("Array filled with random numbers.");
                info!("Array contents: {}", join_values(values, ", "));
            }
            AppEvent::SortTrace { step } => self.trace.emit(step),
            AppEvent::SortFinished { summary, values } => {
                info!(
                    "SORT | passes={} swaps={} early_exit={} | {}",
                    summary.total_passes,
                    summary.swaps,
                    summary.early_exit,
                    join_values(values, ", ")
                );
            }
        }
    }
}
