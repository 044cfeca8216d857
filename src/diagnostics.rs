//! Boot progress and service-mode status.
//!
//! The boot sequence is a fixed list of steps, each advancing a 25-cell
//! progress bar. The status report is the snapshot printed in service
//! mode: LED state, servo angle and uptime.

use core::fmt::Write;

use heapless::String;
use serde::{Deserialize, Serialize};

use crate::app::mode::Mode;

/// Number of cells in the progress bar.
pub const PROGRESS_CELLS: usize = 25;

/// Peripheral brought up by a boot step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootAction {
    SerialConsole,
    IrReceiver,
    /// Attach the servo at its initial angle.
    Servo,
    /// Drive the LED pin low.
    Led,
    SystemStart,
}

/// One step of the start-up sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootStep {
    pub action: BootAction,
    pub label: &'static str,
    /// Cumulative progress after this step (0–100).
    pub percent: u8,
}

/// Start-up steps in execution order.
pub const BOOT_STEPS: [BootStep; 5] = [
    BootStep { action: BootAction::SerialConsole, label: "serial console", percent: 20 },
    BootStep { action: BootAction::IrReceiver, label: "IR receiver", percent: 40 },
    BootStep { action: BootAction::Servo, label: "servo", percent: 70 },
    BootStep { action: BootAction::Led, label: "LED pin", percent: 90 },
    BootStep { action: BootAction::SystemStart, label: "system start", percent: 100 },
];

/// Render `[#####--------------------] 20%`.
pub fn progress_bar(percent: u8) -> String<40> {
    let percent = percent.min(100);
    let filled = percent as usize * PROGRESS_CELLS / 100;

    let mut out = String::new();
    let _ = out.push('[');
    for cell in 0..PROGRESS_CELLS {
        let _ = out.push(if cell < filled { '#' } else { '-' });
    }
    let _ = write!(out, "] {}%", percent);
    out
}

/// `HH:MM:SS` from seconds since boot. Hours keep counting past 99.
pub fn format_uptime(secs: u64) -> String<16> {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    let mut out = String::new();
    let _ = write!(out, "{:02}:{:02}:{:02}", hours, minutes, seconds);
    out
}

/// Service-mode snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    pub mode: Mode,
    pub led_on: bool,
    pub servo_angle: u8,
    pub uptime_secs: u64,
}
