//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them: print to the serial console, stream
//! as JSON, or record them in a test.

use serde::Serialize;

use crate::diagnostics::{BootStep, StatusReport};
use crate::drivers::ir::IrButton;
use crate::sorting::{SortSummary, TraceEvent};

use super::mode::Mode;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AppEvent {
    /// One start-up step finished.
    BootStep { label: &'static str, percent: u8 },

    /// The service has started (carries initial mode and servo angle).
    Started { mode: Mode, servo_angle: u8 },

    /// The main menu was requested.
    MenuShown { current: Mode },

    /// The operating mode changed.
    ModeChanged { from: Mode, to: Mode },

    /// A serial key that does not name a mode.
    UnknownModeKey { key: char },

    /// An IR code arrived (reported in every mode).
    IrCodeReceived {
        code: u32,
        #[serde(skip)]
        button: IrButton,
    },

    /// The LED was switched.
    LedSwitched { on: bool },

    /// The servo moved. `requested` is the unclamped target.
    ServoMoved { angle: u8, requested: i32 },

    /// The serial positioner refused an angle.
    AngleRejected { angle: i32, min: u8, max: u8 },

    /// Service-mode status snapshot.
    ServiceStatus(StatusReport),

    /// The demo array was refilled.
    ArrayFilled { values: Vec<i32> },

    /// One step of a running sort.
    SortTrace { step: TraceEvent },

    /// The sort finished.
    SortFinished { summary: SortSummary, values: Vec<i32> },
}

impl AppEvent {
    pub fn boot_step(step: &BootStep) -> Self {
        Self::BootStep {
            label: step.label,
            percent: step.percent,
        }
    }
}
