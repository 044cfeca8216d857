//! Application service, the hexagonal core.
//!
//! [`AppService`] owns all menu state: current mode, LED state, servo
//! angle and the demo array. All I/O
//! flows through port traits injected at call sites, making the entire
//! service testable with mock adapters.
//!
//! ```text
//!  AppCommand ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │       AppService        │
//! ActuatorPort ◀──│  Mode · IR · Servo · Sort│
//!    ClockPort ──▶└────────────────────────┘
//! ```

use log::{debug, info, warn};
use rand::rngs::StdRng;

use crate::config::SystemConfig;
use crate::diagnostics::{BOOT_STEPS, BootAction, StatusReport};
use crate::drivers::ir::{IrButton, IrKeymap};
use crate::drivers::servo::{ServoLimits, validate_angle};
use crate::error::{Result, ServoError};
use crate::sorting::{self, TraceEvent, TraceSink};

use super::commands::AppCommand;
use super::events::AppEvent;
use super::mode::Mode;
use super::ports::{ActuatorPort, ClockPort, EventSink};

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct AppService {
    config: SystemConfig,
    keymap: IrKeymap,
    limits: ServoLimits,
    mode: Mode,
    led_on: bool,
    servo_angle: u8,
    /// Demo array, owned here and lent to the sorting core per call.
    array: Vec<i32>,
    rng: StdRng,
    commands_handled: u64,
}

impl AppService {
    /// Construct the service from configuration and an entropy seed.
    ///
    /// Does **not** touch hardware; call [`start`](Self::start) next.
    pub fn new(config: SystemConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            keymap: IrKeymap::from_config(&config),
            limits: ServoLimits::from_config(&config),
            mode: Mode::default(),
            led_on: false,
            servo_angle: config.servo_initial_angle,
            array: vec![0; config.array_size],
            rng: sorting::seeded_rng(seed),
            commands_handled: 0,
            config,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Run the boot sequence, park the actuators and show the menu.
    pub fn start(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        for step in &BOOT_STEPS {
            match step.action {
                BootAction::Servo => hw.write_servo(self.servo_angle),
                BootAction::Led => hw.set_led(false),
                BootAction::SerialConsole | BootAction::IrReceiver | BootAction::SystemStart => {}
            }
            sink.emit(&AppEvent::boot_step(step));
        }
        self.led_on = false;

        sink.emit(&AppEvent::Started {
            mode: self.mode,
            servo_angle: self.servo_angle,
        });
        info!(
            "AppService started in {:?}, servo at {}\u{00b0}",
            self.mode, self.servo_angle
        );
        sink.emit(&AppEvent::MenuShown { current: self.mode });
    }

    // ── Command handling ──────────────────────────────────────

    /// Process one input from the serial console or IR receiver.
    pub fn handle_command<S: EventSink>(
        &mut self,
        cmd: AppCommand,
        hw: &mut (impl ActuatorPort + ClockPort),
        sink: &mut S,
    ) -> Result<()> {
        self.commands_handled += 1;
        match cmd {
            AppCommand::SerialKey(key) => self.select_mode(key, &*hw, sink),
            AppCommand::IrCode(code) => self.dispatch_ir(code, hw, sink),
            AppCommand::SetAngle(angle) => self.position_servo(angle, hw, sink),
            AppCommand::FillArray => {
                sorting::fill(&mut self.array, self.config.fill_range, &mut self.rng)?;
                info!("Array filled with {} random values", self.array.len());
                sink.emit(&AppEvent::ArrayFilled {
                    values: self.array.clone(),
                });
            }
            AppCommand::SortArray => self.sort_array(sink)?,
            AppCommand::ShowStatus => sink.emit(&AppEvent::ServiceStatus(self.status(&*hw))),
            AppCommand::ShowMenu => sink.emit(&AppEvent::MenuShown { current: self.mode }),
        }
        Ok(())
    }

    fn select_mode(&mut self, key: char, clock: &impl ClockPort, sink: &mut impl EventSink) {
        let Some(mode) = Mode::from_key(key) else {
            warn!("Unknown mode key {:?}", key);
            sink.emit(&AppEvent::UnknownModeKey { key });
            return;
        };

        let from = self.mode;
        self.mode = mode;
        info!("Mode: {}", mode);
        sink.emit(&AppEvent::ModeChanged { from, to: mode });

        if mode == Mode::Service {
            sink.emit(&AppEvent::ServiceStatus(self.status(clock)));
        }
    }

    fn dispatch_ir(
        &mut self,
        code: u32,
        hw: &mut (impl ActuatorPort + ClockPort),
        sink: &mut impl EventSink,
    ) {
        let button = self.keymap.decode(code);
        sink.emit(&AppEvent::IrCodeReceived { code, button });

        match self.mode {
            Mode::Monitor => {}
            Mode::Led => self.control_led(button, hw, sink),
            Mode::Servo => self.control_servo(button, hw, sink),
            Mode::Service => sink.emit(&AppEvent::ServiceStatus(self.status(&*hw))),
        }
    }

    fn control_led(
        &mut self,
        button: IrButton,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) {
        let on = match button {
            IrButton::Star => true,
            IrButton::Hash => false,
            other => {
                debug!("LED mode ignores {:?}", other);
                return;
            }
        };
        hw.set_led(on);
        self.led_on = on;
        sink.emit(&AppEvent::LedSwitched { on });
    }

    fn control_servo(
        &mut self,
        button: IrButton,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) {
        let step = self.config.servo_step_degrees as i32;
        let requested = match button {
            IrButton::Star => self.servo_angle as i32 - step,
            IrButton::Hash => self.servo_angle as i32 + step,
            other => {
                debug!("Servo mode ignores {:?}", other);
                return;
            }
        };
        let angle = self.limits.clamp(requested);
        hw.write_servo(angle);
        self.servo_angle = angle;
        sink.emit(&AppEvent::ServoMoved { angle, requested });
    }

    /// Serial positioner: absolute angle, rejected (not clamped) when
    /// outside the limits.
    fn position_servo(
        &mut self,
        requested: i32,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) {
        match validate_angle(requested, &self.limits) {
            Ok(angle) => {
                hw.write_servo(angle);
                self.servo_angle = angle;
                sink.emit(&AppEvent::ServoMoved { angle, requested });
            }
            Err(ServoError::AngleOutOfRange { angle, min, max }) => {
                warn!("Servo angle {} outside {}-{}", angle, min, max);
                sink.emit(&AppEvent::AngleRejected { angle, min, max });
            }
        }
    }

    fn sort_array<S: EventSink>(&mut self, sink: &mut S) -> Result<()> {
        let summary = {
            let mut forward = ForwardTrace { sink: &mut *sink };
            sorting::sort(&mut self.array, &mut forward)?
        };
        info!(
            "Sort finished: {} passes, {} swaps{}",
            summary.total_passes,
            summary.swaps,
            if summary.early_exit { ", early exit" } else { "" }
        );
        sink.emit(&AppEvent::SortFinished {
            summary,
            values: self.array.clone(),
        });
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build the service-mode status snapshot.
    pub fn status(&self, clock: &impl ClockPort) -> StatusReport {
        StatusReport {
            mode: self.mode,
            led_on: self.led_on,
            servo_angle: self.servo_angle,
            uptime_secs: clock.uptime_secs(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn led_on(&self) -> bool {
        self.led_on
    }

    pub fn servo_angle(&self) -> u8 {
        self.servo_angle
    }

    /// Current contents of the demo array.
    pub fn array(&self) -> &[i32] {
        &self.array
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    /// Total commands processed since construction.
    pub fn commands_handled(&self) -> u64 {
        self.commands_handled
    }
}

// ───────────────────────────────────────────────────────────────
// Trace forwarding
// ───────────────────────────────────────────────────────────────

/// Re-emits sort trace events as [`AppEvent::SortTrace`].
struct ForwardTrace<'a, S: EventSink> {
    sink: &'a mut S,
}

impl<S: EventSink> TraceSink for ForwardTrace<'_, S> {
    fn emit(&mut self, event: &TraceEvent) {
        self.sink.emit(&AppEvent::SortTrace {
            step: event.clone(),
        });
    }
}
