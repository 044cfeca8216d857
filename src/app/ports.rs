//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (actuators, clock, event sinks) implement these traits.
//! The [`AppService`](super::service::AppService) consumes them via
//! generics, so the domain core never touches hardware directly.

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command actuators.
pub trait ActuatorPort {
    /// Switch the indicator LED.
    fn set_led(&mut self, on: bool);

    /// Move the servo to `angle` degrees. The domain only passes angles
    /// inside the configured limits.
    fn write_servo(&mut self, angle: u8);
}

// ───────────────────────────────────────────────────────────────
// Clock port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Monotonic time since boot.
pub trait ClockPort {
    fn uptime_secs(&self) -> u64;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → console / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log, JSON
/// stream, test recorder).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
