//! Hardware adapter: bridges peripherals to domain port traits.
//!
//! Owns the LED and servo drivers and a clock, exposing them through
//! [`ActuatorPort`] and [`ClockPort`]. This is the only module in the
//! system that touches peripherals. Host runs plug in the simulated
//! pins from [`drivers::sim`](crate::drivers::sim).

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;
use log::warn;

use crate::adapters::time::HostClock;
use crate::app::ports::{ActuatorPort, ClockPort};
use crate::config::SystemConfig;
use crate::drivers::led::LedDriver;
use crate::drivers::servo::{ServoDriver, ServoLimits};
use crate::drivers::sim::{SimPin, SimPwm};
use crate::error::ActuatorError;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<P, W> {
    led: LedDriver<P>,
    servo: ServoDriver<W>,
    clock: HostClock,
}

impl<P: OutputPin, W: SetDutyCycle> HardwareAdapter<P, W> {
    pub fn new(led: LedDriver<P>, servo: ServoDriver<W>, clock: HostClock) -> Self {
        Self { led, servo, clock }
    }

    pub fn led(&self) -> &LedDriver<P> {
        &self.led
    }

    pub fn servo(&self) -> &ServoDriver<W> {
        &self.servo
    }
}

impl HardwareAdapter<SimPin, SimPwm> {
    /// Adapter over in-memory peripherals, calibrated from `config`.
    pub fn simulated(config: &SystemConfig) -> Result<Self, ActuatorError> {
        let led = LedDriver::new(SimPin::new())?;
        let servo = ServoDriver::attach(
            SimPwm::new(),
            ServoLimits::from_config(config),
            config.servo_initial_angle,
        )?;
        Ok(Self::new(led, servo, HostClock::new()))
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<P: OutputPin, W: SetDutyCycle> ActuatorPort for HardwareAdapter<P, W> {
    fn set_led(&mut self, on: bool) {
        if let Err(e) = self.led.set(on) {
            warn!("LED write failed: {}", e);
        }
    }

    fn write_servo(&mut self, angle: u8) {
        if let Err(e) = self.servo.write(angle as i32) {
            warn!("Servo write failed: {}", e);
        }
    }
}

// ── ClockPort implementation ──────────────────────────────────

impl<P, W> ClockPort for HardwareAdapter<P, W> {
    fn uptime_secs(&self) -> u64 {
        self.clock.uptime_secs()
    }
}
