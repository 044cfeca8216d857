//! Hobby servo on a 50 Hz PWM channel.
//!
//! Angle maps linearly onto the pulse width between the calibrated
//! minimum and maximum, and the pulse is written as a fraction of the
//! PWM period. Writes outside the mechanical limits are clamped, the
//! same way the Arduino servo library treats `write()`.
//!
//! The serial positioner wants rejection instead of clamping; it checks
//! input with [`validate_angle`] first.

use embedded_hal::pwm::SetDutyCycle;
use log::debug;

use crate::config::SystemConfig;
use crate::error::{ActuatorError, ServoError};

/// Full sweep the pulse calibration refers to.
const FULL_SWEEP_DEGREES: u32 = 180;

/// Mechanical limits and pulse calibration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServoLimits {
    pub min_angle: u8,
    pub max_angle: u8,
    pub min_pulse_us: u16,
    pub max_pulse_us: u16,
    pub period_us: u16,
}

impl ServoLimits {
    pub fn from_config(config: &SystemConfig) -> Self {
        Self {
            min_angle: config.servo_min_angle,
            max_angle: config.servo_max_angle,
            min_pulse_us: config.servo_min_pulse_us,
            max_pulse_us: config.servo_max_pulse_us,
            period_us: config.servo_period_us,
        }
    }

    pub fn clamp(&self, angle: i32) -> u8 {
        angle.clamp(self.min_angle as i32, self.max_angle as i32) as u8
    }

    /// Pulse width for `angle` (already clamped).
    pub fn pulse_width_us(&self, angle: u8) -> u16 {
        let span = (self.max_pulse_us - self.min_pulse_us) as u32;
        let offset = span * angle as u32 / FULL_SWEEP_DEGREES;
        self.min_pulse_us + offset as u16
    }
}

impl Default for ServoLimits {
    fn default() -> Self {
        Self::from_config(&SystemConfig::default())
    }
}

/// Check a raw requested angle against the limits without clamping.
pub fn validate_angle(raw: i32, limits: &ServoLimits) -> Result<u8, ServoError> {
    if raw < limits.min_angle as i32 || raw > limits.max_angle as i32 {
        return Err(ServoError::AngleOutOfRange {
            angle: raw,
            min: limits.min_angle,
            max: limits.max_angle,
        });
    }
    Ok(raw as u8)
}

pub struct ServoDriver<P> {
    pwm: P,
    limits: ServoLimits,
    angle: u8,
}

impl<P: SetDutyCycle> ServoDriver<P> {
    /// Attach to the PWM channel and move to `initial` (clamped).
    pub fn attach(pwm: P, limits: ServoLimits, initial: u8) -> Result<Self, ActuatorError> {
        let mut servo = Self {
            pwm,
            limits,
            angle: limits.clamp(initial as i32),
        };
        servo.write(initial as i32)?;
        Ok(servo)
    }

    /// Move to `angle`, clamped to the limits. Returns the angle applied.
    pub fn write(&mut self, angle: i32) -> Result<u8, ActuatorError> {
        let angle = self.limits.clamp(angle);
        let pulse = self.limits.pulse_width_us(angle);
        self.pwm
            .set_duty_cycle_fraction(pulse, self.limits.period_us)
            .map_err(|_| ActuatorError::PwmWriteFailed)?;
        debug!("servo {}\u{00b0} -> {}us pulse", angle, pulse);
        self.angle = angle;
        Ok(angle)
    }

    pub fn angle(&self) -> u8 {
        self.angle
    }

    pub fn limits(&self) -> &ServoLimits {
        &self.limits
    }

    pub fn release(self) -> P {
        self.pwm
    }
}
