//! System configuration parameters
//!
//! All tunable parameters for the Robocode demos.
//! Defaults match the stock robot kit; the host binary can override them
//! from a JSON file.

use serde::{Deserialize, Serialize};

use crate::drivers::ir::{BTN_HASH, BTN_STAR};
use crate::error::Error;
use crate::sorting::Range;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    // --- Sorting demo ---
    /// Number of slots in the demo array
    pub array_size: usize,
    /// Closed range for random fill
    pub fill_range: Range,

    // --- Servo ---
    /// Angle written at start-up (degrees)
    pub servo_initial_angle: u8,
    /// Degrees moved per IR press in servo mode
    pub servo_step_degrees: u8,
    /// Lower mechanical limit (degrees)
    pub servo_min_angle: u8,
    /// Upper mechanical limit (degrees)
    pub servo_max_angle: u8,
    /// Pulse width at 0° (microseconds)
    pub servo_min_pulse_us: u16,
    /// Pulse width at 180° (microseconds)
    pub servo_max_pulse_us: u16,
    /// PWM period (microseconds, 50 Hz = 20000)
    pub servo_period_us: u16,

    // --- IR remote ---
    /// Raw NEC code of the `*` button
    pub ir_star_code: u32,
    /// Raw NEC code of the `#` button
    pub ir_hash_code: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Sorting
            array_size: 10,
            fill_range: Range { min: 0, max: 99 },

            // Servo
            servo_initial_angle: 90,
            servo_step_degrees: 3,
            servo_min_angle: 0,
            servo_max_angle: 180,
            servo_min_pulse_us: 544,
            servo_max_pulse_us: 2400,
            servo_period_us: 20_000, // 50 Hz

            // IR
            ir_star_code: BTN_STAR,
            ir_hash_code: BTN_HASH,
        }
    }
}

impl SystemConfig {
    /// Reject values the demos cannot run with.
    pub fn validate(&self) -> Result<(), Error> {
        if self.array_size == 0 {
            return Err(Error::Config("array_size must be positive"));
        }
        if self.fill_range.min > self.fill_range.max {
            return Err(Error::Config("fill_range.min is greater than fill_range.max"));
        }
        if self.servo_min_angle > self.servo_max_angle {
            return Err(Error::Config("servo_min_angle is greater than servo_max_angle"));
        }
        if self.servo_max_angle > 180 {
            return Err(Error::Config("servo_max_angle exceeds 180"));
        }
        if !(self.servo_min_angle..=self.servo_max_angle).contains(&self.servo_initial_angle) {
            return Err(Error::Config("servo_initial_angle outside servo limits"));
        }
        if self.servo_step_degrees == 0 {
            return Err(Error::Config("servo_step_degrees must be positive"));
        }
        if self.servo_min_pulse_us >= self.servo_max_pulse_us {
            return Err(Error::Config("servo pulse calibration is inverted"));
        }
        if self.servo_max_pulse_us > self.servo_period_us {
            return Err(Error::Config("servo pulse longer than PWM period"));
        }
        if self.ir_star_code == self.ir_hash_code {
            return Err(Error::Config("IR button codes must differ"));
        }
        Ok(())
    }

    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config: Self =
            serde_json::from_str(json).map_err(|_| Error::Config("malformed JSON"))?;
        config.validate()?;
        Ok(config)
    }
}
