//! Single indicator LED on a GPIO output.
//!
//! Generic over [`OutputPin`] so the same driver runs on a board HAL or
//! on a [`SimPin`](super::sim::SimPin) during host runs.

use embedded_hal::digital::OutputPin;

use crate::error::ActuatorError;

pub struct LedDriver<P> {
    pin: P,
    on: bool,
}

impl<P: OutputPin> LedDriver<P> {
    /// Take the pin and drive it low.
    pub fn new(mut pin: P) -> Result<Self, ActuatorError> {
        pin.set_low().map_err(|_| ActuatorError::GpioWriteFailed)?;
        Ok(Self { pin, on: false })
    }

    pub fn set(&mut self, on: bool) -> Result<(), ActuatorError> {
        let result = if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|_| ActuatorError::GpioWriteFailed)?;
        self.on = on;
        Ok(())
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn release(self) -> P {
        self.pin
    }
}
