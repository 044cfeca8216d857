//! Actuator drivers and peripheral helpers.

pub mod ir;
pub mod led;
pub mod servo;
pub mod sim;
