//! Application core: pure domain logic, zero I/O.
//!
//! This module contains the rules of the Robocode menu: mode selection,
//! IR dispatch to the LED and servo handlers, the serial servo positioner,
//! and the sorting demo harness. All interaction with hardware happens
//! through **port traits** defined in [`ports`], keeping this layer fully
//! testable without real peripherals.

pub mod commands;
pub mod console;
pub mod events;
pub mod mode;
pub mod ports;
pub mod service;
