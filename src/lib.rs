//! Robocode demo library.
//!
//! The sorting demo core ([`sorting`]) plus the IR-menu host around it:
//! application service behind port traits ([`app`]), `embedded-hal`
//! drivers ([`drivers`]), console adapters ([`adapters`]) and serial input
//! parsing ([`serial`]). Everything here runs on the host; a board build
//! swaps the simulated pins for real HAL types.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod diagnostics;
pub mod drivers;
pub mod error;
pub mod serial;
pub mod sorting;

pub use error::{Error, FillError, Result, SortError};
