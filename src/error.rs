//! Unified error types for the Robocode demos.
//!
//! A single `Error` enum that every subsystem converts into, so the host
//! loop handles failures uniformly. Every variant is `Copy`: errors are
//! plain precondition reports and never own buffers or strings.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The random array builder rejected its arguments.
    Fill(FillError),
    /// The traced sort rejected its buffer.
    Sort(SortError),
    /// A requested servo position was rejected.
    Servo(ServoError),
    /// An actuator write failed.
    Actuator(ActuatorError),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fill(e) => write!(f, "fill: {e}"),
            Self::Sort(e) => write!(f, "sort: {e}"),
            Self::Servo(e) => write!(f, "servo: {e}"),
            Self::Actuator(e) => write!(f, "actuator: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Fill errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillError {
    /// The buffer has no slots.
    InvalidSize,
    /// `min > max`.
    InvalidRange { min: i32, max: i32 },
}

impl fmt::Display for FillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize => write!(f, "buffer size must be positive"),
            Self::InvalidRange { min, max } => {
                write!(f, "invalid range: min {min} is greater than max {max}")
            }
        }
    }
}

impl std::error::Error for FillError {}

impl From<FillError> for Error {
    fn from(e: FillError) -> Self {
        Self::Fill(e)
    }
}

// ---------------------------------------------------------------------------
// Sort errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// The buffer has no slots.
    InvalidSize,
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize => write!(f, "buffer size must be positive"),
        }
    }
}

impl std::error::Error for SortError {}

impl From<SortError> for Error {
    fn from(e: SortError) -> Self {
        Self::Sort(e)
    }
}

// ---------------------------------------------------------------------------
// Servo errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServoError {
    /// The requested angle lies outside the configured mechanical limits.
    AngleOutOfRange { angle: i32, min: u8, max: u8 },
}

impl fmt::Display for ServoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AngleOutOfRange { angle, min, max } => {
                write!(f, "angle {angle} is outside {min}-{max}\u{00b0}")
            }
        }
    }
}

impl std::error::Error for ServoError {}

impl From<ServoError> for Error {
    fn from(e: ServoError) -> Self {
        Self::Servo(e)
    }
}

// ---------------------------------------------------------------------------
// Actuator errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorError {
    /// GPIO set failed.
    GpioWriteFailed,
    /// PWM duty-cycle write failed.
    PwmWriteFailed,
}

impl fmt::Display for ActuatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GpioWriteFailed => write!(f, "GPIO write failed"),
            Self::PwmWriteFailed => write!(f, "PWM write failed"),
        }
    }
}

impl std::error::Error for ActuatorError {}

impl From<ActuatorError> for Error {
    fn from(e: ActuatorError) -> Self {
        Self::Actuator(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
