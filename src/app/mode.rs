//! Operating modes of the IR menu.

use core::fmt;

use serde::{Deserialize, Serialize};

/// What an incoming IR code does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Mode {
    /// Only report received codes.
    #[default]
    Monitor = 0,
    /// `*` switches the LED on, `#` off.
    Led = 1,
    /// `*` turns the servo down one step, `#` up.
    Servo = 2,
    /// Every code prints the status report.
    Service = 3,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Monitor, Mode::Led, Mode::Servo, Mode::Service];

    /// Menu key (`'0'`–`'3'`) to mode.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '0' => Some(Self::Monitor),
            '1' => Some(Self::Led),
            '2' => Some(Self::Servo),
            '3' => Some(Self::Service),
            _ => None,
        }
    }

    pub fn key(self) -> char {
        (b'0' + self as u8) as char
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Monitor => "IR button monitor",
            Self::Led => "LED control",
            Self::Servo => "servo control",
            Self::Service => "service mode (diagnostics)",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
