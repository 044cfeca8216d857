//! IR remote keymap.
//!
//! The receiver hands the application a raw 32-bit NEC code per press.
//! Only two buttons carry meaning (`*` and `#`); everything else is
//! reported and ignored by the mode handlers.

use crate::config::SystemConfig;

/// Raw code of the `*` button on the stock remote.
pub const BTN_STAR: u32 = 0x00FF_A25D;
/// Raw code of the `#` button on the stock remote.
pub const BTN_HASH: u32 = 0x00FF_B04F;
/// Code the receiver reports while a button is held down.
pub const NEC_REPEAT: u32 = 0xFFFF_FFFF;

/// A decoded remote button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrButton {
    Star,
    Hash,
    /// Held-button repeat frame.
    Repeat,
    Other(u32),
}

/// Maps raw codes to buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IrKeymap {
    star: u32,
    hash: u32,
}

impl IrKeymap {
    pub fn new(star: u32, hash: u32) -> Self {
        Self { star, hash }
    }

    pub fn from_config(config: &SystemConfig) -> Self {
        Self::new(config.ir_star_code, config.ir_hash_code)
    }

    pub fn decode(&self, code: u32) -> IrButton {
        match code {
            c if c == self.star => IrButton::Star,
            c if c == self.hash => IrButton::Hash,
            NEC_REPEAT => IrButton::Repeat,
            other => IrButton::Other(other),
        }
    }
}

impl Default for IrKeymap {
    fn default() -> Self {
        Self::new(BTN_STAR, BTN_HASH)
    }
}
