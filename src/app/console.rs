//! Console line interpretation.
//!
//! Turns one trimmed line typed on the serial console into an
//! [`AppCommand`] for the menu or the servo positioner, and builds the
//! array for a one-shot sort run.

use log::warn;

use crate::config::SystemConfig;
use crate::error::FillError;
use crate::serial::{parse_int, parse_ir_code};
use crate::sorting::{self, Range};

use super::commands::AppCommand;

/// What a console line asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleInput {
    Command(AppCommand),
    /// Leave the input loop.
    Quit,
    /// Blank or unreadable line.
    Ignored,
}

/// Menu console: `fill`, `sort`, `status`, `menu`, `angle <n>`,
/// `ir <code>`, `*`, `#`, `quit`/`exit`. Any other word sends its first
/// character as a mode key.
pub fn menu_input(line: &str, config: &SystemConfig) -> ConsoleInput {
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();
    let command = match word {
        "" => return ConsoleInput::Ignored,
        "quit" | "exit" => return ConsoleInput::Quit,
        "fill" => AppCommand::FillArray,
        "sort" => AppCommand::SortArray,
        "status" => AppCommand::ShowStatus,
        "menu" => AppCommand::ShowMenu,
        "angle" => match parse_int(rest) {
            Some(angle) => AppCommand::SetAngle(angle),
            None => {
                warn!("No angle in {:?}", line);
                return ConsoleInput::Ignored;
            }
        },
        "ir" | "*" | "#" => {
            let code = if word == "ir" { rest } else { word };
            match parse_ir_code(code, config.ir_star_code, config.ir_hash_code) {
                Some(code) => AppCommand::IrCode(code),
                None => {
                    warn!("Unreadable IR code {:?}", code);
                    return ConsoleInput::Ignored;
                }
            }
        }
        _ => match word.chars().next() {
            Some(key) => AppCommand::SerialKey(key),
            None => return ConsoleInput::Ignored,
        },
    };
    ConsoleInput::Command(command)
}

/// Servo positioner console: the first integer on the line is the target
/// angle. Range checks happen in the service.
pub fn servo_input(line: &str) -> ConsoleInput {
    match parse_int(line) {
        Some(angle) => ConsoleInput::Command(AppCommand::SetAngle(angle)),
        None if line.is_empty() => ConsoleInput::Ignored,
        None => {
            warn!("No number in {:?}", line);
            ConsoleInput::Ignored
        }
    }
}

/// Array source for a one-shot sort run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortRequest {
    /// Slot count; config default when `None`.
    pub size: Option<usize>,
    /// Lower fill bound; config default when `None`.
    pub min: Option<i32>,
    /// Upper fill bound; config default when `None`.
    pub max: Option<i32>,
    /// Explicit values. When non-empty no random fill happens.
    pub values: Vec<i32>,
}

impl SortRequest {
    /// The array to sort: the explicit values, or a seeded random fill.
    pub fn build_array(&self, config: &SystemConfig, seed: u64) -> Result<Vec<i32>, FillError> {
        if !self.values.is_empty() {
            return Ok(self.values.clone());
        }
        let range = Range {
            min: self.min.unwrap_or(config.fill_range.min),
            max: self.max.unwrap_or(config.fill_range.max),
        };
        let mut array = vec![0; self.size.unwrap_or(config.array_size)];
        sorting::fill(&mut array, range, &mut sorting::seeded_rng(seed))?;
        Ok(array)
    }
}
