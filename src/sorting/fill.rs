//! Random array builder.
//!
//! Overwrites every slot of a caller-owned buffer with values drawn
//! uniformly from a closed range. The entropy source is whatever
//! [`rand::Rng`] the host hands in; nothing here touches hardware.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::FillError;

/// Closed interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub min: i32,
    pub max: i32,
}

impl Range {
    /// Build a range, rejecting `min > max`.
    pub fn new(min: i32, max: i32) -> Result<Self, FillError> {
        let range = Self { min, max };
        range.check()?;
        Ok(range)
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn check(&self) -> Result<(), FillError> {
        if self.min > self.max {
            return Err(FillError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Fill `buffer` with uniform values from `range` (both ends inclusive).
///
/// Arguments are checked before the first write, so on error the buffer
/// is untouched.
pub fn fill<R: Rng + ?Sized>(
    buffer: &mut [i32],
    range: Range,
    rng: &mut R,
) -> Result<(), FillError> {
    if buffer.is_empty() {
        return Err(FillError::InvalidSize);
    }
    range.check()?;

    for slot in buffer.iter_mut() {
        *slot = rng.gen_range(range.min..=range.max);
    }
    Ok(())
}

/// Reproducible generator for hosts that supply a numeric seed.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
