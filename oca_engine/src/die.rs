//! The die used by the `roll` command.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DieError {
    #[error("die bounds are inverted (min {min} > max {max})")]
    Inverted { min: u32, max: u32 },
    #[error("die faces start at 1 (min was {0})")]
    ZeroFace(u32),
}

/// Bounded random number source that remembers its last roll.
#[derive(Debug, Clone)]
pub struct Die {
    min: u32,
    max: u32,
    last: Option<u32>,
    rng: StdRng,
}
impl Default for Die {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
            last: None,
            rng: StdRng::from_os_rng(),
        }
    }
}
impl Die {
    pub const DEFAULT_MIN: u32 = 1;
    pub const DEFAULT_MAX: u32 = 6;

    /// Create a die rolling values in `min..=max`, seeded from the OS.
    ///
    /// # Errors
    /// - if `min` is 0 or greater than `max`
    pub fn new(min: u32, max: u32) -> Result<Self, DieError> {
        Self::with_rng(min, max, StdRng::from_os_rng())
    }

    /// Same as [`Die::new`] but reproducible.
    ///
    /// # Errors
    /// - if `min` is 0 or greater than `max`
    pub fn seeded(min: u32, max: u32, seed: u64) -> Result<Self, DieError> {
        Self::with_rng(min, max, StdRng::seed_from_u64(seed))
    }

    fn with_rng(min: u32, max: u32, rng: StdRng) -> Result<Self, DieError> {
        if min == 0 {
            return Err(DieError::ZeroFace(min));
        }
        if min > max {
            return Err(DieError::Inverted { min, max });
        }
        Ok(Self {
            min,
            max,
            last: None,
            rng,
        })
    }

    /// Roll once, remember the result and return it.
    pub fn roll(&mut self) -> u32 {
        let value = self.rng.random_range(self.min..=self.max);
        self.last = Some(value);
        value
    }

    /// Result of the most recent roll, `None` before the first one.
    pub fn last(&self) -> Option<u32> {
        self.last
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }
}
