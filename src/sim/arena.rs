//! Arena geometry
//!
//! The arena is the closed rectangle `[0, width] × [0, height]` with the
//! origin in the top-left corner.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::R_MIN;
use crate::error::{Result, SimError};

/// A closed rectangular arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arena {
    pub width: u32,
    pub height: u32,
}

impl Arena {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Largest allowed body radius: a quarter of the shorter side
    #[inline]
    pub fn r_max(&self) -> u32 {
        self.width.min(self.height) / 4
    }

    /// Inclusive radius range for bodies in this arena
    #[inline]
    pub fn radius_range(&self) -> std::ops::RangeInclusive<u32> {
        R_MIN..=self.r_max()
    }

    /// Reject arenas too small to hold a body of radius `R_MIN`
    pub fn validate(&self) -> Result<()> {
        if self.r_max() < R_MIN {
            return Err(SimError::InvalidConfig(format!(
                "arena {}x{} too small, both sides must be at least {}",
                self.width,
                self.height,
                4 * R_MIN
            )));
        }
        Ok(())
    }

    /// Whether a point lies inside the rectangle (edges included)
    #[inline]
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= 0.0 && p.x <= self.width as f64 && p.y >= 0.0 && p.y <= self.height as f64
    }
}
