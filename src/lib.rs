//! Chaos Arena - elastic discs bouncing around a closed rectangle
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, placement, collisions, tick loop)
//! - `settings`: Arena and runner configuration
//! - `error`: Error taxonomy shared by construction, placement and config

pub mod error;
pub mod settings;
pub mod sim;

pub use error::{Result, SimError};
pub use settings::Settings;

use glam::DVec2;

/// Simulation constants
pub mod consts {
    /// Smallest allowed body radius
    pub const R_MIN: u32 = 2;
    /// Max speed is `fps / SPEED_DIVISOR` length units per tick
    pub const SPEED_DIVISOR: u32 = 30;
    /// Coefficient of restitution for body-body impulses (1.0 = perfectly elastic)
    pub const RESTITUTION: f64 = 1.0;

    /// Arena defaults
    pub const DEFAULT_WIDTH: u32 = 1_000;
    pub const DEFAULT_HEIGHT: u32 = 1_000;
    pub const DEFAULT_FPS: u32 = 60;
    pub const DEFAULT_BODY_COUNT: usize = 10;

    /// Consecutive rejected candidates tolerated before placement gives up
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 100_000;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(v: DVec2) -> (f64, f64) {
    (v.length(), v.y.atan2(v.x))
}
