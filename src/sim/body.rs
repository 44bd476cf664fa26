//! Circular bodies
//!
//! A body moves in a straight line at constant speed along its heading and
//! reflects off the arena walls. Speed and heading only change through wall
//! reflection and the collision engine.

use std::f64::consts::{PI, TAU};

use glam::DVec2;
use rand::Rng;
use serde::Serialize;

use super::arena::Arena;
use crate::consts::R_MIN;
use crate::error::{Result, SimError};
use crate::{distance, polar_to_cartesian};

/// Which walls a body bounced off during one move
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHit {
    /// Left or right wall
    pub horizontal: bool,
    /// Top or bottom wall
    pub vertical: bool,
}

impl WallHit {
    pub fn any(&self) -> bool {
        self.horizontal || self.vertical
    }
}

/// A circular body
///
/// Serialize-only; every body comes from [`Body::new`] or [`Body::random`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Body {
    id: u32,
    radius: u32,
    /// Packed RGBA, a stable per-body key for presentation
    color: u32,
    pub pos: DVec2,
    /// Scalar speed in length units per tick (never negative)
    pub speed: f64,
    /// Direction of travel in radians; not wrapped after reflections
    pub heading: f64,
}

impl Body {
    /// Construct a body with explicit parameters
    ///
    /// Out-of-range radius, heading or speed is rejected, never clamped.
    pub fn new(
        id: u32,
        radius: u32,
        pos: DVec2,
        speed: f64,
        heading: f64,
        arena: &Arena,
    ) -> Result<Self> {
        if !arena.radius_range().contains(&radius) {
            return Err(SimError::InvalidRadius {
                radius,
                min: R_MIN,
                max: arena.r_max(),
            });
        }
        if !(0.0..=TAU).contains(&heading) {
            return Err(SimError::InvalidHeading(heading));
        }
        if !speed.is_finite() || speed < 0.0 {
            return Err(SimError::InvalidSpeed(speed));
        }
        Ok(Self {
            id,
            radius,
            color: 0xffff_ffff,
            pos,
            speed,
            heading,
        })
    }

    /// Draw a random body whose whole disc lies inside the arena
    pub fn random<R: Rng + ?Sized>(id: u32, arena: &Arena, v_max: f64, rng: &mut R) -> Self {
        let radius = rng.random_range(arena.radius_range());
        let color = rng.random::<u32>();
        let speed = rng.random::<f64>() * v_max;
        let heading = rng.random::<f64>() * TAU;
        let x = rng.random_range(radius..=arena.width - radius);
        let y = rng.random_range(radius..=arena.height - radius);

        Self {
            id,
            radius,
            color,
            pos: DVec2::new(x as f64, y as f64),
            speed,
            heading,
        }
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    #[inline]
    pub fn color(&self) -> u32 {
        self.color
    }

    /// Velocity vector `(v·cos θ, v·sin θ)`
    #[inline]
    pub fn velocity(&self) -> DVec2 {
        polar_to_cartesian(self.speed, self.heading)
    }

    /// Pseudo-mass: radius cubed
    #[inline]
    pub fn mass(&self) -> f64 {
        (self.radius as f64).powi(3)
    }

    pub fn momentum(&self) -> DVec2 {
        self.velocity() * self.mass()
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass() * self.speed * self.speed
    }

    /// Advance one tick, reflecting off any wall the body is heading into
    ///
    /// A reflected axis keeps its previous coordinate for this tick.
    pub fn move_step(&mut self, arena: &Arena) -> WallHit {
        let r = self.radius as f64;
        let width = arena.width as f64;
        let height = arena.height as f64;
        let mut hit = WallHit::default();

        let mut next = self.pos + self.velocity();

        if (next.x - r < 0.0 && self.heading.cos() < 0.0)
            || (next.x + r > width && self.heading.cos() > 0.0)
        {
            self.heading = PI - self.heading;
            next.x = self.pos.x;
            hit.horizontal = true;
        }
        if (next.y - r < 0.0 && self.heading.sin() < 0.0)
            || (next.y + r > height && self.heading.sin() > 0.0)
        {
            self.heading = -self.heading;
            next.y = self.pos.y;
            hit.vertical = true;
        }

        self.pos = next;
        hit
    }

    /// Center-based bounds check (radius ignored)
    #[inline]
    pub fn is_outside(&self, arena: &Arena) -> bool {
        !arena.contains(self.pos)
    }

    /// Overlap test used by placement; touching counts
    #[inline]
    pub fn is_collide(&self, other: &Body) -> bool {
        distance(self.pos, other.pos) <= (self.radius + other.radius) as f64
    }
}
