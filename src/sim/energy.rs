//! Conservation monitoring
//!
//! Tracks total kinetic energy and momentum of the live set so numerical
//! drift can be spotted. Walls reflect without loss, so kinetic energy is the
//! quantity that should stay flat over a whole run; momentum only holds
//! across body-body collisions.

use glam::DVec2;

use super::body::Body;

/// Total linear momentum: sum of m_i * v_i
pub fn total_momentum(bodies: &[Body]) -> DVec2 {
    bodies.iter().map(Body::momentum).sum()
}

/// Total kinetic energy: sum of ½ m_i v_i²
pub fn total_kinetic_energy(bodies: &[Body]) -> f64 {
    bodies.iter().map(Body::kinetic_energy).sum()
}

/// Baseline quantities captured at some tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConservationSnapshot {
    pub energy: f64,
    pub momentum: DVec2,
}

impl ConservationSnapshot {
    pub fn capture(bodies: &[Body]) -> Self {
        Self {
            energy: total_kinetic_energy(bodies),
            momentum: total_momentum(bodies),
        }
    }

    /// Compare the current set against this baseline
    pub fn drift(&self, bodies: &[Body]) -> ConservationDrift {
        let energy = total_kinetic_energy(bodies);

        // Relative energy error (avoid division by zero)
        let energy_error = if self.energy.abs() > 1e-12 {
            (energy - self.energy).abs() / self.energy.abs()
        } else {
            (energy - self.energy).abs()
        };

        ConservationDrift {
            energy_error,
            momentum_error: total_momentum(bodies) - self.momentum,
        }
    }
}

/// Deviation from a [`ConservationSnapshot`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConservationDrift {
    /// Relative energy error: |E - E₀| / |E₀|
    pub energy_error: f64,
    /// Absolute momentum error: p - p₀
    pub momentum_error: DVec2,
}

impl ConservationDrift {
    pub fn energy_violated(&self, tol: f64) -> bool {
        self.energy_error > tol
    }
}
