//! Simulation state
//!
//! Everything a tick reads or writes lives here: the live body set, the
//! arena, the run seed and the id counter.

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::body::Body;
use crate::error::{Result, SimError};

/// Simulation phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    /// Ticks advance the bodies
    Running,
    /// Termination signal received; ticks are ignored
    Stopped,
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Monotonic body id source
///
/// Owned by whoever creates bodies and passed down explicitly.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IdCounter {
    next: u32,
}

impl IdCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counter whose first id is `next`
    pub fn starting_at(next: u32) -> Self {
        Self { next }
    }

    /// Hand out the next id
    pub fn next_id(&mut self) -> Result<u32> {
        let id = self.next;
        self.next = id.checked_add(1).ok_or(SimError::IdsExhausted)?;
        Ok(id)
    }

    /// Id the next call will return
    pub fn peek(&self) -> u32 {
        self.next
    }
}

/// Complete simulation state (deterministic, serializable)
///
/// Serialize-only: bodies are built through validated constructors.
#[derive(Debug, Clone, Serialize)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state used for placement
    pub rng_state: RngState,
    pub arena: Arena,
    /// Nominal tick rate
    pub fps: u32,
    /// Collision sweeps per tick
    pub collision_passes: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: SimPhase,
    /// Live bodies in insertion order
    pub bodies: Vec<Body>,
    /// Id source for new bodies
    ids: IdCounter,
}

impl SimState {
    /// Create an empty running state
    pub fn new(seed: u64, arena: Arena, fps: u32, collision_passes: u32) -> Self {
        Self {
            seed,
            rng_state: RngState::new(seed),
            arena,
            fps,
            collision_passes,
            time_ticks: 0,
            phase: SimPhase::Running,
            bodies: Vec::new(),
            ids: IdCounter::new(),
        }
    }

    /// Mutable access to the id counter (for placement)
    pub fn ids_mut(&mut self) -> &mut IdCounter {
        &mut self.ids
    }

    /// Add an explicitly specified body to the live set
    pub fn spawn_body(
        &mut self,
        radius: u32,
        pos: DVec2,
        speed: f64,
        heading: f64,
    ) -> Result<u32> {
        let body = Body::new(self.ids.peek(), radius, pos, speed, heading, &self.arena)?;
        let id = self.ids.next_id()?;
        self.bodies.push(body);
        Ok(id)
    }

    pub fn is_running(&self) -> bool {
        self.phase == SimPhase::Running
    }

    pub fn body(&self, id: u32) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id() == id)
    }
}
