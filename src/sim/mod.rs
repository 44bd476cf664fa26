//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick = one frame)
//! - Seeded RNG only
//! - Stable iteration order (insertion order of the live set)
//! - No rendering or platform dependencies

pub mod arena;
pub mod body;
pub mod collision;
pub mod energy;
pub mod placement;
pub mod state;
pub mod tick;

pub use arena::Arena;
pub use body::{Body, WallHit};
pub use collision::{
    CollisionStats, Contact, PairOutcome, detect_contact, resolve_collisions, resolve_pair,
};
pub use energy::{ConservationDrift, ConservationSnapshot, total_kinetic_energy, total_momentum};
pub use placement::place_bodies;
pub use state::{IdCounter, RngState, SimPhase, SimState};
pub use tick::{StepReport, TickInput, initialize, step, tick};
