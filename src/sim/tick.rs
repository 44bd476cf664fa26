//! Fixed timestep simulation tick
//!
//! One tick moves every body, resolves collisions once over the whole set and
//! then drops bodies whose centers escaped the arena.

use super::arena::Arena;
use super::body::Body;
use super::collision::resolve_collisions;
use super::placement::place_bodies;
use super::state::{SimPhase, SimState};
use crate::error::Result;
use crate::settings::Settings;

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Termination signal, checked before the step runs
    pub stop: bool,
}

/// Summary of one step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Bodies that bounced off at least one wall
    pub wall_hits: u32,
    /// Overlapping pairs found by the collision engine
    pub contacts: u32,
    /// Pairs that received an impulse
    pub bounces: u32,
    /// Ids of bodies removed for leaving the arena
    pub culled: Vec<u32>,
}

/// Build the initial state: validate settings and place the bodies
pub fn initialize(settings: &Settings) -> Result<SimState> {
    settings.validate()?;

    let mut state = SimState::new(
        settings.seed,
        settings.arena(),
        settings.fps,
        settings.collision_passes,
    );
    let mut rng = state.rng_state.to_rng();
    let arena = state.arena;
    let bodies = place_bodies(
        settings.body_count,
        &arena,
        settings.v_max(),
        settings.max_placement_attempts,
        state.ids_mut(),
        &mut rng,
    )?;
    state.bodies = bodies;

    log::info!(
        "Placed {} bodies in {}x{} arena (seed {})",
        state.bodies.len(),
        arena.width,
        arena.height,
        state.seed
    );
    Ok(state)
}

/// Advance a live set by one tick: move, collide, cull
pub fn step(bodies: &mut Vec<Body>, arena: &Arena, collision_passes: u32) -> StepReport {
    let mut report = StepReport::default();

    for body in bodies.iter_mut() {
        if body.move_step(arena).any() {
            report.wall_hits += 1;
        }
    }

    let stats = resolve_collisions(bodies, collision_passes);
    report.contacts = stats.contacts;
    report.bounces = stats.bounces;

    bodies.retain(|body| {
        if body.is_outside(arena) {
            report.culled.push(body.id());
            false
        } else {
            true
        }
    });
    if !report.culled.is_empty() {
        log::warn!("Culled bodies outside the arena: {:?}", report.culled);
    }

    report
}

/// Advance the simulation state by one tick
///
/// Returns `None` once the simulation has stopped.
pub fn tick(state: &mut SimState, input: &TickInput) -> Option<StepReport> {
    if input.stop && state.phase == SimPhase::Running {
        log::info!("Stopping after {} ticks", state.time_ticks);
        state.phase = SimPhase::Stopped;
    }

    match state.phase {
        SimPhase::Stopped => None,
        SimPhase::Running => {
            state.time_ticks += 1;
            let report = step(&mut state.bodies, &state.arena, state.collision_passes);
            log::debug!(
                "tick {}: {} wall hits, {} contacts, {} bounces",
                state.time_ticks,
                report.wall_hits,
                report.contacts,
                report.bounces
            );
            Some(report)
        }
    }
}
