//! Chaos Arena headless runner
//!
//! Loads settings, places the bodies and ticks until the tick limit is hit.
//! The final live set is printed to stdout as JSON.

use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use chaos_arena::Settings;
use chaos_arena::sim::{ConservationSnapshot, SimState, TickInput, initialize, tick};

/// Energy drift above this is worth a warning
const ENERGY_TOLERANCE: f64 = 1e-6;

fn load_settings() -> chaos_arena::Result<Settings> {
    match std::env::args().nth(1) {
        Some(path) => Settings::load(path),
        None => {
            log::info!("No settings file given, using defaults");
            Ok(Settings::default())
        }
    }
}

fn run(settings: &Settings) -> chaos_arena::Result<SimState> {
    let mut state = initialize(settings)?;
    let baseline = ConservationSnapshot::capture(&state.bodies);
    let frame = Duration::from_secs_f64(1.0 / settings.fps as f64);

    let mut input = TickInput::default();
    loop {
        let started = Instant::now();
        input.stop = settings
            .max_ticks
            .is_some_and(|limit| state.time_ticks >= limit);
        if tick(&mut state, &input).is_none() {
            break;
        }

        if settings.report_every > 0 && state.time_ticks % settings.report_every == 0 {
            let drift = baseline.drift(&state.bodies);
            log::info!(
                "tick {}: {} bodies, energy drift {:.3e}, momentum drift {:.3}",
                state.time_ticks,
                state.bodies.len(),
                drift.energy_error,
                drift.momentum_error.length()
            );
            if drift.energy_violated(ENERGY_TOLERANCE) {
                log::warn!("Energy drift above {:e}", ENERGY_TOLERANCE);
            }
        }

        if settings.realtime {
            if let Some(rest) = frame.checked_sub(started.elapsed()) {
                thread::sleep(rest);
            }
        }
    }

    Ok(state)
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Chaos Arena starting...");

    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Failed to load settings: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let state = match run(&settings) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Simulation failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&state.bodies) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("Failed to serialize bodies: {}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
