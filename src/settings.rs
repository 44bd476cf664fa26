//! Arena and runner settings
//!
//! Loaded from a JSON file; any field left out falls back to its default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, SimError};
use crate::sim::Arena;

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    /// Arena width in length units
    pub width: u32,
    /// Arena height in length units
    pub height: u32,

    // === Timing ===
    /// Nominal tick rate, also caps body speed at `fps / 30`
    pub fps: u32,

    // === Population ===
    /// Number of bodies placed at start
    pub body_count: usize,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Consecutive rejected candidates before placement reports infeasible density
    pub max_placement_attempts: u32,

    // === Collisions ===
    /// Sweeps over all pairs per tick (1 = single pass)
    pub collision_passes: u32,

    // === Runner ===
    /// Stop after this many ticks (None = run until stopped)
    pub max_ticks: Option<u64>,
    /// Pace ticks at `fps` wall-clock rate
    pub realtime: bool,
    /// Ticks between conservation reports (0 = never)
    pub report_every: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,

            fps: DEFAULT_FPS,

            body_count: DEFAULT_BODY_COUNT,
            seed: 0,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,

            collision_passes: 1,

            max_ticks: Some(600),
            realtime: false,
            report_every: DEFAULT_FPS as u64,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Reject settings the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        self.arena().validate()?;
        if self.fps == 0 {
            return Err(SimError::InvalidConfig("fps must be positive".into()));
        }
        if self.collision_passes == 0 {
            return Err(SimError::InvalidConfig(
                "collision_passes must be at least 1".into(),
            ));
        }
        if self.max_placement_attempts == 0 {
            return Err(SimError::InvalidConfig(
                "max_placement_attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Arena rectangle described by these settings
    pub fn arena(&self) -> Arena {
        Arena::new(self.width, self.height)
    }

    /// Speed cap per tick (integer division, so fps < 30 freezes every body)
    pub fn v_max(&self) -> f64 {
        (self.fps / SPEED_DIVISOR) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.v_max(), 2.0);
        assert_eq!(settings.arena().r_max(), 250);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "width": 400, "body_count": 3 }"#).unwrap();
        assert_eq!(settings.width, 400);
        assert_eq!(settings.height, DEFAULT_HEIGHT);
        assert_eq!(settings.body_count, 3);
        assert_eq!(settings.collision_passes, 1);
    }

    #[test]
    fn test_validate_rejects_tiny_arena() {
        let settings = Settings {
            width: 7,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SimError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_fps_and_passes() {
        let settings = Settings {
            fps: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        let settings = Settings {
            collision_passes: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_save_load_file() {
        let path = std::env::temp_dir().join(format!(
            "chaos_arena_settings_{}.json",
            std::process::id()
        ));
        let settings = Settings {
            seed: 42,
            body_count: 4,
            realtime: true,
            ..Default::default()
        };
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = Settings::load("/nonexistent/chaos_arena/settings.json");
        assert!(matches!(result, Err(SimError::Io(_))));
    }
}
