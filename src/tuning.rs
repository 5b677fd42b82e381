//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives in [`Tuning`]. The
//! defaults are the shipped balance; a JSON file may override any subset.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::TuningError;

/// Per-level difficulty scalars
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Difficulty {
    /// Missile travel per frame
    pub missile_velocity: f32,
    /// Turrets placed per level
    pub num_turrets: u32,
    /// Frames between missile launches
    pub time_between_missiles: u32,
    /// Aim jitter radius (smaller is more accurate)
    pub missile_accuracy: f32,
    /// Fuel cells to collect per level
    pub num_fuel_cells: u32,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            missile_velocity: 1.0,
            num_turrets: 10,
            time_between_missiles: 90,
            missile_accuracy: 30.0,
            num_fuel_cells: 4,
        }
    }
}

/// Change applied to [`Difficulty`] at every level transition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyDeltas {
    pub missile_velocity: f32,
    pub num_turrets: u32,
    /// Subtracted from the launch interval
    pub time_between_missiles: u32,
    /// Subtracted from the aim jitter radius
    pub missile_accuracy: f32,
    pub num_fuel_cells: u32,
    /// Launch interval never drops below this
    pub min_time_between_missiles: u32,
    /// Aim jitter radius never drops below this
    pub min_missile_accuracy: f32,
}

impl Default for DifficultyDeltas {
    fn default() -> Self {
        Self {
            missile_velocity: 0.25,
            num_turrets: 5,
            time_between_missiles: 10,
            missile_accuracy: 5.0,
            num_fuel_cells: 1,
            min_time_between_missiles: 15,
            min_missile_accuracy: 0.0,
        }
    }
}

impl Difficulty {
    /// Escalate to the next level
    pub fn advance(&mut self, deltas: &DifficultyDeltas) {
        self.missile_velocity += deltas.missile_velocity;
        self.num_turrets += deltas.num_turrets;
        self.num_fuel_cells += deltas.num_fuel_cells;
        self.time_between_missiles = self
            .time_between_missiles
            .saturating_sub(deltas.time_between_missiles)
            .max(deltas.min_time_between_missiles)
            .max(1);
        self.missile_accuracy =
            (self.missile_accuracy - deltas.missile_accuracy).max(deltas.min_missile_accuracy);
    }
}

/// Complete gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Ship ===
    /// Distance travelled per frame
    pub ship_velocity: f32,
    /// Angular increment per frame for each turn axis (radians)
    pub turn_speed: f32,
    pub ship_spawn: Vec3,

    // === Collision tolerance (bounding radius multipliers) ===
    pub ship_radius_scale: f32,
    pub turret_radius_scale: f32,
    pub missile_radius_scale: f32,
    pub fuel_cell_radius_scale: f32,

    /// Height of fuel cells above the planet surface
    pub fuel_cell_hover: f32,

    // === Missiles ===
    pub missile_pool_size: usize,
    /// Frames a missile flies before expiring
    pub missile_max_age: u32,
    /// Distance ahead of the ship that turrets aim at
    pub aim_lookahead: f32,

    /// Frames an explosion stays alive
    pub explosion_duration: u32,

    // === Camera ===
    /// Blend factor toward the ship orientation each frame
    pub camera_lag: f32,
    pub camera_offset: Vec3,
    pub camera_up: Vec3,
    /// Vertical field of view (radians)
    pub camera_fov: f32,
    pub camera_near: f32,
    pub camera_far: f32,

    // === Game flow ===
    pub starting_health: i32,
    /// Frames spent on the won/lost screen before the next round
    pub menu_dwell_frames: u32,

    // === Difficulty ===
    pub initial: Difficulty,
    pub deltas: DifficultyDeltas,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ship_velocity: 0.6,
            turn_speed: 0.02,
            ship_spawn: Vec3::new(0.0, 160.0, 0.0),

            ship_radius_scale: 0.5,
            turret_radius_scale: 0.8,
            missile_radius_scale: 0.7,
            fuel_cell_radius_scale: 1.0,

            fuel_cell_hover: 4.0,

            missile_pool_size: 40,
            missile_max_age: 400,
            aim_lookahead: 60.0,

            explosion_duration: 90,

            camera_lag: 0.1,
            camera_offset: Vec3::new(0.0, 6.0, 25.0),
            camera_up: Vec3::Y,
            camera_fov: std::f32::consts::FRAC_PI_4,
            camera_near: 0.5,
            camera_far: 5000.0,

            starting_health: 3,
            menu_dwell_frames: 150,

            initial: Difficulty::default(),
            deltas: DifficultyDeltas::default(),
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON. Missing fields keep defaults.
    pub fn from_json_str(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json_str(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Load tuning if a path is given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::load(path).unwrap_or_else(|e| {
                log::warn!("{e}; using default tuning");
                Self::default()
            }),
            None => {
                log::info!("Using default tuning");
                Self::default()
            }
        }
    }

    pub fn to_json_pretty(&self) -> String {
        // Plain data with string keys; serialization cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Check every value against its valid range
    pub fn validate(&self) -> Result<(), TuningError> {
        positive("ship_velocity", self.ship_velocity)?;
        positive("turn_speed", self.turn_speed)?;
        positive("ship_radius_scale", self.ship_radius_scale)?;
        positive("turret_radius_scale", self.turret_radius_scale)?;
        positive("missile_radius_scale", self.missile_radius_scale)?;
        positive("fuel_cell_radius_scale", self.fuel_cell_radius_scale)?;
        positive("initial.missile_velocity", self.initial.missile_velocity)?;
        positive("camera_fov", self.camera_fov)?;
        positive("camera_near", self.camera_near)?;

        if self.fuel_cell_hover < 0.0 {
            return Err(TuningError::invalid("fuel_cell_hover", "must not be negative"));
        }
        if self.missile_pool_size == 0 {
            return Err(TuningError::invalid("missile_pool_size", "must be at least 1"));
        }
        if self.missile_max_age == 0 {
            return Err(TuningError::invalid("missile_max_age", "must be at least 1"));
        }
        if self.explosion_duration == 0 {
            return Err(TuningError::invalid("explosion_duration", "must be at least 1"));
        }
        if !(self.camera_lag > 0.0 && self.camera_lag <= 1.0) {
            return Err(TuningError::invalid(
                "camera_lag",
                format!("must be in (0, 1], got {}", self.camera_lag),
            ));
        }
        if self.camera_far <= self.camera_near {
            return Err(TuningError::invalid("camera_far", "must exceed camera_near"));
        }
        if self.starting_health <= 0 {
            return Err(TuningError::invalid("starting_health", "must be positive"));
        }
        if self.menu_dwell_frames == 0 {
            return Err(TuningError::invalid("menu_dwell_frames", "must be at least 1"));
        }
        if self.initial.time_between_missiles == 0 {
            return Err(TuningError::invalid(
                "initial.time_between_missiles",
                "must be at least 1",
            ));
        }
        if self.initial.missile_accuracy < 0.0 {
            return Err(TuningError::invalid(
                "initial.missile_accuracy",
                "must not be negative",
            ));
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(TuningError::invalid(field, format!("must be positive, got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json_str(r#"{ "ship_velocity": 1.5, "initial": { "num_turrets": 3 } }"#)
            .unwrap();
        assert_eq!(tuning.ship_velocity, 1.5);
        assert_eq!(tuning.initial.num_turrets, 3);
        assert_eq!(tuning.initial.num_fuel_cells, Difficulty::default().num_fuel_cells);
        assert_eq!(tuning.menu_dwell_frames, 150);
    }

    #[test]
    fn test_json_round_trip() {
        let tuning = Tuning::default();
        let parsed = Tuning::from_json_str(&tuning.to_json_pretty()).unwrap();
        assert_eq!(parsed, tuning);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = Tuning::from_json_str(r#"{ "missile_pool_size": 0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "missile_pool_size", .. }));

        let err = Tuning::from_json_str(r#"{ "camera_lag": 1.5 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "camera_lag", .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let tuning = Tuning::load_or_default(Some(Path::new("/nonexistent/tuning.json")));
        assert_eq!(tuning, Tuning::default());
    }

    #[test]
    fn test_difficulty_advance() {
        let deltas = DifficultyDeltas::default();
        let mut d = Difficulty::default();
        let before = d;
        d.advance(&deltas);
        assert!(d.num_turrets > before.num_turrets);
        assert!(d.missile_velocity > before.missile_velocity);
        assert!(d.missile_accuracy < before.missile_accuracy);
        assert!(d.time_between_missiles < before.time_between_missiles);
        assert_eq!(d.num_fuel_cells, before.num_fuel_cells + 1);
    }

    #[test]
    fn test_difficulty_floors() {
        let deltas = DifficultyDeltas::default();
        let mut d = Difficulty::default();
        for _ in 0..50 {
            d.advance(&deltas);
        }
        assert_eq!(d.time_between_missiles, deltas.min_time_between_missiles);
        assert_eq!(d.missile_accuracy, deltas.min_missile_accuracy);
    }
}
