//! Simulation settings
//!
//! Every field has a default from `consts`, so partial JSON is accepted.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Tunables for both simulations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Carrom ===
    /// Number of bodies placed at startup
    pub body_count: usize,
    /// Body radius lower bound (px)
    pub min_radius: f32,
    /// Random extra radius on top of `min_radius` (px)
    pub radius_spread: f32,
    /// Mass shared by every body
    pub body_mass: f32,
    /// Displacement multiplier in (0, 1]
    pub friction: f32,
    /// Post-collision velocity scale in (0, 1]
    pub energy_loss: f32,
    /// Drag distance divided by this gives impulse magnitude
    pub impulse_divisor: f32,
    /// Arena radius = canvas height / this
    pub arena_radius_divisor: f32,

    // === Game of Life ===
    pub life_width: u32,
    pub life_height: u32,
    /// Cell edge length (px)
    pub cell_size: u32,
    /// Generation rate, independent of frame rate
    pub generations_per_second: f64,

    /// Placement seed; `None` means the host picks one (usually the clock)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            body_count: BODY_COUNT,
            min_radius: BODY_MIN_RADIUS,
            radius_spread: BODY_RADIUS_SPREAD,
            body_mass: BODY_MASS,
            friction: BODY_FRICTION,
            energy_loss: ENERGY_LOSS,
            impulse_divisor: IMPULSE_DIVISOR,
            arena_radius_divisor: ARENA_RADIUS_DIVISOR,

            life_width: LIFE_WIDTH,
            life_height: LIFE_HEIGHT,
            cell_size: CELL_SIZE,
            generations_per_second: GENERATIONS_PER_SECOND,

            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings, falling back to defaults (with a warning) on any error
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings");
                settings
            }
            Err(e) => {
                log::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Check the ranges the simulations rely on
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.min_radius > 0.0) || self.radius_spread < 0.0 {
            return Err(SettingsError::Invalid(format!(
                "body radius must be positive (min_radius={}, radius_spread={})",
                self.min_radius, self.radius_spread
            )));
        }
        if !(self.body_mass > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "body_mass must be positive, got {}",
                self.body_mass
            )));
        }
        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return Err(SettingsError::Invalid(format!(
                "friction must be in (0, 1], got {}",
                self.friction
            )));
        }
        if !(self.energy_loss > 0.0 && self.energy_loss <= 1.0) {
            return Err(SettingsError::Invalid(format!(
                "energy_loss must be in (0, 1], got {}",
                self.energy_loss
            )));
        }
        if !(self.impulse_divisor > 0.0) || !(self.arena_radius_divisor > 0.0) {
            return Err(SettingsError::Invalid(
                "impulse_divisor and arena_radius_divisor must be positive".to_string(),
            ));
        }
        if self.body_count > MAX_BODY_COUNT {
            return Err(SettingsError::Invalid(format!(
                "body_count must be at most {}, got {}",
                MAX_BODY_COUNT, self.body_count
            )));
        }
        if self.cell_size == 0 {
            return Err(SettingsError::Invalid("cell_size must be non-zero".to_string()));
        }
        let cells = self.life_cols().checked_mul(self.life_rows());
        if !cells.is_some_and(|n| n <= MAX_LIFE_CELLS) {
            return Err(SettingsError::Invalid(format!(
                "life grid {}x{} exceeds {} cells",
                self.life_cols(),
                self.life_rows(),
                MAX_LIFE_CELLS
            )));
        }
        if !(self.generations_per_second > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "generations_per_second must be positive, got {}",
                self.generations_per_second
            )));
        }
        Ok(())
    }

    /// Grid columns for the Game of Life canvas
    pub fn life_cols(&self) -> usize {
        (self.life_width / self.cell_size) as usize
    }

    /// Grid rows for the Game of Life canvas
    pub fn life_rows(&self) -> usize {
        (self.life_height / self.cell_size) as usize
    }

    /// Milliseconds between generations
    pub fn generation_interval_ms(&self) -> f64 {
        1000.0 / self.generations_per_second
    }

    /// Load settings from the canvas `data-settings` attribute (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load(canvas: &web_sys::Element) -> Self {
        match canvas.get_attribute("data-settings") {
            Some(json) => Self::from_json_or_default(&json),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from `CARROM_LIFE_SETTINGS` (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::env::var("CARROM_LIFE_SETTINGS") {
            Ok(json) => Self::from_json_or_default(&json),
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}
