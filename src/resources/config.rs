use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::resources::EnvironmentConfig;
use crate::utils::{
    MAX_SUBSTEPS, MAX_VISIBILITY, MAX_WIND_SPEED, MIN_VISIBILITY, TICK_SECONDS, TRAIL_CAPACITY,
    TRAIL_MIN_SPACING,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid simulator configuration: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    /// Height of the scene above the instrument panel.
    pub viewport_height: u32,
    pub panel_height: u32,
    /// Map pixels per world unit.
    pub map_scale: f32,
    /// Optional PNG used for the top-down aircraft.
    pub aircraft_sprite: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            viewport_height: 640,
            panel_height: 288,
            map_scale: 1.0,
            aircraft_sprite: None,
        }
    }
}

impl RenderConfig {
    pub fn total_height(&self) -> u32 {
        self.viewport_height + self.panel_height
    }
}

/// Top-level simulator settings, loadable from YAML.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub tick_seconds: f64,
    pub max_substeps: u32,
    pub trail_spacing: f64,
    /// `None` keeps every trail point.
    pub trail_capacity: Option<usize>,
    pub seed: u64,
    pub environment: EnvironmentConfig,
    pub render: RenderConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_seconds: TICK_SECONDS,
            max_substeps: MAX_SUBSTEPS,
            trail_spacing: TRAIL_MIN_SPACING,
            trail_capacity: Some(TRAIL_CAPACITY),
            seed: 42,
            environment: EnvironmentConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

impl SimConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: SimConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        config.environment.clamp();
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("Loading simulator config from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tick_seconds.is_finite() && self.tick_seconds > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "tick_seconds must be positive, got {}",
                self.tick_seconds
            )));
        }
        if self.max_substeps == 0 {
            return Err(ConfigError::ValidationError(
                "max_substeps must be at least 1".to_string(),
            ));
        }
        if !(self.trail_spacing.is_finite() && self.trail_spacing >= 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "trail_spacing must be non-negative, got {}",
                self.trail_spacing
            )));
        }
        let env = &self.environment;
        if !(0.0..=MAX_WIND_SPEED).contains(&env.wind_speed) {
            return Err(ConfigError::ValidationError(format!(
                "wind_speed must be within 0-{} kt, got {}",
                MAX_WIND_SPEED, env.wind_speed
            )));
        }
        if !(MIN_VISIBILITY..=MAX_VISIBILITY).contains(&env.visibility) {
            return Err(ConfigError::ValidationError(format!(
                "visibility must be within {}-{} nm, got {}",
                MIN_VISIBILITY, MAX_VISIBILITY, env.visibility
            )));
        }
        if !env.wind_direction.is_finite() {
            return Err(ConfigError::ValidationError(
                "wind_direction must be finite".to_string(),
            ));
        }
        if self.render.width == 0 || self.render.viewport_height == 0 {
            return Err(ConfigError::ValidationError(
                "render surface must be non-empty".to_string(),
            ));
        }
        if !(self.render.map_scale.is_finite() && self.render.map_scale > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "map_scale must be positive, got {}",
                self.render.map_scale
            )));
        }
        Ok(())
    }
}
