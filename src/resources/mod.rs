mod config;
mod environment;
mod menu;

pub use config::{ConfigError, RenderConfig, SimConfig};
pub use environment::{EnvironmentConfig, EnvironmentPatch, TimeOfDay};
pub use menu::{LessonMenu, TrainingModule};
