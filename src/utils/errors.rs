use thiserror::Error;

use crate::resources::ConfigError;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Asset error: {0}")]
    AssetError(String),

    #[error("Render error: {0}")]
    RenderError(String),
}
