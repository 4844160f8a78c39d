//! Fatal startup errors
//!
//! Nothing in the per-tick simulation can fail; everything here is raised
//! while loading settings or resolving sprites, before the first tick.

/// Startup/configuration errors
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// Meteor sprite set resolved to nothing
    #[error("no meteor sprites loaded")]
    NoMeteorSprites,

    /// A required sprite is not known to the asset provider
    #[error("missing sprite: {0}")]
    MissingSprite(String),

    /// Settings failed validation
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
