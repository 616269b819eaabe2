use thiserror::Error;

/// Errors raised by the game core
#[derive(Error, Debug)]
pub enum GameError {
    /// No cell carries the head marker `-snake_size`; the board and the
    /// recorded snake size have drifted apart.
    #[error("could not find snake head (expected a cell equal to -{snake_size})")]
    HeadNotFound { snake_size: u32 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read config file {path}: {source}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
