use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GradientError {
    #[error("invalid hex color: {0:?}")]
    InvalidFormat(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RenameError {
    #[error("unknown month name: {0:?}")]
    UnknownMonth(String),

    #[error("failed to rename {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum HuestepError {
    #[error(transparent)]
    Gradient(#[from] GradientError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Rename(#[from] RenameError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
