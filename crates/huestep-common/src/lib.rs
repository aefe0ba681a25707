pub mod errors;
pub mod types;

pub use errors::{ConfigError, GradientError, HuestepError, RenameError};
pub use types::{Color, Magnitudes};

pub type Result<T> = std::result::Result<T, HuestepError>;
