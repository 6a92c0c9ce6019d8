pub mod errors;
pub mod types;

pub use errors::{ConfigError, InterchangeError, ParseFailure, SwatchError};
pub use types::{Color, ContrastMode, GradientType, Opacity};

pub type Result<T> = std::result::Result<T, SwatchError>;
