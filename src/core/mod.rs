//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod rng;

// re-export frequently-used items for convenience
pub use config::{Config, ConfigBuilder};
pub use constants::{BRAILLE_HORIZONTAL_RESOLUTION, BRAILLE_VERTICAL_RESOLUTION};
pub use data::{ParseErrorKind, ParseInputError};
pub use error::{ChartError, ConfigError, GraphError};
