//! Domain layer: numeral systems and the conversion pipeline
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config
//! loading).

pub mod convert;
pub mod entities;
pub mod error;
pub mod system;

pub use convert::{format_value, normalize, run_conversion, run_request, to_base, validate, Algorithm};
pub use entities::{ConversionRequest, ConversionResult};
pub use error::ConversionError;
pub use system::NumeralSystem;
