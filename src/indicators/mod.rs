pub mod error;
pub mod parser;
pub mod registry;
pub mod analyzer;

pub mod momentum;
pub mod trend;
pub mod volatility;
pub mod structure;

pub use error::{IndicatorError, ValidationError};
pub use parser::*;
pub use registry::*;
pub use analyzer::*;
