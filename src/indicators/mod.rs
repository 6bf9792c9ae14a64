//! Technical indicator engine.
//!
//! Every transform is a pure function of its input slice; nothing is cached
//! between calls, so bundles for different series can be computed from any
//! number of threads.

pub mod error;
pub mod parser;
pub mod series;
pub mod validation;

pub mod engine;
pub mod momentum;
pub mod trend;
pub mod volatility;

pub use engine::*;
pub use error::IndicatorError;
pub use parser::*;
pub use series::AlignedSeries;
pub use validation::*;
