//! Signal evaluation: rule votes, strength scoring and the pass engine.

pub mod rules;
pub mod scoring;
pub mod engine;

pub use rules::*;
pub use scoring::*;
pub use engine::*;
