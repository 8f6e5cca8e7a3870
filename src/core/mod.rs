//! Core application primitives (runtimes, orchestrators)

pub mod runtime;

pub use runtime::*;
