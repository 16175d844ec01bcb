// src/genres/mod.rs

// High-level "genre" orchestrations that compose several systems.
// Each genre is feature-gated so downstream games enable only what they use.

#[cfg(feature = "genre-idle")]
pub mod idle;

#[cfg(feature = "genre-idle")]
pub use idle::*;
