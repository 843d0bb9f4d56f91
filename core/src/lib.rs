//! Synthetic cost-aware fraud case generator.
//!
//! Draws per-case features from label-conditioned distributions on a
//! single seeded stream and writes them as a flat CSV table.

pub mod case;
pub mod config;
pub mod error;
pub mod generator;
pub mod rng;
pub mod summary;
pub mod types;
pub mod writer;
