//! Levenberg-Marquardt algorithm implementation.
//!
//! This module provides the damped least-squares driver used to fit the 4PL
//! model. Its configuration is public; the driver itself is crate-internal
//! because the model family is fixed.

pub(crate) mod algorithm;
pub mod config;
pub(crate) mod step;

// Re-export key types
pub(crate) use algorithm::LevenbergMarquardt;
pub use config::LmConfig;
