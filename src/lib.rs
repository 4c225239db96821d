//! Dual-precision quadratic map attractor.
//!
//! The two entry points consumed by drivers (the `qma` binary, the Python
//! module built with `--features python`) are re-exported here:
//! [`evaluate_divergence_f32_vs_f64`] and [`evaluate_chaos_edge`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;

#[cfg(feature = "python")]
mod python;

pub use crate::core::attractor::{evaluate_chaos_edge, evaluate_divergence_f32_vs_f64};
