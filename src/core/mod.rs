//! Core module tree: the attractor numerics and the sweep driver.

#[macro_use]
pub mod debug; // gated debug logging (QMA_DEBUG=1) provides debug_log! macro
pub mod attractor;
pub mod error;
pub mod sweep;
