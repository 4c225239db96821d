//! Dual-precision quadratic map attractor.
//!
//! `kernel` is the map itself; `divergence` and `chaos_edge` drive it.

pub mod chaos_edge;
pub mod divergence;
pub mod kernel;
pub mod seed;

pub use chaos_edge::{evaluate_chaos_edge, score_chaos_edge, ChaosEdgeReport};
pub use divergence::{
    evaluate_divergence_f32_vs_f64, track_divergence, track_divergence_from, DivergenceRun,
    StopReason,
};
pub use kernel::{advance, Lane, Precision, State, Trajectory, DIM};
pub use seed::{seeded_initial_state, INITIAL_STATE};
