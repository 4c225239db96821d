//! Edge-of-chaos fitness for a coupling strength.
//!
//! The score multiplies two weights in `[0, 1]`:
//!
//! * survival: `exp(-(1 - s) / SURVIVAL_DECAY)`, where `s` is the fraction of
//!   `steps` the wide orbit stays inside the escape radius;
//! * activity: `1 - exp(-(a / (ACTIVITY_SCALE * R))^2)`, where `a` is how far
//!   the orbit keeps moving away from its own recent past over the second
//!   half of its life and `R` is the escape radius.
//!
//! An orbit that escapes at once has no survival, and one that locks onto a
//! fixed point or a short cycle has no activity, so the maximum sits on
//! bounded-but-aperiodic orbits. Both weights saturate, so a sweep over `k`
//! rises to a single plateau and falls off once orbits start escaping.

use serde::Serialize;

use super::kernel::{distance, norm, widen, State, Trajectory};
use super::seed::INITIAL_STATE;

/// Number of previous states an orbit point is compared against. Cycles of
/// this period or shorter register zero activity.
pub const RECURRENCE_DEPTH: usize = 8;

/// Lost fraction of the horizon that divides the survival weight by `e`.
pub const SURVIVAL_DECAY: f64 = 0.05;

/// Raw activity, as a fraction of the escape radius, at which the activity
/// weight reaches `1 - 1/e`.
pub const ACTIVITY_SCALE: f64 = 0.02;

const PREALLOCATE_CAP: usize = 1 << 16;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ChaosEdgeReport {
    pub k: f64,
    pub score: f64,
    /// Fraction of `steps` spent inside the escape radius.
    pub survival: f64,
    /// Mean recurrence-free displacement, before normalisation.
    pub activity: f64,
    /// Zero-based step index of the escaping application.
    pub escaped_at: Option<usize>,
}

/// Scalar chaos-edge score for coupling `k`.
pub fn evaluate_chaos_edge(k: f64, escape_radius: f64, steps: usize) -> f64 {
    score_chaos_edge(k, escape_radius, steps).score
}

pub fn score_chaos_edge(k: f64, escape_radius: f64, steps: usize) -> ChaosEdgeReport {
    if steps == 0 {
        return ChaosEdgeReport {
            k,
            score: 0.0,
            survival: 0.0,
            activity: 0.0,
            escaped_at: None,
        };
    }

    let initial = widen(&INITIAL_STATE);
    let mut visited: Vec<State<f64>> = Vec::with_capacity(steps.min(PREALLOCATE_CAP) + 1);
    visited.push(initial);

    let mut escaped_at = None;
    for (i, state) in Trajectory::new(initial, k).skip(1).take(steps).enumerate() {
        let r = norm(&state);
        if !(r.is_finite() && r <= escape_radius) {
            escaped_at = Some(i);
            break;
        }
        visited.push(state);
    }

    let survived = escaped_at.unwrap_or(steps);
    let survival = survived as f64 / steps as f64;
    let activity = recurrence_free_activity(&visited);
    let score = survival_weight(survival) * activity_weight(activity, escape_radius);

    ChaosEdgeReport {
        k,
        score: if score.is_finite() { score } else { 0.0 },
        survival,
        activity,
        escaped_at,
    }
}

fn survival_weight(survival: f64) -> f64 {
    (-(1.0 - survival) / SURVIVAL_DECAY).exp()
}

fn activity_weight(activity: f64, escape_radius: f64) -> f64 {
    if !(activity > 0.0 && escape_radius > 0.0) {
        return 0.0;
    }
    let x = activity / (ACTIVITY_SCALE * escape_radius);
    1.0 - (-(x * x)).exp()
}

/// Mean over the second half of `visited` of each state's distance to the
/// nearest of its `RECURRENCE_DEPTH` predecessors.
fn recurrence_free_activity(visited: &[State<f64>]) -> f64 {
    let start = (visited.len() / 2).max(RECURRENCE_DEPTH);
    if start >= visited.len() {
        return 0.0;
    }
    let total: f64 = (start..visited.len())
        .map(|t| {
            (1..=RECURRENCE_DEPTH)
                .map(|lag| distance(&visited[t], &visited[t - lag]))
                .fold(f64::INFINITY, f64::min)
        })
        .sum();
    total / (visited.len() - start) as f64
}
