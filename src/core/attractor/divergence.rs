//! Narrow-versus-wide divergence of two trajectories started from the same
//! point.
//!
//! Sample `i` is the distance, in `f64`, between the two states after `i`
//! applications of the map. Sample 0 is therefore exactly zero. A run stops
//! early when either orbit blows up or when both have settled onto the same
//! fixed point.

use serde::Serialize;

use super::kernel::{advance, distance, norm, widen, Lane, Precision, State};
use super::seed::INITIAL_STATE;

/// State norm beyond which an orbit counts as escaped to infinity.
pub const BLOW_UP_NORM: f64 = 1e3;

/// Displacement and gap below which a step counts as settled.
pub const CONVERGENCE_TOL: f64 = 1e-5;

/// Consecutive settled steps that end a run.
pub const CONVERGENCE_WINDOW: usize = 8;

// Upper bound on the up-front sample allocation; longer runs grow as needed.
const PREALLOCATE_CAP: usize = 1 << 16;

/// Why a divergence run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Every requested step was sampled.
    Exhausted,
    /// A state left the `BLOW_UP_NORM` ball or the gap stopped being finite.
    BlowUp,
    /// Both orbits sat on the same fixed point for `CONVERGENCE_WINDOW` steps.
    Converged,
}

impl StopReason {
    pub fn describe(self) -> &'static str {
        match self {
            StopReason::Exhausted => "step budget exhausted",
            StopReason::BlowUp => "trajectory blew up",
            StopReason::Converged => "converged to a fixed point",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DivergenceRun {
    pub k: f64,
    /// Lanes being compared, narrow first.
    pub lanes: [Precision; 2],
    pub samples: Vec<f64>,
    pub stop: StopReason,
}

impl DivergenceRun {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample at `step`, or the last one when the run stopped earlier.
    pub fn sample_at_or_last(&self, step: usize) -> Option<f64> {
        self.samples
            .get(step)
            .or_else(|| self.samples.last())
            .copied()
    }

    pub fn peak(&self) -> Option<f64> {
        self.samples.iter().copied().reduce(f64::max)
    }
}

/// Divergence samples for coupling `k` from the fixed initial state.
pub fn evaluate_divergence_f32_vs_f64(k: f64, steps: usize) -> Vec<f64> {
    track_divergence(k, steps).samples
}

pub fn track_divergence(k: f64, steps: usize) -> DivergenceRun {
    track_divergence_from(INITIAL_STATE, k, steps)
}

/// Runs the narrow orbit natively from `initial` and the wide orbit from its
/// exact promotion.
pub fn track_divergence_from(initial: State<f32>, k: f64, steps: usize) -> DivergenceRun {
    let k_narrow = f32::from_literal(k);
    let mut narrow = initial;
    let mut wide = widen(&initial);

    let mut samples = Vec::with_capacity(steps.min(PREALLOCATE_CAP));
    let mut calm = 0usize;
    let mut stop = StopReason::Exhausted;

    for _ in 0..steps {
        let narrow_seen = widen(&narrow);
        let gap = distance(&narrow_seen, &wide);
        samples.push(gap);

        if !gap.is_finite() || !bounded(&narrow_seen) || !bounded(&wide) {
            stop = StopReason::BlowUp;
            break;
        }

        let next_narrow = advance(&narrow, k_narrow);
        let next_wide = advance(&wide, k);
        let narrow_moved = distance(&widen(&next_narrow), &narrow_seen);
        let wide_moved = distance(&next_wide, &wide);
        narrow = next_narrow;
        wide = next_wide;

        if narrow_moved < CONVERGENCE_TOL && wide_moved < CONVERGENCE_TOL && gap < CONVERGENCE_TOL {
            calm += 1;
        } else {
            calm = 0;
        }
        if calm >= CONVERGENCE_WINDOW {
            stop = StopReason::Converged;
            break;
        }
    }

    DivergenceRun {
        k,
        lanes: [f32::PRECISION, f64::PRECISION],
        samples,
        stop,
    }
}

fn bounded(state: &State<f64>) -> bool {
    // NaN norms fail the comparison and count as escaped.
    norm(state) <= BLOW_UP_NORM
}
