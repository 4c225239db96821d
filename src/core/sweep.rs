//! Parallel chaos-edge sweeps over a grid of coupling strengths.
//!
//! Each `k` is an independent, sequential evaluation, so the grid is simply
//! fanned out over a rayon pool. Results come back in grid order.

use std::time::Instant;

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use serde::{Deserialize, Serialize};

use crate::core::attractor::{score_chaos_edge, ChaosEdgeReport};
use crate::core::error::SimError;

/// Evenly spaced `k` values from `start` to `end` inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct KGrid {
    pub start: f64,
    pub end: f64,
    pub points: usize,
}

impl KGrid {
    pub fn new(start: f64, end: f64, points: usize) -> Self {
        Self { start, end, points }
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(SimError::invalid_grid("k bounds must be finite"));
        }
        if self.points == 0 {
            return Err(SimError::invalid_grid("points must be at least 1"));
        }
        Ok(())
    }

    /// Same spacing as NumPy's `linspace`: the last value is exactly `end`.
    pub fn values(&self) -> Vec<f64> {
        match self.points {
            0 => Vec::new(),
            1 => vec![self.start],
            n => {
                let step = (self.end - self.start) / (n - 1) as f64;
                let mut ks: Vec<f64> = (0..n).map(|i| self.start + i as f64 * step).collect();
                ks[n - 1] = self.end;
                ks
            }
        }
    }
}

/// Scores every `k` in `grid`. `threads == 0` runs on rayon's global pool.
pub fn sweep_chaos_edge(
    grid: &KGrid,
    escape_radius: f64,
    steps: usize,
    threads: usize,
) -> Result<Vec<ChaosEdgeReport>, SimError> {
    grid.validate()?;
    let ks = grid.values();
    let started = Instant::now();

    let evaluate = || -> Vec<ChaosEdgeReport> {
        ks.par_iter()
            .map(|&k| score_chaos_edge(k, escape_radius, steps))
            .collect()
    };

    let reports = if threads == 0 {
        evaluate()
    } else {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| SimError::thread_pool(&e.to_string()))?;
        pool.install(evaluate)
    };

    debug_log!(
        "[sweep] {} k values, radius {}, {} steps in {:?} (threads: {})",
        reports.len(),
        escape_radius,
        steps,
        started.elapsed(),
        if threads == 0 { rayon::current_num_threads() } else { threads }
    );
    Ok(reports)
}

/// First report with the highest score.
pub fn best(reports: &[ChaosEdgeReport]) -> Option<&ChaosEdgeReport> {
    let mut best: Option<&ChaosEdgeReport> = None;
    for report in reports {
        if best.map_or(true, |b| report.score > b.score) {
            best = Some(report);
        }
    }
    best
}
