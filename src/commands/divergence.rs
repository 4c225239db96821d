//! `qma divergence`: f32 vs f64 trajectory divergence report.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::core::attractor::{
    seeded_initial_state, track_divergence_from, DivergenceRun, INITIAL_STATE,
};

#[derive(Debug, Serialize)]
struct DivergenceReport<'a> {
    steps: usize,
    seed: Option<u64>,
    total: usize,
    #[serde(flatten)]
    run: &'a DivergenceRun,
}

pub fn main(k: f64, steps: usize, seed: Option<u64>, json: bool) -> Result<()> {
    let initial = match seed {
        Some(s) => seeded_initial_state(s),
        None => INITIAL_STATE,
    };
    crate::debug_log!("[divergence] k={k} steps={steps} initial={initial:?}");

    let run = track_divergence_from(initial, k, steps);
    crate::debug_log!("[divergence] stopped after {} samples: {:?}", run.len(), run.stop);

    if json {
        let report = DivergenceReport { steps, seed, total: run.len(), run: &run };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let [narrow, wide] = run.lanes;
    println!("Evaluating {narrow} vs {wide} divergence over time (k={k:.3}, steps={steps})...");
    println!("Total steps simulated before threshold/conclusion: {}", run.len());
    if let Some(d) = run.sample_at_or_last(10) {
        println!("Divergence after 10 steps: {d:.10}");
    }
    if run.len() > 100 {
        if let Some(d) = run.sample_at_or_last(100) {
            println!("Divergence after 100 steps: {d:.10}");
        }
    }
    if let Some(peak) = run.peak() {
        println!("Peak divergence: {peak:.3e}");
    }
    println!("Stopped: {}", run.stop.describe().bold());
    Ok(())
}
