//! `qma score`: one coupling strength, full breakdown.

use anyhow::Result;
use colored::Colorize;

use crate::core::attractor::score_chaos_edge;

pub fn main(k: f64, escape_radius: f64, steps: usize, json: bool) -> Result<()> {
    let report = score_chaos_edge(k, escape_radius, steps);
    crate::debug_log!("[score] {report:?}");

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("k={:.3}, Score={}", report.k, format!("{:.4}", report.score).bold());
    println!("  survival: {:.4}", report.survival);
    println!("  activity: {:.6}", report.activity);
    match report.escaped_at {
        Some(step) => println!("  escaped at step {step} (radius {escape_radius})"),
        None => println!("  stayed inside radius {escape_radius} for {steps} steps"),
    }
    Ok(())
}
