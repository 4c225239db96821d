//! `qma explore`: parallel edge-of-chaos sweep over k.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::config::ExploreSettings;
use crate::core::attractor::ChaosEdgeReport;
use crate::core::sweep::{best, sweep_chaos_edge};

#[derive(Debug, Serialize)]
struct ExploreReport<'a> {
    escape_radius: f64,
    steps: usize,
    best: Option<&'a ChaosEdgeReport>,
    points: &'a [ChaosEdgeReport],
}

pub fn main(settings: &ExploreSettings, json: bool) -> Result<()> {
    let grid = settings.grid();
    crate::debug_log!("[explore] grid={grid:?} settings={settings:?}");

    let reports = sweep_chaos_edge(&grid, settings.escape_radius, settings.steps, settings.threads)?;
    let top = best(&reports);

    if json {
        let report = ExploreReport {
            escape_radius: settings.escape_radius,
            steps: settings.steps,
            best: top,
            points: &reports,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Starting parameter exploration...");
    for r in &reports {
        let line = format!("k={:.3}, Score={:.4}", r.k, r.score);
        if top.is_some_and(|b| b.k == r.k) {
            println!("{}", line.green().bold());
        } else {
            println!("{line}");
        }
    }
    if let Some(b) = top {
        println!("\nOptimal Chaos Edge coupling strength found: k = {:.3}", b.k);
    }
    Ok(())
}
