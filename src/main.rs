/// qma — divergence reports and edge-of-chaos sweeps for the quadratic map attractor.
use anyhow::Context;
use clap::Parser; // trait import enables QmaCli::parse()

use quadratic_map_attractor::cli::{Command, QmaCli};
use quadratic_map_attractor::commands;
use quadratic_map_attractor::config::{resolve_config_path, SimConfig};
use quadratic_map_attractor::core::debug;
use quadratic_map_attractor::debug_log;

fn main() -> anyhow::Result<()> {
    let args = QmaCli::parse();
    if args.debug {
        debug::enable();
    }

    let mut cfg = SimConfig::load(&args.config).with_context(|| {
        match resolve_config_path(&args.config) {
            Some(p) => format!("loading config {}", p.display()),
            None => "loading config".to_string(),
        }
    })?;

    match args.cmd {
        Command::Divergence { k, steps, seed } => {
            if let Some(k) = k {
                cfg.divergence.k = k;
            }
            if let Some(n) = steps {
                cfg.divergence.steps = n;
            }
            cfg.validate()?;
            commands::divergence::main(cfg.divergence.k, cfg.divergence.steps, seed, args.json)
        }

        Command::Explore {
            escape_radius,
            steps,
            k_start,
            k_end,
            points,
            threads,
        } => {
            let ex = &mut cfg.explore;
            if let Some(r) = escape_radius {
                ex.escape_radius = r;
            }
            if let Some(n) = steps {
                ex.steps = n;
            }
            if let Some(a) = k_start {
                ex.k_start = a;
            }
            if let Some(b) = k_end {
                ex.k_end = b;
            }
            if let Some(p) = points {
                ex.points = p;
            }
            if let Some(t) = threads {
                ex.threads = t;
            }
            cfg.validate()?;
            debug_log!("[qma] explore with {:?}", cfg.explore);
            commands::explore::main(&cfg.explore, args.json)
        }

        Command::Score {
            k,
            escape_radius,
            steps,
        } => {
            // Single evaluations accept any radius; the core reports zero for
            // radii nothing can stay inside.
            let radius = escape_radius.unwrap_or(cfg.explore.escape_radius);
            let steps = steps.unwrap_or(cfg.explore.steps);
            commands::score::main(k, radius, steps, args.json)
        }
    }
}
