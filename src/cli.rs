use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "qma",
    about = "Quadratic map attractor: f32/f64 divergence and edge-of-chaos sweeps",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct QmaCli {
    /// Global: path to config (TOML); default: ~/.qma/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Global: debug logging on stderr (same as QMA_DEBUG=1)
    #[arg(long = "debug", action = ArgAction::SetTrue, global = true)]
    pub debug: bool,

    /// Global: print a JSON document instead of the human report
    #[arg(long = "json", action = ArgAction::SetTrue, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Track f32 vs f64 divergence for one coupling strength
    ///
    /// Examples:
    ///   qma divergence
    ///   qma divergence --k 0.6 --steps 500 --seed 7
    Divergence {
        /// Coupling strength (default from config: 0.41)
        #[arg(long = "k", value_name = "K", allow_negative_numbers = true)]
        k: Option<f64>,
        /// Step budget (default from config: 10000)
        #[arg(long = "steps", value_name = "N")]
        steps: Option<usize>,
        /// Jitter the initial state reproducibly with this seed
        #[arg(long = "seed", value_name = "SEED")]
        seed: Option<u64>,
    },

    /// Sweep k and report the best edge-of-chaos score
    Explore {
        #[arg(long = "escape-radius", value_name = "R")]
        escape_radius: Option<f64>,
        #[arg(long = "steps", value_name = "N")]
        steps: Option<usize>,
        #[arg(long = "k-start", value_name = "K", allow_negative_numbers = true)]
        k_start: Option<f64>,
        #[arg(long = "k-end", value_name = "K", allow_negative_numbers = true)]
        k_end: Option<f64>,
        /// Number of k values, both ends included
        #[arg(long = "points", value_name = "P")]
        points: Option<usize>,
        /// Worker threads (0 = rayon default)
        #[arg(long = "threads", value_name = "T")]
        threads: Option<usize>,
    },

    /// Score a single coupling strength with the full breakdown
    Score {
        #[arg(long = "k", value_name = "K", allow_negative_numbers = true)]
        k: f64,
        #[arg(long = "escape-radius", value_name = "R")]
        escape_radius: Option<f64>,
        #[arg(long = "steps", value_name = "N")]
        steps: Option<usize>,
    },
}
