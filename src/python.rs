//! Python bindings via pyo3 (feature: `python`).
//! Builds the `quadratic_map_attractor` extension module with the same call
//! signatures the exploration scripts use.

use pyo3::prelude::*;

use crate::core::attractor::{chaos_edge, divergence};

// Python ints may be negative; a non-positive budget means no work.
fn step_budget(steps: i64) -> usize {
    usize::try_from(steps).unwrap_or(0)
}

/// Per-step f32/f64 divergence for coupling `k`, at most `steps` samples.
#[pyfunction]
fn evaluate_divergence_f32_vs_f64(py: Python<'_>, k: f64, steps: i64) -> Vec<f64> {
    let steps = step_budget(steps);
    py.allow_threads(|| divergence::evaluate_divergence_f32_vs_f64(k, steps))
}

/// Edge-of-chaos score for coupling `k`.
#[pyfunction]
fn evaluate_chaos_edge(py: Python<'_>, k: f64, escape_radius: f64, steps: i64) -> f64 {
    let steps = step_budget(steps);
    py.allow_threads(|| chaos_edge::evaluate_chaos_edge(k, escape_radius, steps))
}

#[pymodule]
fn quadratic_map_attractor(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(evaluate_chaos_edge, m)?)?;
    m.add_function(wrap_pyfunction!(evaluate_divergence_f32_vs_f64, m)?)?;
    Ok(())
}
