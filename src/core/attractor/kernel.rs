//! Ring-coupled quadratic map over a 6-dimensional real state.
//!
//! The same source formula runs in either lane (`f32` narrow, `f64` wide).
//! Literals are rounded into the lane before use and nothing inside
//! [`advance`] ever promotes a narrow value, so two trajectories of the same
//! map differ only by per-step rounding.
//!
//! Update rule, indices taken mod 6:
//!
//! ```text
//! a_i  = A_SCALE * (1 + d_i) * k,                             d = SITE_DETUNING
//! x_i' = 1 - a_i * ((1 - c) * x_i^2 + c * x_{i+1} * x_{i-1}),   c = RING_COUPLING
//! ```
//!
//! Below k ~ 0.27 orbits settle on a fixed point, around k = 0.4 they sit on
//! a period-two cycle, chaotic bands open from k ~ 0.51, and above k ~ 0.66
//! the orbit leaves any bounded region.

use std::fmt;

use num_traits::Float;
use serde::Serialize;

/// Dimension of the phase space.
pub const DIM: usize = 6;

/// Gain applied to `k` before it scales the quadratic term.
pub const A_SCALE: f64 = 2.75;

/// Weight of the neighbour cross term in each coordinate's update.
pub const RING_COUPLING: f64 = 0.1;

/// Relative offset of each site's gain from `A_SCALE * k`. Breaks the
/// rotational symmetry of the ring, which otherwise opens periodic windows
/// inside the chaotic band.
pub const SITE_DETUNING: [f64; DIM] = [0.04, -0.04, 0.02, -0.02, 0.03, -0.03];

/// One point in phase space.
pub type State<T> = [T; DIM];

/// Floating-point width a trajectory is evaluated in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    Narrow,
    Wide,
}

impl Precision {
    pub fn bits(self) -> u32 {
        match self {
            Precision::Narrow => 32,
            Precision::Wide => 64,
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precision::Narrow => write!(f, "narrow (f{})", self.bits()),
            Precision::Wide => write!(f, "wide (f{})", self.bits()),
        }
    }
}

/// Numeric type a trajectory is evaluated in.
///
/// `from_literal` rounds a constant into the lane; `promote` is the only way
/// to move a value into `f64` and is reserved for comparison points.
pub trait Lane: Float + fmt::Debug + Send + Sync + 'static {
    const PRECISION: Precision;

    fn from_literal(value: f64) -> Self;

    fn promote(self) -> f64;
}

impl Lane for f32 {
    const PRECISION: Precision = Precision::Narrow;

    fn from_literal(value: f64) -> Self {
        value as f32
    }

    fn promote(self) -> f64 {
        self as f64
    }
}

impl Lane for f64 {
    const PRECISION: Precision = Precision::Wide;

    fn from_literal(value: f64) -> Self {
        value
    }

    fn promote(self) -> f64 {
        self
    }
}

/// Map constants rounded into one lane for a fixed `k`.
#[derive(Clone, Copy, Debug)]
struct Coefficients<T> {
    gains: State<T>,
    keep: T,
    couple: T,
}

impl<T: Lane> Coefficients<T> {
    fn for_coupling(k: T) -> Self {
        Self {
            gains: SITE_DETUNING.map(|d| T::from_literal(A_SCALE * (1.0 + d)) * k),
            keep: T::from_literal(1.0 - RING_COUPLING),
            couple: T::from_literal(RING_COUPLING),
        }
    }

    fn apply(&self, state: &State<T>) -> State<T> {
        std::array::from_fn(|i| {
            let x = state[i];
            let right = state[(i + 1) % DIM];
            let left = state[(i + DIM - 1) % DIM];
            let inner = self.keep * (x * x) + self.couple * (right * left);
            T::one() - self.gains[i] * inner
        })
    }
}

/// Applies the map once. Pure and total: overflow shows up as `inf`/`NaN`
/// in the result and is left for the caller to detect.
pub fn advance<T: Lane>(state: &State<T>, k: T) -> State<T> {
    Coefficients::for_coupling(k).apply(state)
}

/// Lazy orbit of the map. The first item is the initial state itself.
#[derive(Clone, Debug)]
pub struct Trajectory<T: Lane> {
    state: State<T>,
    coefficients: Coefficients<T>,
}

impl<T: Lane> Trajectory<T> {
    pub fn new(initial: State<T>, k: T) -> Self {
        Self {
            state: initial,
            coefficients: Coefficients::for_coupling(k),
        }
    }
}

impl<T: Lane> Iterator for Trajectory<T> {
    type Item = State<T>;

    fn next(&mut self) -> Option<State<T>> {
        let current = self.state;
        self.state = self.coefficients.apply(&current);
        Some(current)
    }
}

/// Explicit promotion of a narrow state for comparison against a wide one.
pub fn widen(state: &State<f32>) -> State<f64> {
    state.map(<f32 as Lane>::promote)
}

/// Euclidean norm.
pub fn norm(state: &State<f64>) -> f64 {
    state.iter().map(|v| v * v).sum::<f64>().sqrt()
}

/// Euclidean distance across all six coordinates.
pub fn distance(a: &State<f64>, b: &State<f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: State<f64> = [0.1, -0.2, 0.3, -0.15, 0.25, -0.05];

    #[test]
    fn origin_maps_to_ones() {
        assert_eq!(advance(&[0.0f64; DIM], 0.5), [1.0; DIM]);
        assert_eq!(advance(&[0.0f32; DIM], 0.5), [1.0; DIM]);
    }

    #[test]
    fn zero_coupling_collapses_to_ones() {
        assert_eq!(advance(&START, 0.0), [1.0; DIM]);
    }

    #[test]
    fn matches_hand_computed_coordinate() {
        let k = 0.5;
        let next = advance(&START, k);
        let a = A_SCALE * (1.0 + SITE_DETUNING[0]) * k;
        let expected = 1.0 - a * (0.9 * (0.1 * 0.1) + 0.1 * (-0.2 * -0.05));
        assert!((next[0] - expected).abs() < 1e-15, "{} vs {}", next[0], expected);
    }

    #[test]
    fn each_output_depends_on_its_ring_neighbours() {
        let k = 0.6;
        let base = advance(&START, k);
        let mut nudged = START;
        nudged[0] += 1e-3;
        let moved = advance(&nudged, k);
        assert_ne!(moved[0], base[0]);
        assert_ne!(moved[1], base[1]);
        assert_ne!(moved[5], base[5]);
        assert_eq!(moved[3], base[3]);
    }

    #[test]
    fn narrow_and_wide_agree_to_rounding_after_one_step() {
        let narrow: State<f32> = START.map(|v| v as f32);
        let wide = widen(&narrow);
        let k = 0.41;
        let n1 = widen(&advance(&narrow, k as f32));
        let w1 = advance(&wide, k);
        let d = distance(&n1, &w1);
        assert!(d < 1e-6, "one-step gap too large: {d}");
    }

    #[test]
    fn overflow_surfaces_as_infinity() {
        let huge = [1e200f64; DIM];
        let next = advance(&huge, 1.0);
        assert!(next.iter().all(|v| v.is_infinite() && v.is_sign_negative()));
    }

    #[test]
    fn trajectory_starts_at_initial_state() {
        let mut orbit = Trajectory::new(START, 0.55);
        assert_eq!(orbit.next(), Some(START));
        assert_eq!(orbit.next(), Some(advance(&START, 0.55)));
    }

    #[test]
    fn sites_carry_their_own_gain() {
        let next = advance(&[0.5f64; DIM], 0.6);
        for i in 0..DIM {
            let expected = 1.0 - A_SCALE * (1.0 + SITE_DETUNING[i]) * 0.6 * 0.25;
            assert!((next[i] - expected).abs() < 1e-15, "site {i}");
        }
        assert_ne!(next[0], next[1]);
    }

    #[test]
    fn precision_tags() {
        assert_eq!(<f32 as Lane>::PRECISION, Precision::Narrow);
        assert_eq!(<f64 as Lane>::PRECISION, Precision::Wide);
        assert_eq!(Precision::Narrow.to_string(), "narrow (f32)");
    }

    #[test]
    fn norm_and_distance() {
        let a = [3.0, 4.0, 0.0, 0.0, 0.0, 0.0];
        assert_eq!(norm(&a), 5.0);
        assert_eq!(distance(&a, &a), 0.0);
        assert_eq!(distance(&a, &[0.0; DIM]), 5.0);
    }
}
