//! Initial conditions shared by every run.

use rand::{rngs::StdRng, Rng, SeedableRng};

use super::kernel::State;

/// Fixed starting point. Every value is exactly representable in `f32`, so
/// the wide trajectory starts from the exact promotion of the narrow one.
pub const INITIAL_STATE: State<f32> = [0.1, -0.2, 0.3, -0.15, 0.25, -0.05];

/// Half-width of the per-coordinate jitter applied by [`seeded_initial_state`].
pub const SEED_JITTER: f32 = 0.01;

/// `INITIAL_STATE` shifted by a reproducible uniform jitter in
/// `[-SEED_JITTER, SEED_JITTER)` per coordinate.
pub fn seeded_initial_state(seed: u64) -> State<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = INITIAL_STATE;
    for v in state.iter_mut() {
        *v += rng.gen_range(-SEED_JITTER..SEED_JITTER);
    }
    state
}
