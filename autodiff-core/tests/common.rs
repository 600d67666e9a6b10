use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Finite-difference step and agreement tolerance used by the property tests.
#[allow(dead_code)]
pub const FD_EPSILON: f64 = 1e-6;
#[allow(dead_code)]
pub const FD_TOLERANCE: f64 = 1e-6;

// Seeded so failures are reproducible.
#[allow(dead_code)]
pub fn test_rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

/// Draws a value with magnitude in `[low, high)` and a random sign.
#[allow(dead_code)]
pub fn signed_magnitude(rng: &mut StdRng, low: f64, high: f64) -> f64 {
    let magnitude = rng.gen_range(low..high);
    if rng.gen_bool(0.5) {
        magnitude
    } else {
        -magnitude
    }
}
