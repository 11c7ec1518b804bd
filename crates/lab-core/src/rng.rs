//! Deterministic pseudo-random function
//!
//! A stateless sine hash seeded by the step counter. Game outcomes must be
//! reproducible bit-for-bit across ports, so this is not backed by `rand`.

const SEED_SCALE: f64 = 12.9898;
const AMPLITUDE: f64 = 43758.5453;

/// Returns a value in `0..modulo` derived only from `seed`.
///
/// Returns 0 if `modulo` is 0.
pub fn pseudo_random(seed: u64, modulo: u32) -> u32 {
    if modulo == 0 {
        return 0;
    }
    let x = (seed as f64 * SEED_SCALE).sin() * AMPLITUDE;
    let frac = x - x.floor();
    // frac < 1, but the product can round up to `modulo` for huge moduli
    ((frac * modulo as f64) as u32).min(modulo - 1)
}
