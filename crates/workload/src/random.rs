//! Bounded random draws used by the input generators.
//!
//! All ranges are inclusive on both ends, matching how TPC-C states them.

use rand::Rng;

/// Draw uniformly from `[lo, hi]`.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: u32, hi: u32) -> u32 {
    rng.gen_range(lo..=hi)
}

/// Draw uniformly from `[lo, hi]` without ever returning `excluded`.
///
/// `excluded` must lie in `[lo, hi]` and the range must hold at least two
/// values.
pub fn uniform_excluding<R: Rng + ?Sized>(rng: &mut R, lo: u32, hi: u32, excluded: u32) -> u32 {
    debug_assert!(lo < hi, "need at least two values to exclude one");
    debug_assert!((lo..=hi).contains(&excluded));

    // Draw from one fewer slot and shift everything at or above the hole.
    let value = rng.gen_range(lo..hi);
    if value >= excluded {
        value + 1
    } else {
        value
    }
}

/// Return true with the given probability, expressed in whole percent.
///
/// Takes exactly one `[1, 100]` draw.
pub fn percent_chance<R: Rng + ?Sized>(rng: &mut R, percent: u32) -> bool {
    uniform(rng, 1, 100) <= percent
}

/// Non-uniform random value in `[x, y]`, as defined by TPC-C clause 2.1.6.
///
/// `NURand(A, x, y) = (((random(0, A) | random(x, y)) + C) % (y - x + 1)) + x`
pub fn nurand<R: Rng + ?Sized>(rng: &mut R, a: u32, c: u32, x: u32, y: u32) -> u32 {
    let rand_a = uniform(rng, 0, a) as u64;
    let rand_xy = uniform(rng, x, y) as u64;
    let span = (y - x) as u64 + 1;
    (((rand_a | rand_xy) + c as u64) % span) as u32 + x
}

/// Draw a decimal uniformly from `[min, max]` with a fixed number of places.
///
/// The draw is taken over whole units of the last place, so every result is
/// exactly representable at that precision.
pub fn uniform_decimal<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    let lo = (min * scale).round() as u64;
    let hi = (max * scale).round() as u64;
    rng.gen_range(lo..=hi) as f64 / scale
}
