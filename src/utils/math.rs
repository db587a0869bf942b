//! Small math helpers

/// Convert a power ratio to dB
#[inline]
pub fn power_to_db(ratio: f64) -> f64 {
    10.0 * ratio.log10()
}

/// Squared distance from the origin
#[inline]
pub fn energy(i: f64, q: f64) -> f64 {
    i * i + q * q
}

/// Compute magnitude of complex number
#[inline]
pub fn magnitude(i: f64, q: f64) -> f64 {
    energy(i, q).sqrt()
}

/// Compute phase of complex number in radians
#[inline]
pub fn phase(i: f64, q: f64) -> f64 {
    q.atan2(i)
}

/// Floor of the square root, exact for every u64
pub fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    // Float estimate, then correct the last step of rounding
    let mut r = (n as f64).sqrt() as u64;
    while r.checked_mul(r).map_or(true, |sq| sq > n) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).map_or(false, |sq| sq <= n) {
        r += 1;
    }
    r
}

/// log2 of `n` when `n` is an exact power of two
#[inline]
pub fn exact_log2(n: u32) -> Option<u32> {
    n.is_power_of_two().then(|| n.trailing_zeros())
}
