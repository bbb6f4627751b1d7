// src/float/core.rs

use core::f64::consts::PI;
use num_complex::Complex64;

use crate::bits::reversed_index;

/// sin/cos that works with or without std.
fn sin_cos(angle: f64) -> (f64, f64) {
    #[cfg(feature = "std")]
    return angle.sin_cos();

    #[cfg(not(feature = "std"))]
    return (libm::sin(angle), libm::cos(angle));
}

/// Primitive `m`-th root of unity, `exp(-2πj/m)`.
pub(crate) fn stage_root(m: usize) -> Complex64 {
    let angle = -2.0 * PI / (m as f64);
    let (sin, cos) = sin_cos(angle);
    Complex64::new(cos, sin)
}

/// Writes `input[i]` to `output[rev(i)]` for every `i`.
///
/// Both slices must be exactly `1 << log2n` long.
pub(crate) fn scatter_bit_reversed(input: &[Complex64], output: &mut [Complex64], log2n: u32) {
    debug_assert_eq!(input.len(), output.len());
    for (i, &sample) in input.iter().enumerate() {
        output[reversed_index(i as u32, log2n) as usize] = sample;
    }
}

/// Same permutation as [`scatter_bit_reversed`], but by swapping within one buffer.
pub(crate) fn permute_bit_reversed(buffer: &mut [Complex64], log2n: u32) {
    for i in 0..buffer.len() {
        let j = reversed_index(i as u32, log2n) as usize;
        // each pair is swapped once
        if i < j {
            buffer.swap(i, j);
        }
    }
}

/// Runs the `log2n` decimation-in-time stages over a bit-reversed buffer.
pub(crate) fn butterfly_stages(buffer: &mut [Complex64], log2n: u32) {
    for stage in 1..=log2n {
        let m = 1usize << stage;
        let half = m / 2;
        let omega_m = stage_root(m);

        for group in buffer.chunks_exact_mut(m) {
            let (lo, hi) = group.split_at_mut(half);
            let mut omega = Complex64::new(1.0, 0.0);

            for (u, v) in lo.iter_mut().zip(hi.iter_mut()) {
                let t = omega * *v;
                let a = *u;
                *u = a + t;
                *v = a - t;
                omega *= omega_m;
            }
        }
    }
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
