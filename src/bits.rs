// src/bits.rs

use crate::common::FftError;

/// Width of the index word the bit tricks operate on.
pub const WORD_BITS: u32 = u32::BITS;

const DEBRUIJN_MULTIPLIER: u32 = 0x077C_B531;

/// Bit position lookup for `(n * DEBRUIJN_MULTIPLIER) >> 27` when `n` is a power of two.
static DEBRUIJN_BIT_POSITION: [u32; 32] = [
    0, 1, 28, 2, 29, 14, 24, 3, 30, 22, 20, 15, 25, 17, 4, 8,
    31, 27, 13, 23, 21, 19, 16, 7, 26, 12, 18, 6, 11, 5, 10, 9,
];

/// Checks that `n` is a usable transform length.
///
/// Returns `Ok(true)` only for nonzero values with a single bit set. Zero is
/// `Ok(false)`: it passes the `n & (n - 1)` test but holds no samples.
/// Values that do not fit in the index word fail with
/// [`FftError::LengthOutOfRange`].
pub fn is_power_of_two(n: usize) -> Result<bool, FftError> {
    if u32::try_from(n).is_err() {
        return Err(FftError::LengthOutOfRange);
    }
    Ok(n != 0 && (n & (n - 1)) == 0)
}

/// log2 of a power of two in constant time. Meaningless for other inputs.
pub fn fast_log2(n: u32) -> u32 {
    DEBRUIJN_BIT_POSITION[(n.wrapping_mul(DEBRUIJN_MULTIPLIER) >> 27) as usize]
}

/// Reverses all 32 bits of `n`.
pub fn reverse_bits(n: u32) -> u32 {
    // swap consecutive bits
    let n = ((n >> 1) & 0x5555_5555) | ((n & 0x5555_5555) << 1);
    // swap pairs
    let n = ((n >> 2) & 0x3333_3333) | ((n & 0x3333_3333) << 2);
    // swap nibbles
    let n = ((n >> 4) & 0x0F0F_0F0F) | ((n & 0x0F0F_0F0F) << 4);
    // swap bytes
    let n = ((n >> 8) & 0x00FF_00FF) | ((n & 0x00FF_00FF) << 8);
    // swap half-words
    (n >> 16) | (n << 16)
}

/// Reverses the low `log2n` bits of `i`.
///
/// With `log2n == 0` the shift would be the full word width; the only index
/// in that space is 0, so 0 is returned.
pub fn reversed_index(i: u32, log2n: u32) -> u32 {
    reverse_bits(i)
        .checked_shr(WORD_BITS - log2n)
        .unwrap_or(0)
}

/// Validates `length` and returns the number of butterfly stages.
pub fn checked_log2(length: usize) -> Result<u32, FftError> {
    if !is_power_of_two(length)? {
        return Err(FftError::NotPowerOfTwo);
    }
    // is_power_of_two already proved the value fits
    Ok(fast_log2(length as u32))
}

#[cfg(test)]
#[path = "bits_tests.rs"]
mod tests;
