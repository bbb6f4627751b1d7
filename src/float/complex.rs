use num_complex::Complex64;

use super::core::{butterfly_stages, permute_bit_reversed, scatter_bit_reversed};
use crate::bits::{checked_log2, fast_log2};
use crate::common::{FftError, Transform};
use crate::report::{Reporter, TracingReporter, reject};

/// Validates `length` and the buffer sizes, reporting any failure.
fn validate<R: Reporter + ?Sized>(
    input_len: usize,
    output_len: usize,
    length: usize,
    reporter: &R,
) -> Result<u32, FftError> {
    let log2n = checked_log2(length).map_err(|err| reject(reporter, err))?;
    if input_len < length || output_len < length {
        return Err(reject(reporter, FftError::BufferTooSmall));
    }
    Ok(log2n)
}

/// Stores `input[i]` at the bit-reversed index of `i` in `output`.
///
/// Only the first `length` samples of each slice take part. On error `output`
/// is left untouched.
pub fn bit_reverse_copy<R: Reporter + ?Sized>(
    input: &[Complex64],
    output: &mut [Complex64],
    length: usize,
    reporter: &R,
) -> Result<(), FftError> {
    let log2n = validate(input.len(), output.len(), length, reporter)?;
    scatter_bit_reversed(&input[..length], &mut output[..length], log2n);
    Ok(())
}

/// Bit-reversal permutation of a whole buffer, in place.
pub fn bit_reverse_permute_in_place<R: Reporter + ?Sized>(
    buffer: &mut [Complex64],
    reporter: &R,
) -> Result<(), FftError> {
    let log2n = checked_log2(buffer.len()).map_err(|err| reject(reporter, err))?;
    permute_bit_reversed(buffer, log2n);
    Ok(())
}

/// Iterative radix-2 Cooley-Tukey forward DFT of `input[..length]` into `output[..length]`.
///
/// Output is in natural frequency order and unnormalized. Samples past `length`
/// in `output` are not touched.
pub fn iterative_fft<R: Reporter + ?Sized>(
    input: &[Complex64],
    output: &mut [Complex64],
    length: usize,
    reporter: &R,
) -> Result<(), FftError> {
    bit_reverse_copy(input, output, length, reporter)?;
    // length was validated by the copy, so it fits the index word
    butterfly_stages(&mut output[..length], fast_log2(length as u32));
    Ok(())
}

/// [`iterative_fft`] reporting failures through `tracing`.
pub fn forward_fft(
    input: &[Complex64],
    output: &mut [Complex64],
    length: usize,
) -> Result<(), FftError> {
    iterative_fft(input, output, length, &TracingReporter)
}

/// Forward DFT of the whole buffer, overwriting it with the spectrum.
pub fn forward_fft_in_place(buffer: &mut [Complex64]) -> Result<(), FftError> {
    let fft = IterativeFft::new(buffer.len(), TracingReporter)?;
    fft.process_in_place(buffer)
}

/// A transform of fixed length, validated once.
///
/// No twiddles are kept: each stage derives its root of unity on every call.
pub struct IterativeFft<R: Reporter = TracingReporter> {
    n: usize,
    stages: u32,
    reporter: R,
}

impl<R: Reporter> IterativeFft<R> {
    pub fn new(n: usize, reporter: R) -> Result<Self, FftError> {
        let stages = checked_log2(n).map_err(|err| reject(&reporter, err))?;
        Ok(Self { n, stages, reporter })
    }

    pub fn len(&self) -> usize {
        self.n
    }

    /// Always false: a zero length never validates.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Number of butterfly stages, `log2(len)`.
    pub fn stages(&self) -> u32 {
        self.stages
    }

    /// Transforms `input[..len]` into `output[..len]`.
    pub fn process(&self, input: &[Complex64], output: &mut [Complex64]) -> Result<(), FftError> {
        if input.len() < self.n || output.len() < self.n {
            return Err(reject(&self.reporter, FftError::BufferTooSmall));
        }
        let output = &mut output[..self.n];
        scatter_bit_reversed(&input[..self.n], output, self.stages);
        butterfly_stages(output, self.stages);
        Ok(())
    }

    /// Transforms `buffer`, which must hold exactly `len` samples.
    pub fn process_in_place(&self, buffer: &mut [Complex64]) -> Result<(), FftError> {
        if buffer.len() != self.n {
            return Err(reject(&self.reporter, FftError::SizeMismatch));
        }
        permute_bit_reversed(buffer, self.stages);
        butterfly_stages(buffer, self.stages);
        Ok(())
    }
}

impl<R: Reporter> Transform<Complex64> for IterativeFft<R> {
    fn transform(&self, input: &[Complex64], output: &mut [Complex64]) -> Result<(), FftError> {
        self.process(input, output)
    }

    fn transform_in_place(&self, buffer: &mut [Complex64]) -> Result<(), FftError> {
        self.process_in_place(buffer)
    }
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
