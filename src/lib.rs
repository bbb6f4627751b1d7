// Outside of tests the crate is no_std unless the "std" feature is on,
// so you can still run 'cargo test' on your PC normally.
#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod bits;
pub mod common;
pub mod float;
pub mod report;

pub use bits::{checked_log2, fast_log2, is_power_of_two, reverse_bits, reversed_index};
pub use common::{ErrorKind, FftError, Transform};
pub use float::{
    IterativeFft, bit_reverse_copy, bit_reverse_permute_in_place, forward_fft,
    forward_fft_in_place, iterative_fft,
};
pub use report::{Reporter, SilentReporter, TracingReporter};
