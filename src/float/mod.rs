pub mod complex;
mod core;

pub use complex::{
    IterativeFft, bit_reverse_copy, bit_reverse_permute_in_place, forward_fft,
    forward_fft_in_place, iterative_fft,
};
