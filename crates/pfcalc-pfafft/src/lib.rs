//! # pfcalc-pfafft
//!
//! Prime-factor-algorithm DFT over composite lengths built from the prime
//! radices 2, 3, 5, 7, 11, 13, 17, 19 and 31, after Temperton's
//! self-sorting in-place formulation, plus the convolution driver that
//! turns it into exact multiplication of radix-10^9 digit vectors.

pub mod convolve;
pub(crate) mod dft;
pub mod engine;
pub mod factors;
pub(crate) mod indices;

// Re-exports
pub use convolve::{fft_multiply, ConvolveError};
pub use engine::PrimeFactorDft;
pub use factors::{calc_factors, fast_calc_factors, validate_factors, FactorError};
