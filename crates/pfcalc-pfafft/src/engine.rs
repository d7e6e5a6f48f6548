//! Prime-factor DFT composition engine.
//!
//! Composes the fixed-radix kernels over a validated factor list using
//! Temperton's self-sorting in-place index scheme: per-factor rotations are
//! the modular inverses of the cofactors, and each kernel walks its own CRT
//! index orbits, so no bit- or digit-reversal pass is needed anywhere.

use tracing::debug;

use crate::dft::{
    DftKernel, Radix11, Radix13, Radix17, Radix19, Radix2, Radix3, Radix31, Radix5, Radix7,
};
use crate::factors::{validate_factors, FactorError};
use crate::indices::init_indices;

/// A configured prime-factor DFT over a fixed composite length.
///
/// The engine is a two-state machine: unconfigured (zero length, no
/// kernels) and configured. [`PrimeFactorDft::set_factors`] moves between
/// the states; the transform methods require a configured engine and are
/// documented no-ops otherwise.
#[derive(Default)]
pub struct PrimeFactorDft {
    factors: Vec<u32>,
    length: u64,
    kernels: Vec<DftKernel>,
}

impl PrimeFactorDft {
    /// Create an unconfigured engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `factors` and build one kernel per factor.
    ///
    /// Any previously built kernels are discarded first, so reconfiguration
    /// never leaks state from an earlier factor list. Returns the transform
    /// length, `Ok(0)` for an empty list (the engine stays unconfigured).
    pub fn set_factors(&mut self, factors: &[u32]) -> Result<u64, FactorError> {
        self.kernels.clear();
        self.length = 0;
        self.factors.clear();

        let length = validate_factors(factors)?;
        if length == 0 {
            return Ok(0);
        }

        self.factors.extend_from_slice(factors);
        self.length = length;

        let rotations = rotations(factors, length);
        debug!(length, ?factors, ?rotations, "configuring prime-factor DFT");

        #[allow(clippy::cast_possible_truncation)]
        let n = length as usize;
        for (&f, &rot) in factors.iter().zip(rotations.iter()) {
            let count = n / f as usize;
            let kernel = match f {
                2 => DftKernel::Radix2(Radix2::new(rot, count, init_indices::<2>(n))),
                3 => DftKernel::Radix3(Radix3::new(rot, count, init_indices::<3>(n))),
                5 => DftKernel::Radix5(Radix5::new(rot, count, init_indices::<5>(n))),
                7 => DftKernel::Radix7(Radix7::new(rot, count, init_indices::<7>(n))),
                11 => DftKernel::Radix11(Radix11::new(rot, count, init_indices::<11>(n))),
                13 => DftKernel::Radix13(Radix13::new(rot, count, init_indices::<13>(n))),
                17 => DftKernel::Radix17(Radix17::new(rot, count, init_indices::<17>(n))),
                19 => DftKernel::Radix19(Radix19::new(rot, count, init_indices::<19>(n))),
                31 => DftKernel::Radix31(Radix31::new(rot, count, init_indices::<31>(n))),
                // validate_factors admits exactly the nine radices above
                _ => unreachable!("factor {f} passed validation"),
            };
            self.kernels.push(kernel);
        }
        Ok(length)
    }

    /// The configured transform length, or 0 while unconfigured.
    #[must_use]
    pub fn length(&self) -> u64 {
        self.length
    }

    /// The current factor list, empty while unconfigured.
    #[must_use]
    pub fn factors(&self) -> &[u32] {
        &self.factors
    }

    /// In-place forward transform of `re`/`im`.
    ///
    /// Both slices must hold at least [`Self::length`] samples; calling this
    /// on an unconfigured engine leaves the buffers untouched.
    pub fn forward(&self, re: &mut [f64], im: &mut [f64]) {
        for kernel in &self.kernels {
            kernel.evaluate(re, im);
        }
    }

    /// In-place unnormalized inverse transform.
    ///
    /// The radix kernels serve both directions: swapping the buffer roles
    /// conjugates the transform, which for these real-coefficient flow
    /// graphs is exactly the inverse up to the factor `length`.
    pub fn inverse(&self, re: &mut [f64], im: &mut [f64]) {
        for kernel in &self.kernels {
            kernel.evaluate(im, re);
        }
    }

    /// In-place inverse transform scaled by `1 / length`.
    pub fn scaled_inverse(&self, re: &mut [f64], im: &mut [f64]) {
        self.inverse(re, im);
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
        let (scale, n) = (1.0 / self.length as f64, self.length as usize);
        for v in &mut re[..n] {
            *v *= scale;
        }
        for v in &mut im[..n] {
            *v *= scale;
        }
    }
}

/// Temperton's rotation rule: for each factor `p` of `n`, the rotation is
/// the multiplicative inverse of `n / p` modulo `p`, found by brute force
/// (p <= 31 makes a scan cheaper than anything clever).
fn rotations(factors: &[u32], n: u64) -> Vec<u32> {
    factors
        .iter()
        .map(|&p| {
            let m = n / u64::from(p) % u64::from(p);
            (1..p)
                .find(|&r| (u64::from(r) * m) % u64::from(p) == 1)
                .unwrap_or(0)
        })
        .collect()
}
