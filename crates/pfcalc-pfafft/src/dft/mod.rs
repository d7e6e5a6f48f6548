//! Fixed-radix Winograd DFT kernels.
//!
//! One module per supported prime length. Each kernel precomputes its
//! rotation-dependent output permutation at construction and evaluates
//! `count` disjoint orbits of the full transform buffer per call, advancing
//! the orbit indices with the self-sorting rule from [`crate::indices`].
//!
//! The set of radices is closed, so dispatch is a plain enum rather than a
//! trait object; the innermost loops stay free of virtual calls.

mod radix11;
mod radix13;
mod radix17;
mod radix19;
mod radix2;
mod radix3;
mod radix31;
mod radix5;
mod radix7;

pub(crate) use radix11::Radix11;
pub(crate) use radix13::Radix13;
pub(crate) use radix17::Radix17;
pub(crate) use radix19::Radix19;
pub(crate) use radix2::Radix2;
pub(crate) use radix3::Radix3;
pub(crate) use radix31::Radix31;
pub(crate) use radix5::Radix5;
pub(crate) use radix7::Radix7;

/// A configured kernel for one prime factor of the transform length.
pub(crate) enum DftKernel {
    Radix2(Radix2),
    Radix3(Radix3),
    Radix5(Radix5),
    Radix7(Radix7),
    Radix11(Radix11),
    Radix13(Radix13),
    Radix17(Radix17),
    Radix19(Radix19),
    Radix31(Radix31),
}

impl DftKernel {
    /// Apply this kernel over the whole buffer pair, in place.
    pub(crate) fn evaluate(&self, re: &mut [f64], im: &mut [f64]) {
        match self {
            DftKernel::Radix2(k) => k.evaluate(re, im),
            DftKernel::Radix3(k) => k.evaluate(re, im),
            DftKernel::Radix5(k) => k.evaluate(re, im),
            DftKernel::Radix7(k) => k.evaluate(re, im),
            DftKernel::Radix11(k) => k.evaluate(re, im),
            DftKernel::Radix13(k) => k.evaluate(re, im),
            DftKernel::Radix17(k) => k.evaluate(re, im),
            DftKernel::Radix19(k) => k.evaluate(re, im),
            DftKernel::Radix31(k) => k.evaluate(re, im),
        }
    }
}

/// Fold a rotation into a static output permutation table.
///
/// Entry `i` of the result selects the flow-graph output that lands on
/// position `i` after the CRT rescheduling: `op[(i * rotation) mod P]`.
pub(super) fn rotate_output<const P: usize>(op: &[usize; P], rotation: u32) -> [usize; P] {
    let mut active = [0usize; P];
    for (i, slot) in active.iter_mut().enumerate() {
        *slot = op[(i * rotation as usize) % P];
    }
    active
}
