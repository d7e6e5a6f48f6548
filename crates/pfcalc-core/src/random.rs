//! Random big integers for the probabilistic number theory routines.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::warn;

use crate::pfint::PfInt;

/// Decimal digits per limb.
const DIGITS: i32 = 9;

/// A bounded random source for [`PfInt`] values.
///
/// Holds its own RNG; construct one per task and pass it by mutable
/// reference. [`PfIntRandom::set_bound`] caps the magnitude of generated
/// values below a given integer. The digit count of each draw follows a
/// decade distribution (roughly 90% of the integers below a bound share
/// its digit count), so draws look like uniform picks below the bound.
pub struct PfIntRandom {
    modulus: u32,
    digits_bound: i32,
    top_limb: i32,
    rng: StdRng,
}

impl PfIntRandom {
    /// New generator with operating-system entropy.
    #[must_use]
    pub fn new(modulus: u32) -> Self {
        Self {
            modulus,
            digits_bound: 0,
            top_limb: 0,
            rng: StdRng::from_os_rng(),
        }
    }

    /// New deterministic generator, for reproducible runs and tests.
    #[must_use]
    pub fn with_seed(modulus: u32, seed: u64) -> Self {
        Self {
            modulus,
            digits_bound: 0,
            top_limb: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Bound subsequent draws below `bound` in magnitude.
    ///
    /// A zero bound is ignored with a warning and leaves the previous
    /// bound in place.
    pub fn set_bound(&mut self, bound: &PfInt) {
        if bound.is_zero() {
            warn!("zero bound ignored");
            return;
        }
        let top = bound.limb(bound.len() - 1);
        #[allow(clippy::cast_possible_wrap)]
        let mut digits = DIGITS * (bound.len() as i32 - 1);
        let mut t = top.abs();
        while t > 0 {
            t /= 10;
            digits += 1;
        }
        self.digits_bound = digits;
        self.top_limb = top.abs();
    }

    /// Draw a value in `[0, bound)`.
    pub fn random_pfint(&mut self) -> PfInt {
        let mut digits = self.digits_bound;
        while digits > 0 {
            if self.rand_below(self.modulus) >= self.modulus / 10 {
                break;
            }
            digits -= 1;
        }
        let mut size = digits.max(1);

        let mut out = PfInt::new();
        while size >= DIGITS {
            #[allow(clippy::cast_possible_wrap)]
            out.value.push(self.rand_below(self.modulus) as i32);
            size -= DIGITS;
        }

        #[allow(clippy::cast_possible_wrap)]
        let mut top = self.rand_below(self.modulus) as i32;
        while DIGITS > size {
            top /= 10;
            size += 1;
        }
        if self.top_limb > 0 {
            top %= self.top_limb;
        }
        out.value.push(top);

        while out.value.last() == Some(&0) {
            out.value.pop();
        }
        out
    }

    fn rand_below(&mut self, upper: u32) -> u32 {
        self.rng.random_range(0..upper)
    }
}
