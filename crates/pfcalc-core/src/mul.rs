//! Multiplication: schoolbook below the crossover, FFT convolution above.

use std::ops::{Mul, MulAssign};

use tracing::trace;

use pfcalc_pfafft::{fft_multiply, ConvolveError};

use crate::pfint::{PfInt, MODULUS};

/// Combined limb count at and above which multiplication goes through the
/// FFT convolution pipeline instead of the schoolbook loop.
pub const SS_THRESHOLD: usize = 220;

impl PfInt {
    /// Multiply, reporting the (practically unreachable) failure of the
    /// transform-length selector instead of panicking.
    pub fn checked_mul(&self, rhs: &PfInt) -> Result<PfInt, ConvolveError> {
        let combined = self.len() + rhs.len();
        if combined >= SS_THRESHOLD {
            trace!(combined, "dispatching to fft multiplication");
            let value = fft_multiply(&self.value, &rhs.value)?;
            Ok(PfInt { value })
        } else {
            Ok(self.schoolbook_mul(rhs))
        }
    }

    /// Plain O(n*m) multiplication: one row of 64-bit products per limb of
    /// `rhs`, folded into the accumulator with carries.
    ///
    /// Public so the FFT path can be cross-checked against it; prefer the
    /// `*` operator, which picks the faster path.
    #[must_use]
    pub fn schoolbook_mul(&self, rhs: &PfInt) -> PfInt {
        if self.is_zero() || rhs.is_zero() {
            return PfInt::new();
        }
        let my_sign = i64::from(self.sign());
        let rhs_sign = i64::from(rhs.sign());

        let mut acc = vec![0i32; self.len() + rhs.len() + 1];
        for (j, &r) in rhs.value.iter().enumerate() {
            let multiplier = rhs_sign * i64::from(r);
            let mut carry = 0i64;
            for (i, &l) in self.value.iter().enumerate() {
                let t = my_sign * i64::from(l) * multiplier + i64::from(acc[j + i]) + carry;
                carry = t / i64::from(MODULUS);
                #[allow(clippy::cast_possible_truncation)]
                {
                    acc[j + i] = (t % i64::from(MODULUS)) as i32;
                }
            }
            if carry != 0 {
                #[allow(clippy::cast_possible_truncation)]
                {
                    acc[j + self.len()] = carry as i32;
                }
            }
        }

        let mut out = PfInt { value: acc };
        out.normalize();
        if my_sign * rhs_sign < 0 {
            out.negate();
        }
        out
    }
}

impl PfInt {
    /// `base^exp` by binary exponentiation, top bit first.
    #[must_use]
    pub fn pow(base: i64, exp: u32) -> PfInt {
        if exp == 0 {
            return PfInt::from(1);
        }
        let base = PfInt::from(base);
        let mut result = base.clone();
        for bit in (0..exp.ilog2()).rev() {
            result = &result * &result;
            if exp & (1 << bit) != 0 {
                result = &result * &base;
            }
        }
        result
    }
}

impl Mul for &PfInt {
    type Output = PfInt;

    /// Panics if no transform length covers the operands, the same way
    /// `std` integer multiplication panics on overflow; use
    /// [`PfInt::checked_mul`] to handle that case.
    fn mul(self, rhs: &PfInt) -> PfInt {
        match self.checked_mul(rhs) {
            Ok(product) => product,
            Err(e) => panic!("multiplication failed: {e}"),
        }
    }
}

impl MulAssign<&PfInt> for PfInt {
    fn mul_assign(&mut self, rhs: &PfInt) {
        *self = &*self * rhs;
    }
}

impl Mul<i32> for &PfInt {
    type Output = PfInt;

    fn mul(self, rhs: i32) -> PfInt {
        self * &PfInt::from(rhs)
    }
}

impl MulAssign<i32> for PfInt {
    fn mul_assign(&mut self, rhs: i32) {
        *self = &*self * rhs;
    }
}
