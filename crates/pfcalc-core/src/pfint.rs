//! The `PfInt` arbitrary-precision signed integer.
//!
//! A `PfInt` is a normalized vector of radix-10^9 limbs, least significant
//! first:
//!
//! - an empty vector means 0;
//! - all non-zero limbs share one sign and lie in the open interval
//!   `(-10^9, 10^9)`;
//! - the most significant limb is non-zero.
//!
//! The one-bit headroom at both ends of the limb range makes addition and
//! subtraction plain limbwise operations; [`PfInt::normalize`] restores the
//! invariant afterwards.

use std::cmp::Ordering;

/// Radix of one limb.
pub const MODULUS: i32 = 1_000_000_000;

/// Limb capacity reserved by fresh values.
const RESERVATION: usize = 8;

/// Normalized signed big integer in radix 10^9.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PfInt {
    pub(crate) value: Vec<i32>,
}

impl PfInt {
    /// The value 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: Vec::with_capacity(RESERVATION),
        }
    }

    /// Number of limbs (0 for the value 0).
    #[must_use]
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// True for the value 0.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.is_empty()
    }

    /// True for the value 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.value == [1]
    }

    /// True for the value -1.
    #[must_use]
    pub fn is_minus_one(&self) -> bool {
        self.value == [-1]
    }

    /// True for values strictly above 0.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.value.last().is_some_and(|&l| l > 0)
    }

    /// True for values strictly below 0.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.value.last().is_some_and(|&l| l < 0)
    }

    /// -1, 0 or 1. Zero is neither positive nor negative.
    #[must_use]
    pub fn sign(&self) -> i32 {
        match self.value.last() {
            None => 0,
            Some(&l) if l > 0 => 1,
            Some(_) => -1,
        }
    }

    /// Limb `index`, or 0 past the most significant limb.
    ///
    /// Limbs of negative values are themselves negative.
    #[must_use]
    pub fn limb(&self, index: usize) -> i32 {
        self.value.get(index).copied().unwrap_or(0)
    }

    /// The raw limb slice, least significant first.
    #[must_use]
    pub fn limbs(&self) -> &[i32] {
        &self.value
    }

    /// Assemble a value from radix-10^9 limbs, normalizing as needed.
    #[must_use]
    pub fn from_limbs(value: Vec<i32>) -> Self {
        let mut out = Self { value };
        out.normalize();
        out
    }

    /// Flip the sign in place.
    pub fn negate(&mut self) {
        for l in &mut self.value {
            *l = -*l;
        }
    }

    /// True when `|self| > |other|`.
    #[must_use]
    pub fn abs_gt(&self, other: &PfInt) -> bool {
        match self.len().cmp(&other.len()) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => {
                let self_neg = self.is_negative();
                let other_neg = other.is_negative();
                for i in (0..self.len()).rev() {
                    let a = if self_neg { -self.value[i] } else { self.value[i] };
                    let b = if other_neg { -other.value[i] } else { other.value[i] };
                    match a.cmp(&b) {
                        Ordering::Greater => return true,
                        Ordering::Less => return false,
                        Ordering::Equal => {}
                    }
                }
                false
            }
        }
    }

    /// Drop the least significant limb: exact division by 10^9 for values
    /// that are limb-aligned, used by the division loop.
    pub(crate) fn div_modulus(&mut self) {
        if !self.value.is_empty() {
            self.value.remove(0);
        }
    }

    /// Restore the representation invariant after limbwise arithmetic:
    /// strip leading zeros, run both carry directions, then force every
    /// limb onto the sign of the most significant one.
    pub(crate) fn normalize(&mut self) {
        let val = &mut self.value;
        while val.last() == Some(&0) {
            val.pop();
        }
        if val.is_empty() {
            return;
        }

        // low-to-high positive carry
        let mut carry = 0;
        for l in val.iter_mut() {
            *l += carry;
            if *l >= MODULUS {
                carry = 1;
                *l -= MODULUS;
            } else {
                carry = 0;
            }
        }
        if carry != 0 {
            val.push(carry);
        }

        // low-to-high negative carry
        carry = 0;
        for l in val.iter_mut() {
            *l += carry;
            if *l <= -MODULUS {
                carry = -1;
                *l += MODULUS;
            } else {
                carry = 0;
            }
        }
        if carry != 0 {
            val.push(carry);
        }

        // all limbs are now inside (-MODULUS, MODULUS); make the signs agree
        carry = 0;
        let msl = *val.last().unwrap_or(&0);
        if msl < 0 {
            for l in val.iter_mut() {
                *l += carry;
                carry = 0;
                if *l > 0 {
                    *l -= MODULUS;
                    carry = 1;
                }
            }
        } else if msl > 0 {
            for l in val.iter_mut() {
                *l += carry;
                carry = 0;
                if *l < 0 {
                    *l += MODULUS;
                    carry = -1;
                }
            }
        }
        if carry != 0 {
            val.push(carry);
        }
        while val.last() == Some(&0) {
            val.pop();
        }
    }

    /// Multiply by 10 in place. Only the parser needs this.
    pub(crate) fn mul10(&mut self) {
        let mut carry = 0i64;
        for l in &mut self.value {
            let mut t = i64::from(*l) * 10 + carry;
            carry = 0;
            if t >= i64::from(MODULUS) {
                carry = t / i64::from(MODULUS);
                t %= i64::from(MODULUS);
            }
            #[allow(clippy::cast_possible_truncation)]
            {
                *l = t as i32;
            }
        }
        if carry != 0 {
            #[allow(clippy::cast_possible_truncation)]
            self.value.push(carry as i32);
        }
    }
}

impl From<i64> for PfInt {
    fn from(x: i64) -> Self {
        let mut value = Vec::with_capacity(RESERVATION);
        let mut magnitude = x.unsigned_abs();
        while magnitude != 0 {
            #[allow(clippy::cast_possible_truncation)]
            value.push((magnitude % MODULUS as u64) as i32);
            magnitude /= MODULUS as u64;
        }
        if x < 0 {
            for l in &mut value {
                *l = -*l;
            }
        }
        Self { value }
    }
}

impl From<i32> for PfInt {
    fn from(x: i32) -> Self {
        Self::from(i64::from(x))
    }
}

impl PartialOrd for PfInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PfInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign().cmp(&other.sign()) {
            Ordering::Equal => {}
            ord => return ord,
        }
        if self.sign() >= 0 {
            // both non-negative: longer is larger, then limbs from the top
            match self.len().cmp(&other.len()) {
                Ordering::Equal => {}
                ord => return ord,
            }
            for i in (0..self.len()).rev() {
                match self.value[i].cmp(&other.value[i]) {
                    Ordering::Equal => {}
                    ord => return ord,
                }
            }
            Ordering::Equal
        } else {
            // both negative: longer is smaller
            match other.len().cmp(&self.len()) {
                Ordering::Equal => {}
                ord => return ord,
            }
            for i in (0..self.len()).rev() {
                match self.value[i].cmp(&other.value[i]) {
                    Ordering::Equal => {}
                    ord => return ord,
                }
            }
            Ordering::Equal
        }
    }
}

impl std::ops::Neg for PfInt {
    type Output = PfInt;

    fn neg(mut self) -> PfInt {
        self.negate();
        self
    }
}

impl std::ops::Neg for &PfInt {
    type Output = PfInt;

    fn neg(self) -> PfInt {
        let mut out = self.clone();
        out.negate();
        out
    }
}
