//! Addition, subtraction and bit shifts.
//!
//! Thanks to the limb headroom these are plain limbwise loops followed by
//! [`PfInt::normalize`]; no operand-size case analysis is needed.

use std::ops::{Add, AddAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign};

use crate::pfint::{PfInt, MODULUS};

impl AddAssign<&PfInt> for PfInt {
    fn add_assign(&mut self, rhs: &PfInt) {
        let shared = self.value.len().min(rhs.value.len());
        for i in 0..shared {
            self.value[i] += rhs.value[i];
        }
        self.value.extend_from_slice(&rhs.value[shared..]);
        self.normalize();
    }
}

impl SubAssign<&PfInt> for PfInt {
    fn sub_assign(&mut self, rhs: &PfInt) {
        let shared = self.value.len().min(rhs.value.len());
        for i in 0..shared {
            self.value[i] -= rhs.value[i];
        }
        for &l in &rhs.value[shared..] {
            self.value.push(-l);
        }
        self.normalize();
    }
}

impl AddAssign<i32> for PfInt {
    fn add_assign(&mut self, rhs: i32) {
        *self += &PfInt::from(rhs);
    }
}

impl SubAssign<i32> for PfInt {
    fn sub_assign(&mut self, rhs: i32) {
        *self -= &PfInt::from(rhs);
    }
}

impl Add for &PfInt {
    type Output = PfInt;

    fn add(self, rhs: &PfInt) -> PfInt {
        let mut out = self.clone();
        out += rhs;
        out
    }
}

impl Sub for &PfInt {
    type Output = PfInt;

    fn sub(self, rhs: &PfInt) -> PfInt {
        let mut out = self.clone();
        out -= rhs;
        out
    }
}

impl Add<i32> for &PfInt {
    type Output = PfInt;

    fn add(self, rhs: i32) -> PfInt {
        let mut out = self.clone();
        out += rhs;
        out
    }
}

impl Sub<i32> for &PfInt {
    type Output = PfInt;

    fn sub(self, rhs: i32) -> PfInt {
        let mut out = self.clone();
        out -= rhs;
        out
    }
}

impl ShlAssign<u32> for PfInt {
    /// Multiply by `2^shift`, one doubling pass per bit over the magnitude.
    fn shl_assign(&mut self, shift: u32) {
        if self.value.is_empty() {
            return;
        }
        let negative = self.is_negative();
        if negative {
            self.negate();
        }
        for _ in 0..shift {
            let mut carry = 0;
            for l in &mut self.value {
                *l <<= 1;
                *l += carry;
                if *l >= MODULUS {
                    *l -= MODULUS;
                    carry = 1;
                } else {
                    carry = 0;
                }
            }
            if carry != 0 {
                self.value.push(1);
            }
        }
        if negative {
            self.negate();
        }
    }
}

impl ShrAssign<u32> for PfInt {
    /// Divide by `2^shift`, truncating towards zero.
    fn shr_assign(&mut self, shift: u32) {
        if shift == 0 || self.value.is_empty() {
            return;
        }
        let negative = self.is_negative();
        if negative {
            self.negate();
        }
        for _ in 0..shift {
            let mut carry = 0;
            for i in (0..self.value.len()).rev() {
                if carry != 0 {
                    self.value[i] += MODULUS;
                }
                carry = self.value[i] & 1;
                self.value[i] >>= 1;
            }
            if self.value.last() == Some(&0) {
                self.value.pop();
            }
        }
        if negative {
            self.negate();
        }
        self.normalize();
    }
}

impl Shl<u32> for &PfInt {
    type Output = PfInt;

    fn shl(self, shift: u32) -> PfInt {
        let mut out = self.clone();
        out <<= shift;
        out
    }
}

impl Shr<u32> for &PfInt {
    type Output = PfInt;

    fn shr(self, shift: u32) -> PfInt {
        let mut out = self.clone();
        out >>= shift;
        out
    }
}
