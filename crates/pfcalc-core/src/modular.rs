//! Division with remainder and modular arithmetic.
//!
//! Division runs a reciprocal iteration: a one-limb reciprocal of the
//! divisor's leading limb turns each step into multiply-and-shift, and the
//! quotient estimate is refined until the remainder drops below the
//! divisor. Exact for the positive moduli the number-theoretic callers use.

use crate::pfint::{PfInt, MODULUS};

/// Remainder of `a / m`, optionally also yielding the quotient.
///
/// # Panics
///
/// Panics on a zero modulus, like `std` integer division.
pub fn rem_quotient(a: &PfInt, m: &PfInt, quotient: Option<&mut PfInt>) -> PfInt {
    assert!(!m.is_zero(), "division by zero");

    if a.len() == 1 && m.len() == 1 {
        if let Some(q) = quotient {
            *q = PfInt::from(a.limb(0) / m.limb(0));
        }
        return PfInt::from(a.limb(0) % m.limb(0));
    }

    let reciprocal = MODULUS / (2 + m.limb(m.len() - 1));
    let shift = m.len();
    let reciprocal_big = PfInt::from(reciprocal);

    let mut rem = &PfInt::from(reciprocal) * a;
    if !rem.is_zero() {
        for _ in 0..shift {
            rem.div_modulus();
        }
    }

    let mut estimate;
    loop {
        estimate = rem.clone();
        rem *= m;
        rem.negate();
        rem += a;
        // the estimate is exact enough once the residue drops below the
        // divisor
        if m.abs_gt(&rem) {
            break;
        }
        rem *= &reciprocal_big;
        for _ in 0..shift {
            rem.div_modulus();
        }
        if rem.is_zero() {
            rem = PfInt::from(1);
        }
        rem += &estimate;
    }

    if rem.is_negative() {
        rem += m;
        estimate -= 1;
    }
    if let Some(q) = quotient {
        *q = estimate;
    }
    rem
}

/// `a mod m`, discarding the quotient.
#[must_use]
pub fn rem(a: &PfInt, m: &PfInt) -> PfInt {
    rem_quotient(a, m, None)
}

/// `a * b mod m` by shift-and-add, reducing after every step.
#[must_use]
pub fn modmult(a: &PfInt, b: &PfInt, m: &PfInt) -> PfInt {
    let mut result = PfInt::new();
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        if b.limb(0) & 1 == 1 {
            result += &a;
            result = rem(&result, m);
        }
        a = &a + &a;
        a = rem(&a, m);
        b >>= 1;
    }
    result
}

/// `a ^ b mod m` by square-and-multiply.
#[must_use]
pub fn modpow(a: &PfInt, b: &PfInt, m: &PfInt) -> PfInt {
    let mut result = PfInt::from(1);
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        if b.limb(0) & 1 == 1 {
            result = modmult(&result, &a, m);
        }
        a = modmult(&a, &a, m);
        b >>= 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn pf(x: i64) -> PfInt {
        PfInt::from(x)
    }

    #[test]
    fn small_division() {
        let mut q = PfInt::new();
        let r = rem_quotient(&pf(17), &pf(5), Some(&mut q));
        assert_eq!(r, pf(2));
        assert_eq!(q, pf(3));
    }

    #[test]
    fn multi_limb_division() {
        let mut q = PfInt::new();
        let r = rem_quotient(&pf(4_026_531_840), &pf(2_147_483_647), Some(&mut q));
        assert_eq!(r, pf(1_879_048_193));
        assert_eq!(q, pf(1));
    }

    #[test]
    fn division_against_i128() {
        let pairs: [(i128, i128); 5] = [
            (123_456_789_012_345_678_901_234_567, 1_000_003),
            (999_999_999_999_999_999, 2_147_483_647),
            (1_000_000_000_000_000_000, 999_999_937),
            (31_415_926_535_897_932_384_626_433, 27_182_818_284_590_452),
            (5_127_821_565_631_733, 1_000_000_007),
        ];
        for (a, m) in pairs {
            let (pa, pm) = (
                PfInt::from_str(&a.to_string()).unwrap(),
                PfInt::from_str(&m.to_string()).unwrap(),
            );
            let mut q = PfInt::new();
            let r = rem_quotient(&pa, &pm, Some(&mut q));
            assert_eq!(r.to_string(), (a % m).to_string(), "rem of {a} / {m}");
            assert_eq!(q.to_string(), (a / m).to_string(), "quot of {a} / {m}");
        }
    }

    #[test]
    fn zero_dividend() {
        let r = rem(&PfInt::new(), &pf(1_000_000_007_000));
        assert!(r.is_zero());
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn division_by_zero_panics() {
        rem(&pf(5), &PfInt::new());
    }

    #[test]
    fn modmult_matches_direct() {
        let m = pf(2_147_483_647);
        let a = pf(4_026_531_840);
        let b = pf(1_073_741_824);
        let want = (4_026_531_840i128 * 1_073_741_824) % 2_147_483_647;
        assert_eq!(modmult(&a, &b, &m).to_string(), want.to_string());
    }

    #[test]
    fn modpow_fermat_little() {
        // a^(p-1) = 1 mod p for prime p not dividing a
        let p = pf(1_000_000_007);
        for a in [2i64, 3, 65_537, 999_999_999] {
            let r = modpow(&pf(a), &(&p - 1), &p);
            assert!(r.is_one(), "fermat failed for {a}");
        }
    }

    #[test]
    fn modpow_zero_exponent_is_one() {
        assert!(modpow(&pf(12_345), &PfInt::new(), &pf(97)).is_one());
    }
}
