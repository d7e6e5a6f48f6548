//! Property-based tests for the arithmetic and the transform pipeline.

use std::str::FromStr;

use num_bigint::BigInt;
use proptest::prelude::*;

use pfcalc_core::PfInt;
use pfcalc_pfafft::{fft_multiply, PrimeFactorDft};

/// Decimal string strategy, up to `max_digits` digits with optional sign
/// and no leading zero.
fn decimal(max_digits: usize) -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        1u8..10,
        proptest::collection::vec(0u8..10, 0..max_digits),
    )
        .prop_map(|(neg, first, rest)| {
            let mut s = String::with_capacity(rest.len() + 2);
            if neg {
                s.push('-');
            }
            s.push(char::from(b'0' + first));
            for d in rest {
                s.push(char::from(b'0' + d));
            }
            s
        })
}

fn oracle(s: &str) -> BigInt {
    BigInt::from_str(s).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Parsing and formatting are inverse operations.
    #[test]
    fn parse_display_roundtrip(s in decimal(120)) {
        let x = PfInt::from_str(&s).unwrap();
        prop_assert_eq!(x.to_string(), s);
    }

    /// Addition agrees with num-bigint.
    #[test]
    fn addition_against_oracle(a in decimal(90), b in decimal(90)) {
        let got = &PfInt::from_str(&a).unwrap() + &PfInt::from_str(&b).unwrap();
        prop_assert_eq!(got.to_string(), (oracle(&a) + oracle(&b)).to_string());
    }

    /// Subtraction agrees with num-bigint.
    #[test]
    fn subtraction_against_oracle(a in decimal(90), b in decimal(90)) {
        let got = &PfInt::from_str(&a).unwrap() - &PfInt::from_str(&b).unwrap();
        prop_assert_eq!(got.to_string(), (oracle(&a) - oracle(&b)).to_string());
    }

    /// Schoolbook multiplication agrees with num-bigint.
    #[test]
    fn schoolbook_against_oracle(a in decimal(60), b in decimal(60)) {
        let x = PfInt::from_str(&a).unwrap();
        let y = PfInt::from_str(&b).unwrap();
        prop_assert_eq!(
            x.schoolbook_mul(&y).to_string(),
            (oracle(&a) * oracle(&b)).to_string()
        );
    }

    /// The ordering on PfInt matches the integer ordering.
    #[test]
    fn ordering_against_oracle(a in decimal(40), b in decimal(40)) {
        let x = PfInt::from_str(&a).unwrap();
        let y = PfInt::from_str(&b).unwrap();
        prop_assert_eq!(x.cmp(&y), oracle(&a).cmp(&oracle(&b)));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    /// The FFT convolution path is exact wherever it runs.
    #[test]
    fn fft_multiply_against_oracle(a in decimal(400), b in decimal(400)) {
        let x = PfInt::from_str(&a).unwrap();
        let y = PfInt::from_str(&b).unwrap();
        let got = PfInt::from_limbs(fft_multiply(x.limbs(), y.limbs()).unwrap());
        prop_assert_eq!(got.to_string(), (oracle(&a) * oracle(&b)).to_string());
    }

    /// Forward then scaled-inverse restores arbitrary buffers.
    #[test]
    fn transform_roundtrip(seed in 0u64..1_000_000) {
        let mut engine = PrimeFactorDft::new();
        engine.set_factors(&[2, 3, 5, 7]).unwrap();
        let n = 210usize;

        // cheap deterministic pseudo-random buffer from the seed
        let mut state = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        let mut next = move || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % 2000) as f64 - 1000.0
        };
        let orig_re: Vec<f64> = (0..n).map(|_| next()).collect();
        let orig_im: Vec<f64> = (0..n).map(|_| next()).collect();

        let mut re = orig_re.clone();
        let mut im = orig_im.clone();
        engine.forward(&mut re, &mut im);
        engine.scaled_inverse(&mut re, &mut im);
        for i in 0..n {
            prop_assert!((re[i] - orig_re[i]).abs() < 1e-6);
            prop_assert!((im[i] - orig_im[i]).abs() < 1e-6);
        }
    }
}
