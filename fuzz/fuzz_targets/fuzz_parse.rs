#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str::FromStr;

use num_bigint::BigInt;
use pfcalc_core::PfInt;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let ours = PfInt::from_str(text);
    let theirs = BigInt::from_str(text.trim());

    match (ours, theirs) {
        (Ok(x), Ok(y)) => {
            // same value, and our formatting parses back to the same value
            assert_eq!(x.to_string(), y.to_string(), "value mismatch for {text:?}");
            let back = PfInt::from_str(&x.to_string()).expect("own output must parse");
            assert_eq!(back, x, "display/parse roundtrip broke for {text:?}");
        }
        (Ok(x), Err(_)) => {
            // we accept a few shapes num-bigint rejects (e.g. "-0"); the
            // parsed value must still format canonically
            let back = PfInt::from_str(&x.to_string()).expect("own output must parse");
            assert_eq!(back, x);
        }
        (Err(_), Ok(y)) => {
            // we reject leading '+' that num-bigint accepts
            assert!(
                text.trim_start().starts_with('+'),
                "rejected {text:?} that the oracle parses as {y}"
            );
        }
        (Err(_), Err(_)) => {}
    }
});
