#![no_main]

use libfuzzer_sys::fuzz_target;

use pfcalc_core::PfInt;
use pfcalc_pfafft::fft_multiply;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // split the input into two limb vectors, 4 bytes per limb
    let (left, right) = data.split_at(data.len() / 2);
    let a = PfInt::from_limbs(to_limbs(left));
    let b = PfInt::from_limbs(to_limbs(right));

    let school = a.schoolbook_mul(&b);
    let fft = PfInt::from_limbs(fft_multiply(a.limbs(), b.limbs()).expect("length available"));
    assert_eq!(school, fft, "paths disagree for {} x {} limbs", a.len(), b.len());
});

fn to_limbs(bytes: &[u8]) -> Vec<i32> {
    bytes
        .chunks(4)
        .map(|c| {
            let mut word = [0u8; 4];
            word[..c.len()].copy_from_slice(c);
            (i32::from_le_bytes(word).rem_euclid(1_000_000_000)).abs()
        })
        .collect()
}
