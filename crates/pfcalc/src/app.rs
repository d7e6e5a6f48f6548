//! Application entry point and dispatch.

use std::str::FromStr;

use anyhow::{bail, Context, Result};

use pfcalc_core::{
    jacobi, miller_rabin, modmult, pfint::MODULUS, rem, tonelli_shanks, PfInt, PfIntRandom,
    PrimeTable,
};
use pfcalc_pfafft::{calc_factors, fft_multiply};

use crate::config::{AppConfig, Command, MulPath};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    match &config.command {
        Command::Mul { a, b, path } => run_mul(a, b, *path, config.verbose),
        Command::Prime { n, witnesses } => run_prime(n, *witnesses),
        Command::Sqrtmod { n, p } => run_sqrtmod(n, p),
        Command::Fftlen {
            min_len,
            max_factors,
        } => run_fftlen(*min_len, *max_factors),
    }
}

fn parse(s: &str) -> Result<PfInt> {
    PfInt::from_str(s).with_context(|| format!("cannot parse {s:?} as an integer"))
}

fn run_mul(a: &str, b: &str, path: MulPath, verbose: bool) -> Result<()> {
    let a = parse(a)?;
    let b = parse(b)?;
    let product = match path {
        MulPath::Auto => a.checked_mul(&b)?,
        MulPath::Schoolbook => a.schoolbook_mul(&b),
        MulPath::Fft => PfInt::from_limbs(fft_multiply(a.limbs(), b.limbs())?),
    };
    if verbose {
        eprintln!(
            "{} limbs x {} limbs -> {} limbs",
            a.len(),
            b.len(),
            product.len()
        );
    }
    println!("{product}");
    Ok(())
}

/// Sieve ceiling for exact small-number answers.
const SIEVE_LIMIT: u32 = 10_000_000;

#[allow(clippy::cast_sign_loss)]
fn run_prime(n: &str, witnesses: u32) -> Result<()> {
    let n = parse(n)?;
    if n.is_negative() {
        bail!("primality is defined for non-negative numbers");
    }

    // small numbers get an exact sieve answer; Miller-Rabin only handles
    // odd inputs anyway
    if n.len() <= 1 && n.limb(0) < SIEVE_LIMIT as i32 {
        let table = PrimeTable::new(SIEVE_LIMIT);
        if table.is_prime(n.limb(0) as u32) {
            println!("{n} is prime");
        } else {
            println!("{n} is composite");
        }
        return Ok(());
    }

    let mut rng = PfIntRandom::new(MODULUS as u32);
    if miller_rabin(&n, witnesses, &mut rng) {
        println!("{n} is probably prime ({witnesses} witnesses)");
    } else {
        println!("{n} is composite");
    }
    Ok(())
}

#[allow(clippy::cast_sign_loss)]
fn run_sqrtmod(n: &str, p: &str) -> Result<()> {
    let n = parse(n)?;
    let p = parse(p)?;
    let mut rng = PfIntRandom::new(MODULUS as u32);
    if !miller_rabin(&p, 30, &mut rng) {
        bail!("{p} is not prime");
    }
    match tonelli_shanks(&n, &p, &mut rng) {
        Some(root) => {
            // self-check before printing
            let square = rem(&modmult(&root, &root, &p), &p);
            debug_assert_eq!(square, rem(&n, &p));
            println!("{root}");
            Ok(())
        }
        None => {
            bail!("{n} is not a quadratic residue mod {p} (jacobi {})", jacobi(&n, &p))
        }
    }
}

fn run_fftlen(min_len: u64, max_factors: Option<u32>) -> Result<()> {
    match calc_factors(min_len, max_factors) {
        Some((length, factors)) => {
            println!("{length} = {factors:?}");
            Ok(())
        }
        None => bail!("no achievable transform length covers {min_len}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse("12x").is_err());
        assert!(parse("123").is_ok());
    }

    #[test]
    fn mul_paths_agree() {
        let a = parse("2628461924971").unwrap();
        let b = parse("7").unwrap();
        let school = a.schoolbook_mul(&b);
        let fft = PfInt::from_limbs(fft_multiply(a.limbs(), b.limbs()).unwrap());
        assert_eq!(school, fft);
        assert_eq!(school.to_string(), "18399233474797");
    }
}
