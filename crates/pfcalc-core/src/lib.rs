//! # pfcalc-core
//!
//! Arbitrary-precision signed decimal integers with FFT-accelerated
//! multiplication, plus the modular arithmetic and primality toolbox
//! built on top of them.
//!
//! ```
//! use std::str::FromStr;
//! use pfcalc_core::PfInt;
//!
//! let a = PfInt::from_str("2628461924971").unwrap();
//! assert_eq!((&a * 7).to_string(), "18399233474797");
//! ```

pub(crate) mod add;
pub mod io;
pub mod modular;
pub mod mul;
pub mod pfint;
pub mod primality;
pub mod prime_table;
pub mod random;

// Re-exports
pub use io::ParsePfIntError;
pub use modular::{modmult, modpow, rem, rem_quotient};
pub use mul::SS_THRESHOLD;
pub use pfint::{PfInt, MODULUS};
pub use primality::{checked_tonelli_shanks, jacobi, miller_rabin, tonelli_shanks};
pub use prime_table::PrimeTable;
pub use random::PfIntRandom;

pub use pfcalc_pfafft::ConvolveError;
