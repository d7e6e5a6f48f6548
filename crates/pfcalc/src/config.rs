//! Application configuration from CLI flags and environment.

use clap::{Parser, Subcommand, ValueEnum};

/// PFCalc: big integer arithmetic driven by a prime-factor FFT.
#[derive(Parser, Debug)]
#[command(name = "pfcalc", version, about)]
pub struct AppConfig {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Which multiplication path to take.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MulPath {
    /// Pick by operand size.
    #[default]
    Auto,
    /// Force the O(n^2) loop.
    Schoolbook,
    /// Force the FFT convolution.
    Fft,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Multiply two decimal integers.
    Mul {
        /// First operand.
        a: String,
        /// Second operand.
        b: String,
        /// Multiplication path.
        #[arg(long, value_enum, default_value_t = MulPath::Auto)]
        path: MulPath,
    },

    /// Probabilistic primality test.
    Prime {
        /// Number under test.
        n: String,
        /// Miller-Rabin witness count.
        #[arg(long, default_value = "30", env = "PFCALC_WITNESSES")]
        witnesses: u32,
    },

    /// Square root of N modulo the odd prime P.
    Sqrtmod {
        /// The residue.
        n: String,
        /// The prime modulus.
        p: String,
    },

    /// Smallest achievable transform length covering a request.
    Fftlen {
        /// Requested minimum length.
        min_len: u64,
        /// Use at most this many distinct radices.
        #[arg(long)]
        max_factors: Option<u32>,
    },
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
