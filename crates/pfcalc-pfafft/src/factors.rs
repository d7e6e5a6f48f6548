//! Transform-length factor selection and validation.
//!
//! A transform length is a product of a subset of the nine supported prime
//! radices, each used at most once. Selection offers a fast table-scan path
//! for the multiplication driver and an exhaustive subset enumeration for
//! callers that want to bound the factor count.

/// The prime lengths for which a DFT kernel exists.
pub const SUPPORTED_RADICES: [u32; 9] = [2, 3, 5, 7, 11, 13, 17, 19, 31];

/// Rejection reasons for a proposed factor list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FactorError {
    /// A factor is not one of the nine supported radices.
    #[error("unsupported transform factor {0}")]
    Unsupported(u32),

    /// A supported radix appears more than once.
    #[error("duplicated transform factor {0}")]
    Duplicate(u32),
}

/// Validate a factor list and return the transform length it spans.
///
/// `Ok(0)` for an empty list (no transform configured). Runs before any
/// kernel is constructed.
pub fn validate_factors(factors: &[u32]) -> Result<u64, FactorError> {
    if factors.is_empty() {
        return Ok(0);
    }
    let mut counts = [0u32; 9];
    for &f in factors {
        match SUPPORTED_RADICES.iter().position(|&r| r == f) {
            Some(slot) => counts[slot] += 1,
            None => return Err(FactorError::Unsupported(f)),
        }
    }
    for (slot, &c) in counts.iter().enumerate() {
        if c > 1 {
            return Err(FactorError::Duplicate(SUPPORTED_RADICES[slot]));
        }
    }
    let mut length = 1u64;
    for (slot, &c) in counts.iter().enumerate() {
        if c == 1 {
            length *= u64::from(SUPPORTED_RADICES[slot]);
        }
    }
    Ok(length)
}

/// Achievable transform lengths, ascending, starting where convolution-based
/// multiplication becomes worthwhile. Entries below 806 (31, 51, 70, ...)
/// are dropped because the schoolbook crossover never requests them; extend
/// downward if the threshold changes.
const LENGTH_TABLE: [u64; 33] = [
    806, 1209, 1870, 2470, 3705, 5005, 7106, 10013, 15314, 22971, 38285, 53599, 84227, 130169,
    202895, 300390, 452166, 680295, 1051365, 1542002, 2102730, 3537534, 5275270, 7159295, 10023013,
    14318590, 20046026, 30069039, 42955770, 60138078, 100230130, 150345195, 300690390,
];

/// Decompose an achievable length into its radix list by trial division.
fn refactor(length: u64) -> Vec<u32> {
    SUPPORTED_RADICES
        .iter()
        .copied()
        .filter(|&r| length % u64::from(r) == 0)
        .collect()
}

/// Fast path: scan the precomputed table for the first achievable length
/// past `min_len` and refactor it.
///
/// The comparison is strictly greater, so the answer exceeds the request
/// even on an exact table hit. `None` when `min_len` reaches beyond the
/// table ceiling, the only failure mode; callers must size the table to
/// their largest expected operand.
pub fn fast_calc_factors(min_len: u64) -> Option<(u64, Vec<u32>)> {
    let length = LENGTH_TABLE.iter().copied().find(|&l| l > min_len)?;
    Some((length, refactor(length)))
}

/// Exhaustive path: enumerate all 512 radix subsets, optionally discarding
/// those using more than `max_factors` distinct radices, and pick the
/// smallest product reaching `min_len`.
pub fn calc_factors(min_len: u64, max_factors: Option<u32>) -> Option<(u64, Vec<u32>)> {
    let mut lengths = Vec::with_capacity(512);
    for mask in 0u32..512 {
        if let Some(limit) = max_factors {
            if mask.count_ones() > limit {
                continue;
            }
        }
        let mut product = 1u64;
        for (bit, &r) in SUPPORTED_RADICES.iter().enumerate() {
            if mask & (1 << bit) != 0 {
                product *= u64::from(r);
            }
        }
        lengths.push(product);
    }
    lengths.sort_unstable();
    let length = lengths.into_iter().find(|&l| l >= min_len)?;
    Some((length, refactor(length)))
}
