//! Sieve of Eratosthenes over the residues coprime to 20.
//!
//! Only odd non-multiples of 5 get a bit: the eight residue classes
//! {1, 3, 7, 9, 11, 13, 17, 19} mod 20 pack one byte per block of 20
//! integers, so a table up to `n` costs `n / 20` bytes.

/// Bit-packed primality table for small integers.
pub struct PrimeTable {
    table: Vec<u8>,
    size: u32,
}

impl PrimeTable {
    /// Sieve all integers below `size`.
    #[must_use]
    pub fn new(size: u32) -> Self {
        let mut table = vec![0xFFu8; size as usize / 20 + 1];
        let mut s = 3u64;
        while s * s < u64::from(size) {
            #[allow(clippy::cast_possible_truncation)]
            let p = s as u32;
            if Self::lookup(&table, p) {
                let mut i = p + p;
                while i < size {
                    if i % 2 != 0 && i % 5 != 0 {
                        table[i as usize / 20] &= !Self::bit_mask(i);
                    }
                    i += p;
                }
            }
            s += 2;
        }
        Self { table, size }
    }

    /// Is `n` prime? `n` must be below the sieved size.
    #[must_use]
    pub fn is_prime(&self, n: u32) -> bool {
        assert!(n < self.size, "query {n} beyond sieve limit {}", self.size);
        if n <= 1 {
            return false;
        }
        if n % 2 == 0 {
            return n == 2;
        }
        if n % 5 == 0 {
            return n == 5;
        }
        Self::lookup(&self.table, n)
    }

    fn lookup(table: &[u8], n: u32) -> bool {
        table[n as usize / 20] & Self::bit_mask(n) != 0
    }

    fn bit_mask(n: u32) -> u8 {
        match n % 20 {
            1 => 1,
            3 => 2,
            7 => 4,
            9 => 8,
            11 => 16,
            13 => 32,
            17 => 64,
            19 => 128,
            // even or divisible by 5; the callers filter these out
            _ => 0,
        }
    }
}
