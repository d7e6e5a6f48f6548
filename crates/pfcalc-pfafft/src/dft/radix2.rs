//! Length-2 DFT kernel.
//!
//! The butterfly is its own inverse and its own rotation, so unlike the
//! odd-radix kernels there are no permutation tables and the rotation is
//! ignored.

use crate::indices::advance;

pub(crate) struct Radix2 {
    count: usize,
    start: [usize; 2],
}

impl Radix2 {
    pub(crate) fn new(_rotation: u32, count: usize, start: [usize; 2]) -> Self {
        Self { count, start }
    }

    pub(crate) fn evaluate(&self, re: &mut [f64], im: &mut [f64]) {
        let mut ind = self.start;
        for _ in 0..self.count {
            let (a, b) = (ind[0], ind[1]);
            let t1r = re[a] + re[b];
            let t1i = im[a] + im[b];
            let t2r = re[a] - re[b];
            let t2i = im[a] - im[b];
            re[a] = t1r;
            im[a] = t1i;
            re[b] = t2r;
            im[b] = t2i;
            advance(&mut ind);
        }
    }
}
