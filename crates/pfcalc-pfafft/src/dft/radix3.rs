//! Length-3 rotated Winograd DFT kernel.

#![allow(clippy::excessive_precision)]

use super::rotate_output;
use crate::indices::advance;

/// Twiddle constants of the length-3 short DFT: the real part
/// `cos(2*pi/3) - 1` and the imaginary part `sin(2*pi/3)`.
const U: [f64; 2] = [
    -1.500000000000000,
    0.866025403784439,
];
/// Flow-graph input permutation.
const IP: [usize; 3] = [0, 1, 2];
/// Output permutation before rotation.
const OP: [usize; 3] = [0, 2, 1];

pub(crate) struct Radix3 {
    count: usize,
    start: [usize; 3],
    active_op: [usize; 3],
}

impl Radix3 {
    pub(crate) fn new(rotation: u32, count: usize, start: [usize; 3]) -> Self {
        Self {
            count,
            start,
            active_op: rotate_output(&OP, rotation),
        }
    }

    #[allow(clippy::too_many_lines)]
    pub(crate) fn evaluate(&self, re: &mut [f64], im: &mut [f64]) {
        let mut ind = self.start;
        let mut xr = [0.0f64; 3];
        let mut xi = [0.0f64; 3];
        let mut vr = [0.0f64; 3];
        let mut vi = [0.0f64; 3];
        let mut yr = [0.0f64; 3];
        let mut yi = [0.0f64; 3];

        for _ in 0..self.count {
            for px in 0..3 {
                xr[px] = re[ind[IP[px]]];
                xi[px] = im[ind[IP[px]]];
            }

            vr[1] = xr[1];
            vi[1] = xi[1];
            vr[1] += xr[2];
            vi[1] += xi[2];
            vr[2] = xr[1] - xr[2];
            vi[2] = xi[1] - xi[2];
            xr[1] = vr[1];
            xi[1] = vi[1];
            xr[2] = vr[2];
            xi[2] = vi[2];

            yr[0] = xr[0] + xr[1];
            yi[0] = xi[0] + xi[1];
            yr[1] = xr[1] * U[0];
            yi[1] = xi[1] * U[0];
            yr[2] = -xi[2] * U[1];
            yi[2] = xr[2] * U[1];
            yr[1] = yr[0] + yr[1];
            yi[1] = yi[0] + yi[1];

            vr[2] = yr[1];
            vi[2] = yi[1];
            vr[1] = yr[1] + yr[2];
            vi[1] = yi[1] + yi[2];
            vr[2] -= yr[2];
            vi[2] -= yi[2];
            yr[1] = vr[1];
            yi[1] = vi[1];
            yr[2] = vr[2];
            yi[2] = vi[2];

            for px in 0..3 {
                re[ind[px]] = yr[self.active_op[px]];
                im[ind[px]] = yi[self.active_op[px]];
            }
            advance(&mut ind);
        }
    }
}
