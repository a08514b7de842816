// Copyright 2024 The PECOS Developers
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except
// in compliance with the License.You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License
// is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express
// or implied. See the License for the specific language governing permissions and limitations under
// the License.

//! Word-packed Pauli strings and the bit-sliced algebra shared by `Tableau`
//! rows and standalone gate constants.
//!
//! A qubit's Pauli factor is stored as an `(x, z)` bit pair: `(0,0) = I`,
//! `(1,0) = X`, `(0,1) = Z`, `(1,1) = Y`. The free functions here
//! (`log_i_byproduct`, `mul_into_rows`, `commutes`) operate directly on
//! word slices so they work identically on an owned `PauliString`'s
//! backing vectors and on a row borrowed out of a `Tableau` quadrant's
//! `BitMatrix` (which is exactly what `Tableau` does; see `tableau.rs`).

use pecos_core::bit_matrix::words_for_bits;
use std::fmt;

#[inline]
#[must_use]
pub fn get_bit(words: &[u64], i: usize) -> bool {
    (words[i / 64] >> (i % 64)) & 1 != 0
}

#[inline]
pub fn set_bit(words: &mut [u64], i: usize, value: bool) {
    let mask = 1u64 << (i % 64);
    if value {
        words[i / 64] |= mask;
    } else {
        words[i / 64] &= !mask;
    }
}

#[inline]
pub fn toggle_bit(words: &mut [u64], i: usize) {
    words[i / 64] ^= 1u64 << (i % 64);
}

/// The mod-4 i-power byproduct of multiplying the Pauli string at
/// `(dst_xs, dst_zs)` by the one at `(src_xs, src_zs)`, ignoring sign.
///
/// Transcribed from the original's `log_i_scalar_byproduct`: a per-word
/// accumulator pair is XORed across every word, then the final popcount
/// of each accumulator combines into the mod-4 tally. The original runs
/// this 256 bits at a time across four 64-bit lanes that are summed at
/// the end; nothing in the combine step depends on the lane width, so it
/// is reproduced here one 64-bit word at a time with the same running
/// accumulators.
#[must_use]
pub fn log_i_byproduct(dst_xs: &[u64], dst_zs: &[u64], src_xs: &[u64], src_zs: &[u64]) -> u8 {
    let w = dst_xs.len().min(src_xs.len());
    let mut cnt1: u64 = 0;
    let mut cnt2: u64 = 0;
    for i in 0..w {
        let x1 = dst_xs[i];
        let z1 = dst_zs[i];
        let x2 = src_xs[i];
        let z2 = src_zs[i];
        let t1 = x1 & z2;
        let t2 = x2 & z1;
        let a = t1 ^ t2;
        let b = ((x1 ^ z2) & t2) ^ (!z1 & !x2 & t1);
        cnt1 ^= b;
        cnt2 ^= cnt1 & a;
        cnt1 ^= a ^ b;
    }
    let mut s = cnt1.count_ones();
    s ^= cnt2.count_ones() << 1;
    (s & 3) as u8
}

/// XORs `(src_xs, src_zs)` into `(dst_xs, dst_zs)` and returns the mod-4
/// i-power byproduct, with the source's sign already folded into bit 1
/// (matching `PauliStringPtr::inplace_right_mul_with_scalar_output`).
pub fn mul_into_rows(
    dst_xs: &mut [u64],
    dst_zs: &mut [u64],
    src_xs: &[u64],
    src_zs: &[u64],
    src_sign: bool,
) -> u8 {
    let w = dst_xs.len().min(src_xs.len());
    let mut log_i = log_i_byproduct(&dst_xs[..w], &dst_zs[..w], &src_xs[..w], &src_zs[..w]);
    log_i ^= u8::from(src_sign) << 1;
    for i in 0..w {
        dst_xs[i] ^= src_xs[i];
        dst_zs[i] ^= src_zs[i];
    }
    log_i
}

/// True iff the two Pauli strings commute: the popcount of
/// `(x1 & z2) ^ (x2 & z1)` is even.
#[must_use]
pub fn commutes(xs1: &[u64], zs1: &[u64], xs2: &[u64], zs2: &[u64]) -> bool {
    let w = xs1.len().min(xs2.len());
    let mut acc: u64 = 0;
    for i in 0..w {
        acc ^= (xs1[i] & zs2[i]) ^ (xs2[i] & zs1[i]);
    }
    acc.count_ones() % 2 == 0
}

/// An owned, word-packed Pauli string of arbitrary length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PauliString {
    pub len: usize,
    pub sign: bool,
    pub xs: Vec<u64>,
    pub zs: Vec<u64>,
}

impl PauliString {
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        let w = words_for_bits(len);
        Self {
            len,
            sign: false,
            xs: vec![0; w],
            zs: vec![0; w],
        }
    }

    #[inline]
    #[must_use]
    pub fn get_x_bit(&self, k: usize) -> bool {
        get_bit(&self.xs, k)
    }

    #[inline]
    #[must_use]
    pub fn get_z_bit(&self, k: usize) -> bool {
        get_bit(&self.zs, k)
    }

    #[inline]
    pub fn set_x_bit(&mut self, k: usize, value: bool) {
        set_bit(&mut self.xs, k, value);
    }

    #[inline]
    pub fn set_z_bit(&mut self, k: usize, value: bool) {
        set_bit(&mut self.zs, k, value);
    }

    /// Builds a Pauli string from a per-position character callback, as
    /// the original's `PauliStringVal::from_pattern` does.
    ///
    /// # Panics
    /// Panics if `func` returns a character other than `_`, `I`, `X`,
    /// `Y`, or `Z`.
    #[must_use]
    pub fn from_pattern(sign: bool, len: usize, func: impl Fn(usize) -> char) -> Self {
        let mut result = Self::zeros(len);
        result.sign = sign;
        for i in 0..len {
            let (x, z) = match func(i) {
                'X' => (true, false),
                'Y' => (true, true),
                'Z' => (false, true),
                '_' | 'I' => (false, false),
                c => panic!("unrecognized pauli character: {c}"),
            };
            result.set_x_bit(i, x);
            result.set_z_bit(i, z);
        }
        result
    }

    /// Parses a pattern like `"-IXYZ"`: an optional leading `+`/`-` sign
    /// followed by one `_`/`I`/`X`/`Y`/`Z` character per qubit.
    ///
    /// # Panics
    /// Panics on an unrecognized Pauli character.
    #[must_use]
    pub fn from_str_pattern(text: &str) -> Self {
        let (sign, rest) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };
        let chars: Vec<char> = rest.chars().collect();
        Self::from_pattern(sign, chars.len(), |i| chars[i])
    }

    /// Multiplies `self` by `other` in place, asserting the product is
    /// real (the two strings commute). Mirrors `PauliStringPtr::operator*=`.
    ///
    /// # Panics
    /// In debug builds, panics if `self` and `other` anticommute.
    pub fn multiply_commuting(&mut self, other: &Self) {
        debug_assert_eq!(self.len, other.len);
        let log_i = mul_into_rows(&mut self.xs, &mut self.zs, &other.xs, &other.zs, other.sign);
        debug_assert_eq!(log_i & 1, 0, "multiplying anticommuting Pauli strings");
        if log_i & 2 != 0 {
            self.sign ^= true;
        }
    }

    #[must_use]
    pub fn commutes(&self, other: &Self) -> bool {
        commutes(&self.xs, &self.zs, &other.xs, &other.zs)
    }

    /// Gathers the bits at `indices` (in order) into a shorter Pauli
    /// string of length `indices.len()`. Sign is carried through.
    #[must_use]
    pub fn gather(&self, indices: &[usize]) -> Self {
        let mut out = Self::zeros(indices.len());
        out.sign = self.sign;
        for (k_out, &k_in) in indices.iter().enumerate() {
            out.set_x_bit(k_out, self.get_x_bit(k_in));
            out.set_z_bit(k_out, self.get_z_bit(k_in));
        }
        out
    }

    /// Scatters `self`'s bits out to a longer Pauli string of length
    /// `out_len`, placing bit `k` of `self` at position `indices[k]`.
    #[must_use]
    pub fn scatter(&self, indices: &[usize], out_len: usize) -> Self {
        debug_assert_eq!(self.len, indices.len());
        let mut out = Self::zeros(out_len);
        for (k_in, &k_out) in indices.iter().enumerate() {
            out.set_x_bit(k_out, self.get_x_bit(k_in));
            out.set_z_bit(k_out, self.get_z_bit(k_in));
        }
        out.sign = self.sign;
        out
    }

    #[must_use]
    pub fn to_sparse(&self) -> SparsePauli {
        let mut xs = Vec::new();
        let mut zs = Vec::new();
        for q in 0..self.len {
            if self.get_x_bit(q) {
                xs.push(q);
            }
            if self.get_z_bit(q) {
                zs.push(q);
            }
        }
        SparsePauli {
            sign: self.sign,
            xs,
            zs,
        }
    }
}

impl fmt::Display for PauliString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.sign { '-' } else { '+' })?;
        for k in 0..self.len {
            let c = match (self.get_x_bit(k), self.get_z_bit(k)) {
                (false, false) => '_',
                (true, false) => 'X',
                (false, true) => 'Z',
                (true, true) => 'Y',
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// A sparse Pauli string: only the qubits with a nonzero X or Z factor
/// are listed. Used for the destabilizers the program recorder emits and
/// replays via `BulkFrameSim::random_kickback`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SparsePauli {
    pub sign: bool,
    pub xs: Vec<usize>,
    pub zs: Vec<usize>,
}

impl SparsePauli {
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty() && self.zs.is_empty()
    }
}
