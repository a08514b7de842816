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

//! A transposed view of a `Tableau`'s four quadrants, so that "for every
//! generator, touch the bit at qubit `q`" (what measurement collapse needs
//! when it appends a CNOT/Hadamard to cancel a pivot across *every* row)
//! becomes a contiguous row operation instead of a strided column walk.
//!
//! Mirrors the original's `TempBlockTransposedTableauRaii`: transpose on
//! construction, restore on `Drop`.

use super::tableau::Tableau;
use pecos_core::bit_matrix::BitMatrix;

pub struct BlockTransposedTableau<'a> {
    t: &'a mut Tableau,
}

impl<'a> BlockTransposedTableau<'a> {
    #[must_use]
    pub fn new(t: &'a mut Tableau) -> Self {
        t.xx.in_place_square_transpose();
        t.xz.in_place_square_transpose();
        t.zx.in_place_square_transpose();
        t.zz.in_place_square_transpose();
        Self { t }
    }

    #[must_use]
    pub fn n(&self) -> usize {
        self.t.n
    }

    /// Bit `(x_obs(row), q)` after transpose: physically row `q`, column
    /// `row`, in the `xx` quadrant.
    #[must_use]
    pub fn x_obs_x_bit(&self, q: usize, row: usize) -> bool {
        self.t.xx.get(q, row)
    }

    #[must_use]
    pub fn x_obs_z_bit(&self, q: usize, row: usize) -> bool {
        self.t.xz.get(q, row)
    }

    #[must_use]
    pub fn z_obs_x_bit(&self, q: usize, row: usize) -> bool {
        self.t.zx.get(q, row)
    }

    #[must_use]
    pub fn z_obs_z_bit(&self, q: usize, row: usize) -> bool {
        self.t.zz.get(q, row)
    }

    #[must_use]
    pub fn sign_x(&self, row: usize) -> bool {
        self.t.sign_x.get(0, row)
    }

    #[must_use]
    pub fn sign_z(&self, row: usize) -> bool {
        self.t.sign_z.get(0, row)
    }

    pub fn toggle_sign_x(&mut self, row: usize) {
        let cur = self.t.sign_x.get(0, row);
        self.t.sign_x.set(0, row, !cur);
    }

    pub fn toggle_sign_z(&mut self, row: usize) {
        let cur = self.t.sign_z.get(0, row);
        self.t.sign_z.set(0, row, !cur);
    }

    /// The destabilizer row at qubit `pivot`: the Z-kind's second matrix
    /// (`zz`, transposed) supplies the X component, the X-kind's second
    /// matrix (`xz`, transposed) supplies the Z component, following
    /// `spec.md` §4.4's plain description of what the original's raw
    /// `transposed_xz_ptr` addressing trick amounts to.
    #[must_use]
    pub fn destabilizer_row(&self, pivot: usize) -> (Vec<bool>, Vec<bool>) {
        let n = self.n();
        let xs: Vec<bool> = (0..n).map(|row| self.t.zz.get(pivot, row)).collect();
        let zs: Vec<bool> = (0..n).map(|row| self.t.xz.get(pivot, row)).collect();
        (xs, zs)
    }

    /// Appends a CX (control, target) to the Clifford this tableau
    /// represents, visiting every generator row via the now-contiguous
    /// transposed storage. Matches the original's `append_CX`.
    pub fn append_cx(&mut self, control: usize, target: usize) {
        append_cx_kind(&mut self.t.xx, &mut self.t.xz, &mut self.t.sign_x, control, target);
        append_cx_kind(&mut self.t.zx, &mut self.t.zz, &mut self.t.sign_z, control, target);
    }

    /// Appends a Hadamard on `q`, swapping the X and Z components of every
    /// generator's image at that qubit.
    pub fn append_h(&mut self, q: usize) {
        let n = self.n();
        for row in 0..n {
            let x = self.t.xx.get(q, row);
            let z = self.t.xz.get(q, row);
            self.t.xx.set(q, row, z);
            self.t.xz.set(q, row, x);
            let x = self.t.zx.get(q, row);
            let z = self.t.zz.get(q, row);
            self.t.zx.set(q, row, z);
            self.t.zz.set(q, row, x);
        }
    }
}

/// Shared CX-append formula for one "kind" (X-images or Z-images): the
/// original loops this identical bitwise update once over the X-kind
/// quadrant pair and once over the Z-kind pair.
fn append_cx_kind(m1: &mut BitMatrix, m2: &mut BitMatrix, sign: &mut BitMatrix, control: usize, target: usize) {
    let n = m1.rows();
    for row in 0..n {
        let x_c = m1.get(control, row);
        let z_c = m2.get(control, row);
        let x_t = m1.get(target, row);
        let z_t = m2.get(target, row);
        if x_c {
            let cur = m1.get(target, row);
            m1.set(target, row, !cur);
        }
        if z_t {
            let cur = m2.get(control, row);
            m2.set(control, row, !cur);
        }
        if x_c && z_t && (x_t == z_c) {
            let cur = sign.get(0, row);
            sign.set(0, row, !cur);
        }
    }
}

impl Drop for BlockTransposedTableau<'_> {
    fn drop(&mut self) {
        self.t.xx.in_place_square_transpose();
        self.t.xz.in_place_square_transpose();
        self.t.zx.in_place_square_transpose();
        self.t.zz.in_place_square_transpose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stab::tableau::Tableau;

    #[test]
    fn transpose_then_restore_round_trips_identity() {
        let mut t = Tableau::identity(4);
        {
            let _view = BlockTransposedTableau::new(&mut t);
        }
        let id = Tableau::identity(4);
        for r in 0..4 {
            assert_eq!(t.x_obs_row(r).0, id.x_obs_row(r).0);
            assert_eq!(t.z_obs_row(r).0, id.z_obs_row(r).0);
        }
    }

    #[test]
    fn append_h_then_append_h_is_identity() {
        let mut t = Tableau::identity(2);
        {
            let mut view = BlockTransposedTableau::new(&mut t);
            view.append_h(0);
            view.append_h(0);
        }
        let id = Tableau::identity(2);
        for r in 0..2 {
            assert_eq!(t.x_obs_row(r).0, id.x_obs_row(r).0);
            assert_eq!(t.x_obs_row(r).1, id.x_obs_row(r).1);
        }
    }
}
