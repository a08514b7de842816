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

//! The bulk Pauli-frame sampler: replays a recorded `Program` across many
//! shots in parallel by propagating two bits per qubit per shot (the
//! X/Z components of a per-shot Pauli frame) instead of a full tableau.
//!
//! `X[q, *]`/`Z[q, *]` are whole `BitMatrix` rows, one bit per shot, so
//! every gate below touches all shots at once with a handful of word-wide
//! XORs — the entire point of the two-pass record/replay split in
//! `spec.md` §4.5/§4.6 is that this loop never has to consult the tableau
//! again.

use super::gate_data::GATE_TABLEAUS;
use super::pauli::SparsePauli;
use super::program::Program;
use pecos_core::bit_matrix::BitMatrix;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use rayon::prelude::*;
use std::io::{self, Write};

fn xor_into(dst: &mut [u64], src: &[u64]) {
    dst.par_iter_mut().zip(src.par_iter()).for_each(|(d, s)| *d ^= *s);
}

fn cond_xor_into(dst: &mut [u64], src: &[u64], cond: bool) {
    if cond {
        xor_into(dst, src);
    }
}

fn swap_rows(a: &mut [u64], b: &mut [u64]) {
    a.par_iter_mut().zip(b.par_iter_mut()).for_each(|(x, y)| std::mem::swap(x, y));
}

/// The three output framings `spec.md` §6 describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleFormat {
    /// The internal table, byte-for-byte, in whatever transpose state it
    /// is currently in. A caller contract, not a fixed layout — see
    /// `canonicalize_for_raw`.
    Raw,
    /// `ceil(num_measurements / 8)` little-endian bytes per shot.
    B8,
    /// `num_measurements` `0`/`1` characters per shot, newline-terminated.
    Ascii,
}

pub struct BulkFrameSim {
    num_qubits: usize,
    num_samples: usize,
    num_measurements: usize,
    x: BitMatrix,
    z: BitMatrix,
    recorded: BitMatrix,
    num_recorded_measurements: usize,
    /// `false`: `recorded` is measurement-major (row = measurement index,
    /// one bit per shot) — the layout `measure_deterministic` writes
    /// directly. `true`: shot-major, after `do_transpose`.
    shot_major: bool,
    rng: ChaCha12Rng,
}

impl BulkFrameSim {
    #[must_use]
    pub fn new(num_qubits: usize, num_samples: usize) -> Self {
        Self {
            num_qubits,
            num_samples,
            num_measurements: 0,
            x: BitMatrix::zeros(num_qubits, num_samples),
            z: BitMatrix::zeros(num_qubits, num_samples),
            recorded: BitMatrix::zeros(0, num_samples),
            num_recorded_measurements: 0,
            shot_major: false,
            rng: ChaCha12Rng::from_os_rng(),
        }
    }

    #[must_use]
    pub fn with_seed(num_qubits: usize, num_samples: usize, seed: u64) -> Self {
        let mut sim = Self::new(num_qubits, num_samples);
        sim.rng = ChaCha12Rng::seed_from_u64(seed);
        sim
    }

    #[must_use]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    #[must_use]
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    #[must_use]
    pub fn num_measurements(&self) -> usize {
        self.num_measurements
    }

    #[must_use]
    pub fn is_shot_major(&self) -> bool {
        self.shot_major
    }

    #[must_use]
    pub fn get_x(&self, qubit: usize, sample: usize) -> bool {
        self.x.get(qubit, sample)
    }

    #[must_use]
    pub fn get_z(&self, qubit: usize, sample: usize) -> bool {
        self.z.get(qubit, sample)
    }

    pub fn set_frame(&mut self, qubit: usize, sample: usize, x: bool, z: bool) {
        self.x.set(qubit, sample, x);
        self.z.set(qubit, sample, z);
    }

    /// Re-zeros every table and clears the measurement cursor. Leaves
    /// `num_qubits`/`num_samples` unchanged; `num_measurements` is only
    /// known once a `Program` is run (see `clear_and_run`).
    pub fn clear(&mut self) {
        self.x = BitMatrix::zeros(self.num_qubits, self.num_samples);
        self.z = BitMatrix::zeros(self.num_qubits, self.num_samples);
        self.num_measurements = 0;
        self.recorded = BitMatrix::zeros(0, self.num_samples);
        self.num_recorded_measurements = 0;
        self.shot_major = false;
    }

    /// Applies the named gate to all shots at once.
    ///
    /// # Panics
    /// Panics on an unrecognized gate name or a target-count mismatch —
    /// both programming errors, matching `TableauSim::apply`'s policy.
    pub fn apply(&mut self, name: &str, targets: &[usize]) {
        match name {
            "I" | "X" | "Y" | "Z" => {}
            "H" | "SQRT_Y" | "SQRT_Y_DAG" => self.h_xz(targets[0]),
            "H_XY" | "SQRT_Z" | "S" | "SQRT_Z_DAG" | "S_DAG" => self.h_xy(targets[0]),
            "H_YZ" | "SQRT_X" | "SQRT_X_DAG" => self.h_yz(targets[0]),
            "CX" | "CNOT" => self.cx(targets[0], targets[1]),
            "CY" => self.cy(targets[0], targets[1]),
            "CZ" => self.cz(targets[0], targets[1]),
            "SWAP" => self.swap(targets[0], targets[1]),
            "ISWAP" => self.iswap(targets[0], targets[1]),
            "ISWAP_DAG" => self.iswap_dag(targets[0], targets[1]),
            "XCX" | "XCY" | "XCZ" | "YCX" | "YCY" | "YCZ" => {
                self.generic_conjugate_2q(name, targets[0], targets[1]);
            }
            other => panic!("unsupported operation: {other}"),
        }
    }

    pub fn h_xz(&mut self, q: usize) {
        swap_rows(self.x.row_mut(q), self.z.row_mut(q));
    }

    pub fn h_xy(&mut self, q: usize) {
        let x = self.x.row(q).to_vec();
        xor_into(self.z.row_mut(q), &x);
    }

    pub fn h_yz(&mut self, q: usize) {
        let z = self.z.row(q).to_vec();
        xor_into(self.x.row_mut(q), &z);
    }

    pub fn cx(&mut self, control: usize, target: usize) {
        let z_t = self.z.row(target).to_vec();
        xor_into(self.z.row_mut(control), &z_t);
        let x_c = self.x.row(control).to_vec();
        xor_into(self.x.row_mut(target), &x_c);
    }

    pub fn cy(&mut self, control: usize, target: usize) {
        let x_t = self.x.row(target).to_vec();
        let z_t = self.z.row(target).to_vec();
        let x_t_xor_z_t: Vec<u64> = x_t.iter().zip(z_t.iter()).map(|(a, b)| a ^ b).collect();
        xor_into(self.z.row_mut(control), &x_t_xor_z_t);
        let x_c = self.x.row(control).to_vec();
        xor_into(self.z.row_mut(target), &x_c);
        xor_into(self.x.row_mut(target), &x_c);
    }

    pub fn cz(&mut self, q1: usize, q2: usize) {
        let x2 = self.x.row(q2).to_vec();
        xor_into(self.z.row_mut(q1), &x2);
        let x1 = self.x.row(q1).to_vec();
        xor_into(self.z.row_mut(q2), &x1);
    }

    pub fn swap(&mut self, q1: usize, q2: usize) {
        let (xa, xb) = self.x.two_rows_mut(q1, q2);
        swap_rows(xa, xb);
        let (za, zb) = self.z.two_rows_mut(q1, q2);
        swap_rows(za, zb);
    }

    pub fn iswap(&mut self, q1: usize, q2: usize) {
        let x1 = self.x.row(q1).to_vec();
        let x2 = self.x.row(q2).to_vec();
        let x1_xor_x2: Vec<u64> = x1.iter().zip(x2.iter()).map(|(a, b)| a ^ b).collect();
        let mut t1 = self.z.row(q1).to_vec();
        xor_into(&mut t1, &x1_xor_x2);
        let mut t2 = self.z.row(q2).to_vec();
        xor_into(&mut t2, &x1_xor_x2);
        self.z.row_mut(q1).copy_from_slice(&t2);
        self.z.row_mut(q2).copy_from_slice(&t1);
        let (xa, xb) = self.x.two_rows_mut(q1, q2);
        swap_rows(xa, xb);
    }

    /// `ISWAP_DAG` differs from `ISWAP` only by a global phase the frame
    /// ignores, so its bulk formula is identical.
    pub fn iswap_dag(&mut self, q1: usize, q2: usize) {
        self.iswap(q1, q2);
    }

    /// Frame-conjugation fallback for the six gates `spec.md` §4.6 derives
    /// "from the tableau of that gate ignoring signs," computed generically
    /// from `GATE_TABLEAUS` rather than a hand-copied formula per gate —
    /// the same choice `Tableau::prepend_gate`'s generic path makes for
    /// these same six gates (`tableau.rs`), so the gate data has one
    /// source of truth.
    ///
    /// # Panics
    /// Panics if `name` is not a two-qubit gate in `GATE_TABLEAUS`.
    fn generic_conjugate_2q(&mut self, name: &str, q1: usize, q2: usize) {
        let gate = &GATE_TABLEAUS[name];
        assert_eq!(gate.n, 2, "generic_conjugate_2q requires a two-qubit gate");

        let x1 = self.x.row(q1).to_vec();
        let z1 = self.z.row(q1).to_vec();
        let x2 = self.x.row(q2).to_vec();
        let z2 = self.z.row(q2).to_vec();
        let w = x1.len();

        let mut new_x1 = vec![0u64; w];
        let mut new_z1 = vec![0u64; w];
        let mut new_x2 = vec![0u64; w];
        let mut new_z2 = vec![0u64; w];

        cond_xor_into(&mut new_x1, &x1, gate.xx.get(0, 0));
        cond_xor_into(&mut new_x1, &z1, gate.zx.get(0, 0));
        cond_xor_into(&mut new_x1, &x2, gate.xx.get(1, 0));
        cond_xor_into(&mut new_x1, &z2, gate.zx.get(1, 0));

        cond_xor_into(&mut new_z1, &x1, gate.xz.get(0, 0));
        cond_xor_into(&mut new_z1, &z1, gate.zz.get(0, 0));
        cond_xor_into(&mut new_z1, &x2, gate.xz.get(1, 0));
        cond_xor_into(&mut new_z1, &z2, gate.zz.get(1, 0));

        cond_xor_into(&mut new_x2, &x1, gate.xx.get(0, 1));
        cond_xor_into(&mut new_x2, &z1, gate.zx.get(0, 1));
        cond_xor_into(&mut new_x2, &x2, gate.xx.get(1, 1));
        cond_xor_into(&mut new_x2, &z2, gate.zx.get(1, 1));

        cond_xor_into(&mut new_z2, &x1, gate.xz.get(0, 1));
        cond_xor_into(&mut new_z2, &z1, gate.zz.get(0, 1));
        cond_xor_into(&mut new_z2, &x2, gate.xz.get(1, 1));
        cond_xor_into(&mut new_z2, &z2, gate.zz.get(1, 1));

        self.x.row_mut(q1).copy_from_slice(&new_x1);
        self.z.row_mut(q1).copy_from_slice(&new_z1);
        self.x.row_mut(q2).copy_from_slice(&new_x2);
        self.z.row_mut(q2).copy_from_slice(&new_z2);
    }

    fn random_bits_buffer(&mut self) -> Vec<u64> {
        let w = self.x.stride_words();
        let mut buf = vec![0u64; w];
        for word in &mut buf {
            *word = self.rng.random::<u64>();
        }
        let rem = self.num_samples % 64;
        if rem != 0 {
            if let Some(last) = buf.last_mut() {
                *last &= (1u64 << rem) - 1;
            }
        }
        buf
    }

    /// Kicks back `destabilizer` into the frame on a fresh per-shot random
    /// half: the Pauli-frame equivalent of resolving a random measurement's
    /// sign independently per shot (`spec.md` §4.6, "Random kickback").
    pub fn random_kickback(&mut self, destabilizer: &SparsePauli) {
        let buf = self.random_bits_buffer();
        for &q in &destabilizer.xs {
            xor_into(self.x.row_mut(q), &buf);
        }
        for &q in &destabilizer.zs {
            xor_into(self.z.row_mut(q), &buf);
        }
    }

    /// Copies `X[q, *]` into the next free row of the recorded-measurement
    /// table, XOR-inverting if `invert` is set.
    ///
    /// # Panics
    /// Panics if more measurements are recorded than the table was sized
    /// for (a malformed `Program`).
    pub fn measure_deterministic(&mut self, q: usize, invert: bool) {
        let m = self.num_recorded_measurements;
        assert!(
            m < self.recorded.rows(),
            "recording measurement {m} but table only has {} rows",
            self.recorded.rows()
        );
        let src: Vec<u64> = self.x.row(q).to_vec();
        let dst = self.recorded.row_mut(m);
        if invert {
            for (d, s) in dst.iter_mut().zip(src.iter()) {
                *d = !*s;
            }
        } else {
            dst.copy_from_slice(&src);
        }
        self.num_recorded_measurements += 1;
    }

    pub fn reset(&mut self, q: usize) {
        self.x.row_mut(q).fill(0);
        self.z.row_mut(q).fill(0);
    }

    /// Block-transposes the recorded-measurement table between
    /// measurement-major and shot-major layouts.
    pub fn do_transpose(&mut self) {
        self.recorded = self.recorded.transposed();
        self.shot_major = !self.shot_major;
    }

    /// Forces the measurement-major layout `measure_deterministic` writes
    /// natively, so `write_samples(SampleFormat::Raw)` has a known shape.
    pub fn canonicalize_for_raw(&mut self) {
        if self.shot_major {
            self.do_transpose();
        }
    }

    /// Runs `program`'s cycles in order, resizing state as needed. Zeros
    /// everything first, matching `spec.md` §8's `clear()` idempotence
    /// property.
    pub fn clear_and_run(&mut self, program: &Program) {
        self.num_qubits = self.num_qubits.max(program.num_qubits);
        self.num_measurements = program.num_measurements;
        self.x = BitMatrix::zeros(self.num_qubits, self.num_samples);
        self.z = BitMatrix::zeros(self.num_qubits, self.num_samples);
        self.recorded = BitMatrix::zeros(self.num_measurements, self.num_samples);
        self.num_recorded_measurements = 0;
        self.shot_major = false;

        for cycle in &program.cycles {
            for op in &cycle.unitary {
                self.apply(&op.name, &op.targets);
            }
            for destabilizer in &cycle.collapse {
                self.random_kickback(destabilizer);
            }
            for &(q, invert) in &cycle.measure {
                self.measure_deterministic(q, invert);
            }
            for &q in &cycle.reset {
                self.reset(q);
            }
        }
    }

    /// Unpacks one shot's measurement bits into `out`, regardless of the
    /// table's current transpose state.
    ///
    /// # Panics
    /// Panics if `out.len() != self.num_measurements()`.
    pub fn unpack_sample_measurements_into(&self, sample: usize, out: &mut [bool]) {
        assert_eq!(out.len(), self.num_measurements);
        for (m, bit) in out.iter_mut().enumerate() {
            *bit = if self.shot_major { self.recorded.get(sample, m) } else { self.recorded.get(m, sample) };
        }
    }

    #[must_use]
    pub fn sample_measurements(&self, sample: usize) -> Vec<bool> {
        let mut out = vec![false; self.num_measurements];
        self.unpack_sample_measurements_into(sample, &mut out);
        out
    }

    /// Streams every shot's measurements to `writer` in the requested
    /// format. See `spec.md` §6 for the three layouts.
    ///
    /// # Errors
    /// Propagates any I/O error from `writer`.
    pub fn write_samples(&self, writer: &mut impl Write, format: SampleFormat) -> io::Result<()> {
        match format {
            SampleFormat::Raw => {
                for r in 0..self.recorded.rows() {
                    let bytes = pack_row_bytes(&self.recorded, r, self.recorded.cols());
                    writer.write_all(&bytes)?;
                }
                Ok(())
            }
            SampleFormat::B8 => {
                let mut bits = vec![false; self.num_measurements];
                for s in 0..self.num_samples {
                    self.unpack_sample_measurements_into(s, &mut bits);
                    let mut byte = 0u8;
                    let mut nbits = 0u8;
                    let mut out = Vec::with_capacity(self.num_measurements.div_ceil(8));
                    for &bit in &bits {
                        if bit {
                            byte |= 1 << nbits;
                        }
                        nbits += 1;
                        if nbits == 8 {
                            out.push(byte);
                            byte = 0;
                            nbits = 0;
                        }
                    }
                    if nbits != 0 {
                        out.push(byte);
                    }
                    writer.write_all(&out)?;
                }
                Ok(())
            }
            SampleFormat::Ascii => {
                let mut bits = vec![false; self.num_measurements];
                for s in 0..self.num_samples {
                    self.unpack_sample_measurements_into(s, &mut bits);
                    let mut line = String::with_capacity(self.num_measurements + 1);
                    for &bit in &bits {
                        line.push(if bit { '1' } else { '0' });
                    }
                    line.push('\n');
                    writer.write_all(line.as_bytes())?;
                }
                Ok(())
            }
        }
    }
}

fn pack_row_bytes(m: &BitMatrix, row: usize, cols: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(cols.div_ceil(8));
    let mut byte = 0u8;
    let mut nbits = 0u8;
    for c in 0..cols {
        if m.get(row, c) {
            byte |= 1 << nbits;
        }
        nbits += 1;
        if nbits == 8 {
            out.push(byte);
            byte = 0;
            nbits = 0;
        }
    }
    if nbits != 0 {
        out.push(byte);
    }
    out
}
