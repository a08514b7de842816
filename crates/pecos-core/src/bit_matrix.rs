//! Word-packed GF(2) matrices.
//!
//! Two construction modes share one representation: a plain `rows x cols`
//! matrix padded only to 64-bit word granularity (used for the one-shot
//! random-Clifford construction), and a square matrix padded to a multiple
//! of 256 on both axes (used for `Tableau`'s four quadrants, which need the
//! block-transpose hot path).

use std::thread;

#[inline]
#[must_use]
pub fn words_for_bits(bits: usize) -> usize {
    bits.div_ceil(64)
}

#[inline]
#[must_use]
pub fn ceil256(n: usize) -> usize {
    n.div_ceil(256) * 256
}

#[derive(Clone, Debug)]
pub struct BitMatrix {
    rows: usize,
    cols: usize,
    /// Physical row count. Equals `rows` except in `square_simd`, where the
    /// storage is padded to `ceil256(rows)` so the block transpose has full
    /// 256-aligned tiles to work with.
    padded_rows: usize,
    stride_words: usize,
    data: Vec<u64>,
}

impl BitMatrix {
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        let stride_words = words_for_bits(cols);
        Self {
            rows,
            cols,
            padded_rows: rows,
            stride_words,
            data: vec![0u64; rows * stride_words],
        }
    }

    /// A square `n x n` matrix padded to `ceil256(n)` on both axes, suitable
    /// for `in_place_square_transpose`.
    #[must_use]
    pub fn zeros_square_simd(n: usize) -> Self {
        let padded = ceil256(n.max(1));
        let stride_words = padded / 64;
        Self {
            rows: n,
            cols: n,
            padded_rows: padded,
            stride_words,
            data: vec![0u64; padded * stride_words],
        }
    }

    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.set(i, i, true);
        }
        m
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    #[must_use]
    pub fn stride_words(&self) -> usize {
        self.stride_words
    }

    #[inline]
    #[must_use]
    pub fn get(&self, r: usize, c: usize) -> bool {
        debug_assert!(r < self.rows && c < self.cols);
        let word = self.data[r * self.stride_words + c / 64];
        (word >> (c % 64)) & 1 != 0
    }

    #[inline]
    pub fn set(&mut self, r: usize, c: usize, value: bool) {
        debug_assert!(r < self.rows && c < self.cols);
        let idx = r * self.stride_words + c / 64;
        let bit = 1u64 << (c % 64);
        if value {
            self.data[idx] |= bit;
        } else {
            self.data[idx] &= !bit;
        }
    }

    #[inline]
    #[must_use]
    pub fn row(&self, r: usize) -> &[u64] {
        &self.data[r * self.stride_words..(r + 1) * self.stride_words]
    }

    #[inline]
    pub fn row_mut(&mut self, r: usize) -> &mut [u64] {
        let sw = self.stride_words;
        &mut self.data[r * sw..(r + 1) * sw]
    }

    /// Disjoint mutable access to two rows, in the order requested.
    ///
    /// # Panics
    /// Panics if `r1 == r2`.
    #[must_use]
    pub fn two_rows_mut(&mut self, r1: usize, r2: usize) -> (&mut [u64], &mut [u64]) {
        assert_ne!(r1, r2, "two_rows_mut requires distinct rows");
        let sw = self.stride_words;
        if r1 < r2 {
            let (a, b) = self.data.split_at_mut(r2 * sw);
            (&mut a[r1 * sw..r1 * sw + sw], &mut b[0..sw])
        } else {
            let (a, b) = self.data.split_at_mut(r1 * sw);
            (&mut b[0..sw], &mut a[r2 * sw..r2 * sw + sw])
        }
    }

    /// XORs row `src` into row `dst`.
    pub fn xor_row_into(&mut self, src: usize, dst: usize) {
        if src == dst {
            return;
        }
        let (a, b) = self.two_rows_mut(dst, src);
        for (x, y) in a.iter_mut().zip(b.iter()) {
            *x ^= *y;
        }
    }

    #[must_use]
    pub fn any_set_in_row(&self, r: usize, cols: std::ops::Range<usize>) -> bool {
        cols.into_iter().any(|c| self.get(r, c))
    }

    /// Naive `O(rows * cols * other.cols)` GF(2) matrix product. Used only
    /// by the one-shot random-Clifford constructor, where correctness, not
    /// throughput, is what matters.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        assert_eq!(self.cols, other.rows);
        let mut out = Self::zeros(self.rows, other.cols);
        for r in 0..self.rows {
            for k in 0..self.cols {
                if !self.get(r, k) {
                    continue;
                }
                for c in 0..other.cols {
                    if other.get(k, c) {
                        let cur = out.get(r, c);
                        out.set(r, c, !cur);
                    }
                }
            }
        }
        out
    }

    /// Inverts a lower-triangular matrix with a unit diagonal via forward
    /// Gaussian elimination: for each pivot column, XOR the pivot row into
    /// every lower row whose pivot-column bit is set, mirroring the same
    /// XORs into an identity accumulator.
    #[must_use]
    pub fn inv_lower_triangular(&self) -> Self {
        assert_eq!(self.rows, self.cols);
        let n = self.rows;
        let mut work = self.clone();
        let mut inv = Self::identity(n);
        for pivot in 0..n {
            for row in (pivot + 1)..n {
                if work.get(row, pivot) {
                    work.xor_row_into(pivot, row);
                    inv.xor_row_into(pivot, row);
                }
            }
        }
        inv
    }

    #[must_use]
    pub fn transposed(&self) -> Self {
        let mut out = Self::zeros(self.cols, self.rows);
        for r in 0..self.rows {
            for c in 0..self.cols {
                if self.get(r, c) {
                    out.set(c, r, true);
                }
            }
        }
        out
    }

    /// Builds a `2n x 2n` matrix from four `n x n` quadrants, laid out
    /// `[[a, b], [c, d]]`.
    #[must_use]
    pub fn from_quadrants(a: &Self, b: &Self, c: &Self, d: &Self) -> Self {
        let n = a.rows;
        assert_eq!(a.cols, n);
        assert!(b.rows == n && b.cols == n && c.rows == n && c.cols == n && d.rows == n && d.cols == n);
        let mut out = Self::zeros(2 * n, 2 * n);
        for r in 0..n {
            for col in 0..n {
                if a.get(r, col) {
                    out.set(r, col, true);
                }
                if b.get(r, col) {
                    out.set(r, n + col, true);
                }
                if c.get(r, col) {
                    out.set(n + r, col, true);
                }
                if d.get(r, col) {
                    out.set(n + r, n + col, true);
                }
            }
        }
        out
    }

    /// In-place transpose of a square, 256-padded matrix, tiled over 64x64
    /// blocks. For `n >= 1024` the tile rows are sharded across up to four
    /// worker threads; see the module's thread-safety note below.
    ///
    /// # Panics
    /// Panics if the matrix is not square.
    pub fn in_place_square_transpose(&mut self) {
        assert_eq!(self.rows, self.cols, "in_place_square_transpose requires a square matrix");
        let side = self.padded_rows;
        debug_assert_eq!(side % 64, 0);
        let tiles = side / 64;
        let stride = self.stride_words;

        if side >= 1024 {
            log::debug!("block-transposing a {side}x{side} matrix across worker threads");
            let num_threads = 4usize.min(tiles);
            let ptr = SyncMutPtr(self.data.as_mut_ptr());
            let total_words = side * stride;
            thread::scope(|scope| {
                for t in 0..num_threads {
                    let ptr = ptr;
                    scope.spawn(move || {
                        // SAFETY: each thread is assigned a disjoint subset of
                        // tile-row indices. `transpose_tile_row` only ever
                        // writes to (a) the physical rows belonging to its own
                        // tile-row index, and (b) the column-block matching
                        // its own tile-row index, for row-blocks >= it. Since
                        // tile-row assignments are disjoint across threads, no
                        // two threads ever write the same word.
                        let data = unsafe { std::slice::from_raw_parts_mut(ptr.0, total_words) };
                        for tile_row in (t..tiles).step_by(num_threads) {
                            transpose_tile_row(data, stride, tiles, tile_row);
                        }
                    });
                }
            });
        } else {
            for tile_row in 0..tiles {
                transpose_tile_row(&mut self.data, stride, tiles, tile_row);
            }
        }
    }
}

#[derive(Clone, Copy)]
struct SyncMutPtr(*mut u64);
unsafe impl Send for SyncMutPtr {}
unsafe impl Sync for SyncMutPtr {}

fn get_tile(data: &[u64], stride_words: usize, block_row: usize, block_col: usize) -> [u64; 64] {
    let mut t = [0u64; 64];
    for (i, slot) in t.iter_mut().enumerate() {
        *slot = data[(block_row * 64 + i) * stride_words + block_col];
    }
    t
}

fn set_tile(data: &mut [u64], stride_words: usize, block_row: usize, block_col: usize, t: &[u64; 64]) {
    for (i, v) in t.iter().enumerate() {
        data[(block_row * 64 + i) * stride_words + block_col] = *v;
    }
}

/// Classic in-place 64x64 bit-matrix transpose via delta-swaps.
fn transpose_64x64(a: &mut [u64; 64]) {
    let mut m: u64 = 0x0000_0000_ffff_ffff;
    let mut j = 32usize;
    while j != 0 {
        let mut k = 0usize;
        while k < 64 {
            let kj = k | j;
            let t = (a[k] ^ (a[kj] >> j)) & m;
            a[k] ^= t;
            a[kj] ^= t << j;
            k = (kj + 1) & !j;
        }
        j >>= 1;
        m ^= m << j;
    }
}

fn transpose_tile_row(data: &mut [u64], stride_words: usize, tiles: usize, tile_row: usize) {
    for tile_col in tile_row..tiles {
        let mut a = get_tile(data, stride_words, tile_row, tile_col);
        if tile_col == tile_row {
            transpose_64x64(&mut a);
            set_tile(data, stride_words, tile_row, tile_col, &a);
        } else {
            let mut b = get_tile(data, stride_words, tile_col, tile_row);
            transpose_64x64(&mut a);
            transpose_64x64(&mut b);
            set_tile(data, stride_words, tile_col, tile_row, &a);
            set_tile(data, stride_words, tile_row, tile_col, &b);
        }
    }
}
