//! Elementwise binary operations on compressed matrices
//!
//! A row of C = A (op) B is built by touching A's row into the left slots
//! and B's row into the right slots of one [`PairAccumulator`], then
//! applying `op` to every column either operand stored. A side that did
//! not store a column contributes a literal zero, so `Mul` is the Hadamard
//! product and `Div` divides by zero wherever B has no entry: floats give
//! `inf` or `NaN` (which are kept, since they are not zero), integer
//! division panics the way Rust's `/` does.

use num_traits::Num;
use std::ops::AddAssign;

use crate::accumulator::PairAccumulator;
use crate::kernels::validate::assert_compressed;

/// Elementwise operator applied by [`csr_binop_csr_op`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    /// Hadamard product, not the matrix product
    Mul,
    Div,
}

impl BinaryOp {
    #[inline]
    pub fn apply<T: Num>(self, a: T, b: T) -> T {
        match self {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
            BinaryOp::Div => a / b,
        }
    }
}

/// Compute C = A (op) B for CSR matrices A, B of the same shape
///
/// # Arguments
///
/// * `n_row`, `n_col` - shape of A, B and C
/// * `ap`, `aj`, `ax` - CSR arrays of A
/// * `bp`, `bj`, `bx` - CSR arrays of B
/// * `cp`, `cj`, `cx` - output vectors, overwritten
/// * `op` - applied as `op(a_ij, b_ij)` on every column present in either
///   row, with zero standing in for the missing side
///
/// Duplicate entries inside an operand row are summed before `op` sees
/// them. Output column order is drain order; C holds no explicit zeros.
///
/// # Panics
///
/// Panics if an operand is malformed or does not have shape
/// `n_row × n_col`.
pub fn csr_binop_csr<T, F>(
    n_row: usize,
    n_col: usize,
    ap: &[usize],
    aj: &[usize],
    ax: &[T],
    bp: &[usize],
    bj: &[usize],
    bx: &[T],
    cp: &mut Vec<usize>,
    cj: &mut Vec<usize>,
    cx: &mut Vec<T>,
    op: F,
) where
    T: Copy + Num + AddAssign,
    F: Fn(T, T) -> T,
{
    assert_compressed(n_row, n_col, ap, aj, ax.len());
    assert_compressed(n_row, n_col, bp, bj, bx.len());
    log::trace!(
        "csr_binop_csr: {}x{}, nnz(A)={}, nnz(B)={}",
        n_row,
        n_col,
        aj.len(),
        bj.len()
    );

    cp.clear();
    cp.resize(n_row + 1, 0);
    cj.clear();
    cx.clear();

    let mut rows = PairAccumulator::new(n_col);

    for i in 0..n_row {
        for jj in ap[i]..ap[i + 1] {
            rows.touch_left(aj[jj], ax[jj]);
        }
        for jj in bp[i]..bp[i + 1] {
            rows.touch_right(bj[jj], bx[jj]);
        }

        for (j, a, b) in rows.drain() {
            let result = op(a, b);
            if !result.is_zero() {
                cj.push(j);
                cx.push(result);
            }
        }

        cp[i + 1] = cx.len();
    }
}

/// [`csr_binop_csr`] with the operator picked by tag
///
/// The match happens once per call so the row loop is monomorphized for
/// each operator.
pub fn csr_binop_csr_op<T>(
    n_row: usize,
    n_col: usize,
    ap: &[usize],
    aj: &[usize],
    ax: &[T],
    bp: &[usize],
    bj: &[usize],
    bx: &[T],
    cp: &mut Vec<usize>,
    cj: &mut Vec<usize>,
    cx: &mut Vec<T>,
    op: BinaryOp,
) where
    T: Copy + Num + AddAssign,
{
    match op {
        BinaryOp::Add => csr_binop_csr(n_row, n_col, ap, aj, ax, bp, bj, bx, cp, cj, cx, |a, b| a + b),
        BinaryOp::Sub => csr_binop_csr(n_row, n_col, ap, aj, ax, bp, bj, bx, cp, cj, cx, |a, b| a - b),
        BinaryOp::Mul => csr_binop_csr(n_row, n_col, ap, aj, ax, bp, bj, bx, cp, cj, cx, |a, b| a * b),
        BinaryOp::Div => csr_binop_csr(n_row, n_col, ap, aj, ax, bp, bj, bx, cp, cj, cx, |a, b| a / b),
    }
}

/// Same as [`csr_binop_csr_op`] for CSC matrices
pub fn csc_binop_csc_op<T>(
    n_row: usize,
    n_col: usize,
    ap: &[usize],
    ai: &[usize],
    ax: &[T],
    bp: &[usize],
    bi: &[usize],
    bx: &[T],
    cp: &mut Vec<usize>,
    ci: &mut Vec<usize>,
    cx: &mut Vec<T>,
    op: BinaryOp,
) where
    T: Copy + Num + AddAssign,
{
    csr_binop_csr_op(n_col, n_row, ap, ai, ax, bp, bi, bx, cp, ci, cx, op)
}

macro_rules! binop_entry_points {
    ($($(#[$doc:meta])* $csr:ident, $csc:ident => $op:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $csr<T>(
                n_row: usize,
                n_col: usize,
                ap: &[usize],
                aj: &[usize],
                ax: &[T],
                bp: &[usize],
                bj: &[usize],
                bx: &[T],
                cp: &mut Vec<usize>,
                cj: &mut Vec<usize>,
                cx: &mut Vec<T>,
            ) where
                T: Copy + Num + AddAssign,
            {
                csr_binop_csr_op(n_row, n_col, ap, aj, ax, bp, bj, bx, cp, cj, cx, BinaryOp::$op)
            }

            $(#[$doc])*
            pub fn $csc<T>(
                n_row: usize,
                n_col: usize,
                ap: &[usize],
                ai: &[usize],
                ax: &[T],
                bp: &[usize],
                bi: &[usize],
                bx: &[T],
                cp: &mut Vec<usize>,
                ci: &mut Vec<usize>,
                cx: &mut Vec<T>,
            ) where
                T: Copy + Num + AddAssign,
            {
                csc_binop_csc_op(n_row, n_col, ap, ai, ax, bp, bi, bx, cp, ci, cx, BinaryOp::$op)
            }
        )*
    };
}

binop_entry_points! {
    /// C = A + B
    csr_plus_csr, csc_plus_csc => Add;
    /// C = A - B
    csr_minus_csr, csc_minus_csc => Sub;
    /// C = A ∘ B (elementwise product)
    csr_elmul_csr, csc_elmul_csc => Mul;
    /// C = A ./ B; columns where B stores nothing divide by zero
    csr_eldiv_csr, csc_eldiv_csc => Div;
}
