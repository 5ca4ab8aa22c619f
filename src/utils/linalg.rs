//! Dense linear solves for the small systems that appear in 4PL fitting.
//!
//! Both routines use partial pivoting. They are lenient about singular
//! directions: `solve` drops them (the unresolved components come back as 0)
//! while `invert` reports that no inverse is available.

use ndarray::{s, Array1, Array2, Axis};

/// Pivots with a magnitude below this are treated as zero.
pub const PIVOT_TOLERANCE: f64 = 1e-15;

/// Solve `a * x = b` by Gaussian elimination with partial pivoting.
///
/// Elimination steps whose pivot is below [`PIVOT_TOLERANCE`] are skipped and
/// the matching solution component is left at 0, so a fully singular system
/// yields the zero vector instead of an error.
///
/// # Panics
///
/// Panics if `a` is not square or `b` does not match its size.
pub fn solve(a: &Array2<f64>, b: &Array1<f64>) -> Array1<f64> {
    let n = b.len();
    assert_eq!(a.dim(), (n, n), "solve expects a square system matching b");

    let mut aug = Array2::<f64>::zeros((n, n + 1));
    aug.slice_mut(s![.., ..n]).assign(a);
    aug.column_mut(n).assign(b);

    for col in 0..n {
        let pivot_row = pivot_row(&aug, col);
        swap_rows(&mut aug, col, pivot_row);

        let pivot = aug[[col, col]];
        if pivot.abs() < PIVOT_TOLERANCE {
            continue;
        }

        for row in (col + 1)..n {
            let factor = aug[[row, col]] / pivot;
            for j in col..=n {
                let above = aug[[col, j]];
                aug[[row, j]] -= factor * above;
            }
        }
    }

    let mut x = Array1::<f64>::zeros(n);
    for i in (0..n).rev() {
        let diag = aug[[i, i]];
        if diag.abs() <= PIVOT_TOLERANCE {
            continue;
        }
        let mut acc = aug[[i, n]];
        for j in (i + 1)..n {
            acc -= aug[[i, j]] * x[j];
        }
        x[i] = acc / diag;
    }
    x
}

/// Invert a square matrix by Gauss-Jordan elimination on `[m | I]`.
///
/// Returns `None` as soon as a pivot below [`PIVOT_TOLERANCE`] is met; callers
/// treat that as "no covariance obtainable" rather than a failure.
///
/// # Panics
///
/// Panics if `m` is not square.
pub fn invert(m: &Array2<f64>) -> Option<Array2<f64>> {
    let n = m.nrows();
    assert_eq!(m.ncols(), n, "invert expects a square matrix");

    let mut aug = Array2::<f64>::zeros((n, 2 * n));
    aug.slice_mut(s![.., ..n]).assign(m);
    for i in 0..n {
        aug[[i, n + i]] = 1.0;
    }

    for col in 0..n {
        let pivot_row = pivot_row(&aug, col);
        swap_rows(&mut aug, col, pivot_row);

        let pivot = aug[[col, col]];
        if pivot.abs() < PIVOT_TOLERANCE {
            return None;
        }
        aug.row_mut(col).mapv_inplace(|v| v / pivot);

        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = aug[[row, col]];
            if factor == 0.0 {
                continue;
            }
            for j in 0..(2 * n) {
                let source = aug[[col, j]];
                aug[[row, j]] -= factor * source;
            }
        }
    }

    Some(aug.slice(s![.., n..]).to_owned())
}

/// Row at or below `col` with the largest magnitude in column `col`.
fn pivot_row(aug: &Array2<f64>, col: usize) -> usize {
    let mut best = col;
    for row in (col + 1)..aug.len_of(Axis(0)) {
        if aug[[row, col]].abs() > aug[[best, col]].abs() {
            best = row;
        }
    }
    best
}

fn swap_rows(m: &mut Array2<f64>, i: usize, j: usize) {
    if i == j {
        return;
    }
    for k in 0..m.ncols() {
        m.swap([i, k], [j, k]);
    }
}
