//! Fixed-size dense matrices, fill patterns, and triangular projections.

use nalgebra::{SMatrix, SVector};

/// Dimension of every linear system.
pub const N: usize = 20;

/// Dense N×N coefficient matrix.
pub type Matrix = SMatrix<f64, N, N>;

/// Dense column vector of length N.
pub type Vector = SVector<f64, N>;

/// Set every diagonal entry a_ii to `value`.
pub fn fill_diagonal(matrix: &mut Matrix, value: f64) {
    for i in 0..N {
        matrix[(i, i)] = value;
    }
}

/// Set the direct neighbours of the diagonal (a_i,i+1 and a_i+1,i) to `value`.
pub fn fill_diagonal_siblings(matrix: &mut Matrix, value: f64) {
    for i in 0..N - 1 {
        matrix[(i, i + 1)] = value;
        matrix[(i + 1, i)] = value;
    }
}

/// Fill the pyramid right-hand side: `value - 1` at both ends, `value - 2` inside.
pub fn fill_pyramid(vector: &mut Vector, value: f64) {
    for i in 0..N {
        vector[i] = if i == 0 || i + 1 == N {
            value - 1.0
        } else {
            value - 2.0
        };
    }
}

/// Tridiagonal matrix with `gamma` on the diagonal and -1 beside it.
pub fn build_system_matrix(gamma: f64) -> Matrix {
    let mut a = Matrix::zeros();
    fill_diagonal(&mut a, gamma);
    fill_diagonal_siblings(&mut a, -1.0);
    a
}

/// Right-hand side matching [`build_system_matrix`].
pub fn build_rhs(gamma: f64) -> Vector {
    let mut b = Vector::zeros();
    fill_pyramid(&mut b, gamma);
    b
}

/// Zero everything except the diagonal.
pub fn keep_diagonal(matrix: &Matrix) -> Matrix {
    Matrix::from_fn(|i, j| if i == j { matrix[(i, j)] } else { 0.0 })
}

/// Keep the strictly upper triangle; zero on and below the diagonal.
pub fn keep_upper(matrix: &Matrix) -> Matrix {
    Matrix::from_fn(|i, j| if j > i { matrix[(i, j)] } else { 0.0 })
}

/// Keep the strictly lower triangle; zero on and above the diagonal.
pub fn keep_lower(matrix: &Matrix) -> Matrix {
    Matrix::from_fn(|i, j| if j < i { matrix[(i, j)] } else { 0.0 })
}
