//! Spectral radius of iteration matrices.
//!
//! The fixed-point iteration x_{k+1} = W·x_k + c converges for every starting
//! point iff every eigenvalue of W lies strictly inside the unit circle. W is
//! real but generally not symmetric, so its eigenvalues may come in
//! complex-conjugate pairs. They are computed by faer's general (non-symmetric)
//! eigenvalue solver.

use faer::Mat;
use num_complex::Complex64 as C64;
use relax_core::{Matrix, N};

use crate::error::{Error, Result};

/// All eigenvalues of `w`, complex in general.
pub fn eigenvalues(w: &Matrix) -> Result<Vec<C64>> {
    // Convert nalgebra Matrix to faer Mat
    let faer_w = Mat::<f64>::from_fn(N, N, |i, j| w[(i, j)]);

    let eigs = faer_w
        .eigenvalues()
        .map_err(|e| Error::EigenDecomposition(format!("{:?}", e)))?;

    Ok(eigs.iter().map(|z| C64::new(z.re, z.im)).collect())
}

/// Largest eigenvalue modulus of `w`.
pub fn spectral_radius(w: &Matrix) -> Result<f64> {
    let radius = eigenvalues(w)?
        .iter()
        .map(|lambda| lambda.norm())
        .fold(0.0, f64::max);
    Ok(radius)
}

/// True iff every eigenvalue of `w` has modulus strictly below one.
pub fn spectral_radius_below_one(w: &Matrix) -> Result<bool> {
    Ok(eigenvalues(w)?.iter().all(|lambda| lambda.norm() < 1.0))
}
