//! Splitting methods: Jacobi and Gauss-Seidel.
//!
//! Each method picks an easily inverted part Q of A and rewrites A·x = b as
//! x = Q^(-1)·(Q - A)·x + Q^(-1)·b. The resulting [`Splitting`] carries the
//! propagation matrix P, the offset R, and the spectral radius of the
//! iteration matrix W = I - Q^(-1)·A.

use std::fmt;
use std::str::FromStr;

use relax_core::{LinearSystem, Matrix, Vector, keep_diagonal, keep_lower, keep_upper};

use crate::error::{Error, Result};
use crate::spectral::spectral_radius;

/// Pivots of Q with a smaller magnitude are treated as zero.
const SINGULAR_PIVOT: f64 = 1e-30;

/// Iteration parameters derived from a linear system.
///
/// The fixed point of x = P·x + R is the solution of A·x = b.
#[derive(Debug, Clone, PartialEq)]
pub struct Splitting {
    /// Propagation matrix applied to the previous iterate.
    pub p: Matrix,
    /// Additive offset.
    pub r: Vector,
    /// Spectral radius of W = I - Q^(-1)·A.
    pub spectral_radius: f64,
    /// Whether the spectral radius is strictly below one.
    pub converges: bool,
}

impl Splitting {
    /// Assemble the splitting A = Q - N for a lower-triangular (or diagonal) Q.
    ///
    /// `n` is the remainder N = Q - A.
    fn assemble(system: &LinearSystem, q: &Matrix, n: &Matrix) -> Result<Self> {
        let q_inv = invert_lower(q)?;

        let w = Matrix::identity() - q_inv * system.a();
        let spectral_radius = spectral_radius(&w)?;

        Ok(Self {
            p: q_inv * n,
            r: q_inv * system.b(),
            spectral_radius,
            converges: spectral_radius < 1.0,
        })
    }
}

/// Invert a lower-triangular matrix, rejecting zero pivots.
fn invert_lower(q: &Matrix) -> Result<Matrix> {
    let row = q.diagonal().iamin();
    if q[(row, row)].abs() < SINGULAR_PIVOT {
        return Err(Error::SingularSplitting { row });
    }

    q.solve_lower_triangular(&Matrix::identity())
        .ok_or(Error::SingularSplitting { row })
}

/// A stationary method defined by its choice of Q.
pub trait SplittingMethod {
    /// Display name used in reports.
    fn name(&self) -> &'static str;

    /// Derive (P, R, converges) from the system.
    fn splitting(&self, system: &LinearSystem) -> Result<Splitting>;
}

/// Jacobi method: Q = D.
#[derive(Debug, Clone, Copy, Default)]
pub struct Jacobi;

impl SplittingMethod for Jacobi {
    fn name(&self) -> &'static str {
        "Jacobi"
    }

    fn splitting(&self, system: &LinearSystem) -> Result<Splitting> {
        let d = keep_diagonal(system.a());
        Splitting::assemble(system, &d, &(d - system.a()))
    }
}

/// Gauss-Seidel method: Q = L + D.
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussSeidel;

impl SplittingMethod for GaussSeidel {
    fn name(&self) -> &'static str {
        "GS"
    }

    fn splitting(&self, system: &LinearSystem) -> Result<Splitting> {
        let a = system.a();
        let q = keep_lower(a) + keep_diagonal(a);
        Splitting::assemble(system, &q, &(-keep_upper(a)))
    }
}

/// Selectable splitting method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Jacobi,
    GaussSeidel,
}

impl Method {
    /// All methods, in reporting order.
    pub const ALL: [Method; 2] = [Method::Jacobi, Method::GaussSeidel];
}

impl SplittingMethod for Method {
    fn name(&self) -> &'static str {
        match self {
            Method::Jacobi => Jacobi.name(),
            Method::GaussSeidel => GaussSeidel.name(),
        }
    }

    fn splitting(&self, system: &LinearSystem) -> Result<Splitting> {
        match self {
            Method::Jacobi => Jacobi.splitting(system),
            Method::GaussSeidel => GaussSeidel.splitting(system),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "jacobi" => Ok(Method::Jacobi),
            "gs" | "gauss-seidel" | "gauss_seidel" | "gaussseidel" => Ok(Method::GaussSeidel),
            _ => Err(Error::UnknownMethod(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relax_core::N;

    fn assert_fixed_point(splitting: &Splitting, x: &Vector) {
        let image = splitting.p * x + splitting.r;
        assert!(
            (image - x).norm() < 1e-12,
            "x is not a fixed point: |P x + R - x| = {}",
            (image - x).norm()
        );
    }

    #[test]
    fn test_jacobi_propagation_matrix() {
        // P = D^(-1) (D - A) = (1/gamma) * off-diagonal neighbours
        let system = LinearSystem::pyramid(4.0);
        let splitting = Jacobi.splitting(&system).unwrap();

        for i in 0..N {
            assert_eq!(splitting.p[(i, i)], 0.0);
            for j in 0..N {
                let expected = if i.abs_diff(j) == 1 { 0.25 } else { 0.0 };
                assert!((splitting.p[(i, j)] - expected).abs() < 1e-15);
            }
        }
        assert!((splitting.r[0] - 0.75).abs() < 1e-15);
        assert!((splitting.r[1] - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_gauss_seidel_p_has_zero_first_column() {
        // P = -(L + D)^(-1) U; U has no entries in column 0
        let system = LinearSystem::pyramid(3.0);
        let splitting = GaussSeidel.splitting(&system).unwrap();

        for i in 0..N {
            assert_eq!(splitting.p[(i, 0)], 0.0, "p[({}, 0)]", i);
        }
    }

    #[test]
    fn test_exact_solution_is_fixed_point() {
        // For gamma = 2 the solution is the all-ones vector
        let system = LinearSystem::pyramid(2.0);
        let ones = Vector::repeat(1.0);

        assert_fixed_point(&Jacobi.splitting(&system).unwrap(), &ones);
        assert_fixed_point(&GaussSeidel.splitting(&system).unwrap(), &ones);
    }

    #[test]
    fn test_jacobi_spectral_radius_closed_form() {
        // Eigenvalues of W are 2 cos(k pi / (N + 1)) / gamma
        let gamma = 3.0;
        let splitting = Jacobi.splitting(&LinearSystem::pyramid(gamma)).unwrap();
        let expected = 2.0 * (std::f64::consts::PI / (N as f64 + 1.0)).cos() / gamma;

        assert!(
            (splitting.spectral_radius - expected).abs() < 1e-10,
            "radius = {} (expected {})",
            splitting.spectral_radius,
            expected
        );
        assert!(splitting.converges);
    }

    #[test]
    fn test_gauss_seidel_radius_is_jacobi_squared() {
        // Consistently ordered tridiagonal matrix: rho(GS) = rho(J)^2
        let system = LinearSystem::pyramid(2.5);
        let jacobi = Jacobi.splitting(&system).unwrap();
        let gs = GaussSeidel.splitting(&system).unwrap();

        let expected = jacobi.spectral_radius * jacobi.spectral_radius;
        assert!(
            (gs.spectral_radius - expected).abs() < 1e-8,
            "GS radius = {} (expected {})",
            gs.spectral_radius,
            expected
        );
    }

    #[test]
    fn test_singular_splitting() {
        let system = LinearSystem::pyramid(0.0);

        assert!(matches!(
            Jacobi.splitting(&system),
            Err(Error::SingularSplitting { .. })
        ));
        assert!(matches!(
            GaussSeidel.splitting(&system),
            Err(Error::SingularSplitting { .. })
        ));
    }

    #[test]
    fn test_singular_splitting_reports_row() {
        let mut a = relax_core::build_system_matrix(3.0);
        a[(7, 7)] = 0.0;
        let system = LinearSystem::new(a, relax_core::build_rhs(3.0));

        match Jacobi.splitting(&system) {
            Err(Error::SingularSplitting { row }) => assert_eq!(row, 7),
            other => panic!("expected singular splitting, got {:?}", other),
        }
    }

    #[test]
    fn test_method_enum_delegates() {
        let system = LinearSystem::pyramid(3.0);

        assert_eq!(
            Method::Jacobi.splitting(&system).unwrap(),
            Jacobi.splitting(&system).unwrap()
        );
        assert_eq!(
            Method::GaussSeidel.splitting(&system).unwrap(),
            GaussSeidel.splitting(&system).unwrap()
        );
        assert_eq!(Method::Jacobi.to_string(), "Jacobi");
        assert_eq!(Method::GaussSeidel.to_string(), "GS");
    }

    #[test]
    fn test_method_from_str() {
        assert_eq!("jacobi".parse::<Method>().unwrap(), Method::Jacobi);
        assert_eq!("Jacobi".parse::<Method>().unwrap(), Method::Jacobi);
        assert_eq!("GS".parse::<Method>().unwrap(), Method::GaussSeidel);
        assert_eq!("gauss-seidel".parse::<Method>().unwrap(), Method::GaussSeidel);
        assert!(matches!(
            "sor".parse::<Method>(),
            Err(Error::UnknownMethod(name)) if name == "sor"
        ));
    }
}
