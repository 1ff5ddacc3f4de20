//! Classical orthogonal polynomial bases for spectral methods
//!
//! Legendre polynomials and Chebyshev polynomials of the 1st kind with the operators
//! spectral BVP solvers are assembled from: evaluation, derivatives, anchored primitives,
//! definite integrals over [-1, x] and [x, 1], Gauss-Legendre nodes and weights.
//!
//! ```
//! use RustedPolyBases::polybases::{Basis, NodeRule, NodeSet, PolyBasis, PolyOperator, PolyRequest};
//! let basis: Basis = "legendre".parse().unwrap();
//! let request = PolyRequest::new().set_nodes(&[-0.5, 0.0, 0.5]).set_indices(&[0, 1, 2]);
//! let vandermonde = basis.polys().as_matrix(&request).unwrap();
//! assert_eq!(vandermonde.shape(), (3, 3));
//! assert!((vandermonde[(1, 2)] + 0.5).abs() < 1e-15);
//!
//! let gauss = basis.nodes().unwrap();
//! let rule = gauss[&NodeRule::Gauss].set_size(3).unwrap();
//! let integral = rule.integrate(|x| x.powi(4)).unwrap();
//! assert!((integral - 0.4).abs() < 1e-14);
//! ```
/// Capability sets: operators, bases, node sets, requests
pub mod abcpolys;
/// Chebyshev polynomials of the 1st kind
pub mod chebyshev;
/// Error type shared by the whole module
pub mod errors;
/// Newton-Raphson root finding with convergence diagnostics
pub mod findroots;
/// Definite integrals from anchored primitives, shared by all bases
pub mod integrators;
/// Legendre polynomials and Gauss-Legendre quadrature
pub mod legendre;
/// Three-term recurrence engine
pub mod recurrator;


pub use abcpolys::{
    Basis, NodeRule, NodeSet, PolyBasis, PolyOperator, PolyRequest, QuadratureNodeSet, dict_to_mat,
};
pub use chebyshev::Chebyshev;
pub use errors::{PolyError, Result};
pub use findroots::{NewtonConfig, NewtonProblem, NewtonResult, SolverNewton};
pub use legendre::Legendre;
