//! Gauss-Legendre nodes in (-1, 1) and the weights of the Gauss quadrature
use super::funcsderivs::{Derivs, Polys};
use crate::polybases::abcpolys::{NodeSet, PolyOperator};
use crate::polybases::errors::{PolyError, Result};
use crate::polybases::findroots::{NewtonProblem, SolverNewton};
use log::{error, info};
use nalgebra::DVector;
use std::f64::consts::PI;

/// Tolerance and iteration budget of the nodes finder
#[derive(Debug, Clone)]
pub struct GaussConfig {
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for GaussConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-14,
            max_iterations: 10,
        }
    }
}

/// Set of Gauss nodes in [-1, 1].
#[derive(Debug, Clone, Default)]
pub struct GaussNodes {
    pub config: GaussConfig,
}

impl GaussNodes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GaussConfig) -> Self {
        Self { config }
    }
}

impl NodeSet for GaussNodes {
    fn find_nodes(&self, number: usize) -> Result<DVector<f64>> {
        if number == 0 {
            return Err(PolyError::ConfigurationError(
                "number of Gauss nodes must be positive".to_string(),
            ));
        }
        let finder = NodesFinder::new(number);
        let guess = NodesFinder::get_nodes_guess(number);

        let out = SolverNewton::compute(
            &finder,
            guess,
            self.config.tolerance,
            Some(self.config.max_iterations),
        )?;

        if out.converge {
            info!(
                "{} Gauss nodes found in {} iterations",
                number, out.iterations
            );
            return Ok(out.result);
        }
        error!(
            "Gauss nodes finder failed, no convergence \n {}",
            out.history_table()
        );
        Err(PolyError::ConvergenceError {
            iterations: out.iterations,
            residual: out.last_residual(),
        })
    }

    fn find_weights(&self, nodes: &DVector<f64>) -> Result<Option<DVector<f64>>> {
        Ok(Some(WeightsFinder::new().compute_weights(nodes)))
    }
}

/// Computes the Gauss nodes, all of them simultaneously:
///
/// ```text
/// x = x - POLYN(x)/DERIVN(x)
/// ```
///
/// POLYN is the Legendre polynomial of the n-th order, DERIVN its first derivative.
/// The solution guess is
///
/// ```text
/// x = COS[pi*(4*k-1)/(4*n+2)],  k = n, ..., 1 (ascending nodes)
/// ```
pub struct NodesFinder {
    number: usize,
    polys: Polys,
    derivs: Derivs,
}

impl NodesFinder {
    pub fn new(number: usize) -> Self {
        Self {
            number,
            polys: Polys::new(),
            derivs: Derivs::new(1),
        }
    }

    pub fn get_nodes_guess(number: usize) -> DVector<f64> {
        let n = number as f64;
        DVector::from_iterator(
            number,
            (1..=number)
                .rev()
                .map(|k| (PI * (4.0 * k as f64 - 1.0) / (4.0 * n + 2.0)).cos()),
        )
    }

    fn last_output(opr: &dyn PolyOperator, nodes: &DVector<f64>, index: usize) -> DVector<f64> {
        opr.get_outputs(nodes, index)
            .pop()
            .unwrap_or_else(|| DVector::zeros(nodes.len()))
    }
}

impl NewtonProblem for NodesFinder {
    type Arg = DVector<f64>;

    /// max absolute deviation over the nodes
    fn get_norm(&self, arg: &DVector<f64>) -> f64 {
        arg.amax()
    }

    fn get_func(&self, arg: &DVector<f64>) -> DVector<f64> {
        Self::last_output(&self.polys, arg, self.number)
    }

    fn get_deriv(&self, arg: &DVector<f64>) -> DVector<f64> {
        Self::last_output(&self.derivs, arg, self.number)
    }
}

/// Computes weights of the Gauss quadrature.
///
/// ```text
/// w = 2/[n*POLYN1(x)*DERIVN(x)]
/// ```
///
/// POLYN1 is the Legendre polynomial of the order n-1, DERIVN the first derivative of the
/// n-th one, x are the n nodes of the Gauss-Legendre quadrature.
#[derive(Debug, Clone)]
pub struct WeightsFinder {
    polys: Polys,
    derivs: Derivs,
}

impl WeightsFinder {
    pub fn new() -> Self {
        Self {
            polys: Polys::new(),
            derivs: Derivs::new(1),
        }
    }

    pub fn compute_weights(&self, nodes: &DVector<f64>) -> DVector<f64> {
        let number = nodes.len();
        if number == 0 {
            return DVector::zeros(0);
        }
        let polys = NodesFinder::last_output(&self.polys, nodes, number - 1);
        let derivs = NodesFinder::last_output(&self.derivs, nodes, number);
        polys.zip_map(&derivs, |p, d| 2.0 / (number as f64 * p * d))
    }
}
