//! Newton-Raphson solver for scalar and vectorized (component-wise) problems
//!
//! ```text
//! x_{k+1} = x_k - F(x_k)/F'(x_k)
//! ```
//!
//! The solver is fully restartable: every call of `compute` starts from a fresh state.
use crate::polybases::errors::{PolyError, Result};
use log::{debug, info, warn};
use nalgebra::DVector;
use tabled::{builder::Builder, settings::Style};

/// Argument of a Newton problem: a scalar or a vector of independent unknowns.
pub trait NewtonArg: Clone + std::fmt::Debug {
    /// self - other
    fn difference(&self, other: &Self) -> Self;
    /// self - func/deriv, None if the derivative (or any of its components) is zero
    fn newton_update(&self, func: &Self, deriv: &Self) -> Option<Self>;
}

impl NewtonArg for f64 {
    fn difference(&self, other: &Self) -> Self {
        self - other
    }

    fn newton_update(&self, func: &Self, deriv: &Self) -> Option<Self> {
        if *deriv == 0.0 {
            return None;
        }
        Some(self - func / deriv)
    }
}

impl NewtonArg for DVector<f64> {
    fn difference(&self, other: &Self) -> Self {
        self - other
    }

    fn newton_update(&self, func: &Self, deriv: &Self) -> Option<Self> {
        if deriv.iter().any(|d| *d == 0.0) {
            return None;
        }
        Some(self - func.component_div(deriv))
    }
}

/// Problem solved by `SolverNewton`
pub trait NewtonProblem {
    type Arg: NewtonArg;
    /// Computes the (non-negative) norm of the argument.
    fn get_norm(&self, arg: &Self::Arg) -> f64;
    /// Computes the function at the argument.
    fn get_func(&self, arg: &Self::Arg) -> Self::Arg;
    /// Computes the derivative at the argument.
    fn get_deriv(&self, arg: &Self::Arg) -> Self::Arg;
}

/// Configuration of the Newton solver
#[derive(Debug, Clone)]
pub struct NewtonConfig {
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            max_iterations: SolverNewton::MAXITER,
        }
    }
}

/// Outcome of a Newton run
#[derive(Debug, Clone)]
pub struct NewtonResult<A> {
    /// last computed value, whatever the convergence outcome
    pub result: A,
    pub converge: bool,
    /// residuals |x_{k+1} - x_k| of every performed step
    pub history: Vec<f64>,
    pub iterations: usize,
}

impl<A> NewtonResult<A> {
    /// last residual, infinite if no step was made
    pub fn last_residual(&self) -> f64 {
        self.history.last().copied().unwrap_or(f64::INFINITY)
    }

    /// residual history as a pretty table
    pub fn history_table(&self) -> String {
        let mut builder = Builder::default();
        builder.push_record(["iteration", "residual"]);
        for (i, res) in self.history.iter().enumerate() {
            builder.push_record([(i + 1).to_string(), format!("{:.6e}", res)]);
        }
        let mut table = builder.build();
        table.with(Style::modern_rounded());
        table.to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SolverNewton {
    pub config: NewtonConfig,
}

impl SolverNewton {
    pub const MAXITER: usize = 20;

    pub fn new() -> Self {
        Self {
            config: NewtonConfig::default(),
        }
    }

    pub fn with_config(config: NewtonConfig) -> Self {
        Self { config }
    }

    /// Solves the problem with the configured tolerance and iteration budget
    pub fn solve<P: NewtonProblem>(
        &self,
        problem: &P,
        guess: P::Arg,
    ) -> Result<NewtonResult<P::Arg>> {
        Self::compute(
            problem,
            guess,
            self.config.tolerance,
            Some(self.config.max_iterations),
        )
    }

    /// Runs at most `maxiter` (default 20) Newton steps from `guess`.
    /// Stops as soon as the step residual drops below `tol`.
    pub fn compute<P: NewtonProblem>(
        problem: &P,
        guess: P::Arg,
        tol: f64,
        maxiter: Option<usize>,
    ) -> Result<NewtonResult<P::Arg>> {
        let maxiter = maxiter.unwrap_or(Self::MAXITER);
        let mut sol = guess;
        let mut history = Vec::new();
        let mut converge = false;

        while !converge && history.len() < maxiter {
            let iteration = history.len() + 1;
            let func = problem.get_func(&sol);
            let deriv = problem.get_deriv(&sol);
            let new = sol
                .newton_update(&func, &deriv)
                .ok_or(PolyError::ZeroDerivative { iteration })?;

            let res = problem.get_norm(&new.difference(&sol));
            debug!("Newton iteration = {}, residual = {:e}", iteration, res);
            history.push(res);
            sol = new;

            if res < tol {
                converge = true;
            }
        }

        let iterations = history.len();
        if converge {
            info!("Newton converged in {} iterations", iterations);
        } else {
            warn!(
                "Newton: maximum number of iterations ({}) reached without convergence",
                maxiter
            );
        }

        Ok(NewtonResult {
            result: sol,
            converge,
            history,
            iterations,
        })
    }
}
