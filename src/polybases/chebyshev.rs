//! Basis formed by the Chebyshev polynomials of the 1st kind
use crate::polybases::abcpolys::{NodeRule, NodeSet, PolyBasis, PolyOperator};
use crate::polybases::errors::{PolyError, Result};
use std::collections::BTreeMap;

/// Chebyshev polynomials of both kinds, derivatives of the 1st kind
pub mod funcsderivs;
/// Primitive and definite integrals of Tn(x) and x*Tn(x)
pub mod integrators;

pub use funcsderivs::{ChebOne, ChebTwo, Derivs, Polys, UPolys};
pub use integrators::{IntegT0Tn, IntegT1Tn, total_integ_t0, total_integ_t1};

/// Basis formed by the Chebyshev polynomials of the 1st kind.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Chebyshev;

impl PolyBasis for Chebyshev {
    fn polys(&self) -> Box<dyn PolyOperator> {
        Box::new(Polys::new())
    }

    fn derivs(&self, order: usize) -> Result<Box<dyn PolyOperator>> {
        if order == 1 {
            return Ok(Box::new(Derivs::new()));
        }
        Err(PolyError::UnsupportedOperation(format!(
            "derivative of order {} is not implemented for Chebyshev",
            order
        )))
    }

    fn integax(&self, weighted: bool) -> Box<dyn PolyOperator> {
        Box::new(integrators::integax(weighted))
    }

    fn integxb(&self, weighted: bool) -> Box<dyn PolyOperator> {
        Box::new(integrators::integxb(weighted))
    }

    fn nodes(&self) -> Result<BTreeMap<NodeRule, Box<dyn NodeSet>>> {
        Err(PolyError::UnsupportedOperation(
            "node sets are not implemented for Chebyshev".to_string(),
        ))
    }
}
