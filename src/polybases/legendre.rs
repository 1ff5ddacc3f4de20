//! Basis formed by the Legendre polynomials
use crate::polybases::abcpolys::{NodeRule, NodeSet, PolyBasis, PolyOperator};
use crate::polybases::errors::Result;
use std::collections::BTreeMap;

/// Legendre polynomials and their derivatives of any order
pub mod funcsderivs;
/// Gauss-Legendre nodes and weights
pub mod gaussnodes;
/// Primitive and definite integrals of Pm(x) and x*Pm(x)
pub mod integrators;

pub use funcsderivs::{Derivs, LegendreRecurr, Polys};
pub use gaussnodes::{GaussConfig, GaussNodes, NodesFinder, WeightsFinder};
pub use integrators::{IntegP0Pm, IntegP1Pm, total_integ_p0, total_integ_p1};

/// Basis formed by the Legendre polynomials.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Legendre;

impl PolyBasis for Legendre {
    fn polys(&self) -> Box<dyn PolyOperator> {
        Box::new(Polys::new())
    }

    /// order 0 gives back the polynomials themselves
    fn derivs(&self, order: usize) -> Result<Box<dyn PolyOperator>> {
        if order == 0 {
            return Ok(self.polys());
        }
        Ok(Box::new(Derivs::new(order)))
    }

    fn integax(&self, weighted: bool) -> Box<dyn PolyOperator> {
        Box::new(integrators::integax(weighted))
    }

    fn integxb(&self, weighted: bool) -> Box<dyn PolyOperator> {
        Box::new(integrators::integxb(weighted))
    }

    fn nodes(&self) -> Result<BTreeMap<NodeRule, Box<dyn NodeSet>>> {
        let mut sets: BTreeMap<NodeRule, Box<dyn NodeSet>> = BTreeMap::new();
        sets.insert(NodeRule::Gauss, Box::new(GaussNodes::new()));
        Ok(sets)
    }
}
