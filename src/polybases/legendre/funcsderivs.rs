//! Legendre polynomials and their derivatives of any order
use crate::polybases::abcpolys::PolyOperator;
use crate::polybases::recurrator::RecurrTriplet;
use nalgebra::DVector;

/// Recurrence for Legendre polynomials and their derivatives.
///
/// ```text
/// NEXT = alfa * x * CURRENT - beta * PREVIOUS
/// ```
///
/// where
///
/// ```text
/// alfa = (2*n+1)/(n-m+1)
/// beta = (n+m)/(n-m+1)
/// ```
///
/// n is the index of CURRENT, m is the order of the derivative (from 0).
/// The m-th derivatives of P_0..P_{m-1} vanish, the one of P_m is the constant (2m)!/(m!*2^m).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendreRecurr {
    pub order: usize,
}

impl LegendreRecurr {
    pub fn new(order: usize) -> Self {
        Self { order }
    }

    fn get_alfa(index: f64, order: f64) -> f64 {
        (2.0 * index + 1.0) / (index - order + 1.0)
    }

    fn get_beta(index: f64, order: f64) -> f64 {
        (index + order) / (index - order + 1.0)
    }

    /// (2m)!/(m!*2^m) = 1*3*5*...*(2m-1), the product form does not overflow early
    pub fn deriv_at_order(order: usize) -> f64 {
        (1..=order).map(|k| (2 * k - 1) as f64).product()
    }
}

impl RecurrTriplet for LegendreRecurr {
    fn gen_start_seq(&self, nodes: &DVector<f64>) -> Vec<DVector<f64>> {
        if self.order == 0 {
            return vec![nodes.map(|_| 1.0), nodes.clone()];
        }
        let mut seq = vec![DVector::zeros(nodes.len()); self.order];
        seq.push(DVector::from_element(
            nodes.len(),
            Self::deriv_at_order(self.order),
        ));
        seq
    }

    fn compute_next(
        &self,
        nodes: &DVector<f64>,
        prev: &DVector<f64>,
        curr: &DVector<f64>,
        index: usize,
    ) -> DVector<f64> {
        let alfa = Self::get_alfa(index as f64, self.order as f64);
        let beta = Self::get_beta(index as f64, self.order as f64);
        alfa * nodes.component_mul(curr) - beta * prev
    }
}

/// Computes the Legendre polynomials.
#[derive(Debug, Clone)]
pub struct Polys {
    recurr: LegendreRecurr,
}

impl Polys {
    pub fn new() -> Self {
        Self {
            recurr: LegendreRecurr::new(0),
        }
    }
}

impl Default for Polys {
    fn default() -> Self {
        Self::new()
    }
}

impl PolyOperator for Polys {
    fn get_outputs(&self, nodes: &DVector<f64>, maxindex: usize) -> Vec<DVector<f64>> {
        self.recurr.get_sequence(nodes, maxindex)
    }
}

/// Computes the derivatives of Legendre polynomials.
#[derive(Debug, Clone)]
pub struct Derivs {
    recurr: LegendreRecurr,
}

impl Derivs {
    pub fn new(order: usize) -> Self {
        Self {
            recurr: LegendreRecurr::new(order),
        }
    }

    pub fn order(&self) -> usize {
        self.recurr.order
    }
}

impl PolyOperator for Derivs {
    fn get_outputs(&self, nodes: &DVector<f64>, maxindex: usize) -> Vec<DVector<f64>> {
        self.recurr.get_sequence(nodes, maxindex)
    }
}
