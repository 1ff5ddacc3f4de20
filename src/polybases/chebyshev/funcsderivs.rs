//! Chebyshev polynomials of both kinds and the first derivatives of the 1st kind
use crate::polybases::abcpolys::PolyOperator;
use crate::polybases::recurrator::RecurrTriplet;
use nalgebra::DVector;

/// Recurrence for Chebyshev polynomials of the 1st kind.
///
/// ```text
/// T0 = 1, T1 = x, NEXT = 2 * x * CURRENT - PREVIOUS
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChebOne;

/// Recurrence for Chebyshev polynomials of the 2nd kind.
///
/// ```text
/// U0 = 1, U1 = 2*x, NEXT = 2 * x * CURRENT - PREVIOUS
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChebTwo;

fn cheb_next(nodes: &DVector<f64>, prev: &DVector<f64>, curr: &DVector<f64>) -> DVector<f64> {
    2.0 * nodes.component_mul(curr) - prev
}

impl RecurrTriplet for ChebOne {
    fn gen_start_seq(&self, nodes: &DVector<f64>) -> Vec<DVector<f64>> {
        vec![nodes.map(|_| 1.0), nodes.clone()]
    }

    fn compute_next(
        &self,
        nodes: &DVector<f64>,
        prev: &DVector<f64>,
        curr: &DVector<f64>,
        _index: usize,
    ) -> DVector<f64> {
        cheb_next(nodes, prev, curr)
    }
}

impl RecurrTriplet for ChebTwo {
    fn gen_start_seq(&self, nodes: &DVector<f64>) -> Vec<DVector<f64>> {
        vec![nodes.map(|_| 1.0), 2.0 * nodes]
    }

    fn compute_next(
        &self,
        nodes: &DVector<f64>,
        prev: &DVector<f64>,
        curr: &DVector<f64>,
        _index: usize,
    ) -> DVector<f64> {
        cheb_next(nodes, prev, curr)
    }
}

/// Operator for getting basis polynomials Tn(x).
#[derive(Debug, Clone, Default)]
pub struct Polys {
    recurr: ChebOne,
}

impl Polys {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PolyOperator for Polys {
    fn get_outputs(&self, nodes: &DVector<f64>, maxindex: usize) -> Vec<DVector<f64>> {
        self.recurr.get_sequence(nodes, maxindex)
    }
}

/// Operator for getting polynomials of the 2nd kind Un(x).
#[derive(Debug, Clone, Default)]
pub struct UPolys {
    recurr: ChebTwo,
}

impl UPolys {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PolyOperator for UPolys {
    fn get_outputs(&self, nodes: &DVector<f64>, maxindex: usize) -> Vec<DVector<f64>> {
        self.recurr.get_sequence(nodes, maxindex)
    }
}

/// Operator for getting derivatives of the basis polynomials.
///
/// ```text
/// DERIV[Tn, x] = n*U_{n-1}
/// ```
#[derive(Debug, Clone, Default)]
pub struct Derivs {
    recurr: ChebTwo,
}

impl Derivs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PolyOperator for Derivs {
    fn get_outputs(&self, nodes: &DVector<f64>, maxindex: usize) -> Vec<DVector<f64>> {
        let mut derivs = Vec::with_capacity(maxindex + 1);
        derivs.push(DVector::zeros(nodes.len()));
        if maxindex == 0 {
            return derivs;
        }
        let upolys = self.recurr.get_sequence(nodes, maxindex - 1);
        derivs.extend(
            upolys
                .into_iter()
                .enumerate()
                .map(|(i, u)| (i + 1) as f64 * u),
        );
        derivs
    }
}
