//! Definite integrals from anchored primitives, the same for every basis:
//!
//! ```text
//! INTEGRAL[*, x, 1]  = - PRIMINTEG[*](x)
//! INTEGRAL[*, -1, x] = TOTAL[*] - INTEGRAL[*, x, 1]
//! ```
//!
//! where PRIMINTEG is anchored as PRIMINTEG[*](1) = 0 and TOTAL = INTEGRAL[*, -1, 1].
use crate::polybases::abcpolys::PolyOperator;
use itertools::Itertools;
use nalgebra::DVector;

/// Integrals over [-1, 1] of the polynomials 0..=maxindex
pub type TotalsTable = fn(usize) -> Vec<f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegSpan {
    /// over [x, 1]
    FromX,
    /// over [-1, x]
    ToX,
}

/// Definite integral built upon a primitive integral operator and a table of totals
pub struct DefiniteIntegral {
    primitive: Box<dyn PolyOperator>,
    totals: TotalsTable,
    span: IntegSpan,
}

impl DefiniteIntegral {
    pub fn new(primitive: Box<dyn PolyOperator>, totals: TotalsTable, span: IntegSpan) -> Self {
        Self {
            primitive,
            totals,
            span,
        }
    }

    /// Integral over [x, 1]
    pub fn integxb(primitive: Box<dyn PolyOperator>, totals: TotalsTable) -> Self {
        Self::new(primitive, totals, IntegSpan::FromX)
    }

    /// Integral over [-1, x]
    pub fn integax(primitive: Box<dyn PolyOperator>, totals: TotalsTable) -> Self {
        Self::new(primitive, totals, IntegSpan::ToX)
    }

    pub fn span(&self) -> IntegSpan {
        self.span
    }

    fn integ_from_x(&self, nodes: &DVector<f64>, maxindex: usize) -> Vec<DVector<f64>> {
        self.primitive
            .get_outputs(nodes, maxindex)
            .into_iter()
            .map(|val| -val)
            .collect()
    }
}

impl PolyOperator for DefiniteIntegral {
    fn get_outputs(&self, nodes: &DVector<f64>, maxindex: usize) -> Vec<DVector<f64>> {
        let from_x = self.integ_from_x(nodes, maxindex);
        match self.span {
            IntegSpan::FromX => from_x,
            IntegSpan::ToX => {
                let totals = (self.totals)(maxindex);
                totals
                    .iter()
                    .zip(from_x)
                    .map(|(total, integ)| integ.map(|v| total - v))
                    .collect()
            }
        }
    }
}

/// Triplets (F_{m-1}, F_{m+1}, m) for m = 1..=funcs.len()-2
pub fn set_triplets(
    funcs: &[DVector<f64>],
) -> impl Iterator<Item = (&DVector<f64>, &DVector<f64>, usize)> {
    funcs
        .iter()
        .tuple_windows::<(_, _, _)>()
        .enumerate()
        .map(|(i, (prev, _, coming))| (prev, coming, i + 1))
}

/// [F_0, F_1, ...] trimmed to maxindex
pub fn merge_to_maxindex(
    at_zero: DVector<f64>,
    from_one: Vec<DVector<f64>>,
    maxindex: usize,
) -> Vec<DVector<f64>> {
    let mut outs = Vec::with_capacity(maxindex + 1);
    outs.push(at_zero);
    outs.extend(from_one.into_iter().take(maxindex));
    outs
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// primitives of x^n anchored at 1: (x^{n+1} - 1)/(n+1)
    struct MonomialPrimitive;

    impl PolyOperator for MonomialPrimitive {
        fn get_outputs(&self, nodes: &DVector<f64>, maxindex: usize) -> Vec<DVector<f64>> {
            (0..=maxindex)
                .map(|n| nodes.map(|x| (x.powi(n as i32 + 1) - 1.0) / (n as f64 + 1.0)))
                .collect()
        }
    }

    fn monomial_totals(maxindex: usize) -> Vec<f64> {
        (0..=maxindex)
            .map(|n| if n % 2 == 0 { 2.0 / (n as f64 + 1.0) } else { 0.0 })
            .collect()
    }

    #[test]
    fn test_from_x_is_negated_primitive() {
        let opr = DefiniteIntegral::integxb(Box::new(MonomialPrimitive), monomial_totals);
        assert_eq!(opr.span(), IntegSpan::FromX);
        let nodes = DVector::from_vec(vec![0.0, 0.5]);
        let outs = opr.get_outputs(&nodes, 2);
        assert_eq!(outs.len(), 3);
        // INTEGRAL[x^2, 0.5, 1] = (1 - 1/8)/3
        assert_abs_diff_eq!(outs[2][1], 7.0 / 24.0, epsilon = 1e-15);
        assert_abs_diff_eq!(outs[0][0], 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_to_x_plus_from_x_is_total() {
        let integax = DefiniteIntegral::integax(Box::new(MonomialPrimitive), monomial_totals);
        let integxb = DefiniteIntegral::integxb(Box::new(MonomialPrimitive), monomial_totals);
        let nodes = DVector::from_vec(vec![-0.9, -0.2, 0.3, 0.8]);
        let ax = integax.get_outputs(&nodes, 5);
        let xb = integxb.get_outputs(&nodes, 5);
        let totals = monomial_totals(5);
        for n in 0..=5 {
            for i in 0..nodes.len() {
                assert_abs_diff_eq!(ax[n][i] + xb[n][i], totals[n], epsilon = 1e-14);
            }
        }
    }

    #[test]
    fn test_set_triplets() {
        let funcs: Vec<DVector<f64>> = (0..5)
            .map(|i| DVector::from_element(1, i as f64))
            .collect();
        let triplets: Vec<(f64, f64, usize)> = set_triplets(&funcs)
            .map(|(prev, coming, m)| (prev[0], coming[0], m))
            .collect();
        assert_eq!(triplets, vec![(0.0, 2.0, 1), (1.0, 3.0, 2), (2.0, 4.0, 3)]);
    }

    #[test]
    fn test_merge_to_maxindex() {
        let zero = DVector::from_element(1, 0.0);
        let rest = vec![DVector::from_element(1, 1.0), DVector::from_element(1, 2.0)];
        assert_eq!(merge_to_maxindex(zero.clone(), rest.clone(), 0).len(), 1);
        assert_eq!(merge_to_maxindex(zero, rest, 2).len(), 3);
    }
}
