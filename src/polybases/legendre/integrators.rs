//! Integrate Pm(x) and x*Pm(x) over [x, 1] and [-1, x].
use super::funcsderivs::Polys;
use crate::polybases::abcpolys::PolyOperator;
use crate::polybases::integrators::{DefiniteIntegral, merge_to_maxindex, set_triplets};
use nalgebra::DVector;

/// Primitive integral of Pm(x) normalized to be 0 at x=1.
///
/// For m = 0:
///
/// ```text
/// INTEGRAL[Pm, x] = x - 1
/// ```
///
/// For m > 0:
///
/// ```text
/// INTEGRAL[Pm, x] = [P_{m+1} - P_{m-1}]/(2*m+1)
/// ```
#[derive(Debug, Clone, Default)]
pub struct IntegP0Pm {
    polys: Polys,
}

impl IntegP0Pm {
    pub fn new() -> Self {
        Self::default()
    }

    fn get_integral(prev: &DVector<f64>, coming: &DVector<f64>, count: usize) -> DVector<f64> {
        (coming - prev) / (2 * count + 1) as f64
    }
}

impl PolyOperator for IntegP0Pm {
    fn get_outputs(&self, nodes: &DVector<f64>, maxindex: usize) -> Vec<DVector<f64>> {
        let prim_zero = nodes.map(|x| x - 1.0);
        if maxindex == 0 {
            return vec![prim_zero];
        }
        let polys = self.polys.get_outputs(nodes, maxindex + 1);
        let from_one = set_triplets(&polys)
            .map(|(prev, coming, count)| Self::get_integral(prev, coming, count))
            .collect();
        merge_to_maxindex(prim_zero, from_one, maxindex)
    }
}

/// Primitive integral of x*Pm(x) normalized to be 0 at x=1.
///
/// For m = 0:
///
/// ```text
/// INTEGRAL[x*Pm, x] = (x*x-1)/2
/// ```
///
/// For m > 0:
///
/// ```text
/// INTEGRAL[x*Pm, x] = (1-ALFA)*BASE_{m+1} + ALFA*BASE_{m-1}
/// ```
///
/// where BASE_{m} = INTEGRAL[Pm, x] and ALFA = m/(2*m+1),
/// a consequence of the recurrence (2m+1)*x*Pm = (m+1)*P_{m+1} + m*P_{m-1}.
#[derive(Debug, Clone, Default)]
pub struct IntegP1Pm {
    bases: IntegP0Pm,
}

impl IntegP1Pm {
    pub fn new() -> Self {
        Self::default()
    }

    fn get_alfa(count: usize) -> f64 {
        count as f64 / (2 * count + 1) as f64
    }

    fn get_integral(prev: &DVector<f64>, coming: &DVector<f64>, count: usize) -> DVector<f64> {
        let alfa = Self::get_alfa(count);
        (1.0 - alfa) * coming + alfa * prev
    }
}

impl PolyOperator for IntegP1Pm {
    fn get_outputs(&self, nodes: &DVector<f64>, maxindex: usize) -> Vec<DVector<f64>> {
        let prim_zero = nodes.map(|x| 0.5 * (x * x - 1.0));
        if maxindex == 0 {
            return vec![prim_zero];
        }
        let bases = self.bases.get_outputs(nodes, maxindex + 1);
        let from_one = set_triplets(&bases)
            .map(|(prev, coming, count)| Self::get_integral(prev, coming, count))
            .collect();
        merge_to_maxindex(prim_zero, from_one, maxindex)
    }
}

/// INTEGRAL[Pm, -1, 1] from 0 to maxindex
pub fn total_integ_p0(maxindex: usize) -> Vec<f64> {
    let mut totals = vec![0.0; maxindex + 1];
    totals[0] = 2.0;
    totals
}

/// INTEGRAL[x*Pm, -1, 1] from 0 to maxindex
pub fn total_integ_p1(maxindex: usize) -> Vec<f64> {
    let mut totals = vec![0.0; maxindex + 1];
    if maxindex >= 1 {
        totals[1] = 2.0 / 3.0;
    }
    totals
}

/// Integral of Pm(x), or x*Pm(x) if weighted, over [x, 1].
pub fn integxb(weighted: bool) -> DefiniteIntegral {
    if weighted {
        DefiniteIntegral::integxb(Box::new(IntegP1Pm::new()), total_integ_p1)
    } else {
        DefiniteIntegral::integxb(Box::new(IntegP0Pm::new()), total_integ_p0)
    }
}

/// Integral of Pm(x), or x*Pm(x) if weighted, over [-1, x].
pub fn integax(weighted: bool) -> DefiniteIntegral {
    if weighted {
        DefiniteIntegral::integax(Box::new(IntegP1Pm::new()), total_integ_p1)
    } else {
        DefiniteIntegral::integax(Box::new(IntegP0Pm::new()), total_integ_p0)
    }
}
