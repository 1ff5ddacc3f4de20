//! Integrate Tn(x) and x*Tn(x) over [x, 1] and [-1, x].
use super::funcsderivs::Polys;
use crate::polybases::abcpolys::PolyOperator;
use crate::polybases::integrators::{DefiniteIntegral, merge_to_maxindex, set_triplets};
use nalgebra::DVector;

/// Indefinite integral of Tn(x) normalized to be 0 at x=1.
///
/// For n = 0:
///
/// ```text
/// INTEGRAL[T0, x] = x - 1
/// ```
///
/// For n = 1:
///
/// ```text
/// INTEGRAL[T1, x] = (x*x - 1)/2
/// ```
///
/// For n > 1:
///
/// ```text
/// INTEGRAL[Tn, x] = ALFA*T_{n+1} - BETA*T_{n-1} + BIAS
/// ```
///
/// with ALFA = 1/[2*(n+1)], BETA = 1/[2*(n-1)], BIAS = 1/[(n+1)*(n-1)].
#[derive(Debug, Clone, Default)]
pub struct IntegT0Tn {
    polys: Polys,
}

impl IntegT0Tn {
    pub fn new() -> Self {
        Self::default()
    }

    fn get_integral(prev: &DVector<f64>, coming: &DVector<f64>, count: usize) -> DVector<f64> {
        if count == 1 {
            return 0.25 * (coming - prev);
        }
        let n = count as f64;
        let alfa = 0.5 / (n + 1.0);
        let beta = 0.5 / (n - 1.0);
        let bias = 1.0 / (n * n - 1.0);
        (alfa * coming - beta * prev).add_scalar(bias)
    }
}

impl PolyOperator for IntegT0Tn {
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

/// Indefinite integral of x*Tn(x) normalized to be 0 at x=1.
///
/// For n = 0:
///
/// ```text
/// INTEGRAL[x*Tn, x] = (x*x-1)/2
/// ```
///
/// For n > 0:
///
/// ```text
/// INTEGRAL[x*Tn, x] = (1/2)*BASE_{n+1} + (1/2)*BASE_{n-1}
/// ```
///
/// where BASE_{n} = INTEGRAL[Tn, x], since 2*x*Tn = T_{n+1} + T_{n-1}.
#[derive(Debug, Clone, Default)]
pub struct IntegT1Tn {
    bases: IntegT0Tn,
}

impl IntegT1Tn {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PolyOperator for IntegT1Tn {
    fn get_outputs(&self, nodes: &DVector<f64>, maxindex: usize) -> Vec<DVector<f64>> {
        let prim_zero = nodes.map(|x| 0.5 * (x * x - 1.0));
        if maxindex == 0 {
            return vec![prim_zero];
        }
        let bases = self.bases.get_outputs(nodes, maxindex + 1);
        let from_one = set_triplets(&bases)
            .map(|(prev, coming, _)| 0.5 * prev + 0.5 * coming)
            .collect();
        merge_to_maxindex(prim_zero, from_one, maxindex)
    }
}

/// INTEGRAL[Tn, -1, 1] = (1+(-1)^n)/(1-n^2), n != 1
fn total_base(count: usize) -> f64 {
    if count == 1 {
        return 0.0;
    }
    let sign = if count % 2 == 0 { 2.0 } else { 0.0 };
    sign / (1.0 - (count * count) as f64)
}

/// INTEGRAL[Tn, -1, 1] from 0 to maxindex
pub fn total_integ_t0(maxindex: usize) -> Vec<f64> {
    (0..=maxindex).map(total_base).collect()
}

/// INTEGRAL[x*Tn, -1, 1] from 0 to maxindex
pub fn total_integ_t1(maxindex: usize) -> Vec<f64> {
    (0..=maxindex)
        .map(|count| match count {
            0 => 0.0,
            1 => 2.0 / 3.0,
            2 => 0.0,
            _ => 0.5 * total_base(count - 1) + 0.5 * total_base(count + 1),
        })
        .collect()
}

/// Integral of Tn(x), or x*Tn(x) if weighted, over [x, 1].
pub fn integxb(weighted: bool) -> DefiniteIntegral {
    if weighted {
        DefiniteIntegral::integxb(Box::new(IntegT1Tn::new()), total_integ_t1)
    } else {
        DefiniteIntegral::integxb(Box::new(IntegT0Tn::new()), total_integ_t0)
    }
}

/// Integral of Tn(x), or x*Tn(x) if weighted, over [-1, x].
pub fn integax(weighted: bool) -> DefiniteIntegral {
    if weighted {
        DefiniteIntegral::integax(Box::new(IntegT1Tn::new()), total_integ_t1)
    } else {
        DefiniteIntegral::integax(Box::new(IntegT0Tn::new()), total_integ_t0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polybases::abcpolys::PolyRequest;
    use approx::assert_abs_diff_eq;

    const TOL: f64 = 1e-11;

    // (point, index, value)
    fn validate(opr: &dyn PolyOperator, cases: &[(f64, usize, f64)]) {
        for (point, index, value) in cases {
            let request = PolyRequest::new().set_point(*point).set_indices(&[*index]);
            let mapping = opr.as_mapping(&request).unwrap();
            assert_abs_diff_eq!(mapping[index][0], *value, epsilon = TOL);
        }
    }

    #[test]
    fn test_integ_t0_tn() {
        validate(
            &IntegT0Tn::new(),
            &[
                (1.0, 0, 0.0),
                (1.0, 3, 0.0),
                (0.5, 0, -1.0 / 2.0),
                (0.5, 1, -3.0 / 8.0),
                (0.0, 5, -1.0 / 6.0),
                (0.0, 6, 1.0 / 35.0),
                (0.0, 7, 1.0 / 6.0),
                (0.0, 8, 1.0 / 63.0),
            ],
        );
    }

    #[test]
    fn test_integ_t1_tn() {
        validate(
            &IntegT1Tn::new(),
            &[
                (1.0, 0, 0.0),
                (1.0, 3, 0.0),
                (0.5, 0, -3.0 / 8.0),
                (0.0, 6, 0.0),
                (0.0, 7, 0.5 / 35.0 + 0.5 / 63.0),
            ],
        );
    }

    #[test]
    fn test_integ_t0_tn_ax() {
        validate(
            &integax(false),
            &[(1.0, 0, 2.0), (0.0, 1, -0.5), (0.5, 3, 0.1875), (0.5, 4, 0.15)],
        );
    }

    #[test]
    fn test_integ_t0_tn_xb() {
        validate(
            &integxb(false),
            &[(-1.0, 0, 2.0), (0.0, 1, 0.5), (-0.5, 3, -0.1875), (-0.5, 4, 0.15)],
        );
    }

    #[test]
    fn test_integ_t1_tn_ax() {
        validate(
            &integax(true),
            &[
                (0.5, 0, -3.0 / 8.0),
                (0.5, 1, 3.0 / 8.0),
                (0.5, 3, -0.3),
                (0.5, 4, 0.1875),
            ],
        );
    }

    #[test]
    fn test_integ_t1_tn_xb() {
        validate(
            &integxb(true),
            &[
                (0.5, 0, 3.0 / 8.0),
                (0.5, 1, 7.0 / 24.0),
                (0.5, 3, -0.1),
                (0.5, 4, -0.1875),
            ],
        );
    }

    #[test]
    fn test_total_integrals() {
        assert_eq!(total_integ_t0(1), vec![2.0, 0.0]);
        let totals = total_integ_t0(4);
        assert_abs_diff_eq!(totals[2], -2.0 / 3.0);
        assert_abs_diff_eq!(totals[3], 0.0);
        assert_abs_diff_eq!(totals[4], -2.0 / 15.0);

        assert_eq!(total_integ_t1(0), vec![0.0]);
        assert_eq!(total_integ_t1(2), vec![0.0, 2.0 / 3.0, 0.0]);
        let totals = total_integ_t1(4);
        // x*T3 = (T4 + T2)/2
        assert_abs_diff_eq!(totals[3], 0.5 * (-2.0 / 15.0) + 0.5 * (-2.0 / 3.0));
        assert_abs_diff_eq!(totals[4], 0.0);
    }

    #[test]
    fn test_totals_match_primitives() {
        // TOTAL = - PRIMINTEG(-1)
        let nodes = DVector::from_element(1, -1.0);
        let prims = IntegT0Tn::new().get_outputs(&nodes, 9);
        for (total, prim) in total_integ_t0(9).iter().zip(&prims) {
            assert_abs_diff_eq!(*total, -prim[0], epsilon = 1e-13);
        }
        let prims = IntegT1Tn::new().get_outputs(&nodes, 9);
        for (total, prim) in total_integ_t1(9).iter().zip(&prims) {
            assert_abs_diff_eq!(*total, -prim[0], epsilon = 1e-13);
        }
    }
}
