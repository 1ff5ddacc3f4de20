//! Capability sets of polynomial bases
//!
//! - `PolyOperator`: an operator on a polynomial sequence (evaluation, derivative, integral...).
//! - `PolyBasis`: a factory of operators and node sets.
//! - `NodeSet`: a set of distinct points in [-1, 1], possibly with quadrature weights.
//!
//! Operators are stateless: nodes and indices travel in an immutable `PolyRequest`, so one
//! operator instance may serve any number of requests.
use crate::polybases::chebyshev::Chebyshev;
use crate::polybases::errors::{PolyError, Result};
use crate::polybases::legendre::Legendre;
use enum_dispatch::enum_dispatch;
use nalgebra::{DMatrix, DVector};
use std::collections::{BTreeMap, BTreeSet};
use strum_macros::{Display, EnumIter, EnumString};

/// Nodes and polynomial indices an operator is realized for
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolyRequest {
    nodes: Option<DVector<f64>>,
    indices: BTreeSet<usize>,
}

impl PolyRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines the output points (collocation points in [-1, 1])
    pub fn set_nodes(self, nodes: &[f64]) -> Self {
        self.set_nodes_vector(DVector::from_column_slice(nodes))
    }

    pub fn set_nodes_vector(mut self, nodes: DVector<f64>) -> Self {
        self.nodes = Some(nodes);
        self
    }

    /// Single output point
    pub fn set_point(self, x: f64) -> Self {
        self.set_nodes(&[x])
    }

    /// Defines the polynomials to include, duplicates are merged
    pub fn set_indices(mut self, indices: &[usize]) -> Self {
        self.indices = indices.iter().copied().collect();
        self
    }

    pub fn nodes(&self) -> Option<&DVector<f64>> {
        self.nodes.as_ref()
    }

    pub fn indices(&self) -> &BTreeSet<usize> {
        &self.indices
    }

    pub fn maxindex(&self) -> Option<usize> {
        self.indices.last().copied()
    }

    /// Checks the request before any numeric work, returns the nodes and the max index
    pub fn validate(&self) -> Result<(&DVector<f64>, usize)> {
        let nodes = self.nodes.as_ref().ok_or_else(|| {
            PolyError::ConfigurationError("nodes are not defined".to_string())
        })?;
        let maxindex = self.maxindex().ok_or_else(|| {
            PolyError::ConfigurationError("set of polynomial indices is empty".to_string())
        })?;
        Ok((nodes, maxindex))
    }
}

/// Operator on a polynomial sequence.
pub trait PolyOperator: Send + Sync {
    /// Images of the polynomials 0..=maxindex tabulated at the nodes
    fn get_outputs(&self, nodes: &DVector<f64>, maxindex: usize) -> Vec<DVector<f64>>;

    /// Realizes the operator as an index-to-output mapping.
    fn as_mapping(&self, request: &PolyRequest) -> Result<BTreeMap<usize, DVector<f64>>> {
        let (nodes, maxindex) = request.validate()?;
        let outputs = self.get_outputs(nodes, maxindex);
        Ok(map_results(outputs, request.indices()))
    }

    /// Realizes the operator as a Vandermonde-like matrix:
    /// columns are images of the polynomials tabulated at the nodes.
    fn as_matrix(&self, request: &PolyRequest) -> Result<DMatrix<f64>> {
        let mapping = self.as_mapping(request)?;
        Ok(dict_to_mat(&mapping))
    }
}

/// keeps the requested members of a full output sequence
pub fn map_results(
    outputs: Vec<DVector<f64>>,
    indices: &BTreeSet<usize>,
) -> BTreeMap<usize, DVector<f64>> {
    outputs
        .into_iter()
        .enumerate()
        .filter(|(i, _)| indices.contains(i))
        .collect()
}

/// stacks the values of the mapping as columns, ascending index order
pub fn dict_to_mat(mapping: &BTreeMap<usize, DVector<f64>>) -> DMatrix<f64> {
    let columns: Vec<&DVector<f64>> = mapping.values().collect();
    let nrows = columns.first().map_or(0, |col| col.len());
    DMatrix::from_fn(nrows, columns.len(), |i, j| columns[j][i])
}

/// Names of the node sets a basis may provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NodeRule {
    /// Gauss nodes with the weights of the Gauss quadrature
    Gauss,
}

/// Nodes (and optional weights) of a set, immutable once built
#[derive(Debug, Clone, PartialEq)]
pub struct QuadratureNodeSet {
    nodes: DVector<f64>,
    weights: Option<DVector<f64>>,
}

impl QuadratureNodeSet {
    pub fn new(nodes: DVector<f64>, weights: Option<DVector<f64>>) -> Result<Self> {
        if let Some(w) = &weights {
            if w.len() != nodes.len() {
                return Err(PolyError::ConfigurationError(format!(
                    "{} weights for {} nodes",
                    w.len(),
                    nodes.len()
                )));
            }
        }
        Ok(Self { nodes, weights })
    }

    pub fn nodes(&self) -> &DVector<f64> {
        &self.nodes
    }

    pub fn weights(&self) -> Option<&DVector<f64>> {
        self.weights.as_ref()
    }

    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Applies the quadrature rule: SUM[w_i * f(x_i)]
    pub fn integrate<F: Fn(f64) -> f64>(&self, f: F) -> Result<f64> {
        let weights = self.weights.as_ref().ok_or_else(|| {
            PolyError::ConfigurationError("node set carries no quadrature weights".to_string())
        })?;
        Ok(self
            .nodes
            .iter()
            .zip(weights.iter())
            .map(|(x, w)| w * f(*x))
            .sum())
    }
}

/// Set of nodes associated with a polynomial basis.
pub trait NodeSet: Send + Sync {
    fn find_nodes(&self, number: usize) -> Result<DVector<f64>>;

    /// None if the set has no accompanying quadrature
    fn find_weights(&self, nodes: &DVector<f64>) -> Result<Option<DVector<f64>>>;

    /// Computes the nodes and the weights of a set of the given size.
    fn set_size(&self, number: usize) -> Result<QuadratureNodeSet> {
        let nodes = self.find_nodes(number)?;
        let weights = self.find_weights(&nodes)?;
        QuadratureNodeSet::new(nodes, weights)
    }
}

/// Polynomial basis: factory of operators and node sets.
#[enum_dispatch]
pub trait PolyBasis {
    /// Operator that evaluates polynomials.
    fn polys(&self) -> Box<dyn PolyOperator>;

    /// Operator that differentiates polynomials, `order` of the derivative from one.
    fn derivs(&self, order: usize) -> Result<Box<dyn PolyOperator>>;

    /// Operator that integrates polynomials over [-1, x], of x*P(x) if weighted.
    fn integax(&self, weighted: bool) -> Box<dyn PolyOperator>;

    /// Operator that integrates polynomials over [x, 1], of x*P(x) if weighted.
    fn integxb(&self, weighted: bool) -> Box<dyn PolyOperator>;

    /// Available node sets by name.
    fn nodes(&self) -> Result<BTreeMap<NodeRule, Box<dyn NodeSet>>>;
}

/// Bases selectable by name, e.g. `"legendre".parse::<Basis>()`
#[enum_dispatch(PolyBasis)]
#[derive(Debug, Clone, Copy, PartialEq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Basis {
    Legendre,
    Chebyshev,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// x^n by running products
    struct Monomials;

    impl PolyOperator for Monomials {
        fn get_outputs(&self, nodes: &DVector<f64>, maxindex: usize) -> Vec<DVector<f64>> {
            let mut outs = vec![nodes.map(|_| 1.0)];
            for n in 1..=maxindex {
                let next = outs[n - 1].component_mul(nodes);
                outs.push(next);
            }
            outs
        }
    }

    #[test]
    fn test_request_builder() {
        let request = PolyRequest::new()
            .set_nodes(&[0.0, 0.5])
            .set_indices(&[3, 1, 3]);
        assert_eq!(request.indices().iter().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(request.maxindex(), Some(3));
        assert_eq!(request.nodes().unwrap().len(), 2);
    }

    #[test]
    fn test_request_validation() {
        let err = PolyRequest::new().set_indices(&[1]).validate().unwrap_err();
        assert!(matches!(err, PolyError::ConfigurationError(_)));

        let err = Monomials
            .as_mapping(&PolyRequest::new().set_point(0.5).set_indices(&[]))
            .unwrap_err();
        assert!(matches!(err, PolyError::ConfigurationError(_)));
    }

    #[test]
    fn test_as_mapping_filters_indices() {
        let request = PolyRequest::new().set_nodes(&[2.0, 3.0]).set_indices(&[0, 2]);
        let mapping = Monomials.as_mapping(&request).unwrap();
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping[&0], DVector::from_vec(vec![1.0, 1.0]));
        assert_eq!(mapping[&2], DVector::from_vec(vec![4.0, 9.0]));
        assert!(!mapping.contains_key(&1));
    }

    #[test]
    fn test_as_matrix_columns_follow_mapping() {
        let request = PolyRequest::new()
            .set_nodes(&[-1.0, 0.5, 2.0])
            .set_indices(&[3, 0, 1]);
        let mapping = Monomials.as_mapping(&request).unwrap();
        let mat = Monomials.as_matrix(&request).unwrap();
        assert_eq!(mat.shape(), (3, 3));
        for (j, col) in mapping.values().enumerate() {
            assert_eq!(mat.column(j).clone_owned(), *col);
        }
        assert_abs_diff_eq!(mat[(2, 2)], 8.0);
    }

    #[test]
    fn test_idempotent_mapping() {
        let request = PolyRequest::new().set_nodes(&[0.1, 0.7]).set_indices(&[1, 4]);
        let first = Monomials.as_mapping(&request).unwrap();
        let second = Monomials.as_mapping(&request).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_quadrature_node_set() {
        let set = QuadratureNodeSet::new(
            DVector::from_vec(vec![-1.0, 1.0]),
            Some(DVector::from_vec(vec![1.0, 1.0])),
        )
        .unwrap();
        assert_eq!(set.size(), 2);
        assert_abs_diff_eq!(set.integrate(|x| x * x).unwrap(), 2.0);

        let err = QuadratureNodeSet::new(
            DVector::from_vec(vec![0.0]),
            Some(DVector::from_vec(vec![1.0, 1.0])),
        )
        .unwrap_err();
        assert!(matches!(err, PolyError::ConfigurationError(_)));

        let bare = QuadratureNodeSet::new(DVector::from_vec(vec![0.0]), None).unwrap();
        assert!(bare.weights().is_none());
        assert!(bare.integrate(|x| x).is_err());
    }

    #[test]
    fn test_node_rule_names() {
        assert_eq!(NodeRule::Gauss.to_string(), "gauss");
        assert_eq!("Gauss".parse::<NodeRule>().unwrap(), NodeRule::Gauss);
    }
}
