//! examples of usage of RustedPolyBases
/// Vandermonde matrices, quadratures, differentiation matrices
pub mod polybases_examples;
