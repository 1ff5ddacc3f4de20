use crate::polybases::abcpolys::QuadratureNodeSet;
use nalgebra::DMatrix;
use tabled::{builder::Builder, settings::Style};

/// Table of nodes and weights of a node set, one row per node
pub fn quadrature_table(set: &QuadratureNodeSet) -> String {
    let mut builder = Builder::default();
    builder.push_record(["i", "node", "weight"]);
    for (i, x) in set.nodes().iter().enumerate() {
        let weight = set
            .weights()
            .map_or_else(|| "-".to_string(), |w| format!("{:.16}", w[i]));
        builder.push_record([i.to_string(), format!("{:.16}", x), weight]);
    }
    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.to_string()
}

/// Table of an operator matrix: a row per node, a column per polynomial index
pub fn matrix_table(matrix: &DMatrix<f64>, nodes: &[f64], indices: &[usize]) -> String {
    let mut builder = Builder::default();
    let mut header = vec!["x".to_string()];
    header.extend(indices.iter().map(|m| format!("m={}", m)));
    builder.push_record(header);
    for (i, row) in matrix.row_iter().enumerate() {
        let mut record = vec![nodes.get(i).map_or_else(String::new, |x| format!("{:.4}", x))];
        record.extend(row.iter().map(|v| format!("{:.6e}", v)));
        builder.push_record(record);
    }
    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.to_string()
}
