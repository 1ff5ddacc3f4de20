// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
use crate::Utils::logger::init_logger;
use crate::Utils::tables::{matrix_table, quadrature_table};
use crate::polybases::{
    Basis, NodeRule, PolyBasis, PolyError, PolyRequest, QuadratureNodeSet, Result,
};
use log::info;
use nalgebra::{DMatrix, DVector};
use std::f64::consts::PI;
use strum::IntoEnumIterator;

/// Gauss set of the Legendre basis
fn gauss_set(number: usize) -> Result<QuadratureNodeSet> {
    let basis: Basis = "legendre".parse().map_err(|_| {
        PolyError::ConfigurationError("legendre basis is not registered".to_string())
    })?;
    let sets = basis.nodes()?;
    let gauss = sets.get(&NodeRule::Gauss).ok_or_else(|| {
        PolyError::UnsupportedOperation("legendre basis has no Gauss nodes".to_string())
    })?;
    gauss.set_size(number)
}

/// Chebyshev differentiation matrix D = T' * T^{-1} on the extrema x_k = cos(pi*k/(n-1)),
/// so that D*f(x) = f'(x) exactly for polynomials of degree < n.
pub fn chebyshev_diff_matrix(number: usize) -> Result<(DVector<f64>, DMatrix<f64>)> {
    if number < 2 {
        return Err(PolyError::ConfigurationError(
            "differentiation matrix needs at least 2 nodes".to_string(),
        ));
    }
    let nodes = DVector::from_fn(number, |k, _| {
        (PI * (number - 1 - k) as f64 / (number - 1) as f64).cos()
    });
    let basis = Basis::from(crate::polybases::Chebyshev);
    let request = PolyRequest::new()
        .set_nodes_vector(nodes.clone())
        .set_indices(&(0..number).collect::<Vec<_>>());
    let vander = basis.polys().as_matrix(&request)?;
    let derivs = basis.derivs(1)?.as_matrix(&request)?;
    let inverse = vander.try_inverse().ok_or_else(|| {
        PolyError::ConfigurationError("Chebyshev Vandermonde matrix is singular".to_string())
    })?;
    Ok((nodes, derivs * inverse))
}

pub fn polybases_examples(example: usize) -> Result<()> {
    init_logger(Some("info"))?;
    match example {
        0 => {
            // Legendre Vandermonde matrix at the Gauss nodes
            let quad = gauss_set(5)?;
            println!("{}", quadrature_table(&quad));
            let indices: Vec<usize> = (0..5).collect();
            let request = PolyRequest::new()
                .set_nodes_vector(quad.nodes().clone())
                .set_indices(&indices);
            let vander = Basis::from(crate::polybases::Legendre)
                .polys()
                .as_matrix(&request)?;
            println!("{}", matrix_table(&vander, quad.nodes().as_slice(), &indices));
        }
        1 => {
            // INTEGRAL[x^2, -1, 1] by the quadrature and by the integral operator,
            // x^2 = (2*P2 + P0)/3
            let quad = gauss_set(3)?;
            let by_quadrature = quad.integrate(|x| x * x)?;
            let request = PolyRequest::new().set_point(1.0).set_indices(&[0, 2]);
            let integ = Basis::from(crate::polybases::Legendre)
                .integax(false)
                .as_mapping(&request)?;
            let by_operator = (2.0 * integ[&2][0] + integ[&0][0]) / 3.0;
            info!(
                "INTEGRAL[x^2, -1, 1]: quadrature {}, operator {}",
                by_quadrature, by_operator
            );
        }
        2 => {
            // differentiate x^3 with the Chebyshev differentiation matrix
            let (nodes, diff) = chebyshev_diff_matrix(6)?;
            let f = nodes.map(|x| x.powi(3));
            let df = &diff * f;
            let error = (df - nodes.map(|x| 3.0 * x * x)).amax();
            info!("max error of d(x^3)/dx on {} nodes: {:e}", nodes.len(), error);
        }
        3 => {
            // every basis by name: integrals of x*F_m(x) over [x, 1]
            let nodes = [-0.5, 0.0, 0.5];
            let indices = [0, 1, 2, 3];
            let request = PolyRequest::new().set_nodes(&nodes).set_indices(&indices);
            for basis in Basis::iter() {
                let integ = basis.integxb(true).as_matrix(&request)?;
                println!("{}\n{}", basis, matrix_table(&integ, &nodes, &indices));
            }
        }
        _ => {
            println!("example {} does not exist", example);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_all_examples_run() {
        for example in 0..=4 {
            polybases_examples(example).unwrap();
        }
    }

    #[test]
    fn test_chebyshev_diff_matrix() {
        let (nodes, diff) = chebyshev_diff_matrix(7).unwrap();
        assert_abs_diff_eq!(nodes[0], -1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(nodes[6], 1.0, epsilon = 1e-15);
        // constants are annihilated, x^5 is differentiated exactly
        let ones = DVector::from_element(7, 1.0);
        assert!((&diff * ones).amax() < 1e-10);
        let df = &diff * nodes.map(|x| x.powi(5));
        for (i, x) in nodes.iter().enumerate() {
            assert_abs_diff_eq!(df[i], 5.0 * x.powi(4), epsilon = 1e-9);
        }
        assert!(chebyshev_diff_matrix(1).is_err());
    }
}
