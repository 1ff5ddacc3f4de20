use std::fmt;

/// Error types for polynomial operators, node sets and the Newton engine
#[derive(Debug, Clone, PartialEq)]
pub enum PolyError {
    /// invalid request: empty index set, missing nodes, node/weight shapes mismatch...
    ConfigurationError(String),
    /// derivative order or node set kind not implemented by the selected basis
    UnsupportedOperation(String),
    /// Newton iterations exhausted without reaching the tolerance
    ConvergenceError { iterations: usize, residual: f64 },
    /// Newton step hit an exactly zero derivative
    ZeroDerivative { iteration: usize },
}

impl fmt::Display for PolyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PolyError::ConfigurationError(msg) => write!(f, "Invalid configuration: {}", msg),
            PolyError::UnsupportedOperation(msg) => write!(f, "Unsupported operation: {}", msg),
            PolyError::ConvergenceError {
                iterations,
                residual,
            } => write!(
                f,
                "No convergence after {} iterations, last residual = {:e}",
                iterations, residual
            ),
            PolyError::ZeroDerivative { iteration } => {
                write!(f, "Derivative is zero at Newton iteration {}", iteration)
            }
        }
    }
}

impl std::error::Error for PolyError {}

pub type Result<T> = std::result::Result<T, PolyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = PolyError::ConfigurationError("empty index set".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: empty index set");

        let err = PolyError::ConvergenceError {
            iterations: 10,
            residual: 1e-3,
        };
        assert!(err.to_string().contains("10 iterations"));

        let err = PolyError::ZeroDerivative { iteration: 2 };
        assert_eq!(err.to_string(), "Derivative is zero at Newton iteration 2");
    }

    #[test]
    fn test_boxed_error() {
        let err: Box<dyn std::error::Error> =
            Box::new(PolyError::UnsupportedOperation("nodes".to_string()));
        assert_eq!(err.to_string(), "Unsupported operation: nodes");
    }
}
