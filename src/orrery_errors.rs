use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrreryError {
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid Kepler solver parameter: {0}")]
    InvalidSolverParameter(String),

    #[error("Kepler equation did not converge after {iterations} iterations (residual = {residual:e})")]
    KeplerNonConvergence { iterations: usize, residual: f64 },
}
