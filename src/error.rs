// src/error.rs

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("division by zero: {0}")]
    DivisionByZero(&'static str),
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),
}

pub type GeometryResult<T> = Result<T, GeometryError>;

pub(crate) fn ensure_finite(name: &str, value: f64) -> GeometryResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::DegenerateGeometry(format!("{name} must be finite, got {value}")))
    }
}
