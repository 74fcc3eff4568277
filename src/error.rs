use thiserror::Error;

/// Top-level error type for the axisym kernel.
#[derive(Debug, Error)]
pub enum AxisymError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("reflected x-coordinate {value} is outside the i64 range")]
    CoordinateOverflow { value: i128 },
}

/// Errors related to timeline analysis.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("the moving average window size must be greater than zero")]
    ZeroWindow,

    #[error("event time {time} is not after the previous event time {last}")]
    NonMonotonicTime { time: u64, last: u64 },
}

/// Convenience type alias for results using [`AxisymError`].
pub type Result<T> = std::result::Result<T, AxisymError>;
