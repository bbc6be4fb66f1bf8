use thiserror::Error;

pub type DrillDownResult<T> = Result<T, DrillDownError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DrillDownError {
    #[error(
        "dataset invariant violated: series {series} has {actual} values, expected {expected} (category count)"
    )]
    InvariantViolation {
        series: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("unknown filter facet: {0}")]
    UnknownFacet(String),

    #[error("chart data source failed: {0}")]
    DataSource(String),

    #[error("translation lookup failed: {0}")]
    Translation(String),

    #[error("render failed: {0}")]
    Render(String),
}
