use thiserror::Error;

/// Top-level error type for the planar geometry core.
#[derive(Debug, Error)]
pub enum PlanarError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,
}

/// Non-match failures from parsing the `x & y` pair grammar.
///
/// Parsing is the single partial operation in this crate; a failed parse is
/// an ordinary value, never a panic.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing `&` separator in {0:?}")]
    MissingSeparator(String),

    #[error("unbalanced parentheses in {0:?}")]
    UnbalancedParens(String),

    #[error("invalid component {0:?}")]
    InvalidComponent(String),

    #[error("expected `P (x & y)` point form in {0:?}")]
    MissingPointTag(String),
}

/// Convenience type alias for results using [`PlanarError`].
pub type Result<T> = std::result::Result<T, PlanarError>;
