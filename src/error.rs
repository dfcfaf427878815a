use thiserror::Error;

/// Top-level error type for the Muralis wall-boundary kernel.
#[derive(Debug, Error)]
pub enum MuralisError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// The joint angle at a corner is within epsilon of 0 or 2π, so the
    /// miter offset magnitude is unbounded.
    #[error("degenerate miter joint: theta = {theta} rad")]
    DegenerateMiter { theta: f64 },

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to the floorplan model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),

    #[error("wall thickness must be positive, got {0}")]
    NonPositiveThickness(f64),

    #[error("wall height must be positive, got {0}")]
    NonPositiveHeight(f64),

    #[error("wall centerline has zero length")]
    ZeroLengthCenterline,

    #[error("boundary loop needs at least 2 edges, got {0}")]
    InvalidLoop(usize),
}

/// Convenience type alias for results using [`MuralisError`].
pub type Result<T> = std::result::Result<T, MuralisError>;
