use thiserror::Error;

/// Top-level error type for the stratis thickness-estimation kernel.
#[derive(Debug, Error)]
pub enum StratisError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Unrecoverable precondition violations in the input collections.
///
/// Per-unit and per-sample problems are never reported here; they resolve to
/// the sentinel value or a discarded sample. Only inputs from which no
/// meaningful output table can be assembled are errors.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("stratigraphic column is empty")]
    EmptyColumn,

    #[error("duplicate unit name in stratigraphic column: {0}")]
    DuplicateUnit(String),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("elevation grid has zero extent ({cols} x {rows} cells)")]
    EmptyGrid { cols: usize, rows: usize },
}

/// Convenience type alias for results using [`StratisError`].
pub type Result<T> = std::result::Result<T, StratisError>;
