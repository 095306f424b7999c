use thiserror::Error;

/// Top-level error type for the UV layout tools.
#[derive(Debug, Error)]
pub enum UvError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero uv area over {faces} face(s), texel ratio is undefined")]
    ZeroUvArea { faces: usize },
}

/// Errors related to mesh and selection lookups.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("{kind} index {index} is out of range (len {len})")]
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        len: usize,
    },

    #[error("invalid face: {0}")]
    InvalidFace(String),
}

/// Errors related to layout and density operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{mode} is not a valid {family} mode")]
    InvalidMode { family: &'static str, mode: String },

    #[error("operation needs at least {required} shells, got {found}")]
    InsufficientShells { required: usize, found: usize },

    #[error("nothing selected")]
    EmptySelection,
}

/// Errors related to the persisted settings document.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings document is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("settings root must be a JSON object")]
    NotAnObject,

    #[error("setting {key} is not a {expected}")]
    TypeMismatch { key: String, expected: &'static str },
}

/// Convenience type alias for results using [`UvError`].
pub type Result<T> = std::result::Result<T, UvError>;
