use ruler_types::ParamError;
use scene_host::ObjectHandle;

/// Errors while loading a job file.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoadError {
    #[error("failed to parse file: {0}")]
    ParseError(String),

    #[error("unknown file format: {0}")]
    UnknownFormat(String),

    #[error("file version {file_version} is newer than supported version {supported_version}")]
    FutureVersion {
        file_version: u32,
        supported_version: u32,
    },

    #[error("stored parameters are invalid: {0}")]
    InvalidParams(#[from] ParamError),
}

/// Errors while saving a job file.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SaveError {
    #[error("failed to serialize job: {0}")]
    Serialize(String),
}

/// Errors during STL export.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExportError {
    #[error("object {handle} has no mesh to export")]
    NoMesh { handle: ObjectHandle },

    #[error("mesh has no triangles")]
    Empty,

    #[error("index {index} out of range (vertex count = {vertex_count})")]
    IndexOutOfRange { index: u32, vertex_count: usize },
}
