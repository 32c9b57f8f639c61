use ruler_types::RulerParams;
use serde::Serialize;

use crate::errors::SaveError;
use crate::metadata::JobMetadata;

/// Format identifier written into every job file.
pub const FORMAT_NAME: &str = "ring-ruler";

/// Current file format version.
pub const FORMAT_VERSION: u32 = 1;

/// The top-level file structure.
#[derive(Debug, Clone, Serialize)]
pub struct JobFile<'a> {
    pub format: &'a str,
    pub version: u32,
    pub job: &'a JobMetadata,
    /// Everything needed to rerun the batch.
    pub params: &'a RulerParams,
}

/// Serialize a job to a pretty-printed JSON string.
pub fn save_job(params: &RulerParams, metadata: &JobMetadata) -> Result<String, SaveError> {
    let file = JobFile {
        format: FORMAT_NAME,
        version: FORMAT_VERSION,
        job: metadata,
        params,
    };
    serde_json::to_string_pretty(&file).map_err(|e| SaveError::Serialize(e.to_string()))
}
