use ruler_types::RulerParams;
use serde::Deserialize;

use crate::errors::LoadError;
use crate::metadata::JobMetadata;
use crate::save::{FORMAT_NAME, FORMAT_VERSION};

#[derive(Debug, Clone, Deserialize)]
struct JobFileRaw {
    format: String,
    version: u32,
    job: JobMetadata,
    params: RulerParams,
}

/// Deserialize a job from a JSON string.
///
/// Checks the format identifier and version, then validates the stored
/// parameters. Fields missing from `params` take their defaults.
pub fn load_job(json: &str) -> Result<(RulerParams, JobMetadata), LoadError> {
    let raw: JobFileRaw =
        serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))?;

    if raw.format != FORMAT_NAME {
        return Err(LoadError::UnknownFormat(raw.format));
    }
    if raw.version > FORMAT_VERSION {
        return Err(LoadError::FutureVersion {
            file_version: raw.version,
            supported_version: FORMAT_VERSION,
        });
    }

    raw.params.validate()?;
    Ok((raw.params, raw.job))
}
