use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Bookkeeping stored next to the parameters of a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMetadata {
    /// Stable identity of the job across saves.
    pub job_id: Uuid,
    /// Human-readable job name.
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl JobMetadata {
    /// Fresh metadata with a new id and the current timestamp.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            job_id: Uuid::new_v4(),
            name: name.into(),
            created: now,
            modified: now,
        }
    }

    /// Mark the job as modified now.
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }
}
