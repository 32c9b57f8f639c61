use scene_host::{BooleanOp, HostError, ObjectHandle};

use crate::host_ext::HostBundle;

/// Errors from ring operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OpError {
    #[error("host error: {0}")]
    Host(#[from] HostError),

    /// The host's boolean operator did not report `Finished`.
    #[error("boolean {operation:?} on {target} did not finish")]
    BooleanFailed {
        operation: BooleanOp,
        target: ObjectHandle,
    },

    /// A ring was asked for parts before `create_objects` ran.
    #[error("ring geometry has not been created yet")]
    NotMaterialized,

    /// The prototype's skeleton was deleted after a finished batch.
    #[error("prototype has been released")]
    PrototypeReleased,

    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: String },
}

/// Apply a boolean and turn a non-`Finished` status into an error.
pub fn checked_boolean(
    host: &mut dyn HostBundle,
    target: ObjectHandle,
    operation: BooleanOp,
    tool: ObjectHandle,
) -> Result<(), OpError> {
    let status = host.apply_boolean(target, operation, tool)?;
    if status.is_finished() {
        Ok(())
    } else {
        Err(OpError::BooleanFailed { operation, target })
    }
}
