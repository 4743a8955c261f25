use std::io;

use thiserror::Error;

/// Everything that can abort a generation run.
///
/// Neither variant is recoverable: both propagate to the caller and the run
/// is abandoned. A [`GenerateError::Parameter`] is always raised before the
/// output target has been touched.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A supplied value cannot be interpreted as the required numeric kind,
    /// or fails the configuration invariants.
    #[error("invalid parameter `{name}`: {reason}")]
    Parameter {
        /// Field name in header order.
        name: &'static str,
        reason: String,
    },

    /// The output target could not be created, written, or flushed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl GenerateError {
    pub(crate) fn parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::Parameter {
            name,
            reason: reason.into(),
        }
    }
}
