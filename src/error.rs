//! Selector failure taxonomy.

use crate::mode::Mode;
use thiserror::Error;

/// Errors the selector can report.
///
/// The original script assumed its page fixtures always exist and crashed
/// when they did not; these variants make those faults deliberate returns
/// instead. Uncertainty about the reader's preference is never an error;
/// it resolves to the synchronous default.
#[derive(Debug, Error)]
pub enum SelectorError {
    /// No header topic element to mount the dropdown into.
    #[error("no header topic element to mount the mode dropdown")]
    MissingHeaderTopic,

    /// A required navigation anchor was not found.
    #[error("navigation anchor for the {0} reference is missing")]
    MissingNavAnchor(Mode),

    /// A clicked entry's text matched neither mode label.
    #[error("unrecognized selector entry: {0:?}")]
    UnknownLabel(String),

    /// The chosen mode could not be persisted.
    #[error("failed to persist reference mode preference")]
    Preferences(#[source] anyhow::Error),
}
