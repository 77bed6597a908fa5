//! Build and frame conversion errors.
//!
//! Expected per-sub-entity mismatches are not errors; they are logged skips.
//! Only whole-frame aborts and capacity violations surface as `Err`.

use thiserror::Error;

/// Failures while building the scene description.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("body '{body}' has an invalid hierarchy: {reason}")]
    InvalidHierarchy { body: String, reason: String },

    #[error("{what} count {count} exceeds capacity {capacity}")]
    CapacityExceeded {
        what: &'static str,
        count: usize,
        capacity: usize,
    },
}

/// Failures that abort an entire frame conversion. Buffer contents from the
/// previous frame are left in place (stale-data semantics).
///
/// `Display` and `Error` are implemented by hand because the `source` field
/// name would otherwise be picked up by `thiserror` as an error source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrameError {
    BodyCountMismatch { source: usize, target: usize },
}

impl core::fmt::Display for FrameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FrameError::BodyCountMismatch { source, target } => write!(
                f,
                "source body count {source} does not match built marker set count {target}"
            ),
        }
    }
}

impl std::error::Error for FrameError {}
