//! Count and sentinel predicates shared by the scene builder and the frame
//! converter. Pure functions; the skip/log decision stays with the caller.

use mocap_api_core::Vec3f;

/// First-coordinate threshold below which a position is considered not
/// currently tracked. Sources flag a vanished marker or segment by driving
/// its coordinates to a large out-of-volume magnitude.
pub const EMPTY_THRESHOLD: f32 = -9_999_999.0;

/// Source and pre-built target counts must match exactly before a
/// sub-entity conversion is allowed.
#[inline]
pub fn counts_match(source: usize, target: usize) -> bool {
    source == target
}

/// Whether this position is the untracked sentinel for the current frame.
#[inline]
pub fn is_untracked(position: &Vec3f) -> bool {
    position.x < EMPTY_THRESHOLD
}
