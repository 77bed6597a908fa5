//! Per-frame data buffers.
//!
//! All lists are sized once by the scene description builder and overwritten
//! in place on every captured frame; the converter never grows or shrinks
//! them. `other_markers` is a bounded buffer whose live length is tracked
//! separately in `n_other_markers`.

use serde::{Deserialize, Serialize};

use crate::math::{Quat, Vec3f};

/// Marker positions for one body; count fixed at build time.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MarkerSetData {
    pub name: String,
    pub markers: Vec<Vec3f>,
}

/// Pose of one rigid body or skeleton segment.
///
/// The tracking telemetry (`n_markers`, `mean_error`) is part of the target
/// schema but the source provides none, so the builder zeroes it and the
/// converter never touches it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RigidBodyData {
    pub id: i32,
    pub position: Vec3f,
    pub orientation: Quat,
    pub n_markers: i32,
    pub mean_error: f32,
}

impl RigidBodyData {
    /// Pre-filled entry with origin pose and zeroed telemetry.
    pub fn prefilled(id: i32) -> Self {
        Self {
            id,
            position: Vec3f::ZERO,
            orientation: Quat::IDENTITY,
            n_markers: 0,
            mean_error: 0.0,
        }
    }
}

/// One segment pose per hierarchy entry; count fixed at build time.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SkeletonData {
    pub id: i32,
    pub segments: Vec<RigidBodyData>,
}

/// One frame of converted tracking data.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct MocapFrame {
    pub frame_number: i32,
    /// Source-reported delay for this frame, copied verbatim.
    pub latency: f32,

    pub marker_sets: Vec<MarkerSetData>,
    pub rigid_bodies: Vec<RigidBodyData>,
    pub skeletons: Vec<SkeletonData>,

    /// Unidentified marker buffer, allocated to capacity at build time.
    pub other_markers: Vec<Vec3f>,
    /// Live unidentified marker count for this frame (0..=capacity).
    pub n_other_markers: usize,

    /// Summary counts present in the schema but never populated by this
    /// converter; pinned to zero for downstream parity.
    pub n_labeled_markers: i32,
    pub n_force_plates: i32,
    pub timecode: u32,
    pub timecode_subframe: u32,
}

impl MocapFrame {
    /// Unidentified markers captured this frame. The live count is clamped
    /// to the buffer capacity, so a hand-built or deserialized frame with an
    /// oversized count cannot panic here.
    #[inline]
    pub fn other_markers_live(&self) -> &[Vec3f] {
        &self.other_markers[..self.n_other_markers.min(self.other_markers.len())]
    }
}
