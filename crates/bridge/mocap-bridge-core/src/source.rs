//! Source tracking-system schema.
//!
//! Body definitions arrive once per scene; frame data arrives once per
//! capture tick. Both are read-only inputs to the converter.

use serde::{Deserialize, Serialize};

use mocap_api_core::Vec3f;

/// Segment tree encoded as a parent-index array.
/// `parents[s]` is -1 for a root or the index of an earlier segment.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Hierarchy {
    pub segment_names: Vec<String>,
    pub parents: Vec<i32>,
}

impl Hierarchy {
    pub fn n_segments(&self) -> usize {
        self.segment_names.len()
    }

    /// Validate basic invariants: parallel arrays of equal length, and every
    /// parent index either -1 or a smaller segment index (no forward or
    /// cyclic references).
    pub fn validate_basic(&self) -> Result<(), String> {
        if self.segment_names.len() != self.parents.len() {
            return Err(format!(
                "segment name count {} does not match parent index count {}",
                self.segment_names.len(),
                self.parents.len()
            ));
        }
        for (idx, &parent) in self.parents.iter().enumerate() {
            if parent != -1 && !(0..idx as i32).contains(&parent) {
                return Err(format!(
                    "segment {idx} has parent index {parent}, expected -1 or a smaller segment index"
                ));
            }
        }
        Ok(())
    }
}

/// One body as defined by the source system. Immutable once read.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BodyDefinition {
    pub name: String,
    pub marker_names: Vec<String>,
    pub hierarchy: Hierarchy,
}

/// 6-DOF pose of one segment: position plus Euler angles in degrees
/// (rotation about X, Y, Z; applied in the source's fixed ZYX order).
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SegmentPose {
    pub position: Vec3f,
    pub euler_deg: [f32; 3],
}

/// Live tracking data for one body in one frame.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct BodyFrame {
    pub markers: Vec<Vec3f>,
    pub segments: Vec<SegmentPose>,
}

/// One captured frame from the source system.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct FrameOfData {
    pub frame_number: i32,
    pub delay: f32,
    pub bodies: Vec<BodyFrame>,
    pub unidentified_markers: Vec<Vec3f>,
}
