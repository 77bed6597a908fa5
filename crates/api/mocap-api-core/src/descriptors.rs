//! Scene description contracts.
//!
//! The builder emits one ordered list of `DataDescription` entries per scene.
//! Downstream transports serialize this list; the conversion engine only
//! produces it, it never reads it back on the per-frame path.

use serde::{Deserialize, Serialize};

use crate::math::Vec3f;

/// A named, ordered collection of marker names belonging to one body.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MarkerSetDescription {
    pub name: String,
    pub marker_names: Vec<String>,
}

/// A single tracked 6-DOF entity, or one segment within a skeleton.
/// `parent_id` is -1 for a root; `offset` is always zero since the source
/// schema carries no segment offsets.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RigidBodyDescription {
    pub name: String,
    pub id: i32,
    pub parent_id: i32,
    pub offset: Vec3f,
}

/// A named tree of rigid-body segments connected via parent indices.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SkeletonDescription {
    pub name: String,
    pub id: i32,
    pub segments: Vec<RigidBodyDescription>,
}

/// One entry in the ordered scene description list.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum DataDescription {
    MarkerSet(MarkerSetDescription),
    RigidBody(RigidBodyDescription),
    Skeleton(SkeletonDescription),
}

impl DataDescription {
    /// Display name of the described entity.
    pub fn name(&self) -> &str {
        match self {
            DataDescription::MarkerSet(d) => &d.name,
            DataDescription::RigidBody(d) => &d.name,
            DataDescription::Skeleton(d) => &d.name,
        }
    }
}
