//! Scene Description Builder.
//!
//! Runs once at session start or on scene change. A single ordered pass over
//! the body definitions emits the descriptor list and simultaneously
//! pre-sizes every frame buffer the Frame Data Converter will later write
//! into. Classification is by segment count: 0 = markers only, 1 = a
//! single-bone skeleton promoted to a rigid body, >1 = an articulated
//! skeleton (when skeleton handling is enabled).

use mocap_api_core::{
    DataDescription, MarkerSetData, MarkerSetDescription, MocapFrame, RigidBodyData,
    RigidBodyDescription, SkeletonData, SkeletonDescription, Vec3f,
};

use crate::convert::Converter;
use crate::error::BuildError;
use crate::source::BodyDefinition;

/// Owned result of one build: the descriptor list, the pre-sized frame
/// buffers, and the summary counts. Lives for the session; a fresh build is
/// required whenever the source scene's body/segment composition changes.
#[derive(Clone, Debug, Default)]
pub struct SceneDescription {
    pub descriptions: Vec<DataDescription>,
    pub frame: MocapFrame,
    pub n_marker_sets: usize,
    pub n_rigid_bodies: usize,
    pub n_skeletons: usize,
}

impl Converter {
    /// Build the scene description and pre-sized frame buffers from an
    /// ordered list of body definitions. Deterministic and order-preserving:
    /// descriptor order mirrors input body order.
    pub fn build_scene(&self, defs: &[BodyDefinition]) -> Result<SceneDescription, BuildError> {
        let cfg = self.config();
        if defs.len() > cfg.max_bodies {
            return Err(BuildError::CapacityExceeded {
                what: "body",
                count: defs.len(),
                capacity: cfg.max_bodies,
            });
        }

        let mut descriptions = Vec::new();
        let mut marker_sets = Vec::with_capacity(defs.len());
        let mut rigid_bodies = Vec::new();
        let mut skeletons = Vec::new();

        for (body_idx, def) in defs.iter().enumerate() {
            def.hierarchy
                .validate_basic()
                .map_err(|reason| BuildError::InvalidHierarchy {
                    body: def.name.clone(),
                    reason,
                })?;
            if def.marker_names.len() > cfg.max_markers_per_set {
                return Err(BuildError::CapacityExceeded {
                    what: "marker",
                    count: def.marker_names.len(),
                    capacity: cfg.max_markers_per_set,
                });
            }
            let n_segments = def.hierarchy.n_segments();
            if n_segments > cfg.max_segments_per_body {
                return Err(BuildError::CapacityExceeded {
                    what: "segment",
                    count: n_segments,
                    capacity: cfg.max_segments_per_body,
                });
            }

            descriptions.push(DataDescription::MarkerSet(MarkerSetDescription {
                name: def.name.clone(),
                marker_names: def.marker_names.clone(),
            }));
            marker_sets.push(MarkerSetData {
                name: def.name.clone(),
                markers: vec![Vec3f::ZERO; def.marker_names.len()],
            });

            if n_segments == 1 {
                // One-bone skeleton, treated as a rigid body named after its
                // sole segment; the id is the body index, not the segment
                // index, so the frame converter can resolve the source body.
                descriptions.push(DataDescription::RigidBody(RigidBodyDescription {
                    name: def.hierarchy.segment_names[0].clone(),
                    id: body_idx as i32,
                    parent_id: -1,
                    offset: Vec3f::ZERO,
                }));
                rigid_bodies.push(RigidBodyData::prefilled(body_idx as i32));
            } else if n_segments > 1 && cfg.handle_skeletons {
                let segments = def
                    .hierarchy
                    .segment_names
                    .iter()
                    .enumerate()
                    .map(|(seg_idx, seg_name)| RigidBodyDescription {
                        name: seg_name.clone(),
                        id: seg_idx as i32,
                        parent_id: def.hierarchy.parents[seg_idx],
                        offset: Vec3f::ZERO,
                    })
                    .collect();
                descriptions.push(DataDescription::Skeleton(SkeletonDescription {
                    name: def.name.clone(),
                    id: body_idx as i32,
                    segments,
                }));
                skeletons.push(SkeletonData {
                    id: body_idx as i32,
                    segments: (0..n_segments)
                        .map(|seg_idx| RigidBodyData::prefilled(seg_idx as i32))
                        .collect(),
                });
            }
        }

        let n_marker_sets = marker_sets.len();
        let n_rigid_bodies = rigid_bodies.len();
        let n_skeletons = skeletons.len();
        let frame = MocapFrame {
            frame_number: 0,
            latency: 0.0,
            marker_sets,
            rigid_bodies,
            skeletons,
            other_markers: vec![Vec3f::ZERO; cfg.max_unidentified_markers],
            n_other_markers: 0,
            n_labeled_markers: 0,
            n_force_plates: 0,
            timecode: 0,
            timecode_subframe: 0,
        };

        Ok(SceneDescription {
            descriptions,
            frame,
            n_marker_sets,
            n_rigid_bodies,
            n_skeletons,
        })
    }
}
