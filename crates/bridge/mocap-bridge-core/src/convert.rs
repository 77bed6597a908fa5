//! Frame Data Converter.
//!
//! `convert_frame` overwrites the pre-sized buffers produced by
//! `Converter::build_scene` with one frame of live source data. Each
//! sub-entity converts independently: a count mismatch skips that entity
//! (logged at error level) while its siblings still convert. Only a
//! whole-frame body-count mismatch aborts the conversion. The per-frame path
//! performs no heap allocation and is safe to call at tracking-tick rate.

use log::{error, warn};

use mocap_api_core::{euler_zyx_deg_to_quat, MarkerSetData, MocapFrame, Quat, RigidBodyData, Vec3f};

use crate::config::ConverterConfig;
use crate::error::FrameError;
use crate::source::{BodyFrame, FrameOfData, SegmentPose};
use crate::validate::{counts_match, is_untracked};

/// Conversion engine. Holds its configuration by value; callers own the
/// scene description and frame buffers it writes into.
#[derive(Clone, Debug, Default)]
pub struct Converter {
    cfg: ConverterConfig,
}

impl Converter {
    pub fn new(cfg: ConverterConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.cfg
    }

    /// Factor applied to every tracked position coordinate.
    pub fn unit_scale(&self) -> f32 {
        self.cfg.unit_scale
    }

    /// Set the unit scale factor; takes effect on the next conversion and
    /// does not rescale already-written buffers.
    pub fn set_unit_scale(&mut self, factor: f32) {
        self.cfg.unit_scale = factor;
    }

    pub fn is_handling_unidentified_markers(&self) -> bool {
        self.cfg.handle_unidentified_markers
    }

    pub fn set_handle_unidentified_markers(&mut self, enable: bool) {
        self.cfg.handle_unidentified_markers = enable;
    }

    pub fn is_handling_skeletons(&self) -> bool {
        self.cfg.handle_skeletons
    }

    pub fn set_handle_skeletons(&mut self, enable: bool) {
        self.cfg.handle_skeletons = enable;
    }

    /// Convert one source frame into the pre-built target buffers.
    ///
    /// On a whole-frame body-count mismatch this returns an error and leaves
    /// the previous frame's buffer contents in place (stale-data semantics;
    /// the sequence number and latency have already been copied by then).
    /// Callers seeing repeated mismatches should rebuild the scene.
    pub fn convert_frame(
        &self,
        source: &FrameOfData,
        target: &mut MocapFrame,
    ) -> Result<(), FrameError> {
        target.frame_number = source.frame_number;
        target.latency = source.delay;

        if !counts_match(source.bodies.len(), target.marker_sets.len()) {
            error!(
                "body count mismatch: source frame has {}, scene was built with {}",
                source.bodies.len(),
                target.marker_sets.len()
            );
            return Err(FrameError::BodyCountMismatch {
                source: source.bodies.len(),
                target: target.marker_sets.len(),
            });
        }

        // Marker data, one set per body.
        for (body, marker_set) in source.bodies.iter().zip(target.marker_sets.iter_mut()) {
            self.convert_marker_set(body, marker_set);
        }

        // Promoted rigid bodies resolve their source body by the id stored
        // at build time (the body index) and take its sole segment's pose.
        for rigid_body in target.rigid_bodies.iter_mut() {
            let pose = source
                .bodies
                .get(rigid_body.id as usize)
                .and_then(|body| body.segments.first());
            match pose {
                Some(pose) => self.convert_segment(pose, rigid_body),
                None => error!(
                    "rigid body {} has no segment pose in the source frame",
                    rigid_body.id
                ),
            }
        }

        if self.cfg.handle_unidentified_markers {
            let capacity = target.other_markers.len();
            if source.unidentified_markers.len() > capacity {
                warn!(
                    "clamping {} unidentified markers to buffer capacity {}",
                    source.unidentified_markers.len(),
                    capacity
                );
            }
            let count = source.unidentified_markers.len().min(capacity);
            for (src, dst) in source.unidentified_markers[..count]
                .iter()
                .zip(target.other_markers.iter_mut())
            {
                *dst = self.convert_marker(src);
            }
            target.n_other_markers = count;
        } else {
            target.n_other_markers = 0;
        }

        if self.cfg.handle_skeletons {
            for skeleton in target.skeletons.iter_mut() {
                let Some(body) = source.bodies.get(skeleton.id as usize) else {
                    error!("skeleton {} has no body in the source frame", skeleton.id);
                    continue;
                };
                if !counts_match(body.segments.len(), skeleton.segments.len()) {
                    error!(
                        "segment count mismatch for skeleton {}: source has {}, built {}",
                        skeleton.id,
                        body.segments.len(),
                        skeleton.segments.len()
                    );
                    continue;
                }
                for (pose, segment) in body.segments.iter().zip(skeleton.segments.iter_mut()) {
                    self.convert_segment(pose, segment);
                }
            }
        }

        Ok(())
    }

    fn convert_marker(&self, source: &Vec3f) -> Vec3f {
        if is_untracked(source) {
            // marker has vanished -> position exactly zero
            Vec3f::ZERO
        } else {
            source.scaled(self.cfg.unit_scale)
        }
    }

    fn convert_marker_set(&self, body: &BodyFrame, target: &mut MarkerSetData) {
        if !counts_match(body.markers.len(), target.markers.len()) {
            error!(
                "marker count mismatch for marker set '{}': source has {}, built {}",
                target.name,
                body.markers.len(),
                target.markers.len()
            );
            return;
        }
        for (src, dst) in body.markers.iter().zip(target.markers.iter_mut()) {
            *dst = self.convert_marker(src);
        }
    }

    fn convert_segment(&self, pose: &SegmentPose, target: &mut RigidBodyData) {
        if is_untracked(&pose.position) {
            // segment data not available -> origin and neutral pose
            target.position = Vec3f::ZERO;
            target.orientation = Quat::IDENTITY;
            return;
        }
        target.position = pose.position.scaled(self.cfg.unit_scale);
        target.orientation =
            euler_zyx_deg_to_quat(pose.euler_deg[0], pose.euler_deg[1], pose.euler_deg[2]);
    }
}
