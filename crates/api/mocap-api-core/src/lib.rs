//! Shared contracts for the motion-capture bridge.
//!
//! This crate defines the target streaming schema (descriptor variants plus
//! the per-frame data buffers) and the small math types used by the conversion
//! engine and by downstream transport/serialization components.

pub mod descriptors;
pub mod frame;
pub mod math;

pub use descriptors::{
    DataDescription, MarkerSetDescription, RigidBodyDescription, SkeletonDescription,
};
pub use frame::{MarkerSetData, MocapFrame, RigidBodyData, SkeletonData};
pub use math::{euler_zyx_deg_to_quat, Quat, Vec3f};
