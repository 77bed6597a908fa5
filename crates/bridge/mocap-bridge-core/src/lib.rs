//! Motion-capture bridge core (transport-agnostic).
//!
//! This crate converts a tracking system's hierarchical body definitions and
//! live frame data into a flat streaming schema: an ordered descriptor list
//! built once per scene, and pre-sized frame buffers overwritten in place on
//! every capture tick. Session management, transports, and command handling
//! live in adapter crates; they call `Converter::build_scene` once and
//! `Converter::convert_frame` per tick.

pub mod config;
pub mod convert;
pub mod error;
pub mod scene;
pub mod source;
pub mod validate;

// Re-exports for consumers (adapters)
pub use config::ConverterConfig;
pub use convert::Converter;
pub use error::{BuildError, FrameError};
pub use scene::SceneDescription;
pub use source::{BodyDefinition, BodyFrame, FrameOfData, Hierarchy, SegmentPose};
pub use validate::{counts_match, is_untracked, EMPTY_THRESHOLD};

pub use mocap_api_core::{DataDescription, MocapFrame, Quat, Vec3f};
