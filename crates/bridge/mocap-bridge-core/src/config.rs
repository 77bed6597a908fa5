//! Converter configuration.

use serde::{Deserialize, Serialize};

/// Per-converter configuration. Held by value inside each `Converter`, so
/// multiple converters can run with independent settings. Changes take effect
/// on the next frame conversion; already-written buffers are not rescaled.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Factor applied to every tracked position coordinate.
    pub unit_scale: f32,
    /// When disabled, the unidentified marker buffer is reported empty
    /// regardless of source content.
    pub handle_unidentified_markers: bool,
    /// When disabled, bodies with more than one segment contribute only
    /// their marker set.
    pub handle_skeletons: bool,

    /// Capacity bounds enforced at build time.
    pub max_bodies: usize,
    pub max_markers_per_set: usize,
    pub max_segments_per_body: usize,
    /// Capacity of the unidentified marker buffer; frame conversions clamp
    /// to this bound.
    pub max_unidentified_markers: usize,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            unit_scale: 1.0,
            handle_unidentified_markers: false,
            handle_skeletons: true,
            max_bodies: 200,
            max_markers_per_set: 512,
            max_segments_per_body: 200,
            max_unidentified_markers: 256,
        }
    }
}
