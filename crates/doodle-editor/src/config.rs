//! Drawing surface configuration.

use crate::brush::DEFAULT_BRUSH_SIZES;
use doodle_core::color::{DEFAULT_LIGHTNESS, DEFAULT_SATURATION};
use doodle_core::model::StrokeStyle;

// ─── Config ───────────────────────────────────────────────────────────────

/// Configuration for a `DrawingSurface`.
#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    /// Widths offered by the brush menu. Default: 5, 10, 15, 20, 25, 30, 100.
    pub brush_sizes: Vec<f32>,

    /// Style in effect before the first brush selection.
    pub default_style: StrokeStyle,

    /// Quiet period a resize must settle for before the log is replayed,
    /// in milliseconds. Default: **200**.
    pub resize_quiet_ms: f64,

    /// Saturation of random stroke colors, in percent. Default: **75**.
    pub color_saturation: f32,

    /// Lightness of random stroke colors, in percent. Default: **50**.
    pub color_lightness: f32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            brush_sizes: DEFAULT_BRUSH_SIZES.to_vec(),
            default_style: StrokeStyle::default(),
            resize_quiet_ms: 200.0,
            color_saturation: DEFAULT_SATURATION,
            color_lightness: DEFAULT_LIGHTNESS,
        }
    }
}
