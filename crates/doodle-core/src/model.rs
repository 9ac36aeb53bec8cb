//! Stroke style and the entries of the stroke log.
//!
//! The log is a flat, ordered list of drawing operations. A stroke opens
//! with `BeginStroke`, which carries the style in effect from that point on;
//! every field it omits keeps its previous value. Pointer motion appends
//! `ExtendTo` + `CommitSegment` pairs, separated by `MoveTo` repositions.

use crate::color::Hsl;
use serde::{Deserialize, Serialize};

// ─── Style ───────────────────────────────────────────────────────────────

/// End-cap shape for stroked lines. Serialized like the canvas `lineCap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

impl LineCap {
    pub fn as_str(self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

/// The style applied to a path when it is stroked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeStyle {
    pub line_width: f32,
    pub line_cap: LineCap,
    pub color: Hsl,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            line_width: 5.0,
            line_cap: LineCap::Round,
            color: Hsl::default(),
        }
    }
}

impl StrokeStyle {
    /// Overwrite the fields that are present, keep the rest.
    pub fn merge(
        &mut self,
        line_width: Option<f32>,
        line_cap: Option<LineCap>,
        color: Option<Hsl>,
    ) {
        if let Some(width) = line_width {
            self.line_width = width;
        }
        if let Some(cap) = line_cap {
            self.line_cap = cap;
        }
        if let Some(color) = color {
            self.color = color;
        }
    }
}

// ─── Log entries ─────────────────────────────────────────────────────────

/// One recorded drawing operation.
///
/// Serialized with an `op` tag. Entries with an unrecognized tag decode to
/// [`StrokeLogEntry::Unknown`] so older replayers can still walk newer logs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum StrokeLogEntry {
    /// Open a new path. Absent fields keep the current style.
    BeginStroke {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        line_width: Option<f32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        line_cap: Option<LineCap>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stroke_color: Option<Hsl>,
    },
    /// Reposition the path cursor without drawing.
    MoveTo { x: f32, y: f32 },
    /// Extend the current path to a point.
    ExtendTo { x: f32, y: f32 },
    /// Stroke the path built so far.
    CommitSegment,
    #[serde(other)]
    Unknown,
}

impl StrokeLogEntry {
    /// A `BeginStroke` carrying every field of `style`.
    pub fn begin(style: &StrokeStyle) -> Self {
        Self::BeginStroke {
            line_width: Some(style.line_width),
            line_cap: Some(style.line_cap),
            stroke_color: Some(style.color),
        }
    }

    /// Short name used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::BeginStroke { .. } => "beginStroke",
            Self::MoveTo { .. } => "moveTo",
            Self::ExtendTo { .. } => "extendTo",
            Self::CommitSegment => "commitSegment",
            Self::Unknown => "unknown",
        }
    }
}

/// Ephemeral per-surface state. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingSession {
    pub is_drawing: bool,
    pub width: u32,
    pub height: u32,
    pub style: StrokeStyle,
}

impl DrawingSession {
    pub fn new(width: u32, height: u32, style: StrokeStyle) -> Self {
        Self {
            is_drawing: false,
            width,
            height,
            style,
        }
    }
}
