//! Append-only stroke log and its replayer.
//!
//! Every raster-mutating operation of a drawing surface is recorded here in
//! order. Replaying the log against a resized raster rebuilds the drawing
//! from scratch at the new dimensions.
//!
//! Recording performs no validation: a malformed sequence (an `ExtendTo`
//! before any `BeginStroke`, say) is stored and later executed as-is.

use crate::model::{StrokeLogEntry, StrokeStyle};
use crate::raster::Raster;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrokeLog {
    entries: Vec<StrokeLogEntry>,
}

impl StrokeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn record(&mut self, entry: StrokeLogEntry) {
        if matches!(entry, StrokeLogEntry::Unknown) {
            log::debug!(
                "recording unrecognized entry at #{}; it will be skipped on replay",
                self.entries.len()
            );
        } else {
            log::trace!("record #{} {:?}", self.entries.len(), entry);
        }
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[StrokeLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of `BeginStroke` entries.
    pub fn stroke_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, StrokeLogEntry::BeginStroke { .. }))
            .count()
    }

    /// Resize `raster` (clearing it) and re-execute every entry in order.
    ///
    /// Style starts from [`StrokeStyle::default`] and is updated by each
    /// `BeginStroke`. Unrecognized entries are skipped, so replay always
    /// runs to the end.
    pub fn replay<R: Raster + ?Sized>(&self, raster: &mut R, width: u32, height: u32) {
        raster.resize(width, height);

        let mut style = StrokeStyle::default();
        let mut skipped = 0usize;
        for (i, entry) in self.entries.iter().enumerate() {
            match *entry {
                StrokeLogEntry::BeginStroke {
                    line_width,
                    line_cap,
                    stroke_color,
                } => {
                    style.merge(line_width, line_cap, stroke_color);
                    raster.begin_path(&style);
                }
                StrokeLogEntry::MoveTo { x, y } => raster.move_to(x, y),
                StrokeLogEntry::ExtendTo { x, y } => raster.line_to(x, y),
                StrokeLogEntry::CommitSegment => raster.stroke(),
                StrokeLogEntry::Unknown => {
                    log::warn!("replay: skipping unrecognized entry #{i}");
                    skipped += 1;
                }
            }
        }

        log::debug!(
            "replayed {} entries at {width}x{height} ({skipped} skipped)",
            self.entries.len()
        );
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| format!("stroke log encode error: {e}"))
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("stroke log decode error: {e}"))
    }
}
