//! Raster drawing interface and a headless display-list backend.
//!
//! The stroke log drives any backend implementing [`Raster`]. Semantics
//! follow the HTML canvas path model:
//!
//! - `resize` sets the pixel dimensions and clears all content.
//! - `begin_path` discards the current path and sets the style used by
//!   subsequent `stroke` calls.
//! - `line_to` without a current point behaves like `move_to`.
//! - `stroke` paints the whole current path and keeps it.

use crate::model::StrokeStyle;

/// A 2D surface that can stroke polyline paths.
pub trait Raster {
    fn resize(&mut self, width: u32, height: u32);
    fn begin_path(&mut self, style: &StrokeStyle);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn stroke(&mut self);
}

// ─── Display list ────────────────────────────────────────────────────────

/// A raster call as received by [`DisplayList`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Resize { width: u32, height: u32 },
    BeginPath(StrokeStyle),
    MoveTo(f32, f32),
    LineTo(f32, f32),
    Stroke,
}

/// The outcome of one `stroke` call: every subpath of the current path
/// that has at least one segment, painted with the current style.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokedPath {
    pub style: StrokeStyle,
    pub subpaths: Vec<Vec<(f32, f32)>>,
}

impl StrokedPath {
    /// Line segments of all subpaths, in drawing order.
    pub fn segments(&self) -> impl Iterator<Item = ((f32, f32), (f32, f32))> + '_ {
        self.subpaths
            .iter()
            .flat_map(|sub| sub.windows(2).map(|w| (w[0], w[1])))
    }
}

/// Headless raster that records calls and the painted result.
///
/// Two display lists that compare equal describe identical pixels for any
/// deterministic rasterizer, so this is what tests assert against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    width: u32,
    height: u32,
    calls: Vec<DrawCall>,
    style: StrokeStyle,
    path: Vec<Vec<(f32, f32)>>,
    painted: Vec<StrokedPath>,
}

impl DisplayList {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Calls received since the last `resize`, the `resize` itself included.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Everything stroked since the last `resize`.
    pub fn painted(&self) -> &[StrokedPath] {
        &self.painted
    }

    /// True when nothing has been stroked since the last `resize`.
    pub fn is_blank(&self) -> bool {
        self.painted.is_empty()
    }
}

impl Raster for DisplayList {
    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.calls.clear();
        self.painted.clear();
        self.path.clear();
        self.style = StrokeStyle::default();
        self.calls.push(DrawCall::Resize { width, height });
    }

    fn begin_path(&mut self, style: &StrokeStyle) {
        self.calls.push(DrawCall::BeginPath(*style));
        self.style = *style;
        self.path.clear();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.calls.push(DrawCall::MoveTo(x, y));
        self.path.push(vec![(x, y)]);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.calls.push(DrawCall::LineTo(x, y));
        match self.path.last_mut() {
            Some(sub) => sub.push((x, y)),
            None => self.path.push(vec![(x, y)]),
        }
    }

    fn stroke(&mut self) {
        self.calls.push(DrawCall::Stroke);
        let subpaths: Vec<_> = self
            .path
            .iter()
            .filter(|sub| sub.len() > 1)
            .cloned()
            .collect();
        if subpaths.is_empty() {
            return;
        }
        self.painted.push(StrokedPath {
            style: self.style,
            subpaths,
        });
    }
}
