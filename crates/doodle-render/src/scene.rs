//! Stroke log replay → Vello drawing commands.
//!
//! Paths are accumulated as a `kurbo::BezPath` and stroked with the style
//! of the last `begin_path`. A resize resets the scene, which is the Vello
//! equivalent of clearing the canvas.
//!
//! A canvas `stroke()` repaints the whole current path, which is free on a
//! bitmap but not in a retained scene. With opaque paint the result is the
//! same if only the elements added since the previous stroke are encoded,
//! so that is what happens; translucent paint repaints the full path.

use doodle_core::color::Hsl;
use doodle_core::model::{LineCap, StrokeStyle};
use doodle_core::raster::Raster;
use kurbo::{Affine, BezPath, Cap, Join, PathEl, Point, Stroke as KurboStroke};
use peniko::Color;
use vello::Scene;

pub struct SceneRaster {
    scene: Scene,
    width: u32,
    height: u32,
    style: StrokeStyle,
    path: BezPath,
    /// Whether the path has a current point.
    open: bool,
    /// Line segments in `path`; a path without any paints nothing.
    segments: usize,
    /// Elements of `path` already encoded into the scene.
    stroked: usize,
    strokes: usize,
}

impl SceneRaster {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            scene: Scene::new(),
            width,
            height,
            style: StrokeStyle::default(),
            path: BezPath::new(),
            open: false,
            segments: 0,
            stroked: 0,
            strokes: 0,
        }
    }

    /// The scene to hand to the Vello renderer.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Stroke operations emitted since the last resize.
    pub fn stroke_count(&self) -> usize {
        self.strokes
    }

    fn clear_path(&mut self) {
        self.path = BezPath::new();
        self.open = false;
        self.segments = 0;
        self.stroked = 0;
    }

    /// Elements added since the last stroke, prefixed with the pen position
    /// they continue from. `None` if they hold no line segment.
    fn unstroked_path(&self) -> Option<BezPath> {
        let elements = self.path.elements();
        let tail = &elements[self.stroked..];
        if !tail.iter().any(|el| matches!(el, PathEl::LineTo(_))) {
            return None;
        }

        let mut path = BezPath::new();
        if !matches!(tail.first(), Some(PathEl::MoveTo(_)))
            && let Some(pen) = elements[..self.stroked].last().and_then(end_point)
        {
            path.move_to(pen);
        }
        for el in tail {
            path.push(*el);
        }
        Some(path)
    }
}

impl Raster for SceneRaster {
    fn resize(&mut self, width: u32, height: u32) {
        log::debug!("scene resize {}x{} → {width}x{height}", self.width, self.height);
        self.width = width;
        self.height = height;
        self.scene.reset();
        self.style = StrokeStyle::default();
        self.strokes = 0;
        self.clear_path();
    }

    fn begin_path(&mut self, style: &StrokeStyle) {
        self.style = *style;
        self.clear_path();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to((x as f64, y as f64));
        self.open = true;
    }

    fn line_to(&mut self, x: f32, y: f32) {
        if !self.open {
            self.move_to(x, y);
            return;
        }
        self.path.line_to((x as f64, y as f64));
        self.segments += 1;
    }

    fn stroke(&mut self) {
        if self.segments == 0 {
            return;
        }
        let stroke = kurbo_stroke(&self.style);
        let color = hsl_to_color(&self.style.color);
        if is_translucent(&self.style.color) {
            self.scene
                .stroke(&stroke, Affine::IDENTITY, color, None, &self.path);
        } else {
            let Some(tail) = self.unstroked_path() else {
                return;
            };
            self.scene
                .stroke(&stroke, Affine::IDENTITY, color, None, &tail);
        }
        self.stroked = self.path.elements().len();
        self.strokes += 1;
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn kurbo_stroke(style: &StrokeStyle) -> KurboStroke {
    KurboStroke {
        width: style.line_width as f64,
        join: Join::Round,
        start_cap: map_cap(style.line_cap),
        end_cap: map_cap(style.line_cap),
        ..Default::default()
    }
}

fn map_cap(cap: LineCap) -> Cap {
    match cap {
        LineCap::Butt => Cap::Butt,
        LineCap::Round => Cap::Round,
        LineCap::Square => Cap::Square,
    }
}

fn is_translucent(hsl: &Hsl) -> bool {
    hsl.alpha.is_some_and(|a| a < 1.0)
}

fn end_point(el: &PathEl) -> Option<Point> {
    match *el {
        PathEl::MoveTo(p) | PathEl::LineTo(p) | PathEl::QuadTo(_, p) | PathEl::CurveTo(_, _, p) => {
            Some(p)
        }
        PathEl::ClosePath => None,
    }
}

fn hsl_to_color(hsl: &Hsl) -> Color {
    let [r, g, b, a] = hsl.to_rgba8();
    Color::from_rgba8(r, g, b, a)
}
