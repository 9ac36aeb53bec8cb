//! The drawing surface: input → raster + stroke log.
//!
//! Every raster-mutating call made here is mirrored into the `StrokeLog`,
//! so a resize can rebuild the drawing by replaying the log.
//!
//! ## Event handling
//!
//! | Event | Effect |
//! |-------|--------|
//! | PointerDown / TouchStart | start drawing, new stroke with a new color, move to point |
//! | PointerMove / TouchMove | while drawing: extend to point, commit, move to point |
//! | PointerUp / TouchEnd | stop drawing |
//! | PointerEnter / PointerLeave | new stroke, color kept |

use crate::brush::BrushMenu;
use crate::config::SurfaceConfig;
use crate::debounce::ResizeDebounce;
use crate::input::InputEvent;
use doodle_core::color::{UnitRandom, random_color};
use doodle_core::model::{DrawingSession, LineCap, StrokeLogEntry, StrokeStyle};
use doodle_core::raster::Raster;
use doodle_core::stroke_log::StrokeLog;

pub struct DrawingSurface<R: Raster> {
    raster: R,
    log: StrokeLog,
    session: DrawingSession,
    config: SurfaceConfig,
    brushes: BrushMenu,
    rng: Box<dyn UnitRandom>,
    /// Owned per surface so two surfaces never share a timer.
    resize_timer: ResizeDebounce,
}

impl<R: Raster> DrawingSurface<R> {
    /// Mount a surface at the given size. The raster is resized (cleared)
    /// to match.
    pub fn new(
        mut raster: R,
        width: u32,
        height: u32,
        config: SurfaceConfig,
        rng: Box<dyn UnitRandom>,
    ) -> Self {
        raster.resize(width, height);
        let session = DrawingSession::new(width, height, config.default_style);
        let mut brushes = BrushMenu::new(config.brush_sizes.clone());
        brushes.select_width(config.default_style.line_width);
        let resize_timer = ResizeDebounce::new(config.resize_quiet_ms);
        log::debug!("surface mounted at {width}x{height}");

        Self {
            raster,
            log: StrokeLog::new(),
            session,
            config,
            brushes,
            rng,
            resize_timer,
        }
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    pub fn raster(&self) -> &R {
        &self.raster
    }

    pub fn log(&self) -> &StrokeLog {
        &self.log
    }

    pub fn session(&self) -> &DrawingSession {
        &self.session
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.session.style
    }

    pub fn is_drawing(&self) -> bool {
        self.session.is_drawing
    }

    pub fn size(&self) -> (u32, u32) {
        (self.session.width, self.session.height)
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    pub fn brushes(&self) -> &BrushMenu {
        &self.brushes
    }

    // ─── Input ───────────────────────────────────────────────────────────

    /// Handle an input event. Returns `true` if the raster was painted.
    pub fn handle(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::PointerDown { x, y } | InputEvent::TouchStart { x, y } => {
                self.session.is_drawing = true;
                self.reset(false);
                self.emit(StrokeLogEntry::MoveTo { x, y });
                false
            }
            InputEvent::PointerMove { x, y } | InputEvent::TouchMove { x, y } => {
                if !self.session.is_drawing {
                    return false;
                }
                self.emit(StrokeLogEntry::ExtendTo { x, y });
                self.emit(StrokeLogEntry::CommitSegment);
                self.emit(StrokeLogEntry::MoveTo { x, y });
                true
            }
            InputEvent::PointerUp { .. } => {
                self.session.is_drawing = false;
                false
            }
            InputEvent::TouchEnd => {
                // Touch end stops drawing, like pointer up. Observed hosts
                // wired it to the touch-start handler instead.
                if self.session.is_drawing {
                    log::debug!("touch end: stop drawing");
                }
                self.session.is_drawing = false;
                false
            }
            InputEvent::PointerEnter | InputEvent::PointerLeave => {
                self.reset(true);
                false
            }
        }
    }

    /// Begin a new stroke: optionally pick a new random color, open a new
    /// path, and record the full current style.
    pub fn reset(&mut self, preserve_color: bool) {
        if !preserve_color {
            self.session.style.color = random_color(
                self.rng.as_mut(),
                self.config.color_saturation,
                self.config.color_lightness,
            );
        }
        log::debug!(
            "begin stroke width={} cap={} color={}",
            self.session.style.line_width,
            self.session.style.line_cap.as_str(),
            self.session.style.color
        );
        self.emit(StrokeLogEntry::begin(&self.session.style));
    }

    // ─── Brushes ─────────────────────────────────────────────────────────

    /// Use `width` with a round cap for the strokes that follow.
    pub fn select_brush(&mut self, width: f32) {
        self.session.style.line_width = width;
        self.session.style.line_cap = LineCap::Round;
        self.brushes.select_width(width);
        self.reset(true);
    }

    /// Select the preset at `index`. Returns `false` if there is none.
    pub fn select_brush_preset(&mut self, index: usize) -> bool {
        match self.brushes.select(index) {
            Some(width) => {
                self.select_brush(width);
                true
            }
            None => {
                log::warn!("no brush preset at index {index}");
                false
            }
        }
    }

    // ─── Geometry ────────────────────────────────────────────────────────

    /// Note a container resize. The log is replayed by `poll_resize` once
    /// no further request arrives for the configured quiet period.
    pub fn request_resize(&mut self, width: u32, height: u32, now_ms: f64) {
        log::trace!("resize requested {width}x{height} at {now_ms}ms");
        self.resize_timer.request(width, height, now_ms);
    }

    /// Replay the log if a requested resize has settled. Returns `true`
    /// when a replay happened.
    pub fn poll_resize(&mut self, now_ms: f64) -> bool {
        match self.resize_timer.poll(now_ms) {
            Some((width, height)) => {
                self.apply_resize(width, height);
                true
            }
            None => false,
        }
    }

    /// Replay the pending resize without waiting out the rest of the quiet
    /// period. For hosts whose own timer already measured it.
    pub fn settle_resize(&mut self) -> bool {
        match self.resize_timer.settle() {
            Some((width, height)) => {
                self.apply_resize(width, height);
                true
            }
            None => false,
        }
    }

    pub fn resize_pending(&self) -> bool {
        self.resize_timer.is_pending()
    }

    /// Time left before a pending resize settles, if one is pending.
    pub fn resize_remaining_ms(&self, now_ms: f64) -> Option<f64> {
        self.resize_timer.remaining_ms(now_ms)
    }

    /// Resize and replay immediately. A pending debounced request is
    /// dropped.
    pub fn resize_now(&mut self, width: u32, height: u32) {
        if self.resize_timer.is_pending() {
            log::trace!("resize_now {width}x{height} drops pending request");
            self.resize_timer.cancel();
        }
        self.apply_resize(width, height);
    }

    // ─── Internals ───────────────────────────────────────────────────────

    fn apply_resize(&mut self, width: u32, height: u32) {
        log::debug!(
            "resize {}x{} → {width}x{height}, replaying {} entries",
            self.session.width,
            self.session.height,
            self.log.len()
        );
        self.session.width = width;
        self.session.height = height;
        self.log.replay(&mut self.raster, width, height);
    }

    /// Execute an entry on the raster and record it.
    fn emit(&mut self, entry: StrokeLogEntry) {
        match entry {
            StrokeLogEntry::BeginStroke { .. } => self.raster.begin_path(&self.session.style),
            StrokeLogEntry::MoveTo { x, y } => self.raster.move_to(x, y),
            StrokeLogEntry::ExtendTo { x, y } => self.raster.line_to(x, y),
            StrokeLogEntry::CommitSegment => self.raster.stroke(),
            StrokeLogEntry::Unknown => {}
        }
        self.log.record(entry);
    }
}
