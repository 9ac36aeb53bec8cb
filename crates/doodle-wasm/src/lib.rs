//! WASM bridge for Doodle — exposes the drawing surface to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The host page forwards DOM
//! pointer/touch events with client coordinates and reports container
//! resizes; the bridge owns the settle timer that replays the stroke log
//! once resizing stops.

mod canvas2d;
mod console;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use canvas2d::CanvasRaster;
use doodle_editor::input::InputEvent;
use doodle_editor::{DrawingSurface, SurfaceConfig};
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

type SharedSurface = Rc<RefCell<DrawingSurface<CanvasRaster>>>;

/// The main WASM-facing canvas controller.
///
/// Owns the drawing surface and with it the raster, the stroke log and the
/// resize debouncer. All interaction from JS goes through this struct.
#[wasm_bindgen]
pub struct DoodleCanvas {
    surface: SharedSurface,
    /// Replaced on every resize request; dropping it clears the JS timeout.
    settle_timer: Option<Timeout>,
}

#[wasm_bindgen]
impl DoodleCanvas {
    /// Mount on `canvas` at the given pixel size.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        width: u32,
        height: u32,
    ) -> Result<DoodleCanvas, JsValue> {
        install_panic_hook();

        let raster = CanvasRaster::new(canvas)?;
        let surface = DrawingSurface::new(
            raster,
            width,
            height,
            SurfaceConfig::default(),
            Box::new(js_sys::Math::random),
        );
        Ok(Self {
            surface: Rc::new(RefCell::new(surface)),
            settle_timer: None,
        })
    }

    // ─── Pointer ─────────────────────────────────────────────────────────

    /// Handle pointer down. Returns true if the canvas was painted.
    pub fn pointer_down(&mut self, client_x: f32, client_y: f32) -> bool {
        let event = InputEvent::from_pointer_down(client_x, client_y, self.origin());
        self.surface.borrow_mut().handle(&event)
    }

    pub fn pointer_move(&mut self, client_x: f32, client_y: f32) -> bool {
        if !self.is_drawing() {
            return false;
        }
        let event = InputEvent::from_pointer_move(client_x, client_y, self.origin());
        self.surface.borrow_mut().handle(&event)
    }

    pub fn pointer_up(&mut self, client_x: f32, client_y: f32) -> bool {
        let event = InputEvent::from_pointer_up(client_x, client_y, self.origin());
        self.surface.borrow_mut().handle(&event)
    }

    pub fn pointer_enter(&mut self) -> bool {
        self.surface.borrow_mut().handle(&InputEvent::PointerEnter)
    }

    pub fn pointer_leave(&mut self) -> bool {
        self.surface.borrow_mut().handle(&InputEvent::PointerLeave)
    }

    // ─── Touch ───────────────────────────────────────────────────────────

    pub fn touch_start(&mut self, client_x: f32, client_y: f32) -> bool {
        let event = InputEvent::from_touch_start(client_x, client_y, self.origin());
        self.surface.borrow_mut().handle(&event)
    }

    pub fn touch_move(&mut self, client_x: f32, client_y: f32) -> bool {
        if !self.is_drawing() {
            return false;
        }
        let event = InputEvent::from_touch_move(client_x, client_y, self.origin());
        self.surface.borrow_mut().handle(&event)
    }

    pub fn touch_end(&mut self) -> bool {
        self.surface.borrow_mut().handle(&InputEvent::TouchEnd)
    }

    // ─── Brushes ─────────────────────────────────────────────────────────

    /// Preset widths for the brush menu.
    pub fn brush_sizes(&self) -> Vec<f32> {
        self.surface.borrow().brushes().sizes().to_vec()
    }

    /// Index of the active preset, or -1 for a custom width.
    pub fn selected_brush(&self) -> i32 {
        self.surface
            .borrow()
            .brushes()
            .selected()
            .map_or(-1, |i| i as i32)
    }

    pub fn select_brush(&mut self, width: f32) {
        self.surface.borrow_mut().select_brush(width);
    }

    /// Returns false if there is no preset at `index`.
    pub fn select_brush_preset(&mut self, index: usize) -> bool {
        self.surface.borrow_mut().select_brush_preset(index)
    }

    // ─── Geometry ────────────────────────────────────────────────────────

    /// Report a container resize. The log is replayed once resizes have
    /// been quiet for the configured period.
    pub fn request_resize(&mut self, width: u32, height: u32) {
        let now = js_sys::Date::now();
        let delay_ms = {
            let mut surface = self.surface.borrow_mut();
            surface.request_resize(width, height, now);
            surface.resize_remaining_ms(now).unwrap_or(0.0)
        };

        let weak = Rc::downgrade(&self.surface);
        // Dropping the previous timeout cancels it: last request wins.
        self.settle_timer = Some(Timeout::new(delay_ms.ceil() as u32, move || {
            settle(&weak);
        }));
    }

    pub fn width(&self) -> u32 {
        self.surface.borrow().size().0
    }

    pub fn height(&self) -> u32 {
        self.surface.borrow().size().1
    }

    // ─── Diagnostics ─────────────────────────────────────────────────────

    pub fn is_drawing(&self) -> bool {
        self.surface.borrow().is_drawing()
    }

    pub fn entry_count(&self) -> usize {
        self.surface.borrow().log().len()
    }

    pub fn stroke_count(&self) -> usize {
        self.surface.borrow().log().stroke_count()
    }

    /// The stroke log as a JSON array.
    pub fn log_json(&self) -> Result<String, JsValue> {
        self.surface
            .borrow()
            .log()
            .to_json()
            .map_err(|e| JsValue::from_str(&e))
    }

    /// CSS color of the current stroke.
    pub fn current_color(&self) -> String {
        self.surface.borrow().style().color.to_css()
    }
}

impl DoodleCanvas {
    fn origin(&self) -> (f32, f32) {
        self.surface.borrow().raster().origin()
    }
}

/// Timeout callback: the timer ran out without being replaced, so the
/// pending size has been quiet long enough.
fn settle(surface: &Weak<RefCell<DrawingSurface<CanvasRaster>>>) {
    let Some(surface) = surface.upgrade() else {
        return;
    };
    match surface.try_borrow_mut() {
        Ok(mut surface) => {
            surface.settle_resize();
        }
        Err(_) => log::warn!("settle timer fired while the surface was busy"),
    }
}

/// Route `log` output to the browser console. Pass `location.search` to
/// honor `?debug=1` / `?log=trace`.
#[wasm_bindgen]
pub fn init_logging(search: &str) {
    console::init(console::level_from_query(search));
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn install_panic_hook() {
    use std::sync::Once;
    static SET_HOOK: Once = Once::new();
    SET_HOOK.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            log::error!(
                "doodle-wasm {} panicked; the canvas stops responding until reload",
                env!("CARGO_PKG_VERSION")
            );
            console_error_panic_hook::hook(info);
        }));
    });
}
