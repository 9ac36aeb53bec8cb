//! Input abstraction layer.
//!
//! Normalizes mouse and touch events into a unified `InputEvent` enum
//! consumed by the drawing surface. Coordinates are raster-local: the host
//! subtracts the canvas origin before building an event.

/// A normalized input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed.
    PointerDown { x: f32, y: f32 },

    /// Pointer moved, pressed or not.
    PointerMove { x: f32, y: f32 },

    /// Pointer released.
    PointerUp { x: f32, y: f32 },

    /// Pointer entered the canvas.
    PointerEnter,

    /// Pointer left the canvas.
    PointerLeave,

    TouchStart { x: f32, y: f32 },
    TouchMove { x: f32, y: f32 },
    TouchEnd,
}

impl InputEvent {
    /// Build a `PointerDown` from client coordinates and the canvas origin.
    pub fn from_pointer_down(client_x: f32, client_y: f32, origin: (f32, f32)) -> Self {
        let (x, y) = to_raster_local(client_x, client_y, origin);
        Self::PointerDown { x, y }
    }

    pub fn from_pointer_move(client_x: f32, client_y: f32, origin: (f32, f32)) -> Self {
        let (x, y) = to_raster_local(client_x, client_y, origin);
        Self::PointerMove { x, y }
    }

    pub fn from_pointer_up(client_x: f32, client_y: f32, origin: (f32, f32)) -> Self {
        let (x, y) = to_raster_local(client_x, client_y, origin);
        Self::PointerUp { x, y }
    }

    pub fn from_touch_start(client_x: f32, client_y: f32, origin: (f32, f32)) -> Self {
        let (x, y) = to_raster_local(client_x, client_y, origin);
        Self::TouchStart { x, y }
    }

    pub fn from_touch_move(client_x: f32, client_y: f32, origin: (f32, f32)) -> Self {
        let (x, y) = to_raster_local(client_x, client_y, origin);
        Self::TouchMove { x, y }
    }

    /// Extract position if this event carries one.
    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            Self::PointerDown { x, y }
            | Self::PointerMove { x, y }
            | Self::PointerUp { x, y }
            | Self::TouchStart { x, y }
            | Self::TouchMove { x, y } => Some((*x, *y)),
            Self::PointerEnter | Self::PointerLeave | Self::TouchEnd => None,
        }
    }
}

/// Translate client coordinates into the raster's coordinate space.
pub fn to_raster_local(client_x: f32, client_y: f32, origin: (f32, f32)) -> (f32, f32) {
    (client_x - origin.0, client_y - origin.1)
}
