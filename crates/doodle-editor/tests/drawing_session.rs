//! Integration tests: drawing surface (doodle-editor).
//!
//! Drives a `DrawingSurface` over a headless `DisplayList` with scripted
//! input and checks what lands in the stroke log and on the raster,
//! including reconstruction after settled resizes.

use doodle_core::color::{Hsl, golden_hue};
use doodle_core::model::{LineCap, StrokeLogEntry, StrokeStyle};
use doodle_core::raster::DisplayList;
use doodle_editor::input::InputEvent;
use doodle_editor::{DrawingSurface, SurfaceConfig};
use pretty_assertions::assert_eq;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A random source that walks a fixed list of samples.
fn samples(values: &'static [f64]) -> Box<dyn FnMut() -> f64> {
    let mut i = 0;
    Box::new(move || {
        let v = values[i % values.len()];
        i += 1;
        v
    })
}

fn make_surface(width: u32, height: u32) -> DrawingSurface<DisplayList> {
    init_logging();
    DrawingSurface::new(
        DisplayList::default(),
        width,
        height,
        SurfaceConfig::default(),
        Box::new(samples(&[0.1, 0.7, 0.35])),
    )
}

fn drag(surface: &mut DrawingSurface<DisplayList>, points: &[(f32, f32)]) {
    let (x, y) = points[0];
    surface.handle(&InputEvent::PointerDown { x, y });
    for &(x, y) in &points[1..] {
        surface.handle(&InputEvent::PointerMove { x, y });
    }
    let (x, y) = points[points.len() - 1];
    surface.handle(&InputEvent::PointerUp { x, y });
}

// ─── Gating ─────────────────────────────────────────────────────────────

#[test]
fn moves_without_press_are_ignored() {
    let mut surface = make_surface(100, 100);
    for i in 0..10 {
        let p = i as f32 * 7.0;
        assert!(!surface.handle(&InputEvent::PointerMove { x: p, y: p }));
        assert!(!surface.handle(&InputEvent::TouchMove { x: p, y: p }));
    }
    assert!(surface.log().is_empty());
    assert!(surface.raster().is_blank());
}

#[test]
fn moves_after_release_are_ignored() {
    let mut surface = make_surface(100, 100);
    drag(&mut surface, &[(0.0, 0.0), (10.0, 0.0)]);
    let entries = surface.log().len();
    let painted = surface.raster().painted().len();

    surface.handle(&InputEvent::PointerMove { x: 50.0, y: 50.0 });

    assert_eq!(surface.log().len(), entries);
    assert_eq!(surface.raster().painted().len(), painted);
}

// ─── Colors ─────────────────────────────────────────────────────────────

#[test]
fn each_stroke_gets_a_golden_ratio_hue() {
    let mut surface = make_surface(100, 100);
    drag(&mut surface, &[(0.0, 0.0), (1.0, 1.0)]);
    drag(&mut surface, &[(5.0, 5.0), (6.0, 6.0)]);
    drag(&mut surface, &[(8.0, 8.0), (9.0, 9.0)]);

    let hues: Vec<f32> = surface
        .log()
        .entries()
        .iter()
        .filter_map(|e| match e {
            StrokeLogEntry::BeginStroke {
                stroke_color: Some(color),
                ..
            } => Some(color.hue),
            _ => None,
        })
        .collect();

    assert_eq!(hues, vec![golden_hue(0.1), golden_hue(0.7), golden_hue(0.35)]);
}

#[test]
fn style_persists_until_next_stroke() {
    let mut surface = make_surface(100, 100);
    surface.select_brush(20.0);
    drag(&mut surface, &[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0), (30.0, 0.0)]);

    let expected = StrokeStyle {
        line_width: 20.0,
        line_cap: LineCap::Round,
        color: Hsl::new(golden_hue(0.1), 75.0, 50.0),
    };
    let painted = surface.raster().painted();
    assert_eq!(painted.len(), 3);
    assert!(painted.iter().all(|p| p.style == expected));
}

// ─── Brushes ────────────────────────────────────────────────────────────

#[test]
fn brush_change_does_not_alter_committed_strokes() {
    let mut surface = make_surface(100, 100);
    drag(&mut surface, &[(0.0, 0.0), (10.0, 10.0)]);
    surface.select_brush(100.0);
    drag(&mut surface, &[(50.0, 50.0), (60.0, 60.0)]);

    surface.resize_now(100, 100);
    let widths: Vec<f32> = surface
        .raster()
        .painted()
        .iter()
        .map(|p| p.style.line_width)
        .collect();
    assert_eq!(widths, vec![5.0, 100.0]);
}

// ─── Resize ─────────────────────────────────────────────────────────────

#[test]
fn settled_resize_replays_log() {
    let mut surface = make_surface(300, 200);
    drag(&mut surface, &[(10.0, 10.0), (50.0, 20.0), (90.0, 60.0)]);
    let live = surface.raster().painted().to_vec();

    surface.request_resize(320, 210, 0.0);
    surface.request_resize(400, 250, 50.0);
    surface.request_resize(640, 480, 120.0);
    assert!(!surface.poll_resize(200.0));
    assert_eq!(surface.raster().size(), (300, 200));

    assert!(surface.poll_resize(320.0));
    assert!(!surface.resize_pending());
    assert_eq!(surface.size(), (640, 480));
    assert_eq!(surface.raster().size(), (640, 480));
    assert_eq!(surface.raster().painted(), live.as_slice());
}

#[test]
fn replay_at_same_size_matches_live_raster() {
    let mut surface = make_surface(300, 200);
    drag(&mut surface, &[(10.0, 10.0), (40.0, 10.0)]);
    surface.handle(&InputEvent::PointerLeave);
    surface.handle(&InputEvent::PointerEnter);
    surface.select_brush(15.0);
    drag(&mut surface, &[(100.0, 100.0), (120.0, 140.0), (150.0, 150.0)]);
    let live = surface.raster().painted().to_vec();

    surface.resize_now(300, 200);
    assert_eq!(surface.raster().painted(), live.as_slice());

    let once = surface.raster().clone();
    surface.resize_now(300, 200);
    assert_eq!(surface.raster(), &once);
}

#[test]
fn strokes_after_resize_keep_recording() {
    let mut surface = make_surface(100, 100);
    drag(&mut surface, &[(0.0, 0.0), (5.0, 5.0)]);
    surface.resize_now(200, 200);
    drag(&mut surface, &[(150.0, 150.0), (190.0, 190.0)]);

    assert_eq!(surface.log().stroke_count(), 2);
    assert_eq!(surface.raster().painted().len(), 2);
}

// ─── Touch ──────────────────────────────────────────────────────────────

#[test]
fn touch_gesture_draws_like_pointer() {
    let mut surface = make_surface(100, 100);
    surface.handle(&InputEvent::TouchStart { x: 1.0, y: 2.0 });
    surface.handle(&InputEvent::TouchMove { x: 3.0, y: 4.0 });
    surface.handle(&InputEvent::TouchEnd);
    surface.handle(&InputEvent::TouchMove { x: 9.0, y: 9.0 });

    let segments: Vec<_> = surface.raster().painted()[0].segments().collect();
    assert_eq!(segments, vec![((1.0, 2.0), (3.0, 4.0))]);
    assert_eq!(surface.raster().painted().len(), 1);
}
