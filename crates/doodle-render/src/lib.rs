//! Raster backend that paints strokes into a Vello scene.
//!
//! The caller presents the scene via wgpu; this crate only emits the
//! paint operations.

pub mod scene;

pub use scene::SceneRaster;
