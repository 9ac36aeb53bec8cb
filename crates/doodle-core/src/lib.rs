pub mod color;
pub mod model;
pub mod raster;
pub mod stroke_log;

pub use color::{GOLDEN_RATIO_CONJUGATE, Hsl, UnitRandom, golden_hue, random_color};
pub use model::*;
pub use raster::{DisplayList, DrawCall, Raster, StrokedPath};
pub use stroke_log::StrokeLog;
