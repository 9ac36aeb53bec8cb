pub mod brush;
pub mod config;
pub mod debounce;
pub mod input;
pub mod surface;

pub use config::SurfaceConfig;
pub use surface::DrawingSurface;
