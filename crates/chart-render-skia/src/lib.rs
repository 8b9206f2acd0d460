// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia raster backend for chart-core scenes.
// Notes:
// - Everything Skia-specific is behind the `raster` feature so the workspace
//   builds without fetching Skia unless explicitly enabled.

#[cfg(feature = "raster")]
mod raster;
#[cfg(feature = "raster")]
mod text;

#[cfg(feature = "raster")]
pub use raster::SkiaRenderer;
#[cfg(feature = "raster")]
pub use text::TextShaper;
