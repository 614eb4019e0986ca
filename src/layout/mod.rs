//! Pure layout computation: column geometry, panel sizing and visibility,
//! whole-configuration assembly, and adjacent-breakpoint preloading.

pub mod configuration;
pub mod geometry;
pub mod preload;
pub mod sizing;

pub use configuration::LayoutConfiguration;
pub use geometry::ColumnGeometry;
pub use preload::PreloadCache;
