//! Terrain data: the height grid, its config files, path overlays and sample generation.
#![forbid(unsafe_code)]

pub mod config;
pub mod heightfield;
pub mod loader;
pub mod path;
pub mod worldgen;

pub use config::{ConfigFormat, TerrainConfig};
pub use heightfield::{HeightField, HeightFieldError, VOID_HEIGHT};
pub use loader::{LoadError, field_from_parts, load_terrain, read_map_bytes};
pub use path::{PathError, PathOverlay};
pub use worldgen::{GenParams, generate_field, generate_heights, write_map_files};
