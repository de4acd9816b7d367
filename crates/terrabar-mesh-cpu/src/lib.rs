//! CPU meshing for column ("voxel bar") terrain: height grid in, flat-shaded
//! triangle buffers out.
#![forbid(unsafe_code)]

mod build;
pub mod color;
pub mod constants;
pub mod face;
mod mesh_build;

pub use build::{MeshOptions, generate, generate_with};
pub use color::{COLOR_BANDS, TerrainColor, band_for, color_for};
pub use constants::DEFAULT_TOP_OFFSET;
pub use face::{Face, FaceDesc, XY_FACES, Z_FACES};
pub use mesh_build::TerrainMesh;
