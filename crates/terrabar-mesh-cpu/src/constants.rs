//! Shared constants for terrabar-mesh-cpu. Centralizes common magic numbers.

/// Extra height added to every top corner, so a height-0 column still renders
/// as a 1-unit slab instead of collapsing to a flat quad.
pub const DEFAULT_TOP_OFFSET: u8 = 1;

/// Added to `max_height` before normalizing vertex heights for color banding.
pub const COLOR_HEADROOM: f32 = 1.0;

// Quad layout: every emitted face owns 4 fresh vertices and 2 triangles.
pub const VERTS_PER_FACE: usize = 4;
pub const INDICES_PER_FACE: usize = 6;
/// Local triangulation over a face's 4 corners: (0,1,2), (2,1,3).
pub const QUAD_TRIANGLES: [u32; INDICES_PER_FACE] = [0, 1, 2, 2, 1, 3];

// Colors
pub(crate) const OPAQUE_ALPHA: u8 = 255;
