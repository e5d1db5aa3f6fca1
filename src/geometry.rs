//! Static 2D geometry for the playground shaders.
//!
//! Positions are clip-space coordinates, two floats per vertex, tightly
//! packed. They are uploaded once with a static usage hint and never touched
//! again; the draw call derives its vertex count from the same slice via
//! [`vertex_count`].

/// Floats per vertex in every position array here.
pub const POSITION_COMPONENTS: i32 = 2;

/// The demo triangle: apex up, centred on the origin.
pub const TRIANGLE_POSITIONS: [f32; 6] = [
    0.0, 0.5, // top
    -0.5, -0.5, // bottom left
    0.5, -0.5, // bottom right
];

/// Full-viewport quad as two triangles covering [-1,1] on both axes.
pub const QUAD_POSITIONS: [f32; 12] = [
    -1.0, -1.0, 1.0, -1.0, 1.0, 1.0, // lower-right triangle
    -1.0, -1.0, 1.0, 1.0, -1.0, 1.0, // upper-left triangle
];

/// Number of vertices encoded in a flat position slice.
pub fn vertex_count(positions: &[f32]) -> i32 {
    debug_assert!(positions.len() % POSITION_COMPONENTS as usize == 0);
    (positions.len() / POSITION_COMPONENTS as usize) as i32
}
