//! Unit cube topology

/// Cube corners, each coordinate +/-1
pub const CUBE_VERTICES: [[f32; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

/// Cube edges as pairs of vertex indices
pub const CUBE_EDGES: [(usize, usize); 12] = [
    // back face
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    // front face
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    // connecting edges
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];
