use glam::Vec3;

/// Triangle geometry as it is handed to the GPU: tightly packed positions and
/// one `[u32; 3]` per triangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vec3>,
    pub indices: Vec<[u32; 3]>,
}

impl Mesh {
    /// A unit cube centered on the origin.
    pub fn cube() -> Mesh {
        let vertices = vec![
            // Front
            Vec3::new(-0.5, -0.5, 0.5),
            Vec3::new(0.5, -0.5, 0.5),
            Vec3::new(-0.5, 0.5, 0.5),
            Vec3::new(0.5, 0.5, 0.5),
            // Back
            Vec3::new(-0.5, -0.5, -0.5),
            Vec3::new(0.5, -0.5, -0.5),
            Vec3::new(-0.5, 0.5, -0.5),
            Vec3::new(0.5, 0.5, -0.5),
        ];
        let indices = vec![
            // Front
            [2, 1, 0],
            [1, 2, 3],
            // Back
            [6, 4, 5],
            [5, 7, 6],
            // Right
            [3, 5, 1],
            [5, 3, 7],
            // Left
            [6, 0, 4],
            [0, 6, 2],
            // Top
            [6, 3, 2],
            [3, 6, 7],
            // Bottom
            [0, 5, 4],
            [5, 0, 1],
        ];
        Mesh { vertices, indices }
    }

    /// The number of indices a draw call has to consume, three per triangle.
    pub fn index_count(&self) -> usize {
        self.indices.len() * 3
    }
}
