/// Geometry primitives for 3D rendering
use crate::math::Vec3;

/// A triangle face holding its three vertex positions by value.
///
/// Vertices are copied into each face rather than indexed into a shared
/// buffer, so rotating one triangle never affects another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Vec3; 3],
}

impl Triangle {
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }
}

/// The world: an ordered sequence of triangles forming the visible scene
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Create a simple cube mesh for demos and testing
    pub fn cube(size: f32) -> Self {
        let half = size / 2.0;
        let p = Vec3::new;
        let mut mesh = Self::with_capacity(12);

        // Front face
        mesh.add_triangle(Triangle::new(
            p(-half, -half, half),
            p(half, -half, half),
            p(half, half, half),
        ));
        mesh.add_triangle(Triangle::new(
            p(-half, -half, half),
            p(half, half, half),
            p(-half, half, half),
        ));

        // Back face
        mesh.add_triangle(Triangle::new(
            p(-half, -half, -half),
            p(-half, half, -half),
            p(half, half, -half),
        ));
        mesh.add_triangle(Triangle::new(
            p(-half, -half, -half),
            p(half, half, -half),
            p(half, -half, -half),
        ));

        // Top face
        mesh.add_triangle(Triangle::new(
            p(-half, half, -half),
            p(-half, half, half),
            p(half, half, half),
        ));
        mesh.add_triangle(Triangle::new(
            p(-half, half, -half),
            p(half, half, half),
            p(half, half, -half),
        ));

        // Bottom face
        mesh.add_triangle(Triangle::new(
            p(-half, -half, -half),
            p(half, -half, -half),
            p(half, -half, half),
        ));
        mesh.add_triangle(Triangle::new(
            p(-half, -half, -half),
            p(half, -half, half),
            p(-half, -half, half),
        ));

        // Right face
        mesh.add_triangle(Triangle::new(
            p(half, -half, -half),
            p(half, half, -half),
            p(half, half, half),
        ));
        mesh.add_triangle(Triangle::new(
            p(half, -half, -half),
            p(half, half, half),
            p(half, -half, half),
        ));

        // Left face
        mesh.add_triangle(Triangle::new(
            p(-half, -half, -half),
            p(-half, -half, half),
            p(-half, half, half),
        ));
        mesh.add_triangle(Triangle::new(
            p(-half, -half, -half),
            p(-half, half, half),
            p(-half, half, -half),
        ));

        mesh
    }
}
