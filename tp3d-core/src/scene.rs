/// Per-frame orchestration: camera motion, projection, painter's-algorithm
/// sort, culling, shading and drawing, plus the ambient world spin
use crate::camera::Camera;
use crate::geometry::Mesh;
use crate::input::MotionState;
use crate::math::{rotation_matrix, MathError, Matrix, Vec3};
use crate::projection::Projection;
use crate::surface::Surface;

/// Per-frame ambient rotation applied to every world vertex
const SPIN_ANGLES: (f32, f32, f32) = (0.01, 0.005, 0.02);

/// A triangle after camera transform and projection:
/// x/y are normalized device coordinates, z is the sortable depth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedTriangle {
    pub points: [Vec3; 3],
}

impl ProjectedTriangle {
    /// Summed depth of the three corners, the painter's-algorithm sort key
    pub fn depth_sum(&self) -> f32 {
        self.points[0].z + self.points[1].z + self.points[2].z
    }

    /// Face normal computed from the projected corners. This is evaluated
    /// post-projection rather than in camera space, which makes both the
    /// backface test and the shading approximate.
    pub fn normal(&self) -> Vec3 {
        let [p0, p1, p2] = self.points;
        (p0 - p1).cross(p0 - p2)
    }
}

/// The whole application state: world mesh, camera, motion scalars and the
/// fixed projection. Owned by the frame driver; nothing here is global.
#[derive(Debug, Clone)]
pub struct Scene {
    pub world: Mesh,
    pub camera: Camera,
    pub motion: MotionState,
    projection: Projection,
    spin: Matrix,
    light: Vec3,
    view: Vec3,
}

impl Scene {
    pub fn new(world: Mesh, width: f32, height: f32) -> Self {
        Self {
            world,
            camera: Camera::default(),
            motion: MotionState::new(),
            projection: Projection::new(width, height),
            spin: rotation_matrix(SPIN_ANGLES.0, SPIN_ANGLES.1, SPIN_ANGLES.2),
            // Fixed reference vectors, not tied to the live camera.
            light: Vec3::new(0.0, 1.0, 0.0),
            view: Vec3::new(0.0, 0.0, 1.0),
        }
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Run one frame: clear, move the camera by the accumulated motion,
    /// project the world, depth-sort, cull+shade+draw, then spin the world
    /// for the next frame.
    pub fn tick<S: Surface>(&mut self, surface: &mut S) -> Result<(), MathError> {
        surface.clear();

        self.camera
            .move_by(self.motion.vx, self.motion.vy, self.motion.vz)?;
        self.camera
            .rotate(self.motion.rx, self.motion.ry, self.motion.rz)?;

        let mut projected = self.project_world()?;
        sort_far_to_near(&mut projected);

        for triangle in &projected {
            let normal = triangle.normal();
            let shade = shade_color(normal, self.light);
            // Backface test: skip faces whose projected normal points away
            // from the reference view vector.
            if normal.dot(self.view) > 0.0 {
                draw_triangle(surface, triangle, &shade, self.projection.aspect);
            }
        }

        self.spin_world()
    }

    /// Transform every world triangle to camera space and project it.
    /// The world itself is left untouched here.
    fn project_world(&self) -> Result<Vec<ProjectedTriangle>, MathError> {
        let mut projected = Vec::with_capacity(self.world.triangles.len());
        for triangle in &self.world.triangles {
            let mut points = [Vec3::new(0.0, 0.0, 0.0); 3];
            for (out, vertex) in points.iter_mut().zip(&triangle.vertices) {
                let in_camera = self.camera.to_camera_space(*vertex)?;
                *out = self.projection.project(in_camera);
            }
            projected.push(ProjectedTriangle { points });
        }
        Ok(projected)
    }

    /// Advance the world by the fixed ambient rotation, overwriting each
    /// vertex with its rotated value
    fn spin_world(&mut self) -> Result<(), MathError> {
        for triangle in &mut self.world.triangles {
            for vertex in &mut triangle.vertices {
                *vertex = self.spin.mul_vec3(*vertex)?;
            }
        }
        Ok(())
    }
}

/// Sort projected triangles by descending summed depth so farther faces
/// are drawn first and nearer ones overdraw them
pub fn sort_far_to_near(triangles: &mut [ProjectedTriangle]) {
    triangles.sort_by(|a, b| b.depth_sum().total_cmp(&a.depth_sum()));
}

/// Single-light Lambertian-style shade: `255 * (1 - normal . light)`,
/// clamped to [0, 255] and replicated across the channels of a gray
/// `#rrggbb` color
pub fn shade_color(normal: Vec3, light: Vec3) -> String {
    let value = (255.0 * (1.0 - normal.dot(light))).clamp(0.0, 255.0);
    let gray = value.floor() as u8;
    format!("#{gray:02x}{gray:02x}{gray:02x}")
}

/// Trace the triangle as a closed path in pixel coordinates, fill it with
/// its shade and outline it in black
fn draw_triangle<S: Surface>(
    surface: &mut S,
    triangle: &ProjectedTriangle,
    shade: &str,
    aspect: f32,
) {
    let w = surface.width();
    let h = surface.height();
    let px = |p: Vec3| (p.x * w * aspect + w / 2.0, p.y * h + h / 2.0);

    let [p0, p1, p2] = triangle.points;
    surface.begin_path();
    let (x0, y0) = px(p0);
    surface.move_to(x0, y0);
    let (x1, y1) = px(p1);
    surface.line_to(x1, y1);
    let (x2, y2) = px(p2);
    surface.line_to(x2, y2);
    surface.set_fill(shade);
    surface.set_stroke("#000000");
    surface.close_path();
    surface.fill();
    surface.stroke();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Triangle;

    /// Surface double that records path operations and fill colors
    #[derive(Default)]
    struct RecordingSurface {
        fills: Vec<String>,
        strokes: Vec<String>,
        clears: usize,
        paths: usize,
        fill_color: String,
        stroke_color: String,
    }

    impl Surface for RecordingSurface {
        fn width(&self) -> f32 {
            800.0
        }

        fn height(&self) -> f32 {
            600.0
        }

        fn clear(&mut self) {
            self.clears += 1;
        }

        fn begin_path(&mut self) {
            self.paths += 1;
        }

        fn move_to(&mut self, _x: f32, _y: f32) {}

        fn line_to(&mut self, _x: f32, _y: f32) {}

        fn set_fill(&mut self, color: &str) {
            self.fill_color = color.to_string();
        }

        fn set_stroke(&mut self, color: &str) {
            self.stroke_color = color.to_string();
        }

        fn close_path(&mut self) {}

        fn fill(&mut self) {
            self.fills.push(self.fill_color.clone());
        }

        fn stroke(&mut self) {
            self.strokes.push(self.stroke_color.clone());
        }
    }

    fn flat_triangle(z: f32) -> ProjectedTriangle {
        let z = z / 3.0;
        ProjectedTriangle {
            points: [
                Vec3::new(0.0, 0.0, z),
                Vec3::new(1.0, 0.0, z),
                Vec3::new(0.0, 1.0, z),
            ],
        }
    }

    #[test]
    fn test_sort_is_farthest_first() {
        let mut triangles = vec![flat_triangle(5.0), flat_triangle(1.0), flat_triangle(9.0)];
        sort_far_to_near(&mut triangles);
        let sums: Vec<f32> = triangles.iter().map(|t| t.depth_sum()).collect();
        assert!((sums[0] - 9.0).abs() < 1e-5);
        assert!((sums[1] - 5.0).abs() < 1e-5);
        assert!((sums[2] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_shade_is_well_formed_hex() {
        let shade = shade_color(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(shade, "#ffffff");
        assert!(shade.starts_with('#'));
        assert_eq!(shade.len(), 7);
        assert!(shade[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_shade_clamps_both_ends() {
        let light = Vec3::new(0.0, 1.0, 0.0);
        // Normal pointing against the light overshoots 255.
        assert_eq!(shade_color(Vec3::new(0.0, -2.0, 0.0), light), "#ffffff");
        // Normal aligned with a strong light undershoots 0.
        assert_eq!(shade_color(Vec3::new(0.0, 2.0, 0.0), light), "#000000");
    }

    #[test]
    fn test_front_facing_triangle_is_drawn_and_shaded() {
        // Faces the default camera; its projected winding keeps
        // normal . view > 0.
        let mut world = Mesh::new();
        world.add_triangle(Triangle::new(
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(-1.0, -1.0, 0.0),
        ));
        let mut scene = Scene::new(world, 800.0, 600.0);
        let mut surface = RecordingSurface::default();
        scene.tick(&mut surface).unwrap();

        assert_eq!(surface.clears, 1);
        assert_eq!(surface.fills.len(), 1);
        let shade = &surface.fills[0];
        assert!(shade.starts_with('#'));
        assert_eq!(shade.len(), 7);
        assert!(shade[1..].chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(surface.strokes, vec!["#000000".to_string()]);
    }

    #[test]
    fn test_back_facing_triangle_is_culled() {
        // Same triangle with reversed winding flips the projected normal.
        let mut world = Mesh::new();
        world.add_triangle(Triangle::new(
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
        ));
        let mut scene = Scene::new(world, 800.0, 600.0);
        let mut surface = RecordingSurface::default();
        scene.tick(&mut surface).unwrap();

        assert_eq!(surface.clears, 1);
        assert!(surface.fills.is_empty());
    }

    #[test]
    fn test_tick_applies_motion_to_camera() {
        let mut scene = Scene::new(Mesh::new(), 800.0, 600.0);
        scene.motion.vz = 1.0;
        let before = scene.camera.pos;
        let mut surface = RecordingSurface::default();
        scene.tick(&mut surface).unwrap();
        let delta = scene.camera.pos - before;
        assert!((delta.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_spin_rewrites_world_each_tick() {
        let mut world = Mesh::new();
        world.add_triangle(Triangle::new(
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        ));
        let mut scene = Scene::new(world, 800.0, 600.0);
        let before = scene.world.triangles[0];
        let mut surface = RecordingSurface::default();
        scene.tick(&mut surface).unwrap();

        assert_eq!(scene.world.triangles.len(), 1);
        assert_ne!(scene.world.triangles[0], before);
    }

    #[test]
    fn test_projected_normal_matches_manual_cross() {
        let triangle = ProjectedTriangle {
            points: [
                Vec3::new(0.0, 0.5, 1.0),
                Vec3::new(0.5, -0.5, 1.0),
                Vec3::new(-0.5, -0.5, 1.0),
            ],
        };
        let [p0, p1, p2] = triangle.points;
        assert_eq!(triangle.normal(), (p0 - p1).cross(p0 - p2));
    }
}
