/// TP3D Core Library - Software 3D rendering pipeline
///
/// This library provides the frontend-independent core of the renderer:
/// vector/matrix math, OBJ-subset mesh loading, the camera, perspective
/// projection, and the painter's-algorithm frame pipeline.

pub mod camera;
pub mod geometry;
pub mod input;
pub mod math;
pub mod obj;
pub mod projection;
pub mod scene;
pub mod surface;

// Re-export commonly used types
pub use camera::Camera;
pub use geometry::{Mesh, Triangle};
pub use input::{Direction, MotionState};
pub use math::{MathError, Matrix, Vec3, Vec4};
pub use projection::Projection;
pub use scene::Scene;
pub use surface::Surface;
