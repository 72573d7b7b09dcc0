/// A free camera described by its orientation basis and position
use crate::math::{basis_matrix, rotation_matrix, MathError, Vec3};

/// Camera state: forward, up and right orientation vectors plus a world
/// position.
///
/// `rt` is always recomputed as `fd x up` after a rotation so the basis
/// stays consistent. The basis is never re-orthonormalized, so repeated
/// incremental rotation can accumulate drift.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub fd: Vec3,
    pub up: Vec3,
    pub rt: Vec3,
    pub pos: Vec3,
}

impl Camera {
    pub fn new(fd: Vec3, up: Vec3, pos: Vec3) -> Self {
        Self {
            fd,
            up,
            rt: fd.cross(up),
            pos,
        }
    }

    /// Move by an offset expressed in the camera's own basis
    /// (right, up, forward), so motion follows the current orientation
    pub fn move_by(&mut self, dx: f32, dy: f32, dz: f32) -> Result<(), MathError> {
        let t_mat = basis_matrix(self.rt, self.up, self.fd);
        self.pos = self.pos + t_mat.mul_vec3(Vec3::new(dx, dy, dz))?;
        Ok(())
    }

    /// Rotate the orientation by per-axis angles (radians)
    pub fn rotate(&mut self, theta_x: f32, theta_y: f32, theta_z: f32) -> Result<(), MathError> {
        let rm = rotation_matrix(theta_x, theta_y, theta_z);
        self.fd = rm.mul_vec3(self.fd)?;
        self.up = rm.mul_vec3(self.up)?;
        self.rt = self.fd.cross(self.up);
        Ok(())
    }

    /// Express a world-space point in the camera's local frame
    pub fn to_camera_space(&self, point: Vec3) -> Result<Vec3, MathError> {
        let t_mat = basis_matrix(self.rt, self.up, self.fd);
        t_mat.mul_vec3(point - self.pos)
    }
}

impl Default for Camera {
    /// The startup camera: looking down +z from 50 units back
    fn default() -> Self {
        Self::new(
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, -50.0),
        )
    }
}
