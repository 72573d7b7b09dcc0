/// Fixed perspective projection from camera space to normalized device
/// coordinates plus a sortable depth value
use crate::math::Vec3;

/// Projection constants, fixed at startup from the initial viewport size.
///
/// The aspect ratio is height over width and is never updated afterwards;
/// resizing the surface is not handled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub znear: f32,
    pub zfar: f32,
    pub fov: f32,
    pub aspect: f32,
}

impl Projection {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            znear: 0.1,
            zfar: 1000.0,
            fov: 90.0,
            aspect: height / width,
        }
    }

    /// Focal scale factor derived from the field of view
    fn focal(&self) -> f32 {
        1.0 / ((self.fov / 2.0) / (90.0 * std::f32::consts::PI)).tan()
    }

    /// Project a camera-space point to (ndc x, ndc y, depth).
    ///
    /// The depth value is a remapping of z used only for ordering, not for
    /// per-pixel depth testing. The divide by z is deliberately unguarded:
    /// there is no frustum clipping, so a point at or behind the camera
    /// yields an infinite or sign-inverted result that is rendered as-is
    /// (visible as streaking artifacts). A clipping stage, if ever added,
    /// would wrap this call.
    pub fn project(&self, point: Vec3) -> Vec3 {
        let q = self.zfar / (self.zfar - self.znear);
        let f = self.focal();
        let px = ((0.75 / self.aspect) * point.x * f) / point.z;
        let py = (f * point.y) / point.z;
        let pz = point.z * q - self.znear * q;
        Vec3::new(px, py, pz)
    }
}
