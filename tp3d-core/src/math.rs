/// Vector and matrix math for the rendering pipeline
use std::ops::{Add, Sub};

use thiserror::Error;

/// Errors from dimension-checked matrix operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MathError {
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}

/// A 3D vector used for positions, directions and normals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

/// A 4D vector, produced only by 4x4 matrix transforms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }
}

/// A square matrix of size 3 or 4, stored as a flat row-major
/// coefficient list of length size^2
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    li: Vec<f32>,
    size: usize,
}

impl Matrix {
    pub fn new(li: Vec<f32>, size: usize) -> Self {
        debug_assert_eq!(li.len(), size * size);
        Self { li, size }
    }

    pub fn identity(size: usize) -> Self {
        let mut li = vec![0.0; size * size];
        for i in 0..size {
            li[i * size + i] = 1.0;
        }
        Self { li, size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.li[row * self.size + col]
    }

    /// Transform a 3D vector; fails unless the matrix is 3x3
    pub fn mul_vec3(&self, vec: Vec3) -> Result<Vec3, MathError> {
        if self.size != 3 {
            return Err(MathError::DimensionMismatch {
                expected: self.size,
                found: 3,
            });
        }
        let li = &self.li;
        Ok(Vec3::new(
            vec.x * li[0] + vec.y * li[1] + vec.z * li[2],
            vec.x * li[3] + vec.y * li[4] + vec.z * li[5],
            vec.x * li[6] + vec.y * li[7] + vec.z * li[8],
        ))
    }

    /// Transform a 4D vector; fails unless the matrix is 4x4
    pub fn mul_vec4(&self, vec: Vec4) -> Result<Vec4, MathError> {
        if self.size != 4 {
            return Err(MathError::DimensionMismatch {
                expected: self.size,
                found: 4,
            });
        }
        let li = &self.li;
        Ok(Vec4::new(
            vec.x * li[0] + vec.y * li[1] + vec.z * li[2] + vec.w * li[3],
            vec.x * li[4] + vec.y * li[5] + vec.z * li[6] + vec.w * li[7],
            vec.x * li[8] + vec.y * li[9] + vec.z * li[10] + vec.w * li[11],
            vec.x * li[12] + vec.y * li[13] + vec.z * li[14] + vec.w * li[15],
        ))
    }

    /// Matrix product; only defined between square matrices of equal size
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix, MathError> {
        if self.size != other.size {
            return Err(MathError::DimensionMismatch {
                expected: self.size,
                found: other.size,
            });
        }
        let size = self.size;
        let mut li = vec![0.0; size * size];
        for i in 0..size {
            for j in 0..size {
                let mut sum = 0.0;
                for k in 0..size {
                    sum += self.get(i, k) * other.get(k, j);
                }
                li[i * size + j] = sum;
            }
        }
        Ok(Matrix { li, size })
    }
}

/// Build a rotation matrix from per-axis angles (radians), composed
/// as Rx * (Ry * Rz). Rotation is not commutative, so the order matters.
pub fn rotation_matrix(theta_x: f32, theta_y: f32, theta_z: f32) -> Matrix {
    let (sx, cx) = theta_x.sin_cos();
    let (sy, cy) = theta_y.sin_cos();
    let (sz, cz) = theta_z.sin_cos();
    let rot_x = Matrix::new(vec![1.0, 0.0, 0.0, 0.0, cx, -sx, 0.0, sx, cx], 3);
    let rot_y = Matrix::new(vec![cy, 0.0, sy, 0.0, 1.0, 0.0, -sy, 0.0, cy], 3);
    let rot_z = Matrix::new(vec![cz, -sz, 0.0, sz, cz, 0.0, 0.0, 0.0, 1.0], 3);
    // All three factors are 3x3, so the products cannot fail.
    let ryz = rot_y.matmul(&rot_z).unwrap_or_else(|_| Matrix::identity(3));
    rot_x.matmul(&ryz).unwrap_or_else(|_| Matrix::identity(3))
}

/// Build a 3x3 matrix whose rows are the three given vectors, used to
/// change between world space and a camera's local frame
pub fn basis_matrix(v1: Vec3, v2: Vec3, v3: Vec3) -> Matrix {
    Matrix::new(
        vec![v1.x, v1.y, v1.z, v2.x, v2.y, v2.z, v3.x, v3.y, v3.z],
        3,
    )
}
