use std::fmt;
use std::ops::Mul;

use crate::deg_to_rad;
use crate::error::MatrixError;
use crate::vec::Vec3;

/// A 4x4 transform matrix stored as 16 contiguous floats.
///
/// The flat layout matches what the fixed-function GL helpers produce:
/// the main diagonal sits at indices 0, 5, 10, 15 and the translation
/// terms at indices 12..15. The layout is GPU-upload ready via
/// [`Mat4::as_slice`] or a `bytemuck` cast.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Mat4(pub [f32; 16]);

impl Mat4 {
    pub fn identity() -> Mat4 {
        let mut data = [0.0; 16];
        data[0] = 1.0;
        data[5] = 1.0;
        data[10] = 1.0;
        data[15] = 1.0;
        Mat4(data)
    }

    /// Overwrites all 16 slots with the identity matrix.
    pub fn set_identity(&mut self) {
        *self = Mat4::identity();
    }

    /// Returns `self * rhs`.
    ///
    /// The product accumulates into a temporary buffer before the result
    /// is constructed, so writing the result back over either operand
    /// (`a = a.multiply(&a)`) is well defined and equal to squaring `a`.
    ///
    /// Composition order is left-operand-applied-second: in
    /// `projection * view * model`, a vertex is transformed by `model`
    /// first, then `view`, then `projection`.
    pub fn multiply(&self, rhs: &Mat4) -> Mat4 {
        let mut temp = [0.0f32; 16];
        for (idx, cell) in temp.iter_mut().enumerate() {
            let (i, j) = (idx / 4, idx % 4);
            *cell = (0..4).map(|k| self.0[i * 4 + k] * rhs.0[k * 4 + j]).sum();
        }
        Mat4(temp)
    }

    /// Builds an off-axis perspective projection from the frustum bounds.
    ///
    /// Degenerate bounds (`left == right`, `bottom == top`, `near == far`)
    /// are not rejected; they produce infinities that propagate silently.
    /// Use [`Mat4::try_frustum`] to reject them instead.
    pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
        let r_width = 1.0 / (right - left);
        let r_height = 1.0 / (top - bottom);
        let r_depth = 1.0 / (near - far);
        let x = 2.0 * near * r_width;
        let y = 2.0 * near * r_height;
        let a = (right + left) * r_width;
        let b = (top + bottom) * r_height;
        let c = (far + near) * r_depth;
        let d = 2.0 * far * near * r_depth;

        Mat4([
            x, 0.0, 0.0, 0.0, //
            0.0, y, 0.0, 0.0, //
            a, b, c, -1.0, //
            0.0, 0.0, d, 0.0,
        ])
    }

    /// Checked variant of [`Mat4::frustum`] that rejects coinciding
    /// planes instead of dividing by zero.
    pub fn try_frustum(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Result<Mat4, MatrixError> {
        if left == right {
            return Err(MatrixError::DegenerateFrustum("left/right"));
        }
        if bottom == top {
            return Err(MatrixError::DegenerateFrustum("bottom/top"));
        }
        if near == far {
            return Err(MatrixError::DegenerateFrustum("near/far"));
        }
        Ok(Mat4::frustum(left, right, bottom, top, near, far))
    }

    /// Builds a symmetric perspective projection from a vertical field of
    /// view and an aspect ratio.
    pub fn perspective(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        let h = near * (deg_to_rad(fov_y_degrees) * 0.5).tan();
        let w = h * aspect;
        Mat4::frustum(-w, w, -h, h, near, far)
    }

    /// Builds a view matrix for a camera at `eye` looking toward `center`.
    ///
    /// The camera basis is `side = normalize(forward x up)` and
    /// `up' = side x forward`, written column-style into the buffer, with
    /// the `-eye` translation composed on through [`Mat4::translate`].
    /// Zero-length forward or side vectors are left unnormalized, which
    /// keeps a degenerate camera (eye == center, or up parallel to the
    /// view direction) finite instead of producing NaNs.
    pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Mat4 {
        let forward = (center - eye).normalize();
        let side = forward.cross(&up).normalize();
        let up = side.cross(&forward);

        let mut m = Mat4([
            side.x(),
            up.x(),
            -forward.x(),
            0.0,
            side.y(),
            up.y(),
            -forward.y(),
            0.0,
            side.z(),
            up.z(),
            -forward.z(),
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ]);
        m.translate(-eye.x(), -eye.y(), -eye.z());
        m
    }

    pub fn translation(x: f32, y: f32, z: f32) -> Mat4 {
        let mut m = Mat4::identity();
        m.translate(x, y, z);
        m
    }

    pub fn scaling(x: f32, y: f32, z: f32) -> Mat4 {
        let mut m = Mat4::identity();
        m.scale(x, y, z);
        m
    }

    /// Builds the axis-angle rotation matrix (Rodrigues form).
    ///
    /// The axis is normalized unless it already has unit length. A
    /// zero-length axis divides by zero and yields NaNs; use
    /// [`Mat4::try_rotate`] where that must be an error.
    pub fn rotation(angle_degrees: f32, x: f32, y: f32, z: f32) -> Mat4 {
        let rad = deg_to_rad(angle_degrees);
        let s = rad.sin();
        let c = rad.cos();

        let (mut x, mut y, mut z) = (x, y, z);
        let len = (x * x + y * y + z * z).sqrt();
        if len != 1.0 {
            let recip_len = 1.0 / len;
            x *= recip_len;
            y *= recip_len;
            z *= recip_len;
        }

        let nc = 1.0 - c;
        let xy = x * y;
        let yz = y * z;
        let zx = z * x;
        let xs = x * s;
        let ys = y * s;
        let zs = z * s;

        Mat4([
            x * x * nc + c,
            xy * nc + zs,
            zx * nc - ys,
            0.0,
            xy * nc - zs,
            y * y * nc + c,
            yz * nc + xs,
            0.0,
            zx * nc + ys,
            yz * nc - xs,
            z * z * nc + c,
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }

    /// Composes a translation onto the matrix in place (`m = m * T`).
    ///
    /// Only the translation terms at indices 12..15 change: the requested
    /// offset is projected through the existing basis vectors.
    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        for i in 0..4 {
            self.0[12 + i] += self.0[i] * x + self.0[4 + i] * y + self.0[8 + i] * z;
        }
    }

    /// Composes a scale onto the matrix in place (`m = m * S`).
    pub fn scale(&mut self, x: f32, y: f32, z: f32) {
        for i in 0..4 {
            self.0[i] *= x;
            self.0[4 + i] *= y;
            self.0[8 + i] *= z;
        }
    }

    /// Composes an axis-angle rotation onto the matrix in place
    /// (`m = m * R`), going through the alias-safe [`Mat4::multiply`].
    pub fn rotate(&mut self, angle_degrees: f32, x: f32, y: f32, z: f32) {
        *self = self.multiply(&Mat4::rotation(angle_degrees, x, y, z));
    }

    /// Checked variant of [`Mat4::rotate`] that rejects a zero-length
    /// axis instead of filling the matrix with NaNs.
    pub fn try_rotate(
        &mut self,
        angle_degrees: f32,
        x: f32,
        y: f32,
        z: f32,
    ) -> Result<(), MatrixError> {
        if x == 0.0 && y == 0.0 && z == 0.0 {
            return Err(MatrixError::ZeroRotationAxis);
        }
        self.rotate(angle_degrees, x, y, z);
        Ok(())
    }

    /// The flat buffer, ready for uniform upload.
    pub fn as_slice(&self) -> &[f32; 16] {
        &self.0
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(values: [f32; 16]) -> Self {
        Mat4(values)
    }
}

impl From<Mat4> for [f32; 16] {
    fn from(matrix: Mat4) -> Self {
        matrix.0
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        self.multiply(&rhs)
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            writeln!(
                f,
                "[{:>12.6} {:>12.6} {:>12.6} {:>12.6}]",
                self.0[row * 4],
                self.0[row * 4 + 1],
                self.0[row * 4 + 2],
                self.0[row * 4 + 3],
            )?;
        }
        Ok(())
    }
}
