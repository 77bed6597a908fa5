//! Minimal 3D math for the bridge contracts.
//! All numeric types use f32.

use serde::{Deserialize, Serialize};

/// 3D position vector.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3f {
    pub const ZERO: Vec3f = Vec3f {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Multiply every coordinate by a scalar factor.
    #[inline]
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }
}

/// Unit quaternion (x, y, z, w).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    pub const IDENTITY: Quat = Quat {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// Build a rotation of `radians` around a unit `axis`.
    pub fn from_axis_angle(axis: Vec3f, radians: f32) -> Self {
        let half = radians * 0.5;
        let s = half.sin();
        Self {
            x: axis.x * s,
            y: axis.y * s,
            z: axis.z * s,
            w: half.cos(),
        }
    }

    /// Hamilton product `self * rhs` (apply `rhs` first, then `self`).
    #[inline]
    pub fn mul(self, rhs: Quat) -> Quat {
        Quat {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }

    pub fn norm(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }
}

const X_AXIS: Vec3f = Vec3f::new(1.0, 0.0, 0.0);
const Y_AXIS: Vec3f = Vec3f::new(0.0, 1.0, 0.0);
const Z_AXIS: Vec3f = Vec3f::new(0.0, 0.0, 1.0);

/// Convert Euler angles in degrees (rotation about X, Y, Z) into a quaternion
/// using the fixed ZYX convention: the result is `Rz * Ry * Rx`.
pub fn euler_zyx_deg_to_quat(rx_deg: f32, ry_deg: f32, rz_deg: f32) -> Quat {
    let rot_x = Quat::from_axis_angle(X_AXIS, rx_deg.to_radians());
    let rot_y = Quat::from_axis_angle(Y_AXIS, ry_deg.to_radians());
    let rot_z = Quat::from_axis_angle(Z_AXIS, rz_deg.to_radians());
    rot_z.mul(rot_y).mul(rot_x)
}
