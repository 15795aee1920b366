//! Camera types shared with the web frontend.
//!
//! These types avoid platform-specific APIs. The web frontend consumes them to
//! build the view/projection matrices uploaded to the mesh shader.

use crate::constants::{
    CAMERA_FAR, CAMERA_FOV_Y_DEG, CAMERA_NEAR, DEFAULT_CAMERA_POSITION, DEFAULT_CAMERA_TARGET,
};
use glam::{Mat4, Vec3};

/// Where the camera sits and the point it looks at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    pub const DEFAULT: Self = Self::new(DEFAULT_CAMERA_POSITION, DEFAULT_CAMERA_TARGET);

    pub const fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    /// Component-wise linear interpolation of position and look-at point.
    #[inline]
    pub fn lerp(self, to: Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(to.position, t),
            target: self.target.lerp(to.target, t),
        }
    }

    /// World-to-view transform, +Y up, right-handed.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Perspective projection parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub fovy_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fovy_degrees: CAMERA_FOV_Y_DEG,
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

impl Projection {
    /// Clip-space projection for the given aspect ratio (width / height).
    pub fn matrix(&self, aspect: f32) -> Mat4 {
        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            1.0
        };
        Mat4::perspective_rh(self.fovy_degrees.to_radians(), aspect, self.znear, self.zfar)
    }

    pub fn view_proj(&self, pose: &CameraPose, aspect: f32) -> Mat4 {
        self.matrix(aspect) * pose.view_matrix()
    }
}
