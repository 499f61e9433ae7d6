use glam::{Mat3, Mat4, Quat, Vec3};

use crate::options::CameraOptions;

/// Rigid transform: world-space position plus orientation.
///
/// Left-handed, +Y up, +Z forward. The camera looks along
/// [`forward`](Self::forward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Position in the parent space.
    pub position: Vec3,
    /// Orientation in the parent space.
    pub rotation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    /// Origin, looking down +Z.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    /// Create a pose from position and rotation.
    #[must_use]
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Pose at `eye` facing `target`, keeping `up` as close to vertical as
    /// possible. Degenerate inputs fall back to the shortest arc from +Z.
    #[must_use]
    pub fn looking_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let forward = (target - eye).normalize_or_zero();
        if forward == Vec3::ZERO {
            return Self::new(eye, Quat::IDENTITY);
        }

        let right = up.cross(forward).normalize_or_zero();
        if right == Vec3::ZERO {
            return Self::new(eye, Quat::from_rotation_arc(Vec3::Z, forward));
        }

        let true_up = forward.cross(right);
        let basis = Mat3::from_cols(right, true_up, forward);
        Self::new(eye, Quat::from_mat3(&basis).normalize())
    }

    /// Local +Z in parent space.
    #[inline]
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Local +X in parent space.
    #[inline]
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Local +Y in parent space.
    #[inline]
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Map a point from this pose's local space into parent space.
    #[inline]
    #[must_use]
    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        self.position + self.rotation * local
    }

    /// Parent-space pose of `child`, where `child` is expressed relative to
    /// this pose.
    #[must_use]
    pub fn compose(&self, child: Pose) -> Pose {
        Pose {
            position: self.transform_point(child.position),
            rotation: self.rotation * child.rotation,
        }
    }

    /// World-to-view matrix for a camera at this pose.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_lh(self.position, self.forward(), self.up())
    }
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Projection {
    /// Build from camera options and an initial aspect ratio.
    #[must_use]
    pub fn from_options(options: &CameraOptions, aspect: f32) -> Self {
        Self {
            fovy: options.fovy,
            aspect,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Update the aspect ratio from a viewport size. Zero-height viewports
    /// (minimized windows) keep the previous ratio.
    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Projection matrix with [0,1] depth range.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        Mat4::perspective_lh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Combined view-projection matrix for a camera at `pose`.
    #[must_use]
    pub fn view_projection(&self, pose: &Pose) -> Mat4 {
        self.build_matrix() * pose.view_matrix()
    }

    /// Normalized device coordinates of `world` seen from `pose`, or `None`
    /// when the point is not in front of the camera.
    #[must_use]
    pub fn project(&self, pose: &Pose, world: Vec3) -> Option<Vec3> {
        let clip = self.view_projection(pose) * world.extend(1.0);
        (clip.w > 0.0).then(|| clip.truncate() / clip.w)
    }
}
