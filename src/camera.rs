use glam::{Mat4, Vec3};

/// Perspective camera defined by eye position, orbit target, and projection
/// parameters.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target; also the point the orbit controls revolve around.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(eye: Vec3, target: Vec3, aspect: f32) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
            aspect,
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    /// Build the combined view-projection matrix.
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        let proj = Mat4::perspective_rh(self.fovy.to_radians(), self.aspect, self.znear, self.zfar);
        proj * view
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Eye position relative to the orbit target.
    pub fn offset_from_target(&self) -> Vec3 {
        self.eye - self.target
    }
}

/// GPU uniform holding the view-projection matrix, its inverse (for
/// unprojecting sky rays), and the eye position.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub inv_view_proj: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub _pad: f32,
}

impl CameraUniform {
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            inv_view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            _pad: 0.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        let matrix = camera.build_matrix();
        self.view_proj = matrix.to_cols_array_2d();
        self.inv_view_proj = matrix.inverse().to_cols_array_2d();
        self.position = camera.eye.to_array();
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_relative_to_target() {
        let camera = Camera::new(Vec3::new(10.0, 10.0, 10.0), Vec3::new(2.0, 0.0, -3.0), 1.6);
        assert_eq!(camera.offset_from_target(), Vec3::new(8.0, 10.0, 13.0));
    }

    #[test]
    fn set_aspect_ignores_zero_height() {
        let mut camera = Camera::new(Vec3::ONE, Vec3::ZERO, 1.0);
        camera.set_aspect(800, 0);
        assert_eq!(camera.aspect, 1.0, "degenerate resize must not poison the projection");

        camera.set_aspect(1920, 1080);
        assert!((camera.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    }

    #[test]
    fn uniform_tracks_camera() {
        let camera = Camera::new(Vec3::new(0.0, 5.0, 12.0), Vec3::ZERO, 1.5);
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);

        assert_eq!(uniform.position, [0.0, 5.0, 12.0]);

        let vp = Mat4::from_cols_array_2d(&uniform.view_proj);
        let inv = Mat4::from_cols_array_2d(&uniform.inv_view_proj);
        let round_trip = vp * inv;
        for (a, b) in round_trip
            .to_cols_array()
            .iter()
            .zip(Mat4::IDENTITY.to_cols_array().iter())
        {
            assert!((a - b).abs() < 1e-4, "inverse must round-trip the view-projection");
        }
    }
}
