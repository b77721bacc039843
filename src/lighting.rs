use glam::Vec3;

use crate::config::LightingConfig;

/// GPU uniform for the scene lights: one ambient term and one directional
/// light. The direction points from the surface toward the light, and the
/// colors are pre-multiplied by their intensities.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    pub ambient: [f32; 3],
    pub _pad1: f32,
    pub direction: [f32; 3],
    pub _pad2: f32,
    pub directional: [f32; 3],
    pub _pad3: f32,
}

impl LightingUniform {
    pub fn from_config(config: &LightingConfig) -> Self {
        let direction = Vec3::from_array(config.directional_position).normalize_or_zero();
        Self {
            ambient: (Vec3::from_array(config.ambient_color) * config.ambient_intensity)
                .to_array(),
            _pad1: 0.0,
            direction: direction.to_array(),
            _pad2: 0.0,
            directional: (Vec3::from_array(config.directional_color)
                * config.directional_intensity)
                .to_array(),
            _pad3: 0.0,
        }
    }
}
