use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Scene parameter objects. The defaults reproduce the stock demo scene; a
/// JSON file can override any subset of fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    pub plane: PlaneConfig,
    pub boxes: Vec<BoxConfig>,
    pub lighting: LightingConfig,
    pub camera: CameraConfig,
    pub auto_rotate: AutoRotateConfig,
    /// Path to an equirectangular Radiance `.hdr` environment map. When
    /// absent (or unreadable) a procedural sky gradient is used instead.
    pub environment: Option<String>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            plane: PlaneConfig::default(),
            boxes: vec![
                BoxConfig {
                    size: [2.0, 2.0, 2.0],
                    color: [0.0, 1.0, 0.0],
                    position: [0.0, 1.0, 0.0],
                    ..BoxConfig::default()
                },
                BoxConfig {
                    size: [1.0, 3.0, 1.0],
                    color: [1.0, 0.0, 0.0],
                    position: [5.0, 1.0, 5.0],
                    ..BoxConfig::default()
                },
                BoxConfig {
                    size: [3.0, 1.0, 3.0],
                    color: [0.0, 0.0, 1.0],
                    position: [-5.0, 1.0, -5.0],
                    ..BoxConfig::default()
                },
            ],
            lighting: LightingConfig::default(),
            camera: CameraConfig::default(),
            auto_rotate: AutoRotateConfig::default(),
            environment: None,
        }
    }
}

impl SceneConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading scene config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing scene config {}", path.display()))
    }
}

/// Checkered ground plane parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaneConfig {
    pub width: f32,
    pub depth: f32,
    /// Checkers per texture tile.
    pub checkers: u32,
    pub color1: [f32; 3],
    pub color2: [f32; 3],
    /// Roughness values baked into the checker roughness map.
    pub roughness1: f32,
    pub roughness2: f32,
    pub metalness: f32,
}

impl Default for PlaneConfig {
    fn default() -> Self {
        Self {
            width: 50.0,
            depth: 50.0,
            checkers: 8,
            color1: [1.0, 1.0, 1.0],
            color2: [0.0, 0.0, 0.0],
            roughness1: 0.1,
            roughness2: 0.5,
            metalness: 0.6,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoxConfig {
    pub size: [f32; 3],
    pub color: [f32; 3],
    pub position: [f32; 3],
    pub metalness: f32,
    pub roughness: f32,
}

impl Default for BoxConfig {
    fn default() -> Self {
        Self {
            size: [2.0, 2.0, 2.0],
            color: [0.0, 1.0, 0.0],
            position: [0.0, 1.0, 0.0],
            metalness: 0.1,
            roughness: 0.7,
        }
    }
}

/// One ambient term plus one directional light.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LightingConfig {
    pub ambient_color: [f32; 3],
    pub ambient_intensity: f32,
    pub directional_color: [f32; 3],
    pub directional_intensity: f32,
    /// Position of the directional light; only the direction toward the
    /// origin matters.
    pub directional_position: [f32; 3],
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient_color: [0.25, 0.25, 0.25],
            ambient_intensity: 0.4,
            directional_color: [1.0, 1.0, 1.0],
            directional_intensity: 1.0,
            directional_position: [10.0, 10.0, 5.0],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub fovy: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [10.0, 10.0, 10.0],
            target: [0.0, 0.0, 0.0],
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AutoRotateConfig {
    pub enabled: bool,
    pub speed: f32,
}

impl Default for AutoRotateConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            speed: crate::auto_rotate::DEFAULT_SPEED,
        }
    }
}
