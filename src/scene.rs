//! Scene assembly: turns the config's parameter objects into the mesh
//! instances the renderer uploads. No geometry lives anywhere else.

use glam::{Mat4, Vec3};

use crate::config::{BoxConfig, SceneConfig};
use crate::lighting::LightingUniform;
use crate::mesh::Mesh;

/// Material parameters for one mesh instance.
#[derive(Debug, Clone, Copy)]
pub struct Material {
    pub base_color: [f32; 3],
    pub metalness: f32,
    pub roughness: f32,
    /// Sample the checker diffuse/roughness maps instead of flat values.
    pub use_checker: bool,
}

#[derive(Debug, Clone)]
pub struct MeshInstance {
    pub mesh: Mesh,
    pub transform: Mat4,
    pub material: Material,
}

pub struct Scene {
    pub instances: Vec<MeshInstance>,
    pub lighting: LightingUniform,
}

impl Scene {
    /// Build the demo scene: checkered ground plane plus the configured
    /// boxes, lit by the configured ambient + directional pair.
    pub fn build(config: &SceneConfig) -> Self {
        let mut instances = Vec::with_capacity(config.boxes.len() + 1);

        instances.push(MeshInstance {
            mesh: Mesh::plane(config.plane.width, config.plane.depth),
            transform: Mat4::IDENTITY,
            material: Material {
                base_color: [1.0, 1.0, 1.0],
                metalness: config.plane.metalness,
                // Multiplied by the checker roughness map in the shader.
                roughness: 1.0,
                use_checker: true,
            },
        });

        for box_config in &config.boxes {
            instances.push(box_instance(box_config));
        }

        log::info!("scene assembled: {} mesh instances", instances.len());

        Self {
            instances,
            lighting: LightingUniform::from_config(&config.lighting),
        }
    }
}

fn box_instance(config: &BoxConfig) -> MeshInstance {
    MeshInstance {
        mesh: Mesh::cuboid(Vec3::from_array(config.size)),
        transform: Mat4::from_translation(Vec3::from_array(config.position)),
        material: Material {
            base_color: config.color,
            metalness: config.metalness,
            roughness: config.roughness,
            use_checker: false,
        },
    }
}
