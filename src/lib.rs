pub mod auto_rotate;
pub mod camera;
pub mod cli;
pub mod clock;
pub mod config;
pub mod controls;
pub mod environment;
pub mod lighting;
pub mod mesh;
pub mod renderer;
pub mod scene;
pub mod texture;

pub use auto_rotate::AutoRotate;
pub use camera::Camera;
pub use config::SceneConfig;
pub use controls::{Interaction, OrbitControls};
