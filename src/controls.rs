use glam::{Vec2, Vec3};
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

use crate::camera::Camera;

const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Interaction transitions surfaced to the auto-rotate controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Started,
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragMode {
    Orbit,
    Pan,
}

/// Pointer-driven orbit controls: left-drag orbits around the target,
/// right-drag pans, the wheel zooms. Owns the drag state and mutates the
/// camera directly while the user interacts.
///
/// Wheel zoom deliberately produces no interaction transition - the
/// auto-rotate controller re-reads distance and height from the live pose
/// every frame, so a zoom mid-sweep is respected without pausing the sweep.
pub struct OrbitControls {
    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
    min_distance: f32,
    max_distance: f32,
    drag: Option<DragMode>,
    cursor: Option<Vec2>,
}

impl OrbitControls {
    pub fn new() -> Self {
        Self {
            rotate_speed: 0.005,
            pan_speed: 0.02,
            zoom_speed: 0.1,
            min_distance: 1.0,
            max_distance: 500.0,
            drag: None,
            cursor: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Feed a window event through the controls. Returns the interaction
    /// transition, if any, for the auto-rotate controller.
    pub fn process_event(
        &mut self,
        camera: &mut Camera,
        event: &WindowEvent,
    ) -> Option<Interaction> {
        match event {
            WindowEvent::MouseInput { state, button, .. } => {
                self.process_button(*state, *button)
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.process_cursor(camera, *position);
                None
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 50.0,
                };
                self.zoom(camera, scroll);
                None
            }
            _ => None,
        }
    }

    fn process_button(
        &mut self,
        state: ElementState,
        button: MouseButton,
    ) -> Option<Interaction> {
        match (state, button) {
            (ElementState::Pressed, MouseButton::Left) => self.begin_drag(DragMode::Orbit),
            (ElementState::Pressed, MouseButton::Right) => self.begin_drag(DragMode::Pan),
            (ElementState::Released, MouseButton::Left | MouseButton::Right) => {
                self.drag.take().map(|_| Interaction::Ended)
            }
            _ => None,
        }
    }

    fn begin_drag(&mut self, mode: DragMode) -> Option<Interaction> {
        let was_dragging = self.drag.is_some();
        self.drag = Some(mode);
        (!was_dragging).then_some(Interaction::Started)
    }

    fn process_cursor(&mut self, camera: &mut Camera, position: PhysicalPosition<f64>) {
        let pos = Vec2::new(position.x as f32, position.y as f32);
        let delta = match self.cursor {
            Some(last) => pos - last,
            None => Vec2::ZERO,
        };
        self.cursor = Some(pos);

        match self.drag {
            Some(DragMode::Orbit) => self.orbit(camera, delta),
            Some(DragMode::Pan) => self.pan(camera, delta),
            None => {}
        }
    }

    /// Rotate the eye around the target, keeping the distance and clamping
    /// the pitch short of the poles.
    fn orbit(&self, camera: &mut Camera, delta: Vec2) {
        let rel = camera.offset_from_target();
        let radius = rel.length();
        if radius <= f32::EPSILON {
            return;
        }

        let yaw = rel.z.atan2(rel.x) + delta.x * self.rotate_speed;
        let pitch = ((rel.y / radius).asin() + delta.y * self.rotate_speed)
            .clamp(-MAX_PITCH, MAX_PITCH);

        camera.eye = camera.target
            + radius
                * Vec3::new(
                    pitch.cos() * yaw.cos(),
                    pitch.sin(),
                    pitch.cos() * yaw.sin(),
                );
        camera.up = Vec3::Y;
    }

    /// Slide eye and target together across the view plane.
    fn pan(&self, camera: &mut Camera, delta: Vec2) {
        let forward = (camera.target - camera.eye).normalize_or_zero();
        let right = forward.cross(camera.up).normalize_or_zero();
        let up = right.cross(forward);

        let translation = right * (-delta.x * self.pan_speed) + up * (delta.y * self.pan_speed);
        camera.target += translation;
        camera.eye += translation;
    }

    fn zoom(&self, camera: &mut Camera, scroll: f32) {
        let rel = camera.offset_from_target();
        let distance = (rel.length() * (1.0 - scroll * self.zoom_speed))
            .clamp(self.min_distance, self.max_distance);
        camera.eye = camera.target + rel.normalize_or_zero() * distance;
    }
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_camera() -> Camera {
        Camera::new(Vec3::new(10.0, 10.0, 10.0), Vec3::ZERO, 1.6)
    }

    #[test]
    fn press_emits_started_once() {
        let mut controls = OrbitControls::new();

        assert_eq!(
            controls.process_button(ElementState::Pressed, MouseButton::Left),
            Some(Interaction::Started)
        );
        // Second button press during an active drag switches mode silently.
        assert_eq!(
            controls.process_button(ElementState::Pressed, MouseButton::Right),
            None
        );
        assert!(controls.is_dragging());
    }

    #[test]
    fn release_emits_ended_only_when_dragging() {
        let mut controls = OrbitControls::new();

        assert_eq!(
            controls.process_button(ElementState::Released, MouseButton::Left),
            None,
            "stray release without a press must not end an interaction"
        );

        controls.process_button(ElementState::Pressed, MouseButton::Left);
        assert_eq!(
            controls.process_button(ElementState::Released, MouseButton::Left),
            Some(Interaction::Ended)
        );
        assert!(!controls.is_dragging());
    }

    #[test]
    fn orbit_preserves_distance() {
        let controls = OrbitControls::new();
        let mut camera = test_camera();
        let before = camera.offset_from_target().length();

        controls.orbit(&mut camera, Vec2::new(120.0, -45.0));

        let after = camera.offset_from_target().length();
        assert!((before - after).abs() < 1e-3, "orbiting must not change the radius");
    }

    #[test]
    fn orbit_clamps_pitch() {
        let controls = OrbitControls::new();
        let mut camera = test_camera();

        controls.orbit(&mut camera, Vec2::new(0.0, 1e6));

        let rel = camera.offset_from_target();
        let pitch = (rel.y / rel.length()).asin();
        assert!(pitch <= MAX_PITCH + 1e-4, "pitch must stop short of the pole");
    }

    #[test]
    fn zoom_clamps_distance() {
        let controls = OrbitControls::new();
        let mut camera = test_camera();

        for _ in 0..200 {
            controls.zoom(&mut camera, 1.0);
        }
        assert!((camera.offset_from_target().length() - controls.min_distance).abs() < 1e-3);

        for _ in 0..200 {
            controls.zoom(&mut camera, -1.0);
        }
        assert!((camera.offset_from_target().length() - controls.max_distance).abs() < 1e-2);
    }

    #[test]
    fn pan_moves_eye_and_target_together() {
        let controls = OrbitControls::new();
        let mut camera = test_camera();
        let before = camera.offset_from_target();

        controls.pan(&mut camera, Vec2::new(30.0, -12.0));

        let after = camera.offset_from_target();
        assert!((before - after).length() < 1e-4, "panning must not change the orbit offset");
        assert!(camera.target != Vec3::ZERO, "panning must move the target");
    }
}
