use glam::Vec3;

use crate::camera::Camera;

/// Quiet period between the last interaction ending and auto-rotation
/// resuming, in milliseconds.
pub const RESUME_DELAY_MS: f64 = 500.0;

/// Base angular rate in radians per millisecond, before the speed
/// multiplier. At the default speed of 0.5 a full sweep takes roughly four
/// minutes.
pub const BASE_RATE: f32 = 0.0005;

pub const DEFAULT_SPEED: f32 = 0.5;

/// Single-shot resume deadline owned by the controller. Scheduling replaces
/// any pending deadline, cancelling clears it, and `fire` reports true at
/// most once per schedule.
#[derive(Debug, Clone, Copy, Default)]
struct ResumeTimer {
    deadline: Option<f64>,
}

impl ResumeTimer {
    fn schedule(&mut self, now_ms: f64) {
        self.deadline = Some(now_ms + RESUME_DELAY_MS);
    }

    fn cancel(&mut self) {
        self.deadline = None;
    }

    fn pending(&self) -> bool {
        self.deadline.is_some()
    }

    fn fire(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Blends user-driven orbiting with time-based idle auto-rotation around
/// the camera's target.
///
/// While the user drags, the orbit controls own the camera pose and this
/// controller stays out of the way. Once interaction has been quiet for
/// [`RESUME_DELAY_MS`], the sweep resumes from whatever azimuth the user
/// left the camera at, so the hand-off back to auto-rotation never jumps.
pub struct AutoRotate {
    /// Master switch; suppresses the pose write but not the timer
    /// bookkeeping.
    pub enabled: bool,
    speed: f32,
    interacting: bool,
    resume: ResumeTimer,
    start_time_ms: f64,
    start_angle: f32,
}

impl AutoRotate {
    /// Create a controller anchored to the camera's current azimuth, with
    /// the sweep clock starting at `now_ms`.
    pub fn new(camera: &Camera, now_ms: f64) -> Self {
        Self {
            enabled: true,
            speed: DEFAULT_SPEED,
            interacting: false,
            resume: ResumeTimer::default(),
            start_time_ms: now_ms,
            start_angle: azimuth(camera.offset_from_target()),
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn is_interacting(&self) -> bool {
        self.interacting
    }

    pub fn resume_pending(&self) -> bool {
        self.resume.pending()
    }

    /// The user grabbed the camera. Cancels any pending resume; idempotent
    /// when called while already interacting.
    pub fn interaction_started(&mut self) {
        self.interacting = true;
        self.resume.cancel();
    }

    /// The user released the camera. Schedules the resume deadline,
    /// replacing any earlier one so only a single resume can fire per
    /// quiescent period.
    pub fn interaction_ended(&mut self, now_ms: f64) {
        self.resume.schedule(now_ms);
    }

    /// Per-frame update. Fires a due resume deadline first, then (when
    /// idle and enabled) rewrites the camera position along the sweep.
    ///
    /// Horizontal distance and height are re-read from the live pose every
    /// frame rather than cached, so external camera moves (zooming, mostly)
    /// keep their effect without any coordination with this controller.
    pub fn update(&mut self, camera: &mut Camera, now_ms: f64) {
        if self.resume.fire(now_ms) {
            self.interacting = false;
            // Re-anchor the sweep at the pose the user left behind.
            self.start_angle = azimuth(camera.offset_from_target());
            self.start_time_ms = now_ms;
        }

        if self.interacting || !self.enabled {
            return;
        }

        let elapsed = (now_ms - self.start_time_ms) as f32 * BASE_RATE * self.speed;
        let angle = self.start_angle + elapsed;

        let rel = camera.offset_from_target();
        let radius = (rel.x * rel.x + rel.z * rel.z).sqrt();
        let height = rel.y;

        camera.eye =
            camera.target + Vec3::new(angle.cos() * radius, height, angle.sin() * radius);
        camera.up = Vec3::Y;
    }
}

/// Azimuthal angle of `rel` around the vertical axis, measured in the
/// horizontal plane.
pub fn azimuth(rel: Vec3) -> f32 {
    rel.z.atan2(rel.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resume_timer_fires_once() {
        let mut timer = ResumeTimer::default();

        assert!(!timer.fire(0.0), "unscheduled timer must stay quiet");

        timer.schedule(100.0);
        assert!(timer.pending());
        assert!(!timer.fire(100.0 + RESUME_DELAY_MS - 1.0));
        assert!(timer.fire(100.0 + RESUME_DELAY_MS));
        assert!(!timer.pending());
        assert!(!timer.fire(10_000.0), "a fired timer must not fire again");
    }

    #[test]
    fn resume_timer_reschedule_replaces_deadline() {
        let mut timer = ResumeTimer::default();

        timer.schedule(0.0);
        timer.schedule(300.0);

        assert!(
            !timer.fire(0.0 + RESUME_DELAY_MS),
            "the first deadline was replaced and must not fire"
        );
        assert!(timer.fire(300.0 + RESUME_DELAY_MS));
    }

    #[test]
    fn resume_timer_cancel_clears_deadline() {
        let mut timer = ResumeTimer::default();

        timer.schedule(0.0);
        timer.cancel();

        assert!(!timer.pending());
        assert!(!timer.fire(10_000.0));
    }

    #[test]
    fn azimuth_matches_atan2_convention() {
        assert!((azimuth(Vec3::new(1.0, 0.0, 0.0)) - 0.0).abs() < 1e-6);
        assert!((azimuth(Vec3::new(0.0, 5.0, 1.0)) - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!(
            (azimuth(Vec3::new(10.0, 0.0, 10.0)) - std::f32::consts::FRAC_PI_4).abs() < 1e-6,
            "height must not affect the azimuth"
        );
    }
}
