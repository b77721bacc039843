use glam::Vec3;
use orbit_scene::auto_rotate::{azimuth, AutoRotate, BASE_RATE, DEFAULT_SPEED, RESUME_DELAY_MS};
use orbit_scene::camera::Camera;

fn demo_camera() -> Camera {
    Camera::new(Vec3::new(10.0, 10.0, 10.0), Vec3::ZERO, 1.6)
}

fn horizontal_distance(camera: &Camera) -> f32 {
    let rel = camera.offset_from_target();
    (rel.x * rel.x + rel.z * rel.z).sqrt()
}

#[cfg(test)]
mod state_machine_tests {
    use super::*;

    #[test]
    fn initial_state_is_auto_rotating() {
        let mut camera = demo_camera();
        let mut controller = AutoRotate::new(&camera, 0.0);

        assert!(!controller.is_interacting());
        assert!(!controller.resume_pending());

        let before = camera.eye;
        controller.update(&mut camera, 1000.0);
        assert!(
            (camera.eye - before).length() > 1e-3,
            "an idle controller must sweep the camera"
        );
    }

    #[test]
    fn interaction_start_is_idempotent() {
        let mut controller = AutoRotate::new(&demo_camera(), 0.0);

        controller.interaction_started();
        controller.interaction_started();

        assert!(controller.is_interacting());
        assert!(!controller.resume_pending());
    }

    #[test]
    fn update_does_nothing_while_interacting() {
        let mut camera = demo_camera();
        let mut controller = AutoRotate::new(&camera, 0.0);

        controller.interaction_started();
        let before = camera.eye;
        for frame in 0..100 {
            controller.update(&mut camera, frame as f64 * 16.0);
        }

        assert_eq!(camera.eye, before, "the orbit controls own the pose while dragging");
    }

    #[test]
    fn at_most_one_resume_pending() {
        let mut controller = AutoRotate::new(&demo_camera(), 0.0);

        // Arbitrary start/end churn: whatever the sequence, there is never
        // more than one pending resume, and a start always clears it.
        controller.interaction_started();
        controller.interaction_ended(10.0);
        controller.interaction_ended(20.0);
        controller.interaction_ended(30.0);
        assert!(controller.resume_pending());

        controller.interaction_started();
        assert!(!controller.resume_pending(), "a new drag must cancel the pending resume");

        controller.interaction_ended(40.0);
        assert!(controller.resume_pending());
    }

    #[test]
    fn rapid_restart_never_resumes() {
        // End at t=100, restart at t=200: the 500ms deadline from the end
        // must never fire, even long after it would have elapsed.
        let mut camera = demo_camera();
        let mut controller = AutoRotate::new(&camera, 0.0);

        controller.interaction_started();
        controller.update(&mut camera, 50.0);
        controller.interaction_ended(100.0);
        controller.update(&mut camera, 150.0);
        controller.interaction_started();

        for frame in 0..100 {
            controller.update(&mut camera, 200.0 + frame as f64 * 16.0);
            assert!(
                controller.is_interacting(),
                "controller resumed despite the re-grab at t=200"
            );
        }
    }

    #[test]
    fn replaced_deadline_fires_at_the_later_time() {
        let mut camera = demo_camera();
        let mut controller = AutoRotate::new(&camera, 0.0);

        controller.interaction_started();
        controller.interaction_ended(100.0);
        // Stop/start churn ending with a release at t=400.
        controller.interaction_started();
        controller.interaction_ended(400.0);

        controller.update(&mut camera, 100.0 + RESUME_DELAY_MS);
        assert!(
            controller.is_interacting(),
            "the replaced deadline from t=100 must not fire"
        );

        controller.update(&mut camera, 400.0 + RESUME_DELAY_MS);
        assert!(!controller.is_interacting());
    }

    #[test]
    fn disabled_controller_keeps_its_timer_bookkeeping() {
        let mut camera = demo_camera();
        let mut controller = AutoRotate::new(&camera, 0.0);
        controller.enabled = false;

        let before = camera.eye;
        controller.update(&mut camera, 5000.0);
        assert_eq!(camera.eye, before, "disabled controller must not move the camera");

        // The interaction state machine still runs underneath.
        controller.interaction_started();
        controller.interaction_ended(6000.0);
        controller.update(&mut camera, 6000.0 + RESUME_DELAY_MS);
        assert!(!controller.is_interacting(), "resume must fire even while disabled");
        assert_eq!(camera.eye, before);
    }
}

#[cfg(test)]
mod continuity_tests {
    use super::*;

    #[test]
    fn resume_recomputes_angle_from_live_pose() {
        let mut camera = demo_camera();
        let mut controller = AutoRotate::new(&camera, 0.0);

        controller.interaction_started();
        // The user dragged the camera somewhere else entirely.
        camera.eye = Vec3::new(-3.0, 7.0, 12.0);
        controller.interaction_ended(1000.0);

        let fire_time = 1000.0 + RESUME_DELAY_MS;
        let expected_angle = azimuth(camera.offset_from_target());
        let before = camera.eye;

        controller.update(&mut camera, fire_time);

        // The first post-resume update lands arbitrarily close to the
        // pre-resume pose: zero elapsed time, angle re-read from the pose.
        assert!(
            (camera.eye - before).length() < 1e-4,
            "resume caused a visible jump: {:?} -> {:?}",
            before,
            camera.eye
        );
        assert!(
            (azimuth(camera.offset_from_target()) - expected_angle).abs() < 1e-5,
            "start angle must equal atan2(z, x) of the live pose at fire time"
        );
    }

    #[test]
    fn sweep_preserves_distance_and_height() {
        let mut camera = Camera::new(Vec3::new(4.0, 6.5, -3.0), Vec3::new(1.0, 0.0, 2.0), 1.6);
        let mut controller = AutoRotate::new(&camera, 0.0);

        let d = horizontal_distance(&camera);
        let h = camera.offset_from_target().y;

        for frame in 1..=2000 {
            controller.update(&mut camera, frame as f64 * 16.0);
            assert!(
                (horizontal_distance(&camera) - d).abs() < 1e-3,
                "horizontal distance drifted at frame {frame}"
            );
            assert!(
                (camera.offset_from_target().y - h).abs() < 1e-4,
                "height drifted at frame {frame}"
            );
        }
    }

    #[test]
    fn zoom_during_idle_is_respected() {
        let mut camera = demo_camera();
        let mut controller = AutoRotate::new(&camera, 0.0);

        controller.update(&mut camera, 500.0);

        // An external move (zoom) halves the distance mid-sweep; the next
        // update keeps the new radius rather than snapping back.
        camera.eye = camera.target + camera.offset_from_target() * 0.5;
        let zoomed = horizontal_distance(&camera);

        controller.update(&mut camera, 516.0);
        assert!(
            (horizontal_distance(&camera) - zoomed).abs() < 1e-3,
            "live radius must be preserved after an external zoom"
        );
    }
}

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn two_seconds_of_idle_rotation_from_the_stock_pose() {
        // Start at (10,10,10) looking at the origin: the initial angle is
        // atan2(10,10) = pi/4. After 2000ms at the default speed the sweep
        // has advanced by 2000 * 0.0005 * 0.5 = 0.5 rad.
        let mut camera = demo_camera();
        let mut controller = AutoRotate::new(&camera, 0.0);
        assert_eq!(controller.speed(), DEFAULT_SPEED);

        controller.update(&mut camera, 2000.0);

        let expected_angle = std::f32::consts::FRAC_PI_4 + 2000.0 * BASE_RATE * DEFAULT_SPEED;
        let radius = 200.0f32.sqrt();
        let expected = Vec3::new(
            expected_angle.cos() * radius,
            10.0,
            expected_angle.sin() * radius,
        );

        assert!(
            (camera.eye - expected).length() < 1e-3,
            "expected {:?}, got {:?}",
            expected,
            camera.eye
        );
    }

    #[test]
    fn interrupted_quiescence_anchors_to_the_final_pose() {
        // start at t=0, end at t=100, start again at t=200: the controller
        // stays interacting throughout and never re-anchors the sweep.
        let mut camera = demo_camera();
        let mut controller = AutoRotate::new(&camera, 0.0);

        controller.interaction_started();
        camera.eye = Vec3::new(0.0, 10.0, 14.0);
        controller.interaction_ended(100.0);
        controller.interaction_started();

        // Release for good at t=1000 without moving; resume fires at 1500
        // and anchors to the pose set during the drag.
        controller.interaction_ended(1000.0);
        controller.update(&mut camera, 1000.0 + RESUME_DELAY_MS);

        let angle = azimuth(camera.offset_from_target());
        assert!(
            (angle - std::f32::consts::FRAC_PI_2).abs() < 1e-5,
            "anchor must come from the final pose, not the initial one"
        );
    }
}
