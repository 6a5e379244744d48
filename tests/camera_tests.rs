use glam::{Mat4, Vec3, Vec4};
use scene_viewer::{Camera, CameraCommand, ViewerError};

#[cfg(test)]
mod camera_tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn camera(position: Vec3, direction: Vec3) -> Camera {
        Camera::new(position, direction, 45.0, 0.1, 100.0, 800, 600).unwrap()
    }

    fn assert_vec_eq(a: Vec3, b: Vec3, msg: &str) {
        assert!(a.abs_diff_eq(b, EPS), "{}: {:?} != {:?}", msg, a, b);
    }

    #[test]
    fn test_initial_pose_matches_construction() {
        let cases = [
            (Vec3::new(0.0, 0.75, 3.0), Vec3::new(0.0, -0.25, -1.0)),
            (Vec3::new(-4.0, 2.0, 1.5), Vec3::new(1.0, 0.0, 0.0)),
            (Vec3::ZERO, Vec3::new(3.0, 1.0, -2.0)),
        ];

        for (position, direction) in cases {
            let cam = camera(position, direction);
            assert_vec_eq(cam.position(), position, "Position should equal the base position");
            assert_vec_eq(cam.direction(), direction.normalize(), "Direction should be normalized");
            assert!(
                cam.camera_matrix().abs_diff_eq(cam.projection() * cam.view(), EPS),
                "Camera matrix should be projection * view"
            );
        }
    }

    #[test]
    fn test_reset_restores_base_pose() {
        let mut cam = camera(Vec3::new(1.0, 1.0, 1.0), Vec3::NEG_Z);
        let expected = (cam.position(), cam.direction(), cam.up(), cam.camera_matrix());

        for command in [
            CameraCommand::MoveFront,
            CameraCommand::RotateLeft,
            CameraCommand::MoveUp,
            CameraCommand::RotateDown,
            CameraCommand::MoveRight,
        ] {
            cam.apply(command);
        }
        assert_ne!(cam.transform(), Mat4::IDENTITY);

        cam.reset_transforms();
        assert_eq!(cam.transform(), Mat4::IDENTITY);
        assert_eq!(cam.position(), expected.0);
        assert_eq!(cam.direction(), expected.1);
        assert_eq!(cam.up(), expected.2);
        assert_eq!(cam.camera_matrix(), expected.3);

        // A second reset changes nothing
        cam.apply(CameraCommand::Reset);
        assert_eq!(cam.camera_matrix(), expected.3);
    }

    #[test]
    fn test_translate_round_trip() {
        let mut cam = camera(Vec3::new(0.0, 0.5, 2.0), Vec3::NEG_Z);
        cam.rotate(Vec3::Y, 30.0);
        let before = cam.position();

        let offset = Vec3::new(1.5, -2.0, 0.25);
        cam.translate(offset);
        assert_vec_eq(cam.position(), before + offset, "Translation is in world space");
        cam.translate(-offset);
        assert_vec_eq(cam.position(), before, "Translation should round trip");
    }

    #[test]
    fn test_rotate_round_trip() {
        let mut cam = camera(Vec3::new(2.0, 0.0, 0.0), Vec3::NEG_Z);
        cam.translate(Vec3::new(0.0, 1.0, 0.0));
        let before = cam.transform();

        let axis = Vec3::new(1.0, 0.0, 1.0);
        cam.rotate(axis, 37.0);
        assert!(!cam.transform().abs_diff_eq(before, EPS));
        cam.rotate(axis, -37.0);
        assert!(cam.transform().abs_diff_eq(before, EPS), "Rotation should round trip");
    }

    #[test]
    fn test_front_back_symmetry() {
        let mut cam = camera(Vec3::new(0.0, 0.75, 3.0), Vec3::new(0.0, -0.25, -1.0));
        cam.rotate_left();
        let before = cam.position();

        cam.move_front();
        assert!((cam.position() - before).length() > 0.09);
        cam.move_back();
        assert_vec_eq(cam.position(), before, "Front then back should return");
    }

    #[test]
    fn test_translation_does_not_turn_the_view() {
        let mut cam = camera(Vec3::ZERO, Vec3::new(1.0, 0.0, -1.0));
        let direction = cam.direction();
        let up = cam.up();
        for _ in 0..20 {
            cam.move_front();
            cam.move_right();
            cam.move_up();
        }
        assert_vec_eq(cam.direction(), direction, "Moves must not rotate the look vector");
        assert_vec_eq(cam.up(), up, "Moves must not rotate the up vector");
    }

    #[test]
    fn test_rotations_are_symmetric_and_in_place() {
        let mut cam = camera(Vec3::new(3.0, 1.0, -2.0), Vec3::NEG_Z);
        let position = cam.position();
        let direction = cam.direction();

        cam.rotate_up();
        assert!(cam.direction().y > direction.y, "Pitch up should raise the view");
        cam.rotate_down();
        assert_vec_eq(cam.direction(), direction, "Up then down should cancel");

        cam.rotate_left();
        assert!(cam.direction().x < 0.0, "Yaw left looking -Z turns toward -X");
        cam.rotate_right();
        assert_vec_eq(cam.direction(), direction, "Left then right should cancel");

        assert_vec_eq(cam.position(), position, "Rotations happen in place");
    }

    #[test]
    fn test_aspect_ratio_only_changes_x_scale() {
        let wide = Camera::new(Vec3::ZERO, Vec3::NEG_Z, 60.0, 0.5, 50.0, 1600, 900).unwrap();
        let tall = Camera::new(Vec3::ZERO, Vec3::NEG_Z, 60.0, 0.5, 50.0, 900, 1600).unwrap();
        let (pw, pt) = (wide.projection(), tall.projection());

        assert_eq!(pw.y_axis, pt.y_axis);
        assert_eq!(pw.z_axis, pt.z_axis);
        assert_eq!(pw.w_axis, pt.w_axis);
        assert_ne!(pw.x_axis.x, pt.x_axis.x);
        let expected_ratio = (900.0 / 1600.0) / (1600.0 / 900.0);
        assert!((pw.x_axis.x / pt.x_axis.x - expected_ratio).abs() < EPS);
    }

    #[test]
    fn test_near_and_far_map_to_depth_bounds() {
        for (w, h) in [(1600, 900), (900, 1600)] {
            let cam = Camera::new(Vec3::ZERO, Vec3::NEG_Z, 60.0, 0.5, 50.0, w, h).unwrap();
            let matrix = cam.camera_matrix();

            let near = matrix * Vec4::new(0.0, 0.0, -0.5, 1.0);
            let far = matrix * Vec4::new(0.0, 0.0, -50.0, 1.0);
            let middle = matrix * Vec4::new(0.0, 0.0, -10.0, 1.0);

            assert!((near.z / near.w).abs() < EPS, "Near plane should map to depth 0");
            assert!((far.z / far.w - 1.0).abs() < EPS, "Far plane should map to depth 1");
            let depth = middle.z / middle.w;
            assert!(depth > 0.0 && depth < 1.0);
        }
    }

    #[test]
    fn test_zero_viewport_rejected() {
        let mut cam = camera(Vec3::ZERO, Vec3::NEG_Z);
        let before = cam.projection();

        assert!(matches!(cam.set_width(0), Err(ViewerError::InvalidViewport { .. })));
        assert!(matches!(cam.set_height(0), Err(ViewerError::InvalidViewport { .. })));
        assert!(cam.set_viewport(0, 0).is_err());
        assert_eq!((cam.width(), cam.height()), (800, 600));
        assert_eq!(cam.projection(), before);
        assert!(cam.aspect_ratio().is_finite());

        assert!(Camera::new(Vec3::ZERO, Vec3::NEG_Z, 45.0, 0.1, 100.0, 0, 600).is_err());
    }

    #[test]
    fn test_invalid_intrinsics_rejected() {
        let bad_fov = Camera::new(Vec3::ZERO, Vec3::NEG_Z, 180.0, 0.1, 100.0, 800, 600);
        assert!(matches!(bad_fov, Err(ViewerError::InvalidFieldOfView(_))));

        let bad_clip = Camera::new(Vec3::ZERO, Vec3::NEG_Z, 45.0, 10.0, 10.0, 800, 600);
        assert!(matches!(bad_clip, Err(ViewerError::InvalidClipPlanes { .. })));

        let zero_dir = Camera::new(Vec3::ZERO, Vec3::ZERO, 45.0, 0.1, 100.0, 800, 600);
        assert!(matches!(zero_dir, Err(ViewerError::DegenerateVector(_))));
    }

    #[test]
    fn test_cameras_are_independent() {
        let mut a = camera(Vec3::ZERO, Vec3::NEG_Z);
        let b = a.clone();
        a.move_front();
        a.rotate_left();
        assert_eq!(b.transform(), Mat4::IDENTITY);
        assert_eq!(b.position(), Vec3::ZERO);
    }
}
