//! A three-sided CAVE driven through the public API, the way the
//! command line tool does it.

use pretty_assertions::assert_eq;
use rstest::rstest;

use rs_offaxis::cameras::perspective::derive_symmetric_camera;
use rs_offaxis::cameras::projection::build_off_axis_transform;
use rs_offaxis::cameras::reconstruct::reconstruct_from_matrices;
use rs_offaxis::cameras::stereo::Eye;
use rs_offaxis::cameras::strategy::{CameraSetup, Capability, Strategy, StrategyError};
use rs_offaxis::core::geometry::{pnt3_distancef, Bounds2f, Point3f, Vector3f};
use rs_offaxis::core::setup::CaveSetup;
use rs_offaxis::core::transform::Matrix4x4;

const CAVE: &str = r#"{
    "screens": [
        {
            "name": "left",
            "lower_left": { "x": -1.5, "y": 0.0, "z": 1.5 },
            "lower_right": { "x": -1.5, "y": 0.0, "z": -1.5 },
            "upper_right": { "x": -1.5, "y": 3.0, "z": -1.5 }
        },
        {
            "name": "front",
            "lower_left": { "x": -1.5, "y": 0.0, "z": -1.5 },
            "lower_right": { "x": 1.5, "y": 0.0, "z": -1.5 },
            "upper_right": { "x": 1.5, "y": 3.0, "z": -1.5 }
        },
        {
            "name": "right",
            "lower_left": { "x": 1.5, "y": 0.0, "z": -1.5 },
            "lower_right": { "x": 1.5, "y": 0.0, "z": 1.5 },
            "upper_right": { "x": 1.5, "y": 3.0, "z": 1.5 }
        }
    ],
    "head": { "x": 0.25, "y": 1.7, "z": 0.1 },
    "head_right": { "x": 1.0, "y": 0.0, "z": 0.0 },
    "eye_separation": 0.065,
    "renderer": { "matrix_camera": true }
}"#;

#[test]
fn every_screen_and_eye_round_trips() {
    let setup = CaveSetup::from_json(CAVE).unwrap();
    let rig = setup.stereo_rig();
    assert_eq!(rig.eyes(), &[Eye::Left, Eye::Right]);
    for screen in &setup.screens {
        for &eye in rig.eyes() {
            let position = rig.eye_position(eye).unwrap();
            let t = build_off_axis_transform(&screen.quad, &position).unwrap();
            let r = reconstruct_from_matrices(
                &Matrix4x4::inverse(&t.projection.m).unwrap(),
                &Matrix4x4::inverse(&t.view.m).unwrap(),
            )
            .unwrap();
            let direct = derive_symmetric_camera(&screen.quad, &position).unwrap();
            assert!(
                pnt3_distancef(&r.eye, &position) < 1e-6,
                "{} {}: {:?} != {:?}",
                screen.name,
                eye,
                r.eye,
                position
            );
            assert!((r.camera.fovy - direct.fovy).abs() < 1e-6);
            assert!((r.camera.aspect - direct.aspect).abs() < 1e-6);
            assert!(r.camera.image_region.max_deviation(&direct.image_region) < 1e-6);
        }
    }
}

#[rstest]
#[case::left(0, Vector3f::new(-1.0, 0.0, 0.0))]
#[case::front(1, Vector3f::new(0.0, 0.0, -1.0))]
#[case::right(2, Vector3f::new(1.0, 0.0, 0.0))]
fn cameras_look_at_their_wall(#[case] index: usize, #[case] direction: Vector3f) {
    let setup = CaveSetup::from_json(CAVE).unwrap();
    let camera = derive_symmetric_camera(&setup.screens[index].quad, &setup.head).unwrap();
    assert_eq!(camera.direction, direction);
    assert_eq!(camera.up, Vector3f::new(0.0, 1.0, 0.0));
}

#[test]
fn powerwall_camera_from_the_default_setup() {
    let setup = CaveSetup::default();
    let camera = Strategy::FixedFramePerspective
        .camera_setup(
            &setup.renderer,
            &setup.screens[0].quad,
            &setup.head,
            &setup.clip_planes,
        )
        .unwrap();
    match camera {
        CameraSetup::Perspective { position, camera } => {
            assert_eq!(position, Point3f::new(1.5, 1.68, 1.5));
            assert!((camera.fovy - 2.0 * 1.12_f64.atan()).abs() < 1e-12);
            assert!((camera.aspect - 3.0 / 3.36).abs() < 1e-12);
            assert!(camera.image_region.max_deviation(&Bounds2f::new(0.0, 0.0, 1.0, 3.0 / 3.36)) < 1e-12);
        }
        other => panic!("expected a perspective camera, got {:?}", other),
    }
    assert_eq!(
        Strategy::MatrixCamera.camera_setup(
            &setup.renderer,
            &setup.screens[0].quad,
            &setup.head,
            &setup.clip_planes,
        ),
        Err(StrategyError::Unsupported(Capability::MatrixCamera))
    );
}

#[test]
fn head_behind_a_wall_only_fails_that_wall() {
    let mut setup = CaveSetup::from_json(CAVE).unwrap();
    // inside the CAVE but level with the right wall
    setup.head = Point3f::new(1.5, 1.7, 0.0);
    let results: Vec<bool> = setup
        .screens
        .iter()
        .map(|s| derive_symmetric_camera(&s.quad, &setup.head).is_ok())
        .collect();
    assert_eq!(results, vec![true, true, false]);
}
