//! Integration tests for the plot facade.
//!
//! Every scene is drawn into a `RecordingCanvas` and checked through the
//! recorded commands and the returned drawings.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI};

use dqplot::*;
use proptest::prelude::*;

fn assert_close(a: DVec3, b: DVec3) {
    assert!((a - b).length() < 1e-9, "{a} != {b}");
}

fn deg2rad(degrees: &[f64]) -> Vec<f64> {
    degrees.iter().map(|d| d.to_radians()).collect()
}

/// The pose from the demo: 60 degrees about x, translated by 0.5j + 0.45k.
fn demo_pose() -> DualQuaternion {
    let r = DualQuaternion::from_rotation(DVec3::X, FRAC_PI_3);
    DualQuaternion::from_pose(r, DVec3::new(0.0, 0.5, 0.45))
}

#[test]
fn test_pose_scene() {
    let mut canvas = RecordingCanvas::new();
    let options = PlotOptions::new().with_name("x");
    let drawing = plot_object(&mut canvas, &demo_pose(), &options).unwrap();

    let frame = drawing.as_pose().unwrap();
    assert_close(frame.origin, DVec3::new(0.0, 0.5, 0.45));
    assert_close(frame.y_axis, DVec3::new(0.0, 0.5, 0.866_025_403_784_438_6));

    assert_eq!(canvas.num_points(), 1);
    assert_eq!(canvas.num_quivers(), 3);
    assert_eq!(canvas.num_labels(), 1);

    for command in canvas.commands() {
        if let DrawCommand::Quiver { length, .. } = command {
            assert!((length - 0.1).abs() < 1e-12);
        }
    }
}

#[test]
fn test_line_scene() {
    let l = DualQuaternion::K;
    let m = cross(&(DualQuaternion::I * 0.5 - DualQuaternion::J * 0.3), &l);
    let l_dq = l + DualQuaternion::E * m;

    let mut canvas = RecordingCanvas::new();
    let options = PlotOptions::line().with_scale(1.0);
    let drawing = plot_object(&mut canvas, &l_dq, &options).unwrap();

    let segment = drawing.as_line().unwrap();
    assert_close(segment.anchor, DVec3::new(0.5, -0.3, 0.0));
    match &canvas.commands()[..] {
        [DrawCommand::Segment { start, end, style }] => {
            assert_close(*start, DVec3::new(0.5, -0.3, -1.0));
            assert_close(*end, DVec3::new(0.5, -0.3, 1.0));
            assert_eq!(style.color, colors::RED);
        }
        other => panic!("unexpected commands: {other:?}"),
    }
}

#[test]
fn test_plane_scene() {
    let pi_dq = DualQuaternion::plane(DVec3::X, DVec3::new(0.3, 1.0, -2.0));

    let mut canvas = RecordingCanvas::new();
    let options = PlotOptions::plane().with_scale(0.5).with_color(colors::BLUE);
    let drawing = plot_object(&mut canvas, &pi_dq, &options).unwrap();

    let patch = drawing.as_plane().unwrap();
    assert_close(patch.frame.z_axis, DVec3::X);
    assert!((patch.offset - 0.3).abs() < 1e-12);
    for p in patch.surface.points() {
        assert!((p.x - 0.3).abs() < 1e-9, "{p} off plane");
    }

    assert_eq!(canvas.num_surfaces(), 1);
    assert_eq!(canvas.num_quivers(), 3);
    // Frame axes keep their own length regardless of the patch size.
    for command in canvas.commands() {
        if let DrawCommand::Quiver { length, .. } = command {
            assert!((length - 0.1).abs() < 1e-12);
        }
    }
    let surface_style = canvas.commands().iter().find_map(|c| match c {
        DrawCommand::Surface { style, .. } => Some(style),
        _ => None,
    });
    assert_eq!(surface_style.map(|s| s.color), Some(colors::BLUE));
}

#[test]
fn test_line_with_linespec() {
    let mut canvas = RecordingCanvas::new();
    let options = PlotOptions::line().with_linespec("b--");
    plot_object(&mut canvas, &DualQuaternion::J, &options).unwrap();

    match &canvas.commands()[..] {
        [DrawCommand::Segment { style, .. }] => {
            assert_eq!(style.color, colors::BLUE);
            assert_eq!(style.line_style, LineStyle::Dashed);
        }
        other => panic!("unexpected commands: {other:?}"),
    }
}

#[test]
fn test_plane_frame_length() {
    let pi_dq = DualQuaternion::plane(DVec3::Z, DVec3::new(0.0, 0.0, 1.0));
    let mut canvas = RecordingCanvas::new();
    let options = PlotOptions::plane().with_scale(4.0).with_frame_length(0.3);
    plot_object(&mut canvas, &pi_dq, &options).unwrap();

    let lengths: Vec<f64> = canvas
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Quiver { length, .. } => Some(*length),
            _ => None,
        })
        .collect();
    assert_eq!(lengths, vec![0.3; 3]);
}

#[test]
fn test_chain_links_with_linespec() {
    let robot = SerialManipulatorDh::kuka_lw4();
    let chain = ChainStyle::default().with_linespec("g:").unwrap();
    let options = PlotOptions::chain(vec![0.0; 7]).with_chain_style(chain);

    let mut canvas = RecordingCanvas::new();
    plot_object(&mut canvas, &robot, &options).unwrap();

    let links: Vec<&Style> = canvas
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Segment { style, .. } => Some(style),
            _ => None,
        })
        .collect();
    assert_eq!(links.len(), 8);
    for style in links {
        assert_eq!(style.color, colors::GREEN);
        assert_eq!(style.line_style, LineStyle::Dotted);
        assert!((style.line_width - 3.0).abs() < f32::EPSILON);
    }
}

#[test]
fn test_kuka_home_configuration() {
    let robot = SerialManipulatorDh::kuka_lw4();
    let drawing = render_chain(&robot, &[0.0; 7], &ChainStyle::default()).unwrap();

    let heights = [0.31, 0.31, 0.71, 0.71, 1.1, 1.1, 1.17];
    for (joint, height) in drawing.joints.iter().zip(heights) {
        assert_close(joint.frame.origin, DVec3::new(0.0, 0.0, height));
    }
    assert_close(drawing.end_effector.origin, DVec3::new(0.0, 0.0, 1.17));
    assert_close(drawing.reference.origin, DVec3::ZERO);
}

#[test]
fn test_kuka_scene_counts() {
    let robot = SerialManipulatorDh::kuka_lw4();
    let q = deg2rad(&[0.0, 45.0, 0.0, -90.0, 0.0, -45.0, 0.0]);

    let mut canvas = RecordingCanvas::new();
    let drawing = plot_object(&mut canvas, &robot, &PlotOptions::chain(q)).unwrap();
    let chain = drawing.as_chain().unwrap();

    assert_eq!(chain.joints.len(), 7);
    assert_eq!(chain.segments.len(), 8);
    assert_eq!(chain.num_frames(), 9);

    assert_eq!(canvas.num_surfaces(), 7);
    assert_eq!(canvas.num_points(), 9);
    assert_eq!(canvas.num_quivers(), 27);
    assert_eq!(canvas.num_segments(), 8);
    assert_eq!(canvas.num_labels(), 0);

    // Links form one connected path from the base to the flange.
    for pair in chain.segments.windows(2) {
        assert_close(pair[0][1], pair[1][0]);
    }
    assert_close(chain.segments[0][0], DVec3::ZERO);
    assert_close(chain.segments[7][1], chain.end_effector.origin);
}

#[test]
fn test_custom_chain() {
    /// Planar two-link arm with unit links, joints about z.
    struct Planar;

    impl KinematicChain for Planar {
        fn dim(&self) -> usize {
            2
        }

        fn reference_frame(&self) -> DualQuaternion {
            DualQuaternion::ONE
        }

        fn fkm_to(&self, q: &[f64], joint: usize) -> Result<DualQuaternion> {
            let link = |angle: f64| {
                DualQuaternion::from_rotation(DVec3::Z, angle)
                    * DualQuaternion::from_translation(DVec3::X)
            };
            Ok((0..=joint).fold(DualQuaternion::ONE, |x, i| x * link(q[i])))
        }

        fn fkm(&self, q: &[f64]) -> Result<DualQuaternion> {
            self.fkm_to(q, 1)
        }
    }

    let q = [FRAC_PI_2, -FRAC_PI_2];
    let mut canvas = RecordingCanvas::new();
    let drawing = plot(&mut canvas, Plottable::chain(&Planar, &q), &PlotOptions::new()).unwrap();

    let chain = drawing.as_chain().unwrap();
    assert_close(chain.joints[0].frame.origin, DVec3::new(0.0, 1.0, 0.0));
    assert_close(chain.joints[1].frame.origin, DVec3::new(1.0, 1.0, 0.0));
    assert_eq!(canvas.num_surfaces(), 2);
}

#[test]
fn test_unsupported_types() {
    let mut canvas = RecordingCanvas::new();
    let options = PlotOptions::new();

    let err = plot_object(&mut canvas, &"a string", &options).unwrap_err();
    assert!(matches!(err, DqPlotError::UnsupportedType(_)));

    let err = plot_object(&mut canvas, &42_i32, &options).unwrap_err();
    assert_eq!(err.to_string(), "plot not implemented for i32");

    assert!(canvas.is_empty());
}

#[test]
fn test_validation_errors_emit_nothing() {
    let mut canvas = RecordingCanvas::new();

    let not_unit = DualQuaternion::ONE * 2.0;
    let err = plot_object(&mut canvas, &not_unit, &PlotOptions::new()).unwrap_err();
    assert!(matches!(
        err,
        DqPlotError::Validation {
            expected: DqCategory::Unit,
            ..
        }
    ));

    let not_plane = demo_pose();
    let err = plot_object(&mut canvas, &not_plane, &PlotOptions::plane()).unwrap_err();
    assert!(matches!(
        err,
        DqPlotError::Validation {
            expected: DqCategory::Plane,
            ..
        }
    ));

    let robot = SerialManipulatorDh::kuka_lw4();
    let err = plot_object(&mut canvas, &robot, &PlotOptions::chain(vec![0.0; 6])).unwrap_err();
    assert!(matches!(
        err,
        DqPlotError::Dimension {
            expected: 7,
            actual: 6
        }
    ));

    assert!(canvas.is_empty());
}

#[test]
fn test_options_from_json() {
    let options = PlotOptions::from_json(r#"{ "mode": "Line", "scale": 0.25 }"#).unwrap();
    let mut canvas = RecordingCanvas::new();
    let drawing = plot_object(&mut canvas, &DualQuaternion::I, &options).unwrap();

    let segment = drawing.as_line().unwrap();
    assert_close(segment.start, DVec3::new(-0.25, 0.0, 0.0));
    assert_close(segment.end, DVec3::new(0.25, 0.0, 0.0));
}

#[test]
fn test_scene_json_export() {
    let mut canvas = RecordingCanvas::new();
    plot_object(&mut canvas, &demo_pose(), &PlotOptions::new()).unwrap();
    plot_object(
        &mut canvas,
        &SerialManipulatorDh::kuka_lw4(),
        &PlotOptions::chain(vec![0.0; 7]),
    )
    .unwrap();

    let path = std::env::temp_dir().join(format!("dqplot_scene_{}.json", std::process::id()));
    canvas.save_json(&path).unwrap();

    let restored = RecordingCanvas::from_json(&std::fs::read_to_string(&path).unwrap()).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(restored.len(), canvas.len());
    assert_eq!(restored.num_surfaces(), 7);
    assert_eq!(restored.num_quivers(), canvas.num_quivers());
}

#[test]
fn test_save_json_to_missing_directory() {
    let canvas = RecordingCanvas::new();
    let path = std::env::temp_dir()
        .join("dqplot_missing_dir_for_test")
        .join("nested")
        .join("scene.json");
    let err = canvas.save_json(&path).unwrap_err();
    assert!(matches!(err, DqPlotError::IoError(_)));
}

proptest! {
    #[test]
    fn prop_pose_quivers_are_orthonormal(
        ax in -1.0f64..1.0,
        ay in -1.0f64..1.0,
        az in 0.1f64..1.0,
        angle in -PI..PI,
        tx in -2.0f64..2.0,
        ty in -2.0f64..2.0,
        tz in -2.0f64..2.0,
    ) {
        let r = DualQuaternion::from_rotation(DVec3::new(ax, ay, az), angle);
        let x = DualQuaternion::from_pose(r, DVec3::new(tx, ty, tz));

        let mut canvas = RecordingCanvas::new();
        plot_object(&mut canvas, &x, &PlotOptions::new()).unwrap();

        let quivers: Vec<(DVec3, DVec3)> = canvas
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Quiver { origin, direction, .. } => Some((*origin, *direction)),
                _ => None,
            })
            .collect();
        for (origin, _) in &quivers {
            prop_assert!((*origin - DVec3::new(tx, ty, tz)).length() < 1e-9);
        }
        let directions: Vec<DVec3> = quivers.iter().map(|(_, d)| *d).collect();

        prop_assert_eq!(directions.len(), 3);
        for (i, a) in directions.iter().enumerate() {
            prop_assert!((a.length() - 1.0).abs() < 1e-9);
            for b in &directions[i + 1..] {
                prop_assert!(a.dot(*b).abs() < 1e-9);
            }
        }
        prop_assert!((directions[0].cross(directions[1]) - directions[2]).length() < 1e-9);
    }
}
