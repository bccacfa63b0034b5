//! Draws a pose, a line and a KUKA LWR4 arm into a recording canvas.
//!
//! The recorded scene is printed as JSON, or written to the path given as the
//! first argument.
//!
//! Run with: cargo run --example `plot_demo` -- scene.json

use std::f64::consts::FRAC_PI_3;

use dqplot::{
    cross, plot_object, DVec3, DualQuaternion, PlotOptions, RecordingCanvas, SerialManipulatorDh,
};

fn main() {
    dqplot::init_logging();

    let mut canvas = RecordingCanvas::new();

    // Pose: 60 degrees about x, then translated by 0.5j + 0.45k
    let r = DualQuaternion::from_rotation(DVec3::X, FRAC_PI_3);
    let x = DualQuaternion::from_pose(r, DVec3::new(0.0, 0.5, 0.45));
    plot_object(&mut canvas, &x, &PlotOptions::new().with_name("x"))
        .expect("failed to draw pose");

    // Line along k through 0.5i - 0.3j
    let l = DualQuaternion::K;
    let m = cross(&(DualQuaternion::I * 0.5 - DualQuaternion::J * 0.3), &l);
    let l_dq = l + DualQuaternion::E * m;
    plot_object(&mut canvas, &l_dq, &PlotOptions::line().with_scale(1.0).with_linespec("r"))
        .expect("failed to draw line");

    // Manipulator
    let q: Vec<f64> = [0.0_f64, 45.0, 0.0, -90.0, 0.0, -45.0, 0.0]
        .iter()
        .map(|d| d.to_radians())
        .collect();
    let robot = SerialManipulatorDh::kuka_lw4();
    let drawing = plot_object(&mut canvas, &robot, &PlotOptions::chain(q))
        .expect("failed to draw manipulator");

    if let Some(chain) = drawing.as_chain() {
        log::info!("end effector at {}", chain.end_effector.origin);
    }

    match std::env::args().nth(1) {
        Some(path) => canvas.save_json(&path).expect("failed to save scene"),
        None => println!("{}", canvas.to_json().expect("failed to serialize scene")),
    }
}
