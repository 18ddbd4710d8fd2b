//! Project the markers of a landmark config into a camera image.
//!
//! Usage: `cargo run --example project_landmarks -- [config.json]`
//! Without an argument a small built-in layout is used.

use landmark_projection_core::test_utils::{camera_at, marker_points, sample_intrinsics};
use landmark_projection_core::{Landmark, Pose, ProjectionConfig};
use nalgebra::Vector3;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => ProjectionConfig::load_json(path)?,
        None => ProjectionConfig {
            intrinsics: sample_intrinsics(),
            landmarks: vec![
                Landmark::new(
                    1,
                    Pose::new(Vector3::new(0.0, 0.0, 2.6), Vector3::zeros()),
                    marker_points(),
                ),
                Landmark::new(
                    2,
                    Pose::new(Vector3::new(1.2, 0.4, 2.6), Vector3::new(0.0, 0.0, 0.8)),
                    marker_points(),
                ),
            ],
        },
    };

    let map = config.landmark_map()?;
    let camera = camera_at(0.5, 0.1, 0.2, 0.3);

    for (id, points) in map.project_all(&camera, &config.intrinsics) {
        println!("landmark {id}:");
        for (i, uv) in points.iter().enumerate() {
            match uv {
                Some(uv) => println!("  point {i}: ({:.5}, {:.5})", uv.x, uv.y),
                None => println!("  point {i}: zero depth"),
            }
        }
    }
    Ok(())
}
