//! Generated clouds are consistent with the algebra they were built from.

use rekha::synthetic::CORNER_POINTS;
use rekha::{
    corner_cloud, line_cloud, Line2D, LineSamplerConfig, NoiseGenerator, Point2D, RekhaConfig,
    RigidTransform2D,
};

#[test]
fn noise_free_lines_are_exact() {
    env_logger::try_init().ok();

    let mut noise = NoiseGenerator::new(2024);
    let config = LineSamplerConfig {
        samples: 50,
        noise_sigma: 0.0,
    };
    for _ in 0..100 {
        let sampled = line_cloud(&config, &mut noise).unwrap();
        assert_eq!(sampled.cloud.len(), 50);
        let worst = sampled.cloud.max_distance_to_line(&sampled.line).unwrap();
        assert!(worst < 1e-9, "worst = {}", worst);
    }
}

#[test]
fn noisy_line_residuals_track_sigma() {
    let sigma = 0.01;
    let config = LineSamplerConfig {
        samples: 2000,
        noise_sigma: sigma,
    };
    let sampled = line_cloud(&config, &mut NoiseGenerator::new(99)).unwrap();

    let n = sampled.cloud.len() as f64;
    let mean_sq = sampled
        .cloud
        .iter()
        .map(|p| sampled.line.signed_distance(p).powi(2))
        .sum::<f64>()
        / n;

    // Isotropic noise projects onto the normal with the same sigma
    let rms = mean_sq.sqrt();
    assert!((rms - sigma).abs() < 0.002, "rms = {}", rms);
}

#[test]
fn config_drives_generators() {
    let config = RekhaConfig::from_yaml(
        r#"
synthetic:
  seed: 17
  noise_sigma: 0.0
  line_samples: 12
"#,
    )
    .unwrap();

    let a = line_cloud(&config.line_sampler_config(), &mut config.noise_generator()).unwrap();
    let b = line_cloud(&config.line_sampler_config(), &mut config.noise_generator()).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.cloud.len(), 12);
}

#[test]
fn transformed_corner_keeps_its_shape() {
    let cloud = corner_cloud(0.0, &mut NoiseGenerator::new(1));
    let t = RigidTransform2D::from_angle_translation(-37.0, Point2D::new(2.0, 5.0));
    let moved = cloud.transform(&t);

    let wall = Line2D::from_two_points(CORNER_POINTS[0], CORNER_POINTS[4])
        .unwrap()
        .transformed(&t)
        .unwrap();
    for p in moved.iter().take(5) {
        assert!(wall.distance_to_point(p) < 1e-9);
    }

    // Pairwise distances survive the transform
    for (i, j) in [(0, 5), (1, 4), (2, 5)] {
        let before = cloud.point_at(i).unwrap().distance(&cloud.point_at(j).unwrap());
        let after = moved.point_at(i).unwrap().distance(&moved.point_at(j).unwrap());
        assert!((before - after).abs() < 1e-9);
    }
}
