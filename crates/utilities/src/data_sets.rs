use point_octree_core::prelude::*;

use rand::{rngs::StdRng, Rng, SeedableRng};

/// `n` points drawn uniformly from the box `[-10, 10)^3`. The same `seed` always gives the same cloud.
pub fn random_point_cloud(n: usize, seed: u64) -> Vec<Point3f> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..n)
        .map(|_| {
            let mut coordinate = || rng.gen_range(-10.0f32..10.0);

            PointN([coordinate(), coordinate(), coordinate()])
        })
        .collect()
}

/// `n` points on the unit sphere centered at the origin, scattered with a seeded RNG. Scale and translate them to get
/// clouds of other shapes.
pub fn sphere_shell_point_cloud(n: usize, seed: u64) -> Vec<Point3f> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..n)
        .map(|_| {
            // Uniform on the sphere: uniform height and uniform angle around the vertical axis.
            let z: f32 = rng.gen_range(-1.0..1.0);
            let theta: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
            let r = (1.0 - z * z).sqrt();

            PointN([r * theta.cos(), r * theta.sin(), z])
        })
        .collect()
}
