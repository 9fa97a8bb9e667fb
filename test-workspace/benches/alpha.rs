//! Vector math workload.

use std::hint::black_box;
use sweep_fixture::{pairwise_dot, Vec3};

fn main() {
    // Invoked with `--bench` by the profiler; no other arguments are expected
    let points: Vec<Vec3> = (0..512)
        .map(|i| {
            let f = i as f32;
            Vec3::new(f.sin(), f.cos(), f * 0.01)
        })
        .collect();

    let mut acc = 0.0;
    for _ in 0..200 {
        acc += pairwise_dot(black_box(&points));
    }
    println!("alpha: {acc}");
}
