#![no_main]

use libfuzzer_sys::fuzz_target;
use tessel::{Config, Triangulation};

fuzz_target!(|data: (Vec<[f64; 2]>, Config)| {
    let (vertices, config) = data;

    // keep the quadratic verification cheap
    let config = config.with_max_vertices(config.max_vertices.min(200));

    if vertices.iter().flatten().any(|c| !c.is_finite()) {
        return;
    }

    let mut triangulation = Triangulation::new(Some(config));
    if triangulation.triangulate(&vertices).is_ok() {
        assert!(triangulation
            .triangle_indices()
            .iter()
            .all(|&idx| idx < vertices.len()));
        let _ = triangulation.is_delaunay();
    }

    drop(triangulation);
});
