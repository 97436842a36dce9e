//! utils for tessel tests
#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::all, clippy::missing_const_for_fn)]

use rand::{distr::Uniform, prelude::Distribution};
use rand_distr::Normal;
use std::ops::RangeInclusive;

pub type Vertex2 = [f64; 2];

/// Samples `n` vertices in 2D space from the [Uniform] distribution.
///
/// If no range is specified, the unit-square centered around the origin is used, `[-0.5, 0.5]`.
pub fn sample_vertices_2d(n: usize, range: Option<RangeInclusive<f64>>) -> Vec<Vertex2> {
    let mut rng = rand::rng();
    let range = range.unwrap_or(-0.5..=0.5);
    let uniform = Uniform::try_from(range).expect("Expected range with a greater start then end");

    let mut vertices: Vec<Vertex2> = Vec::with_capacity(n);
    for _ in 0..n {
        let x = uniform.sample(&mut rng);
        let y = uniform.sample(&mut rng);
        vertices.push([x, y]);
    }

    vertices
}

/// Samples `n` vertices in 2D space around `center` from a [Normal] distribution per axis.
///
/// The default standard deviation is `σ = 0.1`.
pub fn sample_clustered_vertices_2d(n: usize, center: Vertex2, std_dev: Option<f64>) -> Vec<Vertex2> {
    let mut rng = rand::rng();
    let std_dev = std_dev.unwrap_or(0.1);
    let normal_x = Normal::new(center[0], std_dev).unwrap();
    let normal_y = Normal::new(center[1], std_dev).unwrap();

    let mut vertices: Vec<Vertex2> = Vec::with_capacity(n);
    for _ in 0..n {
        vertices.push([normal_x.sample(&mut rng), normal_y.sample(&mut rng)]);
    }

    vertices
}
