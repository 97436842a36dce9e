use std::cmp;

use geogram_predicates as gp;

use super::types::{TriangleIdxs, Vertex2};

/// Reorders a triangle counter-clockwise.
///
/// Returns `None` if its three vertices are exactly collinear.
pub fn ccw_order(tri: TriangleIdxs, vertices: &[Vertex2]) -> Option<TriangleIdxs> {
    let [i, j, k] = tri;
    let sign = gp::orient_2d(&vertices[i], &vertices[j], &vertices[k]);

    match sign.cmp(&0) {
        cmp::Ordering::Greater => Some([i, j, k]),
        cmp::Ordering::Less => Some([i, k, j]),
        cmp::Ordering::Equal => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flips_clockwise_triangles() {
        let vertices = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [2.0, 0.0]];

        assert_eq!(ccw_order([0, 1, 2], &vertices), Some([0, 1, 2]));
        assert_eq!(ccw_order([0, 2, 1], &vertices), Some([0, 1, 2]));
        assert_eq!(ccw_order([0, 1, 3], &vertices), None);
    }
}
