//! Circumscribed circles of candidate triangles.

use core::fmt;

use nalgebra::Vector2;

use crate::{
    error::TriangulationError,
    utils::types::{Edge, Vertex2, VertexIdx},
};

/// A triangle of the working vertex list together with its circumcircle.
///
/// The circle is computed once on creation and never changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circumcircle {
    pub i: VertexIdx,
    pub j: VertexIdx,
    pub k: VertexIdx,
    pub center: Vertex2,
    /// The squared radius, compare it against squared distances only.
    pub radius_sq: f64,
}

/// Where a triangle stands with respect to the vertex currently swept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateStatus {
    /// The vertex lies right of the circle, no later vertex can reach it.
    Final,
    /// The vertex lies outside the circle by more than epsilon.
    Outside,
    /// The vertex lies on or inside the circle, the triangle has to be broken up.
    Broken,
}

impl Circumcircle {
    /// Computes the circumcircle of the triangle `(i, j, k)` by intersecting the
    /// perpendicular bisectors of the edges `ij` and `jk`.
    ///
    /// A bisector of an edge whose end points differ by less than `epsilon` in y is vertical,
    /// its slope is not used then.
    ///
    /// Fails with [`TriangulationError::DegenerateTriangle`] if both edges are near-horizontal.
    pub fn new(
        vertices: &[Vertex2],
        i: VertexIdx,
        j: VertexIdx,
        k: VertexIdx,
        epsilon: f64,
    ) -> Result<Self, TriangulationError> {
        let [x_i, y_i] = vertices[i];
        let [x_j, y_j] = vertices[j];
        let [x_k, y_k] = vertices[k];

        let y_diff_ij = (y_i - y_j).abs();
        let y_diff_jk = (y_j - y_k).abs();

        if y_diff_ij < epsilon && y_diff_jk < epsilon {
            return Err(TriangulationError::DegenerateTriangle {
                vertices: [i, j, k],
            });
        }

        // slopes of the two bisectors
        let m_ij = || -((x_j - x_i) / (y_j - y_i));
        let m_jk = || -((x_k - x_j) / (y_k - y_j));

        let mid_ij = [(x_i + x_j) / 2.0, (y_i + y_j) / 2.0];
        let mid_jk = [(x_j + x_k) / 2.0, (y_j + y_k) / 2.0];

        let x_center = if y_diff_ij < epsilon {
            mid_ij[0]
        } else if y_diff_jk < epsilon {
            mid_jk[0]
        } else {
            let (m1, m2) = (m_ij(), m_jk());
            (m1 * mid_ij[0] - m2 * mid_jk[0] + mid_jk[1] - mid_ij[1]) / (m1 - m2)
        };

        // evaluate the steeper-edged bisector, its slope is finite
        let y_center = if y_diff_ij > y_diff_jk {
            m_ij() * (x_center - mid_ij[0]) + mid_ij[1]
        } else {
            m_jk() * (x_center - mid_jk[0]) + mid_jk[1]
        };

        let center = [x_center, y_center];
        let radius_sq = (Vector2::from(vertices[j]) - Vector2::from(center)).norm_squared();

        Ok(Self {
            i,
            j,
            k,
            center,
            radius_sq,
        })
    }

    /// Test the triangle against a vertex of a left-to-right sweep.
    pub fn status(&self, v: Vertex2, epsilon: f64) -> CandidateStatus {
        let dx = v[0] - self.center[0];

        if dx > 0.0 && dx * dx > self.radius_sq {
            return CandidateStatus::Final;
        }

        let dy = v[1] - self.center[1];

        if dx * dx + dy * dy - self.radius_sq > epsilon {
            CandidateStatus::Outside
        } else {
            CandidateStatus::Broken
        }
    }

    /// Check if `v` lies strictly inside the circle by more than `epsilon`.
    pub fn contains(&self, v: Vertex2, epsilon: f64) -> bool {
        let dist_sq = (Vector2::from(v) - Vector2::from(self.center)).norm_squared();
        self.radius_sq - dist_sq > epsilon
    }

    pub const fn nodes(&self) -> [VertexIdx; 3] {
        [self.i, self.j, self.k]
    }

    /// The edges `ij`, `jk` and `ki`.
    pub const fn edges(&self) -> [Edge; 3] {
        [[self.i, self.j], [self.j, self.k], [self.k, self.i]]
    }

    /// Check if all three vertices are below `num_input`, i.e. none is a super triangle corner.
    pub const fn is_input(&self, num_input: usize) -> bool {
        self.i < num_input && self.j < num_input && self.k < num_input
    }
}

impl fmt::Display for Circumcircle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Triangle({}, {}, {}) center [{:.4}, {:.4}] r² {:.4}",
            self.i, self.j, self.k, self.center[0], self.center[1], self.radius_sq
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_EPSILON;
    use approx::assert_relative_eq;

    #[test]
    fn circle_of_right_triangle() {
        let vertices = [[0.0, 0.0], [4.0, 0.0], [0.0, 3.0]];
        let circle = Circumcircle::new(&vertices, 0, 1, 2, DEFAULT_EPSILON).unwrap();

        // hypotenuse midpoint
        assert_relative_eq!(circle.center[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(circle.center[1], 1.5, epsilon = 1e-12);
        assert_relative_eq!(circle.radius_sq, 6.25, epsilon = 1e-12);
        assert_eq!(circle.nodes(), [0, 1, 2]);
    }

    #[test]
    fn circle_of_general_triangle() {
        let vertices = [[1.0, 2.0], [5.0, -1.0], [3.0, 7.0]];
        let circle = Circumcircle::new(&vertices, 0, 1, 2, DEFAULT_EPSILON).unwrap();

        for v in vertices {
            let dist_sq = (v[0] - circle.center[0]).powi(2) + (v[1] - circle.center[1]).powi(2);
            assert_relative_eq!(dist_sq, circle.radius_sq, max_relative = 1e-12);
        }
    }

    #[test]
    fn horizontal_second_edge_uses_its_midpoint() {
        let vertices = [[0.0, 2.0], [-1.0, 0.0], [1.0, 0.0]];
        let circle = Circumcircle::new(&vertices, 0, 1, 2, DEFAULT_EPSILON).unwrap();

        assert_eq!(circle.center[0], 0.0);
        assert_relative_eq!(circle.center[1], 0.75, epsilon = 1e-12);
        assert_relative_eq!(circle.radius_sq, 1.5625, epsilon = 1e-12);
    }

    #[test]
    fn horizontal_first_edge_uses_its_midpoint() {
        let vertices = [[-1.0, 0.0], [1.0, 0.0], [0.0, 2.0]];
        let circle = Circumcircle::new(&vertices, 0, 1, 2, DEFAULT_EPSILON).unwrap();

        assert_eq!(circle.center[0], 0.0);
        assert_relative_eq!(circle.center[1], 0.75, epsilon = 1e-12);
    }

    #[test]
    fn y_aligned_vertices_fail() {
        let vertices = [[0.0, 0.0], [1.0, 0.0], [2.0, 1e-7]];
        let result = Circumcircle::new(&vertices, 0, 1, 2, DEFAULT_EPSILON);

        assert_eq!(
            result,
            Err(TriangulationError::DegenerateTriangle {
                vertices: [0, 1, 2]
            })
        );
    }

    #[test]
    fn status_against_sweep_vertex() {
        let vertices = [[-1.0, 0.0], [0.0, 1.0], [1.0, 0.0]];
        let circle = Circumcircle::new(&vertices, 0, 1, 2, DEFAULT_EPSILON).unwrap();

        assert_eq!(circle.status([1.5, 0.0], DEFAULT_EPSILON), CandidateStatus::Final);
        assert_eq!(circle.status([0.9, 0.9], DEFAULT_EPSILON), CandidateStatus::Outside);
        assert_eq!(circle.status([0.0, 0.5], DEFAULT_EPSILON), CandidateStatus::Broken);
        // on the circle counts as inside
        assert_eq!(circle.status([0.0, -1.0], DEFAULT_EPSILON), CandidateStatus::Broken);
        // left of the circle is never final
        assert_eq!(circle.status([-1.5, 0.0], DEFAULT_EPSILON), CandidateStatus::Outside);

        assert!(circle.contains([0.0, 0.5], DEFAULT_EPSILON));
        assert!(!circle.contains([0.0, -1.0], DEFAULT_EPSILON));
    }

    #[test]
    fn edges_and_input_check() {
        let vertices = [[0.0, 0.0], [4.0, 0.0], [0.0, 3.0], [9.0, 9.0]];
        let circle = Circumcircle::new(&vertices, 3, 1, 2, DEFAULT_EPSILON).unwrap();

        assert_eq!(circle.edges(), [[3, 1], [1, 2], [2, 3]]);
        assert!(circle.is_input(4));
        assert!(!circle.is_input(3));
    }
}
