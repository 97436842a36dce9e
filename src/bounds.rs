//! Axis-aligned extent of a vertex set and the super triangle derived from it.

use crate::utils::types::{Triangle2, Vertex2};

/// The axis-aligned bounding box of a vertex set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Vertex2,
    pub max: Vertex2,
}

impl BoundingBox {
    /// Finds the minimum and maximum x and y values of the vertices in one pass.
    ///
    /// Returns `None` for an empty vertex set.
    pub fn from_vertices(vertices: &[Vertex2]) -> Option<Self> {
        let first = *vertices.first()?;
        let mut v_min = first;
        let mut v_max = first;

        for vertex in vertices {
            if v_min[0] > vertex[0] {
                v_min[0] = vertex[0];
            }
            if v_min[1] > vertex[1] {
                v_min[1] = vertex[1];
            }
            if v_max[0] < vertex[0] {
                v_max[0] = vertex[0];
            }
            if v_max[1] < vertex[1] {
                v_max[1] = vertex[1];
            }
        }

        Some(Self {
            min: v_min,
            max: v_max,
        })
    }

    pub fn width(&self) -> f64 {
        self.max[0] - self.min[0]
    }

    pub fn height(&self) -> f64 {
        self.max[1] - self.min[1]
    }

    /// The larger of width and height.
    pub fn max_side(&self) -> f64 {
        self.width().max(self.height())
    }

    pub fn center(&self) -> Vertex2 {
        [
            self.min[0] + self.width() * 0.5,
            self.min[1] + self.height() * 0.5,
        ]
    }

    /// The super triangle enclosing this box.
    ///
    /// With `d` the larger side and `c` the center, the corners are
    /// `(cx - m·d, cy - d)`, `(cx, cy + m·d)` and `(cx + m·d, cy - d)` for the margin `m`.
    pub fn super_triangle(&self, margin: f64) -> Triangle2 {
        let d = self.max_side();
        let [cx, cy] = self.center();

        [
            [cx - margin * d, cy - d],
            [cx, cy + margin * d],
            [cx + margin * d, cy - d],
        ]
    }
}
