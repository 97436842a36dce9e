use std::cmp::Ordering;

use super::types::{Vertex2, VertexIdx};

/// Sorts vertex indices by descending x, ties by descending y, then by descending index.
///
/// The sweep pops from the back, so vertices are visited left to right in `(x, y, idx)` order.
pub fn sort_for_sweep(vertices: &[Vertex2], indices_to_add: &[VertexIdx]) -> Vec<VertexIdx> {
    let mut sweep_order = indices_to_add.to_vec();

    sweep_order.sort_unstable_by(|&i, &j| {
        let (vi, vj) = (vertices[i], vertices[j]);
        cmp_coord(vj[0], vi[0])
            .then_with(|| cmp_coord(vj[1], vi[1]))
            .then_with(|| j.cmp(&i))
    });

    sweep_order
}

// Input coordinates are finite, so `partial_cmp` is total here; `-0.0` and `0.0` tie.
fn cmp_coord(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_left_to_right() {
        let vertices = [[2.0, 0.0], [0.0, 1.0], [1.0, 5.0], [0.0, -1.0]];
        let mut order = sort_for_sweep(&vertices, &[0, 1, 2, 3]);

        let mut visited = Vec::new();
        while let Some(idx) = order.pop() {
            visited.push(idx);
        }

        assert_eq!(visited, vec![3, 1, 2, 0]);
    }

    #[test]
    fn ties_fall_back_to_index() {
        let vertices = [[1.0, 1.0], [1.0, 1.0], [-0.0, 1.0], [0.0, 1.0]];
        let order = sort_for_sweep(&vertices, &[0, 1, 2, 3]);

        assert_eq!(order, vec![1, 0, 3, 2]);
    }
}
