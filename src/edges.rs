//! Cavity boundary extraction.

use crate::utils::types::Edge;

/// Removes every pair of equal edges from `edges`, regardless of direction.
///
/// The edges are those of the triangles broken by one vertex. An edge shared by two of them is
/// inside the cavity and cancels out; what remains is the cavity boundary, in its original order
/// and orientation.
///
/// Walks from the back so removals never shift an edge that is still to be visited.
pub fn cancel_shared_edges(edges: &mut Vec<Edge>) {
    let mut j = edges.len();

    while j > 0 {
        j -= 1;
        let [a, b] = edges[j];

        let twin = (0..j).rev().find(|&i| {
            let [m, n] = edges[i];
            (a == m && b == n) || (a == n && b == m)
        });

        if let Some(i) = twin {
            edges.remove(j);
            edges.remove(i);
            // `i < j`, so one more of the unvisited edges is gone
            j -= 1;
        }
    }
}
