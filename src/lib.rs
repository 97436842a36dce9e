//! # Tessel
//!
//! Delaunay triangulation of planar point sets via an incremental left-to-right sweep.
//!
//! The vertices are enclosed in a super triangle and inserted in order of ascending x. Every
//! candidate triangle whose circumcircle contains the new vertex is broken up, and the cavity is
//! re-triangulated from its boundary edges. Candidates whose circumcircle lies entirely left of the
//! sweep are locked early.
//!
//! ```
//! let vertices = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
//! let triangles = tessel::triangulate(&vertices).unwrap();
//!
//! assert_eq!(triangles.len(), 2 * 3);
//! ```
#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::missing_const_for_fn)]

pub use circumcircle::Circumcircle;
pub use config::Config;
pub use error::TriangulationError;
pub use node::VertexNode;
pub use tessellation::{Frame, Tessellation, ViewBox};
pub use triangulation::{triangulate, Triangulation};

pub mod bounds;
pub mod circumcircle;
pub mod config;
pub mod edges;
pub mod error;
pub mod node;
pub mod tessellation;
pub mod triangulation;
mod utils;

pub use utils::types::{Edge, Triangle2, TriangleIdxs, Vertex2, VertexIdx};
