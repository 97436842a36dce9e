// Type aliases for data values.
pub type Vertex2 = [f64; 2];
pub type Triangle2 = [Vertex2; 3];

// Type aliases for data indices.
pub type VertexIdx = usize;

/// An undirected edge, as the two indices of its end vertices in the working vertex list.
pub type Edge = [VertexIdx; 2];

/// A triangle, as three indices into the input vertex list.
pub type TriangleIdxs = [VertexIdx; 3];
