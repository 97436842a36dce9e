use crate::utils::types::VertexIdx;
use core::fmt;

/// A vertex of the working vertex list.
///
/// An `input node` has an index into the caller's vertex list.
///
/// A `synthetic node` is one of the three corners of the super triangle, appended after the input.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum VertexNode {
    Input(VertexIdx),
    Synthetic(usize),
}

impl VertexNode {
    /// Classify a working-list index, for an input of `num_input` vertices.
    pub const fn from_idx(idx: VertexIdx, num_input: usize) -> Self {
        if idx < num_input {
            VertexNode::Input(idx)
        } else {
            VertexNode::Synthetic(idx - num_input)
        }
    }

    /// Get the index of the node into the input.
    pub const fn idx(&self) -> Option<VertexIdx> {
        match self {
            VertexNode::Input(idx) => Some(*idx),
            VertexNode::Synthetic(_) => None,
        }
    }

    /// Check if the node is a super triangle corner.
    pub const fn is_synthetic(&self) -> bool {
        matches!(self, VertexNode::Synthetic(_))
    }
}

impl fmt::Display for VertexNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexNode::Input(v_idx) => write!(f, "Input({})", v_idx),
            VertexNode::Synthetic(corner) => write!(f, "Synthetic({})", corner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_working_indices() {
        assert_eq!(VertexNode::from_idx(2, 4), VertexNode::Input(2));
        assert_eq!(VertexNode::from_idx(4, 4), VertexNode::Synthetic(0));
        assert_eq!(VertexNode::from_idx(6, 4), VertexNode::Synthetic(2));

        assert_eq!(VertexNode::Input(3).idx(), Some(3));
        assert!(VertexNode::Synthetic(1).is_synthetic());
        assert_eq!(VertexNode::Synthetic(1).to_string(), "Synthetic(1)");
    }
}
