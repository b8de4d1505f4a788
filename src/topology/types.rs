//! Generator state type definitions.
//!
//! This file contains the parent context handed from one level of the
//! recursive walk to the next.

use crate::tapi::NodeIndex;

/// Node(s) one level above the instances currently being created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parents {
    /// Generation entered at this level; nothing above it exists
    Root,
    /// A single parent node
    Node(NodeIndex),
    /// The control-plane and user-plane halves of one O-CU
    CuPair { cp: NodeIndex, up: NodeIndex },
}

impl Parents {
    /// The node recorded as parent of new instances.
    ///
    /// For the CU pair this is the control plane, which also supplies the
    /// local-id prefix.
    pub fn primary(&self) -> Option<NodeIndex> {
        match self {
            Parents::Root => None,
            Parents::Node(node) => Some(*node),
            Parents::CuPair { cp, .. } => Some(*cp),
        }
    }

    /// Starting points for resolving link ends, one per plane.
    ///
    /// Links towards ancestors are created once per anchor, which is how
    /// nodes below an O-CU get separate links for each plane.
    pub fn anchors(&self) -> Vec<NodeIndex> {
        match self {
            Parents::Root => Vec::new(),
            Parents::Node(node) => vec![*node],
            Parents::CuPair { cp, up } => vec![*cp, *up],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cu_pair_primary_is_control_plane() {
        let pair = Parents::CuPair {
            cp: NodeIndex(4),
            up: NodeIndex(5),
        };
        assert_eq!(pair.primary(), Some(NodeIndex(4)));
        assert_eq!(pair.anchors(), vec![NodeIndex(4), NodeIndex(5)]);
    }

    #[test]
    fn test_root_has_no_anchors() {
        assert_eq!(Parents::Root.primary(), None);
        assert!(Parents::Root.anchors().is_empty());
        assert_eq!(Parents::Node(NodeIndex(1)).anchors(), vec![NodeIndex(1)]);
    }
}
