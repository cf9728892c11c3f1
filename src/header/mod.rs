//! Serialization of the coding tree in its two wire formats
//!
//! The tree travels in one of two mutually independent representations:
//!
//! - [`text`]: line-oriented (symbol, code) pairs, readable by eye.
//!   Termination is external: the reader consumes pairs until the record
//!   set runs out.
//! - [`packed`]: a preorder bit stream where structure is the framing.
//!   Termination is internal: the reader stops the moment the tree becomes
//!   full, with no length prefix or end marker.
//!
//! Both readers rebuild the tree through a private scaffold that grows one
//! child slot at a time and only becomes an immutable [`CodeTree`] once
//! every slot is filled.

pub mod packed;
pub mod text;

use crate::error::{HuffwireError, Result};
use crate::tree::{CodeTree, Node, NodeId, Symbol};

/// Which child slot of a scaffold node a step refers to
///
/// Left corresponds to a `1` bit, right to a `0` bit, everywhere in the
/// crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Leaf(Symbol),
    Node(usize),
}

#[derive(Debug, Default)]
struct ScaffoldNode {
    left: Option<Slot>,
    right: Option<Slot>,
}

/// A tree under reconstruction
///
/// Nodes live in an arena addressed by plain indices. Readers that need to
/// walk back up after completing a subtree keep an explicit stack of
/// ancestor indices, pushed on descent and popped on ascent; no parent
/// reference is ever stored on a node, so the finished tree is strictly
/// parent-owns-child.
#[derive(Debug)]
pub(crate) struct Scaffold {
    nodes: Vec<ScaffoldNode>,
}

impl Scaffold {
    /// Index of the synthetic root every reconstruction starts from
    pub(crate) const ROOT: usize = 0;

    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![ScaffoldNode::default()],
        }
    }

    fn slot(&self, node: usize, side: Side) -> Option<Slot> {
        match side {
            Side::Left => self.nodes[node].left,
            Side::Right => self.nodes[node].right,
        }
    }

    fn set_slot(&mut self, node: usize, side: Side, value: Slot) {
        match side {
            Side::Left => self.nodes[node].left = Some(value),
            Side::Right => self.nodes[node].right = Some(value),
        }
    }

    /// First unfilled child slot of `node`, left before right
    pub(crate) fn open_side(&self, node: usize) -> Option<Side> {
        if self.nodes[node].left.is_none() {
            Some(Side::Left)
        } else if self.nodes[node].right.is_none() {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Create an internal child in the first open slot and return its index
    pub(crate) fn grow_internal(&mut self, node: usize) -> Result<usize> {
        let side = self.open_side(node).ok_or_else(|| {
            HuffwireError::malformed_header("structural bit for a node that is already full")
        })?;
        let child = self.nodes.len();
        self.nodes.push(ScaffoldNode::default());
        self.set_slot(node, side, Slot::Node(child));
        Ok(child)
    }

    /// Place a leaf in the first open slot and return the side used
    pub(crate) fn grow_leaf(&mut self, node: usize, symbol: Symbol) -> Result<Side> {
        let side = self.open_side(node).ok_or_else(|| {
            HuffwireError::malformed_header("leaf bit for a node that is already full")
        })?;
        self.set_slot(node, side, Slot::Leaf(symbol));
        Ok(side)
    }

    /// Follow one non-terminal step of a code, creating the internal child
    /// if it does not exist yet
    pub(crate) fn descend(&mut self, node: usize, side: Side) -> Result<usize> {
        match self.slot(node, side) {
            None => {
                let child = self.nodes.len();
                self.nodes.push(ScaffoldNode::default());
                self.set_slot(node, side, Slot::Node(child));
                Ok(child)
            }
            Some(Slot::Node(child)) => Ok(child),
            Some(Slot::Leaf(_)) => Err(HuffwireError::malformed_header(
                "code passes through an existing leaf",
            )),
        }
    }

    /// Terminal step of a code: the slot must still be open
    pub(crate) fn place_leaf(&mut self, node: usize, side: Side, symbol: Symbol) -> Result<()> {
        match self.slot(node, side) {
            None => {
                self.set_slot(node, side, Slot::Leaf(symbol));
                Ok(())
            }
            Some(_) => Err(HuffwireError::malformed_header(format!(
                "code for symbol {} collides with an earlier entry",
                symbol
            ))),
        }
    }

    /// Convert into an immutable tree; fails if any slot is still open
    pub(crate) fn into_tree(self) -> Result<CodeTree> {
        let mut nodes = Vec::with_capacity(2 * self.nodes.len());
        let root = self.convert(Self::ROOT, &mut nodes)?;
        Ok(CodeTree::from_parts(nodes, root))
    }

    fn convert(&self, index: usize, out: &mut Vec<Node>) -> Result<NodeId> {
        let left = self.convert_child(index, Side::Left, out)?;
        let right = self.convert_child(index, Side::Right, out)?;
        out.push(Node::Internal { left, right });
        Ok(NodeId::new(out.len() - 1))
    }

    fn convert_child(&self, index: usize, side: Side, out: &mut Vec<Node>) -> Result<NodeId> {
        match self.slot(index, side) {
            Some(Slot::Leaf(symbol)) => {
                out.push(Node::Leaf { symbol });
                Ok(NodeId::new(out.len() - 1))
            }
            Some(Slot::Node(child)) => self.convert(child, out),
            None => Err(HuffwireError::malformed_header(
                "header describes an incomplete tree",
            )),
        }
    }
}
