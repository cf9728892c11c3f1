//! Bit-packed binary header format
//!
//! Preorder bit stream: `1` opens an internal node, `0` announces a leaf
//! followed by its symbol as a fixed-width 9-bit integer, least-significant
//! bit first (the alphabet tops out at 256, which needs the ninth bit).
//! The stream opens with a single marker bit that carries no information of
//! its own; the reader discards it and rebuilds from the structural bits
//! that follow. There is no count or terminator: a full binary tree is done
//! exactly when its last right slot fills, and the reader stops there.

use crate::error::{HuffwireError, Result};
use crate::header::{Scaffold, Side};
use crate::io::{BitRead, BitWrite, SliceBitReader, VecBitWriter};
use crate::tree::{CodeTree, Node, NodeId, Symbol, EOF_SYMBOL};

/// Number of bits in a serialized symbol
const SYMBOL_BITS: u32 = 9;

/// Serialize a tree into a bit sink
///
/// The root's structural bit doubles as the format's leading marker.
pub fn serialize<W: BitWrite>(tree: &CodeTree, out: &mut W) {
    write_node(tree, tree.root(), out);
}

/// Serialize a tree into freshly packed bytes, final byte zero-padded
pub fn serialize_to_vec(tree: &CodeTree) -> Vec<u8> {
    let mut writer = VecBitWriter::new();
    serialize(tree, &mut writer);
    writer.into_bytes()
}

fn write_node<W: BitWrite>(tree: &CodeTree, id: NodeId, out: &mut W) {
    match tree.node(id) {
        Node::Internal { left, right } => {
            out.write_bit(true);
            write_node(tree, *left, out);
            write_node(tree, *right, out);
        }
        Node::Leaf { symbol } => {
            out.write_bit(false);
            out.write_bits_lsb(u32::from(*symbol), SYMBOL_BITS);
        }
    }
}

/// Reconstruct a tree from a bit source
///
/// The reconstruction is iterative: one structural bit at a time, with an
/// explicit stack of ancestor indices instead of parent pointers. After a
/// leaf fills a node's right slot the reader walks back up to the nearest
/// ancestor with an open slot; when that walk falls off the root, the tree
/// is full and the stream ends structurally.
pub fn deserialize<R: BitRead>(input: &mut R) -> Result<CodeTree> {
    // fixed one-bit preamble, consumed without interpretation
    input.read_bit().ok_or_else(|| {
        HuffwireError::malformed_header("bit source exhausted before the header marker")
    })?;

    let mut scaffold = Scaffold::new();
    let mut current = Scaffold::ROOT;
    let mut ancestors: Vec<usize> = Vec::new();

    loop {
        let bit = input.read_bit().ok_or_else(|| {
            HuffwireError::malformed_header("bit source exhausted before the tree was complete")
        })?;

        if bit {
            let child = scaffold.grow_internal(current)?;
            ancestors.push(current);
            current = child;
        } else {
            let symbol = input.read_bits_lsb(SYMBOL_BITS).ok_or_else(|| {
                HuffwireError::malformed_header("bit source exhausted inside a symbol")
            })? as Symbol;
            if symbol > EOF_SYMBOL {
                return Err(HuffwireError::malformed_header(format!(
                    "symbol {} is outside the coding alphabet",
                    symbol
                )));
            }

            if scaffold.grow_leaf(current, symbol)? == Side::Right {
                // walk back to the nearest ancestor that is not yet full
                loop {
                    match ancestors.pop() {
                        Some(up) if scaffold.open_side(up).is_some() => {
                            current = up;
                            break;
                        }
                        Some(_) => continue,
                        None => {
                            log::trace!("bit-packed header decoded");
                            return scaffold.into_tree();
                        }
                    }
                }
            }
        }
    }
}

/// Reconstruct a tree from packed bytes
///
/// Trailing padding bits after the structural end of the tree are ignored.
pub fn deserialize_from_slice(data: &[u8]) -> Result<CodeTree> {
    deserialize(&mut SliceBitReader::new(data))
}
