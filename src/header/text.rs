//! Line-oriented text header format
//!
//! Each leaf is written as two lines: the symbol's decimal value, then its
//! code as a string of `1`/`0` characters, root-to-leaf. There is no count
//! or terminator; the reader consumes line pairs until the input runs out,
//! so the surrounding container decides where the header ends.

use crate::error::{HuffwireError, Result};
use crate::header::{Scaffold, Side};
use crate::tree::{CodeTree, Node, NodeId, Symbol, EOF_SYMBOL};

/// Serialize a tree as line pairs, leaves in left-first traversal order
pub fn serialize(tree: &CodeTree) -> String {
    let mut out = String::new();
    let mut path = String::new();
    write_node(tree, tree.root(), &mut path, &mut out);
    out
}

fn write_node(tree: &CodeTree, id: NodeId, path: &mut String, out: &mut String) {
    match tree.node(id) {
        Node::Leaf { symbol } => {
            out.push_str(&symbol.to_string());
            out.push('\n');
            out.push_str(path);
            out.push('\n');
        }
        Node::Internal { left, right } => {
            path.push('1');
            write_node(tree, *left, path, out);
            path.pop();

            path.push('0');
            write_node(tree, *right, path, out);
            path.pop();
        }
    }
}

/// Reconstruct a tree from line pairs
///
/// Every code is replayed from the root, creating internal nodes along the
/// way and a leaf at its final step. The input must describe a full tree or
/// the reconstruction is rejected.
pub fn deserialize(input: &str) -> Result<CodeTree> {
    let mut scaffold = Scaffold::new();
    let mut lines = input.lines();

    loop {
        let Some(symbol_line) = lines.next() else {
            break;
        };
        let code_line = lines.next().ok_or_else(|| {
            HuffwireError::malformed_header("symbol line without a matching code line")
        })?;

        let symbol: Symbol = symbol_line.trim().parse().map_err(|_| {
            HuffwireError::malformed_header(format!("unparsable symbol line {:?}", symbol_line))
        })?;
        if symbol > EOF_SYMBOL {
            return Err(HuffwireError::malformed_header(format!(
                "symbol {} is outside the coding alphabet",
                symbol
            )));
        }

        let steps = code_line
            .chars()
            .map(|ch| match ch {
                '1' => Ok(Side::Left),
                '0' => Ok(Side::Right),
                other => Err(HuffwireError::malformed_header(format!(
                    "invalid code character {:?}",
                    other
                ))),
            })
            .collect::<Result<Vec<Side>>>()?;
        let (last, prefix) = steps
            .split_last()
            .ok_or_else(|| HuffwireError::malformed_header("empty code line"))?;

        let mut current = Scaffold::ROOT;
        for &side in prefix {
            current = scaffold.descend(current, side)?;
        }
        scaffold.place_leaf(current, *last, symbol)?;
    }

    scaffold.into_tree()
}
