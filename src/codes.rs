//! Derivation of per-symbol prefix codes
//!
//! Codes fall out of a depth-first walk over the coding tree: descending
//! left appends a `1` bit, descending right a `0` bit, and the accumulated
//! path at each leaf is that symbol's code. The decoder walks the same
//! convention, and the full-tree property makes the resulting code set
//! prefix-free without any further checking.

use std::collections::HashMap;

use crate::tree::{CodeTree, Node, NodeId, Symbol};

/// Symbol to prefix-code mapping derived from a [`CodeTree`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: HashMap<Symbol, Vec<bool>>,
    max_code_len: usize,
}

impl CodeTable {
    /// Derive the code table for every symbol present in the tree
    pub fn from_tree(tree: &CodeTree) -> Self {
        let mut codes = HashMap::new();
        let mut max_code_len = 0;
        let mut path = Vec::new();
        collect(tree, tree.root(), &mut path, &mut codes, &mut max_code_len);
        Self {
            codes,
            max_code_len,
        }
    }

    /// Get the code for a symbol, most-significant (root) bit first
    pub fn code(&self, symbol: Symbol) -> Option<&[bool]> {
        self.codes.get(&symbol).map(Vec::as_slice)
    }

    /// Get the number of symbols with a code
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check whether the table holds no codes
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Get the length in bits of the longest code
    pub fn max_code_len(&self) -> usize {
        self.max_code_len
    }

    /// Iterate over all (symbol, code) pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &[bool])> + '_ {
        self.codes
            .iter()
            .map(|(&symbol, code)| (symbol, code.as_slice()))
    }
}

fn collect(
    tree: &CodeTree,
    id: NodeId,
    path: &mut Vec<bool>,
    codes: &mut HashMap<Symbol, Vec<bool>>,
    max_code_len: &mut usize,
) {
    match tree.node(id) {
        Node::Leaf { symbol } => {
            *max_code_len = (*max_code_len).max(path.len());
            codes.insert(*symbol, path.clone());
        }
        Node::Internal { left, right } => {
            path.push(true);
            collect(tree, *left, path, codes, max_code_len);
            path.pop();

            path.push(false);
            collect(tree, *right, path, codes, max_code_len);
            path.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::EOF_SYMBOL;

    fn abc_tree() -> CodeTree {
        let mut frequencies = [0u64; 256];
        frequencies[b'A' as usize] = 3;
        frequencies[b'B' as usize] = 2;
        frequencies[b'C' as usize] = 1;
        CodeTree::from_frequencies(&frequencies).unwrap()
    }

    #[test]
    fn test_abc_codes() {
        let table = CodeTable::from_tree(&abc_tree());
        assert_eq!(table.len(), 4);

        // A is the heaviest symbol and caps the final merge, so it takes
        // the root's left branch alone.
        assert_eq!(table.code(b'A' as Symbol), Some(&[true][..]));
        assert_eq!(table.code(b'B' as Symbol), Some(&[false, true][..]));
        assert_eq!(table.code(b'C' as Symbol), Some(&[false, false, true][..]));
        assert_eq!(table.code(EOF_SYMBOL), Some(&[false, false, false][..]));
        assert_eq!(table.max_code_len(), 3);
    }

    #[test]
    fn test_codes_are_prefix_free() {
        let table = CodeTable::from_tree(&abc_tree());
        let codes: Vec<(Symbol, &[bool])> = table.iter().collect();
        for (a_symbol, a_code) in &codes {
            for (b_symbol, b_code) in &codes {
                if a_symbol == b_symbol {
                    continue;
                }
                assert!(
                    !b_code.starts_with(a_code),
                    "code of {} is a prefix of code of {}",
                    a_symbol,
                    b_symbol
                );
            }
        }
    }

    #[test]
    fn test_every_code_has_at_least_one_bit() {
        let tree = CodeTree::from_frequencies(&[0u64; 256]).unwrap();
        let table = CodeTable::from_tree(&tree);
        for (_, code) in table.iter() {
            assert!(!code.is_empty());
        }
    }

    #[test]
    fn test_shorter_codes_for_heavier_symbols() {
        let table = CodeTable::from_tree(&abc_tree());
        let a_len = table.code(b'A' as Symbol).unwrap().len();
        let c_len = table.code(b'C' as Symbol).unwrap().len();
        assert!(a_len <= c_len);
    }

    #[test]
    fn test_missing_symbol_has_no_code() {
        let table = CodeTable::from_tree(&abc_tree());
        assert_eq!(table.code(b'Z' as Symbol), None);
    }
}
