//! Body stream encoding and decoding
//!
//! The body of an encoded stream is nothing but code bits back to back:
//! the encoder writes each input byte's code and finishes with the
//! sentinel's code; the decoder walks the tree bit by bit (`1` left, `0`
//! right), emits a byte at every non-sentinel leaf, and stops cleanly at
//! the sentinel without emitting it. Running out of bits before the
//! sentinel is a malformed body, reported as a typed error.

use crate::codes::CodeTable;
use crate::error::{HuffwireError, Result};
use crate::io::{BitRead, BitWrite, SliceBitReader, VecBitWriter};
use crate::tree::{CodeTree, Node, Symbol, EOF_SYMBOL};

/// Encodes byte sequences into sentinel-terminated bit streams
#[derive(Debug, Clone)]
pub struct StreamEncoder {
    table: CodeTable,
}

impl StreamEncoder {
    /// Create an encoder with codes derived from the given tree
    pub fn new(tree: &CodeTree) -> Self {
        Self {
            table: CodeTable::from_tree(tree),
        }
    }

    /// Create an encoder from an already derived code table
    pub fn from_table(table: CodeTable) -> Self {
        Self { table }
    }

    /// Get the encoder's code table
    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    /// Encode `data` into the bit sink, terminated by the sentinel's code
    pub fn encode<W: BitWrite>(&self, data: &[u8], sink: &mut W) -> Result<()> {
        for &byte in data {
            let code = self.table.code(Symbol::from(byte)).ok_or_else(|| {
                HuffwireError::invalid_input(format!("byte {} has no code in this tree", byte))
            })?;
            for &bit in code {
                sink.write_bit(bit);
            }
        }

        let eof = self
            .table
            .code(EOF_SYMBOL)
            .ok_or_else(|| HuffwireError::invalid_input("code table has no end-of-stream entry"))?;
        for &bit in eof {
            sink.write_bit(bit);
        }
        Ok(())
    }

    /// Encode `data` into freshly packed bytes, final byte zero-padded
    pub fn encode_to_vec(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut writer = VecBitWriter::new();
        self.encode(data, &mut writer)?;
        Ok(writer.into_bytes())
    }
}

/// Decodes sentinel-terminated bit streams back into bytes
#[derive(Debug, Clone)]
pub struct StreamDecoder {
    tree: CodeTree,
}

impl StreamDecoder {
    /// Create a decoder over the given tree
    pub fn new(tree: CodeTree) -> Self {
        Self { tree }
    }

    /// Get the decoder's tree
    pub fn tree(&self) -> &CodeTree {
        &self.tree
    }

    /// Decode bits from the source until the sentinel leaf is reached
    pub fn decode<R: BitRead>(&self, source: &mut R) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        self.decode_into(source, &mut output)?;
        Ok(output)
    }

    /// Decode into an existing buffer; the buffer keeps any partial output
    /// if the stream turns out to be malformed
    pub fn decode_into<R: BitRead>(&self, source: &mut R, output: &mut Vec<u8>) -> Result<()> {
        let root = self.tree.root();
        let mut current = root;

        loop {
            let bit = source.read_bit().ok_or_else(|| {
                HuffwireError::malformed_body("bit source exhausted before the end-of-stream mark")
            })?;

            let next = match self.tree.node(current) {
                Node::Internal { left, right } => {
                    if bit {
                        *left
                    } else {
                        *right
                    }
                }
                // the walk only ever rests on internal nodes
                Node::Leaf { .. } => {
                    return Err(HuffwireError::malformed_body(
                        "decoder cursor rested on a leaf",
                    ))
                }
            };

            match self.tree.node(next) {
                Node::Leaf { symbol } if *symbol == EOF_SYMBOL => return Ok(()),
                Node::Leaf { symbol } => {
                    output.push(*symbol as u8);
                    current = root;
                }
                Node::Internal { .. } => current = next,
            }
        }
    }

    /// Decode a stream from packed bytes
    pub fn decode_from_slice(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.decode(&mut SliceBitReader::new(data))
    }
}
