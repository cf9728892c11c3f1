//! # Huffwire: Huffman Prefix-Coding Codec
//!
//! This crate implements a Huffman codec over a fixed 257-value alphabet:
//! the 256 byte values plus a pseudo end-of-stream sentinel (symbol 256)
//! that terminates encoded bodies without a length field.
//!
//! ## Key Features
//!
//! - **Greedy tree construction**: minimum-weight coding trees from byte
//!   frequencies, with a pinned tie-break so identical inputs always yield
//!   identical trees
//! - **Prefix-free codes**: per-symbol bit codes derived by tree traversal
//! - **Dual tree wire formats**: a human-readable line-oriented text form
//!   and a compact self-terminating bit-packed form
//! - **Sentinel-terminated streams**: bodies encode and decode without any
//!   stored length, stopping at the sentinel leaf
//! - **Typed failures**: truncated headers and bodies surface as errors,
//!   never as panics
//!
//! ## Quick Start
//!
//! ```rust
//! use huffwire::{CodeTree, SliceBitReader, StreamDecoder, StreamEncoder};
//!
//! // Build a tree from the data to be encoded
//! let tree = CodeTree::from_data(b"abracadabra").unwrap();
//!
//! // Encode: code bits for each byte, then the sentinel's code
//! let encoder = StreamEncoder::new(&tree);
//! let body = encoder.encode_to_vec(b"abracadabra").unwrap();
//!
//! // Persist the tree alongside the body
//! let header = huffwire::header::packed::serialize_to_vec(&tree);
//!
//! // Later: rebuild the tree and decode the body
//! let rebuilt = huffwire::header::packed::deserialize_from_slice(&header).unwrap();
//! let decoder = StreamDecoder::new(rebuilt);
//! let decoded = decoder.decode(&mut SliceBitReader::new(&body)).unwrap();
//! assert_eq!(decoded, b"abracadabra".to_vec());
//! ```

#![warn(missing_docs)]

pub mod codes;
pub mod error;
pub mod header;
pub mod io;
pub mod stream;
pub mod tree;

// Re-export core types
pub use codes::CodeTable;
pub use error::{HuffwireError, Result};
pub use io::{BitRead, BitWrite, SliceBitReader, VecBitWriter};
pub use stream::{StreamDecoder, StreamEncoder};
pub use tree::{CodeTree, Node, NodeId, Symbol, ALPHABET_SIZE, EOF_SYMBOL};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently only emits a debug log line)
pub fn init() {
    log::debug!("initializing huffwire v{}", VERSION);
}
