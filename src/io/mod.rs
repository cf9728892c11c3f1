//! Bit-level I/O primitives
//!
//! This module provides the bit source and sink contracts consumed by the
//! header codec and the stream codec, plus in-memory implementations over
//! byte slices and vectors.

pub mod bit_reader;
pub mod bit_writer;

// Re-export core types
pub use bit_reader::{BitRead, SliceBitReader};
pub use bit_writer::{BitWrite, VecBitWriter};
