//! Static Huffman compression of byte streams.
//!
//! A compressed unit is, bit by bit and MSB first: the pre-order encoded
//! trie (`1` + byte for a leaf, `0` + left + right for a node), the original
//! length as a big-endian `u32`, the code of every input byte, and zero
//! padding up to the next byte. An empty input compresses to an empty output.

use std::io::{Read, Write};

use tracing::debug;

pub mod bitmanipulation;
pub mod code;
pub mod config;
pub mod error;
pub mod files;
pub mod frequency;
pub mod tree;

mod decoder;
mod encoder;
mod header;

pub use config::Config;
pub use error::HuffError;
pub use files::{compress_file, decompress_file};

use decoder::HuffmanDecoder;
use encoder::HuffmanEncoder;
use frequency::FrequencyTable;

pub fn compress(input: &[u8]) -> Result<Vec<u8>, HuffError> {
    let mut output = Vec::new();
    compress_bytes(input, &mut output)?;
    Ok(output)
}

/// Inverse of [`compress`].
///
/// The stored length is trusted: a single-leaf trie spends no payload bits,
/// so a few header bytes can ask for up to `u32::MAX` copies of one byte,
/// and all of them are buffered before anything is returned.
pub fn expand(input: &[u8]) -> Result<Vec<u8>, HuffError> {
    let mut output = Vec::new();
    expand_bytes(input, &mut output)?;
    Ok(output)
}

/// Reads `source` to the end and writes its compressed form to `sink`.
pub fn compress_stream<R: Read, W: Write>(source: &mut R, sink: &mut W) -> Result<(), HuffError> {
    let mut input = Vec::new();
    source.read_to_end(&mut input)?;
    compress_bytes(&input, sink)
}

/// Reads `source` to the end and writes the expanded bytes to `sink`.
pub fn expand_stream<R: Read, W: Write>(source: &mut R, sink: &mut W) -> Result<(), HuffError> {
    let mut input = Vec::new();
    source.read_to_end(&mut input)?;
    expand_bytes(&input, sink)
}

fn compress_bytes<W: Write>(input: &[u8], sink: &mut W) -> Result<(), HuffError> {
    if input.is_empty() {
        debug!("empty input, nothing to compress");
        return Ok(());
    }

    let counts = FrequencyTable::tabulate(input);
    debug!(
        bytes = input.len(),
        distinct = counts.distinct(),
        "tabulated frequencies"
    );

    let encoder = HuffmanEncoder::new(&counts)?;
    encoder.encode(input, sink)
}

fn expand_bytes<W: Write>(input: &[u8], sink: &mut W) -> Result<(), HuffError> {
    if input.is_empty() {
        debug!("empty input, nothing to expand");
        return Ok(());
    }

    let mut decoder = HuffmanDecoder::new(input)?;
    decoder.decode(sink)
}
