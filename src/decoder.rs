use std::io::{Read, Write};

use tracing::debug;

use crate::{bitmanipulation::BitReader, header::Header, tree::HuffmanTree, HuffError};

/// The stored size is untrusted until the payload has actually been read.
const MAX_PREALLOCATION: usize = 1 << 20;

pub(crate) struct HuffmanDecoder<R: Read> {
    header: Header,
    reader: BitReader<R>,
}

impl<R: Read> HuffmanDecoder<R> {
    /// Reads the header from the front of `source`.
    pub fn new(source: R) -> Result<Self, HuffError> {
        let mut reader = BitReader::new(source);
        let header = Header::read(&mut reader)?;
        debug!(filesize = header.filesize, "read header");
        Ok(HuffmanDecoder { header, reader })
    }

    pub fn decode<W: Write>(&mut self, writer: &mut W) -> Result<(), HuffError> {
        let mut out_buf = Vec::with_capacity(self.header.filesize.min(MAX_PREALLOCATION));

        for _ in 0..self.header.filesize {
            // A single-leaf trie emits without consuming any bit
            let mut current = &self.header.tree;
            while let HuffmanTree::Node(_, left, right) = current {
                current = if self.reader.read_bit()? { right } else { left };
            }
            if let HuffmanTree::Leaf(_, value) = current {
                out_buf.push(*value);
            }
        }

        writer.write_all(&out_buf)?;
        writer.flush()?;
        Ok(())
    }
}
