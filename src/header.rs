use std::io::{Read, Write};

use crate::{
    bitmanipulation::{BitReader, BitWriter},
    tree::HuffmanTree,
    HuffError,
};

/// Everything the decoder needs ahead of the payload: the trie and the
/// number of symbols to decode.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Header {
    pub tree: HuffmanTree,
    pub filesize: usize,
}

impl Header {
    pub(crate) fn write<W: Write>(&self, writer: &mut BitWriter<W>) -> Result<(), HuffError> {
        let filesize =
            u32::try_from(self.filesize).map_err(|_| HuffError::InputTooLarge(self.filesize))?;

        self.tree.write(writer)?;
        writer.write_u32(filesize)
    }

    pub(crate) fn read<R: Read>(reader: &mut BitReader<R>) -> Result<Header, HuffError> {
        let tree = HuffmanTree::read(reader)?;
        let filesize = reader.read_u32()? as usize;
        Ok(Self { tree, filesize })
    }
}
