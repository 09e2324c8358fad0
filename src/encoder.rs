use std::io::Write;

use tracing::{debug, trace};

use crate::{
    bitmanipulation::BitWriter, code::CodeTable, frequency::FrequencyTable, header::Header,
    tree::HuffmanTree, HuffError,
};

pub(crate) struct HuffmanEncoder {
    header: Header,
    codes: CodeTable,
}

impl HuffmanEncoder {
    pub fn new(counts: &FrequencyTable) -> Result<Self, HuffError> {
        let tree = HuffmanTree::create(counts)?;
        let codes = CodeTable::from_tree(&tree);
        trace!(codes = %codes.describe(), "derived code table");

        Ok(HuffmanEncoder {
            header: Header {
                tree,
                filesize: counts.total(),
            },
            codes,
        })
    }

    /// Writes header and payload for `source`, which must be the input the
    /// frequency table was tabulated from.
    pub fn encode<W: Write>(&self, source: &[u8], sink: &mut W) -> Result<(), HuffError> {
        let mut writer = BitWriter::new(sink);

        self.header.write(&mut writer)?;
        let header_bits = writer.bits_written();

        for value in source {
            let encoded = self.codes.get(*value).ok_or(HuffError::MissingCode(*value))?;
            writer.write_bits(encoded)?;
        }
        debug!(
            header_bits,
            payload_bits = writer.bits_written() - header_bits,
            symbols = self.codes.len(),
            "encoded input"
        );
        writer.flush()?;

        Ok(())
    }
}
