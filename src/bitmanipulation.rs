use std::io::{self, BufReader, Read, Write};

use crate::HuffError;

/// Reads single bits, MSB first, from a byte source.
pub struct BitReader<R: Read> {
    index: u8,
    current: u8,
    source: BufReader<R>,
}

impl<R: Read> BitReader<R> {
    pub fn new(source: R) -> Self {
        BitReader {
            index: 8,
            current: 0,
            source: BufReader::new(source),
        }
    }

    pub fn read_bit(&mut self) -> Result<bool, HuffError> {
        if self.index > 7 {
            // Read next byte
            let mut buf = [0];
            self.source.read_exact(&mut buf).map_err(|e| match e.kind() {
                io::ErrorKind::UnexpectedEof => HuffError::Underflow,
                _ => HuffError::Io(e),
            })?;
            self.current = buf[0];
            self.index = 0;
        }
        let val = (self.current >> (7 - self.index)) & 0x01;
        self.index += 1;
        Ok(val == 1)
    }

    pub fn read_byte(&mut self) -> Result<u8, HuffError> {
        let mut value = 0u8;
        for _ in 0..8 {
            value = (value << 1) | self.read_bit()? as u8;
        }
        Ok(value)
    }

    /// Big-endian 32-bit integer.
    pub fn read_u32(&mut self) -> Result<u32, HuffError> {
        let mut value = 0u32;
        for _ in 0..4 {
            value = (value << 8) | self.read_byte()? as u32;
        }
        Ok(value)
    }
}

/// Packs bits, MSB first, into the bytes of a sink. The last partial byte is
/// only written, zero padded, by [`BitWriter::flush`].
pub struct BitWriter<W: Write> {
    index: u8,
    current: u8,
    written: usize,
    sink: W,
}

impl<W: Write> BitWriter<W> {
    pub fn new(sink: W) -> Self {
        BitWriter {
            index: 0,
            current: 0,
            written: 0,
            sink,
        }
    }

    pub fn write_bit(&mut self, bit: bool) -> Result<(), HuffError> {
        if bit {
            self.current |= 1 << (7 - self.index);
        }
        self.index += 1;
        self.written += 1;
        if self.index == 8 {
            self.sink.write_all(&[self.current])?;
            self.current = 0;
            self.index = 0;
        }
        Ok(())
    }

    pub fn write_bits(&mut self, bits: &[bool]) -> Result<(), HuffError> {
        for bit in bits {
            self.write_bit(*bit)?;
        }
        Ok(())
    }

    pub fn write_byte(&mut self, value: u8) -> Result<(), HuffError> {
        for shift in (0..8).rev() {
            self.write_bit((value >> shift) & 0x01 == 1)?;
        }
        Ok(())
    }

    /// Big-endian 32-bit integer.
    pub fn write_u32(&mut self, value: u32) -> Result<(), HuffError> {
        for byte in value.to_be_bytes() {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// Number of bits accepted so far, padding excluded.
    pub fn bits_written(&self) -> usize {
        self.written
    }

    pub fn flush(&mut self) -> Result<(), HuffError> {
        if self.index > 0 {
            self.sink.write_all(&[self.current])?;
            self.current = 0;
            self.index = 0;
        }
        self.sink.flush()?;
        Ok(())
    }
}
