//! LSB-first bit cursor used for the packet sub-stream of network chunks.
//!
//! Every read either succeeds and advances the cursor, or fails and leaves the
//! position where it was.

use crate::error::BitError;

/// Maximum encoded length of a 32-bit varint.
const MAX_VARINT32_BYTES: usize = 5;

#[derive(Debug, Clone)]
pub struct BitCursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> BitCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Current position in bits from the start of the buffer.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining_bits(&self) -> usize {
        self.data.len() * 8 - self.position
    }

    /// Whole bytes left. Trailing padding bits (< 8) do not count.
    pub fn remaining_bytes(&self) -> usize {
        self.remaining_bits() / 8
    }

    fn ensure(&self, requested: usize) -> Result<(), BitError> {
        let remaining = self.remaining_bits();
        if requested > remaining {
            return Err(BitError::Overrun {
                requested,
                remaining,
            });
        }
        Ok(())
    }

    /// Read `count` bits (at most 32), least significant bit first.
    pub fn read_bits(&mut self, count: u32) -> Result<u32, BitError> {
        if count > 32 {
            return Err(BitError::WidthTooLarge(count));
        }
        self.ensure(count as usize)?;

        let mut value = 0u32;
        for i in 0..count as usize {
            let bit_index = self.position + i;
            let bit = (self.data[bit_index / 8] >> (bit_index % 8)) & 1;
            value |= (bit as u32) << i;
        }
        self.position += count as usize;
        Ok(value)
    }

    /// Source 2 `UBitVar`: six bits whose top two select how many more bits follow.
    pub fn read_ubitvar(&mut self) -> Result<u32, BitError> {
        let start = self.position;
        let result = self.read_ubitvar_inner();
        if result.is_err() {
            self.position = start;
        }
        result
    }

    fn read_ubitvar_inner(&mut self) -> Result<u32, BitError> {
        let head = self.read_bits(6)?;
        let value = match head & 0x30 {
            0x10 => (head & 0x0f) | (self.read_bits(4)? << 4),
            0x20 => (head & 0x0f) | (self.read_bits(8)? << 4),
            0x30 => (head & 0x0f) | (self.read_bits(28)? << 4),
            _ => head,
        };
        Ok(value)
    }

    /// Protobuf-style base-128 varint read byte by byte from the bit stream.
    pub fn read_uvarint32(&mut self) -> Result<u32, BitError> {
        let start = self.position;
        let result = self.read_uvarint32_inner();
        if result.is_err() {
            self.position = start;
        }
        result
    }

    fn read_uvarint32_inner(&mut self) -> Result<u32, BitError> {
        let mut result = 0u32;
        for i in 0..MAX_VARINT32_BYTES {
            let byte = self.read_bits(8)?;
            result |= (byte & 0x7f) << (7 * i);
            if byte & 0x80 == 0 {
                return Ok(result);
            }
        }
        Err(BitError::MalformedVarint(MAX_VARINT32_BYTES))
    }

    /// Read `count` raw bytes. Byte-aligned reads copy directly from the buffer.
    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>, BitError> {
        self.ensure(count * 8)?;

        if self.position % 8 == 0 {
            let start = self.position / 8;
            self.position += count * 8;
            return Ok(self.data[start..start + count].to_vec());
        }

        let mut bytes = Vec::with_capacity(count);
        for _ in 0..count {
            bytes.push(self.read_bits(8)? as u8);
        }
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::BitWriter;

    #[test]
    fn test_read_bits_lsb_first() {
        let data = [0b1010_1100, 0xff];
        let mut cursor = BitCursor::new(&data);
        assert_eq!(cursor.read_bits(2).unwrap(), 0b00);
        assert_eq!(cursor.read_bits(3).unwrap(), 0b011);
        assert_eq!(cursor.read_bits(3).unwrap(), 0b101);
        assert_eq!(cursor.read_bits(8).unwrap(), 0xff);
        assert_eq!(cursor.remaining_bits(), 0);
    }

    #[test]
    fn test_read_bits_across_bytes() {
        let data = [0xf0, 0x0f];
        let mut cursor = BitCursor::new(&data);
        cursor.read_bits(4).unwrap();
        assert_eq!(cursor.read_bits(8).unwrap(), 0xff);
    }

    #[test]
    fn test_overrun_leaves_position() {
        let data = [0x01];
        let mut cursor = BitCursor::new(&data);
        cursor.read_bits(5).unwrap();
        let err = cursor.read_bits(8).unwrap_err();
        assert_eq!(
            err,
            BitError::Overrun {
                requested: 8,
                remaining: 3
            }
        );
        assert_eq!(cursor.position(), 5);
    }

    #[test]
    fn test_width_too_large() {
        let data = [0u8; 8];
        let mut cursor = BitCursor::new(&data);
        assert_eq!(
            cursor.read_bits(33).unwrap_err(),
            BitError::WidthTooLarge(33)
        );
    }

    #[test]
    fn test_remaining_bytes_floors() {
        let data = [0u8; 2];
        let mut cursor = BitCursor::new(&data);
        assert_eq!(cursor.remaining_bytes(), 2);
        cursor.read_bits(1).unwrap();
        assert_eq!(cursor.remaining_bytes(), 1);
        cursor.read_bits(8).unwrap();
        assert_eq!(cursor.remaining_bytes(), 0);
        assert_eq!(cursor.remaining_bits(), 7);
    }

    #[test]
    fn test_ubitvar_widths() {
        for value in [0u32, 7, 15, 16, 200, 255, 256, 4095, 4096, 70_000] {
            let mut writer = BitWriter::new();
            writer.write_ubitvar(value);
            let data = writer.finish();
            let mut cursor = BitCursor::new(&data);
            assert_eq!(cursor.read_ubitvar().unwrap(), value, "value {}", value);
        }
    }

    #[test]
    fn test_ubitvar_small_value_uses_six_bits() {
        let data = [0x04];
        let mut cursor = BitCursor::new(&data);
        assert_eq!(cursor.read_ubitvar().unwrap(), 4);
        assert_eq!(cursor.position(), 6);
    }

    #[test]
    fn test_uvarint32() {
        let mut writer = BitWriter::new();
        writer.write_bits(1, 3);
        writer.write_uvarint32(300);
        writer.write_uvarint32(u32::MAX);
        let data = writer.finish();

        let mut cursor = BitCursor::new(&data);
        cursor.read_bits(3).unwrap();
        assert_eq!(cursor.read_uvarint32().unwrap(), 300);
        assert_eq!(cursor.read_uvarint32().unwrap(), u32::MAX);
    }

    #[test]
    fn test_uvarint32_malformed() {
        let data = [0xff; 6];
        let mut cursor = BitCursor::new(&data);
        assert_eq!(
            cursor.read_uvarint32().unwrap_err(),
            BitError::MalformedVarint(5)
        );
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_uvarint32_truncated_restores_position() {
        let data = [0x80];
        let mut cursor = BitCursor::new(&data);
        assert!(cursor.read_uvarint32().is_err());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_read_bytes_aligned_and_unaligned() {
        let data = [0xaa, 0xbb, 0xcc];
        let mut cursor = BitCursor::new(&data);
        assert_eq!(cursor.read_bytes(2).unwrap(), vec![0xaa, 0xbb]);

        let mut writer = BitWriter::new();
        writer.write_bits(0b101, 3);
        writer.write_bytes(&[0x12, 0x34]);
        let data = writer.finish();
        let mut cursor = BitCursor::new(&data);
        cursor.read_bits(3).unwrap();
        assert_eq!(cursor.read_bytes(2).unwrap(), vec![0x12, 0x34]);
        assert!(cursor.read_bytes(1).is_err());
    }
}
