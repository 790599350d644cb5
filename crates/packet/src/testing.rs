//! Fixture builders for tests. Integration tests reach them through the `testing` feature.

use prost::Message;

use crate::fragment::DEM_IS_COMPRESSED;

/// LSB-first bit writer, the mirror image of [`BitCursor`](crate::bits::BitCursor).
#[derive(Debug, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    bit_len: usize,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_bits(&mut self, value: u32, count: u32) {
        for i in 0..count {
            if self.bit_len % 8 == 0 {
                self.bytes.push(0);
            }
            let bit = ((value >> i) & 1) as u8;
            let last = self.bytes.len() - 1;
            self.bytes[last] |= bit << (self.bit_len % 8);
            self.bit_len += 1;
        }
    }

    pub fn write_ubitvar(&mut self, value: u32) {
        let low = value & 0x0f;
        let high = value >> 4;
        if value < 0x10 {
            self.write_bits(value, 6);
        } else if value < 0x100 {
            self.write_bits(low | 0x10, 6);
            self.write_bits(high, 4);
        } else if value < 0x1000 {
            self.write_bits(low | 0x20, 6);
            self.write_bits(high, 8);
        } else {
            self.write_bits(low | 0x30, 6);
            self.write_bits(high, 28);
        }
    }

    pub fn write_uvarint32(&mut self, mut value: u32) {
        loop {
            let byte = value & 0x7f;
            value >>= 7;
            if value == 0 {
                self.write_bits(byte, 8);
                return;
            }
            self.write_bits(byte | 0x80, 8);
        }
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.write_bits(*byte as u32, 8);
        }
    }

    /// A complete packet: type, then size and payload unless it is a NOP.
    pub fn write_packet(&mut self, packet_type: u32, payload: &[u8]) {
        self.write_ubitvar(packet_type);
        if packet_type == crate::walker::NET_NOP {
            return;
        }
        self.write_uvarint32(payload.len() as u32);
        self.write_bytes(payload);
    }

    /// A packet header whose declared size is larger than what follows.
    pub fn write_packet_header(&mut self, packet_type: u32, declared_size: u32) {
        self.write_ubitvar(packet_type);
        self.write_uvarint32(declared_size);
    }

    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }
}

/// Builds a framed fragment: `varuint32 command`, `varuint32 tick`, `varuint32 size`, body.
#[derive(Debug, Default)]
pub struct FragmentBuilder {
    bytes: Vec<u8>,
}

impl FragmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chunk(mut self, command: u32, tick: u32, body: &[u8]) -> Self {
        prost::encoding::encode_varint(command as u64, &mut self.bytes);
        prost::encoding::encode_varint(tick as u64, &mut self.bytes);
        prost::encoding::encode_varint(body.len() as u64, &mut self.bytes);
        self.bytes.extend_from_slice(body);
        self
    }

    pub fn message<M: Message>(self, command: u32, tick: u32, message: &M) -> Self {
        self.chunk(command, tick, &message.encode_to_vec())
    }

    pub fn compressed_chunk(self, command: u32, tick: u32, body: &[u8]) -> Self {
        let compressed = snap::raw::Encoder::new()
            .compress_vec(body)
            .expect("snappy compression");
        self.chunk(command | DEM_IS_COMPRESSED, tick, &compressed)
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}
