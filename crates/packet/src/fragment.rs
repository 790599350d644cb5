//! Framing layer - splits a fragment into chunks
//! No classification, no decoding of chunk bodies beyond Snappy decompression
//!
//! Each frame is `varuint32 command`, `varuint32 tick`, `varuint32 size` followed by
//! `size` body bytes. Whole `.dem` files additionally start with a 16 byte stamp
//! (`PBDEMS2\0` plus two u32 offsets) which is skipped.

use tracing::{debug, warn};

use crate::error::FragmentError;

/// Magic stamp at the start of a complete Source 2 demo file.
pub const DEMO_FILE_STAMP: &[u8; 8] = b"PBDEMS2\0";
/// Stamp plus the file-info and spawn-group offsets.
pub const DEMO_FILE_HEADER_LEN: usize = 16;
/// Bit folded into the command when the body is Snappy compressed.
pub const DEM_IS_COMPRESSED: u32 = 64;

/// One framed unit of a fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub index: usize,
    /// Command with the compression bit cleared.
    pub command: u32,
    pub is_compressed: bool,
    /// Command exactly as framed, compression bit included.
    pub raw_command: u32,
    pub tick: i32,
    /// Body size on the wire.
    pub size: usize,
    /// Decompressed body. `None` when a compressed body could not be inflated.
    pub payload: Option<Vec<u8>>,
}

impl Chunk {
    pub fn payload(&self) -> Option<&[u8]> {
        self.payload.as_deref()
    }
}

/// A fully framed fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub size: usize,
    pub chunks: Vec<Chunk>,
}

impl Fragment {
    pub fn decode(data: &[u8]) -> Result<Self, FragmentError> {
        let chunks = ChunkReader::new(data)?.collect::<Result<Vec<_>, _>>()?;
        debug!(size = data.len(), chunks = chunks.len(), "Framed fragment");
        Ok(Self {
            size: data.len(),
            chunks,
        })
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

/// Sequential chunk reader over a borrowed fragment buffer.
pub struct ChunkReader<'a> {
    data: &'a [u8],
    offset: usize,
    next_index: usize,
    failed: bool,
}

impl<'a> ChunkReader<'a> {
    pub fn new(data: &'a [u8]) -> Result<Self, FragmentError> {
        let offset = if data.starts_with(DEMO_FILE_STAMP) {
            if data.len() < DEMO_FILE_HEADER_LEN {
                return Err(FragmentError::InvalidHeader {
                    expected: DEMO_FILE_HEADER_LEN,
                    actual: data.len(),
                });
            }
            DEMO_FILE_HEADER_LEN
        } else {
            0
        };

        Ok(Self {
            data,
            offset,
            next_index: 0,
            failed: false,
        })
    }

    /// Read the next chunk, returns None at the end of the fragment
    fn read_chunk(&mut self) -> Result<Option<Chunk>, FragmentError> {
        if self.offset >= self.data.len() {
            return Ok(None);
        }

        let raw_command = self.read_varint32("command")?;
        let tick = self.read_varint32("tick")? as i32;
        let size = self.read_varint32("size")? as usize;

        let remaining = self.data.len() - self.offset;
        if size > remaining {
            return Err(FragmentError::Truncated {
                index: self.next_index,
                offset: self.offset,
                declared: size,
                remaining,
            });
        }
        let body = &self.data[self.offset..self.offset + size];
        self.offset += size;

        let command = raw_command & !DEM_IS_COMPRESSED;
        let is_compressed = raw_command & DEM_IS_COMPRESSED != 0;
        let payload = if is_compressed {
            match snap::raw::Decoder::new().decompress_vec(body) {
                Ok(inflated) => Some(inflated),
                Err(e) => {
                    warn!(
                        index = self.next_index,
                        command, "Failed to decompress chunk body: {}", e
                    );
                    None
                }
            }
        } else {
            Some(body.to_vec())
        };

        let chunk = Chunk {
            index: self.next_index,
            command,
            is_compressed,
            raw_command,
            tick,
            size,
            payload,
        };
        self.next_index += 1;
        Ok(Some(chunk))
    }

    fn read_varint32(&mut self, field: &'static str) -> Result<u32, FragmentError> {
        let start = self.offset;
        let mut result = 0u32;
        let mut shift = 0;

        loop {
            let Some(&byte) = self.data.get(self.offset) else {
                return Err(FragmentError::UnexpectedEnd {
                    field,
                    offset: start,
                });
            };
            self.offset += 1;
            result |= ((byte & 0x7f) as u32) << shift;

            if byte & 0x80 == 0 {
                break;
            }

            shift += 7;
            if shift >= 35 {
                return Err(FragmentError::MalformedVarint {
                    field,
                    offset: start,
                });
            }
        }

        Ok(result)
    }
}

impl Iterator for ChunkReader<'_> {
    type Item = Result<Chunk, FragmentError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.read_chunk() {
            Ok(Some(chunk)) => Some(Ok(chunk)),
            Ok(None) => None,
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
