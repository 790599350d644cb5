//! Walks the bit-packed packet stream carried by network chunks.
//!
//! Each packet is a `UBitVar` type, then (except for `net_NOP`) a `varuint32` size and
//! that many payload bytes. A structural failure is recorded on the failing packet and
//! ends the walk; the packets before it are kept.

use std::time::Instant;
use tracing::trace;

use demolens_common::hex::head_sample;

use crate::bits::BitCursor;
use crate::config::AnalyzerConfig;
use crate::error::WalkError;
use crate::registry::{RegistrySet, UNKNOWN_TYPE_NAME};
use crate::report::{PacketReport, elapsed_ms};

/// `net_NOP` has no size field and no payload.
pub const NET_NOP: u32 = 0;

/// Smallest encoding of a packet type.
const MIN_TYPE_BITS: usize = 4;

#[derive(Debug)]
enum WalkState {
    Reading,
    EmittedOk(PacketReport),
    EmittedError(PacketReport),
    Done,
}

pub struct PacketWalker<'a> {
    registries: &'a RegistrySet,
    sample_bytes: usize,
    decode: bool,
    max_packets: usize,
}

impl<'a> PacketWalker<'a> {
    pub fn new(registries: &'a RegistrySet, config: &AnalyzerConfig) -> Self {
        Self {
            registries,
            sample_bytes: config.packet_sample_bytes,
            decode: config.decode_packets,
            max_packets: config.max_packets_per_chunk,
        }
    }

    /// Walk `payload` until it runs out of whole bytes, a packet fails structurally,
    /// or the packet limit is reached.
    pub fn walk(&self, payload: &[u8]) -> Vec<PacketReport> {
        let mut cursor = BitCursor::new(payload);
        let mut packets = Vec::new();
        let mut state = WalkState::Reading;

        loop {
            state = match state {
                WalkState::Reading => {
                    if cursor.remaining_bytes() == 0 || packets.len() >= self.max_packets {
                        WalkState::Done
                    } else {
                        self.step(&mut cursor, packets.len())
                    }
                }
                WalkState::EmittedOk(report) => {
                    trace!(
                        "Packet #{} {} ({}) {} bytes at bit {}",
                        report.packet_index,
                        report.type_name,
                        report.packet_type.unwrap_or_default(),
                        report.size,
                        report.cursor_at_start
                    );
                    packets.push(report);
                    WalkState::Reading
                }
                WalkState::EmittedError(report) => {
                    trace!(
                        "Packet #{} failed at bit {}: {}",
                        report.packet_index,
                        report.cursor_at_start,
                        report.error.as_deref().unwrap_or_default()
                    );
                    packets.push(report);
                    WalkState::Done
                }
                WalkState::Done => break,
            };
        }

        packets
    }

    /// Read one packet at the cursor and report it.
    fn step(&self, cursor: &mut BitCursor<'_>, index: usize) -> WalkState {
        let started = Instant::now();
        let mut report = PacketReport {
            packet_index: index,
            cursor_at_start: cursor.position(),
            packet_type: None,
            type_name: UNKNOWN_TYPE_NAME.to_string(),
            size: 0,
            success: false,
            error: None,
            parse_time_ms: 0.0,
            remaining_bytes_after: 0,
            raw_sample: None,
            decode_success: None,
            decoded_data: None,
            decode_error: None,
        };

        let outcome = self.read_packet(cursor, &mut report);
        report.parse_time_ms = elapsed_ms(started);
        report.remaining_bytes_after = cursor.remaining_bytes();

        match outcome {
            Ok(()) => {
                report.success = true;
                WalkState::EmittedOk(report)
            }
            Err(err) => {
                report.error = Some(err.to_string());
                WalkState::EmittedError(report)
            }
        }
    }

    fn read_packet(
        &self,
        cursor: &mut BitCursor<'_>,
        report: &mut PacketReport,
    ) -> Result<(), WalkError> {
        let remaining = cursor.remaining_bits();
        if remaining < MIN_TYPE_BITS {
            return Err(WalkError::InsufficientBits { remaining });
        }

        let packet_type = cursor.read_ubitvar()?;
        report.packet_type = Some(packet_type);
        report.type_name = self.registries.resolve_name(packet_type).to_string();
        if packet_type == NET_NOP {
            return Ok(());
        }

        let size = cursor.read_uvarint32()? as usize;
        report.size = size;
        let remaining = cursor.remaining_bytes();
        if size > remaining {
            return Err(WalkError::SizeOverrun {
                declared: size,
                remaining,
            });
        }

        let payload = cursor.read_bytes(size)?;
        report.raw_sample = Some(head_sample(&payload, self.sample_bytes));

        if self.decode {
            match self.registries.decode(packet_type, &payload) {
                Ok(value) => {
                    report.decode_success = Some(true);
                    report.decoded_data = Some(value);
                }
                Err(err) => {
                    report.decode_success = Some(false);
                    report.decode_error = Some(err.to_string());
                }
            }
        }

        Ok(())
    }
}
