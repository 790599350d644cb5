//! Per-chunk analysis: classify, then walk or decode the payload.

use sha2::{Digest, Sha256};
use std::borrow::Cow;
use std::time::Instant;
use tracing::debug;

use demolens_common::hex::{encode, head_sample, tail_sample};
use prost::Message;

use crate::classify::{AnalysisCategory, classify};
use crate::config::AnalyzerConfig;
use crate::fragment::Chunk;
use crate::proto::demo::{CDemoFullPacket, CDemoPacket};
use crate::registry::tables::{DEM_FULL_PACKET, DEM_PACKET, DEM_SIGNON_PACKET};
use crate::registry::{RegistrySet, UNKNOWN_TYPE_NAME};
use crate::report::{ChunkReport, RawSample, elapsed_ms};
use crate::walker::PacketWalker;

pub const NO_DATA_ERROR: &str = "No data available";

/// Calculate SHA-256 digest for binary data and return as hex string
pub fn calculate_digest(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    encode(&hasher.finalize())
}

pub struct ChunkAnalyzer<'a> {
    registries: &'a RegistrySet,
    config: &'a AnalyzerConfig,
}

impl<'a> ChunkAnalyzer<'a> {
    pub fn new(registries: &'a RegistrySet, config: &'a AnalyzerConfig) -> Self {
        Self { registries, config }
    }

    /// Analyze one chunk. Failures are recorded on the report, never returned.
    pub fn analyze(&self, chunk: &Chunk) -> ChunkReport {
        let started = Instant::now();
        let payload = chunk.payload().unwrap_or_default();
        let category = classify(chunk.command);

        let mut report = ChunkReport {
            index: chunk.index,
            command: chunk.command,
            command_name: self
                .registries
                .command_name(chunk.command)
                .unwrap_or(UNKNOWN_TYPE_NAME)
                .to_string(),
            tick: chunk.tick,
            size: chunk.size,
            is_compressed: chunk.is_compressed,
            raw_command: chunk.raw_command,
            analysis_type: category,
            success: false,
            error: None,
            parse_time_ms: 0.0,
            network_packets: None,
            protobuf_data: None,
            raw_sample: RawSample {
                first_bytes: head_sample(payload, self.config.head_sample_bytes),
                last_bytes: tail_sample(payload, self.config.tail_sample_bytes),
            },
            payload_sha256: None,
        };

        if payload.is_empty() {
            report.error = Some(NO_DATA_ERROR.to_string());
        } else {
            report.payload_sha256 = Some(calculate_digest(payload));
            match category {
                AnalysisCategory::NetworkPackets => {
                    self.analyze_packets(chunk, payload, &mut report)
                }
                AnalysisCategory::Protobuf | AnalysisCategory::Unknown => {
                    self.analyze_message(chunk, payload, &mut report)
                }
            }
        }

        report.parse_time_ms = elapsed_ms(started);
        debug!(
            "Chunk #{} {} ({}) {} bytes: {}, success: {}",
            report.index,
            report.command_name,
            report.command,
            report.size,
            report.analysis_type,
            report.success
        );
        report
    }

    fn analyze_packets(&self, chunk: &Chunk, payload: &[u8], report: &mut ChunkReport) {
        let stream = if self.config.unwrap_packet_envelope {
            match unwrap_envelope(chunk.command, payload) {
                Some(inner) => Cow::Owned(inner),
                None => {
                    debug!(
                        "Chunk #{} has no packet envelope, walking raw payload",
                        chunk.index
                    );
                    Cow::Borrowed(payload)
                }
            }
        } else {
            Cow::Borrowed(payload)
        };

        let packets = PacketWalker::new(self.registries, self.config).walk(&stream);
        report.success = packets.iter().any(|p| p.success);
        if !report.success {
            report.error = Some(if packets.is_empty() {
                "No packets found".to_string()
            } else {
                format!("No packets parsed successfully ({} recorded)", packets.len())
            });
        }
        report.network_packets = Some(packets);
    }

    fn analyze_message(&self, chunk: &Chunk, payload: &[u8], report: &mut ChunkReport) {
        match self.registries.decode_command(chunk.command, payload) {
            Ok(value) => {
                report.success = true;
                report.protobuf_data = Some(value);
            }
            Err(err) => report.error = Some(err.to_string()),
        }
    }
}

/// The packet stream inside a `CDemoPacket` or `CDemoFullPacket` body.
fn unwrap_envelope(command: u32, payload: &[u8]) -> Option<Vec<u8>> {
    let data = match command {
        DEM_PACKET | DEM_SIGNON_PACKET => CDemoPacket::decode(payload).ok()?.data,
        DEM_FULL_PACKET => CDemoFullPacket::decode(payload).ok()?.packet?.data,
        _ => None,
    }?;
    (!data.is_empty()).then_some(data)
}
