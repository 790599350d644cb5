//! Report types produced by the analysis layer.
//!
//! Everything here is plain data: reports are built once, then serialized or formatted.

use serde::Serialize;
use std::time::Instant;

use crate::classify::AnalysisCategory;
use crate::value::DecodedValue;

/// Outcome of walking one packet of a network chunk.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PacketReport {
    pub packet_index: usize,
    /// Bit offset of the packet's type field.
    pub cursor_at_start: usize,
    /// Absent when the type field itself could not be read.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub packet_type: Option<u32>,
    pub type_name: String,
    pub size: usize,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub parse_time_ms: f64,
    pub remaining_bytes_after: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_sample: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decode_success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoded_data: Option<DecodedValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decode_error: Option<String>,
}

impl PacketReport {
    /// Structural failure: framing could not be read.
    pub fn is_parse_error(&self) -> bool {
        !self.success || has_text(&self.error)
    }

    /// Well-framed packet whose content did not decode.
    pub fn is_decode_error(&self) -> bool {
        self.decode_success == Some(false) && has_text(&self.decode_error)
    }
}

/// Hex samples of the start and end of a chunk payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RawSample {
    #[serde(rename = "first20Bytes")]
    pub first_bytes: String,
    #[serde(rename = "last10Bytes")]
    pub last_bytes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkReport {
    pub index: usize,
    pub command: u32,
    pub command_name: String,
    pub tick: i32,
    pub size: usize,
    pub is_compressed: bool,
    pub raw_command: u32,
    pub analysis_type: AnalysisCategory,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub parse_time_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_packets: Option<Vec<PacketReport>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protobuf_data: Option<DecodedValue>,
    pub raw_sample: RawSample,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_sha256: Option<String>,
}

impl ChunkReport {
    pub fn packets(&self) -> &[PacketReport] {
        self.network_packets.as_deref().unwrap_or_default()
    }
}

/// Fragment-wide counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub network_packet_chunks: usize,
    pub protobuf_chunks: usize,
    pub unknown_chunks: usize,
    pub total_packets: usize,
    pub errors: usize,
    pub packet_errors: usize,
    pub packet_decode_errors: usize,
}

impl Summary {
    /// Fold one chunk's report into the counters.
    pub fn record(&mut self, chunk: &ChunkReport) {
        match chunk.analysis_type {
            AnalysisCategory::NetworkPackets => self.network_packet_chunks += 1,
            AnalysisCategory::Protobuf => self.protobuf_chunks += 1,
            AnalysisCategory::Unknown => self.unknown_chunks += 1,
        }
        if !chunk.success {
            self.errors += 1;
        }
        for packet in chunk.packets() {
            self.total_packets += 1;
            if packet.is_parse_error() {
                self.packet_errors += 1;
            }
            if packet.is_decode_error() {
                self.packet_decode_errors += 1;
            }
        }
    }

    pub fn merge(&mut self, other: &Summary) {
        self.network_packet_chunks += other.network_packet_chunks;
        self.protobuf_chunks += other.protobuf_chunks;
        self.unknown_chunks += other.unknown_chunks;
        self.total_packets += other.total_packets;
        self.errors += other.errors;
        self.packet_errors += other.packet_errors;
        self.packet_decode_errors += other.packet_decode_errors;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkTiming {
    pub index: usize,
    pub time_ms: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    pub average_chunk_parse_time_ms: f64,
    pub slowest_chunk: ChunkTiming,
    pub fastest_chunk: ChunkTiming,
}

impl Performance {
    /// Mean and extremes of the chunk parse times. Ties keep the earliest chunk.
    pub fn from_chunks(chunks: &[ChunkReport]) -> Self {
        let Some(first) = chunks.first() else {
            return Self::default();
        };
        let first = ChunkTiming {
            index: first.index,
            time_ms: first.parse_time_ms,
        };
        let mut slowest = first;
        let mut fastest = first;
        let mut total = 0.0;
        for chunk in chunks {
            total += chunk.parse_time_ms;
            if chunk.parse_time_ms > slowest.time_ms {
                slowest = ChunkTiming {
                    index: chunk.index,
                    time_ms: chunk.parse_time_ms,
                };
            }
            if chunk.parse_time_ms < fastest.time_ms {
                fastest = ChunkTiming {
                    index: chunk.index,
                    time_ms: chunk.parse_time_ms,
                };
            }
        }
        Self {
            average_chunk_parse_time_ms: total / chunks.len() as f64,
            slowest_chunk: slowest,
            fastest_chunk: fastest,
        }
    }
}

/// The complete analysis of one fragment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FragmentReport {
    pub fragment_size: usize,
    pub total_chunks: usize,
    pub total_parse_time_ms: f64,
    pub chunks: Vec<ChunkReport>,
    pub summary: Summary,
    pub performance: Performance,
}

impl FragmentReport {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Wall-clock milliseconds since `started`.
pub(crate) fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packet(success: bool, error: Option<&str>, decode_error: Option<&str>) -> PacketReport {
        PacketReport {
            packet_index: 0,
            cursor_at_start: 0,
            packet_type: Some(4),
            type_name: "net_Tick".to_string(),
            size: 0,
            success,
            error: error.map(str::to_string),
            parse_time_ms: 0.0,
            remaining_bytes_after: 0,
            raw_sample: None,
            decode_success: decode_error.map(|_| false),
            decoded_data: None,
            decode_error: decode_error.map(str::to_string),
        }
    }

    fn chunk(index: usize, time: f64, success: bool) -> ChunkReport {
        ChunkReport {
            index,
            command: 7,
            command_name: "DEM_Packet".to_string(),
            tick: 0,
            size: 0,
            is_compressed: false,
            raw_command: 7,
            analysis_type: AnalysisCategory::NetworkPackets,
            success,
            error: None,
            parse_time_ms: time,
            network_packets: None,
            protobuf_data: None,
            raw_sample: RawSample::default(),
            payload_sha256: None,
        }
    }

    #[test]
    fn test_packet_error_predicates() {
        assert!(!packet(true, None, None).is_parse_error());
        assert!(packet(false, None, None).is_parse_error());
        assert!(packet(true, Some("boom"), None).is_parse_error());
        assert!(!packet(true, Some(""), None).is_parse_error());
        assert!(packet(true, None, Some("bad")).is_decode_error());
        assert!(!packet(true, None, Some("")).is_decode_error());
    }

    #[test]
    fn test_summary_record() {
        let mut report = chunk(0, 1.0, true);
        report.network_packets = Some(vec![
            packet(true, None, None),
            packet(true, None, Some("Unknown message type: 9")),
            packet(
                false,
                Some("Declared size 9 exceeds remaining bytes 1"),
                None,
            ),
        ]);
        let mut summary = Summary::default();
        summary.record(&report);
        summary.record(&chunk(1, 1.0, false));
        assert_eq!(summary.network_packet_chunks, 2);
        assert_eq!(summary.total_packets, 3);
        assert_eq!(summary.errors, 1);
        assert_eq!(summary.packet_errors, 1);
        assert_eq!(summary.packet_decode_errors, 1);

        let mut merged = Summary::default();
        merged.merge(&summary);
        merged.merge(&summary);
        assert_eq!(merged.total_packets, 6);
    }

    #[test]
    fn test_performance_ties_keep_first() {
        let chunks = vec![
            chunk(0, 2.0, true),
            chunk(1, 5.0, true),
            chunk(2, 5.0, true),
            chunk(3, 1.0, true),
            chunk(4, 1.0, true),
        ];
        let performance = Performance::from_chunks(&chunks);
        assert_eq!(performance.slowest_chunk, ChunkTiming { index: 1, time_ms: 5.0 });
        assert_eq!(performance.fastest_chunk, ChunkTiming { index: 3, time_ms: 1.0 });
        assert!((performance.average_chunk_parse_time_ms - 2.8).abs() < 1e-9);
    }

    #[test]
    fn test_performance_without_chunks() {
        let performance = Performance::from_chunks(&[]);
        assert_eq!(performance.average_chunk_parse_time_ms, 0.0);
        assert_eq!(performance.slowest_chunk, ChunkTiming::default());
        assert_eq!(performance.fastest_chunk, ChunkTiming::default());
    }

    #[test]
    fn test_serialized_field_names() {
        let mut report = chunk(0, 0.5, true);
        report.raw_sample.first_bytes = "0a".to_string();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["commandName"], "DEM_Packet");
        assert_eq!(json["analysisType"], "network_packets");
        assert_eq!(json["rawSample"]["first20Bytes"], "0a");
        assert!(json.get("error").is_none());

        let json = serde_json::to_value(packet(true, None, None)).unwrap();
        assert_eq!(json["type"], 4);
        assert_eq!(json["typeName"], "net_Tick");
        assert!(json.get("decodeSuccess").is_none());
    }
}
