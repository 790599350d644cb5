//! Analyzer options.

use serde::{Deserialize, Serialize};

/// Tuning knobs for chunk and packet analysis.
///
/// Every field has a default, so a partial JSON object deserializes cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Bytes rendered in a chunk's leading raw sample.
    pub head_sample_bytes: usize,
    /// Bytes rendered in a chunk's trailing raw sample.
    pub tail_sample_bytes: usize,
    /// Bytes rendered in each packet's raw sample.
    pub packet_sample_bytes: usize,
    /// Walk the `CDemoPacket.data` stream of network chunks instead of the raw body.
    pub unwrap_packet_envelope: bool,
    /// Decode packet payloads through the registries.
    pub decode_packets: bool,
    /// Stop walking a chunk after this many packets.
    pub max_packets_per_chunk: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            head_sample_bytes: 20,
            tail_sample_bytes: 10,
            packet_sample_bytes: 10,
            unwrap_packet_envelope: false,
            decode_packets: true,
            max_packets_per_chunk: usize::MAX,
        }
    }
}

impl AnalyzerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sample_sizes(mut self, head: usize, tail: usize, packet: usize) -> Self {
        self.head_sample_bytes = head;
        self.tail_sample_bytes = tail;
        self.packet_sample_bytes = packet;
        self
    }

    pub fn with_unwrap_packet_envelope(mut self, unwrap: bool) -> Self {
        self.unwrap_packet_envelope = unwrap;
        self
    }

    pub fn with_decode_packets(mut self, decode: bool) -> Self {
        self.decode_packets = decode;
        self
    }

    pub fn with_max_packets_per_chunk(mut self, max: usize) -> Self {
        self.max_packets_per_chunk = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AnalyzerConfig =
            serde_json::from_str(r#"{"decode_packets": false}"#).unwrap();
        assert!(!config.decode_packets);
        assert_eq!(config.head_sample_bytes, 20);
        assert_eq!(config.max_packets_per_chunk, usize::MAX);
    }

    #[test]
    fn test_builders() {
        let config = AnalyzerConfig::new()
            .with_sample_sizes(4, 2, 1)
            .with_unwrap_packet_envelope(true)
            .with_max_packets_per_chunk(3);
        assert_eq!(config.tail_sample_bytes, 2);
        assert!(config.unwrap_packet_envelope);
        assert_eq!(config.max_packets_per_chunk, 3);
        assert!(config.decode_packets);
    }
}
