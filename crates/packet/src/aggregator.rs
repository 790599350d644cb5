//! Fragment-level driver: frames the input, analyzes every chunk in order and
//! accumulates the summary and timing extremes.

use std::time::Instant;
use tracing::info;

use crate::analyzer::ChunkAnalyzer;
use crate::config::AnalyzerConfig;
use crate::error::FragmentError;
use crate::fragment::Fragment;
use crate::registry::RegistrySet;
use crate::report::{FragmentReport, Performance, Summary, elapsed_ms};

pub struct FragmentAggregator {
    registries: RegistrySet,
    config: AnalyzerConfig,
}

impl Default for FragmentAggregator {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

impl FragmentAggregator {
    /// Aggregator over the standard registries.
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            registries: RegistrySet::standard(),
            config,
        }
    }

    /// Replace the registries (Builder pattern)
    pub fn with_registries(mut self, registries: RegistrySet) -> Self {
        self.registries = registries;
        self
    }

    /// Analyze every chunk of an already framed fragment.
    pub fn aggregate(&self, fragment: &Fragment) -> FragmentReport {
        let started = Instant::now();
        let analyzer = ChunkAnalyzer::new(&self.registries, &self.config);

        let mut summary = Summary::default();
        let mut chunks = Vec::with_capacity(fragment.len());
        for chunk in &fragment.chunks {
            let report = analyzer.analyze(chunk);
            summary.record(&report);
            chunks.push(report);
        }
        let performance = Performance::from_chunks(&chunks);

        let report = FragmentReport {
            fragment_size: fragment.size,
            total_chunks: chunks.len(),
            total_parse_time_ms: elapsed_ms(started),
            chunks,
            summary,
            performance,
        };
        info!(
            "Analyzed {} chunks ({} bytes): {} network, {} protobuf, {} unknown, {} packets, {} chunk errors, {} packet errors, {} decode errors",
            report.total_chunks,
            report.fragment_size,
            summary.network_packet_chunks,
            summary.protobuf_chunks,
            summary.unknown_chunks,
            summary.total_packets,
            summary.errors,
            summary.packet_errors,
            summary.packet_decode_errors
        );
        report
    }

    /// Frame `data` and analyze it. Only framing errors are returned.
    pub fn analyze_bytes(&self, data: &[u8]) -> Result<FragmentReport, FragmentError> {
        let started = Instant::now();
        let fragment = Fragment::decode(data)?;
        let mut report = self.aggregate(&fragment);
        report.total_parse_time_ms = elapsed_ms(started);
        Ok(report)
    }
}

/// Analyze a fragment with the standard registries and default options.
pub fn analyze_fragment(data: &[u8]) -> Result<FragmentReport, FragmentError> {
    FragmentAggregator::default().analyze_bytes(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::AnalysisCategory;
    use crate::proto::demo::{CDemoFileHeader, CDemoFileInfo};
    use crate::proto::netmessages::CnetMsgTick;
    use crate::registry::StaticRegistry;
    use crate::registry::tables;
    use crate::testing::{BitWriter, FragmentBuilder};
    use crate::walker::NET_NOP;
    use prost::Message;

    fn tick(n: u32) -> Vec<u8> {
        CnetMsgTick {
            tick: Some(n),
            ..Default::default()
        }
        .encode_to_vec()
    }

    #[test]
    fn test_empty_chunk_and_nop_chunk() {
        let mut nop = BitWriter::new();
        nop.write_packet(NET_NOP, &[]);
        let data = FragmentBuilder::new()
            .chunk(1, 0, &[])
            .chunk(7, 1, &nop.finish())
            .build();

        let report = analyze_fragment(&data).unwrap();
        assert_eq!(report.total_chunks, 2);
        assert_eq!(report.fragment_size, data.len());

        let empty = &report.chunks[0];
        assert!(!empty.success);
        assert_eq!(empty.error.as_deref(), Some("No data available"));

        let network = &report.chunks[1];
        assert!(network.success);
        assert_eq!(network.packets().len(), 1);
        let packet = &network.packets()[0];
        assert_eq!(packet.packet_type, Some(NET_NOP));
        assert!(packet.success);
        assert_eq!(packet.size, 0);

        assert_eq!(report.summary.errors, 1);
        assert_eq!(report.summary.protobuf_chunks, 1);
        assert_eq!(report.summary.network_packet_chunks, 1);
        assert_eq!(report.summary.total_packets, 1);
    }

    #[test]
    fn test_summary_counts() {
        let mut good = BitWriter::new();
        good.write_packet(4, &tick(1));
        good.write_packet(48, &[0x0a, 0x09]);
        good.write_packet(900, &[0x01]);
        good.write_packet_header(4, 50);

        let header = CDemoFileHeader {
            map_name: Some("cs_office".to_string()),
            ..Default::default()
        };
        let info = CDemoFileInfo {
            playback_ticks: Some(64),
            ..Default::default()
        };
        let data = FragmentBuilder::new()
            .message(1, 0, &header)
            .chunk(7, 1, &good.finish())
            .chunk(8, 2, &[0x04])
            .chunk(30, 3, &[0x08, 0x01])
            .message(2, 4, &info)
            .build();

        let report = analyze_fragment(&data).unwrap();
        let summary = report.summary;
        assert_eq!(report.total_chunks, 5);
        assert_eq!(summary.protobuf_chunks, 2);
        assert_eq!(summary.network_packet_chunks, 2);
        assert_eq!(summary.unknown_chunks, 1);
        assert_eq!(summary.total_packets, 5);
        // single-byte network chunk and the unknown command
        assert_eq!(summary.errors, 2);
        // size overrun and the single-byte packet
        assert_eq!(summary.packet_errors, 2);
        // truncated svc_Print and the unknown packet type
        assert_eq!(summary.packet_decode_errors, 2);

        let expected_errors = report.chunks.iter().filter(|c| !c.success).count();
        assert_eq!(summary.errors, expected_errors);
    }

    #[test]
    fn test_performance_extremes_match_chunks() {
        let data = FragmentBuilder::new()
            .message(1, 0, &CDemoFileHeader::default())
            .chunk(3, 1, &[])
            .chunk(7, 2, &[0x00])
            .build();
        let report = analyze_fragment(&data).unwrap();
        let times: Vec<f64> = report.chunks.iter().map(|c| c.parse_time_ms).collect();
        let max = times.iter().cloned().fold(f64::MIN, f64::max);
        let min = times.iter().cloned().fold(f64::MAX, f64::min);
        assert_eq!(report.performance.slowest_chunk.time_ms, max);
        assert_eq!(report.performance.fastest_chunk.time_ms, min);
        let slowest = report.performance.slowest_chunk.index;
        assert!(times[..slowest].iter().all(|t| *t < max));
    }

    #[test]
    fn test_zero_chunks() {
        let report = analyze_fragment(&[]).unwrap();
        assert_eq!(report.total_chunks, 0);
        assert_eq!(report.summary, Summary::default());
        assert_eq!(report.performance, Performance::default());
    }

    #[test]
    fn test_framing_error_escapes() {
        let data = FragmentBuilder::new().raw(&[0x07, 0x00, 0x20, 0x01]).build();
        assert!(matches!(
            analyze_fragment(&data),
            Err(FragmentError::Truncated { index: 0, .. })
        ));
    }

    #[test]
    fn test_custom_registries() {
        let registries = RegistrySet::new(tables::DEMO_COMMANDS.boxed())
            .with_registry(StaticRegistry::new("empty", &[]).boxed());
        let aggregator =
            FragmentAggregator::new(AnalyzerConfig::default()).with_registries(registries);
        let mut stream = BitWriter::new();
        stream.write_packet(4, &tick(9));
        let data = FragmentBuilder::new().chunk(7, 0, &stream.finish()).build();

        let report = aggregator.analyze_bytes(&data).unwrap();
        let packet = &report.chunks[0].packets()[0];
        assert_eq!(report.chunks[0].analysis_type, AnalysisCategory::NetworkPackets);
        assert_eq!(packet.type_name, "unknown");
        assert!(packet.success);
        assert_eq!(packet.decode_error.as_deref(), Some("Unknown message type: 4"));
    }
}
