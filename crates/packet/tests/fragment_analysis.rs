use demolens_packet::fragment::DEM_IS_COMPRESSED;
use demolens_packet::proto::demo::{CDemoFileHeader, CDemoPacket};
use demolens_packet::proto::netmessages::{CnetMsgTick, CsvcMsgServerInfo};
use demolens_packet::testing::{BitWriter, FragmentBuilder};
use demolens_packet::{
    AnalysisCategory, AnalyzerConfig, FragmentAggregator, FragmentError, FragmentReport,
    analyze_fragment,
};
use prost::Message;

fn tick(n: u32) -> Vec<u8> {
    CnetMsgTick {
        tick: Some(n),
        ..Default::default()
    }
    .encode_to_vec()
}

/// Report with every wall-clock measurement zeroed.
fn without_timings(mut report: FragmentReport) -> FragmentReport {
    report.total_parse_time_ms = 0.0;
    report.performance = Default::default();
    for chunk in &mut report.chunks {
        chunk.parse_time_ms = 0.0;
        if let Some(packets) = &mut chunk.network_packets {
            for packet in packets {
                packet.parse_time_ms = 0.0;
            }
        }
    }
    report
}

fn sample_fragment() -> Vec<u8> {
    let header = CDemoFileHeader {
        demo_file_stamp: Some("PBDEMS2".to_string()),
        map_name: Some("de_inferno".to_string()),
        ..Default::default()
    };
    let server_info = CsvcMsgServerInfo {
        max_clients: Some(10),
        ..Default::default()
    };
    let mut signon = BitWriter::new();
    signon.write_packet(4, &tick(100));
    signon.write_packet(40, &server_info.encode_to_vec());
    signon.write_packet(0, &[]);
    signon.write_packet(4, &tick(101));
    let mut packet = BitWriter::new();
    packet.write_packet(4, &tick(102));

    FragmentBuilder::new()
        .message(1, 0, &header)
        .chunk(8, 0, &signon.finish())
        .chunk(3, 0, &[])
        .chunk(7, 1, &packet.finish())
        .build()
}

#[test]
fn analyzes_mixed_fragment() {
    let report = analyze_fragment(&sample_fragment()).unwrap();

    assert_eq!(report.total_chunks, 4);
    let kinds: Vec<_> = report.chunks.iter().map(|c| c.analysis_type).collect();
    assert_eq!(
        kinds,
        [
            AnalysisCategory::Protobuf,
            AnalysisCategory::NetworkPackets,
            AnalysisCategory::Protobuf,
            AnalysisCategory::NetworkPackets,
        ]
    );

    let signon = &report.chunks[1];
    let names: Vec<_> = signon.packets().iter().map(|p| p.type_name.as_str()).collect();
    assert_eq!(names, ["net_Tick", "svc_ServerInfo", "net_NOP", "net_Tick"]);
    assert!(signon.packets().iter().all(|p| p.success));
    let server_info = signon.packets()[1].decoded_data.as_ref().unwrap();
    assert_eq!(server_info.get("max_clients").and_then(|v| v.as_u64()), Some(10));

    // DEM_SyncTick with an empty body has no data to analyze
    assert_eq!(report.chunks[2].error.as_deref(), Some("No data available"));
    assert_eq!(report.summary.errors, 1);
    assert_eq!(report.summary.total_packets, 5);
    assert_eq!(report.summary.packet_errors, 0);
    assert_eq!(report.summary.packet_decode_errors, 0);
}

#[test]
fn analysis_is_deterministic_apart_from_timings() {
    let data = sample_fragment();
    let first = without_timings(analyze_fragment(&data).unwrap());
    let second = without_timings(analyze_fragment(&data).unwrap());
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn demo_file_stamp_is_skipped() {
    let mut data = b"PBDEMS2\0".to_vec();
    data.extend_from_slice(&[0u8; 8]);
    data.extend_from_slice(&sample_fragment());
    let report = analyze_fragment(&data).unwrap();
    assert_eq!(report.total_chunks, 4);
    assert_eq!(report.chunks[0].command_name, "DEM_FileHeader");
}

#[test]
fn compressed_chunks_are_inflated() {
    let header = CDemoFileHeader {
        server_name: Some("compressed".to_string()),
        ..Default::default()
    };
    let body = snap::raw::Encoder::new()
        .compress_vec(&header.encode_to_vec())
        .unwrap();
    let data = FragmentBuilder::new()
        .chunk(1 | DEM_IS_COMPRESSED, 5, &body)
        .chunk(1 | DEM_IS_COMPRESSED, 6, &[0x05, 0x00])
        .build();

    let report = analyze_fragment(&data).unwrap();
    let chunk = &report.chunks[0];
    assert!(chunk.is_compressed);
    assert_eq!(chunk.command, 1);
    assert_eq!(chunk.raw_command, 65);
    assert_eq!(chunk.size, body.len());
    assert_eq!(chunk.tick, 5);
    assert!(chunk.success);
    assert_eq!(
        chunk
            .protobuf_data
            .as_ref()
            .and_then(|v| v.get("server_name"))
            .and_then(|v| v.as_str()),
        Some("compressed")
    );

    let broken = &report.chunks[1];
    assert!(!broken.success);
    assert_eq!(broken.error.as_deref(), Some("No data available"));
}

#[test]
fn packet_stream_truncation_keeps_earlier_packets() {
    let mut stream = BitWriter::new();
    for n in 0..5 {
        stream.write_packet(4, &tick(n));
    }
    stream.write_packet_header(4, 1000);
    let data = FragmentBuilder::new()
        .chunk(7, 0, &stream.finish())
        .chunk(7, 1, &[0x04])
        .build();

    let report = analyze_fragment(&data).unwrap();
    let partial = &report.chunks[0];
    assert!(partial.success);
    assert_eq!(partial.packets().len(), 6);
    let last = partial.packets().last().unwrap();
    assert!(!last.success);
    assert!(last.error.as_deref().is_some_and(|e| !e.is_empty()));

    let single = &report.chunks[1];
    assert!(!single.success);
    assert_eq!(single.packets().len(), 1);
    assert!(single.packets()[0].error.is_some());

    for chunk in &report.chunks {
        for pair in chunk.packets().windows(2) {
            assert!(pair[0].packet_index < pair[1].packet_index);
            assert!(pair[0].cursor_at_start <= pair[1].cursor_at_start);
        }
    }
    assert_eq!(report.summary.packet_errors, 2);
}

#[test]
fn envelope_unwrapping_is_optional() {
    let mut inner = BitWriter::new();
    inner.write_packet(4, &tick(7));
    inner.write_packet(0, &[]);
    let envelope = CDemoPacket {
        data: Some(inner.finish()),
    };
    let data = FragmentBuilder::new().message(7, 0, &envelope).build();

    let unwrapped = FragmentAggregator::new(
        AnalyzerConfig::default().with_unwrap_packet_envelope(true),
    )
    .analyze_bytes(&data)
    .unwrap();
    let names: Vec<_> = unwrapped.chunks[0]
        .packets()
        .iter()
        .map(|p| p.type_name.as_str())
        .collect();
    assert_eq!(names, ["net_Tick", "net_NOP"]);
}

#[test]
fn truncated_frame_is_a_hard_error() {
    let mut data = sample_fragment();
    data.extend_from_slice(&[0x01, 0x00, 0x7f, 0x00]);
    assert!(matches!(
        analyze_fragment(&data),
        Err(FragmentError::Truncated { index: 4, .. })
    ));
    assert!(matches!(
        analyze_fragment(&[0x81]),
        Err(FragmentError::UnexpectedEnd { .. })
    ));
}

#[test]
fn report_serializes_in_camel_case() {
    let report = analyze_fragment(&sample_fragment()).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["totalChunks"], 4);
    assert_eq!(json["summary"]["networkPacketChunks"], 2);
    assert_eq!(json["chunks"][1]["analysisType"], "network_packets");
    assert_eq!(json["chunks"][1]["networkPackets"][0]["typeName"], "net_Tick");
    assert_eq!(json["chunks"][1]["networkPackets"][0]["type"], 4);
    assert!(json["performance"]["slowestChunk"]["timeMs"].is_number());
}
