//! Presentation layer - text rendering of fragment reports
//! JSON output goes straight through serde, everything human-readable lives here

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::report::{ChunkReport, FragmentReport, PacketReport, Performance, Summary};

/// Output writer abstraction
pub struct OutputWriter {
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Write to `output_path`, or stdout when no path is given.
    pub fn new(output_path: Option<&Path>) -> Result<Self> {
        let writer: Box<dyn Write> = match output_path {
            Some(path) => Box::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?),
            None => Box::new(std::io::stdout()),
        };

        Ok(Self { writer })
    }

    pub fn from_writer(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }

    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content).with_context(|| "Failed to write to output")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .with_context(|| "Failed to flush output")?;
        Ok(())
    }
}

/// Per-chunk and per-packet listing of a fragment report
pub struct ReportFormatter {
    show_packets: bool,
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self { show_packets: true }
    }
}

impl ReportFormatter {
    pub fn new(show_packets: bool) -> Self {
        Self { show_packets }
    }

    pub fn format_report(
        &self,
        writer: &mut OutputWriter,
        label: &str,
        report: &FragmentReport,
    ) -> Result<()> {
        writer.writeln(&format!("=== Fragment: {} ===", label))?;
        writer.writeln(&format!(
            "Size: {} bytes, chunks: {}, parse time: {:.3} ms",
            report.fragment_size, report.total_chunks, report.total_parse_time_ms
        ))?;
        writer.writeln("")?;

        for chunk in &report.chunks {
            self.format_chunk(writer, chunk)?;
        }

        StatsFormatter::format_summary(writer, &report.summary)?;
        StatsFormatter::format_performance(writer, &report.performance)?;
        Ok(())
    }

    fn format_chunk(&self, writer: &mut OutputWriter, chunk: &ChunkReport) -> Result<()> {
        let compressed = if chunk.is_compressed {
            ", compressed"
        } else {
            ""
        };
        writer.writeln(&format!(
            "--- Chunk #{}: {} ({}) tick {}, {} bytes{} ---",
            chunk.index, chunk.command_name, chunk.command, chunk.tick, chunk.size, compressed
        ))?;
        writer.writeln(&format!(
            "  Analysis: {}, success: {}, {:.3} ms",
            chunk.analysis_type, chunk.success, chunk.parse_time_ms
        ))?;
        if let Some(error) = &chunk.error {
            writer.writeln(&format!("  Error: {}", error))?;
        }
        if let Some(digest) = &chunk.payload_sha256 {
            writer.writeln(&format!("  SHA-256: {}", digest))?;
        }
        writer.writeln(&format!("  First bytes: {}", chunk.raw_sample.first_bytes))?;
        writer.writeln(&format!("  Last bytes: {}", chunk.raw_sample.last_bytes))?;

        if let Some(data) = &chunk.protobuf_data {
            writer.writeln(&format!("  Data: {}", data))?;
        }

        if let Some(packets) = &chunk.network_packets {
            let succeeded = packets.iter().filter(|p| p.success).count();
            writer.writeln(&format!(
                "  Packets: {} ({} parsed)",
                packets.len(),
                succeeded
            ))?;
            if self.show_packets {
                for packet in packets {
                    format_packet(writer, packet)?;
                }
            }
        }
        writer.writeln("")?;
        Ok(())
    }
}

fn format_packet(writer: &mut OutputWriter, packet: &PacketReport) -> Result<()> {
    let packet_type = packet
        .packet_type
        .map(|t| t.to_string())
        .unwrap_or_else(|| "?".to_string());
    writer.writeln(&format!(
        "    Packet #{} @bit {}: {} ({}) {} bytes",
        packet.packet_index, packet.cursor_at_start, packet.type_name, packet_type, packet.size
    ))?;
    if let Some(error) = &packet.error {
        writer.writeln(&format!("      Error: {}", error))?;
    }
    if let Some(sample) = &packet.raw_sample {
        writer.writeln(&format!("      Raw: {}", sample))?;
    }
    if let Some(data) = &packet.decoded_data {
        writer.writeln(&format!("      Data: {}", data))?;
    }
    if let Some(error) = &packet.decode_error {
        writer.writeln(&format!("      Decode error: {}", error))?;
    }
    Ok(())
}

/// Statistics formatter
pub struct StatsFormatter;

impl StatsFormatter {
    pub fn format_summary(writer: &mut OutputWriter, summary: &Summary) -> Result<()> {
        let chunks =
            summary.network_packet_chunks + summary.protobuf_chunks + summary.unknown_chunks;

        writer.writeln("================== STATISTICS ==================")?;
        writer.writeln(&format!("Total chunks: {}", chunks))?;
        writer.writeln(&format!(
            "  Network packet chunks: {} ({:.1}%)",
            summary.network_packet_chunks,
            percentage(summary.network_packet_chunks, chunks)
        ))?;
        writer.writeln(&format!(
            "  Protobuf chunks: {} ({:.1}%)",
            summary.protobuf_chunks,
            percentage(summary.protobuf_chunks, chunks)
        ))?;
        if summary.unknown_chunks > 0 {
            writer.writeln(&format!(
                "  Unknown chunks: {} ({:.1}%)",
                summary.unknown_chunks,
                percentage(summary.unknown_chunks, chunks)
            ))?;
        }
        writer.writeln(&format!(
            "Chunk errors: {} ({:.1}%)",
            summary.errors,
            percentage(summary.errors, chunks)
        ))?;
        writer.writeln("")?;

        writer.writeln(&format!("Total packets: {}", summary.total_packets))?;
        writer.writeln(&format!(
            "  Parse errors: {} ({:.1}%)",
            summary.packet_errors,
            percentage(summary.packet_errors, summary.total_packets)
        ))?;
        writer.writeln(&format!(
            "  Decode errors: {} ({:.1}%)",
            summary.packet_decode_errors,
            percentage(summary.packet_decode_errors, summary.total_packets)
        ))?;
        writer.writeln("================================================")?;
        Ok(())
    }

    pub fn format_performance(writer: &mut OutputWriter, performance: &Performance) -> Result<()> {
        writer.writeln(&format!(
            "Average chunk parse time: {:.3} ms",
            performance.average_chunk_parse_time_ms
        ))?;
        writer.writeln(&format!(
            "Slowest chunk: #{} ({:.3} ms)",
            performance.slowest_chunk.index, performance.slowest_chunk.time_ms
        ))?;
        writer.writeln(&format!(
            "Fastest chunk: #{} ({:.3} ms)",
            performance.fastest_chunk.index, performance.fastest_chunk.time_ms
        ))?;
        writer.writeln("")?;
        Ok(())
    }
}

// Helper functions
fn percentage(count: usize, total: usize) -> f64 {
    if total > 0 {
        count as f64 / total as f64 * 100.0
    } else {
        0.0
    }
}
