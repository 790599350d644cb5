//! Source 2 demo fragment analysis.
//!
//! Layers, bottom up: [`fragment`] frames the input into chunks, [`classify`] decides how
//! each chunk is read, [`walker`] walks the bit-packed packet stream of network chunks,
//! [`registry`] names and decodes message types, [`analyzer`] and [`aggregator`] produce
//! the [`report`] types, and [`formatter`] renders them as text.

pub mod aggregator;
pub mod analyzer;
pub mod bits;
pub mod classify;
pub mod config;
pub mod error;
pub mod formatter;
pub mod fragment;
pub mod proto;
pub mod registry;
pub mod report;
pub mod value;
pub mod walker;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use aggregator::{FragmentAggregator, analyze_fragment};
pub use classify::{AnalysisCategory, classify};
pub use config::AnalyzerConfig;
pub use error::{BitError, DecodeError, FragmentError, WalkError};
pub use fragment::{Chunk, Fragment};
pub use registry::{RegistrySet, TypeRegistry};
pub use report::{ChunkReport, FragmentReport, PacketReport, Summary};
pub use value::DecodedValue;
