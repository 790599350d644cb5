//! Chunk classification by demo command.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::registry::TypeRegistry;
use crate::registry::tables::{
    DEM_FULL_PACKET, DEM_PACKET, DEM_SIGNON_PACKET, DEM_SPAWN_GROUPS, DEMO_COMMANDS,
};

/// How a chunk's payload is analyzed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisCategory {
    /// Payload is a bit-packed stream of network packets.
    NetworkPackets,
    /// Payload is one protobuf message named by the command.
    Protobuf,
    /// Command has no known name; still decoded as protobuf on a best-effort basis.
    Unknown,
}

impl AnalysisCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisCategory::NetworkPackets => "network_packets",
            AnalysisCategory::Protobuf => "protobuf",
            AnalysisCategory::Unknown => "unknown",
        }
    }
}

impl Display for AnalysisCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a chunk with the given (compression-stripped) command.
pub fn classify(command: u32) -> AnalysisCategory {
    match command {
        DEM_SIGNON_PACKET | DEM_PACKET | DEM_FULL_PACKET | DEM_SPAWN_GROUPS => {
            AnalysisCategory::NetworkPackets
        }
        _ if DEMO_COMMANDS.owns(command) => AnalysisCategory::Protobuf,
        _ => AnalysisCategory::Unknown,
    }
}
