//! Top-level demo container messages, one per `EDemoCommands` value.

use serde::Serialize;

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CDemoStop {}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CDemoFileHeader {
    #[prost(string, optional, tag = "1")]
    pub demo_file_stamp: Option<String>,
    #[prost(int32, optional, tag = "2")]
    pub network_protocol: Option<i32>,
    #[prost(string, optional, tag = "3")]
    pub server_name: Option<String>,
    #[prost(string, optional, tag = "4")]
    pub client_name: Option<String>,
    #[prost(string, optional, tag = "5")]
    pub map_name: Option<String>,
    #[prost(string, optional, tag = "6")]
    pub game_directory: Option<String>,
    #[prost(int32, optional, tag = "7")]
    pub fullpackets_version: Option<i32>,
    #[prost(bool, optional, tag = "8")]
    pub allow_clientside_entities: Option<bool>,
    #[prost(bool, optional, tag = "9")]
    pub allow_clientside_particles: Option<bool>,
    #[prost(string, optional, tag = "10")]
    pub addons: Option<String>,
    #[prost(string, optional, tag = "11")]
    pub demo_version_name: Option<String>,
    #[prost(string, optional, tag = "12")]
    pub demo_version_guid: Option<String>,
    #[prost(int32, optional, tag = "13")]
    pub build_num: Option<i32>,
    #[prost(string, optional, tag = "14")]
    pub game: Option<String>,
    #[prost(int32, optional, tag = "15")]
    pub server_start_tick: Option<i32>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CDemoFileInfo {
    #[prost(float, optional, tag = "1")]
    pub playback_time: Option<f32>,
    #[prost(int32, optional, tag = "2")]
    pub playback_ticks: Option<i32>,
    #[prost(int32, optional, tag = "3")]
    pub playback_frames: Option<i32>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CDemoSyncTick {}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CDemoSendTables {
    #[prost(bytes = "vec", optional, tag = "1")]
    #[serde(serialize_with = "super::serde_hex::option")]
    pub data: Option<Vec<u8>>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CDemoClassInfo {
    #[prost(message, repeated, tag = "1")]
    pub classes: Vec<c_demo_class_info::ClassT>,
}

pub mod c_demo_class_info {
    use serde::Serialize;

    #[derive(Clone, PartialEq, Serialize, prost::Message)]
    pub struct ClassT {
        #[prost(int32, optional, tag = "1")]
        pub class_id: Option<i32>,
        #[prost(string, optional, tag = "2")]
        pub network_name: Option<String>,
        #[prost(string, optional, tag = "3")]
        pub table_name: Option<String>,
    }
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CDemoStringTables {
    #[prost(message, repeated, tag = "1")]
    pub tables: Vec<c_demo_string_tables::TableT>,
}

pub mod c_demo_string_tables {
    use serde::Serialize;

    #[derive(Clone, PartialEq, Serialize, prost::Message)]
    pub struct ItemsT {
        #[prost(string, optional, tag = "1")]
        pub str: Option<String>,
        #[prost(bytes = "vec", optional, tag = "2")]
        #[serde(serialize_with = "crate::proto::serde_hex::option")]
        pub data: Option<Vec<u8>>,
    }

    #[derive(Clone, PartialEq, Serialize, prost::Message)]
    pub struct TableT {
        #[prost(string, optional, tag = "1")]
        pub table_name: Option<String>,
        #[prost(message, repeated, tag = "2")]
        pub items: Vec<ItemsT>,
        #[prost(message, repeated, tag = "3")]
        pub items_clientside: Vec<ItemsT>,
        #[prost(int32, optional, tag = "4")]
        pub table_flags: Option<i32>,
    }
}

/// Body of `DEM_Packet` and `DEM_SignonPacket`; `data` is the bit-packed packet stream.
#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CDemoPacket {
    #[prost(bytes = "vec", optional, tag = "3")]
    #[serde(serialize_with = "super::serde_hex::option")]
    pub data: Option<Vec<u8>>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CDemoConsoleCmd {
    #[prost(string, optional, tag = "1")]
    pub cmdstring: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CDemoCustomData {
    #[prost(int32, optional, tag = "1")]
    pub callback_index: Option<i32>,
    #[prost(bytes = "vec", optional, tag = "2")]
    #[serde(serialize_with = "super::serde_hex::option")]
    pub data: Option<Vec<u8>>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CDemoCustomDataCallbacks {
    #[prost(string, repeated, tag = "1")]
    pub save_id: Vec<String>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CDemoUserCmd {
    #[prost(int32, optional, tag = "1")]
    pub cmd_number: Option<i32>,
    #[prost(bytes = "vec", optional, tag = "2")]
    #[serde(serialize_with = "super::serde_hex::option")]
    pub data: Option<Vec<u8>>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CDemoFullPacket {
    #[prost(message, optional, tag = "1")]
    pub string_table: Option<CDemoStringTables>,
    #[prost(message, optional, tag = "2")]
    pub packet: Option<CDemoPacket>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CDemoSaveGame {
    #[prost(bytes = "vec", optional, tag = "1")]
    #[serde(serialize_with = "super::serde_hex::option")]
    pub data: Option<Vec<u8>>,
    #[prost(fixed64, optional, tag = "2")]
    pub steam_id: Option<u64>,
    #[prost(fixed64, optional, tag = "3")]
    pub signature: Option<u64>,
    #[prost(int32, optional, tag = "4")]
    pub version: Option<i32>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CDemoSpawnGroups {
    #[prost(bytes = "vec", repeated, tag = "3")]
    #[serde(serialize_with = "super::serde_hex::repeated")]
    pub msgs: Vec<Vec<u8>>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CDemoAnimationData {
    #[prost(sint32, optional, tag = "1")]
    pub entity_id: Option<i32>,
    #[prost(int32, optional, tag = "2")]
    pub start_tick: Option<i32>,
    #[prost(int32, optional, tag = "3")]
    pub end_tick: Option<i32>,
    #[prost(bytes = "vec", optional, tag = "4")]
    #[serde(serialize_with = "super::serde_hex::option")]
    pub data: Option<Vec<u8>>,
    #[prost(int64, optional, tag = "5")]
    pub data_checksum: Option<i64>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CDemoAnimationHeader {
    #[prost(sint32, optional, tag = "1")]
    pub entity_id: Option<i32>,
    #[prost(int32, optional, tag = "2")]
    pub tick: Option<i32>,
    #[prost(bytes = "vec", optional, tag = "3")]
    #[serde(serialize_with = "super::serde_hex::option")]
    pub data: Option<Vec<u8>>,
}
