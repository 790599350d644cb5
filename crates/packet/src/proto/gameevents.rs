//! `EBaseGameEvents` carried inside the packet stream.

use serde::Serialize;

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CMsgVDebugGameSessionIdEvent {
    #[prost(int32, optional, tag = "1")]
    pub clientid: Option<i32>,
    #[prost(string, optional, tag = "2")]
    pub gamesessionid: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CMsgClearWorldDecalsEvent {
    #[prost(uint32, optional, tag = "1")]
    pub flagstoclear: Option<u32>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CMsgClearEntityDecalsEvent {
    #[prost(uint32, optional, tag = "1")]
    pub flagstoclear: Option<u32>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CMsgSource1LegacyGameEventList {
    #[prost(message, repeated, tag = "1")]
    pub descriptors: Vec<c_msg_source1_legacy_game_event_list::DescriptorT>,
}

pub mod c_msg_source1_legacy_game_event_list {
    use serde::Serialize;

    #[derive(Clone, PartialEq, Serialize, prost::Message)]
    pub struct KeyT {
        #[prost(int32, optional, tag = "1")]
        pub r#type: Option<i32>,
        #[prost(string, optional, tag = "2")]
        pub name: Option<String>,
    }

    #[derive(Clone, PartialEq, Serialize, prost::Message)]
    pub struct DescriptorT {
        #[prost(int32, optional, tag = "1")]
        pub eventid: Option<i32>,
        #[prost(string, optional, tag = "2")]
        pub name: Option<String>,
        #[prost(message, repeated, tag = "3")]
        pub keys: Vec<KeyT>,
    }
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CMsgSource1LegacyListenEvents {
    #[prost(int32, optional, tag = "1")]
    pub playerslot: Option<i32>,
    #[prost(uint32, repeated, packed = "false", tag = "2")]
    pub eventarraybits: Vec<u32>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CMsgSource1LegacyGameEvent {
    #[prost(string, optional, tag = "1")]
    pub event_name: Option<String>,
    #[prost(int32, optional, tag = "2")]
    pub eventid: Option<i32>,
    #[prost(message, repeated, tag = "3")]
    pub keys: Vec<c_msg_source1_legacy_game_event::KeyT>,
    #[prost(int32, optional, tag = "4")]
    pub server_tick: Option<i32>,
    #[prost(int32, optional, tag = "5")]
    pub passthrough: Option<i32>,
}

pub mod c_msg_source1_legacy_game_event {
    use serde::Serialize;

    #[derive(Clone, PartialEq, Serialize, prost::Message)]
    pub struct KeyT {
        #[prost(int32, optional, tag = "1")]
        pub r#type: Option<i32>,
        #[prost(string, optional, tag = "2")]
        pub val_string: Option<String>,
        #[prost(float, optional, tag = "3")]
        pub val_float: Option<f32>,
        #[prost(int32, optional, tag = "4")]
        pub val_long: Option<i32>,
        #[prost(int32, optional, tag = "5")]
        pub val_short: Option<i32>,
        #[prost(int32, optional, tag = "6")]
        pub val_byte: Option<i32>,
        #[prost(bool, optional, tag = "7")]
        pub val_bool: Option<bool>,
        #[prost(uint64, optional, tag = "8")]
        pub val_uint64: Option<u64>,
    }
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CMsgSosStartSoundEvent {
    #[prost(int32, optional, tag = "1")]
    pub soundevent_guid: Option<i32>,
    #[prost(fixed32, optional, tag = "2")]
    pub soundevent_hash: Option<u32>,
    #[prost(int32, optional, tag = "3")]
    pub source_entity_index: Option<i32>,
    #[prost(int32, optional, tag = "4")]
    pub seed: Option<i32>,
    #[prost(bytes = "vec", optional, tag = "5")]
    #[serde(serialize_with = "super::serde_hex::option")]
    pub packed_params: Option<Vec<u8>>,
    #[prost(float, optional, tag = "6")]
    pub start_time: Option<f32>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CMsgSosStopSoundEvent {
    #[prost(int32, optional, tag = "1")]
    pub soundevent_guid: Option<i32>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CMsgSosStopSoundEventHash {
    #[prost(fixed32, optional, tag = "1")]
    pub soundevent_hash: Option<u32>,
    #[prost(int32, optional, tag = "2")]
    pub source_entity_index: Option<i32>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CMsgSosSetSoundEventParams {
    #[prost(int32, optional, tag = "1")]
    pub soundevent_guid: Option<i32>,
    #[prost(bytes = "vec", optional, tag = "5")]
    #[serde(serialize_with = "super::serde_hex::option")]
    pub packed_params: Option<Vec<u8>>,
}
