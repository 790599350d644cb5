//! `NET_Messages` and `SVC_Messages` carried inside the packet stream.

use serde::Serialize;

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CnetMsgNop {}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CnetMsgSplitScreenUser {
    #[prost(int32, optional, tag = "1")]
    pub slot: Option<i32>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CnetMsgTick {
    #[prost(uint32, optional, tag = "1")]
    pub tick: Option<u32>,
    #[prost(uint32, optional, tag = "4")]
    pub host_computationtime: Option<u32>,
    #[prost(uint32, optional, tag = "5")]
    pub host_computationtime_std_deviation: Option<u32>,
    #[prost(uint32, optional, tag = "8")]
    pub host_unfiltered_frametime: Option<u32>,
    #[prost(uint32, optional, tag = "9")]
    pub hltv_replay_flags: Option<u32>,
    #[prost(uint32, optional, tag = "10")]
    pub expected_long_tick: Option<u32>,
    #[prost(string, optional, tag = "11")]
    pub expected_long_tick_reason: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CnetMsgStringCmd {
    #[prost(string, optional, tag = "1")]
    pub command: Option<String>,
    #[prost(uint32, optional, tag = "2")]
    pub prediction_sync: Option<u32>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CMsgCVars {
    #[prost(message, repeated, tag = "1")]
    pub cvars: Vec<c_msg_c_vars::CVar>,
}

pub mod c_msg_c_vars {
    use serde::Serialize;

    #[derive(Clone, PartialEq, Serialize, prost::Message)]
    pub struct CVar {
        #[prost(string, optional, tag = "1")]
        pub name: Option<String>,
        #[prost(string, optional, tag = "2")]
        pub value: Option<String>,
    }
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CnetMsgSetConVar {
    #[prost(message, optional, tag = "1")]
    pub convars: Option<CMsgCVars>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CnetMsgSignonState {
    #[prost(int32, optional, tag = "1")]
    pub signon_state: Option<i32>,
    #[prost(uint32, optional, tag = "2")]
    pub spawn_count: Option<u32>,
    #[prost(uint32, optional, tag = "3")]
    pub num_server_players: Option<u32>,
    #[prost(string, repeated, tag = "4")]
    pub players_networkids: Vec<String>,
    #[prost(string, optional, tag = "5")]
    pub map_name: Option<String>,
    #[prost(string, optional, tag = "6")]
    pub addons: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CnetMsgSpawnGroupLoad {
    #[prost(string, optional, tag = "1")]
    pub worldname: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub entitylumpname: Option<String>,
    #[prost(string, optional, tag = "3")]
    pub entityfiltername: Option<String>,
    #[prost(uint32, optional, tag = "4")]
    pub spawngrouphandle: Option<u32>,
    #[prost(uint32, optional, tag = "5")]
    pub spawngroupownerhandle: Option<u32>,
    #[prost(bytes = "vec", optional, tag = "8")]
    #[serde(serialize_with = "super::serde_hex::option")]
    pub spawngroupmanifest: Option<Vec<u8>>,
    #[prost(uint32, optional, tag = "9")]
    pub flags: Option<u32>,
    #[prost(int32, optional, tag = "10")]
    pub tickcount: Option<i32>,
    #[prost(bool, optional, tag = "11")]
    pub manifestincomplete: Option<bool>,
    #[prost(string, optional, tag = "12")]
    pub localnamefixup: Option<String>,
    #[prost(string, optional, tag = "13")]
    pub parentnamefixup: Option<String>,
    #[prost(int32, optional, tag = "14")]
    pub manifestloadpriority: Option<i32>,
    #[prost(uint32, optional, tag = "15")]
    pub worldgroupid: Option<u32>,
    #[prost(uint32, optional, tag = "16")]
    pub creationsequence: Option<u32>,
    #[prost(string, optional, tag = "17")]
    pub savegamefilename: Option<String>,
    #[prost(uint32, optional, tag = "18")]
    pub spawngroupparenthandle: Option<u32>,
    #[prost(bool, optional, tag = "19")]
    pub leveltransition: Option<bool>,
    #[prost(string, optional, tag = "20")]
    pub worldgroupname: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CnetMsgSpawnGroupManifestUpdate {
    #[prost(uint32, optional, tag = "1")]
    pub spawngrouphandle: Option<u32>,
    #[prost(bytes = "vec", optional, tag = "2")]
    #[serde(serialize_with = "super::serde_hex::option")]
    pub spawngroupmanifest: Option<Vec<u8>>,
    #[prost(bool, optional, tag = "3")]
    pub manifestincomplete: Option<bool>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CnetMsgSpawnGroupSetCreationTick {
    #[prost(uint32, optional, tag = "1")]
    pub spawngrouphandle: Option<u32>,
    #[prost(int32, optional, tag = "2")]
    pub tickcount: Option<i32>,
    #[prost(uint32, optional, tag = "3")]
    pub creationsequence: Option<u32>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CnetMsgSpawnGroupUnload {
    #[prost(uint32, optional, tag = "1")]
    pub spawngrouphandle: Option<u32>,
    #[prost(uint32, optional, tag = "2")]
    pub flags: Option<u32>,
    #[prost(int32, optional, tag = "3")]
    pub tickcount: Option<i32>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CnetMsgSpawnGroupLoadCompleted {
    #[prost(uint32, optional, tag = "1")]
    pub spawngrouphandle: Option<u32>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CsvcMsgServerInfo {
    #[prost(int32, optional, tag = "1")]
    pub protocol: Option<i32>,
    #[prost(int32, optional, tag = "2")]
    pub max_clients: Option<i32>,
    #[prost(bool, optional, tag = "3")]
    pub is_dedicated: Option<bool>,
    #[prost(bool, optional, tag = "4")]
    pub is_hltv: Option<bool>,
    #[prost(int32, optional, tag = "6")]
    pub c_os: Option<i32>,
    #[prost(int32, optional, tag = "10")]
    pub max_classes: Option<i32>,
    #[prost(int32, optional, tag = "11")]
    pub player_slot: Option<i32>,
    #[prost(float, optional, tag = "12")]
    pub tick_interval: Option<f32>,
    #[prost(string, optional, tag = "13")]
    pub game_dir: Option<String>,
    #[prost(string, optional, tag = "14")]
    pub map_name: Option<String>,
    #[prost(string, optional, tag = "15")]
    pub sky_name: Option<String>,
    #[prost(string, optional, tag = "16")]
    pub host_name: Option<String>,
    #[prost(string, optional, tag = "17")]
    pub addon_name: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CsvcMsgFlattenedSerializer {
    #[prost(message, repeated, tag = "1")]
    pub serializers: Vec<ProtoFlattenedSerializerT>,
    #[prost(string, repeated, tag = "2")]
    pub symbols: Vec<String>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct ProtoFlattenedSerializerT {
    #[prost(int32, optional, tag = "1")]
    pub serializer_name_sym: Option<i32>,
    #[prost(int32, optional, tag = "2")]
    pub serializer_version: Option<i32>,
    #[prost(int32, repeated, packed = "false", tag = "3")]
    pub fields_index: Vec<i32>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CsvcMsgClassInfo {
    #[prost(bool, optional, tag = "1")]
    pub create_on_client: Option<bool>,
    #[prost(message, repeated, tag = "2")]
    pub classes: Vec<csvc_msg_class_info::ClassT>,
}

pub mod csvc_msg_class_info {
    use serde::Serialize;

    #[derive(Clone, PartialEq, Serialize, prost::Message)]
    pub struct ClassT {
        #[prost(int32, optional, tag = "1")]
        pub class_id: Option<i32>,
        #[prost(string, optional, tag = "3")]
        pub class_name: Option<String>,
    }
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CsvcMsgSetPause {
    #[prost(bool, optional, tag = "1")]
    pub paused: Option<bool>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CsvcMsgCreateStringTable {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(int32, optional, tag = "2")]
    pub num_entries: Option<i32>,
    #[prost(bool, optional, tag = "3")]
    pub user_data_fixed_size: Option<bool>,
    #[prost(int32, optional, tag = "4")]
    pub user_data_size: Option<i32>,
    #[prost(int32, optional, tag = "5")]
    pub user_data_size_bits: Option<i32>,
    #[prost(int32, optional, tag = "6")]
    pub flags: Option<i32>,
    #[prost(bytes = "vec", optional, tag = "7")]
    #[serde(serialize_with = "super::serde_hex::option")]
    pub string_data: Option<Vec<u8>>,
    #[prost(int32, optional, tag = "8")]
    pub uncompressed_size: Option<i32>,
    #[prost(bool, optional, tag = "9")]
    pub data_compressed: Option<bool>,
    #[prost(bool, optional, tag = "10")]
    pub using_varint_bitcounts: Option<bool>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CsvcMsgUpdateStringTable {
    #[prost(int32, optional, tag = "1")]
    pub table_id: Option<i32>,
    #[prost(int32, optional, tag = "2")]
    pub num_changed_entries: Option<i32>,
    #[prost(bytes = "vec", optional, tag = "3")]
    #[serde(serialize_with = "super::serde_hex::option")]
    pub string_data: Option<Vec<u8>>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CsvcMsgVoiceInit {
    #[prost(int32, optional, tag = "1")]
    pub quality: Option<i32>,
    #[prost(string, optional, tag = "2")]
    pub codec: Option<String>,
    #[prost(int32, optional, tag = "3")]
    pub version: Option<i32>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CsvcMsgVoiceData {
    #[prost(int32, optional, tag = "2")]
    pub client: Option<i32>,
    #[prost(bool, optional, tag = "3")]
    pub proximity: Option<bool>,
    #[prost(fixed64, optional, tag = "4")]
    pub xuid: Option<u64>,
    #[prost(int32, optional, tag = "5")]
    pub audible_mask: Option<i32>,
    #[prost(uint32, optional, tag = "6")]
    pub tick: Option<u32>,
    #[prost(int32, optional, tag = "7")]
    pub passthrough: Option<i32>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CsvcMsgPrint {
    #[prost(string, optional, tag = "1")]
    pub text: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CsvcMsgSounds {
    #[prost(bool, optional, tag = "1")]
    pub reliable_sound: Option<bool>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CsvcMsgSetView {
    #[prost(int32, optional, tag = "1")]
    pub entity_index: Option<i32>,
    #[prost(int32, optional, tag = "2")]
    pub slot: Option<i32>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CsvcMsgClearAllStringTables {
    #[prost(string, optional, tag = "1")]
    pub mapname: Option<String>,
    #[prost(bool, optional, tag = "3")]
    pub create_tables_skipped: Option<bool>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CsvcMsgCmdKeyValues {
    #[prost(bytes = "vec", optional, tag = "1")]
    #[serde(serialize_with = "super::serde_hex::option")]
    pub data: Option<Vec<u8>>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CsvcMsgSplitScreen {
    #[prost(int32, optional, tag = "1")]
    pub r#type: Option<i32>,
    #[prost(int32, optional, tag = "2")]
    pub slot: Option<i32>,
    #[prost(int32, optional, tag = "3")]
    pub player_index: Option<i32>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CsvcMsgPacketEntities {
    #[prost(int32, optional, tag = "1")]
    pub max_entries: Option<i32>,
    #[prost(int32, optional, tag = "2")]
    pub updated_entries: Option<i32>,
    #[prost(bool, optional, tag = "3")]
    pub legacy_is_delta: Option<bool>,
    #[prost(bool, optional, tag = "4")]
    pub update_baseline: Option<bool>,
    #[prost(int32, optional, tag = "5")]
    pub baseline: Option<i32>,
    #[prost(int32, optional, tag = "6")]
    pub delta_from: Option<i32>,
    #[prost(bytes = "vec", optional, tag = "7")]
    #[serde(serialize_with = "super::serde_hex::option")]
    pub entity_data: Option<Vec<u8>>,
    #[prost(bool, optional, tag = "8")]
    pub pending_full_frame: Option<bool>,
    #[prost(uint32, optional, tag = "9")]
    pub active_spawngroup_handle: Option<u32>,
    #[prost(uint32, optional, tag = "10")]
    pub max_spawngroup_creationsequence: Option<u32>,
    #[prost(uint32, optional, tag = "11")]
    pub last_cmd_number_executed: Option<u32>,
    #[prost(uint32, optional, tag = "12")]
    pub server_tick: Option<u32>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CsvcMsgMenu {
    #[prost(int32, optional, tag = "1")]
    pub dialog_type: Option<i32>,
    #[prost(bytes = "vec", optional, tag = "2")]
    #[serde(serialize_with = "super::serde_hex::option")]
    pub menu_key_values: Option<Vec<u8>>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CsvcMsgGetCvarValue {
    #[prost(int32, optional, tag = "1")]
    pub cookie: Option<i32>,
    #[prost(string, optional, tag = "2")]
    pub cvar_name: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CsvcMsgStopSound {
    #[prost(fixed32, optional, tag = "1")]
    pub guid: Option<u32>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CsvcMsgPeerList {
    #[prost(message, repeated, tag = "1")]
    pub peer: Vec<CMsgServerPeer>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CMsgServerPeer {
    #[prost(int32, optional, tag = "1")]
    pub player_slot: Option<i32>,
    #[prost(fixed64, optional, tag = "2")]
    pub steamid: Option<u64>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CsvcMsgHltvStatus {
    #[prost(string, optional, tag = "1")]
    pub master: Option<String>,
    #[prost(int32, optional, tag = "2")]
    pub clients: Option<i32>,
    #[prost(int32, optional, tag = "3")]
    pub slots: Option<i32>,
    #[prost(int32, optional, tag = "4")]
    pub proxies: Option<i32>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CsvcMsgServerSteamId {
    #[prost(uint64, optional, tag = "1")]
    pub steam_id: Option<u64>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CsvcMsgFullFrameSplit {
    #[prost(int32, optional, tag = "1")]
    pub tick: Option<i32>,
    #[prost(int32, optional, tag = "2")]
    pub section: Option<i32>,
    #[prost(int32, optional, tag = "3")]
    pub total: Option<i32>,
    #[prost(bytes = "vec", optional, tag = "4")]
    #[serde(serialize_with = "super::serde_hex::option")]
    pub data: Option<Vec<u8>>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CsvcMsgRconServerDetails {
    #[prost(bytes = "vec", optional, tag = "1")]
    #[serde(serialize_with = "super::serde_hex::option")]
    pub token: Option<Vec<u8>>,
    #[prost(string, optional, tag = "2")]
    pub details: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CsvcMsgUserMessage {
    #[prost(int32, optional, tag = "1")]
    pub msg_type: Option<i32>,
    #[prost(bytes = "vec", optional, tag = "2")]
    #[serde(serialize_with = "super::serde_hex::option")]
    pub msg_data: Option<Vec<u8>>,
    #[prost(int32, optional, tag = "3")]
    pub passthrough: Option<i32>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CsvcMsgBroadcastCommand {
    #[prost(string, optional, tag = "1")]
    pub cmd: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CsvcMsgHltvFixupOperatorStatus {
    #[prost(uint32, optional, tag = "1")]
    pub mode: Option<u32>,
    #[prost(string, optional, tag = "2")]
    pub override_operator_name: Option<String>,
}
