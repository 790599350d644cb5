//! `EBaseUserMessages` carried inside the packet stream.

use serde::Serialize;

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CUserMessageAchievementEvent {
    #[prost(uint32, optional, tag = "1")]
    pub achievement: Option<u32>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CUserMessageCloseCaption {
    #[prost(fixed32, optional, tag = "1")]
    pub hash: Option<u32>,
    #[prost(float, optional, tag = "2")]
    pub duration: Option<f32>,
    #[prost(bool, optional, tag = "3")]
    pub from_player: Option<bool>,
    #[prost(int32, optional, tag = "4")]
    pub ent_index: Option<i32>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CUserMessageCurrentTimescale {
    #[prost(float, optional, tag = "1")]
    pub current: Option<f32>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CUserMessageDesiredTimescale {
    #[prost(float, optional, tag = "1")]
    pub desired_timescale: Option<f32>,
    #[prost(float, optional, tag = "2")]
    pub acceleration: Option<f32>,
    #[prost(float, optional, tag = "3")]
    pub minblendrate: Option<f32>,
    #[prost(float, optional, tag = "4")]
    pub blenddeltamultiplier: Option<f32>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CUserMessageFade {
    #[prost(uint32, optional, tag = "1")]
    pub duration: Option<u32>,
    #[prost(uint32, optional, tag = "2")]
    pub hold_time: Option<u32>,
    #[prost(uint32, optional, tag = "3")]
    pub flags: Option<u32>,
    #[prost(fixed32, optional, tag = "4")]
    pub color: Option<u32>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CUserMessageHudText {
    #[prost(string, optional, tag = "1")]
    pub message: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CUserMessageColoredText {
    #[prost(uint32, optional, tag = "1")]
    pub color: Option<u32>,
    #[prost(string, optional, tag = "2")]
    pub text: Option<String>,
    #[prost(bool, optional, tag = "3")]
    pub reset: Option<bool>,
    #[prost(int32, optional, tag = "4")]
    pub context_player_slot: Option<i32>,
    #[prost(int32, optional, tag = "5")]
    pub context_value: Option<i32>,
    #[prost(int32, optional, tag = "6")]
    pub context_team_id: Option<i32>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CUserMessageResetHud {}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CUserMessageSayText {
    #[prost(uint32, optional, tag = "1")]
    pub playerindex: Option<u32>,
    #[prost(string, optional, tag = "2")]
    pub text: Option<String>,
    #[prost(bool, optional, tag = "3")]
    pub chat: Option<bool>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CUserMessageSayText2 {
    #[prost(uint32, optional, tag = "1")]
    pub entityindex: Option<u32>,
    #[prost(bool, optional, tag = "2")]
    pub chat: Option<bool>,
    #[prost(string, optional, tag = "3")]
    pub messagename: Option<String>,
    #[prost(string, optional, tag = "4")]
    pub param1: Option<String>,
    #[prost(string, optional, tag = "5")]
    pub param2: Option<String>,
    #[prost(string, optional, tag = "6")]
    pub param3: Option<String>,
    #[prost(string, optional, tag = "7")]
    pub param4: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CUserMessageShake {
    #[prost(uint32, optional, tag = "1")]
    pub command: Option<u32>,
    #[prost(float, optional, tag = "2")]
    pub amplitude: Option<f32>,
    #[prost(float, optional, tag = "3")]
    pub frequency: Option<f32>,
    #[prost(float, optional, tag = "4")]
    pub duration: Option<f32>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CUserMessageTextMsg {
    #[prost(uint32, optional, tag = "1")]
    pub dest: Option<u32>,
    #[prost(string, repeated, tag = "2")]
    pub param: Vec<String>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CUserMessageVoiceMask {
    #[prost(bool, optional, tag = "2")]
    pub player_mod_enable: Option<bool>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CUserMessageSendAudio {
    #[prost(string, optional, tag = "1")]
    pub soundname: Option<String>,
    #[prost(bool, optional, tag = "2")]
    pub stop: Option<bool>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CUserMessageItemPickup {
    #[prost(string, optional, tag = "1")]
    pub itemname: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CUserMessageAmmoDenied {
    #[prost(uint32, optional, tag = "1")]
    pub ammo_id: Option<u32>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CUserMessageHudError {
    #[prost(int32, optional, tag = "1")]
    pub order_id: Option<i32>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CUserMessageCustomGameEvent {
    #[prost(string, optional, tag = "1")]
    pub event_name: Option<String>,
    #[prost(bytes = "vec", optional, tag = "2")]
    #[serde(serialize_with = "super::serde_hex::option")]
    pub data: Option<Vec<u8>>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CUserMessageServerFrameTime {
    #[prost(float, optional, tag = "1")]
    pub frame_time: Option<f32>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CUserMessageLagCompensationError {
    #[prost(float, optional, tag = "1")]
    pub distance: Option<f32>,
}
