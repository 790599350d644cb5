//! Static type tables for the standard Source 2 registries.

use super::{MessageType, StaticRegistry};
use crate::proto::decode_message;
use crate::proto::demo::*;
use crate::proto::gameevents::*;
use crate::proto::netmessages::*;
use crate::proto::usermessages::*;

pub const DEM_STOP: u32 = 0;
pub const DEM_FILE_HEADER: u32 = 1;
pub const DEM_FILE_INFO: u32 = 2;
pub const DEM_SYNC_TICK: u32 = 3;
pub const DEM_SEND_TABLES: u32 = 4;
pub const DEM_CLASS_INFO: u32 = 5;
pub const DEM_STRING_TABLES: u32 = 6;
pub const DEM_PACKET: u32 = 7;
pub const DEM_SIGNON_PACKET: u32 = 8;
pub const DEM_CONSOLE_CMD: u32 = 9;
pub const DEM_CUSTOM_DATA: u32 = 10;
pub const DEM_CUSTOM_DATA_CALLBACKS: u32 = 11;
pub const DEM_USER_CMD: u32 = 12;
pub const DEM_FULL_PACKET: u32 = 13;
pub const DEM_SAVE_GAME: u32 = 14;
pub const DEM_SPAWN_GROUPS: u32 = 15;
pub const DEM_ANIMATION_DATA: u32 = 16;
pub const DEM_ANIMATION_HEADER: u32 = 17;

/// `EDemoCommands`, used for whole-chunk decoding.
pub const DEMO_COMMANDS: StaticRegistry = StaticRegistry::new(
    "EDemoCommands",
    &[
        MessageType::decodable(DEM_STOP, "DEM_Stop", decode_message::<CDemoStop>),
        MessageType::decodable(
            DEM_FILE_HEADER,
            "DEM_FileHeader",
            decode_message::<CDemoFileHeader>,
        ),
        MessageType::decodable(
            DEM_FILE_INFO,
            "DEM_FileInfo",
            decode_message::<CDemoFileInfo>,
        ),
        MessageType::decodable(
            DEM_SYNC_TICK,
            "DEM_SyncTick",
            decode_message::<CDemoSyncTick>,
        ),
        MessageType::decodable(
            DEM_SEND_TABLES,
            "DEM_SendTables",
            decode_message::<CDemoSendTables>,
        ),
        MessageType::decodable(
            DEM_CLASS_INFO,
            "DEM_ClassInfo",
            decode_message::<CDemoClassInfo>,
        ),
        MessageType::decodable(
            DEM_STRING_TABLES,
            "DEM_StringTables",
            decode_message::<CDemoStringTables>,
        ),
        MessageType::decodable(DEM_PACKET, "DEM_Packet", decode_message::<CDemoPacket>),
        MessageType::decodable(
            DEM_SIGNON_PACKET,
            "DEM_SignonPacket",
            decode_message::<CDemoPacket>,
        ),
        MessageType::decodable(
            DEM_CONSOLE_CMD,
            "DEM_ConsoleCmd",
            decode_message::<CDemoConsoleCmd>,
        ),
        MessageType::decodable(
            DEM_CUSTOM_DATA,
            "DEM_CustomData",
            decode_message::<CDemoCustomData>,
        ),
        MessageType::decodable(
            DEM_CUSTOM_DATA_CALLBACKS,
            "DEM_CustomDataCallbacks",
            decode_message::<CDemoCustomDataCallbacks>,
        ),
        MessageType::decodable(DEM_USER_CMD, "DEM_UserCmd", decode_message::<CDemoUserCmd>),
        MessageType::decodable(
            DEM_FULL_PACKET,
            "DEM_FullPacket",
            decode_message::<CDemoFullPacket>,
        ),
        MessageType::decodable(
            DEM_SAVE_GAME,
            "DEM_SaveGame",
            decode_message::<CDemoSaveGame>,
        ),
        MessageType::decodable(
            DEM_SPAWN_GROUPS,
            "DEM_SpawnGroups",
            decode_message::<CDemoSpawnGroups>,
        ),
        MessageType::decodable(
            DEM_ANIMATION_DATA,
            "DEM_AnimationData",
            decode_message::<CDemoAnimationData>,
        ),
        MessageType::decodable(
            DEM_ANIMATION_HEADER,
            "DEM_AnimationHeader",
            decode_message::<CDemoAnimationHeader>,
        ),
    ],
);

pub const NET_MESSAGES: StaticRegistry = StaticRegistry::new(
    "NET_Messages",
    &[
        MessageType::decodable(0, "net_NOP", decode_message::<CnetMsgNop>),
        MessageType::named(1, "net_Disconnect_Legacy"),
        MessageType::decodable(
            3,
            "net_SplitScreenUser",
            decode_message::<CnetMsgSplitScreenUser>,
        ),
        MessageType::decodable(4, "net_Tick", decode_message::<CnetMsgTick>),
        MessageType::decodable(5, "net_StringCmd", decode_message::<CnetMsgStringCmd>),
        MessageType::decodable(6, "net_SetConVar", decode_message::<CnetMsgSetConVar>),
        MessageType::decodable(7, "net_SignonState", decode_message::<CnetMsgSignonState>),
        MessageType::decodable(
            8,
            "net_SpawnGroup_Load",
            decode_message::<CnetMsgSpawnGroupLoad>,
        ),
        MessageType::decodable(
            9,
            "net_SpawnGroup_ManifestUpdate",
            decode_message::<CnetMsgSpawnGroupManifestUpdate>,
        ),
        MessageType::decodable(
            11,
            "net_SpawnGroup_SetCreationTick",
            decode_message::<CnetMsgSpawnGroupSetCreationTick>,
        ),
        MessageType::decodable(
            12,
            "net_SpawnGroup_Unload",
            decode_message::<CnetMsgSpawnGroupUnload>,
        ),
        MessageType::decodable(
            13,
            "net_SpawnGroup_LoadCompleted",
            decode_message::<CnetMsgSpawnGroupLoadCompleted>,
        ),
        MessageType::named(15, "net_DebugOverlay"),
    ],
);

pub const SVC_MESSAGES: StaticRegistry = StaticRegistry::new(
    "SVC_Messages",
    &[
        MessageType::decodable(40, "svc_ServerInfo", decode_message::<CsvcMsgServerInfo>),
        MessageType::decodable(
            41,
            "svc_FlattenedSerializer",
            decode_message::<CsvcMsgFlattenedSerializer>,
        ),
        MessageType::decodable(42, "svc_ClassInfo", decode_message::<CsvcMsgClassInfo>),
        MessageType::decodable(43, "svc_SetPause", decode_message::<CsvcMsgSetPause>),
        MessageType::decodable(
            44,
            "svc_CreateStringTable",
            decode_message::<CsvcMsgCreateStringTable>,
        ),
        MessageType::decodable(
            45,
            "svc_UpdateStringTable",
            decode_message::<CsvcMsgUpdateStringTable>,
        ),
        MessageType::decodable(46, "svc_VoiceInit", decode_message::<CsvcMsgVoiceInit>),
        MessageType::decodable(47, "svc_VoiceData", decode_message::<CsvcMsgVoiceData>),
        MessageType::decodable(48, "svc_Print", decode_message::<CsvcMsgPrint>),
        MessageType::decodable(49, "svc_Sounds", decode_message::<CsvcMsgSounds>),
        MessageType::decodable(50, "svc_SetView", decode_message::<CsvcMsgSetView>),
        MessageType::decodable(
            51,
            "svc_ClearAllStringTables",
            decode_message::<CsvcMsgClearAllStringTables>,
        ),
        MessageType::decodable(
            52,
            "svc_CmdKeyValues",
            decode_message::<CsvcMsgCmdKeyValues>,
        ),
        MessageType::named(53, "svc_BSPDecal"),
        MessageType::decodable(54, "svc_SplitScreen", decode_message::<CsvcMsgSplitScreen>),
        MessageType::decodable(
            55,
            "svc_PacketEntities",
            decode_message::<CsvcMsgPacketEntities>,
        ),
        MessageType::named(56, "svc_Prefetch"),
        MessageType::decodable(57, "svc_Menu", decode_message::<CsvcMsgMenu>),
        MessageType::decodable(
            58,
            "svc_GetCvarValue",
            decode_message::<CsvcMsgGetCvarValue>,
        ),
        MessageType::decodable(59, "svc_StopSound", decode_message::<CsvcMsgStopSound>),
        MessageType::decodable(60, "svc_PeerList", decode_message::<CsvcMsgPeerList>),
        MessageType::named(61, "svc_PacketReliable"),
        MessageType::decodable(62, "svc_HLTVStatus", decode_message::<CsvcMsgHltvStatus>),
        MessageType::decodable(
            63,
            "svc_ServerSteamID",
            decode_message::<CsvcMsgServerSteamId>,
        ),
        MessageType::decodable(
            70,
            "svc_FullFrameSplit",
            decode_message::<CsvcMsgFullFrameSplit>,
        ),
        MessageType::decodable(
            71,
            "svc_RconServerDetails",
            decode_message::<CsvcMsgRconServerDetails>,
        ),
        MessageType::decodable(72, "svc_UserMessage", decode_message::<CsvcMsgUserMessage>),
        MessageType::decodable(
            74,
            "svc_Broadcast_Command",
            decode_message::<CsvcMsgBroadcastCommand>,
        ),
        MessageType::decodable(
            75,
            "svc_HltvFixupOperatorStatus",
            decode_message::<CsvcMsgHltvFixupOperatorStatus>,
        ),
        MessageType::named(76, "svc_UserCmds"),
    ],
);

pub const USER_MESSAGES: StaticRegistry = StaticRegistry::new(
    "EBaseUserMessages",
    &[
        MessageType::decodable(
            101,
            "UM_AchievementEvent",
            decode_message::<CUserMessageAchievementEvent>,
        ),
        MessageType::decodable(
            102,
            "UM_CloseCaption",
            decode_message::<CUserMessageCloseCaption>,
        ),
        MessageType::decodable(
            103,
            "UM_CloseCaptionDirect",
            decode_message::<CUserMessageCloseCaption>,
        ),
        MessageType::decodable(
            104,
            "UM_CurrentTimescale",
            decode_message::<CUserMessageCurrentTimescale>,
        ),
        MessageType::decodable(
            105,
            "UM_DesiredTimescale",
            decode_message::<CUserMessageDesiredTimescale>,
        ),
        MessageType::decodable(106, "UM_Fade", decode_message::<CUserMessageFade>),
        MessageType::named(107, "UM_GameTitle"),
        MessageType::named(110, "UM_HudMsg"),
        MessageType::decodable(111, "UM_HudText", decode_message::<CUserMessageHudText>),
        MessageType::decodable(
            113,
            "UM_ColoredText",
            decode_message::<CUserMessageColoredText>,
        ),
        MessageType::named(114, "UM_RequestState"),
        MessageType::decodable(115, "UM_ResetHUD", decode_message::<CUserMessageResetHud>),
        MessageType::named(116, "UM_Rumble"),
        MessageType::decodable(117, "UM_SayText", decode_message::<CUserMessageSayText>),
        MessageType::decodable(118, "UM_SayText2", decode_message::<CUserMessageSayText2>),
        MessageType::named(119, "UM_SayTextChannel"),
        MessageType::decodable(120, "UM_Shake", decode_message::<CUserMessageShake>),
        MessageType::named(121, "UM_ShowMenu"),
        MessageType::decodable(124, "UM_TextMsg", decode_message::<CUserMessageTextMsg>),
        MessageType::named(125, "UM_ScreenTilt"),
        MessageType::decodable(128, "UM_VoiceMask", decode_message::<CUserMessageVoiceMask>),
        MessageType::decodable(130, "UM_SendAudio", decode_message::<CUserMessageSendAudio>),
        MessageType::decodable(
            131,
            "UM_ItemPickup",
            decode_message::<CUserMessageItemPickup>,
        ),
        MessageType::decodable(
            132,
            "UM_AmmoDenied",
            decode_message::<CUserMessageAmmoDenied>,
        ),
        MessageType::named(134, "UM_ShowModelPanel"),
        MessageType::named(145, "UM_ParticleManager"),
        MessageType::decodable(146, "UM_HudError", decode_message::<CUserMessageHudError>),
        MessageType::decodable(
            148,
            "UM_CustomGameEvent",
            decode_message::<CUserMessageCustomGameEvent>,
        ),
        MessageType::named(149, "UM_AnimGraphUpdate"),
        MessageType::named(150, "UM_HapticsManagerPulse"),
        MessageType::named(151, "UM_HapticsManagerEffect"),
        MessageType::named(152, "UM_CommandQueueState"),
        MessageType::named(153, "UM_UpdateCssClasses"),
        MessageType::decodable(
            154,
            "UM_ServerFrameTime",
            decode_message::<CUserMessageServerFrameTime>,
        ),
        MessageType::decodable(
            155,
            "UM_LagCompensationError",
            decode_message::<CUserMessageLagCompensationError>,
        ),
        MessageType::named(156, "UM_RequestDllStatus"),
        MessageType::named(157, "UM_RequestUtilAction"),
        MessageType::named(158, "UM_UtilActionResponse"),
        MessageType::named(159, "UM_DllStatusResponse"),
        MessageType::named(160, "UM_RequestInventory"),
        MessageType::named(161, "UM_InventoryResponse"),
        MessageType::named(162, "UM_RequestDiagnostic"),
        MessageType::named(163, "UM_DiagnosticResponse"),
        MessageType::named(164, "UM_ExtraUserData"),
        MessageType::named(165, "UM_NotifyResponseFound"),
        MessageType::named(166, "UM_PlayResponseConditional"),
    ],
);

pub const GAME_EVENTS: StaticRegistry = StaticRegistry::new(
    "EBaseGameEvents",
    &[
        MessageType::decodable(
            200,
            "GE_VDebugGameSessionIDEvent",
            decode_message::<CMsgVDebugGameSessionIdEvent>,
        ),
        MessageType::named(201, "GE_PlaceDecalEvent"),
        MessageType::decodable(
            202,
            "GE_ClearWorldDecalsEvent",
            decode_message::<CMsgClearWorldDecalsEvent>,
        ),
        MessageType::decodable(
            203,
            "GE_ClearEntityDecalsEvent",
            decode_message::<CMsgClearEntityDecalsEvent>,
        ),
        MessageType::named(204, "GE_ClearDecalsForSkeletonInstanceEvent"),
        MessageType::decodable(
            205,
            "GE_Source1LegacyGameEventList",
            decode_message::<CMsgSource1LegacyGameEventList>,
        ),
        MessageType::decodable(
            206,
            "GE_Source1LegacyListenEvents",
            decode_message::<CMsgSource1LegacyListenEvents>,
        ),
        MessageType::decodable(
            207,
            "GE_Source1LegacyGameEvent",
            decode_message::<CMsgSource1LegacyGameEvent>,
        ),
        MessageType::decodable(
            208,
            "GE_SosStartSoundEvent",
            decode_message::<CMsgSosStartSoundEvent>,
        ),
        MessageType::decodable(
            209,
            "GE_SosStopSoundEvent",
            decode_message::<CMsgSosStopSoundEvent>,
        ),
        MessageType::decodable(
            210,
            "GE_SosSetSoundEventParams",
            decode_message::<CMsgSosSetSoundEventParams>,
        ),
        MessageType::named(211, "GE_SosSetLibraryStackFields"),
        MessageType::decodable(
            212,
            "GE_SosStopSoundEventHash",
            decode_message::<CMsgSosStopSoundEventHash>,
        ),
    ],
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TypeRegistry;
    use std::collections::HashSet;

    #[test]
    fn test_codes_unique_within_each_table() {
        for registry in [DEMO_COMMANDS, NET_MESSAGES, SVC_MESSAGES, USER_MESSAGES, GAME_EVENTS] {
            let mut seen = HashSet::new();
            for message_type in registry.types() {
                assert!(
                    seen.insert(message_type.code),
                    "{} repeats code {}",
                    registry.name(),
                    message_type.code
                );
            }
        }
    }

    #[test]
    fn test_packet_tables_are_disjoint() {
        let mut seen = HashSet::new();
        for registry in [NET_MESSAGES, SVC_MESSAGES, USER_MESSAGES, GAME_EVENTS] {
            for message_type in registry.types() {
                assert!(seen.insert(message_type.code));
            }
        }
    }
}
