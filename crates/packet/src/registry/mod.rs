//! Message-type registries and the ordered dispatcher over them.
//!
//! A [`TypeRegistry`] owns a set of numeric type codes, names them, and decodes their
//! payloads. [`RegistrySet`] checks its packet registries strictly in priority order:
//! the first registry that owns a code names it and decodes it, and no later registry
//! is consulted even if that decode fails.

pub mod tables;

use crate::error::DecodeError;
use crate::value::DecodedValue;

/// Name reported for type codes no registry recognizes.
pub const UNKNOWN_TYPE_NAME: &str = "unknown";

/// Decoder for one message type. Receives the type's name for error reporting.
pub type DecodeFn = fn(&'static str, &[u8]) -> Result<DecodedValue, DecodeError>;

/// One entry of a registry's enumeration.
#[derive(Debug, Clone, Copy)]
pub struct MessageType {
    pub code: u32,
    pub name: &'static str,
    decode: Option<DecodeFn>,
}

impl MessageType {
    pub const fn decodable(code: u32, name: &'static str, decode: DecodeFn) -> Self {
        Self {
            code,
            name,
            decode: Some(decode),
        }
    }

    /// A known type that has no message decoder.
    pub const fn named(code: u32, name: &'static str) -> Self {
        Self {
            code,
            name,
            decode: None,
        }
    }

    pub fn has_decoder(&self) -> bool {
        self.decode.is_some()
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<DecodedValue, DecodeError> {
        match self.decode {
            Some(decode) => decode(self.name, bytes),
            None => Err(DecodeError::Unsupported {
                code: self.code,
                name: self.name,
            }),
        }
    }
}

/// Capability interface shared by every registry.
///
/// Implementors only have to provide [`name`](Self::name) and [`types`](Self::types);
/// the lookups default to scans of the enumeration.
pub trait TypeRegistry: Send + Sync {
    /// Registry name, e.g. `NET_Messages`.
    fn name(&self) -> &str;

    /// Every type this registry owns.
    fn types(&self) -> &[MessageType];

    fn lookup(&self, code: u32) -> Option<&MessageType> {
        self.types().iter().find(|t| t.code == code)
    }

    fn owns(&self, code: u32) -> bool {
        self.lookup(code).is_some()
    }

    fn name_for(&self, code: u32) -> Option<&'static str> {
        self.lookup(code).map(|t| t.name)
    }

    fn decode(&self, code: u32, bytes: &[u8]) -> Result<DecodedValue, DecodeError> {
        match self.lookup(code) {
            Some(message_type) => message_type.decode(bytes),
            None => Err(DecodeError::UnknownType(code)),
        }
    }
}

/// Registry backed by a static table.
#[derive(Debug, Clone, Copy)]
pub struct StaticRegistry {
    name: &'static str,
    types: &'static [MessageType],
}

impl StaticRegistry {
    pub const fn new(name: &'static str, types: &'static [MessageType]) -> Self {
        Self { name, types }
    }

    pub fn boxed(self) -> Box<dyn TypeRegistry> {
        Box::new(self)
    }
}

impl TypeRegistry for StaticRegistry {
    fn name(&self) -> &str {
        self.name
    }

    fn types(&self) -> &[MessageType] {
        self.types
    }
}

/// The distinguished demo-command registry plus the ranked packet-type registries.
pub struct RegistrySet {
    command: Box<dyn TypeRegistry>,
    packets: Vec<Box<dyn TypeRegistry>>,
}

impl RegistrySet {
    /// A set with no packet registries yet.
    pub fn new(command: Box<dyn TypeRegistry>) -> Self {
        Self {
            command,
            packets: Vec::new(),
        }
    }

    /// Append a packet registry at the lowest priority so far (Builder pattern)
    pub fn with_registry(mut self, registry: Box<dyn TypeRegistry>) -> Self {
        self.packets.push(registry);
        self
    }

    /// Demo commands, then `NET`, `SVC`, user messages and game events in that order.
    pub fn standard() -> Self {
        Self::new(tables::DEMO_COMMANDS.boxed())
            .with_registry(tables::NET_MESSAGES.boxed())
            .with_registry(tables::SVC_MESSAGES.boxed())
            .with_registry(tables::USER_MESSAGES.boxed())
            .with_registry(tables::GAME_EVENTS.boxed())
    }

    pub fn command_registry(&self) -> &dyn TypeRegistry {
        &*self.command
    }

    pub fn packet_registries(&self) -> impl Iterator<Item = &dyn TypeRegistry> {
        self.packets.iter().map(|r| -> &dyn TypeRegistry { &**r })
    }

    /// Registry by name across the command and packet registries.
    pub fn find(&self, name: &str) -> Option<&dyn TypeRegistry> {
        std::iter::once(self.command_registry())
            .chain(self.packet_registries())
            .find(|r| r.name().eq_ignore_ascii_case(name))
    }

    /// First packet registry that owns `code`.
    pub fn owner(&self, code: u32) -> Option<&dyn TypeRegistry> {
        self.packet_registries().find(|r| r.owns(code))
    }

    /// Never fails: unresolvable codes are named [`UNKNOWN_TYPE_NAME`].
    pub fn resolve_name(&self, code: u32) -> &'static str {
        self.packet_registries()
            .find_map(|r| r.name_for(code))
            .unwrap_or(UNKNOWN_TYPE_NAME)
    }

    /// Decode a packet payload with the first registry that owns `code`.
    pub fn decode(&self, code: u32, bytes: &[u8]) -> Result<DecodedValue, DecodeError> {
        match self.owner(code) {
            Some(registry) => registry.decode(code, bytes),
            None => Err(DecodeError::UnknownType(code)),
        }
    }

    pub fn command_name(&self, command: u32) -> Option<&'static str> {
        self.command.name_for(command)
    }

    /// Decode a whole chunk body against the demo-command registry.
    pub fn decode_command(&self, command: u32, bytes: &[u8]) -> Result<DecodedValue, DecodeError> {
        if !self.command.owns(command) {
            return Err(DecodeError::UnknownType(command));
        }
        self.command.decode(command, bytes)
    }
}

impl Default for RegistrySet {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::netmessages::CnetMsgTick;
    use prost::Message;

    fn always_fails(name: &'static str, _: &[u8]) -> Result<DecodedValue, DecodeError> {
        Err(DecodeError::Unsupported { code: 900, name })
    }

    fn always_succeeds(name: &'static str, _: &[u8]) -> Result<DecodedValue, DecodeError> {
        Ok(DecodedValue::Text(name.to_string()))
    }

    static FIRST: &[MessageType] = &[MessageType::decodable(900, "first_900", always_fails)];
    static SECOND: &[MessageType] = &[
        MessageType::decodable(900, "second_900", always_succeeds),
        MessageType::decodable(901, "second_901", always_succeeds),
    ];

    fn overlapping_set() -> RegistrySet {
        RegistrySet::new(tables::DEMO_COMMANDS.boxed())
            .with_registry(StaticRegistry::new("first", FIRST).boxed())
            .with_registry(StaticRegistry::new("second", SECOND).boxed())
    }

    #[test]
    fn test_resolve_name_in_priority_order() {
        let registries = overlapping_set();
        assert_eq!(registries.resolve_name(900), "first_900");
        assert_eq!(registries.resolve_name(901), "second_901");
        assert_eq!(registries.resolve_name(12345), UNKNOWN_TYPE_NAME);
    }

    #[test]
    fn test_no_fallback_after_owner_fails() {
        let registries = overlapping_set();
        let err = registries.decode(900, &[]).unwrap_err();
        assert!(matches!(err, DecodeError::Unsupported { name: "first_900", .. }));
        assert_eq!(
            registries.decode(901, &[]).unwrap(),
            DecodedValue::Text("second_901".to_string())
        );
    }

    #[test]
    fn test_unknown_type() {
        let registries = RegistrySet::standard();
        let err = registries.decode(9999, &[1, 2, 3]).unwrap_err();
        assert_eq!(err.to_string(), "Unknown message type: 9999");
        assert!(registries.owner(9999).is_none());
    }

    #[test]
    fn test_standard_decodes_net_tick() {
        let registries = RegistrySet::standard();
        let tick = CnetMsgTick {
            tick: Some(4242),
            ..Default::default()
        };
        assert_eq!(registries.resolve_name(4), "net_Tick");
        assert_eq!(registries.owner(4).map(|r| r.name()), Some("NET_Messages"));
        let value = registries.decode(4, &tick.encode_to_vec()).unwrap();
        assert_eq!(value.get("tick").and_then(|v| v.as_u64()), Some(4242));
    }

    #[test]
    fn test_named_type_without_decoder() {
        let registries = RegistrySet::standard();
        let err = registries.decode(76, &[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "No decoder available for svc_UserCmds (76)"
        );
    }

    #[test]
    fn test_decode_command() {
        let registries = RegistrySet::standard();
        assert_eq!(registries.command_name(1), Some("DEM_FileHeader"));
        assert_eq!(registries.command_name(42), None);
        assert!(registries.decode_command(3, &[]).unwrap().is_empty_record());
        assert_eq!(
            registries.decode_command(42, &[]).unwrap_err().to_string(),
            "Unknown message type: 42"
        );
    }

    #[test]
    fn test_find_registry_by_name() {
        let registries = RegistrySet::standard();
        assert!(registries.find("svc_messages").is_some());
        assert!(registries.find("EDemoCommands").is_some());
        assert!(registries.find("nope").is_none());
        assert_eq!(registries.packet_registries().count(), 4);
    }
}
