//! Protobuf message definitions for the demo container and the network sub-stream.
//!
//! Only the fields worth reporting are declared; prost skips the rest while decoding.

pub mod demo;
pub mod gameevents;
pub mod netmessages;
pub mod usermessages;

use prost::Message;
use serde::Serialize;

use crate::error::DecodeError;
use crate::value::DecodedValue;

/// Decode `bytes` as `M` and convert it into a report value.
pub fn decode_message<M>(name: &'static str, bytes: &[u8]) -> Result<DecodedValue, DecodeError>
where
    M: Message + Default + Serialize,
{
    let message = M::decode(bytes).map_err(|source| DecodeError::Protobuf { name, source })?;
    let json =
        serde_json::to_value(&message).map_err(|source| DecodeError::Convert { name, source })?;
    Ok(DecodedValue::from(json))
}

/// Renders `bytes` fields as hex instead of number arrays.
pub(crate) mod serde_hex {
    use demolens_common::hex::encode;
    use serde::Serializer;

    pub fn option<S: Serializer>(
        value: &Option<Vec<u8>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(bytes) => serializer.serialize_str(&encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    #[allow(clippy::ptr_arg)]
    pub fn repeated<S: Serializer>(value: &Vec<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(value.iter().map(|bytes| encode(bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::demo::{CDemoFileHeader, CDemoPacket};

    #[test]
    fn test_decode_message_to_record() {
        let header = CDemoFileHeader {
            demo_file_stamp: Some("PBDEMS2".to_string()),
            map_name: Some("street_test".to_string()),
            build_num: Some(5678),
            ..Default::default()
        };
        let value =
            decode_message::<CDemoFileHeader>("CDemoFileHeader", &header.encode_to_vec()).unwrap();
        assert_eq!(
            value.get("map_name").and_then(|v| v.as_str()),
            Some("street_test")
        );
        assert_eq!(value.get("build_num").and_then(|v| v.as_u64()), Some(5678));
        assert_eq!(value.get("server_name"), None);
    }

    #[test]
    fn test_bytes_rendered_as_hex() {
        let packet = CDemoPacket {
            data: Some(vec![0xde, 0xad]),
        };
        let value = decode_message::<CDemoPacket>("CDemoPacket", &packet.encode_to_vec()).unwrap();
        assert_eq!(value.get("data").and_then(|v| v.as_str()), Some("dead"));
    }

    #[test]
    fn test_decode_failure_names_message() {
        let err = decode_message::<CDemoPacket>("CDemoPacket", &[0x1a, 0x05, 0x01]).unwrap_err();
        assert!(matches!(err, DecodeError::Protobuf { name: "CDemoPacket", .. }));
        assert!(err.to_string().starts_with("Failed to decode CDemoPacket"));
    }
}
