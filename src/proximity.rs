//! Proximity messages as handed over by the capture layer.

use crate::devices::{PodDevice, decode_device};
use crate::error::{DecodeError, InputError};
use log::debug;
use std::time::SystemTime;

/// Message type of the proximity-pairing record inside Apple manufacturer data.
pub const PROXIMITY_PAIRING_TYPE: u8 = 0x07;

/// Returns the value of the first proximity-pairing record in the
/// manufacturer data of company 0x004C (company id already stripped).
///
/// The data is a run of `type, length, value` records. A record whose
/// declared length runs past the end stops the walk.
pub fn extract_proximity_payload(manufacturer_data: &[u8]) -> Option<&[u8]> {
    let mut rest = manufacturer_data;
    while let [message_type, length, tail @ ..] = rest {
        let length = *length as usize;
        if tail.len() < length {
            debug!(
                "Truncated record 0x{:02x}: declared {} bytes, {} left",
                message_type,
                length,
                tail.len()
            );
            return None;
        }
        let (value, next) = tail.split_at(length);
        if *message_type == PROXIMITY_PAIRING_TYPE {
            return Some(value);
        }
        rest = next;
    }
    None
}

/// Parses hex typed by a user. Whitespace and `:` separators are ignored,
/// as is a leading `0x` or `0X`.
pub fn parse_hex_input(input: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let cleaned: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    let digits = cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
        .unwrap_or(&cleaned);
    hex::decode(digits)
}

/// Decodes one hex input, either a bare proximity payload or, with
/// `manufacturer`, Apple manufacturer data holding a proximity record.
pub fn decode_hex_input(input: &str, manufacturer: bool) -> Result<PodDevice, InputError> {
    let bytes = parse_hex_input(input)?;
    debug!("Decoding {} input bytes", bytes.len());
    let payload = if manufacturer {
        extract_proximity_payload(&bytes).ok_or(InputError::NoProximityRecord)?
    } else {
        &bytes[..]
    };
    Ok(decode_device(payload)?)
}

/// One captured proximity payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProximityMessage {
    pub address: String,
    pub received_at: SystemTime,
    pub rssi: Option<i16>,
    pub payload: Vec<u8>,
}

impl ProximityMessage {
    pub fn decode(&self) -> Result<PodDevice, DecodeError> {
        decode_device(&self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_the_proximity_record() {
        let data = [
            0x10, 0x02, 0xAA, 0xBB, // nearby info
            0x07, 0x09, 0x01, 0x0E, 0x20, 0x08, 0x5A, 0x22, 0x31, 0x03, 0x05,
        ];
        assert_eq!(
            extract_proximity_payload(&data),
            Some(&[0x01, 0x0E, 0x20, 0x08, 0x5A, 0x22, 0x31, 0x03, 0x05][..])
        );
    }

    #[test]
    fn ignores_other_records_and_truncation() {
        assert_eq!(extract_proximity_payload(&[0x10, 0x01, 0x00]), None);
        assert_eq!(extract_proximity_payload(&[0x07, 0x19, 0x01, 0x02]), None);
        assert_eq!(extract_proximity_payload(&[]), None);
        assert_eq!(extract_proximity_payload(&[0x07]), None);
    }

    #[test]
    fn message_decodes_its_payload() {
        let message = ProximityMessage {
            address: "AA:BB:CC:DD:EE:FF".into(),
            received_at: SystemTime::UNIX_EPOCH,
            rssi: Some(-60),
            payload: vec![0x01, 0x0E, 0x20, 0x08, 0x5A, 0x22, 0x31, 0x03, 0x05],
        };
        assert!(matches!(message.decode(), Ok(PodDevice::Dual(_))));

        let short = ProximityMessage { payload: vec![0x01], ..message };
        assert!(message_is_malformed(short.decode()));
    }

    #[test]
    fn hex_input_ignores_separators_and_prefix() {
        let expected = vec![0x01, 0x0E, 0x20];
        assert_eq!(parse_hex_input("010e20").unwrap(), expected);
        assert_eq!(parse_hex_input("01:0E:20").unwrap(), expected);
        assert_eq!(parse_hex_input(" 01 0e\t20 ").unwrap(), expected);
        assert_eq!(parse_hex_input("0x010e20").unwrap(), expected);
        assert_eq!(parse_hex_input("0X010E20").unwrap(), expected);
        assert!(parse_hex_input("0x01zz").is_err());
        assert!(parse_hex_input("010").is_err());
    }

    #[test]
    fn hex_input_decodes_bare_payloads() {
        let device = decode_hex_input("0X01 0E 20 08 5A 22 31 03 05", false).unwrap();
        assert_eq!(device.model().name, "AirPods Pro");
        assert_eq!(
            decode_hex_input("0102", false),
            Err(InputError::Decode(DecodeError::MalformedMessage { len: 2, expected: 9 }))
        );
    }

    #[test]
    fn hex_input_extracts_manufacturer_records() {
        let device = decode_hex_input("1002aabb 0709 010e20085a22310305", true).unwrap();
        assert!(matches!(device, PodDevice::Dual(_)));
        assert_eq!(
            decode_hex_input("100100", true),
            Err(InputError::NoProximityRecord)
        );
        // a bare payload is not valid manufacturer data
        assert_eq!(
            decode_hex_input("010e20085a22310305", true),
            Err(InputError::NoProximityRecord)
        );
    }

    fn message_is_malformed(result: Result<PodDevice, DecodeError>) -> bool {
        matches!(result, Err(DecodeError::MalformedMessage { len: 1, .. }))
    }
}
