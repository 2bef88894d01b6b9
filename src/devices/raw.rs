use crate::error::DecodeError;
use serde::{Serialize, Serializer};

/// Prefix through suffix.
pub const MIN_MESSAGE_LENGTH: usize = 9;

const PREFIX: usize = 0;
const DEVICE_MODEL: usize = 1;
const STATUS: usize = 3;
const PODS_BATTERY: usize = 4;
const CASE_BATTERY: usize = 5;
const LID_STATE: usize = 6;
const DEVICE_COLOR: usize = 7;
const SUFFIX: usize = 8;

fn check_length(data: &[u8]) -> Result<(), DecodeError> {
    if data.len() < MIN_MESSAGE_LENGTH {
        return Err(DecodeError::MalformedMessage {
            len: data.len(),
            expected: MIN_MESSAGE_LENGTH,
        });
    }
    Ok(())
}

/// The vendor payload of one proximity-pairing advertisement.
///
/// Holding one of these means the length has already been checked, so
/// field extraction can't fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawAdvertisement {
    data: Vec<u8>,
}

impl RawAdvertisement {
    pub fn new(data: Vec<u8>) -> Result<Self, DecodeError> {
        check_length(&data)?;
        Ok(Self { data })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn fields(&self) -> RawFields<'_> {
        RawFields { data: &self.data }
    }

    /// Lowercase hex of the whole payload, for debug display.
    pub fn raw_hex(&self) -> String {
        hex::encode(&self.data)
    }
}

impl TryFrom<&[u8]> for RawAdvertisement {
    type Error = DecodeError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Self::new(data.to_vec())
    }
}

impl Serialize for RawAdvertisement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw_hex())
    }
}

/// Named offsets into a payload. Borrowed, never outlives the bytes.
#[derive(Debug, Clone, Copy)]
pub struct RawFields<'a> {
    data: &'a [u8],
}

impl<'a> RawFields<'a> {
    pub fn new(data: &'a [u8]) -> Result<Self, DecodeError> {
        check_length(data)?;
        Ok(Self { data })
    }

    pub fn prefix(&self) -> u8 {
        self.data[PREFIX]
    }

    /// Bytes 1-2, big-endian as they appear on the wire.
    pub fn device_model(&self) -> u16 {
        u16::from_be_bytes([self.data[DEVICE_MODEL], self.data[DEVICE_MODEL + 1]])
    }

    pub fn status(&self) -> u8 {
        self.data[STATUS]
    }

    pub fn pods_battery(&self) -> u8 {
        self.data[PODS_BATTERY]
    }

    pub fn case_battery(&self) -> u8 {
        self.data[CASE_BATTERY]
    }

    pub fn lid_state(&self) -> u8 {
        self.data[LID_STATE]
    }

    pub fn device_color(&self) -> u8 {
        self.data[DEVICE_COLOR]
    }

    pub fn suffix(&self) -> u8 {
        self.data[SUFFIX]
    }
}
