use thiserror::Error;

/// Hard failures of a single decode call.
///
/// Unknown enum values and out-of-range battery nibbles are not errors;
/// they decode to `Unknown` variants and [`crate::BatteryAnomaly`] records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("malformed proximity message: {len} bytes, need at least {expected}")]
    MalformedMessage { len: usize, expected: usize },
}

/// Failures turning user-supplied hex into a decoded device.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("no proximity record in manufacturer data")]
    NoProximityRecord,
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
