use log::debug;
use serde::Serialize;

/// A closed set of variants decoded from one raw byte.
///
/// `from_byte` is total: anything outside the known table becomes the
/// `Unknown` variant, since newer hardware can send values we have not seen.
pub trait RawEnum: Sized + Copy + 'static {
    /// Every variant, `Unknown` last.
    const ALL: &'static [Self];

    fn from_byte(value: u8) -> Self;

    /// The wire value, `None` for `Unknown`.
    fn to_byte(&self) -> Option<u8>;
}

pub fn resolve<E: RawEnum>(raw: u8) -> E {
    E::from_byte(raw)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LidState {
    Open,
    Closed,
    NotInCase,
    Unknown,
}

impl RawEnum for LidState {
    const ALL: &'static [Self] = &[
        LidState::Open,
        LidState::Closed,
        LidState::NotInCase,
        LidState::Unknown,
    ];

    fn from_byte(value: u8) -> Self {
        match value {
            0x31 => LidState::Open,
            0x38 => LidState::Closed,
            0x01 => LidState::NotInCase,
            _ => {
                debug!("Unknown lid state 0x{:02x}", value);
                LidState::Unknown
            }
        }
    }

    fn to_byte(&self) -> Option<u8> {
        match self {
            LidState::Open => Some(0x31),
            LidState::Closed => Some(0x38),
            LidState::NotInCase => Some(0x01),
            LidState::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceColor {
    White,
    Black,
    Red,
    Blue,
    Pink,
    Gray,
    Silver,
    Gold,
    RoseGold,
    SpaceGray,
    DarkBlue,
    LightBlue,
    Yellow,
    Unknown,
}

impl RawEnum for DeviceColor {
    const ALL: &'static [Self] = &[
        DeviceColor::White,
        DeviceColor::Black,
        DeviceColor::Red,
        DeviceColor::Blue,
        DeviceColor::Pink,
        DeviceColor::Gray,
        DeviceColor::Silver,
        DeviceColor::Gold,
        DeviceColor::RoseGold,
        DeviceColor::SpaceGray,
        DeviceColor::DarkBlue,
        DeviceColor::LightBlue,
        DeviceColor::Yellow,
        DeviceColor::Unknown,
    ];

    fn from_byte(value: u8) -> Self {
        match value {
            0x00 => DeviceColor::White,
            0x01 => DeviceColor::Black,
            0x02 => DeviceColor::Red,
            0x03 => DeviceColor::Blue,
            0x04 => DeviceColor::Pink,
            0x05 => DeviceColor::Gray,
            0x06 => DeviceColor::Silver,
            0x07 => DeviceColor::Gold,
            0x08 => DeviceColor::RoseGold,
            0x09 => DeviceColor::SpaceGray,
            0x0a => DeviceColor::DarkBlue,
            0x0b => DeviceColor::LightBlue,
            0x0c => DeviceColor::Yellow,
            _ => {
                debug!("Unknown device color 0x{:02x}", value);
                DeviceColor::Unknown
            }
        }
    }

    fn to_byte(&self) -> Option<u8> {
        match self {
            DeviceColor::White => Some(0x00),
            DeviceColor::Black => Some(0x01),
            DeviceColor::Red => Some(0x02),
            DeviceColor::Blue => Some(0x03),
            DeviceColor::Pink => Some(0x04),
            DeviceColor::Gray => Some(0x05),
            DeviceColor::Silver => Some(0x06),
            DeviceColor::Gold => Some(0x07),
            DeviceColor::RoseGold => Some(0x08),
            DeviceColor::SpaceGray => Some(0x09),
            DeviceColor::DarkBlue => Some(0x0a),
            DeviceColor::LightBlue => Some(0x0b),
            DeviceColor::Yellow => Some(0x0c),
            DeviceColor::Unknown => None,
        }
    }
}

/// What the pods are doing with the paired source, taken from the suffix byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    Disconnected,
    Idle,
    Music,
    Call,
    Ringing,
    HangingUp,
    Unknown,
}

impl RawEnum for ConnectionState {
    const ALL: &'static [Self] = &[
        ConnectionState::Disconnected,
        ConnectionState::Idle,
        ConnectionState::Music,
        ConnectionState::Call,
        ConnectionState::Ringing,
        ConnectionState::HangingUp,
        ConnectionState::Unknown,
    ];

    fn from_byte(value: u8) -> Self {
        match value {
            0x00 => ConnectionState::Disconnected,
            0x04 => ConnectionState::Idle,
            0x05 => ConnectionState::Music,
            0x06 => ConnectionState::Call,
            0x07 => ConnectionState::Ringing,
            0x09 => ConnectionState::HangingUp,
            _ => {
                debug!("Unknown connection state 0x{:02x}", value);
                ConnectionState::Unknown
            }
        }
    }

    fn to_byte(&self) -> Option<u8> {
        match self {
            ConnectionState::Disconnected => Some(0x00),
            ConnectionState::Idle => Some(0x04),
            ConnectionState::Music => Some(0x05),
            ConnectionState::Call => Some(0x06),
            ConnectionState::Ringing => Some(0x07),
            ConnectionState::HangingUp => Some(0x09),
            ConnectionState::Unknown => None,
        }
    }
}
