//! Display text for decoded values.
//!
//! Decoding never produces text; front-ends pick a [`LabelResolver`] and ask
//! it for each variant.

use crate::devices::battery::BatteryLevel;
use crate::devices::enums::{ConnectionState, DeviceColor, LidState};
use crate::devices::pod_role::Pod;
use std::borrow::Cow;

pub trait LabelResolver: Send + Sync {
    fn unknown(&self) -> Cow<'static, str>;

    fn pod(&self, pod: Pod) -> Cow<'static, str>;

    fn lid_state(&self, state: LidState) -> Cow<'static, str>;

    fn device_color(&self, color: DeviceColor) -> Cow<'static, str>;

    fn connection_state(&self, state: ConnectionState) -> Cow<'static, str>;

    fn case(&self) -> Cow<'static, str>;

    fn charging(&self) -> Cow<'static, str>;

    fn in_ear(&self) -> Cow<'static, str>;

    fn microphone(&self) -> Cow<'static, str>;

    fn battery(&self, level: BatteryLevel) -> Cow<'static, str> {
        match level.percent() {
            Some(percent) => Cow::Owned(format!("{}%", percent)),
            None => self.unknown(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLabels;

impl LabelResolver for EnglishLabels {
    fn unknown(&self) -> Cow<'static, str> {
        "Unknown".into()
    }

    fn pod(&self, pod: Pod) -> Cow<'static, str> {
        match pod {
            Pod::Left => "Left pod".into(),
            Pod::Right => "Right pod".into(),
        }
    }

    fn lid_state(&self, state: LidState) -> Cow<'static, str> {
        match state {
            LidState::Open => "Lid open".into(),
            LidState::Closed => "Lid closed".into(),
            LidState::NotInCase => "Not in case".into(),
            LidState::Unknown => self.unknown(),
        }
    }

    fn device_color(&self, color: DeviceColor) -> Cow<'static, str> {
        match color {
            DeviceColor::White => "White".into(),
            DeviceColor::Black => "Black".into(),
            DeviceColor::Red => "Red".into(),
            DeviceColor::Blue => "Blue".into(),
            DeviceColor::Pink => "Pink".into(),
            DeviceColor::Gray => "Gray".into(),
            DeviceColor::Silver => "Silver".into(),
            DeviceColor::Gold => "Gold".into(),
            DeviceColor::RoseGold => "Rose Gold".into(),
            DeviceColor::SpaceGray => "Space Gray".into(),
            DeviceColor::DarkBlue => "Dark Blue".into(),
            DeviceColor::LightBlue => "Light Blue".into(),
            DeviceColor::Yellow => "Yellow".into(),
            DeviceColor::Unknown => self.unknown(),
        }
    }

    fn connection_state(&self, state: ConnectionState) -> Cow<'static, str> {
        match state {
            ConnectionState::Disconnected => "Disconnected".into(),
            ConnectionState::Idle => "Idle".into(),
            ConnectionState::Music => "Playing music".into(),
            ConnectionState::Call => "On a call".into(),
            ConnectionState::Ringing => "Ringing".into(),
            ConnectionState::HangingUp => "Hanging up".into(),
            ConnectionState::Unknown => self.unknown(),
        }
    }

    fn case(&self) -> Cow<'static, str> {
        "Case".into()
    }

    fn charging(&self) -> Cow<'static, str> {
        "Charging".into()
    }

    fn in_ear(&self) -> Cow<'static, str> {
        "In ear".into()
    }

    fn microphone(&self) -> Cow<'static, str> {
        "Microphone".into()
    }
}
