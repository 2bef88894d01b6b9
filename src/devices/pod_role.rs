//! Left/right assignment for per-pod fields.
//!
//! The advertisement stores pod data by role, not by side: one slot always
//! belongs to the pod currently hosting the microphone, the other to its
//! partner. Status bit 5 says which side the microphone pod is on. Every
//! per-pod field (battery, charging, in-ear) goes through [`PodRoles::assign`]
//! so the swap lives in one place.

use crate::bits::{is_bit_set, lower_nibble, upper_nibble};
use serde::Serialize;
use std::fmt::Display;

const MICROPHONE_LEFT_BIT: u8 = 5;

const IN_EAR_MICROPHONE_BIT: u8 = 1;
const IN_EAR_OTHER_BIT: u8 = 3;

// Bits of the case-battery upper nibble.
const CHARGING_MICROPHONE_BIT: u8 = 0;
const CHARGING_OTHER_BIT: u8 = 1;
const CASE_CHARGING_BIT: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Pod {
    Left,
    Right,
}

impl Display for Pod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pod::Left => write!(f, "Left"),
            Pod::Right => write!(f, "Right"),
        }
    }
}

pub type MicrophonePod = Pod;

/// A value for each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PerPod<T> {
    pub left: T,
    pub right: T,
}

/// Role-to-side mapping for one decoded status byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PodRoles {
    microphone: Pod,
}

impl PodRoles {
    pub fn from_status(status: u8) -> Self {
        let microphone = if is_bit_set(status, MICROPHONE_LEFT_BIT) {
            Pod::Left
        } else {
            Pod::Right
        };
        Self { microphone }
    }

    pub fn microphone_pod(&self) -> MicrophonePod {
        self.microphone
    }

    /// Places the microphone pod's value on its side and the other value
    /// on the opposite side.
    pub fn assign<T>(&self, microphone_slot: T, other_slot: T) -> PerPod<T> {
        match self.microphone {
            Pod::Left => PerPod {
                left: microphone_slot,
                right: other_slot,
            },
            Pod::Right => PerPod {
                left: other_slot,
                right: microphone_slot,
            },
        }
    }

    /// Battery nibbles: lower nibble is the microphone pod.
    pub fn battery_nibbles(&self, pods_battery: u8) -> PerPod<u8> {
        self.assign(lower_nibble(pods_battery), upper_nibble(pods_battery))
    }

    pub fn in_ear(&self, status: u8) -> PerPod<bool> {
        self.assign(
            is_bit_set(status, IN_EAR_MICROPHONE_BIT),
            is_bit_set(status, IN_EAR_OTHER_BIT),
        )
    }

    pub fn charging(&self, case_battery: u8) -> PerPod<bool> {
        let flags = upper_nibble(case_battery);
        self.assign(
            is_bit_set(flags, CHARGING_MICROPHONE_BIT),
            is_bit_set(flags, CHARGING_OTHER_BIT),
        )
    }
}

/// Case charging flag. Not affected by pod roles.
pub fn case_charging(case_battery: u8) -> bool {
    is_bit_set(upper_nibble(case_battery), CASE_CHARGING_BIT)
}
