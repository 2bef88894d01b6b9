pub mod apple_models;
pub mod battery;
pub mod dual;
pub mod enums;
pub mod pod_role;
pub mod raw;
pub mod single;

use crate::devices::apple_models::{AppleModelInfo, DeviceShape};
use crate::devices::dual::DualPodState;
use crate::devices::enums::{ConnectionState, DeviceColor};
use crate::devices::raw::RawAdvertisement;
use crate::devices::single::SinglePodState;
use crate::error::DecodeError;
use serde::Serialize;
use std::fmt::Display;

/// Decodes a proximity payload with the two-pod layout.
pub fn decode(bytes: &[u8]) -> Result<DualPodState, DecodeError> {
    let raw = RawAdvertisement::try_from(bytes)?;
    Ok(DualPodState::from_raw(raw))
}

/// Decodes a proximity payload, picking the layout from the model field.
pub fn decode_device(bytes: &[u8]) -> Result<PodDevice, DecodeError> {
    let raw = RawAdvertisement::try_from(bytes)?;
    let product_id = apple_models::product_id(raw.fields().device_model());
    Ok(match apple_models::model_info(product_id).shape {
        DeviceShape::SinglePod => PodDevice::Single(SinglePodState::from_raw(raw)),
        DeviceShape::DualPod => PodDevice::Dual(DualPodState::from_raw(raw)),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", content = "state", rename_all = "snake_case")]
pub enum PodDevice {
    Single(SinglePodState),
    Dual(DualPodState),
}

impl PodDevice {
    pub fn model(&self) -> AppleModelInfo {
        match self {
            PodDevice::Single(s) => s.model(),
            PodDevice::Dual(s) => s.model(),
        }
    }

    pub fn product_id(&self) -> u16 {
        match self {
            PodDevice::Single(s) => s.product_id(),
            PodDevice::Dual(s) => s.product_id(),
        }
    }

    pub fn device_color(&self) -> DeviceColor {
        match self {
            PodDevice::Single(s) => s.device_color(),
            PodDevice::Dual(s) => s.device_color(),
        }
    }

    pub fn connection_state(&self) -> ConnectionState {
        match self {
            PodDevice::Single(s) => s.connection_state(),
            PodDevice::Dual(s) => s.connection_state(),
        }
    }

    pub fn raw(&self) -> &RawAdvertisement {
        match self {
            PodDevice::Single(s) => s.raw(),
            PodDevice::Dual(s) => s.raw(),
        }
    }
}

impl Display for PodDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PodDevice::Single(s) => write!(f, "{} (single)", s.model().name),
            PodDevice::Dual(s) => write!(f, "{} (dual)", s.model().name),
        }
    }
}
