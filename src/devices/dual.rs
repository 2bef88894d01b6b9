use crate::devices::apple_models::{self, AppleModelInfo};
use crate::devices::battery::{BatteryAnomaly, BatteryComponent, BatteryLevel, decode_component};
use crate::devices::enums::{ConnectionState, DeviceColor, LidState, resolve};
use crate::devices::pod_role::{MicrophonePod, PerPod, PodRoles, case_charging};
use crate::devices::raw::RawAdvertisement;
use crate::bits::lower_nibble;
use log::debug;
use serde::Serialize;

/// Decoded state of two earbuds and their case, from one advertisement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DualPodState {
    device_model: u16,
    microphone_pod: MicrophonePod,
    battery: PerPod<BatteryLevel>,
    charging: PerPod<bool>,
    in_ear: PerPod<bool>,
    case_battery: BatteryLevel,
    case_charging: bool,
    lid_state: LidState,
    device_color: DeviceColor,
    connection_state: ConnectionState,
    anomalies: Vec<BatteryAnomaly>,
    raw: RawAdvertisement,
}

impl DualPodState {
    pub fn from_raw(raw: RawAdvertisement) -> Self {
        let fields = raw.fields();
        let roles = PodRoles::from_status(fields.status());
        let mut anomalies = Vec::new();

        let nibbles = roles.battery_nibbles(fields.pods_battery());
        let battery = PerPod {
            left: decode_component(BatteryComponent::Left, nibbles.left, &mut anomalies),
            right: decode_component(BatteryComponent::Right, nibbles.right, &mut anomalies),
        };
        let case_battery = decode_component(
            BatteryComponent::Case,
            lower_nibble(fields.case_battery()),
            &mut anomalies,
        );

        let state = Self {
            device_model: fields.device_model(),
            microphone_pod: roles.microphone_pod(),
            battery,
            charging: roles.charging(fields.case_battery()),
            in_ear: roles.in_ear(fields.status()),
            case_battery,
            case_charging: case_charging(fields.case_battery()),
            lid_state: resolve(fields.lid_state()),
            device_color: resolve(fields.device_color()),
            connection_state: resolve(fields.suffix()),
            anomalies,
            raw,
        };
        debug!("Decoded dual pod message {}: {:?}", state.raw.raw_hex(), state);
        state
    }

    /// Raw model field, big-endian as on the wire.
    pub fn device_model(&self) -> u16 {
        self.device_model
    }

    pub fn product_id(&self) -> u16 {
        apple_models::product_id(self.device_model)
    }

    pub fn model(&self) -> AppleModelInfo {
        apple_models::model_info(self.product_id())
    }

    pub fn microphone_pod(&self) -> MicrophonePod {
        self.microphone_pod
    }

    pub fn battery_left(&self) -> BatteryLevel {
        self.battery.left
    }

    pub fn battery_right(&self) -> BatteryLevel {
        self.battery.right
    }

    pub fn battery_case(&self) -> BatteryLevel {
        self.case_battery
    }

    pub fn is_left_charging(&self) -> bool {
        self.charging.left
    }

    pub fn is_right_charging(&self) -> bool {
        self.charging.right
    }

    pub fn is_case_charging(&self) -> bool {
        self.case_charging
    }

    pub fn is_left_in_ear(&self) -> bool {
        self.in_ear.left
    }

    pub fn is_right_in_ear(&self) -> bool {
        self.in_ear.right
    }

    pub fn lid_state(&self) -> LidState {
        self.lid_state
    }

    pub fn device_color(&self) -> DeviceColor {
        self.device_color
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.connection_state
    }

    /// Battery nibbles that were above range and clamped.
    pub fn anomalies(&self) -> &[BatteryAnomaly] {
        &self.anomalies
    }

    pub fn raw(&self) -> &RawAdvertisement {
        &self.raw
    }
}
