use crate::bits::{is_bit_set, lower_nibble, upper_nibble};
use crate::devices::apple_models::{self, AppleModelInfo};
use crate::devices::battery::{BatteryAnomaly, BatteryComponent, BatteryLevel, decode_component};
use crate::devices::enums::{ConnectionState, DeviceColor, resolve};
use crate::devices::raw::RawAdvertisement;
use log::debug;
use serde::Serialize;

const WORN_BIT: u8 = 1;
const CHARGING_BIT: u8 = 0;

/// Headphones with one battery. Uses the same header fields as the earbud
/// layout but has no case and no pod roles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SinglePodState {
    device_model: u16,
    battery: BatteryLevel,
    charging: bool,
    worn: bool,
    device_color: DeviceColor,
    connection_state: ConnectionState,
    anomalies: Vec<BatteryAnomaly>,
    raw: RawAdvertisement,
}

impl SinglePodState {
    pub fn from_raw(raw: RawAdvertisement) -> Self {
        let fields = raw.fields();
        let mut anomalies = Vec::new();
        let battery = decode_component(
            BatteryComponent::Headset,
            lower_nibble(fields.pods_battery()),
            &mut anomalies,
        );
        let state = Self {
            device_model: fields.device_model(),
            battery,
            charging: is_bit_set(upper_nibble(fields.case_battery()), CHARGING_BIT),
            worn: is_bit_set(fields.status(), WORN_BIT),
            device_color: resolve(fields.device_color()),
            connection_state: resolve(fields.suffix()),
            anomalies,
            raw,
        };
        debug!("Decoded single pod message {}: {:?}", state.raw.raw_hex(), state);
        state
    }

    pub fn device_model(&self) -> u16 {
        self.device_model
    }

    pub fn product_id(&self) -> u16 {
        apple_models::product_id(self.device_model)
    }

    pub fn model(&self) -> AppleModelInfo {
        apple_models::model_info(self.product_id())
    }

    pub fn battery(&self) -> BatteryLevel {
        self.battery
    }

    pub fn is_charging(&self) -> bool {
        self.charging
    }

    pub fn is_worn(&self) -> bool {
        self.worn
    }

    pub fn device_color(&self) -> DeviceColor {
        self.device_color
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.connection_state
    }

    pub fn anomalies(&self) -> &[BatteryAnomaly] {
        &self.anomalies
    }

    pub fn raw(&self) -> &RawAdvertisement {
        &self.raw
    }
}
