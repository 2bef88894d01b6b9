//! Decoding of the proximity-pairing advertisement that two-pod earbuds
//! broadcast while their case is open or the pods are in use.
//!
//! The entry points are [`decode`] for the dual-pod layout and
//! [`decode_device`] when the model field should pick the device shape.

pub mod bits;
#[cfg(feature = "monitor")]
pub mod bluetooth;
pub mod config;
pub mod devices;
pub mod error;
pub mod labels;
pub mod proximity;
pub mod render;

pub use devices::battery::{BatteryAnomaly, BatteryComponent, BatteryLevel};
pub use devices::dual::DualPodState;
pub use devices::enums::{ConnectionState, DeviceColor, LidState, RawEnum, resolve};
pub use devices::pod_role::{MicrophonePod, PerPod, Pod};
pub use devices::raw::{MIN_MESSAGE_LENGTH, RawAdvertisement, RawFields};
pub use devices::single::SinglePodState;
pub use devices::{PodDevice, decode, decode_device};
pub use error::{DecodeError, InputError};
pub use labels::{EnglishLabels, LabelResolver};
