use serde::Serialize;

/// How many batteries and ear sensors the advertisement describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceShape {
    /// Headphones or neckbands reporting a single battery.
    SinglePod,
    /// Two earbuds plus a charging case.
    DualPod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppleModelInfo {
    pub name: &'static str,
    pub shape: DeviceShape,
}

pub const APPLE_VENDOR_ID: u16 = 0x004c;

/// The model field as a Bluetooth product id. The advertisement carries it
/// byte-swapped, e.g. `0E 20` for product `0x200e`.
pub fn product_id(device_model: u16) -> u16 {
    device_model.swap_bytes()
}

pub fn model_info(product_id: u16) -> AppleModelInfo {
    use DeviceShape::{DualPod, SinglePod};
    match product_id {
        0x2002 => AppleModelInfo { name: "AirPods (1st gen)",   shape: DualPod },
        0x200f => AppleModelInfo { name: "AirPods (2nd gen)",   shape: DualPod },
        0x2013 => AppleModelInfo { name: "AirPods (3rd gen)",   shape: DualPod },
        0x2019 => AppleModelInfo { name: "AirPods (4th gen)",   shape: DualPod },
        0x201b => AppleModelInfo { name: "AirPods 4 ANC",       shape: DualPod },
        0x200e => AppleModelInfo { name: "AirPods Pro",         shape: DualPod },
        0x2014 => AppleModelInfo { name: "AirPods Pro 2",       shape: DualPod },
        0x2027 => AppleModelInfo { name: "AirPods Pro 3",       shape: DualPod },
        0x2024 => AppleModelInfo { name: "AirPods Pro (USB-C)", shape: DualPod },
        0x200a => AppleModelInfo { name: "AirPods Max",         shape: SinglePod },
        0x201f => AppleModelInfo { name: "AirPods Max (2024)",  shape: SinglePod },
        0x200b => AppleModelInfo { name: "Powerbeats Pro",      shape: DualPod },
        0x201d => AppleModelInfo { name: "Powerbeats Pro 2",    shape: DualPod },
        0x2006 => AppleModelInfo { name: "Beats Solo3",         shape: SinglePod },
        0x200c => AppleModelInfo { name: "Beats Solo Pro",      shape: SinglePod },
        0x2009 => AppleModelInfo { name: "Beats Studio3",       shape: SinglePod },
        0x2005 => AppleModelInfo { name: "Beats X",             shape: SinglePod },
        0x2010 => AppleModelInfo { name: "Beats Flex",          shape: SinglePod },
        0x2003 => AppleModelInfo { name: "Powerbeats3",         shape: SinglePod },
        0x200d => AppleModelInfo { name: "Powerbeats4",         shape: SinglePod },
        0x2012 => AppleModelInfo { name: "Beats Fit Pro",       shape: DualPod },
        0x2011 => AppleModelInfo { name: "Beats Studio Buds",   shape: DualPod },
        0x2016 => AppleModelInfo { name: "Beats Studio Buds+",  shape: DualPod },
        0x2017 => AppleModelInfo { name: "Beats Studio Pro",    shape: SinglePod },
        0x2025 => AppleModelInfo { name: "Beats Solo 4",        shape: SinglePod },
        0x2026 => AppleModelInfo { name: "Beats Solo Buds",     shape: DualPod },
        // Unknown model: the earbud layout is by far the most common
        _      => AppleModelInfo { name: "Apple Headphones",    shape: DualPod },
    }
}
