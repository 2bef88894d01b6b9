use serde::{Serialize, Serializer};
use std::fmt::Display;

/// Nibble value the hardware sends when it has no reading.
pub const UNKNOWN_BATTERY_NIBBLE: u8 = 15;
const FULL_BATTERY_NIBBLE: u8 = 10;

/// A battery charge in tenths, or unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BatteryLevel(Option<u8>);

impl BatteryLevel {
    pub const UNKNOWN: BatteryLevel = BatteryLevel(None);

    /// 0.0 to 1.0.
    pub fn fraction(&self) -> Option<f32> {
        self.0.map(|tenths| tenths as f32 / 10.0)
    }

    pub fn percent(&self) -> Option<u8> {
        self.0.map(|tenths| tenths * 10)
    }
}

impl Serialize for BatteryLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.fraction() {
            Some(fraction) => serializer.serialize_some(&fraction),
            None => serializer.serialize_none(),
        }
    }
}

/// Result of decoding one battery nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryReading {
    pub level: BatteryLevel,
    /// The raw nibble when it was above the documented 0-10 range.
    pub anomaly: Option<u8>,
}

pub fn decode_battery(nibble: u8) -> BatteryReading {
    match nibble {
        UNKNOWN_BATTERY_NIBBLE => BatteryReading {
            level: BatteryLevel::UNKNOWN,
            anomaly: None,
        },
        0..=FULL_BATTERY_NIBBLE => BatteryReading {
            level: BatteryLevel(Some(nibble)),
            anomaly: None,
        },
        _ => BatteryReading {
            level: BatteryLevel(Some(FULL_BATTERY_NIBBLE)),
            anomaly: Some(nibble),
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatteryComponent {
    Left,
    Right,
    Case,
    Headset,
}

impl Display for BatteryComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatteryComponent::Left => write!(f, "Left pod"),
            BatteryComponent::Right => write!(f, "Right pod"),
            BatteryComponent::Case => write!(f, "Case"),
            BatteryComponent::Headset => write!(f, "Headset"),
        }
    }
}

/// A battery nibble above 10 that was clamped to 100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BatteryAnomaly {
    pub component: BatteryComponent,
    pub raw: u8,
}

/// Decodes `nibble` for `component`, recording and logging any anomaly.
pub(crate) fn decode_component(
    component: BatteryComponent,
    nibble: u8,
    anomalies: &mut Vec<BatteryAnomaly>,
) -> BatteryLevel {
    let reading = decode_battery(nibble);
    if let Some(raw) = reading.anomaly {
        log::warn!("{}: Above 100% battery: {}", component, raw);
        anomalies.push(BatteryAnomaly { component, raw });
    }
    reading.level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifteen_is_unknown() {
        let reading = decode_battery(15);
        assert_eq!(reading.level, BatteryLevel::UNKNOWN);
        assert_eq!(reading.level.fraction(), None);
        assert_eq!(reading.anomaly, None);
    }

    #[test]
    fn in_range_values_are_tenths() {
        assert_eq!(decode_battery(0).level.fraction(), Some(0.0));
        assert_eq!(decode_battery(5).level.fraction(), Some(0.5));
        assert_eq!(decode_battery(10).level.fraction(), Some(1.0));
        assert_eq!(decode_battery(7).level.percent(), Some(70));
        for nibble in 0..=10 {
            assert_eq!(decode_battery(nibble).anomaly, None);
        }
    }

    #[test]
    fn above_range_is_clamped_and_flagged() {
        for nibble in 11..=14 {
            let reading = decode_battery(nibble);
            assert_eq!(reading.level.fraction(), Some(1.0));
            assert_eq!(reading.anomaly, Some(nibble));
        }
        assert_eq!(decode_battery(12).anomaly, Some(12));
    }

    #[test]
    fn component_decoding_collects_anomalies() {
        let mut anomalies = Vec::new();
        let level = decode_component(BatteryComponent::Case, 13, &mut anomalies);
        assert_eq!(level.percent(), Some(100));
        assert_eq!(
            anomalies,
            vec![BatteryAnomaly {
                component: BatteryComponent::Case,
                raw: 13
            }]
        );

        decode_component(BatteryComponent::Left, 4, &mut anomalies);
        assert_eq!(anomalies.len(), 1);
    }

    #[test]
    fn serializes_as_fraction_or_null() {
        assert_eq!(serde_json::to_string(&decode_battery(5).level).unwrap(), "0.5");
        assert_eq!(serde_json::to_string(&BatteryLevel::UNKNOWN).unwrap(), "null");
    }
}
