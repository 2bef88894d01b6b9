use pods_proximity::{
    BatteryComponent, BatteryLevel, ConnectionState, DecodeError, DeviceColor, LidState,
    MIN_MESSAGE_LENGTH, MicrophonePod, PodDevice, decode, decode_device,
};

// AirPods Pro, everything zeroed, lid open
const DEFAULT_PACKET: [u8; 9] = [0x01, 0x0E, 0x20, 0x00, 0x00, 0x00, 0x31, 0x00, 0x00];

#[test]
fn should_reject_short_packets() {
    for len in 0..MIN_MESSAGE_LENGTH {
        assert_eq!(
            decode(&DEFAULT_PACKET[..len]),
            Err(DecodeError::MalformedMessage {
                len,
                expected: MIN_MESSAGE_LENGTH
            })
        );
    }
    assert!(decode(&DEFAULT_PACKET).is_ok());
}

#[test]
fn should_decode_full_length_packets() {
    // a real proximity record is 25 bytes long
    let mut packet = DEFAULT_PACKET.to_vec();
    packet.resize(25, 0xEE);
    let state = decode(&packet).unwrap();
    assert_eq!(state.raw().as_bytes().len(), 25);
    assert_eq!(state.lid_state(), LidState::Open);
}

#[test]
fn should_decode_reference_packet() {
    let packet = [0x01, 0x0E, 0x20, 0x08, 0x5A, 0x22, 0x31, 0x03, 0x05];
    let state = decode(&packet).unwrap();

    assert_eq!(state.microphone_pod(), MicrophonePod::Right);
    assert_eq!(state.battery_left().fraction(), Some(0.5));
    assert_eq!(state.battery_right().fraction(), Some(1.0));
    assert_eq!(state.battery_case().fraction(), Some(0.2));
    assert!(!state.is_case_charging());
    assert!(state.is_left_in_ear());
    assert!(!state.is_right_in_ear());
    assert_eq!(state.lid_state(), LidState::Open);
    assert_eq!(state.device_color(), DeviceColor::Blue);
    assert_eq!(state.connection_state(), ConnectionState::Music);
    assert!(state.anomalies().is_empty());
    assert_eq!(state.raw().as_bytes(), &packet[..]);
}

#[test]
fn should_swap_pods_with_status_bit_five() {
    for pods_battery in [0x5A, 0x19, 0xF3, 0x07] {
        for status in [0x00, 0x02, 0x08, 0x0A, 0x4B] {
            let mut packet = DEFAULT_PACKET;
            packet[4] = pods_battery;
            packet[5] = 0x30; // both pod charging bits
            packet[3] = status | 0x20;
            let left_mic = decode(&packet).unwrap();
            packet[3] = status & !0x20;
            let right_mic = decode(&packet).unwrap();

            assert_eq!(left_mic.microphone_pod(), MicrophonePod::Left);
            assert_eq!(right_mic.microphone_pod(), MicrophonePod::Right);
            assert_eq!(left_mic.battery_left(), right_mic.battery_right());
            assert_eq!(left_mic.battery_right(), right_mic.battery_left());
            assert_eq!(left_mic.is_left_in_ear(), right_mic.is_right_in_ear());
            assert_eq!(left_mic.is_right_in_ear(), right_mic.is_left_in_ear());
            assert_eq!(left_mic.battery_case(), right_mic.battery_case());
        }
    }
}

#[test]
fn should_swap_charging_flags_but_not_case_charging() {
    let mut packet = DEFAULT_PACKET;
    packet[5] = 0x55; // upper nibble 0b0101: microphone pod and case charging
    packet[3] = 0x20;
    let left_mic = decode(&packet).unwrap();
    assert!(left_mic.is_left_charging());
    assert!(!left_mic.is_right_charging());
    assert!(left_mic.is_case_charging());

    packet[3] = 0x00;
    let right_mic = decode(&packet).unwrap();
    assert!(!right_mic.is_left_charging());
    assert!(right_mic.is_right_charging());
    assert!(right_mic.is_case_charging());
}

#[test]
fn should_decode_battery_edge_values() {
    let mut packet = DEFAULT_PACKET;
    packet[3] = 0x20;

    packet[4] = 0xF5;
    let state = decode(&packet).unwrap();
    assert_eq!(state.battery_left().fraction(), Some(0.5));
    assert_eq!(state.battery_right(), BatteryLevel::UNKNOWN);

    packet[4] = 0x0C;
    packet[5] = 0x0F;
    let state = decode(&packet).unwrap();
    assert_eq!(state.battery_left().fraction(), Some(1.0));
    assert_eq!(state.battery_right().fraction(), Some(0.0));
    assert_eq!(state.battery_case(), BatteryLevel::UNKNOWN);
    assert_eq!(state.anomalies().len(), 1);
    assert_eq!(state.anomalies()[0].component, BatteryComponent::Left);
    assert_eq!(state.anomalies()[0].raw, 12);
}

#[test]
fn should_fall_back_to_unknown_variants() {
    let mut packet = DEFAULT_PACKET;
    packet[6] = 0xFF;
    packet[7] = 0x7F;
    packet[8] = 0x02;
    let state = decode(&packet).unwrap();
    assert_eq!(state.lid_state(), LidState::Unknown);
    assert_eq!(state.device_color(), DeviceColor::Unknown);
    assert_eq!(state.connection_state(), ConnectionState::Unknown);
}

#[test]
fn should_always_produce_a_state_for_any_status_byte() {
    let mut packet = DEFAULT_PACKET;
    for status in 0..=u8::MAX {
        packet[3] = status;
        for other in [0x00, 0x7F, 0xFF] {
            packet[4] = other;
            packet[5] = other;
            packet[6] = other;
            packet[7] = other;
            packet[8] = other;
            assert!(decode(&packet).is_ok());
        }
    }
}

#[test]
fn should_be_idempotent() {
    let packet = [0x01, 0x14, 0x20, 0x2B, 0x9C, 0x6E, 0x38, 0x0a, 0x07];
    assert_eq!(decode(&packet).unwrap(), decode(&packet).unwrap());
    assert_eq!(decode_device(&packet).unwrap(), decode_device(&packet).unwrap());
}

#[test]
fn should_pick_device_shape_from_model() {
    let mut packet = DEFAULT_PACKET;
    packet[1..3].copy_from_slice(&[0x0A, 0x20]); // AirPods Max
    match decode_device(&packet).unwrap() {
        PodDevice::Single(state) => assert_eq!(state.model().name, "AirPods Max"),
        other => panic!("expected a single pod device, got {}", other),
    }

    packet[1..3].copy_from_slice(&[0x0F, 0x20]); // AirPods (2nd gen)
    assert!(matches!(decode_device(&packet).unwrap(), PodDevice::Dual(_)));
}

#[test]
fn should_decode_on_many_threads() {
    let handles: Vec<_> = (0..8u8)
        .map(|i| {
            std::thread::spawn(move || {
                let mut packet = DEFAULT_PACKET;
                packet[4] = i;
                decode(&packet).unwrap()
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let state = handle.join().unwrap();
        assert_eq!(state.battery_right().percent(), Some(i as u8 * 10));
    }
}
