//! Text and JSON views of decoded devices for the command line.

use crate::devices::PodDevice;
use crate::devices::dual::DualPodState;
use crate::devices::enums::{DeviceColor, LidState};
use crate::devices::pod_role::Pod;
use crate::devices::single::SinglePodState;
use crate::labels::LabelResolver;
use serde::Serialize;

fn title(device: &PodDevice, labels: &dyn LabelResolver) -> String {
    let mut title = device.model().name.to_string();
    if device.device_color() != DeviceColor::Unknown {
        title.push_str(&format!(" ({})", labels.device_color(device.device_color())));
    }
    title
}

fn pod_line(state: &DualPodState, pod: Pod, labels: &dyn LabelResolver) -> String {
    let (battery, charging, in_ear) = match pod {
        Pod::Left => (state.battery_left(), state.is_left_charging(), state.is_left_in_ear()),
        Pod::Right => (state.battery_right(), state.is_right_charging(), state.is_right_in_ear()),
    };
    let mut line = format!("{}: {}", labels.pod(pod), labels.battery(battery));
    if charging {
        line.push_str(&format!(", {}", labels.charging()));
    } else if in_ear {
        line.push_str(&format!(", {}", labels.in_ear()));
    }
    if state.microphone_pod() == pod {
        line.push_str(&format!(" ({})", labels.microphone()));
    }
    line
}

fn dual_lines(state: &DualPodState, labels: &dyn LabelResolver) -> Vec<String> {
    let mut case = format!("{}: {}", labels.case(), labels.battery(state.battery_case()));
    if state.is_case_charging() {
        case.push_str(&format!(", {}", labels.charging()));
    }
    match state.lid_state() {
        LidState::Open | LidState::Closed => {
            case.push_str(&format!(", {}", labels.lid_state(state.lid_state())));
        }
        LidState::NotInCase | LidState::Unknown => {}
    }
    vec![
        pod_line(state, Pod::Left, labels),
        pod_line(state, Pod::Right, labels),
        case,
    ]
}

fn single_lines(state: &SinglePodState, labels: &dyn LabelResolver) -> Vec<String> {
    let mut line = labels.battery(state.battery()).into_owned();
    if state.is_charging() {
        line.push_str(&format!(", {}", labels.charging()));
    }
    vec![line]
}

/// Multi-line summary of `device`, indented under its title.
pub fn render_text(device: &PodDevice, labels: &dyn LabelResolver, show_raw_data: bool) -> String {
    let mut lines = vec![title(device, labels)];
    let body = match device {
        PodDevice::Single(s) => single_lines(s, labels),
        PodDevice::Dual(s) => dual_lines(s, labels),
    };
    lines.extend(body.into_iter().map(|l| format!("  {}", l)));
    lines.push(format!("  {}", labels.connection_state(device.connection_state())));
    if show_raw_data {
        lines.push(format!("  raw: {}", device.raw().raw_hex()));
    }
    lines.join("\n")
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    model: &'a str,
    product_id: String,
    device: &'a PodDevice,
}

pub fn render_json(device: &PodDevice) -> serde_json::Result<String> {
    serde_json::to_string(&JsonRecord {
        model: device.model().name,
        product_id: format!("0x{:04x}", device.product_id()),
        device,
    })
}
