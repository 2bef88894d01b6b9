use crate::devices::apple_models::APPLE_VENDOR_ID;
use crate::proximity::{ProximityMessage, extract_proximity_payload};
use bluer::monitor::{Monitor, MonitorEvent, Pattern};
use bluer::{Address, Device, DeviceEvent, DeviceProperty, Session};
use futures::StreamExt;
use log::{debug, info};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::SystemTime;
use tokio::sync::Mutex;
use tokio::sync::mpsc::UnboundedSender;

/// Addresses with a running watcher task. An address leaves the set when its
/// watcher ends, so a later `DeviceFound` starts a fresh one.
#[derive(Clone, Default)]
pub struct WatchSet {
    addresses: Arc<Mutex<HashSet<Address>>>,
}

impl WatchSet {
    /// False if `address` already has a watcher.
    pub async fn claim(&self, address: Address) -> bool {
        self.addresses.lock().await.insert(address)
    }

    pub async fn release(&self, address: Address) {
        self.addresses.lock().await.remove(&address);
    }

    pub async fn contains(&self, address: Address) -> bool {
        self.addresses.lock().await.contains(&address)
    }
}

fn forward(
    address: Address,
    manufacturer_data: &HashMap<u16, Vec<u8>>,
    rssi: Option<i16>,
    tx: &UnboundedSender<ProximityMessage>,
) -> bool {
    let Some(apple_data) = manufacturer_data.get(&APPLE_VENDOR_ID) else {
        return true;
    };
    let Some(payload) = extract_proximity_payload(apple_data) else {
        debug!("No proximity record from {}: {}", address, hex::encode(apple_data));
        return true;
    };
    debug!("Proximity payload from {}: {}", address, hex::encode(payload));
    tx.send(ProximityMessage {
        address: address.to_string(),
        received_at: SystemTime::now(),
        rssi,
        payload: payload.to_vec(),
    })
    .is_ok()
}

async fn watch_device(dev: Device, tx: UnboundedSender<ProximityMessage>) -> bluer::Result<()> {
    let address = dev.address();
    let mut rssi = dev.rssi().await?;
    if let Some(data) = dev.manufacturer_data().await? {
        if !forward(address, &data, rssi, &tx) {
            return Ok(());
        }
    }

    let mut events = dev.events().await?;
    while let Some(ev) = events.next().await {
        match ev {
            DeviceEvent::PropertyChanged(DeviceProperty::Rssi(value)) => rssi = Some(value),
            DeviceEvent::PropertyChanged(DeviceProperty::ManufacturerData(data)) => {
                if !forward(address, &data, rssi, &tx) {
                    break;
                }
            }
            _ => {}
        }
    }
    debug!("Stopped watching {}", address);
    Ok(())
}

/// Streams every proximity payload seen on `adapter_name` (or the default
/// adapter) into `tx` until the receiver is dropped or BlueZ fails.
pub async fn start_le_monitor(
    adapter_name: Option<&str>,
    tx: UnboundedSender<ProximityMessage>,
) -> bluer::Result<()> {
    let session = Session::new().await?;
    let adapter = match adapter_name {
        Some(name) => session.adapter(name)?,
        None => session.default_adapter().await?,
    };
    adapter.set_powered(true).await?;
    info!("Monitoring proximity advertisements on {}", adapter.name());

    let pattern = Pattern {
        data_type: 0xFF, // Manufacturer specific data
        start_position: 0,
        content: APPLE_VENDOR_ID.to_le_bytes().to_vec(),
    };

    let mm = adapter.monitor().await?;
    let mut monitor_handle = mm
        .register(Monitor {
            monitor_type: bluer::monitor::Type::OrPatterns,
            rssi_low_threshold: None,
            rssi_high_threshold: None,
            rssi_low_timeout: None,
            rssi_high_timeout: None,
            rssi_sampling_period: None,
            patterns: Some(vec![pattern]),
            ..Default::default()
        })
        .await?;

    debug!("Started LE monitor");

    let watched = WatchSet::default();
    while let Some(mevt) = monitor_handle.next().await {
        if tx.is_closed() {
            break;
        }
        match mevt {
            MonitorEvent::DeviceFound(devid) => {
                if !watched.claim(devid.device).await {
                    continue;
                }
                let dev = match adapter.device(devid.device) {
                    Ok(dev) => dev,
                    Err(e) => {
                        watched.release(devid.device).await;
                        return Err(e);
                    }
                };
                debug!("Watching {}", devid.device);
                let tx = tx.clone();
                let watched = watched.clone();
                tokio::spawn(async move {
                    let address = dev.address();
                    if let Err(e) = watch_device(dev, tx).await {
                        log::warn!("Lost {}: {}", address, e);
                    }
                    watched.release(address).await;
                });
            }
            // a running watcher keeps its event stream across loss and
            // rediscovery; an ended one has already released the address
            MonitorEvent::DeviceLost(devid) => debug!("Device lost: {}", devid.device),
            _ => {}
        }
    }

    Ok(())
}
