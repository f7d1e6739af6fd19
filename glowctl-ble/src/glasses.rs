use btleplug::api::{Characteristic, Peripheral as _, WriteType};
use btleplug::platform::Peripheral;
use tracing::{debug, info};

use crate::discovery;
use crate::Error;

use glowctl_proto::ble::commands;

/// A connected pair of glasses and the characteristic that takes their
/// command frames. Built once at startup and kept for the life of the
/// process.
pub struct Glasses {
    peripheral: Peripheral,
    characteristic: Characteristic,
    name: String,
}

impl Glasses {
    /// Connects to a discovered peripheral and resolves its command
    /// characteristic.
    pub async fn connect(peripheral: Peripheral) -> Result<Self, Error> {
        let name = device_name(&peripheral).await;
        info!(addr = %peripheral.address(), "connecting to: {name}");
        peripheral.connect().await.map_err(Error::Connect)?;

        info!("inspecting GATT services...");
        let characteristic = discovery::find_characteristic(&peripheral).await?;

        Ok(Self {
            peripheral,
            characteristic,
            name,
        })
    }

    /// Advertised device name, for display.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn on(&self) -> Result<(), Error> {
        self.call(&commands::ON).await
    }

    pub async fn off(&self) -> Result<(), Error> {
        self.call(&commands::OFF).await
    }

    /// Writes a raw command frame. The glasses don't answer; a failed
    /// write is reported to the caller, not retried.
    pub async fn call(&self, frame: &[u8]) -> Result<(), Error> {
        debug!(frame = ?frame, "writing command");
        self.peripheral
            .write(&self.characteristic, frame, WriteType::WithResponse)
            .await
            .map_err(Error::Write)
    }
}

async fn device_name(peripheral: &Peripheral) -> String {
    match peripheral.properties().await {
        Ok(Some(props)) => props.local_name.unwrap_or_else(|| "Unknown".to_string()),
        _ => "Unknown".to_string(),
    }
}
