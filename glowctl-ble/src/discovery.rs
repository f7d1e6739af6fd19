//! Device discovery
//!
//! Finds the glasses by their advertised service UUID, then the
//! characteristic to drive them through. Both searches poll at a fixed
//! interval and only give up on a transport error; bounding the wait is
//! the caller's business (drop the future, or wrap it in
//! `tokio::time::timeout`).

use std::future::Future;
use std::time::Duration;

use btleplug::api::{Central, Characteristic, Manager as _, Peripheral as _, ScanFilter};
use btleplug::platform::{Adapter, Manager, Peripheral};
use tracing::{debug, info, warn};

use crate::Error;

use glowctl_proto::ble::SERVICE_UUID;

/// How long to wait between polls while a search comes up empty.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// First adapter the platform reports.
pub async fn default_adapter() -> Result<Adapter, Error> {
    let manager = Manager::new().await.map_err(Error::Adapter)?;
    let adapters = manager.adapters().await.map_err(Error::Adapter)?;
    let adapter = adapters.into_iter().next().ok_or(Error::NoAdapter)?;
    match adapter.adapter_info().await {
        Ok(info) => info!(%info, "found adapter"),
        Err(err) => debug!(error = %err, "adapter info unavailable"),
    }
    Ok(adapter)
}

/// Scans until a device advertising the glasses service shows up.
///
/// Discovery mode is switched off again on every exit path, error ones
/// included.
pub async fn find_glasses(adapter: &Adapter) -> Result<Peripheral, Error> {
    debug!("enabling discovery...");
    adapter
        .start_scan(ScanFilter::default())
        .await
        .map_err(Error::StartScan)?;

    let found = poll_until(POLL_INTERVAL, || next_advertiser(adapter)).await;

    if let Err(err) = adapter.stop_scan().await {
        warn!(error = %err, "couldn't disable discovery");
    }
    found
}

async fn next_advertiser(adapter: &Adapter) -> Result<Option<Peripheral>, Error> {
    for peripheral in adapter.peripherals().await.map_err(Error::ListDevices)? {
        let Some(props) = peripheral.properties().await.map_err(Error::ListDevices)? else {
            continue;
        };
        let name = props.local_name.as_deref().unwrap_or("Unknown");
        debug!(addr = %peripheral.address(), uuids = ?props.services, "found: {name}");
        if props.services.contains(&SERVICE_UUID) {
            return Ok(Some(peripheral));
        }
    }
    info!("waiting for device to appear...");
    Ok(None)
}

/// Waits for service discovery to surface a characteristic and returns
/// the first one enumerated, whatever its UUID or flags. The glasses
/// expose a single writable characteristic; a device with a richer GATT
/// layout would get an arbitrary one.
pub async fn find_characteristic(peripheral: &Peripheral) -> Result<Characteristic, Error> {
    poll_until(POLL_INTERVAL, || first_characteristic(peripheral)).await
}

async fn first_characteristic(peripheral: &Peripheral) -> Result<Option<Characteristic>, Error> {
    peripheral
        .discover_services()
        .await
        .map_err(Error::ListCharacteristics)?;
    match peripheral.characteristics().into_iter().next() {
        Some(characteristic) => {
            debug!(flags = ?characteristic.properties, "characteristic: {}", characteristic.uuid);
            Ok(Some(characteristic))
        }
        None => {
            info!("waiting for GATT services to appear...");
            Ok(None)
        }
    }
}

/// Polls `probe` until it yields a value.
///
/// A probe error aborts the search immediately; an empty probe sleeps
/// one `period` and tries again, with no upper bound. The returned
/// future doubles as the cancellation handle.
pub async fn poll_until<T, E, F, Fut>(period: Duration, mut probe: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>, E>>,
{
    loop {
        if let Some(found) = probe().await? {
            return Ok(found);
        }
        tokio::time::sleep(period).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn poll_until_retries_empty_probes() {
        let start = tokio::time::Instant::now();
        let mut polls = 0u32;
        let found = poll_until(POLL_INTERVAL, || {
            polls += 1;
            let attempt = polls;
            async move { Ok::<_, ()>((attempt >= 3).then_some(attempt)) }
        })
        .await;
        assert_eq!(found, Ok(3));
        assert_eq!(polls, 3);
        // Two empty cycles, one sleep after each.
        assert_eq!(start.elapsed(), POLL_INTERVAL * 2);
    }

    #[tokio::test(start_paused = true)]
    async fn poll_until_returns_on_the_cycle_a_value_appears() {
        let start = tokio::time::Instant::now();
        let found: Result<&str, ()> =
            poll_until(POLL_INTERVAL, || async { Ok(Some("glasses")) }).await;
        assert_eq!(found, Ok("glasses"));
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn poll_until_aborts_on_probe_error() {
        let start = tokio::time::Instant::now();
        let found: Result<(), &str> =
            poll_until(POLL_INTERVAL, || async { Err("listing failed") }).await;
        assert_eq!(found, Err("listing failed"));
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
