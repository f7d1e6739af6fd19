/// What went wrong, named after the operation that was attempted. The
/// underlying transport error rides along as the source.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("querying Bluetooth adapters")]
    Adapter(#[source] btleplug::Error),

    #[error("no Bluetooth adapter found")]
    NoAdapter,

    #[error("enabling discovery")]
    StartScan(#[source] btleplug::Error),

    #[error("listing devices")]
    ListDevices(#[source] btleplug::Error),

    #[error("connecting")]
    Connect(#[source] btleplug::Error),

    #[error("listing GATT characteristics")]
    ListCharacteristics(#[source] btleplug::Error),

    #[error("writing command")]
    Write(#[source] btleplug::Error),
}
