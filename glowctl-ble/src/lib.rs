//! Glow glasses BLE client
//!
//! Finds the glasses on the local adapter and drives them over GATT.
//!
//! # Example
//!
//! ```ignore
//! use glowctl_ble::{discovery, Glasses};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), glowctl_ble::Error> {
//!     let adapter = discovery::default_adapter().await?;
//!     let device = discovery::find_glasses(&adapter).await?;
//!     let glasses = Glasses::connect(device).await?;
//!     glasses.on().await?;
//!     Ok(())
//! }
//! ```

pub mod discovery;
mod error;
mod glasses;

pub use error::Error;
pub use glasses::Glasses;
