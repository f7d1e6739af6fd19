//! Glow glasses wire protocol
//!
//! The UUIDs and command frames the glasses understand. Shared between
//! anything that talks to the hardware so the bytes live in one place.

pub mod ble;
