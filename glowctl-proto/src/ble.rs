//! BLE GATT protocol constants for the glow glasses
//!
//! The glasses advertise a single 16-bit service under the Bluetooth base
//! UUID and take opaque command frames on a writable characteristic.

use uuid::Uuid;

/// Service UUID advertised by the glasses: 0000fff0-0000-1000-8000-00805f9b34fb
pub const SERVICE_UUID: Uuid = Uuid::from_u128(0x0000fff0_0000_1000_8000_00805f9b34fb);

/// Command frames
pub mod commands {
    /// Turn the glasses on
    pub const ON: [u8; 8] = [0x01, 0x00, 0x02, 0x06, 0x09, 0x02, 0x05, 0x03];

    /// Turn the glasses off
    pub const OFF: [u8; 7] = [0x01, 0x00, 0x02, 0x06, 0x09, 0x00, 0x03];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_frames() {
        assert_eq!(commands::ON, [0x01, 0x00, 0x02, 0x06, 0x09, 0x02, 0x05, 0x03]);
        assert_eq!(commands::OFF, [0x01, 0x00, 0x02, 0x06, 0x09, 0x00, 0x03]);
    }

    #[test]
    fn service_uuid_matches_wire_form_any_casing() {
        let lower = Uuid::parse_str("0000fff0-0000-1000-8000-00805f9b34fb").unwrap();
        let upper = Uuid::parse_str("0000FFF0-0000-1000-8000-00805F9B34FB").unwrap();
        assert_eq!(SERVICE_UUID, lower);
        assert_eq!(SERVICE_UUID, upper);
    }
}
