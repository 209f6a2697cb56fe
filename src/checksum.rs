//! CRC-8 primitive covering the frame header and payload.

use crc::{Crc, CRC_8_SMBUS};

/// CRC-8, polynomial 0x07, init 0x00 — matches the device firmware's
/// table-driven implementation.
const CRC8: Crc<u8> = Crc::<u8>::new(&CRC_8_SMBUS);

/// Computes the 8-bit checksum over `bytes`.
///
/// Callers pass the frame up to but excluding the checksum's own slot; the
/// slot is never part of its own input.
pub fn crc8(bytes: &[u8]) -> u8 {
    CRC8.checksum(bytes)
}
