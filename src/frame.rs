//! Binary frame construction.
//!
//! Frame layout (7-byte header + payload + 1-byte trailer):
//!
//! ```text
//! +--------+--------+--------+----------+--------+-------------+---------+--------+
//! | marker |  code  | ~code  | reserved |  seq   | payload_len | payload |  crc8  |
//! | 1 byte | 1 byte | 1 byte |  1 byte  | 1 byte | 2 bytes LE  | N bytes | 1 byte |
//! +--------+--------+--------+----------+--------+-------------+---------+--------+
//! ```
//!
//! The checksum covers every preceding byte of the frame; total frame
//! length is always 8 + payload length.

use crate::checksum::crc8;
use crate::command::{Command, FileName};
use crate::seq::SeqCounter;
use bytes::{BufMut, Bytes, BytesMut};

/// Sentinel byte opening every frame.
pub const START_MARKER: u8 = 0xA5;

/// Fixed header size preceding the payload (marker through payload_len).
pub const HEADER_SIZE: usize = 7;

/// Fixed bytes per frame outside the payload: 7-byte header + CRC trailer.
pub const FRAME_OVERHEAD: usize = 8;

/// Builds ready-to-send command frames and owns the sequence counter.
///
/// Every build consumes exactly one sequence number, whatever the command
/// kind. Methods take `&mut self`; callers issuing commands from more than
/// one task must wrap the builder in a lock so sequence numbers stay
/// distinct and in order.
#[derive(Debug, Default)]
pub struct FrameBuilder {
    seq: SeqCounter,
}

impl FrameBuilder {
    /// Builder with the counter at 0, the process-start state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder over a pre-seeded counter.
    pub fn with_counter(seq: SeqCounter) -> Self {
        Self { seq }
    }

    /// Sequence number the next frame will carry.
    pub fn next_seq(&self) -> u8 {
        self.seq.peek()
    }

    /// Encodes `command` into a complete frame and advances the counter.
    ///
    /// The returned buffer is frozen: the frame is immutable once produced
    /// and the builder keeps no reference to it.
    pub fn build(&mut self, command: &Command) -> Bytes {
        let payload_len = command.payload_len();
        let mut buf = BytesMut::with_capacity(FRAME_OVERHEAD + payload_len);

        let code = command.code();
        buf.put_u8(START_MARKER);
        buf.put_u8(code.as_u8());
        buf.put_u8(code.complement());
        buf.put_u8(0x00); // reserved
        buf.put_u8(self.seq.peek());
        buf.put_u16_le(payload_len as u16);
        command.write_payload(&mut buf);
        debug_assert_eq!(buf.len(), HEADER_SIZE + payload_len);

        let crc = crc8(&buf);
        buf.put_u8(crc);

        self.seq.next();

        let frame = buf.freeze();
        tracing::debug!("built {:?} frame: {}", code, hex::encode(&frame));
        frame
    }

    /// Requests the realtime sensor stream at the fixed 125 Hz rate.
    pub fn request_realtime_data(&mut self) -> Bytes {
        self.build(&Command::RealtimeData)
    }

    /// Queries firmware and hardware identification.
    pub fn request_device_info(&mut self) -> Bytes {
        self.build(&Command::DeviceInfo)
    }

    /// Configures the haptic-feedback feature. Thresholds are raw device
    /// units, passed through unvalidated.
    pub fn set_vibration(&mut self, enabled: bool, threshold1: u8, threshold2: u8) -> Bytes {
        self.build(&Command::SetVibration {
            enabled,
            threshold1,
            threshold2,
        })
    }

    /// Queries the current haptic-feedback configuration.
    pub fn request_vibration_config(&mut self) -> Bytes {
        self.build(&Command::VibrationConfig)
    }

    /// Reboots the device.
    pub fn reset(&mut self) -> Bytes {
        self.build(&Command::Reset)
    }

    /// Restores factory settings.
    pub fn factory_reset(&mut self) -> Bytes {
        self.build(&Command::FactoryReset)
    }

    /// Writes factory calibration data to flash.
    pub fn burn_factory_info(&mut self) -> Bytes {
        self.build(&Command::BurnFactoryInfo)
    }

    /// Locks the factory flash region.
    pub fn burn_lock_flash(&mut self) -> Bytes {
        self.build(&Command::BurnLockFlash)
    }

    /// Lists stored recording files.
    pub fn list_files(&mut self) -> Bytes {
        self.build(&Command::ListFiles)
    }

    /// Opens a stored file for paginated reading, starting at `offset`.
    pub fn start_file_read(&mut self, name: FileName, offset: u32) -> Bytes {
        self.build(&Command::StartFileRead { name, offset })
    }

    /// Requests the next chunk of the open file.
    pub fn read_file_chunk(&mut self, offset: u32) -> Bytes {
        self.build(&Command::ReadFileChunk { offset })
    }

    /// Closes the paginated read.
    pub fn end_file_read(&mut self) -> Bytes {
        self.build(&Command::EndFileRead)
    }
}
