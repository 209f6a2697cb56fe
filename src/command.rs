//! Command kinds, the opcode table, and payload encoding.

use crate::error::ProtocolError;
use bytes::BufMut;

/// Fixed length of the on-wire recording-file identifier.
pub const FILE_NAME_LEN: usize = 16;

/// Sample-rate selector byte sent with the realtime-data request.
///
/// Firmware comments hint at a 0/1 selector (125 Hz / 62.5 Hz), but
/// observed traffic carries this fixed value and the devices accept no
/// other, so no parameter is exposed.
pub(crate) const RT_SAMPLE_RATE_125HZ: u8 = 0x7D;

/// On-wire opcode for each device command, sent at frame offset 1 and
/// complemented at offset 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CommandCode {
    VibrationConfig = 0x00,
    RealtimeData = 0x03,
    SetVibration = 0x04,
    DeviceInfo = 0xE1,
    Reset = 0xE2,
    FactoryReset = 0xE3,
    BurnFactoryInfo = 0xEA,
    BurnLockFlash = 0xEB,
    ListFiles = 0xF1,
    StartFileRead = 0xF2,
    ReadFileChunk = 0xF3,
    EndFileRead = 0xF4,
}

impl CommandCode {
    /// Opcode byte.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Redundancy byte sent alongside the opcode: its bitwise complement.
    pub fn complement(self) -> u8 {
        !(self as u8)
    }
}

/// Recording-file identifier, exactly 16 bytes on the wire.
///
/// The device's file list hands back full-width identifiers; shorter
/// host-side names must go through [`FileName::padded`] instead of being
/// copied unchecked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileName([u8; FILE_NAME_LEN]);

impl FileName {
    pub fn new(bytes: [u8; FILE_NAME_LEN]) -> Self {
        Self(bytes)
    }

    /// Right-pads `name` with NUL bytes to the full field width.
    ///
    /// Fails if `name` is longer than the wire field; nothing is truncated
    /// silently.
    pub fn padded(name: &[u8]) -> Result<Self, ProtocolError> {
        if name.len() > FILE_NAME_LEN {
            return Err(ProtocolError::NameTooLong(name.len()));
        }
        let mut bytes = [0u8; FILE_NAME_LEN];
        bytes[..name.len()].copy_from_slice(name);
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; FILE_NAME_LEN] {
        &self.0
    }
}

impl From<[u8; FILE_NAME_LEN]> for FileName {
    fn from(bytes: [u8; FILE_NAME_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for FileName {
    type Error = ProtocolError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let exact: [u8; FILE_NAME_LEN] = bytes
            .try_into()
            .map_err(|_| ProtocolError::InvalidNameLength(bytes.len()))?;
        Ok(Self(exact))
    }
}

/// One outbound device command with its parameters.
///
/// The frame builder is parameterized over this enum, so the header and
/// checksum discipline live in one place instead of one copy per opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start the realtime sensor stream.
    RealtimeData,
    /// Query firmware and hardware identification.
    DeviceInfo,
    /// Configure the haptic-feedback feature.
    SetVibration {
        enabled: bool,
        threshold1: u8,
        threshold2: u8,
    },
    /// Query the current haptic-feedback configuration.
    VibrationConfig,
    /// Reboot the device.
    Reset,
    /// Restore factory settings.
    FactoryReset,
    /// Write factory calibration data to flash.
    BurnFactoryInfo,
    /// Lock the factory flash region.
    BurnLockFlash,
    /// List stored recording files.
    ListFiles,
    /// Open a stored file for paginated reading.
    StartFileRead { name: FileName, offset: u32 },
    /// Request the next chunk of the open file.
    ReadFileChunk { offset: u32 },
    /// Close the paginated read.
    EndFileRead,
}

impl Command {
    /// Opcode for this command kind.
    pub fn code(&self) -> CommandCode {
        match self {
            Command::RealtimeData => CommandCode::RealtimeData,
            Command::DeviceInfo => CommandCode::DeviceInfo,
            Command::SetVibration { .. } => CommandCode::SetVibration,
            Command::VibrationConfig => CommandCode::VibrationConfig,
            Command::Reset => CommandCode::Reset,
            Command::FactoryReset => CommandCode::FactoryReset,
            Command::BurnFactoryInfo => CommandCode::BurnFactoryInfo,
            Command::BurnLockFlash => CommandCode::BurnLockFlash,
            Command::ListFiles => CommandCode::ListFiles,
            Command::StartFileRead { .. } => CommandCode::StartFileRead,
            Command::ReadFileChunk { .. } => CommandCode::ReadFileChunk,
            Command::EndFileRead => CommandCode::EndFileRead,
        }
    }

    /// Exact payload size in bytes for this command kind.
    pub fn payload_len(&self) -> usize {
        match self {
            Command::RealtimeData => 1,
            Command::SetVibration { .. } => 3,
            Command::StartFileRead { .. } => FILE_NAME_LEN + 4,
            Command::ReadFileChunk { .. } => 4,
            Command::DeviceInfo
            | Command::VibrationConfig
            | Command::Reset
            | Command::FactoryReset
            | Command::BurnFactoryInfo
            | Command::BurnLockFlash
            | Command::ListFiles
            | Command::EndFileRead => 0,
        }
    }

    /// Appends the payload bytes, exactly [`Command::payload_len`] of them.
    pub(crate) fn write_payload<B: BufMut>(&self, buf: &mut B) {
        match *self {
            Command::RealtimeData => buf.put_u8(RT_SAMPLE_RATE_125HZ),
            Command::SetVibration {
                enabled,
                threshold1,
                threshold2,
            } => {
                buf.put_u8(u8::from(enabled));
                buf.put_u8(threshold1);
                buf.put_u8(threshold2);
            }
            Command::StartFileRead { name, offset } => {
                buf.put_slice(name.as_bytes());
                buf.put_u32_le(offset);
            }
            Command::ReadFileChunk { offset } => buf.put_u32_le(offset),
            Command::DeviceInfo
            | Command::VibrationConfig
            | Command::Reset
            | Command::FactoryReset
            | Command::BurnFactoryInfo
            | Command::BurnLockFlash
            | Command::ListFiles
            | Command::EndFileRead => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_commands() -> Vec<Command> {
        vec![
            Command::RealtimeData,
            Command::DeviceInfo,
            Command::SetVibration {
                enabled: true,
                threshold1: 1,
                threshold2: 2,
            },
            Command::VibrationConfig,
            Command::Reset,
            Command::FactoryReset,
            Command::BurnFactoryInfo,
            Command::BurnLockFlash,
            Command::ListFiles,
            Command::StartFileRead {
                name: FileName::new([0x41; FILE_NAME_LEN]),
                offset: 0,
            },
            Command::ReadFileChunk { offset: 0 },
            Command::EndFileRead,
        ]
    }

    #[test]
    fn test_opcode_table() {
        assert_eq!(CommandCode::VibrationConfig.as_u8(), 0x00);
        assert_eq!(CommandCode::RealtimeData.as_u8(), 0x03);
        assert_eq!(CommandCode::SetVibration.as_u8(), 0x04);
        assert_eq!(CommandCode::DeviceInfo.as_u8(), 0xE1);
        assert_eq!(CommandCode::Reset.as_u8(), 0xE2);
        assert_eq!(CommandCode::FactoryReset.as_u8(), 0xE3);
        assert_eq!(CommandCode::BurnFactoryInfo.as_u8(), 0xEA);
        assert_eq!(CommandCode::BurnLockFlash.as_u8(), 0xEB);
        assert_eq!(CommandCode::ListFiles.as_u8(), 0xF1);
        assert_eq!(CommandCode::StartFileRead.as_u8(), 0xF2);
        assert_eq!(CommandCode::ReadFileChunk.as_u8(), 0xF3);
        assert_eq!(CommandCode::EndFileRead.as_u8(), 0xF4);
    }

    #[test]
    fn test_complement() {
        assert_eq!(CommandCode::DeviceInfo.complement(), 0x1E);
        assert_eq!(CommandCode::VibrationConfig.complement(), 0xFF);
        for command in all_commands() {
            let code = command.code();
            assert_eq!(code.complement(), !code.as_u8());
        }
    }

    #[test]
    fn test_payload_len_matches_written_bytes() {
        for command in all_commands() {
            let mut buf = Vec::new();
            command.write_payload(&mut buf);
            assert_eq!(
                buf.len(),
                command.payload_len(),
                "payload size mismatch for {command:?}"
            );
        }
    }

    #[test]
    fn test_file_name_exact_length() {
        let bytes = [0x30u8; FILE_NAME_LEN];
        let name = FileName::try_from(&bytes[..]).unwrap();
        assert_eq!(name.as_bytes(), &bytes);
    }

    #[test]
    fn test_file_name_rejects_wrong_length() {
        let err = FileName::try_from(&b"short"[..]).unwrap_err();
        assert_eq!(err, ProtocolError::InvalidNameLength(5));

        let long = [0u8; 17];
        let err = FileName::try_from(&long[..]).unwrap_err();
        assert_eq!(err, ProtocolError::InvalidNameLength(17));
    }

    #[test]
    fn test_file_name_padding() {
        let name = FileName::padded(b"20260830120000").unwrap();
        assert_eq!(&name.as_bytes()[..14], b"20260830120000");
        assert_eq!(&name.as_bytes()[14..], &[0x00, 0x00]);
    }

    #[test]
    fn test_file_name_padding_rejects_long_names() {
        let err = FileName::padded(&[0x41; 17]).unwrap_err();
        assert_eq!(err, ProtocolError::NameTooLong(17));
    }

    #[test]
    fn test_set_vibration_payload() {
        let mut buf = Vec::new();
        Command::SetVibration {
            enabled: false,
            threshold1: 0x0A,
            threshold2: 0x14,
        }
        .write_payload(&mut buf);
        assert_eq!(buf, [0x00, 0x0A, 0x14]);
    }

    #[test]
    fn test_realtime_payload_is_fixed_selector() {
        let mut buf = Vec::new();
        Command::RealtimeData.write_payload(&mut buf);
        assert_eq!(buf, [0x7D]);
    }
}
