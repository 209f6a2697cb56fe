//! # bleframe
//!
//! Host-side command framing for the BLE wire protocol spoken by a family
//! of portable measurement devices.
//!
//! This crate provides:
//! - Fixed-layout binary frame construction with a CRC-8 trailer
//! - The rolling 1-byte sequence-number discipline (0-254; 255 is reserved
//!   by the device firmware)
//! - One builder operation per device command, including the paginated
//!   file-retrieval sub-protocol (list, start, data x N, end)
//!
//! Transport establishment, connection management, and response parsing are
//! external collaborators: the builder hands back ready-to-send bytes and
//! consumes nothing from the link.

pub mod checksum;
pub mod command;
pub mod error;
pub mod frame;
pub mod seq;

pub use checksum::crc8;
pub use command::{Command, CommandCode, FileName, FILE_NAME_LEN};
pub use error::ProtocolError;
pub use frame::{FrameBuilder, FRAME_OVERHEAD, HEADER_SIZE, START_MARKER};
pub use seq::{SeqCounter, SEQ_MAX};
