//! Protocol error types.

use crate::command::FILE_NAME_LEN;
use thiserror::Error;

/// Errors raised while validating command parameters.
///
/// Frame construction itself is all-or-nothing: once parameters are
/// validated, no operation can partially fail, so the only errors here are
/// fixed-size input violations caught before any buffer is allocated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("file name must be exactly {} bytes, got {0}", FILE_NAME_LEN)]
    InvalidNameLength(usize),

    #[error("file name of {0} bytes does not fit the {}-byte wire field", FILE_NAME_LEN)]
    NameTooLong(usize),
}
