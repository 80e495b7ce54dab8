use core::fmt;

/// Errors raised while decoding wire bytes into the frame tree.
///
/// All variants except [`UnsupportedGroupVariation`](Self::UnsupportedGroupVariation)
/// are fatal to the layer being decoded. An unsupported (group, variation)
/// pair leaves the frame valid and encodable: the unparsed bytes are retained
/// in the object's `extra` tail and the error is reported alongside the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The first two bytes are not the `0x05 0x64` start sync.
    BadSync,
    /// The data-link header CRC or a transport block CRC did not match.
    CrcMismatch,
    /// Fewer bytes than the declared widths require.
    Truncated,
    /// A must-be-zero bit was set (qualifier bit 7, IIN 2.6/2.7, flag bit 7).
    ReservedBitSet,
    /// A reserved range-specifier or point-prefix code was on the wire.
    ReservedCode,
    /// A data-link function code outside the primary/secondary sets, or an
    /// FCV bit inconsistent with the function code.
    InvalidFunctionCode,
    /// No registry entry for this (group, variation); non-fatal.
    UnsupportedGroupVariation { group: u8, variation: u8 },
    Message(&'static str),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadSync => f.write_str("start bytes don't match the 0x05 0x64 sync"),
            Self::CrcMismatch => f.write_str("CRC mismatch"),
            Self::Truncated => f.write_str("not enough bytes for the declared layout"),
            Self::ReservedBitSet => f.write_str("reserved bit must be 0"),
            Self::ReservedCode => f.write_str("reserved qualifier code"),
            Self::InvalidFunctionCode => f.write_str("invalid data-link function code"),
            Self::UnsupportedGroupVariation { group, variation } => {
                write!(f, "unsupported group/variation: {group}/{variation}")
            }
            Self::Message(msg) => f.write_str(msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}

/// Errors raised while encoding the frame tree back into wire bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// Application sequence 16 or above, or transport sequence 64 or above.
    SequenceOverflow,
    /// A value does not fit its wire width (data-link length above 255, a
    /// timestamp above 2^48 - 1 milliseconds).
    Overflow,
    /// The data-link FCV bit is inconsistent with the function code.
    InvalidFunctionCode,
    Message(&'static str),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SequenceOverflow => f.write_str("sequence number out of range"),
            Self::Overflow => f.write_str("value out of range for its wire width"),
            Self::InvalidFunctionCode => f.write_str("invalid data-link function code"),
            Self::Message(msg) => f.write_str(msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EncodeError {}
