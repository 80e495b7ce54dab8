//! Transport layer.
//!
//! A single header octet (FIN, FIR, six-bit sequence) in front of the
//! application bytes, with a CRC appended after every 16-byte block of the
//! combined body. Decoding verifies and strips the block CRCs; encoding is
//! done by the frame façade, which re-inserts freshly computed CRCs around
//! the [`control_byte`](TransportHeader::control_byte).

use alloc::vec::Vec;
use core::fmt;

use crate::encoding::crc;
use crate::{DecodeError, EncodeError};

/// Highest sequence number the six-bit field can carry.
pub const SEQUENCE_MAX: u8 = 63;

/// Decomposed transport header.
///
/// `crcs` keeps the block CRCs exactly as they appeared on the wire; they
/// are diagnostic only, since encoding recomputes every CRC from the
/// current body bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransportHeader {
    pub fin: bool,
    pub fir: bool,
    pub sequence: u8,
    pub crcs: Vec<[u8; 2]>,
}

impl TransportHeader {
    /// Strip and verify the interleaved CRCs, split off the transport octet,
    /// and return the clean application bytes.
    pub fn decode(raw: &[u8]) -> Result<(Self, Vec<u8>), DecodeError> {
        let (crcs, clean) = crc::strip_crcs(raw)?;
        let byte = *clean.first().ok_or(DecodeError::Truncated)?;
        let header = Self {
            fin: byte & 0b1000_0000 != 0,
            fir: byte & 0b0100_0000 != 0,
            sequence: byte & 0b0011_1111,
            crcs,
        };
        Ok((header, clean[1..].to_vec()))
    }

    /// Pack the header octet; fails once the sequence no longer fits six bits.
    pub fn control_byte(&self) -> Result<u8, EncodeError> {
        if self.sequence > SEQUENCE_MAX {
            return Err(EncodeError::SequenceOverflow);
        }
        let mut byte = self.sequence;
        if self.fin {
            byte |= 0b1000_0000;
        }
        if self.fir {
            byte |= 0b0100_0000;
        }
        Ok(byte)
    }
}

impl fmt::Display for TransportHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Transport:")?;
        writeln!(f, "  FIN: {}", self.fin)?;
        writeln!(f, "  FIR: {}", self.fir)?;
        write!(f, "  SEQ: {}", self.sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::TransportHeader;
    use crate::encoding::crc;
    use crate::{DecodeError, EncodeError};
    use alloc::vec;

    #[test]
    fn decode_splits_header_and_body() {
        let framed = crc::insert_crcs(&[0xC5, 0xAA, 0xBB]);
        let (header, app) = TransportHeader::decode(&framed).unwrap();
        assert!(header.fin);
        assert!(header.fir);
        assert_eq!(header.sequence, 5);
        assert_eq!(app, vec![0xAA, 0xBB]);
        assert_eq!(header.crcs.len(), 1);
        assert_eq!(header.control_byte().unwrap(), 0xC5);
    }

    #[test]
    fn decode_header_only_body() {
        let framed = crc::insert_crcs(&[0x42]);
        let (header, app) = TransportHeader::decode(&framed).unwrap();
        assert!(!header.fin);
        assert!(header.fir);
        assert_eq!(header.sequence, 2);
        assert!(app.is_empty());
    }

    #[test]
    fn decode_propagates_crc_mismatch() {
        let mut framed = crc::insert_crcs(&[0xC5, 0xAA]);
        framed[1] ^= 0x04;
        assert_eq!(
            TransportHeader::decode(&framed).unwrap_err(),
            DecodeError::CrcMismatch
        );
    }

    #[test]
    fn sequence_overflow() {
        let header = TransportHeader {
            fin: false,
            fir: false,
            sequence: 64,
            crcs: vec![],
        };
        assert_eq!(
            header.control_byte().unwrap_err(),
            EncodeError::SequenceOverflow
        );
    }
}
