//! Data-link layer.
//!
//! Every DNP3 frame opens with a fixed ten-byte header: the `0x05 0x64`
//! start sync, a length octet, a control octet, little-endian destination
//! and source addresses, and a CRC over the first eight bytes. The control
//! octet splits into DIR, PRM, FCB, FCV and a four-bit function code whose
//! meaning depends on PRM.

use core::fmt;

use crate::encoding::crc;
#[cfg(feature = "alloc")]
use crate::encoding::writer::Writer;
use crate::{DecodeError, EncodeError};

/// Start sync bytes.
pub const SYNC: [u8; 2] = [0x05, 0x64];

/// Total header size including its CRC.
pub const HEADER_LEN: usize = 10;

/// Function codes valid when PRM is set (frames from the initiating station).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrimaryFunction {
    ResetLink,
    TestLink,
    ConfirmedUserData,
    UnconfirmedUserData,
    RequestLinkStatus,
}

/// Function codes valid when PRM is clear (reply frames).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SecondaryFunction {
    Ack,
    Nack,
    LinkStatus,
    NotSupported,
}

/// The PRM bit and four-bit function code taken together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LinkFunction {
    Primary(PrimaryFunction),
    Secondary(SecondaryFunction),
}

impl LinkFunction {
    pub fn from_bits(primary: bool, code: u8) -> Result<Self, DecodeError> {
        if primary {
            let function = match code {
                0 => PrimaryFunction::ResetLink,
                2 => PrimaryFunction::TestLink,
                3 => PrimaryFunction::ConfirmedUserData,
                4 => PrimaryFunction::UnconfirmedUserData,
                9 => PrimaryFunction::RequestLinkStatus,
                _ => return Err(DecodeError::InvalidFunctionCode),
            };
            Ok(Self::Primary(function))
        } else {
            let function = match code {
                0 => SecondaryFunction::Ack,
                1 => SecondaryFunction::Nack,
                11 => SecondaryFunction::LinkStatus,
                15 => SecondaryFunction::NotSupported,
                _ => return Err(DecodeError::InvalidFunctionCode),
            };
            Ok(Self::Secondary(function))
        }
    }

    pub const fn code(self) -> u8 {
        match self {
            Self::Primary(PrimaryFunction::ResetLink) => 0,
            Self::Primary(PrimaryFunction::TestLink) => 2,
            Self::Primary(PrimaryFunction::ConfirmedUserData) => 3,
            Self::Primary(PrimaryFunction::UnconfirmedUserData) => 4,
            Self::Primary(PrimaryFunction::RequestLinkStatus) => 9,
            Self::Secondary(SecondaryFunction::Ack) => 0,
            Self::Secondary(SecondaryFunction::Nack) => 1,
            Self::Secondary(SecondaryFunction::LinkStatus) => 11,
            Self::Secondary(SecondaryFunction::NotSupported) => 15,
        }
    }

    pub const fn is_primary(self) -> bool {
        matches!(self, Self::Primary(_))
    }

    /// The FCV value a primary function code mandates; secondary frames have
    /// no FCV requirement.
    pub const fn required_fcv(self) -> Option<bool> {
        match self {
            Self::Primary(PrimaryFunction::TestLink)
            | Self::Primary(PrimaryFunction::ConfirmedUserData) => Some(true),
            Self::Primary(_) => Some(false),
            Self::Secondary(_) => None,
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Primary(PrimaryFunction::ResetLink) => "RESET_LINK_STATES",
            Self::Primary(PrimaryFunction::TestLink) => "TEST_LINK_STATES",
            Self::Primary(PrimaryFunction::ConfirmedUserData) => "CONFIRMED_USER_DATA",
            Self::Primary(PrimaryFunction::UnconfirmedUserData) => "UNCONFIRMED_USER_DATA",
            Self::Primary(PrimaryFunction::RequestLinkStatus) => "REQUEST_LINK_STATUS",
            Self::Secondary(SecondaryFunction::Ack) => "ACK",
            Self::Secondary(SecondaryFunction::Nack) => "NACK",
            Self::Secondary(SecondaryFunction::LinkStatus) => "LINK_STATUS",
            Self::Secondary(SecondaryFunction::NotSupported) => "NOT_SUPPORTED",
        }
    }
}

/// Decomposed data-link control octet.
///
/// `direction` set means the frame travels master to outstation; the
/// application layer uses it to tell requests from responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkControl {
    pub direction: bool,
    pub fcb: bool,
    pub fcv: bool,
    pub function: LinkFunction,
}

impl LinkControl {
    pub fn from_byte(byte: u8) -> Result<Self, DecodeError> {
        let control = Self {
            direction: byte & 0b1000_0000 != 0,
            fcb: byte & 0b0010_0000 != 0,
            fcv: byte & 0b0001_0000 != 0,
            function: LinkFunction::from_bits(byte & 0b0100_0000 != 0, byte & 0b0000_1111)?,
        };
        if let Some(required) = control.function.required_fcv() {
            if control.fcv != required {
                return Err(DecodeError::InvalidFunctionCode);
            }
        }
        Ok(control)
    }

    pub fn to_byte(&self) -> Result<u8, EncodeError> {
        if let Some(required) = self.function.required_fcv() {
            if self.fcv != required {
                return Err(EncodeError::InvalidFunctionCode);
            }
        }
        let mut byte = self.function.code();
        if self.direction {
            byte |= 0b1000_0000;
        }
        if self.function.is_primary() {
            byte |= 0b0100_0000;
        }
        if self.fcb {
            byte |= 0b0010_0000;
        }
        if self.fcv {
            byte |= 0b0001_0000;
        }
        Ok(byte)
    }
}

impl fmt::Display for LinkControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CTL:")?;
        writeln!(f, "  DIR: {}", self.direction)?;
        writeln!(f, "  PRM: {}", self.function.is_primary())?;
        writeln!(f, "  FCB: {}", self.fcb)?;
        writeln!(f, "  FCV: {}", self.fcv)?;
        write!(
            f,
            "  FC : ({}) {}",
            self.function.code(),
            self.function.description()
        )
    }
}

/// The ten-byte data-link header.
///
/// `length` counts the control, destination, and source octets plus the
/// de-interleaved frame body (CRCs excluded); it is one octet on the wire
/// and recomputed on encode. `header_crc` holds the CRC as read; encoding
/// always emits a freshly computed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkHeader {
    pub length: u16,
    pub control: LinkControl,
    pub destination: u16,
    pub source: u16,
    pub header_crc: [u8; 2],
}

impl LinkHeader {
    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        if data.len() < HEADER_LEN {
            return Err(DecodeError::Truncated);
        }
        if data[0..2] != SYNC {
            return Err(DecodeError::BadSync);
        }
        if crc::crc_bytes(&data[0..8]) != data[8..10] {
            return Err(DecodeError::CrcMismatch);
        }
        Ok(Self {
            length: data[2] as u16,
            control: LinkControl::from_byte(data[3])?,
            destination: u16::from_le_bytes([data[4], data[5]]),
            source: u16::from_le_bytes([data[6], data[7]]),
            header_crc: [data[8], data[9]],
        })
    }

    #[cfg(feature = "alloc")]
    pub fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        if self.length > u8::MAX as u16 {
            return Err(EncodeError::Overflow);
        }
        let start = w.len();
        w.write_all(&SYNC);
        w.write_u8(self.length as u8);
        w.write_u8(self.control.to_byte()?);
        w.write_le_u16(self.destination);
        w.write_le_u16(self.source);
        let checksum = crc::crc_bytes(&w.as_bytes()[start..start + 8]);
        w.write_all(&checksum);
        Ok(())
    }
}

impl fmt::Display for LinkHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Data Link:")?;
        writeln!(f, "  SYN: 0x{:02X} {:02X}", SYNC[0], SYNC[1])?;
        writeln!(f, "  LEN: {}", self.length)?;
        writeln!(f, "  CTL:")?;
        writeln!(f, "    DIR: {}", self.control.direction)?;
        writeln!(f, "    PRM: {}", self.control.function.is_primary())?;
        writeln!(f, "    FCB: {}", self.control.fcb)?;
        writeln!(f, "    FCV: {}", self.control.fcv)?;
        writeln!(
            f,
            "    FC : ({}) {}",
            self.control.function.code(),
            self.control.function.description()
        )?;
        writeln!(f, "  DST: {}", self.destination)?;
        writeln!(f, "  SRC: {}", self.source)?;
        write!(
            f,
            "  CRC: 0x{:02X} {:02X}",
            self.header_crc[0], self.header_crc[1]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{LinkControl, LinkFunction, LinkHeader, PrimaryFunction, SecondaryFunction};
    use crate::encoding::writer::Writer;
    use crate::{DecodeError, EncodeError};

    #[test]
    fn control_roundtrip() {
        // DIR=0 PRM=1 FCB=0 FCV=0 FC=4, as seen on unsolicited responses.
        let control = LinkControl::from_byte(0x44).unwrap();
        assert!(!control.direction);
        assert_eq!(
            control.function,
            LinkFunction::Primary(PrimaryFunction::UnconfirmedUserData)
        );
        assert_eq!(control.to_byte().unwrap(), 0x44);
    }

    #[test]
    fn secondary_codes() {
        let control = LinkControl::from_byte(0x0B).unwrap();
        assert_eq!(
            control.function,
            LinkFunction::Secondary(SecondaryFunction::LinkStatus)
        );
        assert_eq!(control.to_byte().unwrap(), 0x0B);
    }

    #[test]
    fn unknown_codes_rejected() {
        // Primary FC 5 and secondary FC 2 are outside the enumerated sets.
        assert_eq!(
            LinkControl::from_byte(0x45).unwrap_err(),
            DecodeError::InvalidFunctionCode
        );
        assert_eq!(
            LinkControl::from_byte(0x02).unwrap_err(),
            DecodeError::InvalidFunctionCode
        );
    }

    #[test]
    fn fcv_must_match_function() {
        // CONFIRMED_USER_DATA requires FCV set.
        assert_eq!(
            LinkControl::from_byte(0x43).unwrap_err(),
            DecodeError::InvalidFunctionCode
        );
        assert!(LinkControl::from_byte(0x53).is_ok());
        // UNCONFIRMED_USER_DATA requires FCV clear.
        assert_eq!(
            LinkControl::from_byte(0x54).unwrap_err(),
            DecodeError::InvalidFunctionCode
        );

        let mut control = LinkControl::from_byte(0x53).unwrap();
        control.fcv = false;
        assert_eq!(
            control.to_byte().unwrap_err(),
            EncodeError::InvalidFunctionCode
        );
    }

    #[test]
    fn header_golden_decode() {
        let wire = [0x05, 0x64, 0x2A, 0x44, 0x01, 0x00, 0x00, 0x04, 0xE5, 0x79];
        let header = LinkHeader::decode(&wire).unwrap();
        assert_eq!(header.length, 0x2A);
        assert_eq!(header.destination, 1);
        assert_eq!(header.source, 1024);

        let mut w = Writer::new();
        header.encode(&mut w).unwrap();
        assert_eq!(w.as_bytes(), &wire);
    }

    #[test]
    fn bad_sync_and_bad_crc() {
        let wire = [0x05, 0x64, 0x2A, 0x44, 0x01, 0x00, 0x00, 0x04, 0xE5, 0x79];

        let mut corrupt = wire;
        corrupt[0] = 0x06;
        assert_eq!(LinkHeader::decode(&corrupt).unwrap_err(), DecodeError::BadSync);

        let mut corrupt = wire;
        corrupt[5] ^= 0x10;
        assert_eq!(
            LinkHeader::decode(&corrupt).unwrap_err(),
            DecodeError::CrcMismatch
        );
    }

    #[test]
    fn length_above_wire_width() {
        let mut header = LinkHeader::decode(&[
            0x05, 0x64, 0x2A, 0x44, 0x01, 0x00, 0x00, 0x04, 0xE5, 0x79,
        ])
        .unwrap();
        header.length = 256;
        let mut w = Writer::new();
        assert_eq!(header.encode(&mut w).unwrap_err(), EncodeError::Overflow);
    }
}
