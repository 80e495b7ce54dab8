//! Range fields.
//!
//! The low nibble of the qualifier octet selects one of eleven range-field
//! layouts: start/stop index pairs at one, two, or four octets (each with a
//! "virtual" twin of identical encoding), a bare count at the same three
//! widths, a one-octet count for variable-size objects, or no field at all.
//! Codes `0xA` and `0xC`-`0xF` are reserved and refuse to decode.

use core::fmt;

use crate::encoding::reader::Reader;
#[cfg(feature = "alloc")]
use crate::encoding::writer::Writer;
use crate::DecodeError;

/// A decoded range field; the variant implies the range-specifier code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RangeField {
    StartStop1 { start: u8, stop: u8 },
    StartStop2 { start: u16, stop: u16 },
    StartStop4 { start: u32, stop: u32 },
    VirtualStartStop1 { start: u8, stop: u8 },
    VirtualStartStop2 { start: u16, stop: u16 },
    VirtualStartStop4 { start: u32, stop: u32 },
    NoRange,
    Count1 { count: u8 },
    Count2 { count: u16 },
    Count4 { count: u32 },
    /// One-octet count where every object carries its own size prefix.
    Count1Variable { count: u8 },
}

impl RangeField {
    pub fn decode(code: u8, r: &mut Reader<'_>) -> Result<Self, DecodeError> {
        let field = match code {
            0x0 => Self::StartStop1 {
                start: r.read_u8()?,
                stop: r.read_u8()?,
            },
            0x1 => Self::StartStop2 {
                start: r.read_le_u16()?,
                stop: r.read_le_u16()?,
            },
            0x2 => Self::StartStop4 {
                start: r.read_le_u32()?,
                stop: r.read_le_u32()?,
            },
            0x3 => Self::VirtualStartStop1 {
                start: r.read_u8()?,
                stop: r.read_u8()?,
            },
            0x4 => Self::VirtualStartStop2 {
                start: r.read_le_u16()?,
                stop: r.read_le_u16()?,
            },
            0x5 => Self::VirtualStartStop4 {
                start: r.read_le_u32()?,
                stop: r.read_le_u32()?,
            },
            0x6 => Self::NoRange,
            0x7 => Self::Count1 {
                count: r.read_u8()?,
            },
            0x8 => Self::Count2 {
                count: r.read_le_u16()?,
            },
            0x9 => Self::Count4 {
                count: r.read_le_u32()?,
            },
            0xB => Self::Count1Variable {
                count: r.read_u8()?,
            },
            _ => return Err(DecodeError::ReservedCode),
        };
        Ok(field)
    }

    #[cfg(feature = "alloc")]
    pub fn encode(&self, w: &mut Writer) {
        match *self {
            Self::StartStop1 { start, stop } | Self::VirtualStartStop1 { start, stop } => {
                w.write_u8(start);
                w.write_u8(stop);
            }
            Self::StartStop2 { start, stop } | Self::VirtualStartStop2 { start, stop } => {
                w.write_le_u16(start);
                w.write_le_u16(stop);
            }
            Self::StartStop4 { start, stop } | Self::VirtualStartStop4 { start, stop } => {
                w.write_le_u32(start);
                w.write_le_u32(stop);
            }
            Self::NoRange => {}
            Self::Count1 { count } | Self::Count1Variable { count } => w.write_u8(count),
            Self::Count2 { count } => w.write_le_u16(count),
            Self::Count4 { count } => w.write_le_u32(count),
        }
    }

    /// The four-bit range-specifier code this layout encodes as.
    pub const fn spec_code(&self) -> u8 {
        match self {
            Self::StartStop1 { .. } => 0x0,
            Self::StartStop2 { .. } => 0x1,
            Self::StartStop4 { .. } => 0x2,
            Self::VirtualStartStop1 { .. } => 0x3,
            Self::VirtualStartStop2 { .. } => 0x4,
            Self::VirtualStartStop4 { .. } => 0x5,
            Self::NoRange => 0x6,
            Self::Count1 { .. } => 0x7,
            Self::Count2 { .. } => 0x8,
            Self::Count4 { .. } => 0x9,
            Self::Count1Variable { .. } => 0xB,
        }
    }

    /// On-wire width of the range field in bytes.
    pub const fn width(&self) -> usize {
        match self {
            Self::StartStop1 { .. } | Self::VirtualStartStop1 { .. } => 2,
            Self::StartStop2 { .. } | Self::VirtualStartStop2 { .. } => 4,
            Self::StartStop4 { .. } | Self::VirtualStartStop4 { .. } => 8,
            Self::NoRange => 0,
            Self::Count1 { .. } | Self::Count1Variable { .. } => 1,
            Self::Count2 { .. } => 2,
            Self::Count4 { .. } => 4,
        }
    }

    /// How many points the owning object carries. A start/stop pair with
    /// `start > stop` declares no points.
    pub fn num_objects(&self) -> usize {
        fn span(start: u64, stop: u64) -> usize {
            if stop >= start {
                (stop - start + 1) as usize
            } else {
                0
            }
        }
        match *self {
            Self::StartStop1 { start, stop } | Self::VirtualStartStop1 { start, stop } => {
                span(start as u64, stop as u64)
            }
            Self::StartStop2 { start, stop } | Self::VirtualStartStop2 { start, stop } => {
                span(start as u64, stop as u64)
            }
            Self::StartStop4 { start, stop } | Self::VirtualStartStop4 { start, stop } => {
                span(start as u64, stop as u64)
            }
            Self::NoRange => 0,
            Self::Count1 { count } | Self::Count1Variable { count } => count as usize,
            Self::Count2 { count } => count as usize,
            Self::Count4 { count } => count as usize,
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::StartStop1 { .. } => "1-octet start and stop indexes",
            Self::StartStop2 { .. } => "2-octet start and stop indexes",
            Self::StartStop4 { .. } => "4-octet start and stop indexes",
            Self::VirtualStartStop1 { .. } => "1-octet virtual start and stop indexes",
            Self::VirtualStartStop2 { .. } => "2-octet virtual start and stop indexes",
            Self::VirtualStartStop4 { .. } => "4-octet virtual start and stop indexes",
            Self::NoRange => "no range field",
            Self::Count1 { .. } => "1-octet count of objects",
            Self::Count2 { .. } => "2-octet count of objects",
            Self::Count4 { .. } => "4-octet count of objects",
            Self::Count1Variable { .. } => "1-octet count of objects with variable format",
        }
    }
}

impl fmt::Display for RangeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Range Field: ({:X}) {}",
            self.spec_code(),
            self.description()
        )?;
        match *self {
            Self::StartStop1 { start, stop } | Self::VirtualStartStop1 { start, stop } => {
                write!(f, "\n  Start: {start}\n  Stop : {stop}")
            }
            Self::StartStop2 { start, stop } | Self::VirtualStartStop2 { start, stop } => {
                write!(f, "\n  Start: {start}\n  Stop : {stop}")
            }
            Self::StartStop4 { start, stop } | Self::VirtualStartStop4 { start, stop } => {
                write!(f, "\n  Start: {start}\n  Stop : {stop}")
            }
            Self::NoRange => Ok(()),
            Self::Count1 { count } | Self::Count1Variable { count } => {
                write!(f, "\n  Count: {count}")
            }
            Self::Count2 { count } => write!(f, "\n  Count: {count}"),
            Self::Count4 { count } => write!(f, "\n  Count: {count}"),
        }
    }
}
