//! Point variants.
//!
//! A data object's points all share one layout, selected by the registry
//! shape for the header's (group, variation): packed single- or double-bit
//! fields, a single status octet, or `[prefix][flags][value][time]` byte
//! groups whose widths are fixed per tag. Constructing points consumes the
//! exact byte count the shape dictates; packing mirrors it.

/// The point-status flag octet.
pub mod flags;
/// The optional per-point index/size prefix.
pub mod prefix;

use alloc::vec::Vec;
use core::fmt;

use crate::encoding::reader::Reader;
use crate::encoding::writer::Writer;
use crate::object::registry::PointShape;
use crate::time::{AbsoluteTime, RelativeTime};
use crate::{DecodeError, EncodeError};

pub use flags::PointFlags;
pub use prefix::PointPrefix;

/// One bit of a packed binary object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackedBitPoint {
    pub value: bool,
}

/// One two-bit field of a packed double-bit binary object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackedDoubleBitPoint {
    /// The two state bits, lowest-order first.
    pub value: [bool; 2],
}

/// Single-octet binary status: value in bit 7, flags below.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BitWithFlagsPoint {
    pub prefix: PointPrefix,
    pub value: bool,
    pub flags: PointFlags,
}

/// A fixed-width group of raw value octets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BytesPoint {
    pub prefix: PointPrefix,
    pub value: Vec<u8>,
}

/// Flag octet followed by value octets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BytesWithFlagsPoint {
    pub prefix: PointPrefix,
    pub flags: PointFlags,
    pub value: Vec<u8>,
}

/// Flag octet, value octets, absolute timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BytesWithFlagsTimePoint {
    pub prefix: PointPrefix,
    pub flags: PointFlags,
    pub value: Vec<u8>,
    pub time: AbsoluteTime,
}

/// Value octets followed by an absolute timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BytesWithTimePoint {
    pub prefix: PointPrefix,
    pub value: Vec<u8>,
    pub time: AbsoluteTime,
}

/// Value octets followed by a relative timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BytesWithRelativeTimePoint {
    pub prefix: PointPrefix,
    pub value: Vec<u8>,
    pub time: RelativeTime,
}

/// A bare absolute timestamp (time-and-date and CTO objects).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbsoluteTimePoint {
    pub prefix: PointPrefix,
    pub time: AbsoluteTime,
}

/// A bare relative timestamp (time-delay objects).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelativeTimePoint {
    pub prefix: PointPrefix,
    pub time: RelativeTime,
}

/// The smallest datum carried by a data object.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Point {
    PackedBit(PackedBitPoint),
    PackedDoubleBit(PackedDoubleBitPoint),
    BitWithFlags(BitWithFlagsPoint),
    Bytes(BytesPoint),
    BytesWithFlags(BytesWithFlagsPoint),
    BytesWithFlagsTime(BytesWithFlagsTimePoint),
    BytesWithTime(BytesWithTimePoint),
    BytesWithRelativeTime(BytesWithRelativeTimePoint),
    AbsoluteTime(AbsoluteTimePoint),
    RelativeTime(RelativeTimePoint),
}

impl Point {
    /// The prefix bytes in front of this point, if any.
    pub fn prefix(&self) -> &PointPrefix {
        static NO_PREFIX: PointPrefix = PointPrefix::EMPTY;
        match self {
            Self::PackedBit(_) | Self::PackedDoubleBit(_) => &NO_PREFIX,
            Self::BitWithFlags(p) => &p.prefix,
            Self::Bytes(p) => &p.prefix,
            Self::BytesWithFlags(p) => &p.prefix,
            Self::BytesWithFlagsTime(p) => &p.prefix,
            Self::BytesWithTime(p) => &p.prefix,
            Self::BytesWithRelativeTime(p) => &p.prefix,
            Self::AbsoluteTime(p) => &p.prefix,
            Self::RelativeTime(p) => &p.prefix,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn prefix_line(f: &mut fmt::Formatter<'_>, prefix: &PointPrefix) -> fmt::Result {
            if !prefix.is_empty() {
                writeln!(f, "Prefix: {prefix}")?;
            }
            Ok(())
        }
        fn value_line(f: &mut fmt::Formatter<'_>, value: &[u8]) -> fmt::Result {
            write!(f, "Value : 0x")?;
            for byte in value {
                write!(f, " {byte:02X}")?;
            }
            Ok(())
        }
        match self {
            Self::PackedBit(p) => write!(f, "Value : {}", p.value),
            Self::PackedDoubleBit(p) => write!(f, "Value : {} {}", p.value[0], p.value[1]),
            Self::BitWithFlags(p) => {
                prefix_line(f, &p.prefix)?;
                writeln!(f, "Value : {}", p.value)?;
                write!(f, "{}", p.flags)
            }
            Self::Bytes(p) => {
                prefix_line(f, &p.prefix)?;
                value_line(f, &p.value)
            }
            Self::BytesWithFlags(p) => {
                prefix_line(f, &p.prefix)?;
                value_line(f, &p.value)?;
                write!(f, "\n{}", p.flags)
            }
            Self::BytesWithFlagsTime(p) => {
                prefix_line(f, &p.prefix)?;
                value_line(f, &p.value)?;
                write!(f, "\n{}", p.flags)?;
                write!(f, "\nTimestamp: {}", p.time)
            }
            Self::BytesWithTime(p) => {
                prefix_line(f, &p.prefix)?;
                value_line(f, &p.value)?;
                write!(f, "\nTimestamp: {}", p.time)
            }
            Self::BytesWithRelativeTime(p) => {
                prefix_line(f, &p.prefix)?;
                value_line(f, &p.value)?;
                write!(f, "\nTimestamp offset: {}", p.time)
            }
            Self::AbsoluteTime(p) => {
                prefix_line(f, &p.prefix)?;
                write!(f, "Timestamp: {}", p.time)
            }
            Self::RelativeTime(p) => {
                prefix_line(f, &p.prefix)?;
                write!(f, "Timestamp offset: {}", p.time)
            }
        }
    }
}

impl PointShape {
    /// Build `count` points from the front of `data`.
    ///
    /// Returns the points and the bytes consumed. `prefix_size` is the
    /// per-point prefix width the owning header's qualifier declares.
    pub fn construct(
        self,
        data: &[u8],
        count: usize,
        prefix_size: usize,
    ) -> Result<(Vec<Point>, usize), DecodeError> {
        match self {
            Self::NoPoints => {
                if count != 0 {
                    return Err(DecodeError::Message(
                        "this group/variation carries no point data",
                    ));
                }
                Ok((Vec::new(), 0))
            }
            Self::Packed1Bit => {
                require_no_prefix(prefix_size)?;
                let size = count.div_ceil(8);
                if size > data.len() {
                    return Err(DecodeError::Truncated);
                }
                let mut points = Vec::with_capacity(count);
                for index in 0..count {
                    let bit = data[index / 8] >> (index % 8) & 1 != 0;
                    points.push(Point::PackedBit(PackedBitPoint { value: bit }));
                }
                Ok((points, size))
            }
            Self::Packed2Bit => {
                require_no_prefix(prefix_size)?;
                let size = count.div_ceil(4);
                if size > data.len() {
                    return Err(DecodeError::Truncated);
                }
                let mut points = Vec::with_capacity(count);
                for index in 0..count {
                    let pair = data[index / 4] >> ((index % 4) * 2);
                    points.push(Point::PackedDoubleBit(PackedDoubleBitPoint {
                        value: [pair & 0b01 != 0, pair & 0b10 != 0],
                    }));
                }
                Ok((points, size))
            }
            _ => self.construct_fixed(data, count, prefix_size),
        }
    }

    /// The fixed-width shapes share one walk: `count` windows of
    /// `prefix_size + width` bytes each.
    fn construct_fixed(
        self,
        data: &[u8],
        count: usize,
        prefix_size: usize,
    ) -> Result<(Vec<Point>, usize), DecodeError> {
        let step = prefix_size + self.width();
        let total = count * step;
        if total > data.len() {
            return Err(DecodeError::Truncated);
        }

        let mut points = Vec::with_capacity(count);
        for window in data[..total].chunks_exact(step) {
            let mut r = Reader::new(window);
            let prefix = PointPrefix::from_slice(r.read_exact(prefix_size)?);
            let point = match self {
                Self::BitWithFlags => {
                    let byte = r.read_u8()?;
                    Point::BitWithFlags(BitWithFlagsPoint {
                        prefix,
                        value: byte & 0b1000_0000 != 0,
                        flags: PointFlags::from_byte(byte & 0b0111_1111)?,
                    })
                }
                Self::Bytes { .. } => Point::Bytes(BytesPoint {
                    prefix,
                    value: r.read_exact(self.width())?.to_vec(),
                }),
                Self::BytesWithFlags { width } => Point::BytesWithFlags(BytesWithFlagsPoint {
                    prefix,
                    flags: PointFlags::from_byte(r.read_u8()?)?,
                    value: r.read_exact(width as usize - 1)?.to_vec(),
                }),
                Self::BytesWithFlagsTime { width } => {
                    Point::BytesWithFlagsTime(BytesWithFlagsTimePoint {
                        prefix,
                        flags: PointFlags::from_byte(r.read_u8()?)?,
                        value: r.read_exact(width as usize - 7)?.to_vec(),
                        time: AbsoluteTime::decode(&mut r)?,
                    })
                }
                Self::BytesWithTime { width } => Point::BytesWithTime(BytesWithTimePoint {
                    prefix,
                    value: r.read_exact(width as usize - 6)?.to_vec(),
                    time: AbsoluteTime::decode(&mut r)?,
                }),
                Self::BytesWithRelativeTime { width } => {
                    Point::BytesWithRelativeTime(BytesWithRelativeTimePoint {
                        prefix,
                        value: r.read_exact(width as usize - 2)?.to_vec(),
                        time: RelativeTime::decode(&mut r)?,
                    })
                }
                Self::AbsoluteTime => Point::AbsoluteTime(AbsoluteTimePoint {
                    prefix,
                    time: AbsoluteTime::decode(&mut r)?,
                }),
                Self::RelativeTime => Point::RelativeTime(RelativeTimePoint {
                    prefix,
                    time: RelativeTime::decode(&mut r)?,
                }),
                Self::NoPoints | Self::Packed1Bit | Self::Packed2Bit => unreachable!(),
            };
            points.push(point);
        }
        Ok((points, total))
    }

    /// Serialize points back into the layout this shape decodes.
    pub fn pack(self, points: &[Point]) -> Result<Vec<u8>, EncodeError> {
        match self {
            Self::NoPoints => {
                if points.is_empty() {
                    Ok(Vec::new())
                } else {
                    Err(EncodeError::Message(
                        "this group/variation carries no point data",
                    ))
                }
            }
            Self::Packed1Bit => {
                let mut packed = Vec::with_capacity(points.len().div_ceil(8));
                for group in points.chunks(8) {
                    let mut byte = 0u8;
                    for (offset, point) in group.iter().enumerate() {
                        let Point::PackedBit(bit) = point else {
                            return Err(variant_mismatch());
                        };
                        if bit.value {
                            byte |= 1 << offset;
                        }
                    }
                    packed.push(byte);
                }
                Ok(packed)
            }
            Self::Packed2Bit => {
                let mut packed = Vec::with_capacity(points.len().div_ceil(4));
                for group in points.chunks(4) {
                    let mut byte = 0u8;
                    for (offset, point) in group.iter().enumerate() {
                        let Point::PackedDoubleBit(pair) = point else {
                            return Err(variant_mismatch());
                        };
                        if pair.value[0] {
                            byte |= 0b01 << (offset * 2);
                        }
                        if pair.value[1] {
                            byte |= 0b10 << (offset * 2);
                        }
                    }
                    packed.push(byte);
                }
                Ok(packed)
            }
            _ => {
                let mut w = Writer::new();
                for point in points {
                    self.pack_fixed(point, &mut w)?;
                }
                Ok(w.into_vec())
            }
        }
    }

    fn pack_fixed(self, point: &Point, w: &mut Writer) -> Result<(), EncodeError> {
        w.write_all(point.prefix().as_bytes());
        match (self, point) {
            (Self::BitWithFlags, Point::BitWithFlags(p)) => {
                let mut byte = p.flags.to_byte();
                if p.value {
                    byte |= 0b1000_0000;
                }
                w.write_u8(byte);
            }
            (Self::Bytes { .. }, Point::Bytes(p)) => w.write_all(&p.value),
            (Self::BytesWithFlags { .. }, Point::BytesWithFlags(p)) => {
                w.write_u8(p.flags.to_byte());
                w.write_all(&p.value);
            }
            (Self::BytesWithFlagsTime { .. }, Point::BytesWithFlagsTime(p)) => {
                w.write_u8(p.flags.to_byte());
                w.write_all(&p.value);
                p.time.encode(w)?;
            }
            (Self::BytesWithTime { .. }, Point::BytesWithTime(p)) => {
                w.write_all(&p.value);
                p.time.encode(w)?;
            }
            (Self::BytesWithRelativeTime { .. }, Point::BytesWithRelativeTime(p)) => {
                w.write_all(&p.value);
                p.time.encode(w);
            }
            (Self::AbsoluteTime, Point::AbsoluteTime(p)) => p.time.encode(w)?,
            (Self::RelativeTime, Point::RelativeTime(p)) => p.time.encode(w),
            _ => return Err(variant_mismatch()),
        }
        Ok(())
    }
}

fn require_no_prefix(prefix_size: usize) -> Result<(), DecodeError> {
    if prefix_size != 0 {
        return Err(DecodeError::Message(
            "packed points cannot carry a point prefix",
        ));
    }
    Ok(())
}

fn variant_mismatch() -> EncodeError {
    EncodeError::Message("point variant does not match the object's group/variation")
}
