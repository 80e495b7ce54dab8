//! Timestamp codecs.
//!
//! DNP3 carries two time encodings: a six-octet absolute timestamp holding
//! little-endian milliseconds since the Unix epoch, and a two-octet relative
//! timestamp holding little-endian milliseconds of offset (usually against a
//! Common Time of Occurrence object).

use core::fmt;

use crate::encoding::reader::Reader;
#[cfg(feature = "alloc")]
use crate::encoding::writer::Writer;
use crate::{DecodeError, EncodeError};

/// Largest value representable in the six-octet absolute timestamp.
pub const ABSOLUTE_TIME_MAX_MILLIS: u64 = (1 << 48) - 1;

/// Milliseconds since 1970-01-01T00:00:00 UTC, 48 bits on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbsoluteTime {
    pub millis: u64,
}

impl AbsoluteTime {
    pub const fn from_millis(millis: u64) -> Self {
        Self { millis }
    }

    pub fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            millis: r.read_le_u48()?,
        })
    }

    /// Fails with [`EncodeError::Overflow`] above 2^48 - 1 milliseconds.
    #[cfg(feature = "alloc")]
    pub fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        w.write_le_u48(self.millis)
    }

    #[cfg(feature = "chrono")]
    pub fn to_datetime(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp_millis(self.millis as i64)
    }

    #[cfg(feature = "chrono")]
    pub fn from_datetime(datetime: chrono::DateTime<chrono::Utc>) -> Result<Self, EncodeError> {
        let millis = datetime.timestamp_millis();
        if millis < 0 || millis as u64 > ABSOLUTE_TIME_MAX_MILLIS {
            return Err(EncodeError::Overflow);
        }
        Ok(Self {
            millis: millis as u64,
        })
    }
}

impl fmt::Display for AbsoluteTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[cfg(feature = "chrono")]
        if let Some(datetime) = self.to_datetime() {
            return write!(f, "{}", datetime.format("%Y-%m-%d %H:%M:%S%.3f UTC"));
        }
        write!(f, "{} ms since epoch", self.millis)
    }
}

/// Milliseconds of offset, 16 bits on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelativeTime {
    pub millis: u16,
}

impl RelativeTime {
    pub const fn from_millis(millis: u16) -> Self {
        Self { millis }
    }

    pub fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            millis: r.read_le_u16()?,
        })
    }

    #[cfg(feature = "alloc")]
    pub fn encode(&self, w: &mut Writer) {
        w.write_le_u16(self.millis);
    }
}

impl fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{} ms", self.millis)
    }
}

#[cfg(test)]
mod tests {
    use super::{AbsoluteTime, RelativeTime, ABSOLUTE_TIME_MAX_MILLIS};
    use crate::encoding::{reader::Reader, writer::Writer};
    use crate::{DecodeError, EncodeError};

    #[test]
    fn absolute_known_instant() {
        // 2010-07-01T00:00:00Z
        let wire = [0x00, 0x84, 0x4D, 0x8B, 0x29, 0x01];
        let t = AbsoluteTime::decode(&mut Reader::new(&wire)).unwrap();
        assert_eq!(t.millis, 1_277_942_400_000);

        let mut w = Writer::new();
        t.encode(&mut w).unwrap();
        assert_eq!(w.as_bytes(), &wire);
    }

    #[test]
    fn absolute_rejects_49_bits() {
        let t = AbsoluteTime::from_millis(ABSOLUTE_TIME_MAX_MILLIS + 1);
        let mut w = Writer::new();
        assert_eq!(t.encode(&mut w).unwrap_err(), EncodeError::Overflow);
    }

    #[test]
    fn absolute_needs_six_bytes() {
        let mut r = Reader::new(&[1, 2, 3]);
        assert_eq!(
            AbsoluteTime::decode(&mut r).unwrap_err(),
            DecodeError::Truncated
        );
    }

    #[test]
    fn relative_known_offset() {
        let t = RelativeTime::from_millis(500);
        let mut w = Writer::new();
        t.encode(&mut w);
        assert_eq!(w.as_bytes(), &[0xF4, 0x01]);
        assert_eq!(
            RelativeTime::decode(&mut Reader::new(&[0xF4, 0x01])).unwrap(),
            t
        );
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn absolute_chrono_conversion() {
        use chrono::{TimeZone, Utc};
        let instant = Utc.with_ymd_and_hms(2010, 7, 1, 0, 0, 0).unwrap();
        let t = AbsoluteTime::from_datetime(instant).unwrap();
        assert_eq!(t.millis, 1_277_942_400_000);
        assert_eq!(t.to_datetime().unwrap(), instant);
    }
}
