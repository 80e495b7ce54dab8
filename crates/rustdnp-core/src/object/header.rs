//! Object headers.
//!
//! Each data object in the application payload opens with three mandatory
//! octets (group, variation, qualifier) followed by the range field the
//! qualifier's low nibble selects. Qualifier bit 7 is reserved and must be
//! zero; bits 6:4 carry the point-prefix code.

use core::fmt;

use crate::encoding::reader::Reader;
#[cfg(feature = "alloc")]
use crate::encoding::writer::Writer;
use crate::object::range::RangeField;
use crate::object::registry::{self, ObjectType};
use crate::DecodeError;

/// Three-bit qualifier field describing the bytes prefixed to each point.
///
/// Index prefixes carry the point's index; size prefixes carry its explicit
/// byte length. Code 7 is reserved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointPrefixCode {
    #[default]
    None,
    OctetIndex1,
    OctetIndex2,
    OctetIndex4,
    OctetSize1,
    OctetSize2,
    OctetSize4,
}

impl PointPrefixCode {
    pub fn from_bits(bits: u8) -> Result<Self, DecodeError> {
        match bits {
            0 => Ok(Self::None),
            1 => Ok(Self::OctetIndex1),
            2 => Ok(Self::OctetIndex2),
            3 => Ok(Self::OctetIndex4),
            4 => Ok(Self::OctetSize1),
            5 => Ok(Self::OctetSize2),
            6 => Ok(Self::OctetSize4),
            _ => Err(DecodeError::ReservedCode),
        }
    }

    pub const fn bits(self) -> u8 {
        match self {
            Self::None => 0,
            Self::OctetIndex1 => 1,
            Self::OctetIndex2 => 2,
            Self::OctetIndex4 => 3,
            Self::OctetSize1 => 4,
            Self::OctetSize2 => 5,
            Self::OctetSize4 => 6,
        }
    }

    /// Bytes prefixed to every point under this code.
    pub const fn size(self) -> usize {
        match self {
            Self::None => 0,
            Self::OctetIndex1 | Self::OctetSize1 => 1,
            Self::OctetIndex2 | Self::OctetSize2 => 2,
            Self::OctetIndex4 | Self::OctetSize4 => 4,
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::None => "NO_PREFIX",
            Self::OctetIndex1 => "1_OCTET_INDEX",
            Self::OctetIndex2 => "2_OCTET_INDEX",
            Self::OctetIndex4 => "4_OCTET_INDEX",
            Self::OctetSize1 => "1_OCTET_SIZE",
            Self::OctetSize2 => "2_OCTET_SIZE",
            Self::OctetSize4 => "4_OCTET_SIZE",
        }
    }
}

/// Decoded object header: group, variation, prefix code, and range field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectHeader {
    pub group: u8,
    pub variation: u8,
    pub prefix_code: PointPrefixCode,
    pub range: RangeField,
}

impl ObjectHeader {
    pub fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
        let group = r.read_u8()?;
        let variation = r.read_u8()?;
        let qualifier = r.read_u8()?;
        if qualifier & 0b1000_0000 != 0 {
            return Err(DecodeError::ReservedBitSet);
        }
        let prefix_code = PointPrefixCode::from_bits((qualifier & 0b0111_0000) >> 4)?;
        let range = RangeField::decode(qualifier & 0b0000_1111, r)?;
        Ok(Self {
            group,
            variation,
            prefix_code,
            range,
        })
    }

    #[cfg(feature = "alloc")]
    pub fn encode(&self, w: &mut Writer) {
        w.write_u8(self.group);
        w.write_u8(self.variation);
        w.write_u8((self.prefix_code.bits() << 4) | self.range.spec_code());
        self.range.encode(w);
    }

    /// Total header size: the three mandatory octets plus the range field.
    pub const fn size(&self) -> usize {
        3 + self.range.width()
    }

    /// Registry entry for this header's (group, variation), when one exists.
    pub fn object_type(&self) -> Option<&'static ObjectType> {
        registry::lookup(self.group, self.variation)
    }
}

impl fmt::Display for ObjectHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = self
            .object_type()
            .map(|t| t.description)
            .unwrap_or("Unknown Group/Variation");
        writeln!(f, "Object Header:")?;
        writeln!(
            f,
            "  Grp, Var : ({:02}, {:02}) - {}",
            self.group, self.variation, description
        )?;
        writeln!(f, "  Qualifier:")?;
        writeln!(
            f,
            "    Obj Prefix Code: ({}) {}",
            self.prefix_code.bits(),
            self.prefix_code.description()
        )?;
        write!(
            f,
            "    Range Spec Code: ({:X}) {}",
            self.range.spec_code(),
            self.range.description()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{ObjectHeader, PointPrefixCode};
    use crate::encoding::{reader::Reader, writer::Writer};
    use crate::object::range::RangeField;
    use crate::DecodeError;

    #[test]
    fn decode_count_qualifier() {
        // Group 2 Var 2, 2-octet index prefix, 2-octet count of 3.
        let mut r = Reader::new(&[0x02, 0x02, 0x28, 0x03, 0x00]);
        let header = ObjectHeader::decode(&mut r).unwrap();
        assert_eq!(header.group, 2);
        assert_eq!(header.variation, 2);
        assert_eq!(header.prefix_code, PointPrefixCode::OctetIndex2);
        assert_eq!(header.range, RangeField::Count2 { count: 3 });
        assert_eq!(header.size(), 5);
        assert_eq!(r.position(), 5);

        let mut w = Writer::new();
        header.encode(&mut w);
        assert_eq!(w.as_bytes(), &[0x02, 0x02, 0x28, 0x03, 0x00]);
    }

    #[test]
    fn reserved_qualifier_bit() {
        let mut r = Reader::new(&[0x01, 0x01, 0x80, 0x00, 0x07]);
        assert_eq!(
            ObjectHeader::decode(&mut r).unwrap_err(),
            DecodeError::ReservedBitSet
        );
    }

    #[test]
    fn reserved_prefix_code() {
        let mut r = Reader::new(&[0x01, 0x01, 0x76, 0x00]);
        assert_eq!(
            ObjectHeader::decode(&mut r).unwrap_err(),
            DecodeError::ReservedCode
        );
    }

    #[test]
    fn prefix_sizes() {
        assert_eq!(PointPrefixCode::None.size(), 0);
        assert_eq!(PointPrefixCode::OctetIndex1.size(), 1);
        assert_eq!(PointPrefixCode::OctetIndex2.size(), 2);
        assert_eq!(PointPrefixCode::OctetIndex4.size(), 4);
        assert_eq!(PointPrefixCode::OctetSize4.size(), 4);
    }

    #[test]
    fn truncated_header() {
        let mut r = Reader::new(&[0x01, 0x01]);
        assert_eq!(
            ObjectHeader::decode(&mut r).unwrap_err(),
            DecodeError::Truncated
        );
    }
}
