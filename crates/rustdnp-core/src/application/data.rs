//! The object stream inside an application payload.

use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;

use crate::encoding::reader::Reader;
use crate::encoding::writer::Writer;
use crate::object::header::ObjectHeader;
use crate::points::Point;
use crate::render;
use crate::{DecodeError, EncodeError};

/// One object: a header, its points, and a raw tail.
///
/// `extra` holds bytes that could not be parsed into points. For an
/// unsupported (group, variation) it absorbs everything after the header so
/// the object re-encodes byte-identically.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataObject {
    pub header: ObjectHeader,
    pub points: Vec<Point>,
    pub extra: Vec<u8>,
}

impl DataObject {
    /// Decode one object from the front of `data`.
    ///
    /// Returns the object, the bytes it consumed, and a non-fatal warning
    /// when the (group, variation) has no constructor; in that case the
    /// whole remainder of `data` lands in `extra` and is consumed.
    pub fn decode(data: &[u8]) -> Result<(Self, usize, Option<DecodeError>), DecodeError> {
        let mut r = Reader::new(data);
        let header = ObjectHeader::decode(&mut r)?;
        let head = header.size();

        let shape = header.object_type().and_then(|t| t.shape);
        let Some(shape) = shape else {
            let object = Self {
                header,
                points: Vec::new(),
                extra: data[head..].to_vec(),
            };
            let warning = DecodeError::UnsupportedGroupVariation {
                group: header.group,
                variation: header.variation,
            };
            return Ok((object, data.len(), Some(warning)));
        };

        let count = header.range.num_objects();
        let (points, consumed) =
            shape.construct(&data[head..], count, header.prefix_code.size())?;
        let object = Self {
            header,
            points,
            extra: Vec::new(),
        };
        Ok((object, head + consumed, None))
    }

    pub fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        self.header.encode(w);
        if !self.points.is_empty() {
            let shape = self
                .header
                .object_type()
                .and_then(|t| t.shape)
                .ok_or(EncodeError::Message("no packer for this group/variation"))?;
            let packed = shape.pack(&self.points)?;
            w.write_all(&packed);
        }
        w.write_all(&self.extra);
        Ok(())
    }
}

impl fmt::Display for DataObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header)?;
        if let Some(range) = render::range_lines(&self.header.range) {
            write!(f, "\n{range}")?;
        }
        if !self.points.is_empty() {
            write!(f, "\n  Points:")?;
            for point in &self.points {
                write!(f, "\n{}", render::list_item(&point.to_string()))?;
            }
        }
        if !self.extra.is_empty() {
            write!(f, "\n  Extra: 0x")?;
            for byte in &self.extra {
                write!(f, " {byte:02X}")?;
            }
        }
        Ok(())
    }
}

/// The ordered object stream plus a raw application-level tail.
///
/// Decoding never fills `extra` itself (an unknown object keeps its own
/// tail); it exists so callers can append raw bytes that encode after every
/// object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApplicationData {
    pub objects: Vec<DataObject>,
    pub extra: Vec<u8>,
}

impl ApplicationData {
    /// Walk the object stream until the buffer is exhausted.
    ///
    /// Fatal errors abort; an unsupported (group, variation) ends the walk
    /// with that object holding the rest of the payload, reported through
    /// the returned warning.
    pub fn decode(data: &[u8]) -> Result<(Self, Option<DecodeError>), DecodeError> {
        let mut objects = Vec::new();
        let mut warning = None;
        let mut offset = 0;

        while offset < data.len() {
            let (object, consumed, object_warning) = DataObject::decode(&data[offset..])?;
            offset += consumed;
            objects.push(object);
            if object_warning.is_some() {
                warning = object_warning;
                break;
            }
        }

        Ok((
            Self {
                objects,
                extra: Vec::new(),
            },
            warning,
        ))
    }

    pub fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        for object in &self.objects {
            object.encode(w)?;
        }
        w.write_all(&self.extra);
        Ok(())
    }
}

impl fmt::Display for ApplicationData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.objects.is_empty() && self.extra.is_empty() {
            return Ok(());
        }
        write!(f, "Data Objects:")?;
        for object in &self.objects {
            write!(f, "\n{}", render::list_item(&object.to_string()))?;
        }
        if !self.extra.is_empty() {
            write!(f, "\n  Extra: 0x")?;
            for byte in &self.extra {
                write!(f, " {byte:02X}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ApplicationData, DataObject};
    use crate::encoding::writer::Writer;
    use crate::object::range::RangeField;
    use crate::points::Point;
    use crate::DecodeError;
    use alloc::vec;
    use alloc::vec::Vec;

    fn encode(data: &ApplicationData) -> Vec<u8> {
        let mut w = Writer::new();
        data.encode(&mut w).unwrap();
        w.into_vec()
    }

    #[test]
    fn packed_binary_object() {
        // Group 1 Var 1, start 0 stop 7, one body byte.
        let wire = [0x01, 0x01, 0x00, 0x00, 0x07, 0xA5];
        let (data, warning) = ApplicationData::decode(&wire).unwrap();
        assert!(warning.is_none());
        assert_eq!(data.objects.len(), 1);

        let object = &data.objects[0];
        assert_eq!(object.header.range, RangeField::StartStop1 { start: 0, stop: 7 });
        assert_eq!(object.points.len(), 8);
        let values: Vec<bool> = object
            .points
            .iter()
            .map(|p| match p {
                Point::PackedBit(bit) => bit.value,
                other => panic!("unexpected variant: {other:?}"),
            })
            .collect();
        assert_eq!(
            values,
            vec![true, false, true, false, false, true, false, true]
        );

        assert_eq!(encode(&data), wire);
    }

    #[test]
    fn unknown_group_variation_keeps_tail() {
        let wire = [0x63, 0x63, 0x06, 0xDE, 0xAD];
        let (data, warning) = ApplicationData::decode(&wire).unwrap();
        assert_eq!(
            warning,
            Some(DecodeError::UnsupportedGroupVariation {
                group: 99,
                variation: 99
            })
        );
        assert_eq!(data.objects.len(), 1);
        assert!(data.objects[0].points.is_empty());
        assert_eq!(data.objects[0].extra, vec![0xDE, 0xAD]);

        assert_eq!(encode(&data), wire);
    }

    #[test]
    fn unknown_object_mid_stream_absorbs_the_rest() {
        // A class-data poll, then an unknown tag, then bytes that would
        // otherwise look like another object.
        let wire = [
            0x3C, 0x02, 0x06, // 60/2, no range
            0x63, 0x01, 0x06, // unknown 99/1
            0x3C, 0x03, 0x06, // never reached
        ];
        let (data, warning) = ApplicationData::decode(&wire).unwrap();
        assert!(matches!(
            warning,
            Some(DecodeError::UnsupportedGroupVariation { group: 99, .. })
        ));
        assert_eq!(data.objects.len(), 2);
        assert_eq!(data.objects[1].extra, vec![0x3C, 0x03, 0x06]);
        assert_eq!(encode(&data), wire);
    }

    #[test]
    fn variation_zero_query_is_retained_raw() {
        // Group 30 Var 0 is a descriptive row with no constructor.
        let wire = [0x1E, 0x00, 0x06];
        let (data, warning) = ApplicationData::decode(&wire).unwrap();
        assert!(matches!(
            warning,
            Some(DecodeError::UnsupportedGroupVariation {
                group: 30,
                variation: 0
            })
        ));
        assert!(data.objects[0].extra.is_empty());
        assert_eq!(encode(&data), wire);
    }

    #[test]
    fn truncated_points_are_fatal() {
        // Counter 32-bit with flag declares two points but carries one byte.
        let wire = [0x14, 0x01, 0x07, 0x02, 0xAA];
        assert_eq!(
            ApplicationData::decode(&wire).unwrap_err(),
            DecodeError::Truncated
        );
    }

    #[test]
    fn empty_payload() {
        let (data, warning) = ApplicationData::decode(&[]).unwrap();
        assert!(warning.is_none());
        assert!(data.objects.is_empty());
        assert!(encode(&data).is_empty());
    }

    #[test]
    fn encode_without_registry_entry_needs_empty_points() {
        let (data, _) = ApplicationData::decode(&[0x63, 0x63, 0x06]).unwrap();
        let mut tampered = data.clone();
        tampered.objects[0]
            .points
            .push(Point::PackedBit(crate::points::PackedBitPoint {
                value: true,
            }));
        let mut w = Writer::new();
        assert!(tampered.objects[0].encode(&mut w).is_err());
    }

    #[test]
    fn application_extra_tail_appends() {
        let (mut data, _) = ApplicationData::decode(&[0x3C, 0x01, 0x06]).unwrap();
        data.extra = vec![0x7F];
        assert_eq!(encode(&data), vec![0x3C, 0x01, 0x06, 0x7F]);
    }

    #[test]
    fn decode_reports_consumed_size() {
        let wire = [0x01, 0x01, 0x00, 0x00, 0x07, 0xA5, 0xFF];
        let (_, consumed, warning) = DataObject::decode(&wire).unwrap();
        assert!(warning.is_none());
        assert_eq!(consumed, 6);
    }
}
