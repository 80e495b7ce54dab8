use core::fmt;

/// The optional 0/1/2/4-byte prefix in front of a point.
///
/// Carries the point's index or its explicit size, depending on the owning
/// header's prefix code. The bytes are preserved verbatim so that re-encode
/// is byte-identical regardless of interpretation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointPrefix {
    bytes: [u8; 4],
    len: u8,
}

impl PointPrefix {
    pub const EMPTY: Self = Self {
        bytes: [0; 4],
        len: 0,
    };

    /// Capture prefix bytes from the wire. `raw` is at most four bytes, as
    /// dictated by the prefix codes.
    pub fn from_slice(raw: &[u8]) -> Self {
        debug_assert!(raw.len() <= 4);
        let mut bytes = [0u8; 4];
        bytes[..raw.len()].copy_from_slice(raw);
        Self {
            bytes,
            len: raw.len() as u8,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The prefix read as a little-endian integer (an index or a size).
    pub fn value(&self) -> u32 {
        u32::from_le_bytes(self.bytes)
    }
}

impl fmt::Display for PointPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in self.as_bytes() {
            write!(f, " {byte:02X}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::PointPrefix;

    #[test]
    fn captures_bytes_and_value() {
        let prefix = PointPrefix::from_slice(&[0x03, 0x01]);
        assert_eq!(prefix.as_bytes(), &[0x03, 0x01]);
        assert_eq!(prefix.len(), 2);
        assert_eq!(prefix.value(), 0x0103);
        assert!(PointPrefix::EMPTY.is_empty());
        assert_eq!(PointPrefix::EMPTY.value(), 0);
    }
}
