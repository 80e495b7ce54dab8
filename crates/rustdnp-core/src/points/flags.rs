use core::fmt;

use crate::DecodeError;

/// The DNP3 point-status flag octet.
///
/// Bit 7 is reserved and must be zero on the wire; decoding a byte with it
/// set fails with [`DecodeError::ReservedBitSet`]. In the single-octet
/// binary-status format the value occupies bit 7 instead and the caller
/// masks it off before handing the byte here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointFlags {
    pub online: bool,
    pub restart: bool,
    pub comm_fail: bool,
    pub remote_force: bool,
    pub local_force: bool,
    pub over_range: bool,
    pub reference_check: bool,
}

impl PointFlags {
    pub fn from_byte(byte: u8) -> Result<Self, DecodeError> {
        if byte & 0b1000_0000 != 0 {
            return Err(DecodeError::ReservedBitSet);
        }
        Ok(Self {
            online: byte & 0b0000_0001 != 0,
            restart: byte & 0b0000_0010 != 0,
            comm_fail: byte & 0b0000_0100 != 0,
            remote_force: byte & 0b0000_1000 != 0,
            local_force: byte & 0b0001_0000 != 0,
            over_range: byte & 0b0010_0000 != 0,
            reference_check: byte & 0b0100_0000 != 0,
        })
    }

    pub fn to_byte(&self) -> u8 {
        let mut byte = 0;
        if self.online {
            byte |= 0b0000_0001;
        }
        if self.restart {
            byte |= 0b0000_0010;
        }
        if self.comm_fail {
            byte |= 0b0000_0100;
        }
        if self.remote_force {
            byte |= 0b0000_1000;
        }
        if self.local_force {
            byte |= 0b0001_0000;
        }
        if self.over_range {
            byte |= 0b0010_0000;
        }
        if self.reference_check {
            byte |= 0b0100_0000;
        }
        byte
    }
}

impl fmt::Display for PointFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Flags:")?;
        writeln!(f, "  Reference Check: {}", self.reference_check)?;
        writeln!(f, "  Over-Range     : {}", self.over_range)?;
        writeln!(f, "  Local Force    : {}", self.local_force)?;
        writeln!(f, "  Remote Force   : {}", self.remote_force)?;
        writeln!(f, "  Comm Fail      : {}", self.comm_fail)?;
        writeln!(f, "  Restart        : {}", self.restart)?;
        write!(f, "  Online         : {}", self.online)
    }
}
