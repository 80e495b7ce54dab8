use core::fmt;

use crate::DecodeError;

/// The two-octet Internal Indications field of a response.
///
/// IIN1 is the first octet on the wire, LSB first: ALL_STATIONS in bit 0 up
/// to DEVICE_RESTART in bit 7. IIN2 follows with FUNCTION_CODE_UNKNOWN in
/// bit 0; its bits 6 and 7 are reserved, enforced zero on decode, and
/// always emitted zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InternalIndications {
    // IIN1
    pub all_stations: bool,
    pub class_1_events: bool,
    pub class_2_events: bool,
    pub class_3_events: bool,
    pub need_time: bool,
    pub local: bool,
    pub device_trouble: bool,
    pub device_restart: bool,
    // IIN2
    pub function_unknown: bool,
    pub object_unknown: bool,
    pub parameter_error: bool,
    pub buffer_overflow: bool,
    pub already_executing: bool,
    pub configuration_corrupt: bool,
}

impl InternalIndications {
    pub fn from_bytes(iin1: u8, iin2: u8) -> Result<Self, DecodeError> {
        if iin2 & 0b1100_0000 != 0 {
            return Err(DecodeError::ReservedBitSet);
        }
        Ok(Self {
            all_stations: iin1 & 0b0000_0001 != 0,
            class_1_events: iin1 & 0b0000_0010 != 0,
            class_2_events: iin1 & 0b0000_0100 != 0,
            class_3_events: iin1 & 0b0000_1000 != 0,
            need_time: iin1 & 0b0001_0000 != 0,
            local: iin1 & 0b0010_0000 != 0,
            device_trouble: iin1 & 0b0100_0000 != 0,
            device_restart: iin1 & 0b1000_0000 != 0,
            function_unknown: iin2 & 0b0000_0001 != 0,
            object_unknown: iin2 & 0b0000_0010 != 0,
            parameter_error: iin2 & 0b0000_0100 != 0,
            buffer_overflow: iin2 & 0b0000_1000 != 0,
            already_executing: iin2 & 0b0001_0000 != 0,
            configuration_corrupt: iin2 & 0b0010_0000 != 0,
        })
    }

    pub fn to_bytes(&self) -> [u8; 2] {
        let iin1_bits = [
            self.all_stations,
            self.class_1_events,
            self.class_2_events,
            self.class_3_events,
            self.need_time,
            self.local,
            self.device_trouble,
            self.device_restart,
        ];
        let iin2_bits = [
            self.function_unknown,
            self.object_unknown,
            self.parameter_error,
            self.buffer_overflow,
            self.already_executing,
            self.configuration_corrupt,
        ];
        [pack_bits(&iin1_bits), pack_bits(&iin2_bits)]
    }
}

fn pack_bits(bits: &[bool]) -> u8 {
    let mut byte = 0;
    for (index, &bit) in bits.iter().enumerate() {
        if bit {
            byte |= 1 << index;
        }
    }
    byte
}

impl fmt::Display for InternalIndications {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "IIN:")?;
        writeln!(f, "  IIN1:")?;
        writeln!(f, "    All Stations         : {}", self.all_stations)?;
        writeln!(f, "    Class 1 Events       : {}", self.class_1_events)?;
        writeln!(f, "    Class 2 Events       : {}", self.class_2_events)?;
        writeln!(f, "    Class 3 Events       : {}", self.class_3_events)?;
        writeln!(f, "    Need Time            : {}", self.need_time)?;
        writeln!(f, "    Local                : {}", self.local)?;
        writeln!(f, "    Device Trouble       : {}", self.device_trouble)?;
        writeln!(f, "    Device Restart       : {}", self.device_restart)?;
        writeln!(f, "  IIN2:")?;
        writeln!(f, "    Function Unknown     : {}", self.function_unknown)?;
        writeln!(f, "    Object Unknown       : {}", self.object_unknown)?;
        writeln!(f, "    Parameter Error      : {}", self.parameter_error)?;
        writeln!(f, "    Buffer Overflow      : {}", self.buffer_overflow)?;
        writeln!(f, "    Already Executing    : {}", self.already_executing)?;
        write!(f, "    Configuration Corrupt: {}", self.configuration_corrupt)
    }
}
