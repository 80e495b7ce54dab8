//! Application layer.
//!
//! A request is `[control, function_code, objects...]`; a response inserts
//! the two-octet Internal Indications after the function code. Which
//! variant a frame carries is decided by the data-link DIR bit: frames
//! traveling master to outstation hold requests.

/// The shared application control octet.
pub mod control;
/// The object stream and its containers.
pub mod data;
/// Request and response function codes.
pub mod function;
/// Internal Indications.
pub mod iin;

use alloc::string::ToString;
use core::fmt;

use crate::encoding::writer::Writer;
use crate::render;
use crate::{DecodeError, EncodeError};

pub use control::ApplicationControl;
pub use data::{ApplicationData, DataObject};
pub use function::{RequestFunction, ResponseFunction};
pub use iin::InternalIndications;

/// A master-to-outstation application fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApplicationRequest {
    pub control: ApplicationControl,
    pub function: RequestFunction,
    pub data: ApplicationData,
}

/// An outstation-to-master application fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApplicationResponse {
    pub control: ApplicationControl,
    pub function: ResponseFunction,
    pub indications: InternalIndications,
    pub data: ApplicationData,
}

/// The application payload of one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Application {
    Request(ApplicationRequest),
    Response(ApplicationResponse),
}

impl Application {
    /// Decode the clean (CRC-stripped) application bytes. `is_request`
    /// comes from the data-link direction bit.
    pub fn decode(data: &[u8], is_request: bool) -> Result<(Self, Option<DecodeError>), DecodeError> {
        if is_request {
            if data.len() < 2 {
                return Err(DecodeError::Truncated);
            }
            let (objects, warning) = ApplicationData::decode(&data[2..])?;
            let request = ApplicationRequest {
                control: ApplicationControl::from_byte(data[0]),
                function: RequestFunction::from_u8(data[1]),
                data: objects,
            };
            Ok((Self::Request(request), warning))
        } else {
            if data.len() < 4 {
                return Err(DecodeError::Truncated);
            }
            let (objects, warning) = ApplicationData::decode(&data[4..])?;
            let response = ApplicationResponse {
                control: ApplicationControl::from_byte(data[0]),
                function: ResponseFunction::from_u8(data[1]),
                indications: InternalIndications::from_bytes(data[2], data[3])?,
                data: objects,
            };
            Ok((Self::Response(response), warning))
        }
    }

    pub fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
        match self {
            Self::Request(request) => {
                w.write_u8(request.control.to_byte()?);
                w.write_u8(request.function.to_u8());
                request.data.encode(w)
            }
            Self::Response(response) => {
                w.write_u8(response.control.to_byte()?);
                w.write_u8(response.function.to_u8());
                w.write_all(&response.indications.to_bytes());
                response.data.encode(w)
            }
        }
    }

    pub fn control(&self) -> &ApplicationControl {
        match self {
            Self::Request(request) => &request.control,
            Self::Response(response) => &response.control,
        }
    }

    pub fn control_mut(&mut self) -> &mut ApplicationControl {
        match self {
            Self::Request(request) => &mut request.control,
            Self::Response(response) => &mut response.control,
        }
    }

    pub fn sequence(&self) -> u8 {
        self.control().sequence
    }

    pub fn set_sequence(&mut self, sequence: u8) {
        self.control_mut().sequence = sequence;
    }

    /// The raw function-code octet.
    pub fn function_code(&self) -> u8 {
        match self {
            Self::Request(request) => request.function.to_u8(),
            Self::Response(response) => response.function.to_u8(),
        }
    }

    pub fn data(&self) -> &ApplicationData {
        match self {
            Self::Request(request) => &request.data,
            Self::Response(response) => &response.data,
        }
    }

    pub fn data_mut(&mut self) -> &mut ApplicationData {
        match self {
            Self::Request(request) => &mut request.data,
            Self::Response(response) => &mut response.data,
        }
    }
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(request) => {
                writeln!(f, "Application (Request):")?;
                write!(f, "{}", render::indent(&request.control.to_string(), "  "))?;
                write!(f, "\n  FC : {}", request.function)?;
                let objects = request.data.to_string();
                if !objects.is_empty() {
                    write!(f, "\n{}", render::indent(&objects, "  "))?;
                }
                Ok(())
            }
            Self::Response(response) => {
                writeln!(f, "Application (Response):")?;
                write!(f, "{}", render::indent(&response.control.to_string(), "  "))?;
                write!(f, "\n  FC : {}", response.function)?;
                write!(f, "\n{}", render::indent(&response.indications.to_string(), "  "))?;
                let objects = response.data.to_string();
                if !objects.is_empty() {
                    write!(f, "\n{}", render::indent(&objects, "  "))?;
                }
                Ok(())
            }
        }
    }
}
