//! The frame façade.
//!
//! A [`Frame`] owns its three layers by value. `decode` fills them from one
//! contiguous wire frame; `encode` reassembles the bytes, recomputing the
//! data-link length, the header CRC, and every transport block CRC from the
//! current field values, so a mutated frame always emits a consistent wire
//! image.

use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;

use crate::application::Application;
use crate::encoding::{crc, writer::Writer};
use crate::link::{self, LinkHeader};
use crate::render;
use crate::transport::TransportHeader;
use crate::{DecodeError, EncodeError};

/// One decoded DNP3 frame.
///
/// The transport header is present when the frame carries more than the
/// ten data-link octets; the application is present when bytes remain
/// after the transport octet.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub link: LinkHeader,
    pub transport: Option<TransportHeader>,
    pub application: Option<Application>,
}

impl Frame {
    /// Decode one complete frame.
    ///
    /// Fatal errors abort with `Err`. An unsupported (group, variation) in
    /// the object stream is non-fatal: the frame comes back fully usable
    /// (the unknown object holds its raw bytes) and the error is reported
    /// in the second tuple slot.
    pub fn decode(bytes: &[u8]) -> Result<(Self, Option<DecodeError>), DecodeError> {
        let header = LinkHeader::decode(bytes)?;
        if bytes.len() == link::HEADER_LEN {
            return Ok((
                Self {
                    link: header,
                    transport: None,
                    application: None,
                },
                None,
            ));
        }

        let (transport, clean) = TransportHeader::decode(&bytes[link::HEADER_LEN..])?;
        if clean.is_empty() {
            return Ok((
                Self {
                    link: header,
                    transport: Some(transport),
                    application: None,
                },
                None,
            ));
        }

        let (application, warning) = Application::decode(&clean, header.control.direction)?;
        Ok((
            Self {
                link: header,
                transport: Some(transport),
                application: Some(application),
            },
            warning,
        ))
    }

    /// Reassemble the wire bytes.
    ///
    /// The data-link length is recomputed from the body (and must fit one
    /// octet), the header CRC is recomputed over the first eight bytes, and
    /// the body is re-interleaved with fresh block CRCs.
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let mut header = self.link;

        let Some(transport) = &self.transport else {
            if self.application.is_some() {
                return Err(EncodeError::Message(
                    "application data requires a transport header",
                ));
            }
            header.length = 5;
            let mut w = Writer::with_capacity(link::HEADER_LEN);
            header.encode(&mut w)?;
            return Ok(w.into_vec());
        };

        let mut body = Writer::new();
        body.write_u8(transport.control_byte()?);
        if let Some(application) = &self.application {
            application.encode(&mut body)?;
        }

        let length = body.len() + 5;
        if length > u8::MAX as usize {
            return Err(EncodeError::Overflow);
        }
        header.length = length as u16;

        let framed = crc::insert_crcs(body.as_bytes());
        let mut w = Writer::with_capacity(link::HEADER_LEN + framed.len());
        header.encode(&mut w)?;
        w.write_all(&framed);
        Ok(w.into_vec())
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DNP3:")?;
        write!(f, "{}", render::indent(&self.link.to_string(), "  "))?;
        if let Some(transport) = &self.transport {
            write!(f, "\n{}", render::indent(&transport.to_string(), "  "))?;
        }
        if let Some(application) = &self.application {
            write!(f, "\n{}", render::indent(&application.to_string(), "  "))?;
        }
        Ok(())
    }
}
