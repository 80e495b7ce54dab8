//! DNP3 (IEEE-1815) protocol encoding and decoding in pure Rust.
//!
//! `rustdnp-core` provides `no_std`-compatible encoding and decoding of DNP3
//! frames: the fixed data-link header, the CRC-interleaved transport layer,
//! and the application layer's object stream. A decoded [`frame::Frame`]
//! re-encodes to the exact bytes it was parsed from, and every field of the
//! tree is open for mutation before re-encoding.
//!
//! # Feature flags
//!
//! - **`std`** (default) — enables `std::error::Error` implementations.
//! - **`alloc`** (default) — enables the owned frame tree and everything that
//!   decodes into it. Without it only the encoding primitives, header types,
//!   and validation remain.
//! - **`serde`** — derives `Serialize`/`Deserialize` on the frame tree.
//! - **`chrono`** — `DateTime<Utc>` conversions and human-readable timestamp
//!   rendering.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// Application layer: requests, responses, internal indications, and the
/// object stream.
#[cfg(feature = "alloc")]
pub mod application;
/// Binary encoding primitives: byte reader/writer and the DNP3 CRC.
pub mod encoding;
/// Error types for encoding and decoding operations.
pub mod error;
/// Frame façade tying the three layers together.
#[cfg(feature = "alloc")]
pub mod frame;
/// Data-link layer: the 10-byte frame header.
pub mod link;
/// Object headers, qualifier codes, range fields, and the
/// (group, variation) registry.
pub mod object;
/// Point variants carried by data objects.
#[cfg(feature = "alloc")]
pub mod points;
/// Absolute and relative timestamp codecs.
pub mod time;
/// Transport layer: fragmentation header and CRC interleaving.
#[cfg(feature = "alloc")]
pub mod transport;

#[cfg(feature = "alloc")]
mod render;

pub use error::{DecodeError, EncodeError};
#[cfg(feature = "alloc")]
pub use frame::Frame;
