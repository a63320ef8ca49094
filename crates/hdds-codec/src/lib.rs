// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # HDDS Codec - typed scalar codecs
//!
//! Converts strictly typed scalar values to and from a canonical byte
//! representation. Each codec is bound to exactly one value kind:
//!
//! | Codec | Item | Wire form |
//! |-------|------|-----------|
//! | [`BytesCodec`] | `Vec<u8>` | the bytes, unchanged |
//! | [`TextCodec`] | `String` | the UTF-8 bytes of the text |
//! | [`Int64Codec`] | `i64` | base-10 ASCII (`"-2048"`) |
//!
//! There is no length prefix and no type tag: the consumer already knows which
//! codec produced the bytes.
//!
//! ## Quick Start
//!
//! ```rust
//! use hdds_codec::{Codec, Int64Codec, TextCodec, Value};
//!
//! # fn main() -> Result<(), hdds_codec::CodecError> {
//! let ints = Int64Codec::new();
//! assert_eq!(ints.encode(&2048)?, b"2048");
//! assert_eq!(ints.decode(b"2048")?, 2048);
//!
//! // Untyped payloads are checked at runtime.
//! let text = TextCodec::new();
//! assert!(text.encode_value(&Value::from(b"raw".to_vec())).is_err());
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `serde` (default): `Serialize`/`Deserialize` for [`Value`] and [`ValueKind`].

pub mod bytes;
pub mod error;
pub mod int64;
pub mod text;
pub mod traits;
pub mod value;

pub use bytes::BytesCodec;
pub use error::{CodecError, ParseErrorKind, ValueKind};
pub use int64::Int64Codec;
pub use text::TextCodec;
pub use traits::Codec;
pub use value::Value;

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
