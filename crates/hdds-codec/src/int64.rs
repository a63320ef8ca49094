// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! 64-bit signed integer codec.
//!
//! # Wire Format
//!
//! Canonical base-10 ASCII: optional `-`, then digits, no leading zeros.
//!
//! ```text
//! 2048        -> "2048"
//! -17         -> "-17"
//! i64::MIN    -> "-9223372036854775808"
//! ```
//!
//! Decoding accepts exactly one optionally signed digit run (`+` is tolerated
//! on input, never produced). Whitespace, decimal points, exponents and any
//! surrounding text are rejected.

use crate::error::{CodecError, ParseErrorKind, ValueKind};
use crate::traits::Codec;
use crate::value::Value;

/// Decimal text codec for `i64`.
///
/// Encoding is strict on type: `i32`, `isize` and floats are refused by
/// [`Codec::encode_value`]. Decoding into a narrower integer is allowed via
/// [`Int64Codec::decode_as`] as long as the parsed value fits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Int64Codec;

impl Int64Codec {
    pub const fn new() -> Self {
        Self
    }

    /// Parse the wire form and narrow it into `T`.
    ///
    /// The literal must be valid for `i64` first; a value outside `T`'s range
    /// fails with [`ParseErrorKind::OutOfRange`].
    pub fn decode_as<T>(&self, data: &[u8]) -> Result<T, CodecError>
    where
        T: TryFrom<i64>,
    {
        let value = self.decode(data)?;
        T::try_from(value).map_err(|_| {
            let target = std::any::type_name::<T>();
            log::debug!("[codec::int64] {} does not fit {}", value, target);
            CodecError::parse(data, target, ParseErrorKind::OutOfRange)
        })
    }
}

impl Codec for Int64Codec {
    type Item = i64;

    const KIND: ValueKind = ValueKind::Int64;

    fn encode(&self, item: &i64) -> Result<Vec<u8>, CodecError> {
        Ok(item.to_string().into_bytes())
    }

    fn decode(&self, data: &[u8]) -> Result<i64, CodecError> {
        let parsed = std::str::from_utf8(data)
            .map_err(|_| ParseErrorKind::InvalidDigit)
            .and_then(|s| {
                s.parse::<i64>()
                    .map_err(|e| ParseErrorKind::from_int_error(&e))
            });

        parsed.map_err(|kind| {
            log::debug!(
                "[codec::int64] rejected {} byte literal: {}",
                data.len(),
                kind
            );
            CodecError::parse(data, "i64", kind)
        })
    }

    fn bind(value: &Value) -> Option<&i64> {
        match value {
            Value::Int64(v) => Some(v),
            _ => None,
        }
    }
}
