// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Codec contract shared by every scalar codec.

use crate::error::{CodecError, ValueKind};
use crate::value::Value;

/// Encoding/decoding contract bound to exactly one value kind.
///
/// `encode`/`decode` are the typed entry points: passing the wrong kind does
/// not compile. `encode_value`/`decode_value` accept the runtime-tagged
/// [`Value`] and enforce the binding with [`CodecError::TypeMismatch`].
pub trait Codec {
    /// Host type this codec is bound to.
    type Item: Into<Value>;

    /// Kind accepted by [`Codec::encode_value`].
    const KIND: ValueKind;

    /// Encode a value to its wire representation.
    fn encode(&self, item: &Self::Item) -> Result<Vec<u8>, CodecError>;

    /// Decode a wire representation.
    fn decode(&self, data: &[u8]) -> Result<Self::Item, CodecError>;

    /// Borrow the bound item out of an untyped payload.
    ///
    /// Must return `None` for every kind other than [`Codec::KIND`]; no
    /// widening, narrowing or reinterpretation.
    fn bind(value: &Value) -> Option<&Self::Item>;

    /// Encode an untyped payload, rejecting any kind but [`Codec::KIND`].
    fn encode_value(&self, value: &Value) -> Result<Vec<u8>, CodecError> {
        match Self::bind(value) {
            Some(item) => self.encode(item),
            None => {
                log::debug!(
                    "[codec] {} codec rejected {} payload",
                    Self::KIND,
                    value.kind()
                );
                Err(CodecError::type_mismatch(Self::KIND, value.kind()))
            }
        }
    }

    /// Decode into an untyped payload of kind [`Codec::KIND`].
    fn decode_value(&self, data: &[u8]) -> Result<Value, CodecError> {
        self.decode(data).map(Into::into)
    }
}
