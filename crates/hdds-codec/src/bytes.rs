// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Raw byte passthrough codec.

use crate::error::{CodecError, ValueKind};
use crate::traits::Codec;
use crate::value::Value;

/// Identity codec for raw byte sequences.
///
/// Encoding copies the input; decoding accepts any input, including empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BytesCodec;

impl BytesCodec {
    pub const fn new() -> Self {
        Self
    }
}

impl Codec for BytesCodec {
    type Item = Vec<u8>;

    const KIND: ValueKind = ValueKind::Bytes;

    fn encode(&self, item: &Vec<u8>) -> Result<Vec<u8>, CodecError> {
        Ok(item.clone())
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        Ok(data.to_vec())
    }

    fn bind(value: &Value) -> Option<&Vec<u8>> {
        match value {
            Value::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }
}
