// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Text codec.
//!
//! The wire form is the UTF-8 bytes of the string, nothing else. A byte
//! sequence with the same content is still a different kind and is refused by
//! [`Codec::encode_value`].

use crate::error::{CodecError, ValueKind};
use crate::traits::Codec;
use crate::value::Value;

/// Identity codec for text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextCodec;

impl TextCodec {
    pub const fn new() -> Self {
        Self
    }

    /// Decode without failing: invalid UTF-8 sequences become U+FFFD.
    pub fn decode_lossy(&self, data: &[u8]) -> String {
        String::from_utf8_lossy(data).into_owned()
    }
}

impl Codec for TextCodec {
    type Item = String;

    const KIND: ValueKind = ValueKind::Text;

    fn encode(&self, item: &String) -> Result<Vec<u8>, CodecError> {
        Ok(item.as_bytes().to_vec())
    }

    fn decode(&self, data: &[u8]) -> Result<String, CodecError> {
        match std::str::from_utf8(data) {
            Ok(text) => Ok(text.to_owned()),
            Err(e) => {
                log::debug!(
                    "[codec::text] rejected {} byte payload: {}",
                    data.len(),
                    e
                );
                Err(CodecError::InvalidUtf8(e))
            }
        }
    }

    fn bind(value: &Value) -> Option<&String> {
        match value {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_succeeds() {
        let c = TextCodec::new();
        let encoded = c.encode(&"encode this".to_string()).expect("encode");
        assert_eq!(encoded, b"encode this");
    }

    #[test]
    fn test_encode_value_rejects_bytes() {
        let c = TextCodec::new();
        let err = c
            .encode_value(&Value::from(b"encode this".to_vec()))
            .unwrap_err();
        assert_eq!(
            err,
            CodecError::TypeMismatch {
                expected: ValueKind::Text,
                found: ValueKind::Bytes,
            }
        );
    }

    #[test]
    fn test_encode_value_rejects_bool_and_int() {
        let c = TextCodec::new();
        assert!(c.encode_value(&Value::from(true)).unwrap_err().is_type_mismatch());
        assert!(c.encode_value(&Value::from(2048isize)).unwrap_err().is_type_mismatch());
    }

    #[test]
    fn test_decode_succeeds() {
        let c = TextCodec::new();
        assert_eq!(c.decode(b"decode this").expect("decode"), "decode this");
        assert_eq!(c.decode(&[]).expect("decode"), "");
    }

    #[test]
    fn test_multibyte_roundtrip() {
        let c = TextCodec::new();
        let text = "température 温度 🦀".to_string();
        let encoded = c.encode(&text).expect("encode");
        assert_eq!(encoded.len(), text.len());
        assert_eq!(c.decode(&encoded).expect("decode"), text);
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let c = TextCodec::new();
        let err = c.decode(&[b'o', b'k', 0xff]).unwrap_err();
        assert!(matches!(err, CodecError::InvalidUtf8(_)));
    }

    #[test]
    fn test_decode_lossy() {
        let c = TextCodec::new();
        assert_eq!(c.decode_lossy(&[b'o', b'k', 0xff]), "ok\u{fffd}");
        assert_eq!(c.decode_lossy(b"plain"), "plain");
    }
}
