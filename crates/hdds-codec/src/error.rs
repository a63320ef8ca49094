// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Codec errors and value kinds.

use std::fmt;
use std::num::{IntErrorKind, ParseIntError};
use std::str::Utf8Error;
use thiserror::Error;

/// Runtime kind of a [`Value`](crate::Value).
///
/// Every kind is distinct: `Int32`, `Int` and `Int64` never alias each other,
/// and neither do `Bytes` and `Text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ValueKind {
    /// Raw byte sequence.
    Bytes,
    /// UTF-8 text.
    Text,
    /// Boolean.
    Bool,
    /// 32-bit signed integer.
    Int32,
    /// Plain machine-width signed integer (`isize`).
    Int,
    /// 64-bit signed integer.
    Int64,
    /// 32-bit float.
    Float32,
    /// 64-bit float.
    Float64,
}

impl ValueKind {
    /// Short lowercase name used in error messages and logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bytes => "bytes",
            Self::Text => "text",
            Self::Bool => "bool",
            Self::Int32 => "int32",
            Self::Int => "int",
            Self::Int64 => "int64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why an integer literal was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// No bytes at all.
    Empty,
    /// Anything other than an optional sign followed by ASCII digits.
    InvalidDigit,
    /// Well-formed literal that does not fit the target width.
    OutOfRange,
}

impl ParseErrorKind {
    pub(crate) fn from_int_error(err: &ParseIntError) -> Self {
        match err.kind() {
            IntErrorKind::Empty => Self::Empty,
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Self::OutOfRange,
            _ => Self::InvalidDigit,
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Empty => "empty input",
            Self::InvalidDigit => "invalid digit",
            Self::OutOfRange => "out of range",
        })
    }
}

/// Codec errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Untyped payload kind does not match the codec's bound kind.
    #[error("type mismatch: expected {expected}, got {found}")]
    TypeMismatch {
        expected: ValueKind,
        found: ValueKind,
    },

    /// Input is not a fully consumed base-10 literal within the target range.
    #[error("cannot parse {input:?} as {target}: {kind}")]
    Parse {
        input: String,
        target: &'static str,
        kind: ParseErrorKind,
    },

    /// Text payload is not valid UTF-8.
    #[error("invalid UTF-8 text: {0}")]
    InvalidUtf8(#[from] Utf8Error),
}

impl CodecError {
    pub(crate) fn type_mismatch(expected: ValueKind, found: ValueKind) -> Self {
        Self::TypeMismatch { expected, found }
    }

    pub(crate) fn parse(data: &[u8], target: &'static str, kind: ParseErrorKind) -> Self {
        Self::Parse {
            input: String::from_utf8_lossy(data).into_owned(),
            target,
            kind,
        }
    }

    /// True for [`CodecError::TypeMismatch`].
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    /// True for [`CodecError::Parse`].
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}
