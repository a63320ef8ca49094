// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Untyped value payload.
//!
//! Typed callers never need this: `BytesCodec::encode` only accepts bytes at
//! compile time. [`Value`] exists for the boundary where the kind is known only
//! at runtime, e.g. a payload loaded from a JSON store, and it is where
//! `TypeMismatch` is still reachable.

use crate::error::ValueKind;

/// A value whose kind is carried at runtime.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", content = "value", rename_all = "snake_case")
)]
pub enum Value {
    Bytes(Vec<u8>),
    Text(String),
    Bool(bool),
    Int32(i32),
    Int(isize),
    Int64(i64),
    Float32(f32),
    Float64(f64),
}

impl Value {
    /// Runtime kind of this payload.
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Bytes(_) => ValueKind::Bytes,
            Self::Text(_) => ValueKind::Text,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int32(_) => ValueKind::Int32,
            Self::Int(_) => ValueKind::Int,
            Self::Int64(_) => ValueKind::Int64,
            Self::Float32(_) => ValueKind::Float32,
            Self::Float64(_) => ValueKind::Float64,
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

impl_from! {
    Vec<u8> => Bytes,
    String => Text,
    bool => Bool,
    i32 => Int32,
    isize => Int,
    i64 => Int64,
    f32 => Float32,
    f64 => Float64,
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Self::Bytes(v.to_vec())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}
