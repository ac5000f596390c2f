// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Canonical argument values.
//!
//! [`ArgValue`] holds one string, the canonical interchange form every
//! supported scalar encodes into. Encoding is total and exact for the
//! enumerated scalar set; decoding is strict and fails rather than
//! guessing.
//!
//! # Encoding rules
//!
//! - strings are stored verbatim
//! - booleans become exactly `"true"` / `"false"`
//! - integers become their exact base-10 digits (leading `-` for negative
//!   signed values, no leading zeros, no separators)
//! - floats use the shortest decimal text that parses back to the same
//!   bit value (the `Display` guarantee for `f32`/`f64`)
//!
//! # Example
//!
//! ```rust
//! use argstr::{ArgValue, Scalar, Target};
//!
//! let v = ArgValue::from(42i16);
//! assert_eq!(v.as_str(), "42");
//! assert_eq!(v.to_u8().unwrap(), 42);
//! assert_eq!(v.decode(Target::I64).unwrap(), Scalar::I64(42));
//!
//! // Out-of-range decodes fail, they never clamp.
//! let v = ArgValue::from(300u32);
//! assert!(v.to_u8().is_err());
//! ```

use crate::error::ConvertError;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::num::IntErrorKind;

/// A scalar tagged with its concrete source type.
///
/// One variant per supported source scalar, so encoding dispatch is
/// exhaustive at compile time. Fixed-point values widen to `F64` before
/// construction; the codec formats them by the double rule.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scalar {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    String(String),
}

macro_rules! impl_scalar_accessor {
    ($fn_name:ident, $ty:ty, $variant:ident) => {
        #[doc = concat!("Try to get as `", stringify!($ty), "`.")]
        pub fn $fn_name(&self) -> Option<$ty> {
            match self {
                Self::$variant(v) => Some(*v),
                _ => None,
            }
        }
    };
}

impl Scalar {
    impl_scalar_accessor!(as_bool, bool, Bool);
    impl_scalar_accessor!(as_i8, i8, I8);
    impl_scalar_accessor!(as_i16, i16, I16);
    impl_scalar_accessor!(as_i32, i32, I32);
    impl_scalar_accessor!(as_i64, i64, I64);
    impl_scalar_accessor!(as_u8, u8, U8);
    impl_scalar_accessor!(as_u16, u16, U16);
    impl_scalar_accessor!(as_u32, u32, U32);
    impl_scalar_accessor!(as_u64, u64, U64);
    impl_scalar_accessor!(as_f32, f32, F32);
    impl_scalar_accessor!(as_f64, f64, F64);

    /// Try to get as string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

macro_rules! impl_scalar_from {
    ($ty:ty, $variant:ident) => {
        impl From<$ty> for Scalar {
            fn from(v: $ty) -> Self {
                Self::$variant(v)
            }
        }
    };
}

impl_scalar_from!(bool, Bool);
impl_scalar_from!(i8, I8);
impl_scalar_from!(i16, I16);
impl_scalar_from!(i32, I32);
impl_scalar_from!(i64, I64);
impl_scalar_from!(u8, U8);
impl_scalar_from!(u16, U16);
impl_scalar_from!(u32, U32);
impl_scalar_from!(u64, U64);
impl_scalar_from!(f32, F32);
impl_scalar_from!(f64, F64);
impl_scalar_from!(String, String);

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

/// Decode targets.
///
/// Closed enumeration of everything [`ArgValue::decode`] can be asked
/// for. `Char` and `Timestamp` name conversions the codec refuses: they
/// always fail with [`ConvertError::Unsupported`] so a caller gets an
/// explicit error instead of a silently wrong value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Target {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    String,
    /// No decode rule; always unsupported.
    Char,
    /// No decode rule; always unsupported.
    Timestamp,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::String => "string",
            Self::Char => "char",
            Self::Timestamp => "timestamp",
        };
        write!(f, "{}", name)
    }
}

/// Fixed discriminator mixed into every [`ArgValue`] hash, so the holder
/// hashes distinctly from a bare string with the same content.
const ARG_VALUE_HASH_TAG: u8 = 0x5A;

/// Immutable holder of one canonical text string.
///
/// Constructed from any supported scalar; read back through the strict
/// typed decoders. Two values are equal iff their canonical text is
/// equal, and the hash follows the text, so `ArgValue` works as a key in
/// associative containers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ArgValue {
    text: String,
}

impl ArgValue {
    /// Encode a scalar into its canonical text. Never fails.
    pub fn new(scalar: impl Into<Scalar>) -> Self {
        let text = match scalar.into() {
            Scalar::Bool(v) => if v { "true" } else { "false" }.to_string(),
            Scalar::I8(v) => v.to_string(),
            Scalar::I16(v) => v.to_string(),
            Scalar::I32(v) => v.to_string(),
            Scalar::I64(v) => v.to_string(),
            Scalar::U8(v) => v.to_string(),
            Scalar::U16(v) => v.to_string(),
            Scalar::U32(v) => v.to_string(),
            Scalar::U64(v) => v.to_string(),
            Scalar::F32(v) => v.to_string(),
            Scalar::F64(v) => v.to_string(),
            Scalar::String(s) => s,
        };
        Self { text }
    }

    /// Best-effort fallback for types outside the [`Scalar`] set.
    ///
    /// Stores the value's `Display` output. No round-trip guarantee: not
    /// every type stringifies losslessly. Prefer [`ArgValue::new`] for
    /// anything `Scalar` enumerates.
    pub fn from_display<T: fmt::Display>(value: T) -> Self {
        let text = value.to_string();
        log::trace!("best-effort encode of non-scalar value: {:?}", text);
        Self { text }
    }

    /// The canonical text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume into the canonical text.
    pub fn into_string(self) -> String {
        self.text
    }

    /// Decode as `bool`.
    ///
    /// Accepts the canonical tokens case-insensitively, plus the common
    /// synonyms `1`/`0`, `yes`/`no` and `on`/`off`. Anything else fails.
    pub fn to_bool(&self) -> Result<bool, ConvertError> {
        match self.text.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(ConvertError::malformed(&self.text, Target::Bool)),
        }
    }

    /// Decode as `f64`. Standard decimal/scientific notation.
    pub fn to_f64(&self) -> Result<f64, ConvertError> {
        self.text
            .trim()
            .parse::<f64>()
            .map_err(|_| ConvertError::malformed(&self.text, Target::F64))
    }

    /// Decode as `f32`. Standard decimal/scientific notation.
    pub fn to_f32(&self) -> Result<f32, ConvertError> {
        self.text
            .trim()
            .parse::<f32>()
            .map_err(|_| ConvertError::malformed(&self.text, Target::F32))
    }

    /// Decode into the requested target.
    ///
    /// Single dispatch point over the closed [`Target`] set. Targets with
    /// no decode rule return [`ConvertError::Unsupported`].
    pub fn decode(&self, target: Target) -> Result<Scalar, ConvertError> {
        match target {
            Target::Bool => self.to_bool().map(Scalar::Bool),
            Target::I8 => self.to_i8().map(Scalar::I8),
            Target::I16 => self.to_i16().map(Scalar::I16),
            Target::I32 => self.to_i32().map(Scalar::I32),
            Target::I64 => self.to_i64().map(Scalar::I64),
            Target::U8 => self.to_u8().map(Scalar::U8),
            Target::U16 => self.to_u16().map(Scalar::U16),
            Target::U32 => self.to_u32().map(Scalar::U32),
            Target::U64 => self.to_u64().map(Scalar::U64),
            Target::F32 => self.to_f32().map(Scalar::F32),
            Target::F64 => self.to_f64().map(Scalar::F64),
            Target::String => Ok(Scalar::String(self.text.clone())),
            Target::Char | Target::Timestamp => Err(ConvertError::Unsupported(target)),
        }
    }
}

macro_rules! impl_int_decode {
    ($fn_name:ident, $ty:ty, $target:ident) => {
        impl ArgValue {
            #[doc = concat!("Decode as `", stringify!($ty), "`. Exact base-10 digits only;")]
            #[doc = "out-of-range or non-numeric text fails."]
            pub fn $fn_name(&self) -> Result<$ty, ConvertError> {
                self.text.trim().parse::<$ty>().map_err(|e| match e.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        ConvertError::out_of_range(&self.text, Target::$target)
                    }
                    _ => ConvertError::malformed(&self.text, Target::$target),
                })
            }
        }
    };
}

impl_int_decode!(to_i8, i8, I8);
impl_int_decode!(to_i16, i16, I16);
impl_int_decode!(to_i32, i32, I32);
impl_int_decode!(to_i64, i64, I64);
impl_int_decode!(to_u8, u8, U8);
impl_int_decode!(to_u16, u16, U16);
impl_int_decode!(to_u32, u32, U32);
impl_int_decode!(to_u64, u64, U64);

impl Hash for ArgValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u8(ARG_VALUE_HASH_TAG);
        self.text.hash(state);
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

macro_rules! impl_argvalue_from {
    ($ty:ty) => {
        impl From<$ty> for ArgValue {
            fn from(v: $ty) -> Self {
                Self::new(Scalar::from(v))
            }
        }
    };
}

impl_argvalue_from!(bool);
impl_argvalue_from!(i8);
impl_argvalue_from!(i16);
impl_argvalue_from!(i32);
impl_argvalue_from!(i64);
impl_argvalue_from!(u8);
impl_argvalue_from!(u16);
impl_argvalue_from!(u32);
impl_argvalue_from!(u64);
impl_argvalue_from!(f32);
impl_argvalue_from!(f64);
impl_argvalue_from!(String);
impl_argvalue_from!(&str);

impl From<Scalar> for ArgValue {
    fn from(v: Scalar) -> Self {
        Self::new(v)
    }
}
