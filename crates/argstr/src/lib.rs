// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # argstr - Canonical string codec for SDR argument values
//!
//! Hardware-abstraction APIs for SDR devices pass settings as untyped
//! "argument" values. This crate converts statically-typed Rust scalars
//! (booleans, integers of every width and signedness, floats, strings)
//! into one canonical string representation and strictly back, so typed
//! callers and string-typed device surfaces interoperate without loss.
//!
//! ## Quick Start
//!
//! ```rust
//! use argstr::{ArgKind, ArgValue, Kwargs, Scalar};
//!
//! // Encode: any supported scalar becomes canonical text.
//! let rate = ArgValue::from(2_400_000u32);
//! assert_eq!(rate.as_str(), "2400000");
//!
//! // Decode: strict, typed, never silently wrong.
//! assert_eq!(rate.to_u32().unwrap(), 2_400_000);
//! assert!(rate.to_u16().is_err()); // out of range, not clamped
//!
//! // Coarse-kind dispatch for callers that only know the category.
//! assert_eq!(rate.to_kind(ArgKind::Int).unwrap(), Scalar::I64(2_400_000));
//!
//! // Argument maps use the `key0=val0, key1=val1` markup.
//! let args: Kwargs = "driver=rtlsdr, rate=2400000".parse().unwrap();
//! assert_eq!(args.get_value("rate").unwrap().to_u32().unwrap(), 2_400_000);
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ArgValue`] | Immutable holder of one canonical text string |
//! | [`Scalar`] | Tagged union of every supported source scalar |
//! | [`Target`] | Closed enumeration of decode targets |
//! | [`ArgKind`] | Coarse classification (bool / int / float / string) |
//! | [`ArgInfo`] | Descriptor for one device argument |
//! | [`Kwargs`] | String argument map with textual markup |
//!
//! ## Guarantees
//!
//! - Encoding is total and exact: every in-range value of every supported
//!   scalar type round-trips through its canonical text.
//! - Decoding is strict: malformed or out-of-range text fails with
//!   [`ConvertError`], never a clamped or truncated value.
//! - Targets without a decode rule fail with an explicit
//!   [`ConvertError::Unsupported`].
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` derives on the public types.

pub mod arg;
pub mod error;
pub mod kwargs;
pub mod value;

pub use arg::{ArgInfo, ArgKind, ArgRange};
pub use error::{ConvertError, InvalidReason};
pub use kwargs::Kwargs;
pub use value::{ArgValue, Scalar, Target};

#[cfg(test)]
mod tests;
