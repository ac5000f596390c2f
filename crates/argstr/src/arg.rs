// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Coarse argument kinds and argument descriptors.
//!
//! Device settings surface as untyped arguments classified only by a
//! coarse kind. [`ArgValue::to_kind`] decodes to one representative
//! width per kind so callers never enumerate concrete widths, and
//! [`ArgInfo`] describes one argument (key, default, kind, range,
//! options) the way a device exposes it.

use crate::error::ConvertError;
use crate::value::{ArgValue, Scalar, Target};
use std::fmt;

/// Coarse argument classification.
///
/// The binding layer's four broad categories. Each maps to one
/// representative concrete type: `bool`, `i64`, `f64`, or the raw text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArgKind {
    Bool,
    Int,
    Float,
    #[default]
    String,
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
        };
        write!(f, "{}", name)
    }
}

impl ArgValue {
    /// Decode to the representative type for a coarse kind.
    ///
    /// `Bool` decodes as `bool`, `Int` as `i64`, `Float` as `f64`;
    /// `String` returns the canonical text unmodified and cannot fail.
    pub fn to_kind(&self, kind: ArgKind) -> Result<Scalar, ConvertError> {
        match kind {
            ArgKind::Bool => self.decode(Target::Bool),
            ArgKind::Int => self.decode(Target::I64),
            ArgKind::Float => self.decode(Target::F64),
            ArgKind::String => Ok(Scalar::String(self.as_str().to_string())),
        }
    }
}

/// Numeric domain for an argument: `[minimum, maximum]` with an optional
/// step (0.0 means continuous).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArgRange {
    minimum: f64,
    maximum: f64,
    step: f64,
}

impl ArgRange {
    /// Continuous range.
    pub fn new(minimum: f64, maximum: f64) -> Self {
        Self {
            minimum,
            maximum,
            step: 0.0,
        }
    }

    /// Range with a step between valid values.
    pub fn with_step(minimum: f64, maximum: f64, step: f64) -> Self {
        Self {
            minimum,
            maximum,
            step,
        }
    }

    /// Lower bound (inclusive).
    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    /// Upper bound (inclusive).
    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Step between valid values; 0.0 for continuous.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Bounds membership (step is advisory, not checked here).
    pub fn contains(&self, value: f64) -> bool {
        value >= self.minimum && value <= self.maximum
    }
}

/// Descriptor for one device argument.
///
/// `key` identifies the argument; `value` is its default in canonical
/// form. `options` restricts the argument to enumerated values, with
/// `option_names` carrying display labels in the same order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArgInfo {
    /// Argument key.
    pub key: String,
    /// Default value in canonical form.
    pub value: ArgValue,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Unit label ("Hz", "dB", ...).
    pub units: String,
    /// Coarse kind of the argument.
    pub kind: ArgKind,
    /// Numeric domain, when the argument is ranged.
    pub range: Option<ArgRange>,
    /// Enumerated valid values (canonical form), empty when unrestricted.
    pub options: Vec<String>,
    /// Display labels for `options`, same order.
    pub option_names: Vec<String>,
}

impl ArgInfo {
    /// New descriptor for `key` with the given kind.
    pub fn new(key: impl Into<String>, kind: ArgKind) -> Self {
        Self {
            key: key.into(),
            kind,
            ..Self::default()
        }
    }

    /// Set the default value.
    pub fn default_value(mut self, value: impl Into<ArgValue>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the unit label.
    pub fn units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }

    /// Set the numeric domain.
    pub fn range(mut self, range: ArgRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Add one enumerated option with its display label.
    pub fn option(mut self, value: impl Into<String>, name: impl Into<String>) -> Self {
        self.options.push(value.into());
        self.option_names.push(name.into());
        self
    }

    /// Whether `value` is acceptable for this argument: inside the range
    /// if one is set, and one of the options if any are enumerated.
    pub fn accepts(&self, value: &ArgValue) -> bool {
        if let Some(range) = &self.range {
            match value.to_f64() {
                Ok(v) if range.contains(v) => {}
                _ => return false,
            }
        }
        if !self.options.is_empty() {
            return self.options.iter().any(|opt| opt == value.as_str());
        }
        true
    }
}
