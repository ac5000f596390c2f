// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Conversion errors.
//!
//! Only decode paths can fail. Constructing an [`ArgValue`] from any
//! supported scalar is total, so there is no construction error here.
//!
//! [`ArgValue`]: crate::ArgValue

use crate::value::Target;
use thiserror::Error;

/// Why a decode rejected the stored text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// Text does not have the shape the target requires.
    Malformed,
    /// Text parsed as a number but does not fit the target width.
    OutOfRange,
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed => write!(f, "malformed"),
            Self::OutOfRange => write!(f, "out of range"),
        }
    }
}

/// Decode/convert errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// The requested target has no decode rule. Never recovered locally.
    #[error("no conversion rule for target type {0}")]
    Unsupported(Target),

    /// The stored text cannot be decoded as the requested target, either
    /// because it is malformed or because the value exceeds the target
    /// width's range. Never clamped or truncated.
    #[error("cannot decode {text:?} as {target}: {reason}")]
    Invalid {
        /// The canonical text that failed to decode.
        text: String,
        /// The requested target.
        target: Target,
        /// Malformed text vs. out-of-range value.
        reason: InvalidReason,
    },
}

impl ConvertError {
    pub(crate) fn malformed(text: &str, target: Target) -> Self {
        Self::Invalid {
            text: text.to_string(),
            target,
            reason: InvalidReason::Malformed,
        }
    }

    pub(crate) fn out_of_range(text: &str, target: Target) -> Self {
        Self::Invalid {
            text: text.to_string(),
            target,
            reason: InvalidReason::OutOfRange,
        }
    }
}
