// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors raised while converting domain values to or from their stored form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A stored show time could not be parsed.
    #[error("Invalid show time '{value}': {reason}")]
    InvalidShowTime {
        /// The text that failed to parse.
        value: String,
        /// The parser's description of the failure.
        reason: String,
    },

    /// A show time could not be rendered into its stored form.
    #[error("Show time cannot be formatted: {0}")]
    ShowTimeFormat(String),

    /// The show time's year has no four-digit stored form.
    #[error("Show time year {0} is outside 0000..=9999")]
    YearOutOfRange(i32),
}
