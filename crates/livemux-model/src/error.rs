// Copyright (C) 2025 LiveMux Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Error types for livemux-model.

use thiserror::Error;

/// Result type using ModelError.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors raised by the model layer itself.
///
/// Both variants are local programmer errors that fail fast at the point of
/// the invalid operation. Network, auth, and throttling failures belong to
/// the transport layer (see [`crate::transport::TransportError`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A key was added to a map-typed field that already contains it.
    #[error("duplicate key {key:?} in {field}")]
    DuplicateKey {
        /// Wire name of the map field.
        field: &'static str,
        /// The offending key.
        key: String,
    },

    /// A wire string did not match any declared value of a closed enum.
    ///
    /// The model is deliberately strict here: there is no catch-all variant,
    /// so a value added service-side after this crate was built is a hard
    /// error rather than a silently degraded value.
    #[error("unrecognized value {value:?} for {type_name}")]
    UnrecognizedEnumValue {
        /// Name of the enum type that rejected the value.
        type_name: &'static str,
        /// The wire string that failed to parse.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_key_message_names_field_and_key() {
        let err = ModelError::DuplicateKey {
            field: "Tags",
            key: "env".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate key \"env\" in Tags");
    }

    #[test]
    fn unrecognized_enum_value_message_names_type() {
        let err = ModelError::UnrecognizedEnumValue {
            type_name: "ChannelClass",
            value: "NOT_A_REAL_VALUE".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unrecognized value \"NOT_A_REAL_VALUE\" for ChannelClass"
        );
    }
}
