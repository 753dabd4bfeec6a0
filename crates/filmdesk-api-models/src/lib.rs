#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared wire types for the Filmdesk admin pages.
//!
//! The server renders these payloads into `data-*` attributes and serves the
//! matching REST endpoints; the wasm front end decodes them here so both sides
//! agree on one contract.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Path prefix of the user delete endpoint (`DELETE /user/delete/{id}`).
pub const DELETE_USER_PREFIX: &str = "/user/delete/";

/// Errors raised while parsing a [`UserId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserIdError {
    /// The attribute was empty or whitespace.
    #[error("user id is empty")]
    Empty,
    /// The attribute was not plain decimal digits without sign or leading zeros.
    #[error("user id '{value}' is not a decimal integer")]
    NotNumeric {
        /// Raw value as found on the element.
        value: String,
    },
    /// Identifiers start at 1.
    #[error("user id must be a positive integer")]
    NotPositive,
}

/// Database identifier of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw identifier.
    ///
    /// # Errors
    /// Returns [`UserIdError::NotPositive`] for zero.
    pub const fn new(raw: u64) -> Result<Self, UserIdError> {
        if raw == 0 {
            return Err(UserIdError::NotPositive);
        }
        Ok(Self(raw))
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for UserId {
    type Error = UserIdError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for u64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl FromStr for UserId {
    type Err = UserIdError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(UserIdError::Empty);
        }
        let not_numeric = || UserIdError::NotNumeric {
            value: trimmed.to_string(),
        };
        if !trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(not_numeric());
        }
        if trimmed.len() > 1 && trimmed.starts_with('0') {
            return Err(not_numeric());
        }
        let value = trimmed.parse::<u64>().map_err(|_| not_numeric())?;
        Self::new(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Relative path of the delete endpoint for `id`.
#[must_use]
pub fn delete_user_path(id: UserId) -> String {
    format!("{DELETE_USER_PREFIX}{id}")
}

/// Errors raised while decoding a [`UserRecord`] payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserRecordError {
    /// The attribute carried no payload.
    #[error("user payload is empty")]
    Empty,
    /// The payload is not valid JSON or does not match the record schema.
    #[error("malformed user payload: {message}")]
    Malformed {
        /// Parser diagnostic.
        message: String,
        /// 1-based line of the failure.
        line: usize,
        /// 1-based column of the failure.
        column: usize,
    },
    /// The payload parsed but a field holds an unusable value.
    #[error("user payload field '{field}' {reason}")]
    InvalidField {
        /// Wire name of the offending field.
        field: &'static str,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}

impl From<serde_json::Error> for UserRecordError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}

/// User row as embedded in the user list's `data-target` attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Account identifier.
    pub id: UserId,
    /// Display name.
    #[serde(rename = "fullname")]
    pub full_name: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Login e-mail address.
    pub email: String,
    /// Soft-delete flag.
    pub is_deleted: bool,
}

impl UserRecord {
    /// Decode and validate a JSON payload.
    ///
    /// Every field is required; unknown keys are ignored.
    ///
    /// # Errors
    /// Returns [`UserRecordError::Empty`] for a blank payload,
    /// [`UserRecordError::Malformed`] when the JSON does not fit the schema and
    /// [`UserRecordError::InvalidField`] when [`UserRecord::validate`] rejects it.
    pub fn from_json(raw: &str) -> Result<Self, UserRecordError> {
        if raw.trim().is_empty() {
            return Err(UserRecordError::Empty);
        }
        let record: Self = serde_json::from_str(raw)?;
        record.validate()?;
        Ok(record)
    }

    /// Check field values the type system cannot express.
    ///
    /// # Errors
    /// Returns [`UserRecordError::InvalidField`] when the e-mail is blank or
    /// lacks an `@`.
    pub fn validate(&self) -> Result<(), UserRecordError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(UserRecordError::InvalidField {
                field: "email",
                reason: "must not be empty",
            });
        }
        if !email.contains('@') {
            return Err(UserRecordError::InvalidField {
                field: "email",
                reason: "must contain '@'",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{"id":1,"fullname":"A B","first_name":"A","last_name":"B","email":"a@b.c","is_deleted":false}"#;

    #[test]
    fn record_decodes_wire_names() {
        let record = UserRecord::from_json(SAMPLE).expect("valid payload");
        assert_eq!(record.id.get(), 1);
        assert_eq!(record.full_name, "A B");
        assert_eq!(record.first_name, "A");
        assert_eq!(record.last_name, "B");
        assert_eq!(record.email, "a@b.c");
        assert!(!record.is_deleted);
    }

    #[test]
    fn record_ignores_extra_keys() {
        let raw = r#"{"id":7,"fullname":"C D","first_name":"C","last_name":"D","email":"c@d.e","is_deleted":true,"role":"admin"}"#;
        let record = UserRecord::from_json(raw).expect("extra keys are tolerated");
        assert_eq!(record.id.get(), 7);
        assert!(record.is_deleted);
    }

    #[test]
    fn record_rejects_blank_payload() {
        assert_eq!(UserRecord::from_json("   "), Err(UserRecordError::Empty));
    }

    #[test]
    fn record_reports_parse_position() {
        let err = UserRecord::from_json("{\"id\":1,").unwrap_err();
        match err {
            UserRecordError::Malformed { line, column, .. } => {
                assert_eq!(line, 1);
                assert!(column > 0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn record_requires_every_field() {
        let raw = r#"{"id":1,"fullname":"A B","first_name":"A","last_name":"B","email":"a@b.c"}"#;
        let err = UserRecord::from_json(raw).unwrap_err();
        assert!(err.to_string().contains("is_deleted"));
    }

    #[test]
    fn record_rejects_mistyped_fields() {
        let raw = r#"{"id":"1","fullname":"A B","first_name":"A","last_name":"B","email":"a@b.c","is_deleted":false}"#;
        assert!(matches!(
            UserRecord::from_json(raw),
            Err(UserRecordError::Malformed { .. })
        ));
    }

    #[test]
    fn record_rejects_zero_id() {
        let raw = r#"{"id":0,"fullname":"A B","first_name":"A","last_name":"B","email":"a@b.c","is_deleted":false}"#;
        let err = UserRecord::from_json(raw).unwrap_err();
        assert!(err.to_string().contains("positive"));
    }

    #[test]
    fn record_rejects_unusable_email() {
        let raw = r#"{"id":3,"fullname":"A B","first_name":"A","last_name":"B","email":"nobody","is_deleted":false}"#;
        assert_eq!(
            UserRecord::from_json(raw),
            Err(UserRecordError::InvalidField {
                field: "email",
                reason: "must contain '@'",
            })
        );
    }

    #[test]
    fn user_id_parses_attribute_text() {
        assert_eq!(" 42 ".parse::<UserId>().map(UserId::get), Ok(42));
        assert_eq!("".parse::<UserId>(), Err(UserIdError::Empty));
        assert_eq!("0".parse::<UserId>(), Err(UserIdError::NotPositive));
        assert_eq!(
            "-3".parse::<UserId>(),
            Err(UserIdError::NotNumeric {
                value: "-3".to_string()
            })
        );
    }

    #[test]
    fn user_id_rejects_signs_and_padding() {
        for raw in ["+42", "007", "4 2", "0x2a", "42.0"] {
            assert_eq!(
                raw.parse::<UserId>(),
                Err(UserIdError::NotNumeric {
                    value: raw.to_string()
                }),
                "{raw} should be rejected"
            );
        }
        assert_eq!(
            "18446744073709551616".parse::<UserId>(),
            Err(UserIdError::NotNumeric {
                value: "18446744073709551616".to_string()
            })
        );
        assert_eq!("10".parse::<UserId>().map(UserId::get), Ok(10));
    }

    #[test]
    fn delete_path_embeds_id() {
        let id = UserId::new(42).expect("positive id");
        assert_eq!(delete_user_path(id), "/user/delete/42");
    }
}
