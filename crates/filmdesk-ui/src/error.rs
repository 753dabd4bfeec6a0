//! Error types surfaced by the page bindings.

use filmdesk_api_models::{UserIdError, UserRecordError};
use thiserror::Error;

/// Failures raised while binding or running page handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// A required element id is absent from the document.
    #[error("element #{id} is missing from the page")]
    MissingElement {
        /// Element id that was looked up.
        id: &'static str,
    },
    /// The element exists but has the wrong type.
    #[error("element #{id} is not {expected}")]
    UnexpectedElement {
        /// Element id that was looked up.
        id: &'static str,
        /// Expected element kind.
        expected: &'static str,
    },
    /// A trigger element lacks its data attribute.
    #[error("trigger element has no {attribute} attribute")]
    MissingAttribute {
        /// Attribute name.
        attribute: &'static str,
    },
    /// The edit trigger carried an unusable user payload.
    #[error("invalid user payload: {0}")]
    InvalidUser(#[from] UserRecordError),
    /// The delete trigger carried an unusable user id.
    #[error("invalid delete target: {0}")]
    InvalidUserId(#[from] UserIdError),
    /// The current page URL could not be parsed.
    #[error("cannot rewrite page url '{href}': {detail}")]
    InvalidUrl {
        /// URL as reported by the browser.
        href: String,
        /// Parser diagnostic.
        detail: String,
    },
    /// A browser API call rejected the operation.
    #[error("{operation} failed: {detail}")]
    Dom {
        /// Operation that failed.
        operation: &'static str,
        /// Debug rendering of the thrown value.
        detail: String,
    },
}

impl UiError {
    #[cfg(target_arch = "wasm32")]
    pub(crate) fn dom(operation: &'static str, err: &wasm_bindgen::JsValue) -> Self {
        Self::Dom {
            operation,
            detail: format!("{err:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_errors_keep_their_detail() {
        let err = UiError::from(UserRecordError::Empty);
        assert_eq!(err.to_string(), "invalid user payload: user payload is empty");

        let err = UiError::from(UserIdError::NotPositive);
        assert_eq!(
            err.to_string(),
            "invalid delete target: user id must be a positive integer"
        );
    }

    #[test]
    fn missing_element_names_the_id() {
        let err = UiError::MissingElement {
            id: "editUserModal",
        };
        assert_eq!(err.to_string(), "element #editUserModal is missing from the page");
    }
}
