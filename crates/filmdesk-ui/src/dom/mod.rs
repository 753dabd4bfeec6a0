//! Element ids, classes and attributes the server-rendered user list exposes.

#[cfg(target_arch = "wasm32")]
pub(crate) mod query;

/// Root of the edit-user dialog.
pub const EDIT_MODAL: &str = "editUserModal";
/// Root of the add-user dialog.
pub const ADD_MODAL: &str = "add-user-modal";
/// Close button of the add-user dialog (optional).
pub const ADD_MODAL_CLOSE: &str = "modalAddCloseButton";
/// Close button of the edit-user dialog (optional).
pub const EDIT_MODAL_CLOSE: &str = "editUserModalCloseButton";
/// Search text input (optional).
pub const SEARCH_INPUT: &str = "table-search-users";
/// Search submit button (optional).
pub const SEARCH_BUTTON: &str = "table-search-user-button";
/// JSON page configuration script (optional).
pub const PAGE_CONFIG: &str = "user-page-config";
/// Toast container (created when absent).
pub const TOAST_CONTAINER: &str = "user-page-toasts";

/// Edit form inputs.
pub mod edit_form {
    /// Display name input.
    pub const FULL_NAME: &str = "user-edit-fullname";
    /// Given name input.
    pub const FIRST_NAME: &str = "user-edit-first-name";
    /// Family name input.
    pub const LAST_NAME: &str = "user-edit-last-name";
    /// Hidden id input.
    pub const ID: &str = "user-edit-id";
    /// E-mail input.
    pub const EMAIL: &str = "user-edit-email";
    /// Password input.
    pub const PASSWORD: &str = "user-edit-password";
    /// Password confirmation input.
    pub const PASSWORD_CONFIRMATION: &str = "user-edit-password_confirmation";
    /// Redirect target submitted with the form.
    pub const NEXT_URL: &str = "user-edit-next_url";
}

/// Class marking edit triggers.
pub const EDIT_TRIGGER_CLASS: &str = "user-edit-button";
/// Class marking delete triggers.
pub const DELETE_TRIGGER_CLASS: &str = "delete-user-btn";

/// Attribute holding the JSON user record on edit triggers.
pub const USER_PAYLOAD_ATTR: &str = "data-target";
/// Attribute holding the decimal user id on delete triggers.
pub const USER_ID_ATTR: &str = "data-user-id";
