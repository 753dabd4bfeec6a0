//! Pure helpers behind the user list handlers.
//!
//! # Design
//! - Keep every decision a handler makes here so it can be tested natively.
//! - Mirror browser URL semantics (`URLSearchParams.set`) exactly.

use filmdesk_api_models::{UserId, UserRecord, delete_user_path};
use url::Url;

use super::state::PendingDeletes;
use crate::dom::{ADD_MODAL_CLOSE, EDIT_MODAL_CLOSE, USER_ID_ATTR, edit_form};
use crate::error::UiError;

/// Placeholder written into both password inputs; the real password never
/// reaches the page.
pub const MASKED_PASSWORD: &str = "*******";

/// Query parameter carrying the search text.
pub const SEARCH_PARAM: &str = "q";

/// Handler group attached to the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Binding<M> {
    /// Edit triggers that fill and open the edit dialog.
    EditTriggers(M),
    /// A close button hiding its dialog.
    CloseButton {
        /// Element id of the button.
        button: &'static str,
        /// Dialog the button hides.
        modal: M,
    },
    /// Search button click and Enter in the search input.
    Search,
    /// Delete triggers.
    DeleteTriggers,
}

/// Handler groups to attach for the dialogs that could be built.
///
/// A missing dialog only drops the handlers that need it; search and delete
/// are always attached.
#[must_use]
pub fn page_bindings<M: Clone>(edit: Option<M>, add: Option<M>) -> Vec<Binding<M>> {
    let mut bindings = Vec::new();
    if let Some(modal) = edit {
        bindings.push(Binding::EditTriggers(modal.clone()));
        bindings.push(Binding::CloseButton {
            button: EDIT_MODAL_CLOSE,
            modal,
        });
    }
    if let Some(modal) = add {
        bindings.push(Binding::CloseButton {
            button: ADD_MODAL_CLOSE,
            modal,
        });
    }
    bindings.push(Binding::Search);
    bindings.push(Binding::DeleteTriggers);
    bindings
}

/// Values the edit form receives for one user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditFormValues {
    /// Display name.
    pub full_name: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Base-10 user id.
    pub id: String,
    /// E-mail address.
    pub email: String,
    /// Redirect target after the form submits.
    pub next_url: String,
}

impl EditFormValues {
    /// Project `user` onto the form, redirecting back to `current_url`.
    #[must_use]
    pub fn new(user: &UserRecord, current_url: &str) -> Self {
        Self {
            full_name: user.full_name.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            id: user.id.to_string(),
            email: user.email.clone(),
            next_url: current_url.to_string(),
        }
    }

    /// Input id and value pairs in form order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); 8] {
        [
            (edit_form::FULL_NAME, self.full_name.as_str()),
            (edit_form::FIRST_NAME, self.first_name.as_str()),
            (edit_form::LAST_NAME, self.last_name.as_str()),
            (edit_form::ID, self.id.as_str()),
            (edit_form::EMAIL, self.email.as_str()),
            (edit_form::PASSWORD, MASKED_PASSWORD),
            (edit_form::PASSWORD_CONFIRMATION, MASKED_PASSWORD),
            (edit_form::NEXT_URL, self.next_url.as_str()),
        ]
    }
}

/// Pair every edit input with its value, resolving all of them first.
///
/// # Errors
/// Returns the first failed lookup; nothing has been written at that point.
pub fn resolve_form_inputs<'a, I>(
    values: &'a EditFormValues,
    mut lookup: impl FnMut(&'static str) -> Result<I, UiError>,
) -> Result<Vec<(I, &'a str)>, UiError> {
    values
        .fields()
        .into_iter()
        .map(|(id, value)| lookup(id).map(|input| (input, value)))
        .collect()
}

/// Rewrite `current` so its `q` parameter holds `query`.
///
/// The first existing `q` keeps its position, later duplicates are removed and
/// a missing `q` is appended. Other parameters and the fragment are untouched.
///
/// # Errors
/// Returns the parser error when `current` is not an absolute URL.
pub fn search_url(current: &str, query: &str) -> Result<String, url::ParseError> {
    let mut url = Url::parse(current)?;
    let mut replaced = false;
    let mut pairs: Vec<(String, String)> = Vec::new();
    for (key, value) in url.query_pairs() {
        if key == SEARCH_PARAM {
            if !replaced {
                pairs.push((key.into_owned(), query.to_string()));
                replaced = true;
            }
        } else {
            pairs.push((key.into_owned(), value.into_owned()));
        }
    }
    if !replaced {
        pairs.push((SEARCH_PARAM.to_string(), query.to_string()));
    }
    url.query_pairs_mut().clear().extend_pairs(pairs);
    Ok(url.into())
}

/// Whether a key press inside the search input submits the search.
#[must_use]
pub fn submits_search(key: &str) -> bool {
    key == "Enter"
}

/// Absolute or same-origin URL of the delete endpoint.
#[must_use]
pub fn delete_url(api_base: &str, id: UserId) -> String {
    format!("{}{}", api_base.trim_end_matches('/'), delete_user_path(id))
}

/// What the page does once a delete request answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The row is gone; reload the list.
    Reload,
    /// The server refused; keep the page and tell the user.
    Rejected {
        /// HTTP status returned by the server.
        status: u16,
    },
}

impl DeleteOutcome {
    /// Only an exact 200 counts as success.
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        if status == 200 {
            Self::Reload
        } else {
            Self::Rejected { status }
        }
    }
}

/// Toast text for a failed delete.
#[must_use]
pub fn delete_failure_message(prefix: &str, id: UserId, detail: &str) -> String {
    format!("{prefix} #{id}: {detail}")
}

/// Next step for a delete click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeletePlan {
    /// A request for the user is already in flight, or the prompt was declined.
    Skip,
    /// The trigger carries no usable id; nothing was prompted.
    Rejected(UiError),
    /// Send the request. The id is already marked in flight.
    Issue(UserId),
}

/// Decide what a delete click does.
///
/// `confirm` runs only for a valid id with no request in flight, and the id
/// is claimed only after it returns `true`.
pub fn plan_delete(
    raw_id: Option<&str>,
    pending: &mut PendingDeletes,
    confirm: impl FnOnce() -> bool,
) -> DeletePlan {
    let parsed = raw_id
        .ok_or(UiError::MissingAttribute {
            attribute: USER_ID_ATTR,
        })
        .and_then(|raw| raw.parse::<UserId>().map_err(UiError::from));
    let id = match parsed {
        Ok(id) => id,
        Err(err) => return DeletePlan::Rejected(err),
    };
    if pending.is_pending(id) || !confirm() {
        return DeletePlan::Skip;
    }
    if pending.begin(id) {
        DeletePlan::Issue(id)
    } else {
        DeletePlan::Skip
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u64) -> UserRecord {
        UserRecord {
            id: UserId::new(id).expect("positive id"),
            full_name: "A B".into(),
            first_name: "A".into(),
            last_name: "B".into(),
            email: "a@b.c".into(),
            is_deleted: false,
        }
    }

    #[test]
    fn both_dialogs_bind_every_handler() {
        assert_eq!(
            page_bindings(Some("edit"), Some("add")),
            vec![
                Binding::EditTriggers("edit"),
                Binding::CloseButton {
                    button: EDIT_MODAL_CLOSE,
                    modal: "edit"
                },
                Binding::CloseButton {
                    button: ADD_MODAL_CLOSE,
                    modal: "add"
                },
                Binding::Search,
                Binding::DeleteTriggers,
            ]
        );
    }

    #[test]
    fn missing_add_dialog_keeps_search_and_delete() {
        assert_eq!(
            page_bindings(Some("edit"), None),
            vec![
                Binding::EditTriggers("edit"),
                Binding::CloseButton {
                    button: EDIT_MODAL_CLOSE,
                    modal: "edit"
                },
                Binding::Search,
                Binding::DeleteTriggers,
            ]
        );
    }

    #[test]
    fn missing_edit_dialog_drops_only_edit_handlers() {
        assert_eq!(
            page_bindings(None, Some("add")),
            vec![
                Binding::CloseButton {
                    button: ADD_MODAL_CLOSE,
                    modal: "add"
                },
                Binding::Search,
                Binding::DeleteTriggers,
            ]
        );
        assert_eq!(
            page_bindings::<&str>(None, None),
            vec![Binding::Search, Binding::DeleteTriggers]
        );
    }

    #[test]
    fn edit_form_masks_passwords_and_keeps_redirect() {
        let values = EditFormValues::new(&user(1042), "https://x/users?page=3");
        let fields = values.fields();
        assert_eq!(fields[0], (edit_form::FULL_NAME, "A B"));
        assert_eq!(fields[3], (edit_form::ID, "1042"));
        assert_eq!(fields[5], (edit_form::PASSWORD, MASKED_PASSWORD));
        assert_eq!(fields[6], (edit_form::PASSWORD_CONFIRMATION, MASKED_PASSWORD));
        assert_eq!(fields[7], (edit_form::NEXT_URL, "https://x/users?page=3"));
    }

    #[test]
    fn edit_form_binds_the_sample_attribute() {
        let raw = r#"{"id":1,"fullname":"A B","first_name":"A","last_name":"B","email":"a@b.c","is_deleted":false}"#;
        let record = UserRecord::from_json(raw).expect("sample decodes");
        let values = EditFormValues::new(&record, "https://x/users");
        assert_eq!(values.full_name, "A B");
        assert_eq!(values.first_name, "A");
        assert_eq!(values.last_name, "B");
        assert_eq!(values.id, "1");
        assert_eq!(values.email, "a@b.c");
    }

    #[test]
    fn form_inputs_resolve_in_form_order() {
        let values = EditFormValues::new(&user(9), "https://x/users");
        let resolved = resolve_form_inputs(&values, |id| Ok::<_, UiError>(id))
            .expect("every input present");
        assert_eq!(resolved.len(), 8);
        assert_eq!(resolved[0], (edit_form::FULL_NAME, "A B"));
        assert_eq!(resolved[7], (edit_form::NEXT_URL, "https://x/users"));
    }

    #[test]
    fn missing_form_input_stops_before_any_write() {
        let values = EditFormValues::new(&user(9), "https://x/users");
        let mut looked_up = Vec::new();
        let result = resolve_form_inputs(&values, |id| {
            looked_up.push(id);
            if id == edit_form::PASSWORD {
                Err(UiError::MissingElement { id })
            } else {
                Ok(id)
            }
        });
        assert_eq!(
            result,
            Err(UiError::MissingElement {
                id: edit_form::PASSWORD
            })
        );
        assert_eq!(looked_up.last(), Some(&edit_form::PASSWORD));
        assert!(!looked_up.contains(&edit_form::NEXT_URL));
    }

    #[test]
    fn declined_delete_issues_nothing() {
        let mut pending = PendingDeletes::default();
        let plan = plan_delete(Some("42"), &mut pending, || false);
        assert_eq!(plan, DeletePlan::Skip);
        assert!(!pending.is_pending(UserId::new(42).expect("positive id")));
    }

    #[test]
    fn confirmed_delete_claims_the_user() {
        let mut pending = PendingDeletes::default();
        let id = UserId::new(42).expect("positive id");
        assert_eq!(plan_delete(Some("42"), &mut pending, || true), DeletePlan::Issue(id));
        assert!(pending.is_pending(id));
    }

    #[test]
    fn in_flight_delete_skips_the_prompt() {
        let mut pending = PendingDeletes::default();
        let id = UserId::new(42).expect("positive id");
        pending.begin(id);
        let mut prompted = false;
        let plan = plan_delete(Some("42"), &mut pending, || {
            prompted = true;
            true
        });
        assert_eq!(plan, DeletePlan::Skip);
        assert!(!prompted);
        assert!(pending.is_pending(id));
    }

    #[test]
    fn unusable_delete_trigger_is_rejected_without_prompt() {
        let mut pending = PendingDeletes::default();
        let mut prompted = false;
        let plan = plan_delete(Some("+42"), &mut pending, || {
            prompted = true;
            true
        });
        assert!(matches!(plan, DeletePlan::Rejected(UiError::InvalidUserId(_))));
        assert_eq!(
            plan_delete(None, &mut pending, || true),
            DeletePlan::Rejected(UiError::MissingAttribute {
                attribute: USER_ID_ATTR
            })
        );
        assert!(!prompted);
        assert!(!pending.is_pending(UserId::new(42).expect("positive id")));
    }

    #[test]
    fn search_appends_query_and_keeps_existing_params() {
        assert_eq!(
            search_url("https://x/users?page=2", "alice").expect("valid url"),
            "https://x/users?page=2&q=alice"
        );
    }

    #[test]
    fn search_replaces_prior_query_in_place() {
        assert_eq!(
            search_url("https://x/users?q=bob&page=2&q=carol", "alice").expect("valid url"),
            "https://x/users?q=alice&page=2"
        );
    }

    #[test]
    fn search_encodes_like_url_search_params() {
        assert_eq!(
            search_url("https://x/users#table", "ada lovelace&co").expect("valid url"),
            "https://x/users?q=ada+lovelace%26co#table"
        );
        assert_eq!(
            search_url("https://x/users", "").expect("valid url"),
            "https://x/users?q="
        );
    }

    #[test]
    fn search_rejects_relative_urls() {
        assert!(search_url("/users", "alice").is_err());
    }

    #[test]
    fn only_enter_submits() {
        assert!(submits_search("Enter"));
        assert!(!submits_search("a"));
    }

    #[test]
    fn delete_url_joins_base_and_path() {
        let id = UserId::new(42).expect("positive id");
        assert_eq!(delete_url("", id), "/user/delete/42");
        assert_eq!(
            delete_url("https://admin.example.org/", id),
            "https://admin.example.org/user/delete/42"
        );
    }

    #[test]
    fn only_exact_200_reloads() {
        assert_eq!(DeleteOutcome::from_status(200), DeleteOutcome::Reload);
        assert_eq!(
            DeleteOutcome::from_status(404),
            DeleteOutcome::Rejected { status: 404 }
        );
        assert_eq!(
            DeleteOutcome::from_status(204),
            DeleteOutcome::Rejected { status: 204 }
        );
    }

    #[test]
    fn failure_message_names_user_and_detail() {
        let id = UserId::new(42).expect("positive id");
        assert_eq!(
            delete_failure_message("Could not delete user", id, "HTTP 404"),
            "Could not delete user #42: HTTP 404"
        );
    }
}
