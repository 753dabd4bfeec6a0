//! Binds the server-rendered user list to its handlers.
//!
//! One controller is built per page load. It owns every listener it registers
//! and exposes nothing else; dropping it detaches the page behaviour.

use std::cell::RefCell;
use std::rc::Rc;

use filmdesk_api_models::{UserId, UserRecord};
use gloo::console;
use gloo::dialogs::confirm;
use gloo::events::{EventListener, EventListenerOptions};
use gloo::utils::window;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlInputElement, KeyboardEvent};

use super::api::UserApi;
use super::logic::{
    Binding, DeleteOutcome, DeletePlan, EditFormValues, delete_failure_message, page_bindings,
    plan_delete, resolve_form_inputs, search_url, submits_search,
};
use super::state::PendingDeletes;
use crate::config::PageConfig;
use crate::dom::{self, query};
use crate::error::UiError;
use crate::modal::Modal;
use crate::toast::ToastCenter;

/// Listeners and dialogs of one user list page.
pub(crate) struct UserPageController {
    _modals: Vec<Modal>,
    _listeners: Vec<EventListener>,
}

/// State shared by the handlers.
#[derive(Clone)]
struct Handlers {
    document: Document,
    config: Rc<PageConfig>,
    toasts: ToastCenter,
    api: UserApi,
    pending: Rc<RefCell<PendingDeletes>>,
}

impl UserPageController {
    /// Build the dialogs present on the page and register every handler.
    ///
    /// A missing or unusable dialog root only disables the handlers tied to
    /// that dialog; search and delete are always bound.
    pub(crate) fn mount(document: &Document, config: PageConfig, toasts: ToastCenter) -> Self {
        let edit_modal = build_modal(document, dom::EDIT_MODAL, &config);
        let add_modal = build_modal(document, dom::ADD_MODAL, &config);

        let handlers = Handlers {
            document: document.clone(),
            api: UserApi::new(config.api_base()),
            config: Rc::new(config),
            toasts,
            pending: Rc::new(RefCell::new(PendingDeletes::default())),
        };

        let mut listeners = Vec::new();
        for binding in page_bindings(edit_modal.as_ref(), add_modal.as_ref()) {
            match binding {
                Binding::EditTriggers(modal) => handlers.bind_edit_triggers(modal, &mut listeners),
                Binding::CloseButton { button, modal } => {
                    bind_close_button(document, button, modal, &mut listeners);
                }
                Binding::Search => handlers.bind_search(&mut listeners),
                Binding::DeleteTriggers => handlers.bind_delete_triggers(&mut listeners),
            }
        }
        console::debug!(format!("user list bound with {} listeners", listeners.len()));

        Self {
            _modals: edit_modal.into_iter().chain(add_modal).collect(),
            _listeners: listeners,
        }
    }
}

impl Handlers {
    fn bind_edit_triggers(&self, modal: &Modal, listeners: &mut Vec<EventListener>) {
        for trigger in query::by_class(&self.document, dom::EDIT_TRIGGER_CLASS) {
            let handlers = self.clone();
            let modal = modal.clone();
            let element = trigger.clone();
            listeners.push(EventListener::new(&trigger, "click", move |_| {
                let result = read_user(&element)
                    .and_then(|user| open_edit_modal(&handlers.document, &modal, &user));
                if let Err(err) = result {
                    console::error!("edit user failed", err.to_string());
                    handlers
                        .toasts
                        .error(handlers.config.messages.edit_load_failed.clone());
                }
            }));
        }
    }

    fn bind_search(&self, listeners: &mut Vec<EventListener>) {
        let input = query::optional_input(&self.document, dom::SEARCH_INPUT);
        let button = query::element(&self.document, dom::SEARCH_BUTTON);
        let (Some(input), Some(button)) = (input, button) else {
            console::debug!("search controls absent; search not bound");
            return;
        };

        let field = input.clone();
        listeners.push(EventListener::new(&button, "click", move |_| {
            submit_search(&field);
        }));

        let field = input.clone();
        listeners.push(EventListener::new_with_options(
            &input,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                    return;
                };
                if submits_search(&key) {
                    event.prevent_default();
                    submit_search(&field);
                }
            },
        ));
    }

    fn bind_delete_triggers(&self, listeners: &mut Vec<EventListener>) {
        for trigger in query::by_class(&self.document, dom::DELETE_TRIGGER_CLASS) {
            let handlers = self.clone();
            let element = trigger.clone();
            listeners.push(EventListener::new(&trigger, "click", move |_| {
                if let Err(err) = handlers.request_delete(&element) {
                    console::error!("delete user failed", err.to_string());
                    handlers.toasts.error(format!(
                        "{}: {err}",
                        handlers.config.messages.delete_failed
                    ));
                }
            }));
        }
    }

    fn request_delete(&self, trigger: &Element) -> Result<(), UiError> {
        let raw = trigger.get_attribute(dom::USER_ID_ATTR);
        let plan = plan_delete(raw.as_deref(), &mut self.pending.borrow_mut(), || {
            confirm(&self.config.messages.delete_confirm)
        });
        let id = match plan {
            DeletePlan::Issue(id) => id,
            DeletePlan::Skip => {
                console::debug!("delete skipped", raw.unwrap_or_default());
                return Ok(());
            }
            DeletePlan::Rejected(err) => return Err(err),
        };

        let handlers = self.clone();
        spawn_local(async move {
            let result = handlers.api.delete_user(id).await;
            handlers.pending.borrow_mut().finish(id);
            handlers.settle_delete(id, result);
        });
        Ok(())
    }

    fn settle_delete(&self, id: UserId, result: anyhow::Result<u16>) {
        let prefix = &self.config.messages.delete_failed;
        match result.map(DeleteOutcome::from_status) {
            Ok(DeleteOutcome::Reload) => {
                if let Err(err) = window().location().reload() {
                    console::error!("page reload failed", err);
                }
            }
            Ok(DeleteOutcome::Rejected { status }) => {
                console::warn!("delete rejected", id.to_string(), status.to_string());
                self.toasts.error(delete_failure_message(
                    prefix,
                    id,
                    &format!("HTTP {status}"),
                ));
            }
            Err(err) => {
                console::error!("delete request failed", id.to_string(), err.to_string());
                self.toasts
                    .error(delete_failure_message(prefix, id, &err.to_string()));
            }
        }
    }
}

fn read_user(trigger: &Element) -> Result<UserRecord, UiError> {
    let raw = trigger
        .get_attribute(dom::USER_PAYLOAD_ATTR)
        .ok_or(UiError::MissingAttribute {
            attribute: dom::USER_PAYLOAD_ATTR,
        })?;
    Ok(UserRecord::from_json(&raw)?)
}

/// Fill the edit form from `user` and show the edit dialog.
///
/// Inputs are resolved before any is written, so a missing field leaves the
/// form untouched.
fn open_edit_modal(document: &Document, modal: &Modal, user: &UserRecord) -> Result<(), UiError> {
    console::debug!("editing user", user.id.to_string(), user.email.clone());
    let values = EditFormValues::new(user, &query::current_href()?);
    let inputs = resolve_form_inputs(&values, |id| query::input(document, id))?;
    for (input, value) in inputs {
        input.set_value(value);
    }
    modal.show()
}

fn build_modal(document: &Document, id: &'static str, config: &PageConfig) -> Option<Modal> {
    let modal = query::required_element(document, id)
        .and_then(|root| Modal::new(root, config.modal.clone()));
    match modal {
        Ok(modal) => Some(modal),
        Err(err) => {
            console::error!("dialog unavailable", err.to_string());
            None
        }
    }
}

fn bind_close_button(
    document: &Document,
    id: &'static str,
    modal: &Modal,
    listeners: &mut Vec<EventListener>,
) {
    let Some(button) = query::element(document, id) else {
        console::debug!("close button absent", id);
        return;
    };
    let modal = modal.clone();
    listeners.push(EventListener::new(&button, "click", move |_| {
        if let Err(err) = modal.hide() {
            console::error!("modal close failed", err.to_string());
        }
    }));
}

fn submit_search(input: &HtmlInputElement) {
    if let Err(err) = navigate_to_search(&input.value()) {
        console::error!("search navigation failed", err.to_string());
    }
}

fn navigate_to_search(text: &str) -> Result<(), UiError> {
    let href = query::current_href()?;
    let target = search_url(&href, text).map_err(|err| UiError::InvalidUrl {
        href: href.clone(),
        detail: err.to_string(),
    })?;
    window()
        .location()
        .set_href(&target)
        .map_err(|err| UiError::dom("navigate", &err))
}
