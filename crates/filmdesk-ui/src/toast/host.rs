//! Yew toast host mounted next to the server-rendered markup.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::timers::callback::Timeout;
use web_sys::Document;
use yew::prelude::*;
use yew::AppHandle;

use super::{Toast, ToastKind, ToastQueue};
use crate::dom::TOAST_CONTAINER;
use crate::error::UiError;

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    pub(crate) toasts: Vec<Toast>,
    pub(crate) timeout_ms: u32,
    pub(crate) on_dismiss: Callback<u64>,
}

#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    html! {
        <div class="toast toast-end toast-bottom z-50" aria-live="polite" aria-atomic="true">
            {for props.toasts.iter().map(|toast| html! {
                <ToastItem
                    key={toast.id}
                    toast={toast.clone()}
                    timeout_ms={props.timeout_ms}
                    on_dismiss={props.on_dismiss.clone()}
                />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    timeout_ms: u32,
    on_dismiss: Callback<u64>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;
    {
        let on_dismiss = props.on_dismiss.clone();
        let timeout_ms = props.timeout_ms;
        use_effect_with_deps(
            move |_| {
                let handle = Timeout::new(timeout_ms, move || on_dismiss.emit(id));
                move || drop(handle)
            },
            id,
        );
    }
    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!("alert", props.toast.kind.class())} role="status">
            <span>{props.toast.message.clone()}</span>
            <button class="btn btn-ghost btn-xs" aria-label="Dismiss" onclick={on_close}>{"✕"}</button>
        </div>
    }
}

struct Shared {
    queue: RefCell<ToastQueue>,
    handle: RefCell<Option<AppHandle<ToastHost>>>,
    timeout_ms: u32,
}

impl Shared {
    fn props(self: &Rc<Self>) -> ToastHostProps {
        let weak: Weak<Self> = Rc::downgrade(self);
        ToastHostProps {
            toasts: self.queue.borrow().toasts().to_vec(),
            timeout_ms: self.timeout_ms,
            on_dismiss: Callback::from(move |id: u64| {
                if let Some(shared) = weak.upgrade() {
                    if shared.queue.borrow_mut().dismiss(id) {
                        shared.refresh();
                    }
                }
            }),
        }
    }

    fn refresh(self: &Rc<Self>) {
        let props = self.props();
        if let Some(handle) = self.handle.borrow_mut().as_mut() {
            handle.update(props);
        }
    }
}

/// Page-wide toast sink shared by the handlers.
#[derive(Clone)]
pub(crate) struct ToastCenter {
    shared: Rc<Shared>,
}

impl ToastCenter {
    /// Render the host into `#user-page-toasts`, creating the container when absent.
    pub(crate) fn mount(document: &Document, timeout_ms: u32) -> Result<Self, UiError> {
        let root = match document.get_element_by_id(TOAST_CONTAINER) {
            Some(root) => root,
            None => {
                let root = document
                    .create_element("div")
                    .map_err(|err| UiError::dom("toast container create", &err))?;
                root.set_id(TOAST_CONTAINER);
                document
                    .body()
                    .ok_or(UiError::MissingElement { id: "body" })?
                    .append_child(&root)
                    .map_err(|err| UiError::dom("toast container attach", &err))?;
                root
            }
        };

        let shared = Rc::new(Shared {
            queue: RefCell::new(ToastQueue::default()),
            handle: RefCell::new(None),
            timeout_ms,
        });
        let handle = yew::Renderer::<ToastHost>::with_root_and_props(root, shared.props()).render();
        *shared.handle.borrow_mut() = Some(handle);
        Ok(Self { shared })
    }

    pub(crate) fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    fn push(&self, kind: ToastKind, message: impl Into<String>) {
        self.shared.queue.borrow_mut().push(kind, message);
        self.shared.refresh();
    }
}
