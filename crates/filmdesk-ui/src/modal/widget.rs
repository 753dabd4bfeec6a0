//! DOM bindings for [`Modal`].

use std::cell::Cell;
use std::rc::{Rc, Weak};

use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use gloo::utils::{body, document};
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, HtmlElement, KeyboardEvent, Node};

use super::{
    BACKDROP_ATTRIBUTE, BODY_LOCK_CLASS, ClickTarget, HIDDEN_CLASS, ModalOptions, ModalState,
    VISIBLE_CLASS, dismisses_on_click, dismisses_on_key,
};
use crate::error::UiError;

struct Inner {
    root: HtmlElement,
    backdrop: Element,
    options: ModalOptions,
    state: Cell<ModalState>,
}

/// Modal bound to a server-rendered root element.
///
/// Clones share the same instance; separate roots are fully independent.
#[derive(Clone)]
pub struct Modal {
    inner: Rc<Inner>,
    _listeners: Rc<Vec<EventListener>>,
}

impl Modal {
    /// Attach modal behaviour to `root`.
    ///
    /// # Errors
    /// Returns [`UiError::Dom`] when the placement classes or the backdrop
    /// element cannot be prepared.
    pub fn new(root: HtmlElement, options: ModalOptions) -> Result<Self, UiError> {
        for class in options.placement.classes() {
            root.class_list()
                .add_1(class)
                .map_err(|err| UiError::dom("modal placement", &err))?;
        }

        let backdrop = document()
            .create_element("div")
            .map_err(|err| UiError::dom("backdrop create", &err))?;
        backdrop
            .set_attribute(BACKDROP_ATTRIBUTE, "")
            .map_err(|err| UiError::dom("backdrop marker", &err))?;
        for class in options.backdrop_class_list() {
            backdrop
                .class_list()
                .add_1(class)
                .map_err(|err| UiError::dom("backdrop classes", &err))?;
        }

        let closable = options.closable;
        let inner = Rc::new(Inner {
            root,
            backdrop,
            options,
            state: Cell::new(ModalState::default()),
        });

        let listeners = if closable {
            vec![
                click_listener(&inner, &inner.root),
                click_listener(&inner, &inner.backdrop),
                escape_listener(&inner),
            ]
        } else {
            Vec::new()
        };

        Ok(Self {
            inner,
            _listeners: Rc::new(listeners),
        })
    }

    /// Show the modal; no-op when already visible.
    ///
    /// # Errors
    /// Returns [`UiError::Dom`] when the browser rejects a DOM update.
    pub fn show(&self) -> Result<(), UiError> {
        self.inner.show()
    }

    /// Hide the modal; no-op when already hidden.
    ///
    /// # Errors
    /// Returns [`UiError::Dom`] when the browser rejects a DOM update.
    pub fn hide(&self) -> Result<(), UiError> {
        self.inner.hide()
    }
}

impl Inner {
    fn show(&self) -> Result<(), UiError> {
        ModalState::transition(&self.state, true, || {
            let classes = self.root.class_list();
            classes
                .add_1(VISIBLE_CLASS)
                .and_then(|()| classes.remove_1(HIDDEN_CLASS))
                .and_then(|()| self.root.set_attribute("aria-modal", "true"))
                .and_then(|()| self.root.set_attribute("role", "dialog"))
                .and_then(|()| self.root.remove_attribute("aria-hidden"))
                .map_err(|err| UiError::dom("modal show", &err))?;
            let body = body();
            body.append_child(&self.backdrop)
                .map_err(|err| UiError::dom("backdrop attach", &err))?;
            body.class_list()
                .add_1(BODY_LOCK_CLASS)
                .map_err(|err| UiError::dom("scroll lock", &err))
        })
        .map(drop)
    }

    fn hide(&self) -> Result<(), UiError> {
        ModalState::transition(&self.state, false, || {
            let classes = self.root.class_list();
            classes
                .add_1(HIDDEN_CLASS)
                .and_then(|()| classes.remove_1(VISIBLE_CLASS))
                .and_then(|()| self.root.set_attribute("aria-hidden", "true"))
                .and_then(|()| self.root.remove_attribute("aria-modal"))
                .and_then(|()| self.root.remove_attribute("role"))
                .map_err(|err| UiError::dom("modal hide", &err))?;
            self.backdrop.remove();
            body()
                .class_list()
                .remove_1(BODY_LOCK_CLASS)
                .map_err(|err| UiError::dom("scroll unlock", &err))
        })
        .map(drop)
    }

    fn click_target(&self, target: Option<EventTarget>) -> ClickTarget {
        let Some(node) = target.and_then(|target| target.dyn_into::<Node>().ok()) else {
            return ClickTarget::Content;
        };
        if self.root.is_same_node(Some(&node)) {
            ClickTarget::Root
        } else if self.backdrop.is_same_node(Some(&node)) {
            ClickTarget::Backdrop
        } else {
            ClickTarget::Content
        }
    }

    fn dismiss(&self) {
        if let Err(err) = self.hide() {
            console::error!("modal dismiss failed", err.to_string());
        }
    }
}

fn click_listener(inner: &Rc<Inner>, target: &EventTarget) -> EventListener {
    let weak: Weak<Inner> = Rc::downgrade(inner);
    EventListener::new_with_options(
        target,
        "click",
        EventListenerOptions::run_in_capture_phase(),
        move |event| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let target = inner.click_target(event.target());
            if dismisses_on_click(&inner.options, inner.state.get(), target) {
                inner.dismiss();
            }
        },
    )
}

fn escape_listener(inner: &Rc<Inner>) -> EventListener {
    let weak: Weak<Inner> = Rc::downgrade(inner);
    EventListener::new_with_options(
        &body(),
        "keydown",
        EventListenerOptions::run_in_capture_phase(),
        move |event| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                return;
            };
            if dismisses_on_key(&inner.options, inner.state.get(), &key) {
                inner.dismiss();
            }
        },
    )
}
