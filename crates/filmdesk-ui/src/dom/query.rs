//! Typed lookups over the page document.

use gloo::utils::window;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::error::UiError;

pub(crate) fn element(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub(crate) fn required_element(document: &Document, id: &'static str) -> Result<HtmlElement, UiError> {
    element(document, id).ok_or(UiError::MissingElement { id })
}

pub(crate) fn input(document: &Document, id: &'static str) -> Result<HtmlInputElement, UiError> {
    document
        .get_element_by_id(id)
        .ok_or(UiError::MissingElement { id })?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| UiError::UnexpectedElement {
            id,
            expected: "an input",
        })
}

pub(crate) fn optional_input(document: &Document, id: &str) -> Option<HtmlInputElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
}

/// Snapshot of the elements carrying `class` at bind time.
pub(crate) fn by_class(document: &Document, class: &str) -> Vec<Element> {
    let collection = document.get_elements_by_class_name(class);
    (0..collection.length())
        .filter_map(|index| collection.item(index))
        .collect()
}

pub(crate) fn current_href() -> Result<String, UiError> {
    window()
        .location()
        .href()
        .map_err(|err| UiError::dom("read location", &err))
}
