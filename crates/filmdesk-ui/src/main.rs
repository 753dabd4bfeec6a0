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
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Filmdesk user list bindings.
//!
//! In the browser this attaches the page behaviour; a native build prints the
//! markup the bindings look for, which helps when adjusting the templates.

#[cfg(target_arch = "wasm32")]
fn main() {
    filmdesk_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    use std::io::Write;

    let mut stdout = std::io::stdout().lock();
    for line in markup_contract() {
        writeln!(stdout, "{line}")?;
    }
    Ok(())
}

/// Element ids, classes and attributes the bindings attach to.
#[cfg(not(target_arch = "wasm32"))]
fn markup_contract() -> Vec<String> {
    use filmdesk_ui::dom::{self, edit_form};

    let ids = [
        (dom::EDIT_MODAL, "edit dialog root"),
        (dom::EDIT_MODAL_CLOSE, "edit dialog close button"),
        (dom::ADD_MODAL, "add dialog root"),
        (dom::ADD_MODAL_CLOSE, "add dialog close button"),
        (dom::SEARCH_INPUT, "search input"),
        (dom::SEARCH_BUTTON, "search button"),
        (dom::PAGE_CONFIG, "JSON page config (optional)"),
        (dom::TOAST_CONTAINER, "toast container (created when absent)"),
        (edit_form::FULL_NAME, "edit form field"),
        (edit_form::FIRST_NAME, "edit form field"),
        (edit_form::LAST_NAME, "edit form field"),
        (edit_form::ID, "edit form field"),
        (edit_form::EMAIL, "edit form field"),
        (edit_form::PASSWORD, "edit form field"),
        (edit_form::PASSWORD_CONFIRMATION, "edit form field"),
        (edit_form::NEXT_URL, "edit form field"),
    ];

    let mut lines = vec![
        "filmdesk-ui runs in the browser; build it for wasm32-unknown-unknown.".to_string(),
        "Markup it binds to:".to_string(),
    ];
    lines.extend(ids.iter().map(|(id, role)| format!("  #{id:<34} {role}")));
    lines.push(format!(
        "  .{:<34} edit trigger, JSON user in {}",
        dom::EDIT_TRIGGER_CLASS,
        dom::USER_PAYLOAD_ATTR
    ));
    lines.push(format!(
        "  .{:<34} delete trigger, user id in {}",
        dom::DELETE_TRIGGER_CLASS,
        dom::USER_ID_ATTR
    ));
    lines
}
