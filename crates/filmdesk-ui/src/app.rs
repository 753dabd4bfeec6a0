//! Page bootstrap.

use std::cell::RefCell;

use gloo::console;
use gloo::utils::document;

use crate::config::load_page_config;
use crate::features::users::controller::UserPageController;
use crate::toast::ToastCenter;

thread_local! {
    static CONTROLLER: RefCell<Option<UserPageController>> = const { RefCell::new(None) };
}

/// Attach the user list behaviour to the current document.
///
/// The controller lives until the page unloads.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let document = document();
    let config = load_page_config(&document);

    let toasts = match ToastCenter::mount(&document, config.toast_timeout_ms) {
        Ok(toasts) => toasts,
        Err(err) => {
            console::error!("toast host failed to mount", err.to_string());
            return;
        }
    };

    let controller = UserPageController::mount(&document, config, toasts);
    CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller));
}
