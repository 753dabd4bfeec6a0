//! Overlay modal widget for server-rendered dialog markup.
//!
//! # Design
//! - Options and visibility transitions are plain data so they test natively.
//! - The DOM widget registers its listeners once and consults this state,
//!   rather than adding and removing closures on every show/hide.

use std::cell::Cell;

use serde::Deserialize;

#[cfg(target_arch = "wasm32")]
mod widget;

#[cfg(target_arch = "wasm32")]
pub use widget::Modal;

/// Backdrop classes used by the user list dialogs.
pub const USER_PAGE_BACKDROP_CLASSES: &str =
    "bg-gray-900 bg-opacity-50 dark:bg-opacity-80 fixed inset-0 z-40";

/// Class toggled on the modal root while it is shown.
pub const VISIBLE_CLASS: &str = "flex";
/// Class toggled on the modal root while it is hidden.
pub const HIDDEN_CLASS: &str = "hidden";
/// Class added to `<body>` to freeze scrolling behind an open modal.
pub const BODY_LOCK_CLASS: &str = "overflow-hidden";
/// Marker attribute set on the backdrop element.
pub const BACKDROP_ATTRIBUTE: &str = "modal-backdrop";

/// Where the dialog sits inside its full-screen root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    /// Top left corner.
    TopLeft,
    /// Top edge, centred.
    TopCenter,
    /// Top right corner.
    TopRight,
    /// Left edge, centred.
    CenterLeft,
    /// Centre of the viewport.
    #[default]
    Center,
    /// Right edge, centred.
    CenterRight,
    /// Bottom left corner.
    BottomLeft,
    /// Bottom edge, centred.
    BottomCenter,
    /// Bottom right corner.
    BottomRight,
}

impl Placement {
    /// Flex alignment classes applied to the modal root.
    #[must_use]
    pub const fn classes(self) -> [&'static str; 2] {
        match self {
            Self::TopLeft => ["justify-start", "items-start"],
            Self::TopCenter => ["justify-center", "items-start"],
            Self::TopRight => ["justify-end", "items-start"],
            Self::CenterLeft => ["justify-start", "items-center"],
            Self::Center => ["justify-center", "items-center"],
            Self::CenterRight => ["justify-end", "items-center"],
            Self::BottomLeft => ["justify-start", "items-end"],
            Self::BottomCenter => ["justify-center", "items-end"],
            Self::BottomRight => ["justify-end", "items-end"],
        }
    }
}

/// Backdrop click behaviour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backdrop {
    /// Clicking outside the dialog closes it.
    #[default]
    Dynamic,
    /// Clicking outside the dialog does nothing.
    Static,
}

/// Construction options for a modal instance.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModalOptions {
    /// Dialog placement inside the root.
    pub placement: Placement,
    /// Backdrop click behaviour.
    pub backdrop: Backdrop,
    /// Space separated classes for the backdrop element.
    pub backdrop_classes: String,
    /// Whether Escape and backdrop clicks may dismiss the dialog.
    pub closable: bool,
}

impl Default for ModalOptions {
    fn default() -> Self {
        Self {
            placement: Placement::BottomRight,
            backdrop: Backdrop::Dynamic,
            backdrop_classes: USER_PAGE_BACKDROP_CLASSES.to_string(),
            closable: true,
        }
    }
}

impl ModalOptions {
    /// Backdrop classes split for `classList.add`.
    pub fn backdrop_class_list(&self) -> impl Iterator<Item = &str> {
        self.backdrop_classes.split_whitespace()
    }
}

/// What a click inside the modal root landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// The full-screen root itself (outside the dialog box).
    Root,
    /// The backdrop element.
    Backdrop,
    /// Anything inside the dialog content.
    Content,
}

/// Visibility of a single modal instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    visible: bool,
}

impl ModalState {
    /// Whether the modal is currently shown.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        self.visible
    }

    /// Mark the modal visible; returns `false` when it already was.
    pub const fn show(&mut self) -> bool {
        if self.visible {
            return false;
        }
        self.visible = true;
        true
    }

    /// Mark the modal hidden; returns `false` when it already was.
    pub const fn hide(&mut self) -> bool {
        if !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    /// Move the modal in `cell` to `visible`, then run `effects`.
    ///
    /// The new state is stored before `effects` runs, so a show whose DOM
    /// updates fail halfway can still be cleaned up by a later hide. Returns
    /// `Ok(false)` without running `effects` when nothing changes.
    ///
    /// # Errors
    /// Returns the error produced by `effects`.
    pub fn transition<E>(
        cell: &Cell<Self>,
        visible: bool,
        effects: impl FnOnce() -> Result<(), E>,
    ) -> Result<bool, E> {
        let mut state = cell.get();
        let changed = if visible { state.show() } else { state.hide() };
        if !changed {
            return Ok(false);
        }
        cell.set(state);
        effects().map(|()| true)
    }
}

/// Whether a click should dismiss the modal.
#[must_use]
pub fn dismisses_on_click(options: &ModalOptions, state: ModalState, target: ClickTarget) -> bool {
    options.closable
        && options.backdrop == Backdrop::Dynamic
        && state.is_visible()
        && matches!(target, ClickTarget::Root | ClickTarget::Backdrop)
}

/// Whether a key press should dismiss the modal.
#[must_use]
pub fn dismisses_on_key(options: &ModalOptions, state: ModalState, key: &str) -> bool {
    options.closable && state.is_visible() && key == "Escape"
}
