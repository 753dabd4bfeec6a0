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
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Filmdesk admin front end for the server-rendered user list.
//!
//! The page HTML comes from the server; this crate attaches behaviour to it:
//! the edit and add-user modals, the search box and the delete buttons.
//! Everything that decides *what* to do lives in plain modules tested natively,
//! the DOM bindings are compiled for wasm32 only.

pub mod config;
pub mod dom;
pub mod error;
pub mod features;
pub mod modal;
pub mod toast;

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
