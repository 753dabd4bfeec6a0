//! User list feature wiring.
//!
//! # Design
//! - The page markup is server-rendered; this slice only attaches behaviour.
//! - Decisions live in `logic` and `state`, the DOM glue in `controller`.
//! - HTTP calls stay in `api` so the controller never builds requests itself.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
#[cfg(target_arch = "wasm32")]
pub(crate) mod controller;
pub mod logic;
pub mod state;
