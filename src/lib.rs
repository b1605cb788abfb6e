//! Browse the most-starred repositories per language.
//!
//! The wasm build mounts the Yew UI from [`frontend`]; the native build runs a
//! small static host for the compiled bundle. Everything else is
//! target-independent and unit tested natively.

pub mod config;
pub mod error;
pub mod hover;
pub mod language;
pub mod log;
pub mod popular;
pub mod repository;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

#[cfg(not(target_arch = "wasm32"))]
pub mod host;
