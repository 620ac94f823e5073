//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer: `localStorage` for settings tokens
//! and `window.open` for outbound links. Off-browser builds fall back to the in-memory services
//! from [`platform_host`] so the runtime stays testable natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod external_url;
pub mod storage;

pub use adapters::{
    build_host_services, external_url_service, host_strategy_name, prefs_store,
    selected_host_strategy,
};
pub use external_url::WebExternalUrlService;
pub use storage::local_prefs::WebPrefsStore;
