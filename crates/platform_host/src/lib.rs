//! Typed host-domain contracts shared by the desktop runtime and browser adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the preference
//! (settings token) store and external URL service traits together with in-memory
//! implementations, while concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod external_url;
pub mod host;
pub mod storage;

pub use external_url::{ExternalUrlFuture, ExternalUrlService, NoopExternalUrlService};
pub use host::{HostServices, HostStrategy};
pub use storage::prefs::{MemoryPrefsStore, PrefsStore, PrefsStoreFuture};
