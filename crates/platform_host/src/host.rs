//! Host service bundle assembled by the entry layer and injected into the desktop runtime.

use std::rc::Rc;

use crate::{ExternalUrlService, MemoryPrefsStore, NoopExternalUrlService, PrefsStore};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition (`localStorage`, `window.open`).
    Browser,
    /// In-memory composition used off-browser and in tests.
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics and runtime inspection.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

#[derive(Clone)]
/// Host service bundle consumed by the desktop runtime.
pub struct HostServices {
    /// Settings token store.
    pub prefs: Rc<dyn PrefsStore>,
    /// External URL opening service.
    pub external_urls: Rc<dyn ExternalUrlService>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Builds a bundle from explicit service implementations.
    pub fn new(
        prefs: Rc<dyn PrefsStore>,
        external_urls: Rc<dyn ExternalUrlService>,
        host_strategy: HostStrategy,
    ) -> Self {
        Self {
            prefs,
            external_urls,
            host_strategy,
        }
    }

    /// Builds an in-memory bundle: settings live for the session only and URLs are recorded.
    pub fn headless() -> Self {
        Self::new(
            Rc::new(MemoryPrefsStore::default()),
            Rc::new(NoopExternalUrlService::default()),
            HostStrategy::Headless,
        )
    }
}
