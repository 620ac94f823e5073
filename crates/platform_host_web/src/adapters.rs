use std::rc::Rc;

use platform_host::{
    ExternalUrlService, HostServices, HostStrategy, MemoryPrefsStore, NoopExternalUrlService,
    PrefsStore,
};

use crate::{WebExternalUrlService, WebPrefsStore};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(target_arch = "wasm32")]
    {
        HostStrategy::Browser
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        HostStrategy::Headless
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Builds the settings token store for the compile-time selected host strategy.
pub fn prefs_store() -> Rc<dyn PrefsStore> {
    match selected_host_strategy() {
        HostStrategy::Browser => Rc::new(WebPrefsStore),
        HostStrategy::Headless => Rc::new(MemoryPrefsStore::default()),
    }
}

/// Builds the external-URL adapter for the compile-time selected host strategy.
pub fn external_url_service() -> Rc<dyn ExternalUrlService> {
    match selected_host_strategy() {
        HostStrategy::Browser => Rc::new(WebExternalUrlService),
        HostStrategy::Headless => Rc::new(NoopExternalUrlService::default()),
    }
}

/// Assembles the full [`HostServices`] bundle injected into the desktop runtime.
pub fn build_host_services() -> HostServices {
    HostServices::new(
        prefs_store(),
        external_url_service(),
        selected_host_strategy(),
    )
}
