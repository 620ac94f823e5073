//! Host-side runtime helpers for executing reducer effects against injected host services.

mod boot;
mod links;
mod persistence_effects;

use std::rc::Rc;

use leptos::Callback;
use platform_host::{ExternalUrlService, HostServices, PrefsStore};

use crate::reducer::{DesktopAction, RuntimeEffect};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    services: HostServices,
}

impl DesktopHostContext {
    /// Wraps the host services injected by the entry layer.
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    /// Returns the configured settings token store.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.services.prefs.clone()
    }

    /// Returns the configured external URL service.
    pub fn external_url_service(&self) -> Rc<dyn ExternalUrlService> {
        self.services.external_urls.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.services.host_strategy.as_str()
    }

    /// Loads persisted settings once after mount and hydrates the lifecycle state with them. Only
    /// needed for stores that cannot answer synchronously.
    pub fn install_boot_hydration(&self, dispatch: Callback<DesktopAction>) {
        boot::install_boot_hydration(self.clone(), dispatch);
    }

    /// Routes every anchor click on the page to a new tab for the rest of the session.
    pub fn install_link_interception(&self) {
        links::install_link_interception(self.clone());
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::PersistSetting { key, token } => {
                persistence_effects::persist_setting(self.clone(), key, token)
            }
        }
    }
}
