use leptos::{create_effect, logging, spawn_local, Callable, Callback};

use crate::{host::DesktopHostContext, persistence, reducer::DesktopAction};

pub(super) fn install_boot_hydration(host: DesktopHostContext, dispatch: Callback<DesktopAction>) {
    create_effect(move |_| {
        let dispatch = dispatch;
        let host = host.clone();
        spawn_local(async move {
            let prefs = host.prefs_store();
            let settings = persistence::load_system_settings(prefs.as_ref()).await;
            logging::log!(
                "boot settings hydrated via {} host: background `{}`, theme `{}`",
                host.host_strategy_name(),
                settings.background.name,
                settings.theme
            );
            dispatch.call(DesktopAction::HydrateSettings { settings });
        });
    });
}
