use leptos::{logging, spawn_local};

use crate::{host::DesktopHostContext, persistence, persistence::SettingKey};

pub(super) fn persist_setting(host: DesktopHostContext, key: SettingKey, token: String) {
    spawn_local(async move {
        let prefs = host.prefs_store();
        if let Err(err) = persistence::save_setting(prefs.as_ref(), key, &token).await {
            logging::warn!("persist {} setting failed: {err}", key.as_str());
        }
    });
}
