//! Settings store: plain-text `background` and `theme` tokens with load-with-default semantics.
//!
//! Writes are best-effort. A failed load or save is logged and the desktop keeps running with
//! session-only settings.

use desktop_app_contract::SystemSettings;
use futures::FutureExt;
use leptos::logging;
use platform_host::PrefsStore;

use crate::apps;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Persisted settings keys.
pub enum SettingKey {
    /// Background option name.
    Background,
    /// Theme name.
    Theme,
}

impl SettingKey {
    /// Storage key string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Theme => "theme",
        }
    }
}

/// Loads the token stored under `key`.
///
/// An absent token, or one that no option accepts, is replaced by `default` and the default is
/// written back. A failed read falls back to `default` without writing.
pub async fn load_setting(
    store: &dyn PrefsStore,
    key: SettingKey,
    is_valid: impl Fn(&str) -> bool,
    default: &str,
) -> String {
    match store.load_pref(key.as_str()).await {
        Ok(Some(token)) if is_valid(&token) => token,
        Ok(Some(token)) => {
            logging::warn!(
                "stored {} `{token}` is not a known option; resetting to `{default}`",
                key.as_str()
            );
            write_default(store, key, default).await;
            default.to_string()
        }
        Ok(None) => {
            write_default(store, key, default).await;
            default.to_string()
        }
        Err(err) => {
            logging::warn!("load {} setting failed: {err}", key.as_str());
            default.to_string()
        }
    }
}

async fn write_default(store: &dyn PrefsStore, key: SettingKey, default: &str) {
    if let Err(err) = save_setting(store, key, default).await {
        logging::warn!("persist default {} failed: {err}", key.as_str());
    }
}

/// Writes `token` under `key`.
///
/// # Errors
///
/// Returns the store's error message when the write fails.
pub async fn save_setting(
    store: &dyn PrefsStore,
    key: SettingKey,
    token: &str,
) -> Result<(), String> {
    store.save_pref(key.as_str(), token).await
}

/// Loads both appearance settings against the configured option lists.
pub async fn load_system_settings(store: &dyn PrefsStore) -> SystemSettings {
    let config = apps::desktop_config();
    let background_name = load_setting(
        store,
        SettingKey::Background,
        |token| apps::background_by_name(token).is_some(),
        &config.default_background,
    )
    .await;
    let theme = load_setting(
        store,
        SettingKey::Theme,
        apps::is_known_theme,
        &config.default_theme,
    )
    .await;

    SystemSettings {
        background: apps::background_by_name(&background_name)
            .cloned()
            .unwrap_or_else(apps::default_background),
        theme,
    }
}

/// Loads both appearance settings without yielding, for stores that answer synchronously
/// (`localStorage`, memory).
///
/// Returns `None` when the store needs a real await; callers then hydrate asynchronously with
/// [`load_system_settings`].
pub fn load_system_settings_now(store: &dyn PrefsStore) -> Option<SystemSettings> {
    load_system_settings(store).now_or_never()
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{MemoryPrefsStore, PrefsStoreFuture};
    use pretty_assertions::assert_eq;

    use super::*;

    const THEMES: [&str; 2] = ["light", "dark"];

    fn known_theme(token: &str) -> bool {
        THEMES.contains(&token)
    }

    struct FailingPrefsStore;

    impl PrefsStore for FailingPrefsStore {
        fn load_pref<'a>(
            &'a self,
            _key: &'a str,
        ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
            Box::pin(async { Err("storage disabled".to_string()) })
        }

        fn save_pref<'a>(
            &'a self,
            _key: &'a str,
            _token: &'a str,
        ) -> PrefsStoreFuture<'a, Result<(), String>> {
            Box::pin(async { Err("quota exceeded".to_string()) })
        }
    }

    struct PendingPrefsStore;

    impl PrefsStore for PendingPrefsStore {
        fn load_pref<'a>(
            &'a self,
            _key: &'a str,
        ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
            Box::pin(futures::future::pending())
        }

        fn save_pref<'a>(
            &'a self,
            _key: &'a str,
            _token: &'a str,
        ) -> PrefsStoreFuture<'a, Result<(), String>> {
            Box::pin(futures::future::pending())
        }
    }

    #[test]
    fn saved_token_round_trips() {
        let store = MemoryPrefsStore::default();

        block_on(save_setting(&store, SettingKey::Theme, "dark")).expect("save");
        let loaded = block_on(load_setting(&store, SettingKey::Theme, known_theme, "light"));

        assert_eq!(loaded, "dark");
    }

    #[test]
    fn missing_token_persists_and_returns_default() {
        let store = MemoryPrefsStore::default();

        let loaded = block_on(load_setting(&store, SettingKey::Theme, known_theme, "light"));

        assert_eq!(loaded, "light");
        assert_eq!(store.snapshot("theme").as_deref(), Some("light"));
    }

    #[test]
    fn unknown_token_is_replaced_by_default() {
        let store = MemoryPrefsStore::default();
        block_on(save_setting(&store, SettingKey::Theme, "neon")).expect("save");

        let loaded = block_on(load_setting(&store, SettingKey::Theme, known_theme, "light"));

        assert_eq!(loaded, "light");
        assert_eq!(store.snapshot("theme").as_deref(), Some("light"));
    }

    #[test]
    fn failing_store_degrades_to_defaults() {
        let loaded = block_on(load_setting(
            &FailingPrefsStore,
            SettingKey::Background,
            |_| true,
            "aurora",
        ));
        assert_eq!(loaded, "aurora");

        let saved = block_on(save_setting(&FailingPrefsStore, SettingKey::Theme, "dark"));
        assert_eq!(saved, Err("quota exceeded".to_string()));
    }

    #[test]
    fn system_settings_load_against_catalog_options() {
        let store = MemoryPrefsStore::default();
        block_on(save_setting(&store, SettingKey::Background, "forest")).expect("save");
        block_on(save_setting(&store, SettingKey::Theme, "dark")).expect("save");

        let settings = block_on(load_system_settings(&store));

        assert_eq!(settings.background.name, "forest");
        assert_eq!(settings.theme, "dark");
    }

    #[test]
    fn empty_store_loads_catalog_defaults_and_writes_them() {
        let store = MemoryPrefsStore::default();

        let settings = block_on(load_system_settings(&store));

        assert_eq!(settings, apps::default_system_settings());
        assert_eq!(store.snapshot("background").as_deref(), Some("aurora"));
        assert_eq!(store.snapshot("theme").as_deref(), Some("light"));
    }

    #[test]
    fn synchronous_stores_load_settings_without_yielding() {
        let store = MemoryPrefsStore::default();
        block_on(save_setting(&store, SettingKey::Theme, "dark")).expect("save");

        let settings = load_system_settings_now(&store).expect("memory store answers at once");

        assert_eq!(settings.theme, "dark");
        assert_eq!(settings.background, apps::default_background());
        assert_eq!(store.snapshot("background").as_deref(), Some("aurora"));
    }

    #[test]
    fn asynchronous_stores_defer_to_boot_hydration() {
        assert_eq!(load_system_settings_now(&PendingPrefsStore), None);
    }
}
