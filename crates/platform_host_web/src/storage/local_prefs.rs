//! `localStorage`-backed preference store implementation.
//!
//! This adapter is small and synchronous at the browser API boundary, while also implementing
//! [`platform_host::PrefsStore`] (async trait) for the runtime's host abstractions. Tokens are
//! stored verbatim: `localStorage["theme"] == "dark"`.

use platform_host::{PrefsStore, PrefsStoreFuture};

#[derive(Debug, Clone, Copy, Default)]
/// Browser preference store backed by `window.localStorage`.
pub struct WebPrefsStore;

impl WebPrefsStore {
    /// Loads the raw token for a preference key.
    ///
    /// # Errors
    ///
    /// Returns an error when localStorage is unavailable (private mode, disabled storage) or the
    /// read is rejected.
    pub fn load_token(self, key: &str) -> Result<Option<String>, String> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| format!("localStorage get_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    /// Saves a raw token for a preference key.
    ///
    /// # Errors
    ///
    /// Returns an error when localStorage is unavailable or the write fails (for example quota
    /// exceeded).
    pub fn save_token(self, key: &str, token: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .set_item(key, token)
                .map_err(|e| format!("localStorage set_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, token);
            Ok(())
        }
    }

}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| "localStorage unavailable".to_string())
}

impl PrefsStore for WebPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        let store = *self;
        Box::pin(async move { store.load_token(key) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        token: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        let store = *self;
        Box::pin(async move { store.save_token(key, token) })
    }
}
