//! Lightweight preference storage contracts and adapters.
//!
//! Preferences are stored as one plain-text token per key (for example `theme` -> `dark`). There
//! is no envelope, schema version or migration path.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`PrefsStore`] async methods.
pub type PrefsStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for lightweight preference values (one plain-text token per key).
pub trait PrefsStore {
    /// Loads the raw token stored for a preference key.
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>>;

    /// Saves a raw token for a preference key.
    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        token: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store keyed by string.
///
/// Clones share the same backing map, so a test can hand one clone to the runtime and inspect
/// writes through another.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Returns the token currently stored for `key` without going through the async contract.
    pub fn snapshot(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.inner.borrow().get(key).cloned()) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        token: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner
                .borrow_mut()
                .insert(key.to_string(), token.to_string());
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn memory_prefs_store_overwrites_tokens() {
        let store = MemoryPrefsStore::default();
        let store_obj: &dyn PrefsStore = &store;

        assert_eq!(block_on(store_obj.load_pref("theme")).expect("load"), None);
        block_on(store_obj.save_pref("theme", "dark")).expect("save");
        block_on(store_obj.save_pref("theme", "retro")).expect("save");
        assert_eq!(
            block_on(store_obj.load_pref("theme")).expect("load"),
            Some("retro".to_string())
        );
    }

    #[test]
    fn memory_prefs_store_clones_share_backing_map() {
        let store = MemoryPrefsStore::default();
        let handle = store.clone();

        block_on(store.save_pref("background", "aurora")).expect("save");
        assert_eq!(handle.snapshot("background").as_deref(), Some("aurora"));
    }
}
