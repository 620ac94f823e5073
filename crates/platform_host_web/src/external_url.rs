//! External URL host-service adapter for browser contexts.

use platform_host::{ExternalUrlFuture, ExternalUrlService};

#[derive(Debug, Clone, Copy, Default)]
/// Browser external URL adapter: opens the URL in a new tab and focuses it.
pub struct WebExternalUrlService;

impl WebExternalUrlService {
    /// Opens `url` in a new browsing context.
    ///
    /// # Errors
    ///
    /// Returns an error when no browser window is available or `window.open` throws. A blocked
    /// popup (`window.open` returning `null`) is not an error.
    pub fn open_in_new_tab(self, url: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
            let opened = window
                .open_with_url_and_target(url, "_blank")
                .map_err(|e| format!("window.open failed: {e:?}"))?;
            if let Some(tab) = opened {
                let _ = tab.focus();
            }
            Ok(())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Err(format!("external url `{url}` requires a browser host"))
        }
    }
}

impl ExternalUrlService for WebExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        let service = *self;
        Box::pin(async move { service.open_in_new_tab(url) })
    }
}
