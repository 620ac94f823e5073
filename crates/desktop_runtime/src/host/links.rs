use leptos::{logging, spawn_local};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::host::DesktopHostContext;

/// Returns whether an anchor's `href` should leave the desktop through a new tab.
pub(super) fn opens_in_new_tab(href: &str) -> bool {
    let href = href.trim();
    !href.is_empty() && !href.starts_with('#') && !href.starts_with("javascript:")
}

pub(super) fn install_link_interception(host: DesktopHostContext) {
    #[cfg(target_arch = "wasm32")]
    {
        let handle = leptos::window_event_listener(leptos::ev::click, move |ev| {
            let Some(anchor) = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                .and_then(|element| element.closest("a").ok().flatten())
                .and_then(|element| element.dyn_into::<web_sys::HtmlAnchorElement>().ok())
            else {
                return;
            };
            let raw_href = anchor.get_attribute("href").unwrap_or_default();
            if !opens_in_new_tab(&raw_href) {
                return;
            }
            ev.prevent_default();
            open_external_url(host.clone(), &anchor.href());
        });
        // Installed once; lives for the page session.
        std::mem::forget(handle);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = host;
}

pub(super) fn open_external_url(host: DesktopHostContext, url: &str) {
    let url = url.to_string();
    spawn_local(async move { open_link(&host, &url).await });
}

async fn open_link(host: &DesktopHostContext, url: &str) {
    if let Err(err) = host.external_url_service().open_url(url).await {
        logging::warn!("open external url failed for `{url}`: {err}");
    }
}
