//! External URL host-service contracts.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`ExternalUrlService`].
pub type ExternalUrlFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for opening URLs outside the desktop shell (a new browser tab).
pub trait ExternalUrlService {
    /// Opens a URL using the host's external navigation mechanism.
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Default)]
/// No-op external URL service for unsupported targets.
///
/// Requested URLs are recorded so headless callers can observe what would have been opened.
pub struct NoopExternalUrlService {
    opened: Rc<RefCell<Vec<String>>>,
}

impl NoopExternalUrlService {
    /// Returns every URL requested so far, oldest first.
    pub fn opened_urls(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl ExternalUrlService for NoopExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        })
    }
}
