use crate::executor::RegisteredCommand;
use std::collections::HashMap;

/// A trait that provides a generic, asynchronous interface for accessing a shared
/// `HashMap` of command handlers protected by a mutex.
///
/// This uses a closure-passing pattern to abstract over different mutex types
/// (e.g., `tokio::sync::Mutex` and `std::sync::Mutex`), allowing code to be
/// runtime-agnostic. The lock is released before the closure's result is
/// returned, so no guard is ever held across an `.await`.
#[async_trait::async_trait]
pub trait WithHandlers<C>: Send + Sync
where
    C: Send + Sync + Clone + 'static,
{
    /// Executes a closure with exclusive access to the handlers map.
    async fn with_handlers<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut HashMap<u64, RegisteredCommand<C>>) -> R + Send,
        R: Send;
}

#[cfg(feature = "tokio_support")]
#[async_trait::async_trait]
impl<C> WithHandlers<C> for tokio::sync::Mutex<HashMap<u64, RegisteredCommand<C>>>
where
    C: Send + Sync + Clone + 'static,
{
    async fn with_handlers<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut HashMap<u64, RegisteredCommand<C>>) -> R + Send,
        R: Send,
    {
        let mut guard = self.lock().await;
        f(&mut guard)
    }
}

/// The implementation for the standard library's blocking mutex.
/// The map is only held for the duration of a lookup or insert.
#[async_trait::async_trait]
impl<C> WithHandlers<C> for std::sync::Mutex<HashMap<u64, RegisteredCommand<C>>>
where
    C: Send + Sync + Clone + 'static,
{
    async fn with_handlers<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut HashMap<u64, RegisteredCommand<C>>) -> R + Send,
        R: Send,
    {
        // A panicking handler never runs under this lock, so a poisoned map is
        // still consistent.
        let mut guard = self
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }
}
