use super::{CommandExecutorInterface, ExecutorConfig, error::CommandFailure};
use cmdwire_service::CommandDescriptor;
use futures::future::BoxFuture;
use std::collections::HashMap;
use std::sync::Arc;

// --- Conditionally Alias the Mutex Implementation ---
#[cfg(not(feature = "tokio_support"))]
use std::sync::Mutex;
#[cfg(feature = "tokio_support")]
use tokio::sync::Mutex;

// --- Generic Definitions ---
pub type CommandHandlerFuture = BoxFuture<'static, Result<Vec<u8>, CommandFailure>>;

/// A type-erased handler: context and request bytes in, response bytes out.
pub type CommandHandler<C> = Arc<dyn Fn(C, Vec<u8>) -> CommandHandlerFuture + Send + Sync>;

/// A handler together with the command it serves.
pub struct RegisteredCommand<C> {
    pub descriptor: CommandDescriptor,
    pub handler: CommandHandler<C>,
}

impl<C> Clone for RegisteredCommand<C> {
    fn clone(&self) -> Self {
        Self {
            descriptor: self.descriptor,
            handler: self.handler.clone(),
        }
    }
}

/// A concrete command executor, generic over a context type `C` that is
/// handed to every handler invocation (e.g. a connection handle).
pub struct CommandExecutor<C>
where
    C: Send + Sync + Clone + 'static,
{
    handlers: Arc<Mutex<HashMap<u64, RegisteredCommand<C>>>>,
    config: ExecutorConfig,
}

impl<C> Default for CommandExecutor<C>
where
    C: Send + Sync + Clone + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C> CommandExecutor<C>
where
    C: Send + Sync + Clone + 'static,
{
    /// Creates an executor with the default [`ExecutorConfig`].
    pub fn new() -> Self {
        Self::with_config(ExecutorConfig::default())
    }

    pub fn with_config(config: ExecutorConfig) -> Self {
        Self {
            handlers: Arc::new(Mutex::new(HashMap::new())),
            config,
        }
    }
}

#[async_trait::async_trait]
impl<C> CommandExecutorInterface<C> for CommandExecutor<C>
where
    C: Send + Sync + Clone + 'static,
{
    type HandlersLock = Mutex<HashMap<u64, RegisteredCommand<C>>>;

    fn get_handlers(&self) -> Arc<Self::HandlersLock> {
        self.handlers.clone()
    }

    fn config(&self) -> &ExecutorConfig {
        &self.config
    }
}
