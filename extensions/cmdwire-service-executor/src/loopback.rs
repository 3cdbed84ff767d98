use crate::CommandExecutorInterface;
use cmdwire_service::{CommandRequest, CommandResponse};
use cmdwire_service_invoker::CommandInvokerInterface;
use std::{io, sync::Arc};

/// An in-process invoker that hands every request straight to an executor.
///
/// Useful for tests and for hosting a device model and its client in one
/// process; no bytes leave the process.
pub struct LoopbackInvoker<E, C>
where
    E: CommandExecutorInterface<C>,
    C: Send + Sync + Clone + 'static,
{
    executor: Arc<E>,
    context: C,
    invoker_id: String,
}

impl<E, C> LoopbackInvoker<E, C>
where
    E: CommandExecutorInterface<C>,
    C: Send + Sync + Clone + 'static,
{
    /// `context` is cloned into every handler invocation.
    pub fn new(executor: Arc<E>, context: C, invoker_id: impl Into<String>) -> Self {
        Self {
            executor,
            context,
            invoker_id: invoker_id.into(),
        }
    }

    pub fn executor(&self) -> Arc<E> {
        self.executor.clone()
    }
}

#[async_trait::async_trait]
impl<E, C> CommandInvokerInterface for LoopbackInvoker<E, C>
where
    E: CommandExecutorInterface<C> + 'static,
    C: Send + Sync + Clone + 'static,
{
    fn invoker_id(&self) -> &str {
        &self.invoker_id
    }

    async fn send_request(&self, request: CommandRequest) -> Result<CommandResponse, io::Error> {
        Ok(self
            .executor
            .handle_request(self.context.clone(), request)
            .await)
    }
}
