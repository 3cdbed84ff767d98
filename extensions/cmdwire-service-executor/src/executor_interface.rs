use super::{
    ExecutorConfig,
    error::{CommandExecutorError, CommandFailure, HandlerError},
    executor::{CommandHandlerFuture, RegisteredCommand},
    with_handlers_trait::WithHandlers,
};
use cmdwire_service::{
    CommandBinding, CommandDescriptor, CommandRequest, CommandResponse, CommandStatus,
    command_id_hash,
};
use std::{collections::hash_map::Entry, future::Future, sync::Arc};

#[async_trait::async_trait]
pub trait CommandExecutorInterface<C>: Send + Sync
where
    C: Send + Sync + Clone + 'static,
{
    type HandlersLock: WithHandlers<C>;

    fn get_handlers(&self) -> Arc<Self::HandlersLock>;

    fn config(&self) -> &ExecutorConfig;

    /// Registers a handler that works on encoded payloads.
    ///
    /// Fails if a command with the same name, or one with the same id, is
    /// already registered.
    async fn register_raw<F, Fut>(
        &self,
        descriptor: CommandDescriptor,
        handler: F,
    ) -> Result<(), CommandExecutorError>
    where
        F: Fn(C, Vec<u8>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Vec<u8>, CommandFailure>> + Send + 'static,
    {
        let executor_id = self.config().executor_id.clone();

        self.get_handlers()
            .with_handlers(|handlers| {
                let same_name = handlers.values().find(|registered| {
                    registered.descriptor.command_name == descriptor.command_name
                });
                if let Some(existing) = same_name {
                    return Err(CommandExecutorError::DuplicateCommand {
                        command_name: descriptor.command_name.to_owned(),
                        existing: existing.descriptor.command_name,
                    });
                }

                match handlers.entry(descriptor.command_id) {
                    Entry::Occupied(entry) => Err(CommandExecutorError::DuplicateCommand {
                        command_name: descriptor.command_name.to_owned(),
                        existing: entry.get().descriptor.command_name,
                    }),
                    Entry::Vacant(entry) => {
                        let wrapped = move |ctx: C, bytes: Vec<u8>| {
                            Box::pin(handler(ctx, bytes)) as CommandHandlerFuture
                        };
                        entry.insert(RegisteredCommand {
                            descriptor,
                            handler: Arc::new(wrapped),
                        });
                        tracing::debug!(
                            "[{}] Registered command `{}` ({} -> {})",
                            executor_id,
                            descriptor.command_name,
                            descriptor.request_type,
                            descriptor.response_type
                        );
                        Ok(())
                    }
                }
            })
            .await
    }

    /// Registers a typed handler for binding `B`.
    ///
    /// Requests are decoded and validated before `handler` runs; a request
    /// missing a required field never reaches it. Responses are validated
    /// before they are encoded.
    async fn register<B, F, Fut>(&self, handler: F) -> Result<(), CommandExecutorError>
    where
        B: CommandBinding + 'static,
        F: Fn(C, B::Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<B::Response, HandlerError>> + Send + 'static,
    {
        let handler = Arc::new(handler);

        self.register_raw(
            CommandDescriptor::of::<B>(),
            move |ctx: C, bytes: Vec<u8>| {
                let handler = handler.clone();
                async move {
                    let request =
                        B::decode_request(&bytes).map_err(CommandFailure::InvalidRequest)?;
                    let response = handler(ctx, request)
                        .await
                        .map_err(CommandFailure::from_handler_error)?;
                    B::encode_response(&response).map_err(CommandFailure::InvalidResponse)
                }
            },
        )
        .await
    }

    /// Registered commands, sorted by name.
    async fn descriptors(&self) -> Vec<CommandDescriptor> {
        let mut descriptors = self
            .get_handlers()
            .with_handlers(|handlers| {
                handlers
                    .values()
                    .map(|registered| registered.descriptor)
                    .collect::<Vec<_>>()
            })
            .await;
        descriptors.sort_by_key(|descriptor| descriptor.command_name);
        descriptors
    }

    /// Routes an inbound request to its handler and produces the response.
    ///
    /// Never fails: every rejection is reported through the response status,
    /// and the response always echoes the request's command name and
    /// correlation id.
    async fn handle_request(&self, context: C, request: CommandRequest) -> CommandResponse {
        let CommandRequest {
            command_name,
            correlation_id,
            invoker_id,
            content_type,
            payload,
        } = request;
        let config = self.config();
        let invoker = invoker_id.as_deref().unwrap_or("unknown");

        if payload.len() > config.max_payload_size {
            tracing::warn!(
                "[{}] Rejected `{}` ({}) from {}: payload of {} bytes exceeds {}",
                config.executor_id,
                command_name,
                correlation_id,
                invoker,
                payload.len(),
                config.max_payload_size
            );
            let message = format!(
                "payload of {} bytes exceeds the {} byte limit",
                payload.len(),
                config.max_payload_size
            );
            return CommandResponse::failure(
                command_name,
                correlation_id,
                CommandStatus::PayloadTooLarge,
                message,
            );
        }

        // Ids default to the hash of the name; a binding that pins its own id
        // is only found by name.
        let command_id = command_id_hash(&command_name);
        let registered = self
            .get_handlers()
            .with_handlers(|handlers| {
                handlers
                    .get(&command_id)
                    .filter(|registered| registered.descriptor.command_name == command_name)
                    .or_else(|| {
                        handlers
                            .values()
                            .find(|registered| registered.descriptor.command_name == command_name)
                    })
                    .cloned()
            })
            .await;

        let Some(RegisteredCommand {
            descriptor,
            handler,
        }) = registered
        else {
            tracing::warn!(
                "[{}] No handler for command `{}` ({}) from {}",
                config.executor_id,
                command_name,
                correlation_id,
                invoker
            );
            let message = format!("no handler registered for command `{command_name}`");
            return CommandResponse::failure(
                command_name,
                correlation_id,
                CommandStatus::NotFound,
                message,
            );
        };

        if let Some(content_type) = content_type.as_deref() {
            if content_type != descriptor.content_type {
                tracing::warn!(
                    "[{}] Rejected `{}` ({}): content type `{}` is not `{}`",
                    config.executor_id,
                    command_name,
                    correlation_id,
                    content_type,
                    descriptor.content_type
                );
                let message = format!(
                    "content type `{content_type}` is not supported, expected `{}`",
                    descriptor.content_type
                );
                return CommandResponse::failure(
                    command_name,
                    correlation_id,
                    CommandStatus::UnsupportedMediaType,
                    message,
                );
            }
        }

        let execution = handler(context, payload);

        #[cfg(feature = "tokio_support")]
        let outcome = match config.execution_timeout {
            Some(limit) => tokio::time::timeout(limit, execution)
                .await
                .unwrap_or_else(|_| Err(CommandFailure::TimedOut(limit))),
            None => execution.await,
        };

        #[cfg(not(feature = "tokio_support"))]
        let outcome = execution.await;

        match outcome {
            Ok(encoded) => {
                tracing::trace!(
                    "[{}] Executed `{}` ({}) for {}",
                    config.executor_id,
                    command_name,
                    correlation_id,
                    invoker
                );
                CommandResponse::success(
                    command_name,
                    correlation_id,
                    descriptor.content_type,
                    encoded,
                )
            }
            Err(failure) => {
                let status = failure.status();
                match &failure {
                    CommandFailure::InvalidRequest(_) => tracing::warn!(
                        "[{}] Rejected `{}` ({}) from {}: {}",
                        config.executor_id,
                        command_name,
                        correlation_id,
                        invoker,
                        failure
                    ),
                    _ => tracing::error!(
                        "[{}] Command `{}` ({}) failed with {:?}: {}",
                        config.executor_id,
                        command_name,
                        correlation_id,
                        status,
                        failure
                    ),
                }

                let message = failure.to_string();
                let payload = match failure {
                    CommandFailure::Application(application_error) => application_error.payload,
                    _ => Vec::new(),
                };
                CommandResponse::failure(command_name, correlation_id, status, message)
                    .with_payload(payload)
            }
        }
    }
}
