use crate::{CommandInvokerInterface, error::CommandInvokerError};
use cmdwire::PayloadSerializer;
use cmdwire_service::CommandBinding;

/// Lets downstream code write `B::invoke(&invoker, request)` for any binding
/// `B`, without touching encoding or transport.
#[async_trait::async_trait]
pub trait InvokeCommand: CommandBinding + Sized + Send + Sync {
    async fn invoke<I: CommandInvokerInterface>(
        invoker: &I,
        request: Self::Request,
    ) -> Result<Self::Response, CommandInvokerError>;
}

/// Blanket implementation for every binding.
///
/// The request is validated and encoded before anything is sent, and the
/// response is decoded and validated before it is returned.
#[async_trait::async_trait]
impl<B> InvokeCommand for B
where
    B: CommandBinding + Send + Sync + 'static,
{
    async fn invoke<I: CommandInvokerInterface>(
        invoker: &I,
        request: Self::Request,
    ) -> Result<Self::Response, CommandInvokerError> {
        let encoded = B::encode_request(&request)?;
        let response_bytes = invoker
            .invoke_raw(
                B::COMMAND_NAME,
                <B::Serializer as PayloadSerializer>::CONTENT_TYPE,
                encoded,
            )
            .await?;

        Ok(B::decode_response(&response_bytes)?)
    }
}
