//! An in-memory PTZ unit that answers the ONVIF PTZ commands.

mod simulated_camera;
pub use simulated_camera::*;

use cmdwire_service_executor::{
    CommandExecutor, ExecutorConfig, LoopbackInvoker, error::CommandExecutorError,
};
use onvif_ptz_service_definition::register_ptz_service;
use std::sync::Arc;

pub type DemoInvoker = LoopbackInvoker<CommandExecutor<()>, ()>;

/// Serves `camera` on a fresh executor and returns an invoker wired to it.
pub async fn serve_in_process(
    camera: Arc<SimulatedCamera>,
    config: ExecutorConfig,
) -> Result<DemoInvoker, CommandExecutorError> {
    let executor = Arc::new(CommandExecutor::with_config(config));
    register_ptz_service::<_, (), _>(executor.as_ref(), camera).await?;
    Ok(LoopbackInvoker::new(executor, (), "onvif-ptz-demo-client"))
}
