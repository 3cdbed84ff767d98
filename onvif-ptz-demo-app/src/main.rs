use cmdwire_service_executor::{CommandExecutorInterface, ExecutorConfig};
use cmdwire_service_invoker::{InvokeCommand, error::CommandInvokerError};
use onvif_ptz_demo_app::{
    DEFAULT_CONFIGURATION_TOKEN, DEFAULT_PROFILE_TOKEN, SimulatedCamera, serve_in_process,
};
use onvif_ptz_service_definition::{
    commands::*,
    objects::{PtzVector, Vector2D},
};
use std::{sync::Arc, time::Duration};
use tokio::join;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .init();

    let config = ExecutorConfig::new("ptz-camera-1")
        .with_max_payload_size(64 * 1024)
        .with_execution_timeout(Duration::from_secs(2));
    let camera = Arc::new(SimulatedCamera::new());
    let invoker = serve_in_process(camera, config).await?;

    for descriptor in invoker.executor().descriptors().await {
        println!(
            "Serving {} ({:#018x}): {} -> {}",
            descriptor.command_name,
            descriptor.command_id,
            descriptor.request_type,
            descriptor.response_type
        );
    }

    AbsoluteMoveCommand::invoke(
        &invoker,
        AbsoluteMoveRequestPayload::new(AbsoluteMove::new(
            DEFAULT_PROFILE_TOKEN,
            PtzVector::pan_tilt(0.25, -0.5).with_zoom(0.3),
        )),
    )
    .await?;

    let stored = SetPresetCommand::invoke(
        &invoker,
        SetPresetRequestPayload::new(
            SetPreset::new(DEFAULT_PROFILE_TOKEN).with_preset_name("Entrance"),
        ),
    )
    .await?
    .into_inner()?;
    let preset_token = stored.preset_token.into_option().unwrap_or_default();
    println!("Stored preset: {}", preset_token);

    // Independent calls may run concurrently.
    let (home, presets) = join!(
        GotoHomePositionCommand::invoke(
            &invoker,
            GotoHomePositionRequestPayload::new(GotoHomePosition::new(DEFAULT_PROFILE_TOKEN)),
        ),
        GetPresetsCommand::invoke(
            &invoker,
            GetPresetsRequestPayload::new(GetPresets::new(DEFAULT_PROFILE_TOKEN)),
        )
    );
    home?;
    println!("Presets: {:?}", presets?.into_inner()?.presets());

    GotoPresetCommand::invoke(
        &invoker,
        GotoPresetRequestPayload::new(GotoPreset::new(DEFAULT_PROFILE_TOKEN, &preset_token)),
    )
    .await?;

    let status = GetStatusCommand::invoke(
        &invoker,
        GetStatusRequestPayload::new(GetStatus::new(DEFAULT_PROFILE_TOKEN)),
    )
    .await?
    .into_inner()?;
    println!("Status: {:?}", status.ptz_status.get());

    let configuration = GetConfigurationCommand::invoke(
        &invoker,
        GetConfigurationRequestPayload::new(GetConfiguration::new(DEFAULT_CONFIGURATION_TOKEN)),
    )
    .await?
    .into_inner()?;
    println!("Configuration: {:?}", configuration.ptz_configuration.get());

    RemovePresetCommand::invoke(
        &invoker,
        RemovePresetRequestPayload::new(RemovePreset::new(DEFAULT_PROFILE_TOKEN, &preset_token)),
    )
    .await?;

    // A request with an unset required field is rejected before it is sent.
    let incomplete = RelativeMove {
        translation: Some(PtzVector {
            pan_tilt: Some(Vector2D::new(0.1, 0.1)),
            zoom: None,
        })
        .into(),
        ..RelativeMove::default()
    };
    match RelativeMoveCommand::invoke(&invoker, RelativeMoveRequestPayload::new(incomplete)).await {
        Err(CommandInvokerError::Payload(err)) => println!("Rejected locally: {}", err),
        other => println!("Unexpected outcome: {:?}", other),
    }

    // Removing the same preset twice is a device-side fault.
    match RemovePresetCommand::invoke(
        &invoker,
        RemovePresetRequestPayload::new(RemovePreset::new(DEFAULT_PROFILE_TOKEN, &preset_token)),
    )
    .await
    {
        Err(CommandInvokerError::Remote {
            status,
            message,
            payload,
        }) => println!(
            "Rejected remotely with {:?}: {} {}",
            status,
            message.unwrap_or_default(),
            String::from_utf8_lossy(&payload)
        ),
        other => println!("Unexpected outcome: {:?}", other),
    }

    Ok(())
}
