use cmdwire::Boundary;
use cmdwire_service::CommandStatus;
use cmdwire_service_executor::{CommandExecutorInterface, ExecutorConfig};
use cmdwire_service_invoker::{CommandInvokerInterface, InvokeCommand, error::CommandInvokerError};
use onvif_ptz_demo_app::{
    DEFAULT_CONFIGURATION_TOKEN, DEFAULT_PROFILE_TOKEN, DemoInvoker, SimulatedCamera,
    serve_in_process,
};
use onvif_ptz_service_definition::{
    PtzCommand,
    commands::*,
    objects::{MoveStatus, PtzConfiguration, PtzVector},
};
use std::sync::Arc;

async fn camera_and_invoker() -> (Arc<SimulatedCamera>, DemoInvoker) {
    let camera = Arc::new(SimulatedCamera::new());
    let invoker = serve_in_process(camera.clone(), ExecutorConfig::new("test-camera"))
        .await
        .unwrap();
    (camera, invoker)
}

async fn status(invoker: &DemoInvoker) -> onvif_ptz_service_definition::objects::PtzStatus {
    GetStatusCommand::invoke(
        invoker,
        GetStatusRequestPayload::new(GetStatus::new(DEFAULT_PROFILE_TOKEN)),
    )
    .await
    .unwrap()
    .into_inner()
    .unwrap()
    .ptz_status
    .into_option()
    .unwrap()
}

fn pan_tilt(vector: &PtzVector) -> (f64, f64) {
    let pan_tilt = vector.pan_tilt.as_ref().unwrap();
    (*pan_tilt.x.get().unwrap(), *pan_tilt.y.get().unwrap())
}

#[tokio::test]
async fn test_every_ptz_command_is_registered() {
    let (_camera, invoker) = camera_and_invoker().await;

    let mut served: Vec<_> = invoker
        .executor()
        .descriptors()
        .await
        .into_iter()
        .map(|descriptor| descriptor.command_name)
        .collect();
    let mut expected: Vec<_> = PtzCommand::ALL.iter().map(|command| command.name()).collect();
    served.sort_unstable();
    expected.sort_unstable();

    assert_eq!(served, expected);
}

#[tokio::test]
async fn test_registering_twice_fails() {
    let (camera, invoker) = camera_and_invoker().await;

    let executor = invoker.executor();
    let result =
        onvif_ptz_service_definition::register_ptz_service::<_, (), _>(executor.as_ref(), camera)
            .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_absolute_and_relative_moves() {
    let (camera, invoker) = camera_and_invoker().await;

    AbsoluteMoveCommand::invoke(
        &invoker,
        AbsoluteMoveRequestPayload::new(AbsoluteMove::new(
            DEFAULT_PROFILE_TOKEN,
            PtzVector::pan_tilt(0.5, 0.25),
        )),
    )
    .await
    .unwrap();
    RelativeMoveCommand::invoke(
        &invoker,
        RelativeMoveRequestPayload::new(RelativeMove::new(
            DEFAULT_PROFILE_TOKEN,
            PtzVector::pan_tilt(0.75, -0.5),
        )),
    )
    .await
    .unwrap();

    // Pan is clamped to the unit range.
    assert_eq!(pan_tilt(&camera.position().await), (1.0, -0.25));

    let status = status(&invoker).await;
    assert_eq!(pan_tilt(status.position.as_ref().unwrap()), (1.0, -0.25));
    assert!(status.utc_time.is_present());
}

#[tokio::test]
async fn test_preset_lifecycle() {
    let (camera, invoker) = camera_and_invoker().await;

    AbsoluteMoveCommand::invoke(
        &invoker,
        AbsoluteMoveRequestPayload::new(AbsoluteMove::new(
            DEFAULT_PROFILE_TOKEN,
            PtzVector::pan_tilt(-0.5, 0.5),
        )),
    )
    .await
    .unwrap();

    let token = SetPresetCommand::invoke(
        &invoker,
        SetPresetRequestPayload::new(
            SetPreset::new(DEFAULT_PROFILE_TOKEN).with_preset_name("Door"),
        ),
    )
    .await
    .unwrap()
    .into_inner()
    .unwrap()
    .preset_token
    .into_option()
    .unwrap();
    assert_eq!(token, "Preset_1");

    GotoHomePositionCommand::invoke(
        &invoker,
        GotoHomePositionRequestPayload::new(GotoHomePosition::new(DEFAULT_PROFILE_TOKEN)),
    )
    .await
    .unwrap();
    assert_eq!(pan_tilt(&camera.position().await), (0.0, 0.0));

    GotoPresetCommand::invoke(
        &invoker,
        GotoPresetRequestPayload::new(GotoPreset::new(DEFAULT_PROFILE_TOKEN, &token)),
    )
    .await
    .unwrap();
    assert_eq!(pan_tilt(&camera.position().await), (-0.5, 0.5));

    let presets = GetPresetsCommand::invoke(
        &invoker,
        GetPresetsRequestPayload::new(GetPresets::new(DEFAULT_PROFILE_TOKEN)),
    )
    .await
    .unwrap()
    .into_inner()
    .unwrap();
    assert_eq!(presets.presets().len(), 1);
    assert_eq!(presets.presets()[0].name.as_deref(), Some("Door"));

    RemovePresetCommand::invoke(
        &invoker,
        RemovePresetRequestPayload::new(RemovePreset::new(DEFAULT_PROFILE_TOKEN, &token)),
    )
    .await
    .unwrap();

    let err = RemovePresetCommand::invoke(
        &invoker,
        RemovePresetRequestPayload::new(RemovePreset::new(DEFAULT_PROFILE_TOKEN, &token)),
    )
    .await
    .unwrap_err();
    match err {
        CommandInvokerError::Remote {
            status, payload, ..
        } => {
            assert_eq!(status, CommandStatus::UnprocessableContent);
            let fault: serde_json::Value = serde_json::from_slice(&payload).unwrap();
            assert_eq!(fault["Fault"], "ter:NoToken");
        }
        other => panic!("Unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_continuous_move_until_stopped() {
    let (_camera, invoker) = camera_and_invoker().await;

    ContinuousMoveCommand::invoke(
        &invoker,
        ContinuousMoveRequestPayload::new(
            ContinuousMove::new(DEFAULT_PROFILE_TOKEN, PtzVector::pan_tilt(0.1, 0.0).with_zoom(0.1))
                .with_timeout("PT5S"),
        ),
    )
    .await
    .unwrap();
    let moving = status(&invoker).await.move_status.unwrap();
    assert_eq!(moving.pan_tilt, Some(MoveStatus::Moving));
    assert_eq!(moving.zoom, Some(MoveStatus::Moving));

    StopCommand::invoke(
        &invoker,
        StopRequestPayload::new(Stop::new(DEFAULT_PROFILE_TOKEN).with_zoom(false)),
    )
    .await
    .unwrap();
    let stopped = status(&invoker).await.move_status.unwrap();
    assert_eq!(stopped.pan_tilt, Some(MoveStatus::Idle));
    assert_eq!(stopped.zoom, Some(MoveStatus::Moving));
}

#[tokio::test]
async fn test_configuration_roundtrip() {
    let (camera, invoker) = camera_and_invoker().await;

    let mut configuration = GetConfigurationCommand::invoke(
        &invoker,
        GetConfigurationRequestPayload::new(GetConfiguration::new(DEFAULT_CONFIGURATION_TOKEN)),
    )
    .await
    .unwrap()
    .into_inner()
    .unwrap()
    .ptz_configuration
    .into_option()
    .unwrap();
    configuration.default_ptz_timeout = Some("PT30S".to_string());

    SetConfigurationCommand::invoke(
        &invoker,
        SetConfigurationRequestPayload::new(
            SetConfiguration::new(configuration).with_force_persistence(true),
        ),
    )
    .await
    .unwrap();
    assert!(camera.is_configuration_persisted().await);

    let updated = GetConfigurationCommand::invoke(
        &invoker,
        GetConfigurationRequestPayload::new(GetConfiguration::new(DEFAULT_CONFIGURATION_TOKEN)),
    )
    .await
    .unwrap()
    .into_inner()
    .unwrap();
    assert_eq!(
        updated
            .ptz_configuration
            .get()
            .and_then(|c| c.default_ptz_timeout.as_deref()),
        Some("PT30S")
    );

    // An empty SetConfiguration is valid and changes nothing but persistence.
    SetConfigurationCommand::invoke(
        &invoker,
        SetConfigurationRequestPayload::new(SetConfiguration::default()),
    )
    .await
    .unwrap();
    assert!(!camera.is_configuration_persisted().await);

    let err = SetConfigurationCommand::invoke(
        &invoker,
        SetConfigurationRequestPayload::new(SetConfiguration::new(PtzConfiguration::new("other"))),
    )
    .await
    .unwrap_err();
    assert_eq!(err.status(), Some(CommandStatus::UnprocessableContent));
}

#[tokio::test]
async fn test_unknown_profile_is_a_fault() {
    let (_camera, invoker) = camera_and_invoker().await;

    let err = GetStatusCommand::invoke(
        &invoker,
        GetStatusRequestPayload::new(GetStatus::new("Profile_9")),
    )
    .await
    .unwrap_err();

    assert_eq!(err.status(), Some(CommandStatus::UnprocessableContent));
}

#[tokio::test]
async fn test_incomplete_request_object_is_bad_request() {
    let (_camera, invoker) = camera_and_invoker().await;

    // The envelope is present, the preset token inside it is not.
    let err = invoker
        .invoke_raw(
            "RemovePreset",
            "application/json",
            br#"{"RemovePreset":{"ProfileToken":"Profile_1"}}"#.to_vec(),
        )
        .await
        .unwrap_err();

    match err {
        CommandInvokerError::Remote {
            status, message, ..
        } => {
            assert_eq!(status, CommandStatus::BadRequest);
            assert!(message.is_some_and(|message| message.contains("`PresetToken`")));
        }
        other => panic!("Unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_coordinate_is_bad_request() {
    let (_camera, invoker) = camera_and_invoker().await;
    let before = status(&invoker).await;

    // `x` is required two levels below the request object.
    let err = invoker
        .invoke_raw(
            "AbsoluteMove",
            "application/json",
            br#"{"AbsoluteMove":{"ProfileToken":"Profile_1","Position":{"PanTilt":{"y":0.5}}}}"#
                .to_vec(),
        )
        .await
        .unwrap_err();

    match err {
        CommandInvokerError::Remote {
            status, message, ..
        } => {
            assert_eq!(status, CommandStatus::BadRequest);
            assert!(message.is_some_and(|message| message.contains("`x`")));
        }
        other => panic!("Unexpected error: {:?}", other),
    }
    assert_eq!(status(&invoker).await.position, before.position);
}

#[tokio::test]
async fn test_configuration_without_token_is_bad_request() {
    let (_camera, invoker) = camera_and_invoker().await;

    let err = invoker
        .invoke_raw(
            "SetConfiguration",
            "application/json",
            br#"{"SetConfiguration":{"PTZConfiguration":{"Name":"Nameless"}}}"#.to_vec(),
        )
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(CommandStatus::BadRequest));
}

#[tokio::test]
async fn test_incomplete_outbound_request_fails_locally() {
    let (_camera, invoker) = camera_and_invoker().await;
    let request = RelativeMove {
        profile_token: Default::default(),
        translation: PtzVector::pan_tilt(0.1, 0.1).into(),
        speed: None,
    };

    let err = RelativeMoveCommand::invoke(&invoker, RelativeMoveRequestPayload::new(request))
        .await
        .unwrap_err();

    match err {
        CommandInvokerError::Payload(err) => {
            assert_eq!(err.missing_field(), Some("ProfileToken"));
            assert_eq!(err.boundary(), Some(Boundary::Outbound));
        }
        other => panic!("Unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_concurrent_commands() {
    let (_camera, invoker) = camera_and_invoker().await;

    let results = futures::future::join_all((0..5).map(|i| {
        SetPresetCommand::invoke(
            &invoker,
            SetPresetRequestPayload::new(
                SetPreset::new(DEFAULT_PROFILE_TOKEN).with_preset_name(format!("P{i}")),
            ),
        )
    }))
    .await;

    let mut tokens: Vec<String> = results
        .into_iter()
        .map(|result| {
            result
                .unwrap()
                .into_inner()
                .unwrap()
                .preset_token
                .into_option()
                .unwrap()
        })
        .collect();
    tokens.sort();
    tokens.dedup();
    assert_eq!(tokens.len(), 5);
}
