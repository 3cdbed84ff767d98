use cmdwire::{EmptyJson, PayloadSerializer, Utf8JsonSerializer};
use cmdwire_service::{CommandBinding, CommandRequest, CommandStatus};
use cmdwire_service_executor::{CommandExecutor, CommandExecutorInterface, error::HandlerError};
use onvif_ptz_service_definition::{INTERFACE_ID, PtzCommand, UnknownPtzCommand, commands::*};
use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

#[test]
fn test_command_ids_are_unique() {
    let ids: HashSet<u64> = PtzCommand::ALL.iter().map(|c| c.command_id()).collect();
    let names: HashSet<&str> = PtzCommand::ALL.iter().map(|c| c.name()).collect();

    assert_eq!(ids.len(), PtzCommand::ALL.len());
    assert_eq!(names.len(), PtzCommand::ALL.len());
}

#[test]
fn test_command_names_roundtrip() {
    for command in PtzCommand::ALL {
        assert_eq!(PtzCommand::from_name(command.name()), Some(command));
        assert_eq!(command.to_string().parse::<PtzCommand>(), Ok(command));

        let descriptor = command.descriptor();
        assert_eq!(descriptor.command_name, command.name());
        assert_eq!(descriptor.command_id, command.command_id());
        assert_eq!(descriptor.content_type, Utf8JsonSerializer::CONTENT_TYPE);
    }

    assert_eq!(
        "Reboot".parse::<PtzCommand>(),
        Err(UnknownPtzCommand("Reboot".to_string()))
    );
    assert_eq!(PtzCommand::from_name("removepreset"), None);
    assert_eq!(INTERFACE_ID, "dtmi:onvif:ptz;1");
}

#[test]
fn test_remove_preset_binding() {
    assert_eq!(RemovePresetCommand::COMMAND_NAME, "RemovePreset");
    assert_eq!(
        PtzCommand::RemovePreset.descriptor().response_type,
        std::any::type_name::<EmptyJson>()
    );
}

#[tokio::test]
async fn test_remove_preset_routes_to_its_handler() {
    let executor: CommandExecutor<()> = CommandExecutor::new();
    let removed = Arc::new(Mutex::new(Vec::new()));

    {
        let removed = removed.clone();
        executor
            .register::<RemovePresetCommand, _, _>(
                move |_ctx: (), request: RemovePresetRequestPayload| {
                    let removed = removed.clone();
                    async move {
                        let request = request.into_inner()?;
                        removed
                            .lock()
                            .unwrap()
                            .push(request.preset_token.into_option().unwrap_or_default());
                        Ok::<_, HandlerError>(EmptyJson {})
                    }
                },
            )
            .await
            .unwrap();
    }

    let payload = RemovePresetCommand::encode_request(&RemovePresetRequestPayload::new(
        RemovePreset::new("Profile_1", "Preset_4"),
    ))
    .unwrap();
    let response = executor
        .handle_request((), CommandRequest::new("RemovePreset", payload.clone()))
        .await;

    assert!(response.is_success());
    assert_eq!(RemovePresetCommand::decode_response(&response.payload).unwrap(), EmptyJson {});
    assert_eq!(*removed.lock().unwrap(), vec!["Preset_4".to_string()]);

    // Any other command name is rejected without touching the handler.
    for command in PtzCommand::ALL {
        if command == PtzCommand::RemovePreset {
            continue;
        }
        let response = executor
            .handle_request((), CommandRequest::new(command.name(), payload.clone()))
            .await;
        assert_eq!(response.command_status(), Some(CommandStatus::NotFound));
    }
    assert_eq!(removed.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_remove_preset_without_envelope_is_bad_request() {
    let executor: CommandExecutor<()> = CommandExecutor::new();
    executor
        .register::<RemovePresetCommand, _, _>(
            |_ctx: (), _request: RemovePresetRequestPayload| async move {
                Ok::<_, HandlerError>(EmptyJson {})
            },
        )
        .await
        .unwrap();

    let response = executor
        .handle_request((), CommandRequest::new("RemovePreset", b"{}".to_vec()))
        .await;

    assert_eq!(response.command_status(), Some(CommandStatus::BadRequest));
    assert!(
        response
            .status_message
            .is_some_and(|message| message.contains("`RemovePreset`"))
    );
}
