use crate::commands::*;
use cmdwire::{Boundary, EmptyJson, Payload};
use cmdwire_service::{CommandBinding, CommandDescriptor};
use cmdwire_service_executor::{
    CommandExecutorInterface,
    error::{CommandExecutorError, HandlerError},
};
use std::{fmt, str::FromStr, sync::Arc};
use thiserror::Error;

/// Every command of the PTZ interface.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PtzCommand {
    GetStatus,
    GetPresets,
    SetPreset,
    RemovePreset,
    GotoPreset,
    GotoHomePosition,
    AbsoluteMove,
    RelativeMove,
    ContinuousMove,
    Stop,
    GetConfiguration,
    SetConfiguration,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("`{0}` is not a PTZ command")]
pub struct UnknownPtzCommand(pub String);

impl PtzCommand {
    pub const ALL: [PtzCommand; 12] = [
        PtzCommand::GetStatus,
        PtzCommand::GetPresets,
        PtzCommand::SetPreset,
        PtzCommand::RemovePreset,
        PtzCommand::GotoPreset,
        PtzCommand::GotoHomePosition,
        PtzCommand::AbsoluteMove,
        PtzCommand::RelativeMove,
        PtzCommand::ContinuousMove,
        PtzCommand::Stop,
        PtzCommand::GetConfiguration,
        PtzCommand::SetConfiguration,
    ];

    /// The command name on the wire.
    pub const fn name(self) -> &'static str {
        match self {
            PtzCommand::GetStatus => GetStatusCommand::COMMAND_NAME,
            PtzCommand::GetPresets => GetPresetsCommand::COMMAND_NAME,
            PtzCommand::SetPreset => SetPresetCommand::COMMAND_NAME,
            PtzCommand::RemovePreset => RemovePresetCommand::COMMAND_NAME,
            PtzCommand::GotoPreset => GotoPresetCommand::COMMAND_NAME,
            PtzCommand::GotoHomePosition => GotoHomePositionCommand::COMMAND_NAME,
            PtzCommand::AbsoluteMove => AbsoluteMoveCommand::COMMAND_NAME,
            PtzCommand::RelativeMove => RelativeMoveCommand::COMMAND_NAME,
            PtzCommand::ContinuousMove => ContinuousMoveCommand::COMMAND_NAME,
            PtzCommand::Stop => StopCommand::COMMAND_NAME,
            PtzCommand::GetConfiguration => GetConfigurationCommand::COMMAND_NAME,
            PtzCommand::SetConfiguration => SetConfigurationCommand::COMMAND_NAME,
        }
    }

    pub const fn command_id(self) -> u64 {
        match self {
            PtzCommand::GetStatus => GetStatusCommand::COMMAND_ID,
            PtzCommand::GetPresets => GetPresetsCommand::COMMAND_ID,
            PtzCommand::SetPreset => SetPresetCommand::COMMAND_ID,
            PtzCommand::RemovePreset => RemovePresetCommand::COMMAND_ID,
            PtzCommand::GotoPreset => GotoPresetCommand::COMMAND_ID,
            PtzCommand::GotoHomePosition => GotoHomePositionCommand::COMMAND_ID,
            PtzCommand::AbsoluteMove => AbsoluteMoveCommand::COMMAND_ID,
            PtzCommand::RelativeMove => RelativeMoveCommand::COMMAND_ID,
            PtzCommand::ContinuousMove => ContinuousMoveCommand::COMMAND_ID,
            PtzCommand::Stop => StopCommand::COMMAND_ID,
            PtzCommand::GetConfiguration => GetConfigurationCommand::COMMAND_ID,
            PtzCommand::SetConfiguration => SetConfigurationCommand::COMMAND_ID,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    pub fn descriptor(self) -> CommandDescriptor {
        match self {
            PtzCommand::GetStatus => CommandDescriptor::of::<GetStatusCommand>(),
            PtzCommand::GetPresets => CommandDescriptor::of::<GetPresetsCommand>(),
            PtzCommand::SetPreset => CommandDescriptor::of::<SetPresetCommand>(),
            PtzCommand::RemovePreset => CommandDescriptor::of::<RemovePresetCommand>(),
            PtzCommand::GotoPreset => CommandDescriptor::of::<GotoPresetCommand>(),
            PtzCommand::GotoHomePosition => CommandDescriptor::of::<GotoHomePositionCommand>(),
            PtzCommand::AbsoluteMove => CommandDescriptor::of::<AbsoluteMoveCommand>(),
            PtzCommand::RelativeMove => CommandDescriptor::of::<RelativeMoveCommand>(),
            PtzCommand::ContinuousMove => CommandDescriptor::of::<ContinuousMoveCommand>(),
            PtzCommand::Stop => CommandDescriptor::of::<StopCommand>(),
            PtzCommand::GetConfiguration => CommandDescriptor::of::<GetConfigurationCommand>(),
            PtzCommand::SetConfiguration => CommandDescriptor::of::<SetConfigurationCommand>(),
        }
    }
}

impl fmt::Display for PtzCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PtzCommand {
    type Err = UnknownPtzCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownPtzCommand(s.to_owned()))
    }
}

/// Device-side behavior for the PTZ interface.
///
/// Handlers receive the unwrapped request object with every required field
/// checked at every depth: a request missing one is answered with
/// `BadRequest` and never reaches the service. Commands that return nothing reply with
/// `{}`.
#[async_trait::async_trait]
pub trait PtzService: Send + Sync + 'static {
    async fn get_status(&self, request: GetStatus) -> Result<GetStatusResponse, HandlerError>;

    async fn get_presets(&self, request: GetPresets) -> Result<GetPresetsResponse, HandlerError>;

    async fn set_preset(&self, request: SetPreset) -> Result<SetPresetResponse, HandlerError>;

    async fn remove_preset(&self, request: RemovePreset) -> Result<(), HandlerError>;

    async fn goto_preset(&self, request: GotoPreset) -> Result<(), HandlerError>;

    async fn goto_home_position(&self, request: GotoHomePosition) -> Result<(), HandlerError>;

    async fn absolute_move(&self, request: AbsoluteMove) -> Result<(), HandlerError>;

    async fn relative_move(&self, request: RelativeMove) -> Result<(), HandlerError>;

    async fn continuous_move(&self, request: ContinuousMove) -> Result<(), HandlerError>;

    async fn stop(&self, request: Stop) -> Result<(), HandlerError>;

    async fn get_configuration(
        &self,
        request: GetConfiguration,
    ) -> Result<GetConfigurationResponse, HandlerError>;

    async fn set_configuration(&self, request: SetConfiguration) -> Result<(), HandlerError>;
}

// Registers one binding whose handler forwards to a `PtzService` method.
macro_rules! register_ptz_handler {
    ($executor:expr, $service:expr, $binding:ty, $method:ident, $response:ty) => {{
        let service = $service.clone();
        $executor
            .register::<$binding, _, _>(
                move |_context: C, request: <$binding as CommandBinding>::Request| {
                    let service = service.clone();
                    async move {
                        let request = request.into_inner()?;
                        request.validate_deep(Boundary::Inbound)?;
                        let response = service.$method(request).await?;
                        Ok::<_, HandlerError>(<$response>::from(response))
                    }
                },
            )
            .await
    }};
    ($executor:expr, $service:expr, $binding:ty, $method:ident) => {{
        let service = $service.clone();
        $executor
            .register::<$binding, _, _>(
                move |_context: C, request: <$binding as CommandBinding>::Request| {
                    let service = service.clone();
                    async move {
                        let request = request.into_inner()?;
                        request.validate_deep(Boundary::Inbound)?;
                        service.$method(request).await?;
                        Ok::<_, HandlerError>(EmptyJson {})
                    }
                },
            )
            .await
    }};
}

/// Registers a handler for every [`PtzCommand`] on `executor`, each
/// forwarding to `service`.
///
/// Fails without rolling back if any PTZ command is already registered.
pub async fn register_ptz_service<E, C, S>(
    executor: &E,
    service: Arc<S>,
) -> Result<(), CommandExecutorError>
where
    E: CommandExecutorInterface<C>,
    C: Send + Sync + Clone + 'static,
    S: PtzService,
{
    register_ptz_handler!(
        executor,
        service,
        GetStatusCommand,
        get_status,
        GetStatusResponsePayload
    )?;
    register_ptz_handler!(
        executor,
        service,
        GetPresetsCommand,
        get_presets,
        GetPresetsResponsePayload
    )?;
    register_ptz_handler!(
        executor,
        service,
        SetPresetCommand,
        set_preset,
        SetPresetResponsePayload
    )?;
    register_ptz_handler!(executor, service, RemovePresetCommand, remove_preset)?;
    register_ptz_handler!(executor, service, GotoPresetCommand, goto_preset)?;
    register_ptz_handler!(executor, service, GotoHomePositionCommand, goto_home_position)?;
    register_ptz_handler!(executor, service, AbsoluteMoveCommand, absolute_move)?;
    register_ptz_handler!(executor, service, RelativeMoveCommand, relative_move)?;
    register_ptz_handler!(executor, service, ContinuousMoveCommand, continuous_move)?;
    register_ptz_handler!(executor, service, StopCommand, stop)?;
    register_ptz_handler!(
        executor,
        service,
        GetConfigurationCommand,
        get_configuration,
        GetConfigurationResponsePayload
    )?;
    register_ptz_handler!(executor, service, SetConfigurationCommand, set_configuration)?;

    Ok(())
}
