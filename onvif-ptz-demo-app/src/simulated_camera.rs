use chrono::Utc;
use cmdwire_service_executor::error::{ApplicationError, HandlerError};
use onvif_ptz_service_definition::{
    commands::*,
    dispatch::PtzService,
    objects::{MoveStatus, Preset, PtzConfiguration, PtzMoveStatus, PtzStatus, PtzVector},
};
use std::collections::BTreeMap;
use tokio::sync::Mutex;

/// The single media profile the simulated unit exposes.
pub const DEFAULT_PROFILE_TOKEN: &str = "Profile_1";

/// The token of the unit's only PTZ configuration.
pub const DEFAULT_CONFIGURATION_TOKEN: &str = "PTZConfiguration_1";

const PAN_TILT_RANGE: (f64, f64) = (-1.0, 1.0);
const ZOOM_RANGE: (f64, f64) = (0.0, 1.0);

/// Builds the domain error a real device would report as an ONVIF fault,
/// carrying the fault code as a JSON body.
fn fault(code: &str, message: impl Into<String>) -> HandlerError {
    let body = serde_json::json!({ "Fault": code });
    let payload = serde_json::to_vec(&body).unwrap_or_default();
    Box::new(ApplicationError::new(message).with_payload(payload))
}

struct CameraState {
    position: PtzVector,
    home: PtzVector,
    move_status: PtzMoveStatus,
    presets: BTreeMap<String, Preset>,
    next_preset: u32,
    configuration: PtzConfiguration,
    persisted: bool,
}

/// A PTZ unit simulated in memory.
///
/// Moves complete instantly, except continuous moves which report `MOVING`
/// until stopped.
pub struct SimulatedCamera {
    state: Mutex<CameraState>,
}

impl Default for SimulatedCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedCamera {
    pub fn new() -> Self {
        let home = PtzVector::pan_tilt(0.0, 0.0).with_zoom(0.0);

        let mut configuration = PtzConfiguration::new(DEFAULT_CONFIGURATION_TOKEN);
        configuration.name = Some("Default PTZ".to_owned());
        configuration.node_token = Some("PTZNode_1".to_owned());
        configuration.use_count = Some(1);
        configuration.default_ptz_timeout = Some("PT5S".to_owned());
        configuration.default_ptz_speed = Some(PtzVector::pan_tilt(0.5, 0.5).with_zoom(0.5));

        Self {
            state: Mutex::new(CameraState {
                position: home.clone(),
                home,
                move_status: PtzMoveStatus::uniform(MoveStatus::Idle),
                presets: BTreeMap::new(),
                next_preset: 1,
                configuration,
                persisted: false,
            }),
        }
    }

    /// Whether the last `SetConfiguration` asked for persistence.
    pub async fn is_configuration_persisted(&self) -> bool {
        self.state.lock().await.persisted
    }

    pub async fn position(&self) -> PtzVector {
        self.state.lock().await.position.clone()
    }
}

fn check_profile(profile_token: &cmdwire::Required<String>) -> Result<(), HandlerError> {
    match profile_token.get() {
        Some(token) if token == DEFAULT_PROFILE_TOKEN => Ok(()),
        Some(token) => Err(fault(
            "ter:NoProfile",
            format!("no media profile `{token}`"),
        )),
        None => Err(fault("ter:NoProfile", "no media profile given")),
    }
}

fn clamp(value: f64, (min, max): (f64, f64)) -> f64 {
    value.clamp(min, max)
}

/// Applies `target` onto `position` axis by axis. With `relative`, the
/// target is an offset.
fn apply_vector(position: &mut PtzVector, target: &PtzVector, relative: bool) {
    if let Some(target) = &target.pan_tilt {
        let current = position.pan_tilt.get_or_insert_with(Default::default);
        let (x, y) = (
            target.x.get().copied().unwrap_or_default(),
            target.y.get().copied().unwrap_or_default(),
        );
        let (base_x, base_y) = if relative {
            (
                current.x.get().copied().unwrap_or_default(),
                current.y.get().copied().unwrap_or_default(),
            )
        } else {
            (0.0, 0.0)
        };
        current.x.set(clamp(base_x + x, PAN_TILT_RANGE));
        current.y.set(clamp(base_y + y, PAN_TILT_RANGE));
    }

    if let Some(target) = &target.zoom {
        let current = position.zoom.get_or_insert_with(Default::default);
        let x = target.x.get().copied().unwrap_or_default();
        let base = if relative {
            current.x.get().copied().unwrap_or_default()
        } else {
            0.0
        };
        current.x.set(clamp(base + x, ZOOM_RANGE));
    }
}

#[async_trait::async_trait]
impl PtzService for SimulatedCamera {
    async fn get_status(&self, request: GetStatus) -> Result<GetStatusResponse, HandlerError> {
        check_profile(&request.profile_token)?;
        let state = self.state.lock().await;

        let mut status = PtzStatus::new(Utc::now());
        status.position = Some(state.position.clone());
        status.move_status = Some(state.move_status.clone());

        Ok(GetStatusResponse::new(status))
    }

    async fn get_presets(&self, request: GetPresets) -> Result<GetPresetsResponse, HandlerError> {
        check_profile(&request.profile_token)?;
        let state = self.state.lock().await;

        Ok(GetPresetsResponse::new(
            state.presets.values().cloned().collect(),
        ))
    }

    async fn set_preset(&self, request: SetPreset) -> Result<SetPresetResponse, HandlerError> {
        check_profile(&request.profile_token)?;
        let mut state = self.state.lock().await;

        let token = match request.preset_token {
            Some(token) if state.presets.contains_key(&token) => token,
            Some(token) => {
                return Err(fault("ter:NoToken", format!("no preset `{token}`")));
            }
            None => {
                let token = format!("Preset_{}", state.next_preset);
                state.next_preset += 1;
                token
            }
        };

        let preset = Preset {
            token: Some(token.clone()),
            name: request.preset_name.or_else(|| Some(token.clone())),
            ptz_position: Some(state.position.clone()),
        };
        state.presets.insert(token.clone(), preset);
        tracing::info!("Stored preset `{}`", token);

        Ok(SetPresetResponse::new(token))
    }

    async fn remove_preset(&self, request: RemovePreset) -> Result<(), HandlerError> {
        check_profile(&request.profile_token)?;
        let token = request.preset_token.into_option().unwrap_or_default();
        let mut state = self.state.lock().await;

        match state.presets.remove(&token) {
            Some(_) => {
                tracing::info!("Removed preset `{}`", token);
                Ok(())
            }
            None => Err(fault("ter:NoToken", format!("no preset `{token}`"))),
        }
    }

    async fn goto_preset(&self, request: GotoPreset) -> Result<(), HandlerError> {
        check_profile(&request.profile_token)?;
        let token = request.preset_token.into_option().unwrap_or_default();
        let mut state = self.state.lock().await;

        let target = state
            .presets
            .get(&token)
            .and_then(|preset| preset.ptz_position.clone())
            .ok_or_else(|| fault("ter:NoToken", format!("no preset `{token}`")))?;
        apply_vector(&mut state.position, &target, false);
        state.move_status = PtzMoveStatus::uniform(MoveStatus::Idle);

        Ok(())
    }

    async fn goto_home_position(&self, request: GotoHomePosition) -> Result<(), HandlerError> {
        check_profile(&request.profile_token)?;
        let mut state = self.state.lock().await;

        state.position = state.home.clone();
        state.move_status = PtzMoveStatus::uniform(MoveStatus::Idle);

        Ok(())
    }

    async fn absolute_move(&self, request: AbsoluteMove) -> Result<(), HandlerError> {
        check_profile(&request.profile_token)?;
        let target = request.position.into_option().unwrap_or_default();
        let mut state = self.state.lock().await;

        apply_vector(&mut state.position, &target, false);
        state.move_status = PtzMoveStatus::uniform(MoveStatus::Idle);

        Ok(())
    }

    async fn relative_move(&self, request: RelativeMove) -> Result<(), HandlerError> {
        check_profile(&request.profile_token)?;
        let translation = request.translation.into_option().unwrap_or_default();
        let mut state = self.state.lock().await;

        apply_vector(&mut state.position, &translation, true);
        state.move_status = PtzMoveStatus::uniform(MoveStatus::Idle);

        Ok(())
    }

    async fn continuous_move(&self, request: ContinuousMove) -> Result<(), HandlerError> {
        check_profile(&request.profile_token)?;
        let velocity = request.velocity.into_option().unwrap_or_default();
        let mut state = self.state.lock().await;

        if velocity.pan_tilt.is_some() {
            state.move_status.pan_tilt = Some(MoveStatus::Moving);
        }
        if velocity.zoom.is_some() {
            state.move_status.zoom = Some(MoveStatus::Moving);
        }

        Ok(())
    }

    async fn stop(&self, request: Stop) -> Result<(), HandlerError> {
        check_profile(&request.profile_token)?;
        let mut state = self.state.lock().await;

        if request.stops_pan_tilt() {
            state.move_status.pan_tilt = Some(MoveStatus::Idle);
        }
        if request.stops_zoom() {
            state.move_status.zoom = Some(MoveStatus::Idle);
        }

        Ok(())
    }

    async fn get_configuration(
        &self,
        request: GetConfiguration,
    ) -> Result<GetConfigurationResponse, HandlerError> {
        let state = self.state.lock().await;

        if request.ptz_configuration_token != state.configuration.token {
            return Err(fault(
                "ter:NoConfig",
                "no PTZ configuration with that token",
            ));
        }

        Ok(GetConfigurationResponse::new(state.configuration.clone()))
    }

    async fn set_configuration(&self, request: SetConfiguration) -> Result<(), HandlerError> {
        let mut state = self.state.lock().await;

        if let Some(configuration) = request.ptz_configuration {
            if configuration.token != state.configuration.token {
                return Err(fault(
                    "ter:NoConfig",
                    "no PTZ configuration with that token",
                ));
            }
            state.configuration = configuration;
        }
        state.persisted = request.force_persistence.unwrap_or(false);

        Ok(())
    }
}
