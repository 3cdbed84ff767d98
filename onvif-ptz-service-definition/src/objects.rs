//! Objects shared by several PTZ commands.
//!
//! Wire names follow the ONVIF PTZ schema and are case-sensitive.

use chrono::{DateTime, Utc};
use cmdwire::{Boundary, FieldSpec, Payload, PayloadError, Required, validate_each};
use serde::{Deserialize, Serialize};

/// A pan/tilt coordinate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2D {
    #[serde(rename = "x", default)]
    pub x: Required<f64>,

    #[serde(rename = "y", default)]
    pub y: Required<f64>,

    /// URI of the coordinate space; the node's default space when absent.
    #[serde(rename = "space", default, skip_serializing_if = "Option::is_none")]
    pub space: Option<String>,
}

impl Vector2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: Required::new(x),
            y: Required::new(y),
            space: None,
        }
    }

    pub fn with_space(mut self, space: impl Into<String>) -> Self {
        self.space = Some(space.into());
        self
    }
}

impl Payload for Vector2D {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::required("x", |p: &Self| p.x.is_present()),
        FieldSpec::required("y", |p: &Self| p.y.is_present()),
        FieldSpec::optional("space", |p: &Self| p.space.is_some()),
    ];
}

/// A zoom coordinate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector1D {
    #[serde(rename = "x", default)]
    pub x: Required<f64>,

    #[serde(rename = "space", default, skip_serializing_if = "Option::is_none")]
    pub space: Option<String>,
}

impl Vector1D {
    pub fn new(x: f64) -> Self {
        Self {
            x: Required::new(x),
            space: None,
        }
    }

    pub fn with_space(mut self, space: impl Into<String>) -> Self {
        self.space = Some(space.into());
        self
    }
}

impl Payload for Vector1D {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::required("x", |p: &Self| p.x.is_present()),
        FieldSpec::optional("space", |p: &Self| p.space.is_some()),
    ];
}

/// A position, translation or velocity with independent pan/tilt and zoom
/// parts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PtzVector {
    #[serde(rename = "PanTilt", default, skip_serializing_if = "Option::is_none")]
    pub pan_tilt: Option<Vector2D>,

    #[serde(rename = "Zoom", default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<Vector1D>,
}

/// Speeds share the shape of [`PtzVector`].
pub type PtzSpeed = PtzVector;

impl PtzVector {
    pub fn pan_tilt(x: f64, y: f64) -> Self {
        Self {
            pan_tilt: Some(Vector2D::new(x, y)),
            zoom: None,
        }
    }

    pub fn zoom(x: f64) -> Self {
        Self {
            pan_tilt: None,
            zoom: Some(Vector1D::new(x)),
        }
    }

    pub fn with_pan_tilt(mut self, x: f64, y: f64) -> Self {
        self.pan_tilt = Some(Vector2D::new(x, y));
        self
    }

    pub fn with_zoom(mut self, x: f64) -> Self {
        self.zoom = Some(Vector1D::new(x));
        self
    }
}

impl Payload for PtzVector {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::optional("PanTilt", |p: &Self| p.pan_tilt.is_some()),
        FieldSpec::optional("Zoom", |p: &Self| p.zoom.is_some()),
    ];

    fn validate_nested(&self, boundary: Boundary) -> Result<(), PayloadError> {
        validate_each(&self.pan_tilt, boundary)?;
        validate_each(&self.zoom, boundary)
    }
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MoveStatus {
    #[default]
    Idle,
    Moving,
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PtzMoveStatus {
    #[serde(rename = "PanTilt", default, skip_serializing_if = "Option::is_none")]
    pub pan_tilt: Option<MoveStatus>,

    #[serde(rename = "Zoom", default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<MoveStatus>,
}

impl PtzMoveStatus {
    /// Both axes in the same state.
    pub fn uniform(status: MoveStatus) -> Self {
        Self {
            pan_tilt: Some(status),
            zoom: Some(status),
        }
    }
}

impl Payload for PtzMoveStatus {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::optional("PanTilt", |p: &Self| p.pan_tilt.is_some()),
        FieldSpec::optional("Zoom", |p: &Self| p.zoom.is_some()),
    ];
}

/// A snapshot of the PTZ unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PtzStatus {
    #[serde(rename = "Position", default, skip_serializing_if = "Option::is_none")]
    pub position: Option<PtzVector>,

    #[serde(rename = "MoveStatus", default, skip_serializing_if = "Option::is_none")]
    pub move_status: Option<PtzMoveStatus>,

    #[serde(rename = "Error", default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Device time of the snapshot, RFC 3339 on the wire.
    #[serde(rename = "UtcTime", default)]
    pub utc_time: Required<DateTime<Utc>>,
}

impl PtzStatus {
    pub fn new(utc_time: DateTime<Utc>) -> Self {
        Self {
            utc_time: Required::new(utc_time),
            ..Self::default()
        }
    }
}

impl Payload for PtzStatus {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::optional("Position", |p: &Self| p.position.is_some()),
        FieldSpec::optional("MoveStatus", |p: &Self| p.move_status.is_some()),
        FieldSpec::optional("Error", |p: &Self| p.error.is_some()),
        FieldSpec::required("UtcTime", |p: &Self| p.utc_time.is_present()),
    ];

    fn validate_nested(&self, boundary: Boundary) -> Result<(), PayloadError> {
        validate_each(&self.position, boundary)?;
        validate_each(&self.move_status, boundary)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    #[serde(rename = "token", default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "PTZPosition", default, skip_serializing_if = "Option::is_none")]
    pub ptz_position: Option<PtzVector>,
}

impl Payload for Preset {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::optional("token", |p: &Self| p.token.is_some()),
        FieldSpec::optional("Name", |p: &Self| p.name.is_some()),
        FieldSpec::optional("PTZPosition", |p: &Self| p.ptz_position.is_some()),
    ];

    fn validate_nested(&self, boundary: Boundary) -> Result<(), PayloadError> {
        validate_each(&self.ptz_position, boundary)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PtzConfiguration {
    #[serde(rename = "token", default)]
    pub token: Required<String>,

    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "UseCount", default, skip_serializing_if = "Option::is_none")]
    pub use_count: Option<i32>,

    #[serde(rename = "NodeToken", default, skip_serializing_if = "Option::is_none")]
    pub node_token: Option<String>,

    #[serde(rename = "DefaultPTZSpeed", default, skip_serializing_if = "Option::is_none")]
    pub default_ptz_speed: Option<PtzSpeed>,

    /// An `xs:duration`, e.g. `PT5S`.
    #[serde(rename = "DefaultPTZTimeout", default, skip_serializing_if = "Option::is_none")]
    pub default_ptz_timeout: Option<String>,
}

impl PtzConfiguration {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Required::new(token.into()),
            ..Self::default()
        }
    }
}

impl Payload for PtzConfiguration {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::required("token", |p: &Self| p.token.is_present()),
        FieldSpec::optional("Name", |p: &Self| p.name.is_some()),
        FieldSpec::optional("UseCount", |p: &Self| p.use_count.is_some()),
        FieldSpec::optional("NodeToken", |p: &Self| p.node_token.is_some()),
        FieldSpec::optional("DefaultPTZSpeed", |p: &Self| p.default_ptz_speed.is_some()),
        FieldSpec::optional("DefaultPTZTimeout", |p: &Self| p.default_ptz_timeout.is_some()),
    ];

    fn validate_nested(&self, boundary: Boundary) -> Result<(), PayloadError> {
        validate_each(&self.default_ptz_speed, boundary)
    }
}
