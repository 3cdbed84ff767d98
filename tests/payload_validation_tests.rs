use cmdwire::{
    Boundary, EmptyJson, FieldSpec, Payload, PayloadError, PayloadSerializer, Requirement,
    Required, Utf8JsonSerializer, validate_each,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct Camera {
    #[serde(rename = "Token", default)]
    token: Required<String>,

    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(rename = "Enabled", default)]
    enabled: Required<bool>,
}

impl Payload for Camera {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::required("Token", |p: &Self| p.token.is_present()),
        FieldSpec::optional("Name", |p: &Self| p.name.is_some()),
        FieldSpec::required("Enabled", |p: &Self| p.enabled.is_present()),
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct Lens {
    #[serde(rename = "Focal", default)]
    focal: Required<f64>,
}

impl Payload for Lens {
    const FIELDS: &'static [FieldSpec<Self>] =
        &[FieldSpec::required("Focal", |p: &Self| p.focal.is_present())];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct Mount {
    #[serde(rename = "Lens", default)]
    lens: Required<Lens>,

    #[serde(rename = "Spares", default, skip_serializing_if = "Option::is_none")]
    spares: Option<Vec<Lens>>,
}

impl Payload for Mount {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::required("Lens", |p: &Self| p.lens.is_present()),
        FieldSpec::optional("Spares", |p: &Self| p.spares.is_some()),
    ];

    fn validate_nested(&self, boundary: Boundary) -> Result<(), PayloadError> {
        validate_each(self.lens.get(), boundary)?;
        validate_each(self.spares.iter().flatten(), boundary)
    }
}

fn lens(focal: f64) -> Lens {
    Lens {
        focal: Required::new(focal),
    }
}

#[test]
fn test_fully_populated_payload_validates() {
    let camera = Camera {
        token: Required::new("cam-1".to_string()),
        name: None,
        enabled: Required::new(true),
    };

    assert!(camera.validate(Boundary::Outbound).is_ok());
    assert!(camera.validate(Boundary::Inbound).is_ok());
    assert!(camera.missing_required_fields().is_empty());
}

#[test]
fn test_validation_names_first_missing_field() {
    let camera = Camera::default();

    let err = camera.validate(Boundary::Outbound).unwrap_err();
    match err {
        PayloadError::RequiredFieldMissing { field, boundary } => {
            assert_eq!(field, "Token");
            assert_eq!(boundary, Boundary::Outbound);
        }
        other => panic!("Unexpected error: {:?}", other),
    }

    assert_eq!(camera.missing_required_fields(), vec!["Token", "Enabled"]);
}

#[test]
fn test_validation_ignores_zero_values() {
    // `false` and an empty string are values, not absence.
    let camera = Camera {
        token: Required::new(String::new()),
        name: None,
        enabled: Required::new(false),
    };

    assert!(camera.validate(Boundary::Inbound).is_ok());
}

#[test]
fn test_optional_fields_never_fail_validation() {
    let camera = Camera {
        token: Required::new("cam-1".to_string()),
        name: None,
        enabled: Required::new(true),
    };

    assert!(camera.name.is_none());
    assert!(camera.validate(Boundary::Outbound).is_ok());
}

#[test]
fn test_validation_does_not_mutate_payload() {
    let camera = Camera {
        token: Required::unset(),
        name: Some("Lobby".to_string()),
        enabled: Required::new(true),
    };
    let before = camera.clone();

    let _ = camera.validate(Boundary::Inbound);
    let _ = camera.missing_required_fields();

    assert_eq!(camera, before);
}

#[test]
fn test_validate_checks_own_fields_only() {
    let mount = Mount {
        lens: Required::new(Lens::default()),
        spares: None,
    };

    assert!(mount.validate(Boundary::Outbound).is_ok());

    let err = mount.validate_deep(Boundary::Outbound).unwrap_err();
    assert_eq!(err.missing_field(), Some("Focal"));
    assert_eq!(err.boundary(), Some(Boundary::Outbound));
}

#[test]
fn test_deep_validation_walks_optional_lists() {
    let mut mount = Mount {
        lens: Required::new(lens(35.0)),
        spares: Some(vec![lens(50.0)]),
    };
    assert!(mount.validate_deep(Boundary::Inbound).is_ok());

    mount.spares = Some(vec![lens(50.0), Lens::default()]);
    let err = mount.validate_deep(Boundary::Inbound).unwrap_err();
    assert_eq!(err.missing_field(), Some("Focal"));
}

#[test]
fn test_serializer_rejects_incomplete_nested_object() {
    let mount = Mount {
        lens: Required::new(Lens::default()),
        spares: None,
    };
    let err = Utf8JsonSerializer::serialize(&mount).unwrap_err();
    assert_eq!(err.missing_field(), Some("Focal"));

    let err = Utf8JsonSerializer::deserialize::<Mount>(br#"{"Lens":{}}"#).unwrap_err();
    assert_eq!(err.missing_field(), Some("Focal"));
    assert_eq!(err.boundary(), Some(Boundary::Inbound));
}

#[test]
fn test_unset_required_field_never_serializes_as_null() {
    // Bypasses validation entirely.
    let err = serde_json::to_string(&Lens::default()).unwrap_err();
    assert!(err.to_string().contains("required field holds no value"));

    assert_eq!(serde_json::to_string(&lens(2.8)).unwrap(), r#"{"Focal":2.8}"#);
}

#[test]
fn test_field_lookup_by_wire_name() {
    let token = Camera::field("Token").unwrap();
    assert_eq!(token.requirement, Requirement::Required);
    assert!(token.is_required());

    let name = Camera::field("Name").unwrap();
    assert_eq!(name.requirement, Requirement::Optional);
    assert!(!name.is_missing_from(&Camera::default()));

    // Wire names are case-sensitive.
    assert!(Camera::field("token").is_none());
}

#[test]
fn test_empty_json_has_no_fields() {
    assert!(EmptyJson::FIELDS.is_empty());
    assert!(EmptyJson {}.validate(Boundary::Inbound).is_ok());
}

#[test]
fn test_required_presence_helpers() {
    let mut token: Required<String> = Required::default();
    assert!(!token.is_present());
    assert_eq!(token.get(), None);

    token.set("a".to_string());
    assert!(token.is_present());
    assert_eq!(token.get().map(String::as_str), Some("a"));

    if let Some(value) = token.get_mut() {
        value.push('b');
    }
    assert_eq!(token.take().as_deref(), Some("ab"));
    assert!(!token.is_present());

    let from_value: Required<u8> = 7.into();
    let from_none: Required<u8> = None.into();
    assert_eq!(from_value.into_option(), Some(7));
    assert_eq!(from_none.into_option(), None);
}

#[test]
fn test_error_display_mentions_field_and_boundary() {
    let err = PayloadError::RequiredFieldMissing {
        field: "GetStatusResponse",
        boundary: Boundary::Inbound,
    };

    assert_eq!(
        err.to_string(),
        "required field `GetStatusResponse` is missing after deserialization"
    );
    assert_eq!(err.boundary(), Some(Boundary::Inbound));
}
