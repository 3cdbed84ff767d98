/// Declares the single-field envelope that wraps a command's request or
/// response object under its wire key, e.g. `{"GetStatus": {...}}`.
///
/// The wrapped object is required: an envelope without it fails validation
/// on both sides of the wire, and so does one whose object (or anything
/// nested in it) is missing a required field.
macro_rules! command_payload {
    (
        $(#[$meta:meta])*
        $name:ident { $wire:literal => $field:ident : $inner:ty }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            #[serde(rename = $wire, default)]
            pub $field: ::cmdwire::Required<$inner>,
        }

        impl $name {
            pub fn new(value: $inner) -> Self {
                Self {
                    $field: ::cmdwire::Required::new(value),
                }
            }

            /// Unwraps an envelope that was decoded off the wire. Fails only
            /// if the payload was built without its object and never
            /// validated.
            pub fn into_inner(self) -> Result<$inner, ::cmdwire::PayloadError> {
                self.into_inner_at(::cmdwire::Boundary::Inbound)
            }

            /// Unwraps the envelope, reporting a missing object at
            /// `boundary`.
            pub fn into_inner_at(
                self,
                boundary: ::cmdwire::Boundary,
            ) -> Result<$inner, ::cmdwire::PayloadError> {
                self.$field
                    .into_option()
                    .ok_or(::cmdwire::PayloadError::RequiredFieldMissing {
                        field: $wire,
                        boundary,
                    })
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                Self::new(value)
            }
        }

        impl ::cmdwire::Payload for $name {
            const FIELDS: &'static [::cmdwire::FieldSpec<Self>] =
                &[::cmdwire::FieldSpec::required($wire, |p: &Self| p.$field.is_present())];

            fn validate_nested(
                &self,
                boundary: ::cmdwire::Boundary,
            ) -> Result<(), ::cmdwire::PayloadError> {
                ::cmdwire::validate_each(self.$field.get(), boundary)
            }
        }
    };
}

/// Binds a command name to its payload types over UTF-8 JSON.
macro_rules! json_command {
    (
        $(#[$meta:meta])*
        $binding:ident, $command_name:literal, $request:ty => $response:ty
    ) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, Default)]
        pub struct $binding;

        impl ::cmdwire_service::CommandBinding for $binding {
            const COMMAND_NAME: &'static str = $command_name;

            type Request = $request;
            type Response = $response;
            type Serializer = ::cmdwire::Utf8JsonSerializer;
        }
    };
}

pub(crate) use {command_payload, json_command};
