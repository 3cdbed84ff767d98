//! Typed command payloads with required-field validation at the wire boundary.
//!
//! A [`Payload`] declares its fields once, as a table of
//! (wire name, requirement, accessor) rows. A [`PayloadSerializer`] checks
//! that table, and the tables of every payload nested inside, before every
//! encode and after every decode, so a payload with an unset [`Required`]
//! field at any depth never leaves or enters the process.

pub mod codec;
pub mod constants;
pub mod error;
pub mod payload;
pub mod utils;

pub use codec::{PayloadSerializer, Utf8JsonSerializer};
pub use error::PayloadError;
pub use payload::{Boundary, EmptyJson, FieldSpec, Payload, Requirement, Required, validate_each};
