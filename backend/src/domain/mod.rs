//! Domain primitives for practice-range registration.
//!
//! Purpose: hold the validation rules and the transport-agnostic error
//! envelope. Nothing here depends on Actix; inbound adapters translate these
//! types into HTTP responses.
//!
//! Public surface:
//! - `RegistrationValidator` / `RegistrationRules`: compiled rule table.
//! - `NormalizedUser`: validated registration with a digits-only phone.
//! - `ValidationError` / `ValidationErrors`: rejected fields.
//! - `Error` / `ErrorCode`: error envelope returned to clients.
//! - `TraceId`: request correlation identifier.

pub mod error;
pub mod registration;
pub mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::registration::{
    DEFAULT_PHONE_PATTERN, Field, NAME_MAX_LENGTH, NAME_MIN_LENGTH, NormalizedUser, Reason,
    RegistrationRules, RegistrationValidator, RulesError, ValidationError, ValidationErrors,
    normalize_phone_number,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
