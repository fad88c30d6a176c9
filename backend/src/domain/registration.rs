//! Registration rules for new practice-range users.
//!
//! A [`RegistrationValidator`] is compiled once from [`RegistrationRules`] and
//! shared read-only by every request. Validation is pure: it never logs,
//! persists, or touches shared state.
//!
//! Fields are always checked in declaration order (`phone_number`, then
//! `name`). [`RegistrationValidator::validate_all`] keeps every failure for
//! API clients while [`RegistrationValidator::validate`] reports only the
//! first one, which is what the HTML form shows.

use std::fmt;

use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value, json};

use super::Error;

/// Default phone pattern: 2–4 digits, 3–4 digits, 4 digits, optional hyphens.
pub const DEFAULT_PHONE_PATTERN: &str = r"^\d{2,4}-?\d{3,4}-?\d{4}$";
/// Default minimum name length, in characters.
pub const NAME_MIN_LENGTH: usize = 2;
/// Default maximum name length, in characters.
pub const NAME_MAX_LENGTH: usize = 50;

/// Input field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// The submitted phone number.
    PhoneNumber,
    /// The submitted name.
    Name,
    /// The failure could not be attributed to a single field.
    Unknown,
}

impl Field {
    /// Wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PhoneNumber => "phone_number",
            Self::Name => "name",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// The value does not match the configured pattern.
    PatternMismatch,
    /// The value has fewer than `min` characters.
    TooShort {
        /// Minimum accepted length.
        min: usize,
    },
    /// The value has more than `max` characters.
    TooLong {
        /// Maximum accepted length.
        max: usize,
    },
    /// The field was absent from the submission.
    Missing,
    /// The submission could not be decoded at all.
    Malformed,
}

impl Reason {
    /// Stable machine-readable reason code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::PatternMismatch => "pattern_mismatch",
            Self::TooShort { .. } => "too_short",
            Self::TooLong { .. } => "too_long",
            Self::Missing => "missing",
            Self::Malformed => "malformed",
        }
    }
}

/// A single rejected field.
///
/// # Examples
/// ```
/// use range_registration::domain::{Field, Reason, ValidationError};
///
/// let err = ValidationError::new(Field::Name, Reason::TooShort { min: 2 });
/// assert_eq!(err.to_string(), "name must be at least 2 characters");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    field: Field,
    reason: Reason,
}

impl ValidationError {
    /// Build a failure for `field`.
    #[must_use]
    pub const fn new(field: Field, reason: Reason) -> Self {
        Self { field, reason }
    }

    /// Failure for a field that was not submitted.
    #[must_use]
    pub const fn missing(field: Field) -> Self {
        Self::new(field, Reason::Missing)
    }

    /// Failure for a submission that could not be decoded.
    #[must_use]
    pub const fn malformed() -> Self {
        Self::new(Field::Unknown, Reason::Malformed)
    }

    /// Field the failure refers to.
    #[must_use]
    pub const fn field(&self) -> Field {
        self.field
    }

    /// Why the field was rejected.
    #[must_use]
    pub const fn reason(&self) -> Reason {
        self.reason
    }

    /// Structured form used in error envelopes.
    ///
    /// Produces `{ "field", "type", "message" }` plus a `ctx` object carrying
    /// the violated length bound, when there is one.
    #[must_use]
    pub fn to_details(&self) -> Value {
        let mut entry = Map::new();
        entry.insert("field".to_owned(), json!(self.field.as_str()));
        entry.insert("type".to_owned(), json!(self.reason.code()));
        entry.insert("message".to_owned(), json!(self.to_string()));
        match self.reason {
            Reason::TooShort { min } => {
                entry.insert("ctx".to_owned(), json!({ "min_length": min }));
            }
            Reason::TooLong { max } => {
                entry.insert("ctx".to_owned(), json!({ "max_length": max }));
            }
            Reason::PatternMismatch | Reason::Missing | Reason::Malformed => {}
        }
        Value::Object(entry)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self.field;
        match self.reason {
            Reason::PatternMismatch => write!(f, "{field} does not match the expected format"),
            Reason::TooShort { min } => write!(f, "{field} must be at least {min} characters"),
            Reason::TooLong { max } => write!(f, "{field} must be at most {max} characters"),
            Reason::Missing => write!(f, "{field} is required"),
            Reason::Malformed => write!(f, "request body could not be decoded"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Every rejected field of one submission, in field order.
///
/// Stored as the first failure plus the rest, so the collection can never be
/// empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    first: ValidationError,
    rest: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Wrap a single failure.
    #[must_use]
    pub const fn single(error: ValidationError) -> Self {
        Self {
            first: error,
            rest: Vec::new(),
        }
    }

    /// Append a later failure.
    #[must_use]
    pub fn followed_by(mut self, error: ValidationError) -> Self {
        self.rest.push(error);
        self
    }

    /// The failure shown when only one can be displayed.
    #[must_use]
    pub const fn first(&self) -> &ValidationError {
        &self.first
    }

    /// Consume the collection, keeping the first failure.
    #[must_use]
    pub fn into_first(self) -> ValidationError {
        self.first
    }

    /// Iterate failures in field order.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        std::iter::once(&self.first).chain(self.rest.iter())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)?;
        for error in &self.rest {
            write!(f, "; {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationErrors> for Error {
    fn from(value: ValidationErrors) -> Self {
        let errors: Vec<Value> = value.iter().map(ValidationError::to_details).collect();
        Self::validation_failed("request validation failed")
            .with_details(json!({ "errors": errors }))
    }
}

/// A successfully validated registration.
///
/// ## Invariants
/// - `phone_number` holds digits only.
/// - `name` length lies within the configured bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUser {
    phone_number: String,
    name: String,
}

impl NormalizedUser {
    /// Phone number with separators removed.
    #[must_use]
    pub const fn phone_number(&self) -> &str {
        self.phone_number.as_str()
    }

    /// Name exactly as submitted.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Split into `(phone_number, name)`.
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.phone_number, self.name)
    }
}

/// Strip hyphen separators from a phone number.
///
/// Idempotent: a number without hyphens is returned unchanged.
///
/// # Examples
/// ```
/// use range_registration::domain::normalize_phone_number;
///
/// assert_eq!(normalize_phone_number("010-1234-5678"), "01012345678");
/// assert_eq!(normalize_phone_number("01012345678"), "01012345678");
/// ```
#[must_use]
pub fn normalize_phone_number(raw: &str) -> String {
    raw.replace('-', "")
}

/// Errors raised while compiling [`RegistrationRules`].
#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    /// The phone pattern is not a valid regular expression.
    #[error("invalid phone pattern '{pattern}': {source}")]
    InvalidPattern {
        /// Pattern as configured.
        pattern: String,
        /// Underlying regex compilation failure.
        #[source]
        source: regex::Error,
    },
    /// The minimum name length exceeds the maximum.
    #[error("name length bounds are inverted: min {min} > max {max}")]
    InvertedNameBounds {
        /// Configured minimum.
        min: usize,
        /// Configured maximum.
        max: usize,
    },
}

/// Declarative rule table for registration input.
///
/// # Examples
/// ```
/// use range_registration::domain::RegistrationRules;
///
/// let validator = RegistrationRules::default()
///     .with_name_bounds(1, 10)
///     .compile()
///     .expect("rules compile");
/// assert!(validator.validate("02-123-4567", "K").is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRules {
    phone_pattern: String,
    name_min_length: usize,
    name_max_length: usize,
}

impl Default for RegistrationRules {
    fn default() -> Self {
        Self {
            phone_pattern: DEFAULT_PHONE_PATTERN.to_owned(),
            name_min_length: NAME_MIN_LENGTH,
            name_max_length: NAME_MAX_LENGTH,
        }
    }
}

impl RegistrationRules {
    /// Replace the phone pattern.
    #[must_use]
    pub fn with_phone_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.phone_pattern = pattern.into();
        self
    }

    /// Replace the inclusive name length bounds.
    #[must_use]
    pub const fn with_name_bounds(mut self, min: usize, max: usize) -> Self {
        self.name_min_length = min;
        self.name_max_length = max;
        self
    }

    /// Configured phone pattern.
    #[must_use]
    pub const fn phone_pattern(&self) -> &str {
        self.phone_pattern.as_str()
    }

    /// Compile the rules into a reusable validator.
    ///
    /// Character classes keep their Unicode meaning, so `\d` accepts any
    /// decimal digit and `.` matches a whole character.
    ///
    /// # Errors
    /// Returns [`RulesError`] for an invalid pattern or inverted bounds.
    pub fn compile(self) -> Result<RegistrationValidator, RulesError> {
        let Self {
            phone_pattern,
            name_min_length,
            name_max_length,
        } = self;

        if name_min_length > name_max_length {
            return Err(RulesError::InvertedNameBounds {
                min: name_min_length,
                max: name_max_length,
            });
        }

        let compiled = Regex::new(&phone_pattern).map_err(|source| RulesError::InvalidPattern {
                pattern: phone_pattern.clone(),
                source,
            })?;

        Ok(RegistrationValidator {
            phone_pattern: compiled,
            name_min_length,
            name_max_length,
        })
    }
}

/// Compiled registration rules.
#[derive(Debug, Clone)]
pub struct RegistrationValidator {
    phone_pattern: Regex,
    name_min_length: usize,
    name_max_length: usize,
}

impl RegistrationValidator {
    /// Minimum accepted name length.
    #[must_use]
    pub const fn name_min_length(&self) -> usize {
        self.name_min_length
    }

    /// Maximum accepted name length.
    #[must_use]
    pub const fn name_max_length(&self) -> usize {
        self.name_max_length
    }

    /// Check a raw phone number and return its normalized form.
    ///
    /// # Errors
    /// Fails with [`Reason::PatternMismatch`] when the pattern does not match.
    pub fn check_phone_number(&self, raw: &str) -> Result<String, ValidationError> {
        if self.phone_pattern.is_match(raw) {
            Ok(normalize_phone_number(raw))
        } else {
            Err(ValidationError::new(
                Field::PhoneNumber,
                Reason::PatternMismatch,
            ))
        }
    }

    /// Check a raw name. Length is counted in characters, without trimming.
    ///
    /// # Errors
    /// Fails with [`Reason::TooShort`] or [`Reason::TooLong`].
    pub fn check_name(&self, raw: &str) -> Result<String, ValidationError> {
        let length = raw.chars().count();
        if length < self.name_min_length {
            return Err(ValidationError::new(
                Field::Name,
                Reason::TooShort {
                    min: self.name_min_length,
                },
            ));
        }
        if length > self.name_max_length {
            return Err(ValidationError::new(
                Field::Name,
                Reason::TooLong {
                    max: self.name_max_length,
                },
            ));
        }
        Ok(raw.to_owned())
    }

    /// Validate raw input, reporting only the first failure.
    ///
    /// # Examples
    /// ```
    /// use range_registration::domain::{Field, RegistrationRules};
    ///
    /// let validator = RegistrationRules::default().compile().expect("rules compile");
    /// let user = validator.validate("010-1234-5678", "홍길동").expect("valid input");
    /// assert_eq!(user.phone_number(), "01012345678");
    ///
    /// let err = validator.validate("010-1234-567", "Alice").unwrap_err();
    /// assert_eq!(err.field(), Field::PhoneNumber);
    /// ```
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] in field order.
    pub fn validate(
        &self,
        phone_number: &str,
        name: &str,
    ) -> Result<NormalizedUser, ValidationError> {
        self.validate_all(phone_number, name)
            .map_err(ValidationErrors::into_first)
    }

    /// Validate raw input, collecting every failure.
    ///
    /// # Errors
    /// Returns all failures, `phone_number` before `name`.
    pub fn validate_all(
        &self,
        phone_number: &str,
        name: &str,
    ) -> Result<NormalizedUser, ValidationErrors> {
        self.validate_fields(Some(phone_number), Some(name))
    }

    /// Validate input where fields may be absent.
    ///
    /// An absent field is reported as [`Reason::Missing`] in its usual slot.
    ///
    /// # Errors
    /// Returns all failures in field order.
    pub fn validate_fields(
        &self,
        phone_number: Option<&str>,
        name: Option<&str>,
    ) -> Result<NormalizedUser, ValidationErrors> {
        let phone_result = phone_number
            .ok_or(ValidationError::missing(Field::PhoneNumber))
            .and_then(|raw| self.check_phone_number(raw));
        let name_result = name
            .ok_or(ValidationError::missing(Field::Name))
            .and_then(|raw| self.check_name(raw));

        match (phone_result, name_result) {
            (Ok(normalized_phone), Ok(checked_name)) => Ok(NormalizedUser {
                phone_number: normalized_phone,
                name: checked_name,
            }),
            (Err(phone_error), Err(name_error)) => {
                Err(ValidationErrors::single(phone_error).followed_by(name_error))
            }
            (Err(error), Ok(_)) | (Ok(_), Err(error)) => Err(ValidationErrors::single(error)),
        }
    }
}
