//! Registration payloads shared by the JSON API and the HTML form.
//!
//! Fields are optional at the decoding layer so that an absent field becomes
//! a `missing` validation failure alongside any other rejected field, rather
//! than an opaque decode error.

use serde::{Deserialize, Serialize};

use crate::domain::{NormalizedUser, RegistrationValidator, ValidationErrors};

/// Registration submission as decoded from JSON or a urlencoded form.
///
/// Example JSON:
/// `{"phone_number":"010-1234-5678","name":"홍길동"}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
pub struct RegistrationPayload {
    /// Phone number used as the user identifier; hyphens optional.
    #[schema(example = "010-1234-5678", pattern = r"^\d{2,4}-?\d{3,4}-?\d{4}$")]
    #[serde(default)]
    pub phone_number: Option<String>,
    /// User name, 2 to 50 characters.
    #[schema(example = "홍길동", min_length = 2, max_length = 50)]
    #[serde(default)]
    pub name: Option<String>,
}

impl RegistrationPayload {
    /// Build a payload with both fields present.
    pub fn new(phone_number: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            phone_number: Some(phone_number.into()),
            name: Some(name.into()),
        }
    }

    /// Run the registration rules over the submitted fields.
    ///
    /// # Errors
    /// Returns every rejected field, `phone_number` first.
    pub fn validate(
        &self,
        validator: &RegistrationValidator,
    ) -> Result<NormalizedUser, ValidationErrors> {
        validator.validate_fields(self.phone_number.as_deref(), self.name.as_deref())
    }
}
