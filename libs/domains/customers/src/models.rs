use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

pub const NAME_MIN_LEN: usize = 3;
pub const NAME_MAX_LEN: usize = 100;
pub const PHONE_MIN_LEN: usize = 8;
pub const PHONE_MAX_LEN: usize = 15;

/// A stored customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    /// Identifier assigned by the store
    pub id: u32,
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "5551234567")]
    pub phone: Option<String>,
    pub address: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Build a customer from client input with store-assigned fields.
    pub fn from_input(id: u32, input: CustomerInput, now: DateTime<Utc>) -> Self {
        let input = input.normalized();
        Self {
            id,
            name: input.name,
            email: input.email,
            phone: input.phone,
            address: input.address,
            active: input.active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every client-controlled field, keeping `id` and `created_at`.
    pub fn apply(&mut self, input: CustomerInput, now: DateTime<Utc>) {
        let input = input.normalized();
        self.name = input.name;
        self.email = input.email;
        self.phone = input.phone;
        self.address = input.address;
        self.active = input.active;
        self.updated_at = now;
    }
}

/// Request body for create and update.
///
/// Only the client-controlled fields are read. `id`, `created_at` and
/// `updated_at` in a body are ignored; the path id and the store win.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CustomerInput {
    /// 3 to 100 characters
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schema(example = "Jane Doe")]
    pub name: String,
    /// Required, must be a valid address
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schema(example = "jane@example.com")]
    pub email: String,
    /// 8 to 15 characters when present
    #[serde(default)]
    #[schema(example = "5551234567")]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_active")]
    #[schema(default = true)]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// `null` reads as an empty string, which validation then rejects.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl CustomerInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: None,
            address: None,
            active: true,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Empty phone strings are stored as absent.
    pub fn normalized(mut self) -> Self {
        if self.phone.as_deref().is_some_and(str::is_empty) {
            self.phone = None;
        }
        self
    }
}

impl Validate for CustomerInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name_len = self.name.chars().count();
        if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&name_len) {
            errors.add("name", length_error(NAME_MIN_LEN, NAME_MAX_LEN));
        }

        if self.email.is_empty() {
            let mut err = ValidationError::new("required");
            err.message = Some(Cow::Borrowed("email is required"));
            errors.add("email", err);
        } else if !self.email.validate_email() {
            let mut err = ValidationError::new("email");
            err.message = Some(Cow::Borrowed("email is not a valid address"));
            errors.add("email", err);
        }

        if let Some(phone) = self.phone.as_deref().filter(|p| !p.is_empty()) {
            let phone_len = phone.chars().count();
            if !(PHONE_MIN_LEN..=PHONE_MAX_LEN).contains(&phone_len) {
                errors.add("phone", length_error(PHONE_MIN_LEN, PHONE_MAX_LEN));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn length_error(min: usize, max: usize) -> ValidationError {
    let mut err = ValidationError::new("length");
    err.add_param(Cow::Borrowed("min"), &min);
    err.add_param(Cow::Borrowed("max"), &max);
    err.message = Some(Cow::Owned(format!(
        "must be between {min} and {max} characters"
    )));
    err
}

/// Query string of `GET /customers/search`
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive substring of the customer name
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CountResponse {
    pub count: u64,
}
