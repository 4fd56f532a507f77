use serde::Deserialize;

use evently_core::DomainResult;
use evently_infra::{NewEvent, NewUser};

// -------------------------
// Request DTOs
// -------------------------
//
// Every field is optional at the JSON layer so that an absent field surfaces
// as "Missing fields" (400) rather than a deserialization failure.

/// Body of `POST /api/auth/signup` and `POST /api/users`.
#[derive(Debug, Default, Deserialize)]
pub struct NewUserRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl NewUserRequest {
    pub fn validate(self) -> DomainResult<NewUser> {
        NewUser::validate(self.email, self.password, self.role)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NewEventRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl NewEventRequest {
    pub fn validate(self) -> DomainResult<NewEvent> {
        NewEvent::validate(self.title, self.description, self.image)
    }
}
