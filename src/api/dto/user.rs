//! DTOs for user endpoints.

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::{NewUser, UserPatch};

/// Body of `POST /users`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "first_name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "last_name is required"))]
    pub last_name: String,

    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,

    #[serde(default)]
    pub is_admin: bool,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            is_admin: req.is_admin,
        }
    }
}

/// Body of `PUT /users/{id}`. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub is_admin: Option<bool>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            is_admin: req.is_admin,
        }
    }
}
