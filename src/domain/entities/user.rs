//! User entity.

use serde::Serialize;
use serde_json::{Value, json};

use super::{Entity, Metadata};
use crate::domain::validation::{self, ValidationResult};

/// A registered user.
///
/// Names must be non-blank and at most 50 characters. The email must have a
/// dotted domain after its `@`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    #[serde(flatten)]
    meta: Metadata,
    first_name: String,
    last_name: String,
    email: String,
    is_admin: bool,
}

impl User {
    /// Validates the input and assigns a new identity.
    pub fn new(input: NewUser) -> ValidationResult<Self> {
        let user = Self {
            meta: Metadata::new(),
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            is_admin: input.is_admin,
        };
        user.validate()?;
        Ok(user)
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Applies a partial update. On error the user is left unchanged.
    pub fn apply(&mut self, patch: UserPatch) -> ValidationResult {
        let mut candidate = self.clone();
        if let Some(first_name) = patch.first_name {
            candidate.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            candidate.last_name = last_name;
        }
        if let Some(email) = patch.email {
            candidate.email = email;
        }
        if let Some(is_admin) = patch.is_admin {
            candidate.is_admin = is_admin;
        }
        candidate.validate()?;
        candidate.meta.touch();
        *self = candidate;
        Ok(())
    }

    fn validate(&self) -> ValidationResult {
        validation::not_blank("first_name", &self.first_name, "First name")?;
        validation::not_blank("last_name", &self.last_name, "Last name")?;
        validation::max_chars("first_name", &self.first_name, 50, "First name")?;
        validation::max_chars("last_name", &self.last_name, 50, "Last name")?;
        validation::email(&self.email)
    }
}

impl Entity for User {
    const KIND: &'static str = "User";

    fn metadata(&self) -> &Metadata {
        &self.meta
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "first_name" => Some(json!(self.first_name)),
            "last_name" => Some(json!(self.last_name)),
            "email" => Some(json!(self.email)),
            "is_admin" => Some(json!(self.is_admin)),
            _ => self.meta.attribute(name),
        }
    }
}

/// Input data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_admin: bool,
}

/// Partial update for an existing user. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub is_admin: Option<bool>,
}
