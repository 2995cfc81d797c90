//! Input validation for registration and login.
//!
//! Every rule is checked and every failure recorded, so a 422 response can
//! report all offending fields at once.

use std::sync::OnceLock;

use regex::Regex;

use stockroom_core::{DomainResult, FieldErrors};

use crate::Role;

const NAME_MIN: usize = 3;
const NAME_MAX: usize = 255;
const PASSWORD_MIN: usize = 6;

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z\s]+$").expect("valid name pattern"))
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern"))
}

/// Raw registration fields as presented by the client.
#[derive(Debug, Default, Clone)]
pub struct RegistrationInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password_confirmation: Option<String>,
    pub role: Option<String>,
}

/// Validated registration data.
///
/// Uniqueness of the email is a store concern and checked separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl RegistrationInput {
    pub fn validate(self) -> DomainResult<Registration> {
        let mut errors = FieldErrors::new();

        let name = non_empty(self.name);
        match &name {
            None => errors.push("name", "The name field is required."),
            Some(name) => {
                if !name_pattern().is_match(name) {
                    errors.push("name", "The name may only contain letters and spaces.");
                }
                if name.chars().count() < NAME_MIN {
                    errors.push("name", "The name must be at least 3 characters.");
                }
                if name.chars().count() > NAME_MAX {
                    errors.push("name", "The name may not be greater than 255 characters.");
                }
            }
        }

        let email = non_empty(self.email);
        match &email {
            None => errors.push("email", "The email field is required."),
            Some(email) => {
                if !email_pattern().is_match(email) {
                    errors.push("email", "The email must be a valid email address.");
                }
            }
        }

        let password = non_empty(self.password);
        match &password {
            None => errors.push("password", "The password field is required."),
            Some(password) => {
                if password.chars().count() < PASSWORD_MIN {
                    errors.push("password", "The password must be at least 6 characters.");
                }
                if self.password_confirmation.as_deref() != Some(password.as_str()) {
                    errors.push("password", "The password confirmation does not match.");
                }
            }
        }

        let role = match non_empty(self.role) {
            None => {
                errors.push("role", "The role field is required.");
                None
            }
            Some(raw) => match raw.parse::<Role>() {
                Ok(role) => Some(role),
                Err(_) => {
                    errors.push("role", "The selected role is invalid.");
                    None
                }
            },
        };

        errors.finish()?;

        // All fields present and valid past this point.
        Ok(Registration {
            name: name.expect("validated"),
            email: email.expect("validated"),
            password: password.expect("validated"),
            role: role.expect("validated"),
        })
    }
}

/// Raw login fields as presented by the client.
#[derive(Debug, Default, Clone)]
pub struct LoginInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Validated login data (credentials still unchecked).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Login {
    pub email: String,
    pub password: String,
}

impl LoginInput {
    pub fn validate(self) -> DomainResult<Login> {
        let mut errors = FieldErrors::new();

        let email = non_empty(self.email);
        match &email {
            None => errors.push("email", "The email field is required."),
            Some(email) => {
                if !email_pattern().is_match(email) {
                    errors.push("email", "The email must be a valid email address.");
                }
            }
        }

        let password = non_empty(self.password);
        if password.is_none() {
            errors.push("password", "The password field is required.");
        }

        errors.finish()?;

        Ok(Login {
            email: email.expect("validated"),
            password: password.expect("validated"),
        })
    }
}

/// Treat missing and empty strings alike, as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
