//! Category record and validated input.

use chrono::{DateTime, Utc};

use stockroom_core::{CategoryId, DomainResult, FieldErrors};

use crate::EntityStatus;

const NAME_MAX: usize = 255;

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub status: EntityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw category fields as presented by the client.
#[derive(Debug, Default, Clone)]
pub struct CategoryInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

/// Validated category fields, ready to persist (create or full replace).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
    pub description: Option<String>,
    pub status: EntityStatus,
}

impl CategoryInput {
    /// Validate every field, collecting per-field messages.
    pub fn validate(self) -> DomainResult<CategoryDraft> {
        let mut errors = FieldErrors::new();

        let name = self.name.filter(|n| !n.is_empty());
        match &name {
            None => errors.push("name", "The name field is required."),
            Some(name) => {
                if name.chars().count() > NAME_MAX {
                    errors.push("name", "The name may not be greater than 255 characters.");
                }
            }
        }

        let status = match self.status.filter(|s| !s.is_empty()) {
            None => {
                errors.push("status", "The status field is required.");
                None
            }
            Some(raw) => match raw.parse::<EntityStatus>() {
                Ok(status) => Some(status),
                Err(()) => {
                    errors.push("status", "The selected status is invalid.");
                    None
                }
            },
        };

        errors.finish()?;

        Ok(CategoryDraft {
            name: name.expect("validated"),
            description: self.description.filter(|d| !d.is_empty()),
            status: status.expect("validated"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::DomainError;

    #[test]
    fn accepts_minimal_valid_input() {
        let draft = CategoryInput {
            name: Some("Electronics".to_string()),
            description: None,
            status: Some("active".to_string()),
        }
        .validate()
        .unwrap();
        assert_eq!(draft.name, "Electronics");
        assert_eq!(draft.status, EntityStatus::Active);
        assert!(draft.description.is_none());
    }

    #[test]
    fn requires_name_and_status() {
        match CategoryInput::default().validate().unwrap_err() {
            DomainError::Validation(errors) => {
                assert!(errors.get("name").is_some());
                assert!(errors.get("status").is_some());
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn rejects_overlong_names() {
        let result = CategoryInput {
            name: Some("x".repeat(256)),
            description: None,
            status: Some("inactive".to_string()),
        }
        .validate();
        match result.unwrap_err() {
            DomainError::Validation(errors) => {
                assert_eq!(
                    errors.get("name").unwrap(),
                    &["The name may not be greater than 255 characters.".to_string()]
                );
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_status() {
        let result = CategoryInput {
            name: Some("Electronics".to_string()),
            description: None,
            status: Some("archived".to_string()),
        }
        .validate();
        match result.unwrap_err() {
            DomainError::Validation(errors) => {
                assert!(errors.get("status").is_some());
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
