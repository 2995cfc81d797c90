//! Typed role policy.
//!
//! The access rules are a fixed table over the closed [`Role`] and [`Action`]
//! sets, checked once per endpoint before any read or mutation.

use thiserror::Error;

use crate::Role;

/// Every role-gated operation exposed by the API.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    CategoryRead,
    /// Create or update a category.
    CategoryWrite,
    CategoryDelete,
    ProductRead,
    /// Create or update a product.
    ProductWrite,
    ProductDelete,
    DashboardView,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthzError {
    #[error("role '{0}' may not perform this action")]
    Forbidden(Role),
}

impl Role {
    /// The full permission table.
    pub fn permits(self, action: Action) -> bool {
        use Action::*;
        match action {
            CategoryRead | ProductRead => true,
            CategoryWrite | CategoryDelete | ProductDelete => self == Role::Admin,
            ProductWrite | DashboardView => matches!(self, Role::Admin | Role::Manager),
        }
    }
}

/// Authorize a role for an action.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
pub fn authorize(role: Role, action: Action) -> Result<(), AuthzError> {
    if role.permits(action) {
        Ok(())
    } else {
        Err(AuthzError::Forbidden(role))
    }
}
