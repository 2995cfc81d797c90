//! Request-scoped identity.

use stockroom_auth::{Role, User};
use stockroom_core::TokenId;

/// Identity resolved for the current request: the authenticated user plus the
/// id of the exact token that authenticated it (so logout revokes only that
/// one).
///
/// Inserted by the auth middleware and taken as an explicit input by every
/// protected handler.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    user: User,
    token_id: TokenId,
}

impl CurrentUser {
    pub fn new(user: User, token_id: TokenId) -> Self {
        Self { user, token_id }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn role(&self) -> Role {
        self.user.role
    }

    pub fn token_id(&self) -> TokenId {
        self.token_id
    }
}
