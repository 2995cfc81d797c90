//! `stockroom-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage.

pub mod password;
pub mod policy;
pub mod role;
pub mod token;
pub mod user;
pub mod validate;

pub use policy::{Action, AuthzError, authorize};
pub use role::Role;
pub use token::IssuedToken;
pub use user::User;
pub use validate::{Login, LoginInput, Registration, RegistrationInput};
