//! Verification side of the external identity provider.
//!
//! The provider mints bearer JWTs; this service only validates them and
//! extracts the actor id. Registration, login and token issuance live
//! outside this codebase.

mod claims;
pub mod jwt;

pub use jwt::AuthUser;
