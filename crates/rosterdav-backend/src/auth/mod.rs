//! Identity resolution and credential verification.

pub mod context;
pub mod identity;
pub mod password;

pub use context::RequestContext;
pub use password::{Argon2Verifier, SecretVerifier};
