//! Domain entities
//!
//! Pure domain models. Both are small values: issues exist only for the
//! duration of a listing, providers are picked once per invocation.

pub mod issue;
pub mod provider;

pub use issue::Issue;
pub use provider::Provider;
