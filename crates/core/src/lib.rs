//! `productsapp-core` — shared domain building blocks.
//!
//! Pure domain primitives only: the error model and the validation seam used
//! by registry entries.

pub mod error;
pub mod validate;

pub use error::{DomainError, DomainResult};
pub use validate::Validate;
