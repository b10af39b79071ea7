//! Validation trait: on-demand self checks for domain records.

use crate::error::DomainResult;

/// A record that can check its own invariants.
///
/// Validation is performed at the boundary where a record is accepted (e.g.
/// registration), not continuously. Implementations must not mutate state;
/// they either succeed or return the first violated rule.
pub trait Validate {
    fn validate(&self) -> DomainResult<()>;
}
