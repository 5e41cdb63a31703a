//! ClauseLens Schema - typed validation at reasoning-call boundaries
//!
//! A [`SchemaContract`] pairs a Rust type with its compiled JSON schema.
//! Every external capability declares one contract per side of the call;
//! the invoker checks the input contract before issuing a call and the
//! output contract before surfacing the reply.

#![warn(unreachable_pub)]

pub mod contract;
pub mod error;

// Re-exports for convenience
pub use contract::SchemaContract;
pub use error::{Boundary, ContractError, ContractViolation};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
