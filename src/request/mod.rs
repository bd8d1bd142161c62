//! Request Module
//!
//! The single-row lookup request and its configuration surface.
//!
//! ## Responsibilities
//! - Hold every field either wire format needs
//! - Validate arguments at the setter, before any encoding happens
//! - Fix the lookup/existence kind at construction

mod filter;
mod get;
mod validate;

pub use filter::ScanFilter;
pub use get::{GetRequest, RequestKind};
pub use validate::{check_family, check_qualifier, MAX_FAMILY_LEN};
