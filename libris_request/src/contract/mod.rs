//! Form contracts for the catalog API.
//!
//! Contracts are bound from request bodies by the host framework and checked
//! through [`Validate`](crate::validate::Validate) before reaching handlers.

pub mod author;
pub mod genre;
