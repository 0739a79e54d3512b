//! Domains module containing business logic organized by bounded contexts.
//!
//! The tools domain is the only bounded context of this server: every piece
//! of business logic is a callable tool.

pub mod tools;
