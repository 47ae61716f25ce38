//! Typed view of the external membership database.
//!
//! The adapter never owns relational state. This crate describes the rows it
//! reads (`model`) and the query/visibility services it consumes (`store`);
//! the embedding application supplies the implementations.

pub mod error;
pub mod model;
pub mod store;
