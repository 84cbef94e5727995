//! Common types and traits shared by all aggregates

pub mod aggregate_id;

pub use aggregate_id::{parse_opaque_id, AggregateId};
