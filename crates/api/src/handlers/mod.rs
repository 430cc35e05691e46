//! HTTP request handlers, one module per resource.

pub mod categories;
pub mod notes;
pub mod search;
pub mod stats;
