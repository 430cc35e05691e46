//! Domain core for the knowledge base service.
//!
//! Pure types and logic with no database or HTTP dependencies, so the
//! repository layer, the API layer, and any future CLI tooling can all
//! share them.

pub mod error;
pub mod notes;
pub mod search;
pub mod summary;
pub mod types;
