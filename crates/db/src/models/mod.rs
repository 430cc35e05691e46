//! Row models and DTOs, one module per table.

pub mod category;
pub mod note;
pub mod stats;
