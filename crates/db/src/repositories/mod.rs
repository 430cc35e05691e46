//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&DbPool` as the first argument.

pub mod category_repo;
pub mod note_repo;
pub mod stats_repo;

pub use category_repo::CategoryRepo;
pub use note_repo::NoteRepo;
pub use stats_repo::StatsRepo;
