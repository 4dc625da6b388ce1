//! CampConnect Store — the entity persistence seam.
//!
//! This crate defines the [`EntityStore`] trait that the registration and
//! administration services persist through, plus [`MemoryStore`], the
//! in-memory transactional reference backend.
//!
//! The core does not prescribe a storage technology: any backend offering a
//! per-camp transactional read-modify-write for the registration aggregate
//! can implement [`EntityStore`]. The in-memory backend exists so tests and
//! demos run against exactly the interface production storage would sit
//! behind, never against ad hoc global state.

pub mod memory;
pub mod store;

pub use memory::MemoryStore;
pub use store::EntityStore;
