//! CampConnect Core — shared types, status resolution, validation, errors.
//!
//! This crate provides the foundational types used across all CampConnect
//! crates. It has no internal CampConnect dependencies (dependency level 0)
//! and no async code: everything here is a pure data contract.
//!
//! # Modules
//!
//! - [`error`]: Error taxonomy and Result alias
//! - [`types`]: Camp, SchoolUser, Registration records and their drafts
//! - [`status`]: The camp status resolver (pure function of dates and "now")
//! - [`validation`]: Field-level validation shared by admin and registration

pub mod error;
pub mod status;
pub mod types;
pub mod validation;

mod proptests;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use status::{CampStatus, resolve_status};
pub use types::ids::{CampId, RegistrationId, SchoolId};
pub use types::{
    Camp, CampDraft, Registration, SchoolIdentity, SchoolStatus, SchoolUser, SchoolUserDraft,
    Student,
};
