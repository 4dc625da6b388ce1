//! Domain records and their input drafts.

pub mod camp;
pub mod ids;
pub mod registration;
pub mod school;

pub use camp::{Camp, CampDraft};
pub use registration::{Registration, SchoolIdentity, Student};
pub use school::{SchoolStatus, SchoolUser, SchoolUserDraft};
