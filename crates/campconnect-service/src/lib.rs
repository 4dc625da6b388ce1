//! CampConnect Service — registration and administration workflows.
//!
//! This crate layers the domain workflows over the persistence seam:
//!
//! - [`RegistrationService`] accepts school-submitted registration batches
//!   against a camp's capacity and exposes the browse/report read paths.
//! - [`AdminService`] manages camps and school user accounts: CRUD, status
//!   transitions, password-reset delegation, and CSV bulk import.
//! - [`NotificationGenerator`] is the seam to the external announcement
//!   generator; its failures never fail a camp save.
//! - [`ServiceConfig`] is the TOML-backed runtime configuration.
//!
//! All fallible paths return [`campconnect_core::Result`]; user-facing
//! failures carry actionable detail (see
//! [`Error::is_user_error`](campconnect_core::Error::is_user_error)).

pub mod admin;
pub mod config;
pub mod notify;
pub mod registration;

pub use admin::{
    AdminService, BulkImportReport, CampSaveOutcome, CredentialDirectory, MockCredentialDirectory,
    RowSkip,
};
pub use config::{NotificationConfig, ServiceConfig};
pub use notify::{
    HttpNotificationGenerator, MockNotificationGenerator, NotificationEmail, NotificationGenerator,
    NotificationRequest,
};
pub use registration::{CampOverview, CampTally, RegistrationService, SchoolTally};
