//! Error types for the CampConnect core library.

/// Errors that can occur across the CampConnect services.
///
/// All variants carry a human-readable message; none are process-fatal.
/// The enum is `#[non_exhaustive]` so new variants can be added without
/// breaking downstream crates.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The referenced camp id has no record.
    #[error("camp not found: {id}")]
    CampNotFound {
        /// The camp id that could not be resolved.
        id: String,
    },

    /// The camp has already started or ended; no new registrations.
    #[error("registration closed: {message}")]
    RegistrationClosed {
        /// Why the window is closed (started vs. concluded).
        message: String,
    },

    /// The submitted batch does not fit in the camp's remaining capacity.
    ///
    /// Carries the exact number of remaining slots so the caller can retry
    /// with a reduced list. Admission is all-or-nothing: no partial batch
    /// is ever committed.
    #[error("capacity exceeded: requested {requested} seats but only {remaining} remain")]
    CapacityExceeded {
        /// Number of students in the rejected submission.
        requested: u32,
        /// Slots still available on the camp.
        remaining: u32,
    },

    /// The student payload is malformed or incomplete.
    #[error("invalid student data: {message}")]
    InvalidStudentData {
        /// What is wrong with the payload.
        message: String,
    },

    /// The submitting school's identity could not be resolved from the
    /// caller's session.
    #[error("submitting school could not be identified")]
    SchoolNotIdentified,

    /// The referenced school user id has no record.
    #[error("school user not found: {id}")]
    SchoolNotFound {
        /// The school id that could not be resolved.
        id: String,
    },

    /// Field-level constraint violation on Camp/SchoolUser input.
    #[error("validation error: {message}")]
    Validation {
        /// Field that failed validation, when attributable.
        field: Option<String>,
        /// What went wrong.
        message: String,
    },

    /// Backing persistence failure. Logged, surfaced as a generic failure,
    /// never silently swallowed.
    #[error("storage error: {message}")]
    Store {
        /// Description of the store failure.
        message: String,
    },

    /// Configuration error.
    #[error("configuration error: {message}")]
    Config {
        /// What configuration is problematic.
        message: String,
    },

    /// Notification dispatcher failure. Callers treat this as advisory:
    /// camp saves succeed regardless.
    #[error("notification error: {message}")]
    Notification {
        /// Description of the dispatcher failure.
        message: String,
    },
}

/// Convenience `Result` type alias for CampConnect operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether this error is caller-fixable (as opposed to an
    /// infrastructure failure).
    ///
    /// User errors carry enough detail for the caller to act on, e.g.
    /// [`Error::CapacityExceeded`] reports the remaining slot count.
    pub fn is_user_error(&self) -> bool {
        match self {
            Error::CampNotFound { .. } => true,
            Error::RegistrationClosed { .. } => true,
            Error::CapacityExceeded { .. } => true,
            Error::InvalidStudentData { .. } => true,
            Error::SchoolNotIdentified => true,
            Error::SchoolNotFound { .. } => true,
            Error::Validation { .. } => true,
            Error::Store { .. } => false,
            Error::Config { .. } => false,
            Error::Notification { .. } => false,
        }
    }

    /// Creates a camp-not-found error.
    pub fn camp_not_found(id: impl ToString) -> Self {
        Error::CampNotFound { id: id.to_string() }
    }

    /// Creates a school-not-found error.
    pub fn school_not_found(id: impl ToString) -> Self {
        Error::SchoolNotFound { id: id.to_string() }
    }

    /// Creates a registration-closed error.
    pub fn registration_closed<S: Into<String>>(message: S) -> Self {
        Error::RegistrationClosed {
            message: message.into(),
        }
    }

    /// Creates an invalid-student-data error.
    pub fn invalid_student<S: Into<String>>(message: S) -> Self {
        Error::InvalidStudentData {
            message: message.into(),
        }
    }

    /// Creates a validation error without a field attribution.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a validation error attributed to a field.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Creates a storage error.
    pub fn store<S: Into<String>>(message: S) -> Self {
        Error::Store {
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a notification dispatcher error.
    pub fn notification<S: Into<String>>(message: S) -> Self {
        Error::Notification {
            message: message.into(),
        }
    }
}
