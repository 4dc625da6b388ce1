//! The notification generator seam.
//!
//! When an administrator publishes or edits a camp, an announcement email is
//! drafted for the schools in the camp's districts. The drafting itself is an
//! external collaborator behind [`NotificationGenerator`]; this module
//! carries the trait, the HTTP client implementation, and a mock for tests.
//!
//! Generation failure is advisory. [`AdminService`](crate::AdminService)
//! logs it at `warn` and completes the camp save regardless.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use campconnect_core::{Camp, Error, Result};

/// Input to the announcement generator, assembled from a camp record.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationRequest {
    /// Display name of the camp.
    pub camp_name: String,
    /// Addressed audience, e.g. "Schools in Pathankot, Gurdaspur".
    pub audience: String,
    /// Camp description.
    pub description: String,
    /// Venue.
    pub location: String,
    /// Eligibility text.
    pub eligibility_criteria: String,
    /// Contact email for inquiries.
    pub contact_email: String,
    /// Camp start, RFC 3339.
    pub start_date: String,
    /// Camp end, RFC 3339.
    pub end_date: String,
}

impl NotificationRequest {
    /// Builds a generator request for a camp.
    pub fn for_camp(camp: &Camp) -> Self {
        Self {
            camp_name: camp.name.clone(),
            audience: format!("Schools in {}", camp.districts_display()),
            description: camp.description.clone(),
            location: camp.location.clone(),
            eligibility_criteria: camp.eligibility_criteria.clone(),
            contact_email: camp.contact_email.clone(),
            start_date: camp.start_date.to_rfc3339(),
            end_date: camp.end_date.to_rfc3339(),
        }
    }
}

/// A drafted announcement email, as returned by the generator.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationEmail {
    /// The full email body text.
    pub notification_email: String,
}

/// Drafts announcement emails for newly published or edited camps.
#[async_trait]
pub trait NotificationGenerator: Send + Sync {
    /// Generates an announcement email for the given request.
    async fn generate(&self, request: &NotificationRequest) -> Result<NotificationEmail>;
}

/// HTTP-backed generator: posts the request as JSON and reads the drafted
/// email back.
pub struct HttpNotificationGenerator {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpNotificationGenerator {
    /// Creates a generator client from configuration, or `None` when no
    /// endpoint is configured.
    pub fn from_config(config: &crate::config::NotificationConfig) -> Result<Option<Self>> {
        match &config.endpoint {
            Some(endpoint) => {
                Self::new(endpoint.as_str(), Duration::from_secs(config.timeout_secs)).map(Some)
            }
            None => Ok(None),
        }
    }

    /// Creates a generator client for the given endpoint.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::config(format!("cannot build notification client: {e}")))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl NotificationGenerator for HttpNotificationGenerator {
    async fn generate(&self, request: &NotificationRequest) -> Result<NotificationEmail> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| Error::notification(format!("generator unreachable: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::notification(format!(
                "generator returned {}",
                response.status()
            )));
        }

        response
            .json::<NotificationEmail>()
            .await
            .map_err(|e| Error::notification(format!("malformed generator response: {e}")))
    }
}

/// Scripted generator for tests: records every request and either drafts a
/// canned email or fails.
#[derive(Debug, Default)]
pub struct MockNotificationGenerator {
    fail: bool,
    requests: Mutex<Vec<NotificationRequest>>,
}

impl MockNotificationGenerator {
    /// Creates a mock that drafts a canned announcement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock that fails every generation.
    pub fn failing() -> Self {
        Self {
            fail: true,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<NotificationRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl NotificationGenerator for MockNotificationGenerator {
    async fn generate(&self, request: &NotificationRequest) -> Result<NotificationEmail> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(request.clone());
        if self.fail {
            return Err(Error::notification("mock generator failure"));
        }
        Ok(NotificationEmail {
            notification_email: format!(
                "Dear {},\n\nWe are pleased to announce {} at {}. {}\n\nRegards,\nCampConnect",
                request.audience, request.camp_name, request.location, request.description
            ),
        })
    }
}
