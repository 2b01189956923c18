//! Contact form state and submission.
//!
//! ```text
//! idle --begin_submit--> submitting --complete(ok)--> idle (fields cleared)
//!                                   \-complete(err)-> idle (fields kept)
//! ```
//!
//! Required-field enforcement belongs to the form markup; this module only
//! tracks values and the submit phase. Every failure cause collapses into one
//! generic user-facing notification; the cause itself is only logged.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, warn};

use crate::api::{ContactRequest, ContactResponse};

/// Title of the success notification.
pub const SUCCESS_TITLE: &str = "Message sent successfully!";
/// Description used when the transport does not supply one.
pub const SUCCESS_DESCRIPTION: &str = "Thank you for reaching out. I'll get back to you soon.";
/// Title of the failure notification.
pub const FAILURE_TITLE: &str = "Error sending message";
/// Description of the failure notification.
pub const FAILURE_DESCRIPTION: &str = "Please try again or contact me directly via email.";

/// One of the four form inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// Sender name
    Name,
    /// Sender email
    Email,
    /// Subject line
    Subject,
    /// Message body
    Message,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Input `name` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = SubmitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| SubmitError::UnknownField(s.to_string()))
    }
}

/// Where the form is in its submit cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    /// Accepting edits
    #[default]
    Idle,
    /// Waiting for the transport
    Submitting,
}

/// Why a submission did not succeed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// A submission is already waiting for the transport.
    #[error("a submission is already in flight")]
    InFlight,
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("server returned {status}{}", detail_suffix(.detail))]
    Status {
        /// HTTP status code
        status: u16,
        /// `detail` from the error body, when present
        detail: Option<String>,
    },
    /// The server answered 2xx but with `success: false`.
    #[error("server rejected the message: {0}")]
    Rejected(String),
    /// The response body was not the expected JSON.
    #[error("could not decode response: {0}")]
    Decode(String),
    /// A field name outside name/email/subject/message.
    #[error("unknown form field '{0}'")]
    UnknownField(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_ref().map(|d| format!(": {d}")).unwrap_or_default()
}

/// Severity of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    /// Message was delivered
    Success,
    /// Delivery failed
    Error,
}

/// Transient toast shown after a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    /// Severity
    pub kind: NotificationKind,
    /// Bold first line
    pub title: String,
    /// Body text
    pub description: String,
}

impl Notification {
    /// Success toast with the given description.
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: SUCCESS_TITLE.to_string(),
            description: description.into(),
        }
    }

    /// The generic failure toast.
    pub fn failure() -> Self {
        Self {
            kind: NotificationKind::Error,
            title: FAILURE_TITLE.to_string(),
            description: FAILURE_DESCRIPTION.to_string(),
        }
    }

    /// True for failure toasts.
    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

/// Delivers a contact request.
#[allow(async_fn_in_trait)]
pub trait ContactTransport {
    /// Send one request. Exactly one outbound call per invocation.
    async fn send(&self, request: ContactRequest) -> Result<ContactResponse, SubmitError>;
}

/// Contact form values plus the submit phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
    phase: SubmitPhase,
}

impl ContactForm {
    /// Empty, idle form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of `field`.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Replace the value of `field`.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Current phase.
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Whether a submission is waiting for the transport.
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Whether every field is empty.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.field(*f).is_empty())
    }

    /// Enter `Submitting` and snapshot the fields into a request.
    ///
    /// A second call before [`complete`](Self::complete) returns
    /// [`SubmitError::InFlight`] so a double click sends one request.
    pub fn begin_submit(&mut self) -> Result<ContactRequest, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::InFlight);
        }
        self.phase = SubmitPhase::Submitting;
        debug!("contact form submitting");
        Ok(ContactRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        })
    }

    /// Apply the transport outcome and return to `Idle`.
    ///
    /// Success clears all four fields; failure leaves them for a retry.
    pub fn complete(&mut self, outcome: Result<ContactResponse, SubmitError>) -> Notification {
        self.phase = SubmitPhase::Idle;
        let outcome = outcome.and_then(|response| {
            if response.success {
                Ok(response)
            } else {
                Err(SubmitError::Rejected(response.message))
            }
        });
        match outcome {
            Ok(response) => {
                self.clear();
                debug!(id = ?response.id, "contact message delivered");
                let description = if response.message.is_empty() {
                    SUCCESS_DESCRIPTION.to_string()
                } else {
                    response.message
                };
                Notification::success(description)
            }
            Err(err) => {
                warn!(error = %err, "error sending contact message");
                Notification::failure()
            }
        }
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
    }
}

/// Run one full submit cycle against `transport`.
///
/// Returns `Err(SubmitError::InFlight)` without calling the transport when
/// the form is already submitting.
pub async fn submit<T: ContactTransport>(
    form: &mut ContactForm,
    transport: &T,
) -> Result<Notification, SubmitError> {
    let request = form.begin_submit()?;
    let outcome = transport.send(request).await;
    Ok(form.complete(outcome))
}
