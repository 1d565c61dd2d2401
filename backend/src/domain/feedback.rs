//! Feedback data model and validation.
//!
//! A raw [`FeedbackDraft`] is validated into a [`FeedbackSubmission`];
//! the persistence layer turns a submission into a stored
//! [`FeedbackRecord`] by assigning the id and creation timestamp.

use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;

/// Maximum allowed length for the name field, in characters.
pub const NAME_MAX: usize = 100;
/// Maximum allowed length for the email field, in characters.
pub const EMAIL_MAX: usize = 255;
/// Maximum allowed length for the message field, in characters.
pub const MESSAGE_MAX: usize = 1000;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

/// Accepted email shape: one `@`, whitespace-free local part, dotted
/// whitespace-free domain. This is the stricter of the two rules the
/// system previously applied (the client-side pattern; the server-side
/// check also accepted dot-less domains such as `user@localhost`), so one
/// rule now governs both ends.
fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Length is enforced separately.
        let pattern = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Submission fields, in the order violations are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackField {
    /// Submitter's name.
    Name,
    /// Submitter's email address.
    Email,
    /// Feedback message body.
    Message,
}

impl FeedbackField {
    /// Field label as it appears in violation messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The field was blank or missing.
    Required {
        /// Field the violation applies to.
        field: FeedbackField,
    },
    /// The field exceeded its maximum length.
    TooLong {
        /// Field the violation applies to.
        field: FeedbackField,
        /// Maximum allowed length in characters.
        max: usize,
    },
    /// The email did not match the accepted address shape.
    InvalidEmail,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { field } => write!(f, "{} is required", field.label()),
            Self::TooLong { field, max } => {
                write!(f, "{} must not exceed {max} characters", field.label())
            }
            Self::InvalidEmail => write!(f, "Please enter a valid email address"),
        }
    }
}

/// Join violation messages with the separator exposed to clients.
///
/// An empty violation set yields an empty string.
pub fn joined_messages(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Raw feedback input as parsed from a request body.
///
/// Carries whatever the caller sent; [`FeedbackDraft::validate`] decides
/// whether it is acceptable. Missing body fields arrive as empty strings
/// so the validator, not the deserializer, reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackDraft {
    /// Submitter's name, unvalidated.
    pub name: String,
    /// Submitter's email address, unvalidated.
    pub email: String,
    /// Feedback message body, unvalidated.
    pub message: String,
}

impl FeedbackDraft {
    /// Create a draft from raw field values.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Evaluate every field and return the complete violation set.
    ///
    /// Fields are checked independently (no short-circuit on the first
    /// failing field) and violations are reported in field order: name,
    /// email, message. A blank field reports only its required violation;
    /// a non-blank email may report both a shape and a length violation.
    /// Lengths are counted in characters, not bytes.
    pub fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        if self.name.trim().is_empty() {
            violations.push(Violation::Required {
                field: FeedbackField::Name,
            });
        } else if self.name.chars().count() > NAME_MAX {
            violations.push(Violation::TooLong {
                field: FeedbackField::Name,
                max: NAME_MAX,
            });
        }

        if self.email.trim().is_empty() {
            violations.push(Violation::Required {
                field: FeedbackField::Email,
            });
        } else {
            if !email_regex().is_match(&self.email) {
                violations.push(Violation::InvalidEmail);
            }
            if self.email.chars().count() > EMAIL_MAX {
                violations.push(Violation::TooLong {
                    field: FeedbackField::Email,
                    max: EMAIL_MAX,
                });
            }
        }

        if self.message.trim().is_empty() {
            violations.push(Violation::Required {
                field: FeedbackField::Message,
            });
        } else if self.message.chars().count() > MESSAGE_MAX {
            violations.push(Violation::TooLong {
                field: FeedbackField::Message,
                max: MESSAGE_MAX,
            });
        }

        violations
    }
}

/// Validated feedback content eligible for persistence.
///
/// ## Invariants
/// - Every field is non-blank and within its length limit.
/// - The email matches the accepted address shape.
///
/// Only constructible through validation, so the repository port can rely
/// on these invariants structurally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackSubmission {
    name: String,
    email: String,
    message: String,
}

impl FeedbackSubmission {
    /// Submitter's name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Submitter's email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Feedback message body.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl TryFrom<FeedbackDraft> for FeedbackSubmission {
    type Error = Vec<Violation>;

    fn try_from(draft: FeedbackDraft) -> Result<Self, Self::Error> {
        let violations = draft.validate();
        if !violations.is_empty() {
            return Err(violations);
        }

        let FeedbackDraft {
            name,
            email,
            message,
        } = draft;
        Ok(Self {
            name,
            email,
            message,
        })
    }
}

/// Persisted feedback entry.
///
/// ## Invariants
/// - `id` and `created_at` are assigned by the datastore and immutable.
/// - Content fields satisfy the [`FeedbackSubmission`] invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackRecord {
    /// Datastore-assigned identifier.
    pub id: i64,
    /// Submitter's name.
    pub name: String,
    /// Submitter's email address.
    pub email: String,
    /// Feedback message body.
    pub message: String,
    /// Creation timestamp assigned by the datastore.
    pub created_at: DateTime<Utc>,
}

impl FeedbackRecord {
    /// Build a record from a submission and datastore-assigned metadata.
    pub fn from_submission(
        id: i64,
        submission: &FeedbackSubmission,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: submission.name().to_owned(),
            email: submission.email().to_owned(),
            message: submission.message().to_owned(),
            created_at,
        }
    }
}
