use std::{future::Future, sync::LazyLock, time::Duration};

use http::StatusCode;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

// Same permissive shape the form checks client-side; the two checks stay
// independent so a tampered client never reaches the sender with bad input.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

/// JSON payload posted by the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRequest {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub name: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MailError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Failed to send email")]
    Delivery,
}

impl MailError {
    pub fn status(&self) -> StatusCode {
        match self {
            MailError::MissingFields | MailError::InvalidEmail => StatusCode::BAD_REQUEST,
            MailError::Delivery => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub fn is_valid_email(addr: &str) -> bool {
    EMAIL_PATTERN.is_match(addr)
}

pub fn validate_request(req: &EmailRequest) -> Result<(), MailError> {
    if req.to.is_empty()
        || req.from.is_empty()
        || req.subject.is_empty()
        || req.name.is_empty()
        || req.message.is_empty()
    {
        return Err(MailError::MissingFields);
    }
    if !is_valid_email(&req.from) || !is_valid_email(&req.to) {
        return Err(MailError::InvalidEmail);
    }
    Ok(())
}

/// Delivery backend for contact-form mail. A real transport (SMTP relay,
/// transactional API) implements this and reports its own failures.
pub trait MailSender {
    fn send(&self, req: &EmailRequest) -> impl Future<Output = Result<(), MailError>> + Send;
}

/// Placeholder sender: logs the payload, waits out a simulated provider
/// round-trip, and accepts unconditionally.
#[derive(Debug, Clone)]
pub struct StubMailer {
    delay: Duration,
}

impl Default for StubMailer {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(1),
        }
    }
}

impl StubMailer {
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl MailSender for StubMailer {
    fn send(&self, req: &EmailRequest) -> impl Future<Output = Result<(), MailError>> + Send {
        async move {
            info!(?req, "email would be sent");
            tokio::time::sleep(self.delay).await;
            Ok(())
        }
    }
}

pub async fn handle_send<M: MailSender>(mailer: &M, req: EmailRequest) -> Result<(), MailError> {
    validate_request(&req)?;
    mailer.send(&req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> EmailRequest {
        EmailRequest {
            to: "dwivedi@ucdavis.edu".to_string(),
            from: "jane@x.com".to_string(),
            subject: "Portfolio Contact: General Inquiry".to_string(),
            name: "Jane".to_string(),
            message: "Hello there, testing.".to_string(),
        }
    }

    #[test]
    fn test_well_formed_request_passes() {
        assert!(validate_request(&request()).is_ok());
    }

    #[test]
    fn test_every_field_is_required() {
        let clears: [fn(&mut EmailRequest); 5] = [
            |r| r.to.clear(),
            |r| r.from.clear(),
            |r| r.subject.clear(),
            |r| r.name.clear(),
            |r| r.message.clear(),
        ];
        for clear in clears {
            let mut req = request();
            clear(&mut req);
            assert_eq!(validate_request(&req), Err(MailError::MissingFields));
        }
    }

    #[test]
    fn test_both_addresses_must_look_like_email() {
        let mut req = request();
        req.from = "not-an-email".to_string();
        assert_eq!(validate_request(&req), Err(MailError::InvalidEmail));

        let mut req = request();
        req.to = "nobody@nowhere".to_string();
        assert_eq!(validate_request(&req), Err(MailError::InvalidEmail));
    }

    #[test]
    fn test_email_pattern_is_permissive_not_rfc() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.edu"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("a@nodot"));
        assert!(!is_valid_email("two@@signs.com"));
        assert!(!is_valid_email("spaced out@domain.com"));
        assert!(!is_valid_email(" a@b.co"));
    }

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(MailError::MissingFields.status(), StatusCode::BAD_REQUEST);
        assert_eq!(MailError::InvalidEmail.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            MailError::Delivery.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_wire_payload_is_flat() {
        let value = serde_json::to_value(request()).expect("payload should serialize");
        let obj = value.as_object().expect("payload should be an object");
        for key in ["to", "from", "subject", "name", "message"] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
        assert_eq!(obj.len(), 5);
    }

    #[tokio::test]
    async fn test_stub_mailer_accepts_valid_mail() {
        let mailer = StubMailer::with_delay(Duration::ZERO);
        handle_send(&mailer, request()).await.expect("should send");
    }

    #[tokio::test]
    async fn test_invalid_requests_never_reach_the_sender() {
        struct ExplodingMailer;
        impl MailSender for ExplodingMailer {
            fn send(&self, _: &EmailRequest) -> impl Future<Output = Result<(), MailError>> + Send {
                async { panic!("sender must not be called for invalid requests") }
            }
        }

        let mut req = request();
        req.name.clear();
        let err = handle_send(&ExplodingMailer, req)
            .await
            .expect_err("should fail validation");
        assert_eq!(err, MailError::MissingFields);
    }
}
