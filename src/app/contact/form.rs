pub const CONTACT_EMAIL: &str = "dwivedi@ucdavis.edu";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Subject {
    #[default]
    ResearchCollaboration,
    SoftwareDevelopment,
    TeachingOpportunity,
    GeneralInquiry,
}

impl Subject {
    pub const ALL: [Subject; 4] = [
        Subject::ResearchCollaboration,
        Subject::SoftwareDevelopment,
        Subject::TeachingOpportunity,
        Subject::GeneralInquiry,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Subject::ResearchCollaboration => "Research Collaboration",
            Subject::SoftwareDevelopment => "Software Development",
            Subject::TeachingOpportunity => "Teaching Opportunity",
            Subject::GeneralInquiry => "General Inquiry",
        }
    }

    pub fn from_label(label: &str) -> Subject {
        Subject::ALL
            .into_iter()
            .find(|s| s.label() == label)
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: Subject,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: &str) {
        match field {
            Field::Name => self.name = value.to_string(),
            Field::Email => self.email = value.to_string(),
            Field::Subject => self.subject = Subject::from_label(value),
            Field::Message => self.message = value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    // editing a field dismisses its error; the value is only re-checked on
    // the next submit
    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Message => self.message = None,
            Field::Subject => {}
        }
    }
}

pub fn validate(form: &ContactForm) -> FormErrors {
    let mut errors = FormErrors::default();

    if form.name.trim().is_empty() {
        errors.name = Some("Name is required");
    }

    if form.email.trim().is_empty() {
        errors.email = Some("Email is required");
    } else if !looks_like_email(&form.email) {
        errors.email = Some("Please enter a valid email address");
    }

    let message = form.message.trim();
    if message.is_empty() {
        errors.message = Some("Message is required");
    } else if message.chars().count() < 10 {
        errors.message = Some("Message must be at least 10 characters long");
    }

    errors
}

// Permissive local@domain.tld shape check, not RFC 5322. The server applies
// the same rule with its own implementation.
pub fn looks_like_email(addr: &str) -> bool {
    if addr.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = addr.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    matches!(domain.rsplit_once('.'), Some((host, tld)) if !host.is_empty() && !tld.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            subject: Subject::GeneralInquiry,
            message: "Hello there, testing.".to_string(),
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        let errors = validate(&filled_form());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_name_and_message_required() {
        let mut form = filled_form();
        form.name = String::new();
        assert_eq!(validate(&form).name, Some("Name is required"));

        // whitespace-only counts as missing
        let mut form = filled_form();
        form.name = "   ".to_string();
        assert_eq!(validate(&form).name, Some("Name is required"));

        let mut form = filled_form();
        form.message = " \n ".to_string();
        assert_eq!(validate(&form).message, Some("Message is required"));
    }

    #[test]
    fn test_email_errors() {
        let mut form = filled_form();
        form.email = String::new();
        assert_eq!(validate(&form).email, Some("Email is required"));

        form.email = "not-an-email".to_string();
        assert_eq!(
            validate(&form).email,
            Some("Please enter a valid email address")
        );

        form.email = "a@b.co".to_string();
        assert_eq!(validate(&form).email, None);
    }

    #[test]
    fn test_message_length() {
        let mut form = filled_form();
        form.message = "short".to_string();
        assert_eq!(
            validate(&form).message,
            Some("Message must be at least 10 characters long")
        );

        form.message = "this is long enough".to_string();
        assert_eq!(validate(&form).message, None);

        // length is checked after trimming
        form.message = "  12345678  ".to_string();
        assert_eq!(
            validate(&form).message,
            Some("Message must be at least 10 characters long")
        );
    }

    #[test]
    fn test_validation_is_idempotent() {
        let mut form = filled_form();
        form.email = "nope".to_string();
        form.message = "short".to_string();
        let first = validate(&form);
        let second = validate(&form);
        assert_eq!(first, second);
    }

    #[test]
    fn test_editing_clears_only_that_error() {
        let mut form = filled_form();
        form.email = "nope".to_string();
        form.message = String::new();
        let mut errors = validate(&form);
        assert!(errors.email.is_some());
        assert!(errors.message.is_some());

        // user starts typing a still-invalid email; the error goes away
        // immediately and only comes back on the next submit
        form.set(Field::Email, "nope2");
        errors.clear(Field::Email);
        assert_eq!(errors.email, None);
        assert!(errors.message.is_some());

        let revalidated = validate(&form);
        assert!(revalidated.email.is_some());
    }

    #[test]
    fn test_email_shape_check() {
        assert!(looks_like_email("a@b.co"));
        assert!(looks_like_email("first.last@sub.domain.edu"));
        assert!(!looks_like_email("no-at-sign.com"));
        assert!(!looks_like_email("@missing-local.com"));
        assert!(!looks_like_email("a@nodot"));
        assert!(!looks_like_email("a@trailing."));
        assert!(!looks_like_email("a@.co"));
        assert!(!looks_like_email("two@@signs.com"));
        assert!(!looks_like_email("spaced out@domain.com"));
    }

    #[test]
    fn test_subject_labels_round_trip() {
        assert_eq!(Subject::default(), Subject::ResearchCollaboration);
        for subject in Subject::ALL {
            assert_eq!(Subject::from_label(subject.label()), subject);
        }
        // unknown values from the DOM fall back to the default
        assert_eq!(Subject::from_label("bogus"), Subject::ResearchCollaboration);
    }
}
