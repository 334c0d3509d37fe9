use crate::components::common::{Painter, wrap};
use crate::validation::Validator;
use serde_json::{Map, Value};
use server::security::{InputKind, sanitize_form_data, validate_input};
use std::collections::BTreeMap;
use std::fmt;

pub const MAX_MESSAGE_CHARS: usize = 2000;

pub const THANK_YOU_MESSAGE: &str = "Thank you for your message! We'll get back to you soon.";

/// Subjects offered by the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ContactSubject {
    General,
    Support,
    Themes,
    Business,
    Feedback,
}

impl ContactSubject {
    pub const ALL: [ContactSubject; 5] = [
        ContactSubject::General,
        ContactSubject::Support,
        ContactSubject::Themes,
        ContactSubject::Business,
        ContactSubject::Feedback,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactSubject::General => "general",
            ContactSubject::Support => "support",
            ContactSubject::Themes => "themes",
            ContactSubject::Business => "business",
            ContactSubject::Feedback => "feedback",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactSubject::General => "General Inquiry",
            ContactSubject::Support => "Technical Support",
            ContactSubject::Themes => "Theme Questions",
            ContactSubject::Business => "Business Partnership",
            ContactSubject::Feedback => "Feedback",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: ContactSubject,
    pub message: String,
}

impl ContactForm {
    fn to_record(&self) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert("name".to_string(), Value::from(self.name.as_str()));
        record.insert("email".to_string(), Value::from(self.email.as_str()));
        if let Some(phone) = &self.phone {
            record.insert("phone".to_string(), Value::from(phone.as_str()));
        }
        record.insert("subject".to_string(), Value::from(self.subject.as_str()));
        record.insert("message".to_string(), Value::from(self.message.as_str()));
        record
    }
}

/// A single rejected contact form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactFormError {
    InvalidField { field: &'static str, kind: InputKind },
    EmptyMessage,
    MessageTooLong { length: usize, limit: usize },
}

impl ContactFormError {
    pub fn user_message(&self) -> String {
        match self {
            ContactFormError::InvalidField { field, kind } => match kind {
                InputKind::Name => format!(
                    "Please enter a valid {field} (letters, spaces, apostrophes and hyphens, up to 50 characters)."
                ),
                InputKind::Email => format!("Please enter a valid {field}, like you@example.com."),
                InputKind::Phone => {
                    format!("Please enter a valid {field}: digits only, optionally starting with +.")
                }
                InputKind::Url => format!("Please enter a valid {field} starting with http(s)://."),
            },
            ContactFormError::EmptyMessage => "Please enter a message.".to_string(),
            ContactFormError::MessageTooLong { length, limit } => {
                format!("Your message is {length} characters long; the limit is {limit}.")
            }
        }
    }
}

impl fmt::Display for ContactFormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactFormError::InvalidField { field, kind } => {
                write!(f, "field '{field}' is not a valid {kind}")
            }
            ContactFormError::EmptyMessage => f.write_str("message is empty"),
            ContactFormError::MessageTooLong { length, limit } => {
                write!(f, "message has {length} characters (limit {limit})")
            }
        }
    }
}

impl std::error::Error for ContactFormError {}

/// Checks every field and reports all problems at once
pub struct ContactFormValidator;

impl Validator<ContactForm> for ContactFormValidator {
    type Error = Vec<ContactFormError>;

    fn validate(&self, form: &ContactForm) -> Result<(), Self::Error> {
        let mut errors = Vec::new();

        if !validate_input(&form.name, InputKind::Name) {
            errors.push(ContactFormError::InvalidField {
                field: "name",
                kind: InputKind::Name,
            });
        }
        if !validate_input(&form.email, InputKind::Email) {
            errors.push(ContactFormError::InvalidField {
                field: "email",
                kind: InputKind::Email,
            });
        }
        if let Some(phone) = &form.phone {
            if !validate_input(phone, InputKind::Phone) {
                errors.push(ContactFormError::InvalidField {
                    field: "phone",
                    kind: InputKind::Phone,
                });
            }
        }

        let length = form.message.trim().chars().count();
        if length == 0 {
            errors.push(ContactFormError::EmptyMessage);
        } else if length > MAX_MESSAGE_CHARS {
            errors.push(ContactFormError::MessageTooLong {
                length,
                limit: MAX_MESSAGE_CHARS,
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Validate the form and return its sanitized record.
///
/// Nothing is sent anywhere; the record is what a backend would receive.
pub fn submit(form: &ContactForm) -> Result<BTreeMap<String, String>, Vec<ContactFormError>> {
    ContactFormValidator.validate(form)?;

    let record = sanitize_form_data(&form.to_record());
    log::info!(
        "Contact message accepted (subject: {}, {} characters)",
        form.subject.as_str(),
        form.message.trim().chars().count()
    );
    Ok(record)
}

const CONTACT_INFO: [(&str, &str, &str); 4] = [
    ("Email Us", "hello@themestore.com", "Send us an email anytime"),
    ("Call Us", "+1 (555) 123-4567", "Mon-Fri, 9am-6pm EST"),
    ("Visit Us", "123 Innovation St", "San Francisco, CA 94105"),
    ("Support Hours", "24/7 Available", "We're here to help"),
];

const FAQ: [(&str, &str); 4] = [
    (
        "How do themes work?",
        "Our themes completely transform the layout, colors, fonts, and structure of the \
         entire application, providing distinct user experiences.",
    ),
    (
        "Is my theme choice saved?",
        "Yes! Your theme preference is automatically saved and will persist across sessions.",
    ),
    (
        "Do themes work in every terminal?",
        "Colors need a terminal with 256-color support. Use --no-color for plain text.",
    ),
    (
        "Can I suggest new themes?",
        "We'd love to hear your ideas! Send us your theme suggestions with `storefront contact`.",
    ),
];

/// Outcome of a form submission, shown above the page content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    Rejected(Vec<ContactFormError>),
}

pub fn render_contact(painter: &Painter, outcome: Option<&SubmissionOutcome>) -> Vec<String> {
    let layout = painter.style().layout;
    let width = layout.card_width * layout.grid_columns;

    let mut lines = Vec::new();
    match outcome {
        Some(SubmissionOutcome::Accepted) => {
            lines.push(painter.success(THANK_YOU_MESSAGE));
            lines.extend(painter.gap());
        }
        Some(SubmissionOutcome::Rejected(errors)) => {
            lines.push(painter.error("Your message could not be sent:"));
            lines.extend(
                errors
                    .iter()
                    .map(|e| painter.error(&format!("  - {}", e.user_message()))),
            );
            lines.extend(painter.gap());
        }
        None => {}
    }

    lines.push(painter.title("Get in Touch"));
    lines.extend(
        wrap(
            "Have questions about our themes or products? We'd love to hear from you.",
            width,
        )
        .iter()
        .map(|line| painter.muted(line)),
    );
    lines.extend(painter.gap());

    for (title, content, description) in CONTACT_INFO {
        lines.push(format!(
            "{}  {}  {}",
            painter.title(title),
            painter.bold(content),
            painter.muted(description)
        ));
    }
    lines.extend(painter.gap());

    lines.push(painter.title("Send us a Message"));
    lines.push(painter.muted(
        "storefront contact --name <NAME> --email <EMAIL> [--phone <PHONE>] --subject <SUBJECT> --message <TEXT>",
    ));
    let subjects = ContactSubject::ALL
        .iter()
        .map(|s| format!("{} ({})", s.as_str(), s.label()))
        .collect::<Vec<_>>()
        .join(", ");
    lines.extend(
        wrap(&format!("Subjects: {subjects}"), width)
            .iter()
            .map(|line| painter.muted(line)),
    );
    lines.extend(painter.gap());

    lines.push(painter.title("Frequently Asked Questions"));
    for (question, answer) in FAQ {
        lines.push(painter.accent(question));
        lines.extend(wrap(answer, width));
    }
    lines
}
