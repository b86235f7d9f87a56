use std::sync::LazyLock;

use regex::Regex;

// contact form validation
//
// fields are looked up by id or name convention on every submit, since forms may be edited
// (or swapped by a cms) between submits.  the messages are german, like the rest of the site
pub const EMAIL_REGEX: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
pub const PHONE_REGEX: &str = r"^[0-9\s+\-()]{10,20}$";

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_REGEX).expect("email pattern is valid"));
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_REGEX).expect("phone pattern is valid"));

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_MESSAGE_CHARS: usize = 10;

// shown in the submit button while the "request" is in flight
pub const SENDING_MARKUP: &str = concat!(
    r#"<span class="spinner-border spinner-border-sm me-2" role="status" aria-hidden="true"></span>"#,
    "Wird gesendet..."
);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
    Privacy,
}

impl Field {
    // validation (and therefore error display) order
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Message,
        Field::Privacy,
    ];

    pub fn selector(self) -> &'static str {
        match self {
            Field::Name => r#"#name, input[name="name"]"#,
            Field::Email => r#"#email, input[name="email"]"#,
            Field::Phone => r#"#phone, input[name="phone"]"#,
            Field::Message => r#"#message, textarea[name="message"]"#,
            Field::Privacy => r#"#privacy, input[name="privacy"]"#,
        }
    }
}

// what the binding layer read out of the element
//
// the privacy field only counts when it really is a checkbox; anything else found under that
// selector is passed as Text and ignored
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Checkbox(bool),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Problem {
    Missing,
    TooShort,
    Malformed,
    Unchecked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub problem: Problem,
}

impl FieldError {
    pub fn message(&self) -> &'static str {
        match (self.field, self.problem) {
            (Field::Name, Problem::Missing) => "Bitte geben Sie Ihren Namen ein.",
            (Field::Name, _) => "Der Name muss mindestens 2 Zeichen lang sein.",
            (Field::Email, Problem::Missing) => "Bitte geben Sie Ihre E-Mail-Adresse ein.",
            (Field::Email, _) => "Bitte geben Sie eine gültige E-Mail-Adresse ein.",
            (Field::Phone, Problem::Missing) => "Bitte geben Sie Ihre Telefonnummer ein.",
            (Field::Phone, _) => "Bitte geben Sie eine gültige Telefonnummer ein.",
            (Field::Message, Problem::Missing) => "Bitte geben Sie eine Nachricht ein.",
            (Field::Message, _) => "Die Nachricht muss mindestens 10 Zeichen lang sein.",
            (Field::Privacy, _) => "Bitte akzeptieren Sie die Datenschutzerklärung.",
        }
    }
}

pub fn check_field(field: Field, value: &FieldValue) -> Option<Problem> {
    let text = match (field, value) {
        (Field::Privacy, FieldValue::Checkbox(true)) => return None,
        (Field::Privacy, FieldValue::Checkbox(false)) => return Some(Problem::Unchecked),
        (Field::Privacy, FieldValue::Text(_)) => return None,
        (_, FieldValue::Checkbox(_)) => return None,
        (_, FieldValue::Text(text)) => trim(text),
    };

    if text.is_empty() {
        return Some(Problem::Missing);
    }

    let chars = text.chars().count();

    match field {
        Field::Name if chars < MIN_NAME_CHARS => Some(Problem::TooShort),
        Field::Message if chars < MIN_MESSAGE_CHARS => Some(Problem::TooShort),
        Field::Email if !EMAIL.is_match(text) => Some(Problem::Malformed),
        Field::Phone if !PHONE.is_match(text) => Some(Problem::Malformed),
        _ => None,
    }
}

// same set as javascript's String.prototype.trim, which also strips the byte order mark
fn trim(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

// every field is checked, so the visitor sees all of their mistakes at once
pub fn validate<I>(fields: I) -> Vec<FieldError>
where
    I: IntoIterator<Item = (Field, FieldValue)>,
{
    fields
        .into_iter()
        .filter_map(|(field, value)| {
            check_field(field, &value).map(|problem| FieldError { field, problem })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_owned())
    }

    fn err(field: Field, value: FieldValue) -> Option<&'static str> {
        check_field(field, &value).map(|problem| FieldError { field, problem }.message())
    }

    #[test]
    fn email() {
        assert_eq!(
            err(Field::Email, text("not-an-email")),
            Some("Bitte geben Sie eine gültige E-Mail-Adresse ein.")
        );
        assert_eq!(err(Field::Email, text("a@b.co")), None);
        assert_eq!(err(Field::Email, text("  a@b.co  ")), None);
        assert!(err(Field::Email, text("a b@c.de")).is_some());
        assert!(err(Field::Email, text("a@b")).is_some());
        assert_eq!(
            err(Field::Email, text("   ")),
            Some("Bitte geben Sie Ihre E-Mail-Adresse ein.")
        );
    }

    #[test]
    fn phone() {
        assert_eq!(check_field(Field::Phone, &text("123")), Some(Problem::Malformed));
        assert_eq!(check_field(Field::Phone, &text("+49 30 1234567")), None);
        assert_eq!(check_field(Field::Phone, &text("(030) 123-4567")), None);
        assert_eq!(check_field(Field::Phone, &text("0301234567x")), Some(Problem::Malformed));
        assert_eq!(
            check_field(Field::Phone, &text("+49 30 1234567 89 0123")),
            Some(Problem::Malformed)
        );
        assert_eq!(check_field(Field::Phone, &text("")), Some(Problem::Missing));
    }

    #[test]
    fn name_and_message_count_characters() {
        assert_eq!(check_field(Field::Name, &text("A")), Some(Problem::TooShort));
        assert_eq!(check_field(Field::Name, &text("Jo")), None);
        // two characters, four bytes
        assert_eq!(check_field(Field::Name, &text("Öz")), None);

        assert_eq!(check_field(Field::Message, &text("Hallo!")), Some(Problem::TooShort));
        assert_eq!(check_field(Field::Message, &text("Grüß Gott!")), None);
        assert_eq!(
            err(Field::Message, text("")),
            Some("Bitte geben Sie eine Nachricht ein.")
        );
    }

    #[test]
    fn byte_order_mark_counts_as_blank() {
        assert_eq!(check_field(Field::Name, &text("\u{feff}")), Some(Problem::Missing));
        assert_eq!(check_field(Field::Name, &text("\u{feff} Jo \u{feff}")), None);
        assert_eq!(check_field(Field::Email, &text("\u{feff}a@b.co")), None);
    }

    #[test]
    fn privacy_only_counts_as_checkbox() {
        assert_eq!(
            check_field(Field::Privacy, &FieldValue::Checkbox(false)),
            Some(Problem::Unchecked)
        );
        assert_eq!(check_field(Field::Privacy, &FieldValue::Checkbox(true)), None);
        assert_eq!(check_field(Field::Privacy, &text("")), None);
    }

    #[test]
    fn validate_reports_every_failure_in_order() {
        let errors = validate([
            (Field::Name, text("A")),
            (Field::Email, text("a@b.co")),
            (Field::Phone, text("123")),
            (Field::Message, text("")),
            (Field::Privacy, FieldValue::Checkbox(false)),
        ]);

        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![Field::Name, Field::Phone, Field::Message, Field::Privacy]
        );
        assert_eq!(errors[2].problem, Problem::Missing);
    }

    #[test]
    fn absent_fields_are_not_required() {
        assert!(validate([(Field::Email, text("info@example.de"))]).is_empty());
        assert!(validate(Vec::<(Field, FieldValue)>::new()).is_empty());
    }
}
