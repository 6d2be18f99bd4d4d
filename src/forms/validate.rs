//! Field validation for the contact form. Failures surface inline next to
//! the field and clear on the next input; nothing here is fatal.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
    InvalidPhone,
}

impl FieldError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Required => "This field is required",
            Self::InvalidEmail => "Please enter a valid email address",
            Self::InvalidPhone => "Please enter a valid phone number",
        }
    }
}

pub fn validate(kind: FieldKind, value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    match kind {
        FieldKind::Text => Ok(()),
        FieldKind::Email if is_valid_email(value) => Ok(()),
        FieldKind::Email => Err(FieldError::InvalidEmail),
        FieldKind::Phone if is_valid_phone(value) => Ok(()),
        FieldKind::Phone => Err(FieldError::InvalidPhone),
    }
}

fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let mut parts = domain.split('.');
    let dotted = domain.contains('.');
    dotted && parts.all(|part| !part.is_empty())
}

/// Loose phone check: an optional leading `+`, then digits and common
/// grouping characters, with at least ten digits in total.
fn is_valid_phone(value: &str) -> bool {
    let rest = value.strip_prefix('+').unwrap_or(value);
    let allowed = rest
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'));
    allowed && rest.chars().filter(char::is_ascii_digit).count() >= 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_required_fields_fail() {
        assert_eq!(validate(FieldKind::Text, ""), Err(FieldError::Required));
        assert_eq!(validate(FieldKind::Email, "   "), Err(FieldError::Required));
    }

    #[test]
    fn email_formats() {
        assert!(validate(FieldKind::Email, "a@b.co").is_ok());
        assert!(validate(FieldKind::Email, "someone@studio.example.com").is_ok());
        assert_eq!(
            validate(FieldKind::Email, "notanemail"),
            Err(FieldError::InvalidEmail)
        );
        assert_eq!(
            validate(FieldKind::Email, "a@b"),
            Err(FieldError::InvalidEmail)
        );
        assert_eq!(
            validate(FieldKind::Email, "a@b..co"),
            Err(FieldError::InvalidEmail)
        );
        assert_eq!(
            validate(FieldKind::Email, "a b@c.co"),
            Err(FieldError::InvalidEmail)
        );
    }

    #[test]
    fn phone_formats() {
        assert!(validate(FieldKind::Phone, "0123456789").is_ok());
        assert!(validate(FieldKind::Phone, "+351 21 123 4567").is_ok());
        assert!(validate(FieldKind::Phone, "(021) 123-4567890").is_ok());
        assert_eq!(
            validate(FieldKind::Phone, "123"),
            Err(FieldError::InvalidPhone)
        );
        assert_eq!(
            validate(FieldKind::Phone, "phone me"),
            Err(FieldError::InvalidPhone)
        );
    }

    #[test]
    fn plain_text_only_needs_content() {
        assert!(validate(FieldKind::Text, "hello").is_ok());
    }
}
