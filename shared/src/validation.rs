use std::sync::LazyLock;

use regex::Regex;

use crate::error::ApiError;

/// Local part is word/hyphen/dot characters, domain is dot-separated labels,
/// final label 2-4 characters.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.-]+@([\w-]+\.)+[\w-]{2,4}$").expect("Invalid regex"));

/// Check email format and password strength. Absence or emptiness of a field
/// fails before its pattern check. Returns the validated pair so callers
/// never touch the raw `Option`s again.
pub fn validate_credentials<'a>(
    email: Option<&'a str>,
    password: Option<&'a str>,
) -> Result<(&'a str, &'a str), ApiError> {
    let email = match email {
        Some(e) if !e.is_empty() => e,
        _ => return Err(invalid("Email is invalid")),
    };
    if !EMAIL_RE.is_match(email) {
        return Err(invalid("Email is invalid"));
    }

    let password = match password {
        Some(p) if !p.is_empty() => p,
        _ => return Err(invalid("Password is invalid")),
    };
    if !is_valid_password(password) {
        return Err(invalid("Password is invalid"));
    }

    Ok((email, password))
}

/// At least 12 characters with one digit, one letter, and one of `$ % ^ *`.
/// Written as character scans since the regex crate has no lookahead.
fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= 12
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| matches!(c, '$' | '%' | '^' | '*'))
}

fn invalid(message: &str) -> ApiError {
    ApiError::InvalidInput(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_credentials() {
        assert!(validate_credentials(Some("a@b.com"), Some("Abcdefgh123$")).is_ok());
        assert!(validate_credentials(Some("first.last@sub.example.org"), Some("longenough1%")).is_ok());
    }

    #[test]
    fn rejects_missing_or_empty_fields() {
        assert!(validate_credentials(None, Some("Abcdefgh123$")).is_err());
        assert!(validate_credentials(Some(""), Some("Abcdefgh123$")).is_err());
        assert!(validate_credentials(Some("a@b.com"), None).is_err());
        assert!(validate_credentials(Some("a@b.com"), Some("")).is_err());
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in ["plainaddress", "a@b", "a@b.", "@b.com", "a@b.toolong"] {
            let result = validate_credentials(Some(email), Some("Abcdefgh123$"));
            assert!(result.is_err(), "accepted {email}");
        }
    }

    #[test]
    fn rejects_weak_passwords() {
        // too short, no digit, no letter, no special
        for password in ["Ab1$", "Abcdefghijk$", "123456789012$", "Abcdefgh1234"] {
            let result = validate_credentials(Some("a@b.com"), Some(password));
            assert!(result.is_err(), "accepted {password}");
        }
    }

    #[test]
    fn reports_which_field_failed() {
        let err = validate_credentials(Some("not-an-email"), Some("Abcdefgh123$")).unwrap_err();
        assert_eq!(err.to_string(), "Email is invalid");
        let err = validate_credentials(Some("a@b.com"), Some("weak")).unwrap_err();
        assert_eq!(err.to_string(), "Password is invalid");
    }
}
