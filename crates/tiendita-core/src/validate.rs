//! Syntax validators for collected customer fields.
//!
//! Pure, total functions: no side effects, no error cases beyond `false`.

use std::sync::LazyLock;

use regex::Regex;

use tiendita_types::session::CustomerField;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("email pattern is valid"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^9\d{8}$").expect("phone pattern is valid"));

/// True for `local@domain.tld` shapes.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

/// True for exactly 9 digits with a leading 9 (Peruvian mobile format).
pub fn is_valid_phone(s: &str) -> bool {
    PHONE_RE.is_match(s)
}

/// Apply the validation rule for `field` to a candidate value.
///
/// Email and phone have syntax rules; free-text fields (name, address,
/// order number) accept anything non-blank.
pub fn validate_field(field: CustomerField, value: &str) -> bool {
    match field {
        CustomerField::Email => is_valid_email(value),
        CustomerField::Phone => is_valid_phone(value),
        CustomerField::Name | CustomerField::Address | CustomerField::OrderNumber => {
            !value.trim().is_empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        for email in [
            "ana@example.com",
            "a.b-c@sub.domain.org",
            "user_1@tienda.pe",
        ] {
            assert!(is_valid_email(email), "should accept {email}");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "not-an-email",
            "missing-at.com",
            "no-domain@",
            "@no-local.com",
            "no-tld@domain",
            "spaces in@mail.com",
            "",
        ] {
            assert!(!is_valid_email(email), "should reject {email:?}");
        }
    }

    #[test]
    fn test_valid_phones() {
        assert!(is_valid_phone("987654321"));
        assert!(is_valid_phone("900000000"));
        assert!(is_valid_phone("999999999"));
    }

    #[test]
    fn test_invalid_phones() {
        for phone in [
            "887654321",  // wrong leading digit
            "98765432",   // too short
            "9876543210", // too long
            "9abcdefgh",  // non-digits
            " 987654321", // leading space
            "",
        ] {
            assert!(!is_valid_phone(phone), "should reject {phone:?}");
        }
    }

    #[test]
    fn test_free_text_fields_accept_anything_nonblank() {
        assert!(validate_field(CustomerField::Name, "Ana"));
        assert!(validate_field(CustomerField::Address, "Av. Principal 123"));
        assert!(validate_field(CustomerField::OrderNumber, "PED-0042"));
        assert!(!validate_field(CustomerField::Name, "   "));
    }

    #[test]
    fn test_validated_fields_use_their_rule() {
        assert!(!validate_field(CustomerField::Email, "not-an-email"));
        assert!(validate_field(CustomerField::Email, "ana@example.com"));
        assert!(!validate_field(CustomerField::Phone, "123456789"));
        assert!(validate_field(CustomerField::Phone, "912345678"));
    }
}
