use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use regex::Regex;
use std::sync::OnceLock;

use common::error::{AppError, Res};

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+?[0-9]{7,15}$").unwrap())
}

pub fn validate_email(email: &str) -> bool {
    email_regex().is_match(email)
}

pub fn validate_phone_number(phone: &str) -> bool {
    phone_regex().is_match(phone)
}

pub fn hash_password(password: &str) -> Res<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation() {
        assert!(validate_email("user@example.com"));
        assert!(validate_email("a.b+c@sub.domain.io"));
        assert!(!validate_email("no-at-sign"));
        assert!(!validate_email("spaces in@mail.com"));
        assert!(!validate_email("missing@tld"));
    }

    #[test]
    fn phone_validation() {
        assert!(validate_phone_number("+4915112345678"));
        assert!(validate_phone_number("0881234567"));
        assert!(!validate_phone_number("12-34"));
        assert!(!validate_phone_number("not-a-number"));
    }

    #[test]
    fn password_hashing_produces_argon2_hash() {
        let hash = hash_password("hunter22").unwrap();
        assert!(hash.starts_with("$argon2"));
    }
}
