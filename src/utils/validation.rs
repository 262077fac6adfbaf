//! Input validation utilities

use crate::constants;

/// Validate email format (basic validation)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !email.contains('@') {
        return Err("Invalid email format");
    }
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err("Invalid email format");
    }
    if parts[0].is_empty() || parts[1].is_empty() {
        return Err("Invalid email format");
    }
    if !parts[1].contains('.') {
        return Err("Invalid email domain");
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    if password.len() > 128 {
        return Err("Password must be at most 128 characters");
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        return Err("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        return Err("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_numeric()) {
        return Err("Password must contain at least one number");
    }
    Ok(())
}

/// Validate programming language
pub fn validate_language(language: &str) -> Result<(), &'static str> {
    if constants::languages::ALL.contains(&language) {
        Ok(())
    } else {
        Err("Unsupported programming language")
    }
}

/// Validate a self-registration role
pub fn validate_registration_role(role: &str) -> Result<(), &'static str> {
    if constants::roles::SELF_REGISTER.contains(&role) {
        Ok(())
    } else {
        Err("Invalid role")
    }
}

/// Validate an admin review decision for a course or tutor portfolio
pub fn validate_review_decision(status: &str) -> Result<(), &'static str> {
    match status {
        "approved" | "rejected" => Ok(()),
        _ => Err("Decision must be approved or rejected"),
    }
}

/// Validate submitted source code size
pub fn validate_source_code(code: &str) -> Result<(), &'static str> {
    if code.trim().is_empty() {
        return Err("Source code cannot be empty");
    }
    if code.len() > constants::MAX_SOURCE_CODE_SIZE {
        return Err("Source code exceeds maximum size");
    }
    Ok(())
}

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Validate a course price
pub fn validate_price(price: f64) -> Result<(), &'static str> {
    if !price.is_finite() {
        return Err("Price must be a finite number");
    }
    if price < 0.0 {
        return Err("Price cannot be negative");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("Password123").is_ok());
        assert!(validate_password("short").is_err());
        assert!(validate_password("nouppercase123").is_err());
        assert!(validate_password("NOLOWERCASE123").is_err());
        assert!(validate_password("NoNumbers").is_err());
    }

    #[test]
    fn test_validate_language() {
        assert!(validate_language("javascript").is_ok());
        assert!(validate_language("python").is_ok());
        assert!(validate_language("cpp").is_ok());
        assert!(validate_language("rust").is_err());
    }

    #[test]
    fn test_validate_registration_role() {
        assert!(validate_registration_role("user").is_ok());
        assert!(validate_registration_role("tutor").is_ok());
        assert!(validate_registration_role("admin").is_err());
    }

    #[test]
    fn test_validate_review_decision() {
        assert!(validate_review_decision("approved").is_ok());
        assert!(validate_review_decision("rejected").is_ok());
        assert!(validate_review_decision("pending").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(499.99).is_ok());
        assert!(validate_price(-1.0).is_err());
        assert!(validate_price(f64::NAN).is_err());
    }
}
