// src/account/validators.rs

use crate::common::helpers::is_valid_email;
use crate::common::{ValidationResult, Validator};

use super::models::LoginRequest;

// ============================================================================
// Login Validators
// ============================================================================

pub struct LoginValidator;

impl Validator<LoginRequest> for LoginValidator {
    fn validate(&self, data: &LoginRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.email.trim().is_empty() {
            result.add_error("email", "Email is required");
        } else if !is_valid_email(data.email.trim()) {
            result.add_error("email", "Please enter a valid email address");
        }

        if data.password.is_empty() {
            result.add_error("password", "Password is required");
        }

        result
    }
}
