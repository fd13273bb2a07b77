// src/employer/validators.rs

use std::collections::HashSet;

use crate::common::{ValidationResult, Validator};

use super::models::CreateJobRequest;

// ============================================================================
// Job Posting Validators
// ============================================================================

pub struct JobPostingValidator;

impl Validator<CreateJobRequest> for JobPostingValidator {
    fn validate(&self, data: &CreateJobRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        // Validate title
        if data.title.trim().is_empty() {
            result.add_error("title", "Job title is required");
        } else if data.title.len() > 255 {
            result.add_error("title", "Job title must be less than 255 characters");
        }

        // Validate description length if provided
        if let Some(description) = &data.description {
            if description.trim().len() < 30 {
                result.add_error(
                    "description",
                    "Description must be at least 30 characters",
                );
            } else if description.len() > 10000 {
                result.add_error(
                    "description",
                    "Description must be less than 10000 characters",
                );
            }
        }

        // Validate location length if provided
        if let Some(location) = &data.location {
            if location.len() > 255 {
                result.add_error("location", "Location must be less than 255 characters");
            }
        }

        // Validate job_type if provided
        if let Some(job_type) = &data.job_type {
            let valid_types = HashSet::from([
                "full-time",
                "part-time",
                "contract",
                "temporary",
                "internship",
            ]);
            if !valid_types.contains(job_type.as_str()) {
                result.add_error("job_type", "Invalid job type");
            }
        }

        // Validate experience_level if provided
        if let Some(level) = &data.experience_level {
            let valid_levels = HashSet::from(["entry", "mid", "senior", "lead", "executive"]);
            if !valid_levels.contains(level.as_str()) {
                result.add_error("experience_level", "Invalid experience level");
            }
        }

        // Validate skills
        if data.skills.len() > 20 {
            result.add_error("skills", "Cannot list more than 20 skills");
        }
        for (index, skill) in data.skills.iter().enumerate() {
            if skill.trim().is_empty() {
                result.add_error(&format!("skills[{}]", index), "Skill cannot be empty");
            }
        }

        result
    }
}

// ============================================================================
// Application Status Validators
// ============================================================================

pub struct ApplicationStatusValidator;

impl Validator<String> for ApplicationStatusValidator {
    fn validate(&self, status: &String) -> ValidationResult {
        let mut result = ValidationResult::new();

        let valid_statuses = HashSet::from([
            "pending",
            "reviewing",
            "shortlisted",
            "interview",
            "interviewed",
            "rejected",
            "hired",
        ]);
        if !valid_statuses.contains(status.to_lowercase().as_str()) {
            result.add_error("status", "Invalid application status");
        }

        result
    }
}
