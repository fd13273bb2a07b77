// src/wizards/application.rs

use crate::applications::models::CreateApplicationRequest;
use crate::common::helpers::is_valid_email;
use crate::common::{StoreError, ValidationResult};

const COVER_LETTER_MAX: usize = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationStep {
    Profile,
    Documents,
    Review,
}

impl ApplicationStep {
    pub const COUNT: usize = 3;

    pub fn index(&self) -> usize {
        match self {
            ApplicationStep::Profile => 0,
            ApplicationStep::Documents => 1,
            ApplicationStep::Review => 2,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ApplicationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub resume_filename: String,
    pub cover_letter: String,
}

/// Job application wizard: Profile -> Documents -> Review. Each step gates
/// `next()` with its own validation; `back()` never loses entered data.
pub struct ApplicationWizard {
    job_id: String,
    step: ApplicationStep,
    form: ApplicationForm,
}

impl ApplicationWizard {
    pub fn new(job_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            step: ApplicationStep::Profile,
            form: ApplicationForm::default(),
        }
    }

    pub fn step(&self) -> ApplicationStep {
        self.step
    }

    pub fn form(&self) -> &ApplicationForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ApplicationForm {
        &mut self.form
    }

    /// 1-based step position for progress display.
    pub fn progress(&self) -> (usize, usize) {
        (self.step.index() + 1, ApplicationStep::COUNT)
    }

    pub fn validate_step(&self, step: ApplicationStep) -> ValidationResult {
        let mut result = ValidationResult::new();
        match step {
            ApplicationStep::Profile => {
                if self.form.full_name.trim().is_empty() {
                    result.add_error("full_name", "Full name is required");
                }
                if self.form.email.trim().is_empty() {
                    result.add_error("email", "Email is required");
                } else if !is_valid_email(self.form.email.trim()) {
                    result.add_error("email", "Please enter a valid email address");
                }
            }
            ApplicationStep::Documents => {
                if self.form.resume_filename.trim().is_empty() {
                    result.add_error("resume", "A resume is required");
                }
                if self.form.cover_letter.len() > COVER_LETTER_MAX {
                    result.add_error(
                        "cover_letter",
                        "Cover letter must be less than 5000 characters",
                    );
                }
            }
            ApplicationStep::Review => {
                result.merge(self.validate_step(ApplicationStep::Profile));
                result.merge(self.validate_step(ApplicationStep::Documents));
            }
        }
        result
    }

    /// Advances to the next step if the current one validates.
    pub fn next(&mut self) -> Result<(), StoreError> {
        let validation = self.validate_step(self.step);
        if !validation.is_valid {
            return Err(StoreError::from(validation));
        }
        self.step = match self.step {
            ApplicationStep::Profile => ApplicationStep::Documents,
            ApplicationStep::Documents => ApplicationStep::Review,
            ApplicationStep::Review => ApplicationStep::Review,
        };
        Ok(())
    }

    pub fn back(&mut self) {
        self.step = match self.step {
            ApplicationStep::Profile => ApplicationStep::Profile,
            ApplicationStep::Documents => ApplicationStep::Profile,
            ApplicationStep::Review => ApplicationStep::Documents,
        };
    }

    /// Builds the submission payload. Only valid from the Review step with
    /// every step passing validation.
    pub fn submission(&self) -> Result<CreateApplicationRequest, StoreError> {
        if self.step != ApplicationStep::Review {
            return Err(StoreError::Validation(
                "Complete all steps before submitting".to_string(),
            ));
        }
        let validation = self.validate_step(ApplicationStep::Review);
        if !validation.is_valid {
            return Err(StoreError::from(validation));
        }

        let phone = self.form.phone.trim();
        let cover_letter = self.form.cover_letter.trim();
        Ok(CreateApplicationRequest {
            job_id: self.job_id.clone(),
            applicant_name: self.form.full_name.trim().to_string(),
            applicant_email: self.form.email.trim().to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            resume_filename: self.form.resume_filename.trim().to_string(),
            cover_letter: (!cover_letter.is_empty()).then(|| cover_letter.to_string()),
        })
    }
}
