// src/wizards/posting.rs

use crate::common::{StoreError, ValidationResult, Validator};
use crate::employer::models::CreateJobRequest;
use crate::employer::validators::JobPostingValidator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostingStep {
    Basics,
    Details,
    Review,
}

impl PostingStep {
    pub const COUNT: usize = 3;

    pub fn index(&self) -> usize {
        match self {
            PostingStep::Basics => 0,
            PostingStep::Details => 1,
            PostingStep::Review => 2,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PostingForm {
    pub title: String,
    pub job_type: String,
    pub location: String,
    pub description: String,
    pub salary: String,
    pub skills: Vec<String>,
    pub experience_level: String,
}

/// Job posting wizard: Basics -> Details -> Review. Validation rules are the
/// ones the employer store enforces, applied per step so the user gets
/// feedback before reaching Review.
pub struct JobPostingWizard {
    step: PostingStep,
    form: PostingForm,
}

impl JobPostingWizard {
    pub fn new() -> Self {
        Self {
            step: PostingStep::Basics,
            form: PostingForm::default(),
        }
    }

    pub fn step(&self) -> PostingStep {
        self.step
    }

    pub fn form(&self) -> &PostingForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut PostingForm {
        &mut self.form
    }

    pub fn progress(&self) -> (usize, usize) {
        (self.step.index() + 1, PostingStep::COUNT)
    }

    fn as_request(&self) -> CreateJobRequest {
        let optional = |value: &str| {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };
        CreateJobRequest {
            title: self.form.title.trim().to_string(),
            description: optional(&self.form.description),
            location: optional(&self.form.location),
            job_type: optional(&self.form.job_type),
            salary: optional(&self.form.salary),
            experience_level: optional(&self.form.experience_level),
            skills: self.form.skills.clone(),
        }
    }

    pub fn validate_step(&self, step: PostingStep) -> ValidationResult {
        // Validate the full request once, then keep the errors belonging to
        // the given step's fields.
        let full = JobPostingValidator.validate(&self.as_request());
        if step == PostingStep::Review {
            return full;
        }

        let field_step = |field: &str| match field {
            "title" | "job_type" | "location" => PostingStep::Basics,
            _ => PostingStep::Details,
        };

        let mut result = ValidationResult::new();
        for error in full.errors {
            if field_step(&error.field) == step {
                result.add_error(&error.field, &error.message);
            }
        }
        result
    }

    pub fn next(&mut self) -> Result<(), StoreError> {
        let validation = self.validate_step(self.step);
        if !validation.is_valid {
            return Err(StoreError::from(validation));
        }
        self.step = match self.step {
            PostingStep::Basics => PostingStep::Details,
            PostingStep::Details => PostingStep::Review,
            PostingStep::Review => PostingStep::Review,
        };
        Ok(())
    }

    pub fn back(&mut self) {
        self.step = match self.step {
            PostingStep::Basics => PostingStep::Basics,
            PostingStep::Details => PostingStep::Basics,
            PostingStep::Review => PostingStep::Details,
        };
    }

    /// Produces the request for `EmployerStore::create_job`. Only valid from
    /// Review with the full validation passing.
    pub fn finish(&self) -> Result<CreateJobRequest, StoreError> {
        if self.step != PostingStep::Review {
            return Err(StoreError::Validation(
                "Complete all steps before publishing".to_string(),
            ));
        }
        let validation = self.validate_step(PostingStep::Review);
        if !validation.is_valid {
            return Err(StoreError::from(validation));
        }
        Ok(self.as_request())
    }
}

impl Default for JobPostingWizard {
    fn default() -> Self {
        Self::new()
    }
}
