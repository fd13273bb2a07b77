// src/wizards/tests.rs

#[cfg(test)]
mod tests {
    use crate::wizards::application::{ApplicationStep, ApplicationWizard};
    use crate::wizards::posting::{JobPostingWizard, PostingStep};

    fn filled_application_wizard() -> ApplicationWizard {
        let mut wizard = ApplicationWizard::new("job-1");
        let form = wizard.form_mut();
        form.full_name = "Jane Doe".to_string();
        form.email = "jane@example.com".to_string();
        form.resume_filename = "jane-doe.pdf".to_string();
        form.cover_letter = "I would be a great fit.".to_string();
        wizard
    }

    #[test]
    fn application_wizard_blocks_next_on_invalid_step() {
        let mut wizard = ApplicationWizard::new("job-1");

        assert!(wizard.next().is_err(), "empty profile must not advance");
        assert_eq!(wizard.step(), ApplicationStep::Profile);

        wizard.form_mut().full_name = "Jane".to_string();
        wizard.form_mut().email = "not-an-email".to_string();
        assert!(wizard.next().is_err());
        assert_eq!(wizard.step(), ApplicationStep::Profile);
    }

    #[test]
    fn application_wizard_walks_forward_and_back_without_losing_data() {
        let mut wizard = filled_application_wizard();

        wizard.next().unwrap();
        assert_eq!(wizard.step(), ApplicationStep::Documents);
        wizard.next().unwrap();
        assert_eq!(wizard.step(), ApplicationStep::Review);

        wizard.back();
        wizard.back();
        assert_eq!(wizard.step(), ApplicationStep::Profile);
        assert_eq!(wizard.form().full_name, "Jane Doe");
        assert_eq!(wizard.form().resume_filename, "jane-doe.pdf");
    }

    #[test]
    fn application_submission_only_from_review() {
        let mut wizard = filled_application_wizard();
        assert!(wizard.submission().is_err());

        wizard.next().unwrap();
        wizard.next().unwrap();
        let request = wizard.submission().unwrap();

        assert_eq!(request.job_id, "job-1");
        assert_eq!(request.applicant_name, "Jane Doe");
        assert_eq!(request.cover_letter.as_deref(), Some("I would be a great fit."));
        assert!(request.phone.is_none(), "empty phone becomes None");
    }

    #[test]
    fn application_wizard_reports_progress() {
        let mut wizard = filled_application_wizard();
        assert_eq!(wizard.progress(), (1, 3));
        wizard.next().unwrap();
        assert_eq!(wizard.progress(), (2, 3));
    }

    #[test]
    fn oversized_cover_letter_blocks_the_documents_step() {
        let mut wizard = filled_application_wizard();
        wizard.next().unwrap();
        wizard.form_mut().cover_letter = "x".repeat(5001);

        assert!(wizard.next().is_err());
        assert_eq!(wizard.step(), ApplicationStep::Documents);
    }

    fn filled_posting_wizard() -> JobPostingWizard {
        let mut wizard = JobPostingWizard::new();
        let form = wizard.form_mut();
        form.title = "Backend Engineer".to_string();
        form.job_type = "full-time".to_string();
        form.location = "Quebec City".to_string();
        form.description =
            "Own the billing and matching services end to end, in Rust.".to_string();
        form.salary = "$95,000".to_string();
        form.experience_level = "senior".to_string();
        form.skills = vec!["rust".to_string(), "sql".to_string()];
        wizard
    }

    #[test]
    fn posting_wizard_validates_basics_before_details() {
        let mut wizard = JobPostingWizard::new();
        wizard.form_mut().job_type = "freelance".to_string();

        // Title missing and job type invalid: both are Basics errors.
        let validation = wizard.validate_step(PostingStep::Basics);
        assert!(!validation.is_valid);
        assert_eq!(validation.errors.len(), 2);
        assert!(wizard.next().is_err());
    }

    #[test]
    fn posting_wizard_keeps_details_errors_out_of_basics() {
        let mut wizard = JobPostingWizard::new();
        wizard.form_mut().title = "Backend Engineer".to_string();
        wizard.form_mut().description = "too short".to_string();

        // The short description belongs to Details, so Basics passes.
        wizard.next().unwrap();
        assert_eq!(wizard.step(), PostingStep::Details);
        assert!(wizard.next().is_err());
    }

    #[test]
    fn posting_wizard_finish_produces_a_valid_request() {
        let mut wizard = filled_posting_wizard();
        wizard.next().unwrap();
        wizard.next().unwrap();

        let request = wizard.finish().unwrap();
        assert_eq!(request.title, "Backend Engineer");
        assert_eq!(request.job_type.as_deref(), Some("full-time"));
        assert_eq!(request.skills.len(), 2);
    }

    #[test]
    fn posting_wizard_finish_rejected_before_review() {
        let wizard = filled_posting_wizard();
        assert!(wizard.finish().is_err());
    }
}
