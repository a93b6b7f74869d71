//! Form state for creating a new venture project.
pub mod create_job;
pub mod project_form;

use std::fmt;

pub use create_job::{CreateJobWizard, ProjectDraft, WizardStep};
pub use project_form::{depth_label, next_run, Frequency, Module, ProjectCreationForm, WorkflowStep};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    /// Current step has invalid fields
    Incomplete { step: WizardStep, messages: Vec<String> },

    /// Submission failed validation
    Invalid(Vec<String>),

    /// Submit pressed before the final step
    NotOnLastStep(WizardStep),

    UnknownStep(String),

    StepOutOfRange { index: usize, len: usize },
}

impl fmt::Display for WizardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardError::Incomplete { step, messages } => {
                write!(f, "Step {} is incomplete: {}", step.label(), messages.join(", "))
            }
            WizardError::Invalid(messages) => write!(f, "Invalid project: {}", messages.join(", ")),
            WizardError::NotOnLastStep(step) => {
                write!(f, "Cannot submit from step {} of {}", step.number(), WizardStep::COUNT)
            }
            WizardError::UnknownStep(id) => write!(f, "Workflow step not found: {}", id),
            WizardError::StepOutOfRange { index, len } => {
                write!(f, "Workflow index {} out of range (len {})", index, len)
            }
        }
    }
}

impl std::error::Error for WizardError {}
