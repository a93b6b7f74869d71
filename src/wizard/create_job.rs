use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

use super::WizardError;

/// Steps of the "create new project" dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    BasicInfo,
    MarketDetails,
    ValidationSetup,
}

impl WizardStep {
    pub const COUNT: usize = 3;

    /// 1-based position shown as "STEP n OF 3"
    pub fn number(self) -> usize {
        match self {
            WizardStep::BasicInfo => 1,
            WizardStep::MarketDetails => 2,
            WizardStep::ValidationSetup => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "BASIC INFO",
            WizardStep::MarketDetails => "MARKET DETAILS",
            WizardStep::ValidationSetup => "VALIDATION SETUP",
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            WizardStep::BasicInfo => Some(WizardStep::MarketDetails),
            WizardStep::MarketDetails => Some(WizardStep::ValidationSetup),
            WizardStep::ValidationSetup => None,
        }
    }

    fn previous(self) -> Option<Self> {
        match self {
            WizardStep::BasicInfo => None,
            WizardStep::MarketDetails => Some(WizardStep::BasicInfo),
            WizardStep::ValidationSetup => Some(WizardStep::MarketDetails),
        }
    }

    /// Draft fields that must be valid before leaving this step
    fn fields(self) -> &'static [&'static str] {
        match self {
            WizardStep::BasicInfo => &["title", "description", "industry"],
            WizardStep::MarketDetails => &["target_market", "budget", "timeline"],
            WizardStep::ValidationSetup => &[],
        }
    }
}

/// A submitted project idea; also the JSON body of `POST /api/projects`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, Validate)]
pub struct ProjectDraft {
    #[validate(length(min = 3, max = 80, message = "Title must be between 3 and 80 characters"))]
    pub title: String,

    #[validate(length(min = 10, max = 500, message = "Description must be between 10 and 500 characters"))]
    pub description: String,

    #[validate(length(min = 2, message = "Industry is required"))]
    pub industry: String,

    #[validate(length(min = 2, message = "Target market is required"))]
    pub target_market: String,

    #[validate(length(min = 1, message = "Budget is required"))]
    pub budget: String,

    #[validate(length(min = 1, message = "Timeline is required"))]
    pub timeline: String,
}

impl ProjectDraft {
    fn trimmed(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            industry: self.industry.trim().to_string(),
            target_market: self.target_market.trim().to_string(),
            budget: self.budget.trim().to_string(),
            timeline: self.timeline.trim().to_string(),
        }
    }

    /// Messages for failing fields, restricted to `only` when given
    pub(crate) fn field_messages(&self, only: Option<&[&str]>) -> Vec<String> {
        let Err(errors) = self.trimmed().validate() else {
            return Vec::new();
        };

        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .filter(|(field, _)| only.map_or(true, |names| names.iter().any(|n| field.to_string() == *n)))
            .flat_map(|(field, errors)| {
                let field = field.to_string();
                errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("Validation error in field: {}", field))
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        messages.sort();
        messages
    }
}

/// Multi-step form state of the create-project dialog
#[derive(Debug, Clone, Default)]
pub struct CreateJobWizard {
    step: WizardStep,
    draft: ProjectDraft,
}

impl CreateJobWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &ProjectDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ProjectDraft {
        &mut self.draft
    }

    /// Move forward once the current step's fields validate
    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        let messages = self.draft.field_messages(Some(self.step.fields()));
        if !messages.is_empty() {
            return Err(WizardError::Incomplete {
                step: self.step,
                messages,
            });
        }
        if let Some(next) = self.step.next() {
            debug!("Wizard: {} -> {}", self.step.label(), next.label());
            self.step = next;
        }
        Ok(self.step)
    }

    /// Move back; stays on the first step
    pub fn back(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    /// Validate everything, hand back the trimmed draft, and reset the dialog
    pub fn submit(&mut self) -> Result<ProjectDraft, WizardError> {
        if self.step != WizardStep::ValidationSetup {
            return Err(WizardError::NotOnLastStep(self.step));
        }
        let messages = self.draft.field_messages(None);
        if !messages.is_empty() {
            return Err(WizardError::Invalid(messages));
        }
        let draft = self.draft.trimmed();
        *self = Self::default();
        Ok(draft)
    }

    /// Close without submitting
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
