use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use super::WizardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    Daily,
    #[default]
    Weekly,
    Monthly,
    OneOff,
}

/// Date of the next scheduled research run after `from`; `None` for one-off projects
pub fn next_run(frequency: Frequency, from: NaiveDate) -> Option<NaiveDate> {
    match frequency {
        Frequency::Daily => from.checked_add_days(Days::new(1)),
        Frequency::Weekly => from.checked_add_days(Days::new(7)),
        // Jan 31 -> Feb 28/29
        Frequency::Monthly => from.checked_add_months(Months::new(1)),
        Frequency::OneOff => None,
    }
}

/// Label for the research depth slider (0..=100)
pub fn depth_label(depth: u8) -> &'static str {
    match depth {
        0..=32 => "Quick",
        33..=66 => "Deep",
        _ => "Expert",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchModules {
    pub validation: bool,
    pub solutions: bool,
    pub infrastructure: bool,
}

impl Default for ResearchModules {
    fn default() -> Self {
        Self {
            validation: true,
            solutions: true,
            infrastructure: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Module {
    Validation,
    Solutions,
    Infrastructure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowStep {
    pub id: String,
    pub title: String,
    pub requires_review: bool,
}

impl WorkflowStep {
    pub fn description(&self) -> &'static str {
        if self.requires_review {
            "User Review Required"
        } else {
            "Automated Step"
        }
    }
}

fn default_workflow() -> Vec<WorkflowStep> {
    [
        ("1", "Idea Validation", true),
        ("2", "Solution Exploration", true),
        ("3", "Infrastructure Planning", false),
    ]
    .into_iter()
    .map(|(id, title, requires_review)| WorkflowStep {
        id: id.to_string(),
        title: title.to_string(),
        requires_review,
    })
    .collect()
}

/// The full-page project creation form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProjectCreationForm {
    #[validate(length(max = 2000, message = "Idea description must be at most 2000 characters"))]
    pub idea_description: String,
    pub frequency: Frequency,
    #[validate(range(max = 100, message = "Research depth must be between 0 and 100"))]
    pub research_depth: u8,
    pub modules: ResearchModules,
    pub workflow: Vec<WorkflowStep>,
    pub additional_context: String,
}

impl Default for ProjectCreationForm {
    fn default() -> Self {
        Self {
            idea_description: String::new(),
            frequency: Frequency::default(),
            research_depth: 50,
            modules: ResearchModules::default(),
            workflow: default_workflow(),
            additional_context: String::new(),
        }
    }
}

impl ProjectCreationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.research_depth = depth.min(100);
    }

    pub fn depth_label(&self) -> &'static str {
        depth_label(self.research_depth)
    }

    pub fn next_run(&self, from: NaiveDate) -> Option<NaiveDate> {
        next_run(self.frequency, from)
    }

    pub fn toggle_module(&mut self, module: Module) {
        let flag = match module {
            Module::Validation => &mut self.modules.validation,
            Module::Solutions => &mut self.modules.solutions,
            Module::Infrastructure => &mut self.modules.infrastructure,
        };
        *flag = !*flag;
    }

    pub fn toggle_review(&mut self, step_id: &str) -> Result<bool, WizardError> {
        let step = self
            .workflow
            .iter_mut()
            .find(|s| s.id == step_id)
            .ok_or_else(|| WizardError::UnknownStep(step_id.to_string()))?;
        step.requires_review = !step.requires_review;
        Ok(step.requires_review)
    }

    /// Drag-and-drop reorder of workflow steps
    pub fn move_step(&mut self, from: usize, to: usize) -> Result<(), WizardError> {
        let len = self.workflow.len();
        if from >= len || to >= len {
            return Err(WizardError::StepOutOfRange { index: from.max(to), len });
        }
        let step = self.workflow.remove(from);
        self.workflow.insert(to, step);
        Ok(())
    }

    /// Needs an idea and at least one research module
    pub fn submit(&self) -> Result<&Self, WizardError> {
        let mut messages = Vec::new();
        if self.idea_description.trim().is_empty() {
            messages.push("Idea description is required".to_string());
        }
        let ResearchModules {
            validation,
            solutions,
            infrastructure,
        } = self.modules;
        if !(validation || solutions || infrastructure) {
            messages.push("Select at least one research module".to_string());
        }
        if !messages.is_empty() {
            return Err(WizardError::Invalid(messages));
        }

        info!(
            "Project submitted: frequency={:?} depth={} ({}) steps={}",
            self.frequency,
            self.research_depth,
            self.depth_label(),
            self.workflow.len()
        );
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_labels() {
        assert_eq!(depth_label(0), "Quick");
        assert_eq!(depth_label(32), "Quick");
        assert_eq!(depth_label(33), "Deep");
        assert_eq!(depth_label(66), "Deep");
        assert_eq!(depth_label(67), "Expert");
        assert_eq!(ProjectCreationForm::new().depth_label(), "Deep");
    }

    #[test]
    fn review_toggle_changes_the_step_description() {
        let mut form = ProjectCreationForm::new();
        assert_eq!(form.toggle_review("3"), Ok(true));
        assert_eq!(form.workflow[2].description(), "User Review Required");
        assert!(form.toggle_review("9").is_err());
    }

    #[test]
    fn steps_reorder() {
        let mut form = ProjectCreationForm::new();
        form.move_step(2, 0).expect("in range");
        let ids: Vec<_> = form.workflow.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
        assert!(form.move_step(0, 3).is_err());
    }

    #[test]
    fn submit_needs_an_idea_and_a_module() {
        let mut form = ProjectCreationForm::new();
        form.toggle_module(Module::Validation);
        form.toggle_module(Module::Solutions);

        let Err(WizardError::Invalid(messages)) = form.submit() else {
            panic!("expected validation failure");
        };
        assert_eq!(messages.len(), 2);

        form.idea_description = "Marketplace for used lab equipment".to_string();
        form.toggle_module(Module::Infrastructure);
        assert!(form.submit().is_ok());
    }

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn next_run_follows_the_frequency() {
        let from = ymd(2024, 1, 31);
        assert_eq!(next_run(Frequency::Daily, from), Some(ymd(2024, 2, 1)));
        assert_eq!(next_run(Frequency::Weekly, from), Some(ymd(2024, 2, 7)));
        assert_eq!(next_run(Frequency::Monthly, from), Some(ymd(2024, 2, 29)));
        assert_eq!(next_run(Frequency::Monthly, ymd(2024, 12, 15)), Some(ymd(2025, 1, 15)));
        assert_eq!(next_run(Frequency::OneOff, from), None);
    }

    #[test]
    fn form_defaults_to_a_weekly_schedule() {
        let form = ProjectCreationForm::new();
        assert_eq!(form.next_run(ymd(2024, 3, 1)), Some(ymd(2024, 3, 8)));
    }

    #[test]
    fn depth_above_one_hundred_fails_validation() {
        let form = ProjectCreationForm {
            research_depth: 150,
            ..ProjectCreationForm::new()
        };
        assert!(form.validate().is_err());
        assert!(ProjectCreationForm::new().validate().is_ok());
    }
}
