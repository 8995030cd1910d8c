//! Wizard steps, collected answers and transitions.

use crate::task::domain::{Priority, TaskDraft};
use serde::{Deserialize, Serialize};

/// Position of the wizard in its sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Step 1: what is the task?
    Activity,
    /// Step 2: is it urgent?
    Urgency,
    /// Step 3: is it important?
    Importance,
    /// Step 4: does it take under five minutes?
    Duration,
    /// The draft has been handed off; inputs are disabled until settled.
    Submitted,
}

impl WizardStep {
    /// Number of question steps.
    pub const QUESTION_COUNT: u8 = 4;

    /// Returns the one-based step number; `Submitted` counts as step 4.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Activity => 1,
            Self::Urgency => 2,
            Self::Importance => 3,
            Self::Duration | Self::Submitted => 4,
        }
    }

    /// Returns completion as a percentage for progress display.
    #[must_use]
    pub const fn progress_percent(self) -> u8 {
        self.number() * 25
    }

    const fn following(self) -> Self {
        match self {
            Self::Activity => Self::Urgency,
            Self::Urgency => Self::Importance,
            Self::Importance | Self::Duration => Self::Duration,
            Self::Submitted => Self::Submitted,
        }
    }

    const fn preceding(self) -> Self {
        match self {
            Self::Activity | Self::Urgency => Self::Activity,
            Self::Importance => Self::Urgency,
            Self::Duration => Self::Importance,
            Self::Submitted => Self::Submitted,
        }
    }
}

/// Answers accumulated across the steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardAnswers {
    /// Free-text activity, untrimmed as typed.
    pub activity: String,
    /// Step 2 answer.
    pub is_urgent: bool,
    /// Step 3 answer.
    pub is_important: bool,
    /// Step 4 answer.
    pub time_under_5_min: bool,
}

impl WizardAnswers {
    /// Recovers answers from an existing draft.
    ///
    /// The urgency and importance answers are chosen so that classifying
    /// them again reproduces the draft's priority. An unrecognised priority
    /// symbol leaves both answers unset.
    #[must_use]
    pub fn from_draft(draft: &TaskDraft) -> Self {
        let (is_urgent, is_important) = match Priority::try_from(draft.priority.as_str()) {
            Ok(Priority::Urgent) => (true, true),
            Ok(Priority::Important) => (false, true),
            Ok(Priority::Normal) | Err(_) => (false, false),
        };
        Self {
            activity: draft.activity.clone(),
            is_urgent,
            is_important,
            time_under_5_min: draft.time_under_5_min,
        }
    }

    fn has_activity(&self) -> bool {
        !self.activity.trim().is_empty()
    }

    fn to_draft(&self) -> TaskDraft {
        TaskDraft::from_answers(
            self.activity.trim(),
            self.is_urgent,
            self.is_important,
            self.time_under_5_min,
        )
    }
}

/// Wizard state: the current step plus everything answered so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskWizard {
    step: WizardStep,
    answers: WizardAnswers,
    submitted: Option<TaskDraft>,
}

impl Default for TaskWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskWizard {
    /// Creates a blank wizard at the activity step.
    #[must_use]
    pub fn new() -> Self {
        Self::with_answers(WizardAnswers::default())
    }

    /// Creates a wizard at the activity step, pre-filled from a draft.
    #[must_use]
    pub fn with_initial(draft: &TaskDraft) -> Self {
        Self::with_answers(WizardAnswers::from_draft(draft))
    }

    /// Creates a wizard at the activity step with the given answers.
    #[must_use]
    pub const fn with_answers(answers: WizardAnswers) -> Self {
        Self {
            step: WizardStep::Activity,
            answers,
            submitted: None,
        }
    }

    /// Returns the current step.
    #[must_use]
    pub const fn step(&self) -> WizardStep {
        self.step
    }

    /// Returns the answers collected so far.
    #[must_use]
    pub const fn answers(&self) -> &WizardAnswers {
        &self.answers
    }

    /// Returns `false` while a submitted draft awaits settlement.
    #[must_use]
    pub const fn inputs_enabled(&self) -> bool {
        !matches!(self.step, WizardStep::Submitted)
    }

    /// Returns `true` when `next` would advance from the current step.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::Activity => self.answers.has_activity(),
            WizardStep::Urgency | WizardStep::Importance => true,
            WizardStep::Duration | WizardStep::Submitted => false,
        }
    }

    /// Returns the draft awaiting settlement, if one was submitted.
    #[must_use]
    pub const fn submitted_draft(&self) -> Option<&TaskDraft> {
        self.submitted.as_ref()
    }

    /// Replaces the activity text. Only effective on the activity step.
    #[must_use]
    pub fn enter_activity(mut self, activity: impl Into<String>) -> Self {
        if self.step == WizardStep::Activity {
            self.answers.activity = activity.into();
        }
        self
    }

    /// Records the urgency answer. Only effective on the urgency step.
    #[must_use]
    pub const fn answer_urgency(mut self, is_urgent: bool) -> Self {
        if matches!(self.step, WizardStep::Urgency) {
            self.answers.is_urgent = is_urgent;
        }
        self
    }

    /// Records the importance answer. Only effective on the importance step.
    #[must_use]
    pub const fn answer_importance(mut self, is_important: bool) -> Self {
        if matches!(self.step, WizardStep::Importance) {
            self.answers.is_important = is_important;
        }
        self
    }

    /// Records the duration answer and submits.
    ///
    /// Either answer completes the wizard: the classified draft becomes
    /// available from [`Self::submitted_draft`] and inputs are disabled
    /// until [`Self::settle`] is called. Outside the duration step this is a
    /// no-op.
    #[must_use]
    pub fn answer_duration(mut self, time_under_5_min: bool) -> Self {
        if self.step != WizardStep::Duration {
            return self;
        }
        self.answers.time_under_5_min = time_under_5_min;
        self.submitted = Some(self.answers.to_draft());
        self.step = WizardStep::Submitted;
        self
    }

    /// Advances one step when the current step's input is complete.
    #[must_use]
    pub fn next(mut self) -> Self {
        if self.can_advance() {
            self.step = self.step.following();
        }
        self
    }

    /// Goes back one step, keeping every answer. No-op on the first step and
    /// while a submission is pending.
    #[must_use]
    pub const fn back(mut self) -> Self {
        self.step = self.step.preceding();
        self
    }

    /// Reports the outcome of the submission.
    ///
    /// Success resets the wizard to a blank activity step. Failure returns to
    /// the duration step with all answers intact, so the user can resubmit.
    /// No-op unless a submission is pending.
    #[must_use]
    pub fn settle(self, succeeded: bool) -> Self {
        if self.step != WizardStep::Submitted {
            return self;
        }
        if succeeded {
            return Self::new();
        }
        Self {
            step: WizardStep::Duration,
            answers: self.answers,
            submitted: None,
        }
    }
}
