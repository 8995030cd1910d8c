//! Four-step task classification wizard.
//!
//! The wizard is a plain value: every transition consumes the current state
//! and returns the next one, so it can be driven and tested without any
//! presentation layer. It performs no I/O; a completed draft is exposed via
//! [`TaskWizard::submitted_draft`] for the caller to persist, and the caller
//! reports back through [`TaskWizard::settle`].

mod machine;

pub use machine::{TaskWizard, WizardAnswers, WizardStep};
