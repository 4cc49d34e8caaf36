//! View state
//!
//! Everything a front-end displays or edits lives in `ViewState`: the file prefix,
//! both clauses, their prompt inputs and suggestion lists, and the status line.
//! Front-ends own one `ViewState` and feed events to the functions in `handlers`.

use crate::command::{Clause, ClauseKind};
use serde::Serialize;

pub mod handlers;

pub const SUCCESS_TEXT: &str = "Success! Queries submitted.";
pub const FAILURE_TEXT: &str = "Error: Something went wrong.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Green,
    Red,
}

/// The single status line shown after a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultMessage {
    pub text: String,
    pub color: StatusColor,
}

impl ResultMessage {
    pub fn success() -> Self {
        Self {
            text: SUCCESS_TEXT.to_string(),
            color: StatusColor::Green,
        }
    }

    pub fn failure() -> Self {
        Self {
            text: FAILURE_TEXT.to_string(),
            color: StatusColor::Red,
        }
    }

    pub fn is_success(&self) -> bool {
        self.color == StatusColor::Green
    }
}

/// Per-clause UI: checkbox + input, the prompt box and the suggestion list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClausePanel {
    pub clause: Clause,
    pub prompt: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub file: String,
    pub sample: ClausePanel,
    pub variant: ClausePanel,
    pub result: Option<ResultMessage>,
}

impl ViewState {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            ..Self::default()
        }
    }

    pub fn panel(&self, kind: ClauseKind) -> &ClausePanel {
        match kind {
            ClauseKind::Sample => &self.sample,
            ClauseKind::Variant => &self.variant,
        }
    }

    pub fn panel_mut(&mut self, kind: ClauseKind) -> &mut ClausePanel {
        match kind {
            ClauseKind::Sample => &mut self.sample,
            ClauseKind::Variant => &mut self.variant,
        }
    }

    pub fn clause(&self, kind: ClauseKind) -> &Clause {
        &self.panel(kind).clause
    }

    /// Inputs are greyed out while their checkbox is unticked.
    pub fn input_disabled(&self, kind: ClauseKind) -> bool {
        !self.clause(kind).enabled
    }
}
