use serde::{Deserialize, Serialize};

use crate::domain::section::MAX_ANCESTOR_SECTIONS;
use crate::domain::{AppError, SectionDescriptor};

/// Everything the form collects for one progression analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProgressionRequest {
    /// Grade label. Unknown labels are accepted and resolve to no references.
    pub grade: String,
    #[serde(default)]
    pub current: SectionDescriptor,
    #[serde(default)]
    pub parents: Vec<SectionDescriptor>,
    #[serde(default)]
    pub grandparents: Vec<SectionDescriptor>,
}

impl ProgressionRequest {
    pub fn new(grade: impl Into<String>, current: SectionDescriptor) -> Self {
        Self { grade: grade.into(), current, parents: Vec::new(), grandparents: Vec::new() }
    }

    pub fn with_parents(mut self, parents: Vec<SectionDescriptor>) -> Self {
        self.parents = parents;
        self
    }

    pub fn with_grandparents(mut self, grandparents: Vec<SectionDescriptor>) -> Self {
        self.grandparents = grandparents;
        self
    }

    /// Structural validation of the collected input.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.parents.len() > MAX_ANCESTOR_SECTIONS {
            return Err(AppError::InvalidRequest(format!(
                "at most {} parent sections are supported, got {}",
                MAX_ANCESTOR_SECTIONS,
                self.parents.len()
            )));
        }
        if self.grandparents.len() > MAX_ANCESTOR_SECTIONS {
            return Err(AppError::InvalidRequest(format!(
                "at most {} grandparent sections are supported, got {}",
                MAX_ANCESTOR_SECTIONS,
                self.grandparents.len()
            )));
        }
        Ok(())
    }

    /// Generation precondition: the current section must be fully described.
    pub fn ensure_current_section(&self) -> Result<(), AppError> {
        if self.current.is_complete() { Ok(()) } else { Err(AppError::IncompleteCurrentSection) }
    }
}
