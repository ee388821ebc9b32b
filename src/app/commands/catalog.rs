//! Grade and reference-document listings.

use crate::domain::{GradeLevel, ReferenceDocumentSet, resolve_references};

/// One row of the grade listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeSummary {
    pub label: &'static str,
    pub band: &'static str,
    pub reference_count: usize,
}

/// All supported grades in form order.
pub fn list_grades() -> Vec<GradeSummary> {
    GradeLevel::ALL
        .iter()
        .map(|grade| GradeSummary {
            label: grade.label(),
            band: grade.band().display_name(),
            reference_count: ReferenceDocumentSet::for_band(grade.band()).len(),
        })
        .collect()
}

/// Reference documents for a grade label; empty for unknown labels.
pub fn references(grade: &str) -> ReferenceDocumentSet {
    resolve_references(grade)
}
