//! Grade-to-progression-document lookup.

use crate::domain::{GradeBand, GradeLevel};

const ELEMENTARY_DOCUMENTS: [&str; 7] = [
    "K-5 CC & OA Progressions.pdf",
    "K-5 NBT Progressions.pdf",
    "K-5 MD (Data) Progression.pdf",
    "K-5 MD (Measurement) Progression.pdf",
    "K-6 Geometry Progression.pdf",
    "3-5 Progression on Operations—Fractions.pdf",
    "3-5 NBT Progressions.pdf",
];

const MIDDLE_DOCUMENTS: [&str; 6] = [
    "6-7 RP Progression.pdf",
    "6-8 EE Progression.pdf",
    "6-8 SP Progression.pdf",
    "6-8 NS & HS N-RN Progression.pdf",
    "Geometry Progression Doc 7-12.pdf",
    "7-HS Geometry Progression.pdf",
];

const HIGH_SCHOOL_DOCUMENTS: [&str; 8] = [
    "6-8 NS & HS N-RN Progression.pdf",
    "8-HS Functions Progression.pdf",
    "HS Algebra Progression.pdf",
    "HS.S Progression.pdf",
    "HS.N-Q - Quantity Progression.pdf",
    "HS Modeling Progression.pdf",
    "Geometry Progression Doc 7-12.pdf",
    "7-HS Geometry Progression.pdf",
];

/// Ordered list of progression document names for a grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReferenceDocumentSet {
    documents: &'static [&'static str],
}

impl ReferenceDocumentSet {
    pub fn for_band(band: GradeBand) -> Self {
        let documents: &'static [&'static str] = match band {
            GradeBand::Elementary => &ELEMENTARY_DOCUMENTS,
            GradeBand::Middle => &MIDDLE_DOCUMENTS,
            GradeBand::HighSchool => &HIGH_SCHOOL_DOCUMENTS,
        };
        Self { documents }
    }

    pub fn documents(&self) -> &'static [&'static str] {
        self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Document names joined one per line.
    pub fn to_lines(&self) -> String {
        self.documents.join("\n")
    }
}

/// Resolve the reference documents for a grade label.
///
/// Labels outside the known set resolve to an empty set rather than an error.
pub fn resolve_references(grade: &str) -> ReferenceDocumentSet {
    GradeLevel::from_label(grade)
        .map(|grade| ReferenceDocumentSet::for_band(grade.band()))
        .unwrap_or_default()
}
