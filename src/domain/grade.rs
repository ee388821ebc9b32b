use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// Grade levels offered by the input form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradeLevel {
    Kindergarten,
    Grade1,
    Grade2,
    Grade3,
    Grade4,
    Grade5,
    Grade6,
    Grade7,
    Grade8,
    Algebra1,
    Algebra2,
    Geometry,
}

/// Grade bands that share one set of progression documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradeBand {
    /// Kindergarten through Grade 5.
    Elementary,
    /// Grades 6 through 8.
    Middle,
    /// Algebra 1, Algebra 2, and Geometry.
    HighSchool,
}

impl GradeLevel {
    /// All grade levels in form display order.
    pub const ALL: [GradeLevel; 12] = [
        GradeLevel::Kindergarten,
        GradeLevel::Grade1,
        GradeLevel::Grade2,
        GradeLevel::Grade3,
        GradeLevel::Grade4,
        GradeLevel::Grade5,
        GradeLevel::Grade6,
        GradeLevel::Grade7,
        GradeLevel::Grade8,
        GradeLevel::Algebra1,
        GradeLevel::Algebra2,
        GradeLevel::Geometry,
    ];

    /// Exact label used by the form and interpolated into prompts.
    pub fn label(&self) -> &'static str {
        match self {
            GradeLevel::Kindergarten => "Kindergarten",
            GradeLevel::Grade1 => "Grade 1",
            GradeLevel::Grade2 => "Grade 2",
            GradeLevel::Grade3 => "Grade 3",
            GradeLevel::Grade4 => "Grade 4",
            GradeLevel::Grade5 => "Grade 5",
            GradeLevel::Grade6 => "Grade 6",
            GradeLevel::Grade7 => "Grade 7",
            GradeLevel::Grade8 => "Grade 8",
            GradeLevel::Algebra1 => "Algebra 1",
            GradeLevel::Algebra2 => "Algebra 2",
            GradeLevel::Geometry => "Geometry",
        }
    }

    /// Parse a grade from its exact label. Matching is case-sensitive.
    pub fn from_label(label: &str) -> Option<GradeLevel> {
        GradeLevel::ALL.into_iter().find(|grade| grade.label() == label)
    }

    pub fn band(&self) -> GradeBand {
        match self {
            GradeLevel::Kindergarten
            | GradeLevel::Grade1
            | GradeLevel::Grade2
            | GradeLevel::Grade3
            | GradeLevel::Grade4
            | GradeLevel::Grade5 => GradeBand::Elementary,
            GradeLevel::Grade6 | GradeLevel::Grade7 | GradeLevel::Grade8 => GradeBand::Middle,
            GradeLevel::Algebra1 | GradeLevel::Algebra2 | GradeLevel::Geometry => {
                GradeBand::HighSchool
            }
        }
    }
}

impl GradeBand {
    pub fn display_name(&self) -> &'static str {
        match self {
            GradeBand::Elementary => "Elementary (K-5)",
            GradeBand::Middle => "Middle School (6-8)",
            GradeBand::HighSchool => "High School",
        }
    }
}

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for GradeLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GradeLevel::from_label(s)
            .ok_or_else(|| AppError::InvalidRequest(format!("Unknown grade level '{}'", s)))
    }
}
