use serde::{Deserialize, Serialize};

/// Maximum number of parent (or grandparent) sections per request.
pub const MAX_ANCESTOR_SECTIONS: usize = 3;

/// A curriculum section: a short code plus a free-text overview.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionDescriptor {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub overview: String,
}

impl SectionDescriptor {
    pub fn new(id: impl Into<String>, overview: impl Into<String>) -> Self {
        Self { id: id.into(), overview: overview.into() }
    }

    /// Whether both fields carry text.
    pub fn is_complete(&self) -> bool {
        !self.id.is_empty() && !self.overview.is_empty()
    }

    /// Pair up independently collected identifier and overview lists.
    ///
    /// The shorter list is padded with empty strings so that no entry is lost.
    pub fn zip_padded(ids: &[String], overviews: &[String]) -> Vec<SectionDescriptor> {
        let len = ids.len().max(overviews.len());
        (0..len)
            .map(|i| SectionDescriptor {
                id: ids.get(i).cloned().unwrap_or_default(),
                overview: overviews.get(i).cloned().unwrap_or_default(),
            })
            .collect()
    }
}

/// Identifier and overview strings of a group of ancestor sections.
///
/// Identifiers and overviews are filtered independently: an empty identifier
/// drops only the identifier, an empty overview drops only the overview.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinedSections {
    pub ids: String,
    pub overviews: String,
}

impl JoinedSections {
    pub fn from_sections(sections: &[SectionDescriptor]) -> Self {
        Self {
            ids: join_non_empty(sections.iter().map(|s| s.id.as_str())),
            overviews: join_non_empty(sections.iter().map(|s| s.overview.as_str())),
        }
    }
}

/// Join the non-empty values with newlines, preserving order.
pub fn join_non_empty<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    values.into_iter().filter(|value| !value.is_empty()).collect::<Vec<_>>().join("\n")
}
