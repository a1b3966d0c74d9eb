//! Names of the stored collections.

use std::fmt;

/// One logical collection; each entity kind is stored in exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Education,
    Certificates,
    OnlineCourses,
    Skills,
    Projects,
    Updates,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Collection::Education,
        Collection::Certificates,
        Collection::OnlineCourses,
        Collection::Skills,
        Collection::Projects,
        Collection::Updates,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Education => "education",
            Collection::Certificates => "certificates",
            Collection::OnlineCourses => "onlineCourses",
            Collection::Skills => "skills",
            Collection::Projects => "projects",
            Collection::Updates => "updates",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Collection::ALL.into_iter().find(|c| c.as_str() == s)
    }

    /// Whether reads and writes keep this collection sorted newest first.
    pub fn has_canonical_order(&self) -> bool {
        matches!(self, Collection::OnlineCourses | Collection::Updates)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
