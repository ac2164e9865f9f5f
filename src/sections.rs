use std::collections::HashSet;

use thiserror::Error;

/// One anchored block of the page. `id` doubles as the DOM anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

static PORTFOLIO_SECTIONS: [Section; 6] = [
    Section {
        id: "home",
        label: "Home",
    },
    Section {
        id: "about",
        label: "About",
    },
    Section {
        id: "education",
        label: "Education",
    },
    Section {
        id: "projects",
        label: "Projects",
    },
    Section {
        id: "skills",
        label: "Skills",
    },
    Section {
        id: "contact",
        label: "Contact",
    },
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Section registry must contain at least one section")]
    Empty,
    #[error("Duplicate section id: {0}")]
    DuplicateId(&'static str),
}

/// Ordered, read-only list of the page sections.
#[derive(Debug, Clone, Copy)]
pub struct SectionRegistry {
    sections: &'static [Section],
}

impl SectionRegistry {
    pub fn new(sections: &'static [Section]) -> Result<Self, RegistryError> {
        if sections.is_empty() {
            return Err(RegistryError::Empty);
        }
        let mut seen = HashSet::new();
        for section in sections {
            if !seen.insert(section.id) {
                return Err(RegistryError::DuplicateId(section.id));
            }
        }
        Ok(Self { sections })
    }

    pub const fn portfolio() -> Self {
        Self {
            sections: &PORTFOLIO_SECTIONS,
        }
    }

    pub fn list(&self) -> &'static [Section] {
        self.sections
    }

    pub fn find(&self, id: &str) -> Option<&'static Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn first(&self) -> &'static Section {
        // non-empty is checked in `new` and holds for the built-in table
        &self.sections[0]
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::portfolio()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portfolio_registry_is_valid() {
        let registry = SectionRegistry::new(&PORTFOLIO_SECTIONS).expect("built-in table is valid");
        let ids = registry.list().iter().map(|s| s.id).collect::<Vec<_>>();
        assert_eq!(
            ids,
            vec!["home", "about", "education", "projects", "skills", "contact"]
        );
        assert_eq!(registry.first().id, "home");
    }

    #[test]
    fn test_find() {
        let registry = SectionRegistry::portfolio();
        assert_eq!(registry.find("skills").map(|s| s.label), Some("Skills"));
        assert!(registry.find("blog").is_none());
        assert!(registry.find("").is_none());
    }

    #[test]
    fn test_rejects_empty_table() {
        static EMPTY: [Section; 0] = [];
        assert_eq!(
            SectionRegistry::new(&EMPTY).unwrap_err(),
            RegistryError::Empty
        );
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        static DUPES: [Section; 3] = [
            Section {
                id: "home",
                label: "Home",
            },
            Section {
                id: "about",
                label: "About",
            },
            Section {
                id: "home",
                label: "Home again",
            },
        ];
        assert_eq!(
            SectionRegistry::new(&DUPES).unwrap_err(),
            RegistryError::DuplicateId("home")
        );
    }
}
