#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Feature,
    Fix,
    Improvement,
    Breaking,
}

impl ChangeKind {
    pub const ALL: [ChangeKind; 4] = [
        ChangeKind::Feature,
        ChangeKind::Fix,
        ChangeKind::Improvement,
        ChangeKind::Breaking,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ChangeKind::Feature => "New",
            ChangeKind::Fix => "Fix",
            ChangeKind::Improvement => "Improved",
            ChangeKind::Breaking => "Breaking",
        }
    }

    /// Badge class; colors live in the changelog page stylesheet.
    pub fn class(self) -> &'static str {
        match self {
            ChangeKind::Feature => "change-feature",
            ChangeKind::Fix => "change-fix",
            ChangeKind::Improvement => "change-improvement",
            ChangeKind::Breaking => "change-breaking",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Change {
    pub kind: ChangeKind,
    pub description: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Release {
    pub version: &'static str,
    pub date: &'static str,
    pub title: &'static str,
    pub changes: &'static [Change],
}

const fn feature(description: &'static str) -> Change {
    Change { kind: ChangeKind::Feature, description }
}

const fn improvement(description: &'static str) -> Change {
    Change { kind: ChangeKind::Improvement, description }
}

const fn fix(description: &'static str) -> Change {
    Change { kind: ChangeKind::Fix, description }
}

/// Newest first.
pub static RELEASES: &[Release] = &[
    Release {
        version: "2.0.0",
        date: "November 11, 2024",
        title: "Major Release - Complete Redesign",
        changes: &[
            feature("Complete website redesign with modern, minimal aesthetic"),
            feature("Added Work portfolio page with category filtering"),
            feature("Added About page with team members and company values"),
            feature("Added Services page with detailed service descriptions"),
            feature("Added Blog page with article filtering"),
            feature("Added Contact page with working form"),
            feature("Project and blog detail pages with full content"),
            improvement("Implemented code splitting for faster load times"),
            improvement("Added scroll-based text reveal animations"),
            improvement("Replaced emoji icons with professional line icons"),
        ],
    },
    Release {
        version: "1.5.0",
        date: "October 15, 2024",
        title: "Enhanced Interactions",
        changes: &[
            feature("Added Benefits Stack section with sticky scroll animation"),
            feature("Implemented Logo Marquee with infinite scroll"),
            improvement("Enhanced hover states across all interactive elements"),
            improvement("Improved mobile responsiveness"),
            fix("Fixed header backdrop blur on scroll"),
        ],
    },
    Release {
        version: "1.0.0",
        date: "September 1, 2024",
        title: "Initial Launch",
        changes: &[
            feature("Launched new Mitchy website with modern design"),
            feature("Implemented design token system for consistency"),
            feature("Added Hero section with animated headline"),
            feature("Created Features showcase section"),
            feature("Built responsive navigation header"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_distinct_label_and_class() {
        let labels: Vec<_> = ChangeKind::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(labels, vec!["New", "Fix", "Improved", "Breaking"]);

        let mut classes: Vec<_> = ChangeKind::ALL.iter().map(|k| k.class()).collect();
        classes.dedup();
        assert_eq!(classes.len(), 4);
    }

    #[test]
    fn releases_are_listed_newest_first() {
        let versions: Vec<_> = RELEASES.iter().map(|r| r.version).collect();
        assert_eq!(versions, vec!["2.0.0", "1.5.0", "1.0.0"]);
        assert!(RELEASES.iter().all(|r| !r.changes.is_empty()));
    }
}
