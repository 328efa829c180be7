use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Work,
    Achievement,
    Education,
}

impl EntryKind {
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Work => "Work",
            EntryKind::Achievement => "Achievement",
            EntryKind::Education => "Education",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub id: u32,
    pub year: u16,
    pub title: &'static str,
    pub organization: &'static str,
    pub description: &'static str,
    pub kind: EntryKind,
    pub highlights: &'static [&'static str],
}

// newest first, which is also display order
pub fn timeline() -> &'static [TimelineEntry] {
    TIMELINE
}

static TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        id: 1,
        year: 2024,
        title: "Senior Full Stack Developer",
        organization: "Tech Company Inc.",
        description: "Leading development of scalable web applications and the automation tooling around them.",
        kind: EntryKind::Work,
        highlights: &[
            "Moved the storefront to server-rendered pages",
            "Introduced end-to-end tests in CI",
        ],
    },
    TimelineEntry {
        id: 2,
        year: 2023,
        title: "AWS Certified Developer",
        organization: "Amazon Web Services",
        description: "Achieved the AWS Certified Developer - Associate certification.",
        kind: EntryKind::Achievement,
        highlights: &[],
    },
    TimelineEntry {
        id: 3,
        year: 2022,
        title: "Full Stack Developer",
        organization: "Startup XYZ",
        description: "Built multiple web applications from concept to deployment.",
        kind: EntryKind::Work,
        highlights: &["Shipped three products in eighteen months"],
    },
    TimelineEntry {
        id: 4,
        year: 2021,
        title: "Computer Science Degree",
        organization: "University Name",
        description: "Bachelor of Science in Computer Science with honors.",
        kind: EntryKind::Education,
        highlights: &["Thesis on neuroevolution for game agents"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_is_newest_first() {
        assert!(timeline().windows(2).all(|w| w[0].year >= w[1].year));
    }
}
