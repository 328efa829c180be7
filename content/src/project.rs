use std::fmt;

use serde::Serialize;

use crate::filter::{Category, Featured, Filterable};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ProjectCategory {
    FullStack,
    AiMl,
    Automation,
    Frontend,
    Backend,
}

impl Category for ProjectCategory {
    const ALL: &'static [Self] = &[
        Self::FullStack,
        Self::AiMl,
        Self::Automation,
        Self::Frontend,
        Self::Backend,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::FullStack => "Full Stack",
            Self::AiMl => "AI/ML",
            Self::Automation => "Automation",
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Completed,
    #[serde(rename = "wip")]
    InProgress,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "Work in Progress",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Project {
    pub id: u32,
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub category: ProjectCategory,
    pub repository: Option<&'static str>,
    pub demo: Option<&'static str>,
    pub status: ProjectStatus,
    pub featured: bool,
    pub year: u16,
}

impl Project {
    pub fn is_wip(&self) -> bool {
        self.status == ProjectStatus::InProgress
    }

    // the first `n` tags plus how many were left out, for compact cards
    pub fn tag_preview(&self, n: usize) -> (&'static [&'static str], usize) {
        let shown = &self.tags[..self.tags.len().min(n)];
        (shown, self.tags.len() - shown.len())
    }
}

impl Filterable for Project {
    type Category = ProjectCategory;

    fn title(&self) -> &str {
        self.title
    }

    fn description(&self) -> &str {
        self.description
    }

    fn tags(&self) -> &[&str] {
        self.tags
    }

    fn category(&self) -> ProjectCategory {
        self.category
    }
}

impl Featured for Project {
    fn featured(&self) -> bool {
        self.featured
    }
}

pub fn projects() -> &'static [Project] {
    PROJECTS
}

pub fn featured_projects() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|p| p.featured)
}

pub fn find_project(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        slug: "ecommerce-platform",
        title: "E-Commerce Platform",
        description: "A full-stack e-commerce solution with React, Node.js, and MongoDB. Features include user authentication, payment processing, inventory management, and an admin dashboard.",
        long_description: "Built to handle everything from product catalog management to order processing. The frontend uses React with Redux for state management, while the backend is powered by Node.js and Express. It includes real-time inventory updates, secure payments through Stripe, email notifications, and a complete admin panel.",
        image: "/assets/projects/ecommerce.webp",
        tags: &["React", "Node.js", "MongoDB", "Stripe", "Redux", "Express"],
        category: ProjectCategory::FullStack,
        repository: Some("https://github.com/OmarAhsanCode/ecommerce"),
        demo: Some("https://ecommerce-demo.com"),
        status: ProjectStatus::Completed,
        featured: true,
        year: 2024,
    },
    Project {
        id: 2,
        slug: "neat-flappy",
        title: "NEAT Neuroevolution Playground",
        description: "Agents that learn to play a side-scrolling game through NeuroEvolution of Augmenting Topologies, with live plots of fitness and species.",
        long_description: "An experiment in evolving both the weights and the topology of small neural networks. Each generation is scored in a headless game loop, speciated to protect new structure, and bred into the next. A dashboard streams fitness curves and renders the current champion network.",
        image: "/assets/projects/neat.webp",
        tags: &["Python", "NEAT", "Pygame", "Matplotlib"],
        category: ProjectCategory::AiMl,
        repository: Some("https://github.com/OmarAhsanCode/neat-playground"),
        demo: None,
        status: ProjectStatus::Completed,
        featured: true,
        year: 2024,
    },
    Project {
        id: 3,
        slug: "ai-chat",
        title: "AI Chat Application",
        description: "Real-time chat application with AI integration using the OpenAI API. Supports multiple chat rooms, file sharing, and AI-powered message suggestions.",
        long_description: "Combines real-time messaging with AI assistance. Users create rooms, share files, and get suggested replies. Socket.io carries the messages and the OpenAI API provides the suggestions.",
        image: "/assets/projects/ai-chat.webp",
        tags: &["React", "Socket.io", "OpenAI", "Express", "MongoDB"],
        category: ProjectCategory::AiMl,
        repository: Some("https://github.com/OmarAhsanCode/ai-chat"),
        demo: Some("https://ai-chat-demo.com"),
        status: ProjectStatus::Completed,
        featured: false,
        year: 2024,
    },
    Project {
        id: 4,
        slug: "listing-scraper",
        title: "Listing Scraper",
        description: "Scheduled web scraper that collects marketplace listings, deduplicates them, and posts price alerts to a Discord channel.",
        long_description: "A set of headless browser jobs that run on a schedule, normalize listings into a single schema, and keep a history so that only real price drops trigger an alert. Alerts go out through a Discord webhook.",
        image: "/assets/projects/scraper.webp",
        tags: &["Python", "Playwright", "SQLite", "Discord API"],
        category: ProjectCategory::Automation,
        repository: Some("https://github.com/OmarAhsanCode/listing-scraper"),
        demo: None,
        status: ProjectStatus::InProgress,
        featured: false,
        year: 2024,
    },
    Project {
        id: 5,
        slug: "task-manager",
        title: "Task Management System",
        description: "Collaborative project management tool with real-time updates, team collaboration features, and advanced reporting.",
        long_description: "Designed for teams: project boards, task assignments, time tracking, file attachments and real-time collaboration, with analytics to follow productivity and progress.",
        image: "/assets/projects/task-manager.webp",
        tags: &["Vue.js", "Firebase", "TailwindCSS", "Chart.js"],
        category: ProjectCategory::Frontend,
        repository: Some("https://github.com/OmarAhsanCode/task-manager"),
        demo: None,
        status: ProjectStatus::InProgress,
        featured: false,
        year: 2024,
    },
    Project {
        id: 6,
        slug: "weather-dashboard",
        title: "Weather Dashboard",
        description: "Weather application with location-based forecasts, interactive maps, and detailed weather analytics.",
        long_description: "Detailed weather information with visualizations: location-based forecasts, weather maps, historical data and customizable widgets.",
        image: "/assets/projects/weather.webp",
        tags: &["React", "TypeScript", "Chart.js", "Weather API"],
        category: ProjectCategory::Frontend,
        repository: Some("https://github.com/OmarAhsanCode/weather-dashboard"),
        demo: Some("https://weather-dashboard-demo.com"),
        status: ProjectStatus::Completed,
        featured: false,
        year: 2023,
    },
    Project {
        id: 7,
        slug: "blog-cms-api",
        title: "Blog CMS API",
        description: "RESTful API for a content management system with authentication, role-based permissions, and media handling.",
        long_description: "A CMS API built with Node.js and Express: JWT authentication, role-based access control, content versioning, media uploads, and Swagger documentation.",
        image: "/assets/projects/cms-api.webp",
        tags: &["Node.js", "Express", "PostgreSQL", "JWT", "Swagger"],
        category: ProjectCategory::Backend,
        repository: Some("https://github.com/OmarAhsanCode/blog-cms-api"),
        demo: None,
        status: ProjectStatus::Completed,
        featured: false,
        year: 2023,
    },
    Project {
        id: 8,
        slug: "portfolio",
        title: "Portfolio Website",
        description: "This very website, with a light and dark theme, animated backgrounds, and a searchable project and blog index.",
        long_description: "A single-page portfolio and blog. Pages are routed on the client, the project and blog indexes share one search and category filter, and the theme preference survives reloads.",
        image: "/assets/projects/portfolio.webp",
        tags: &["Rust", "Dioxus", "WebAssembly", "CSS"],
        category: ProjectCategory::Frontend,
        repository: Some("https://github.com/OmarAhsanCode/portfolio"),
        demo: Some("https://omarahsan.dev"),
        status: ProjectStatus::Completed,
        featured: true,
        year: 2024,
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::filter::{CategoryFilter, FilterState, filter, partition_featured};

    #[test]
    fn test_ids_and_slugs_are_unique() {
        let ids: HashSet<u32> = projects().iter().map(|p| p.id).collect();
        let slugs: HashSet<&str> = projects().iter().map(|p| p.slug).collect();

        assert_eq!(ids.len(), projects().len());
        assert_eq!(slugs.len(), projects().len());
    }

    #[test]
    fn test_every_project_has_tags() {
        assert!(projects().iter().all(|p| !p.tags.is_empty()));
    }

    #[test]
    fn test_category_labels_round_trip() {
        for c in ProjectCategory::ALL {
            assert_eq!(ProjectCategory::from_label(c.label()), Some(*c));
        }
    }

    #[test]
    fn test_react_search_over_store() {
        let result = filter(projects(), CategoryFilter::All, "React");

        assert!(!result.is_empty());
        for p in result {
            let hit = p.title.to_lowercase().contains("react")
                || p.description.to_lowercase().contains("react")
                || p.tags.iter().any(|t| t.to_lowercase().contains("react"));
            assert!(hit, "{} should not match", p.title);
        }
    }

    #[test]
    fn test_featured_split_over_filtered_store() {
        let state = FilterState::new().with_category(CategoryFilter::Only(ProjectCategory::Frontend));
        let filtered = state.apply(projects());
        let (featured, other) = partition_featured(filtered.iter().copied());

        assert_eq!(featured.len() + other.len(), filtered.len());
        assert!(featured.iter().all(|p| p.featured));
        assert!(other.iter().all(|p| !p.featured));
        assert!(filtered.iter().all(|p| p.category == ProjectCategory::Frontend));
    }

    #[test]
    fn test_tag_preview() {
        let project = find_project(1).unwrap();
        let (shown, rest) = project.tag_preview(4);

        assert_eq!(shown.len(), 4);
        assert_eq!(rest, 2);

        let (shown, rest) = project.tag_preview(10);
        assert_eq!(shown.len(), 6);
        assert_eq!(rest, 0);
    }

    #[test]
    fn test_status_serializes_as_wip() {
        let json = serde_json::to_string(&ProjectStatus::InProgress).unwrap();
        assert_eq!(json, "\"wip\"");
    }
}
