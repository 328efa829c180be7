use std::{collections::HashMap, fmt, sync::LazyLock};

use chrono::NaiveDate;
use serde::Serialize;

use crate::filter::{Category, Featured, Filterable};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum BlogCategory {
    Frontend,
    Backend,
    DevOps,
    AiMl,
}

impl Category for BlogCategory {
    const ALL: &'static [Self] = &[Self::Frontend, Self::Backend, Self::DevOps, Self::AiMl];

    fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::DevOps => "DevOps",
            Self::AiMl => "AI/ML",
        }
    }
}

impl fmt::Display for BlogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BlogPost {
    pub id: u32,
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub author: &'static str,
    // YYYY-MM-DD
    pub date: &'static str,
    // minutes
    pub reading_time: u32,
    pub tags: &'static [&'static str],
    pub category: BlogCategory,
    pub image: &'static str,
    pub featured: bool,
    // markdown, without the title heading
    pub content: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocEntry {
    pub anchor: String,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareLinks {
    pub twitter: String,
    pub linkedin: String,
    pub facebook: String,
}

const DISCUSSIONS_URL: &str = "https://github.com/OmarAhsanCode/portfolio-blog/discussions";

impl BlogPost {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d").ok()
    }

    // "January 15, 2024", or the raw string if it does not parse
    pub fn display_date(&self) -> String {
        match self.parsed_date() {
            Some(date) => date.format("%B %-d, %Y").to_string(),
            None => self.date.to_owned(),
        }
    }

    pub fn html(&self) -> String {
        let mut options = comrak::Options::default();
        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.header_ids = Some(String::new());

        comrak::markdown_to_html(self.content, &options)
    }

    // second-level headings, with the same anchors html() generates
    //
    // the anchor counter runs over every heading level so that duplicate titles get
    // the same -1, -2 suffixes comrak assigns
    pub fn table_of_contents(&self) -> Vec<TocEntry> {
        let mut anchors = Anchors::default();
        let mut in_fence = false;
        let mut entries = Vec::new();

        for line in self.content.lines() {
            let trimmed = line.trim_start();

            if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
                in_fence = !in_fence;
                continue;
            }

            if in_fence {
                continue;
            }

            let level = trimmed.chars().take_while(|c| *c == '#').count();
            if level == 0 || level > 6 || !trimmed[level..].starts_with(' ') {
                continue;
            }

            let title = trimmed[level..].trim().trim_end_matches('#').trim();
            let anchor = anchors.next(title);

            if level == 2 {
                entries.push(TocEntry {
                    anchor,
                    title: title.to_owned(),
                });
            }
        }

        entries
    }

    pub fn discussion_url(&self) -> String {
        format!(
            "{DISCUSSIONS_URL}/new?category=blog&title={}",
            urlencoding::encode(self.title)
        )
    }
}

impl Filterable for BlogPost {
    type Category = BlogCategory;

    fn title(&self) -> &str {
        self.title
    }

    fn description(&self) -> &str {
        self.excerpt
    }

    fn tags(&self) -> &[&str] {
        self.tags
    }

    fn category(&self) -> BlogCategory {
        self.category
    }
}

impl Featured for BlogPost {
    fn featured(&self) -> bool {
        self.featured
    }
}

pub fn share_links(title: &str, page_url: &str) -> ShareLinks {
    let title = urlencoding::encode(title);
    let url = urlencoding::encode(page_url);

    ShareLinks {
        twitter: format!("https://twitter.com/intent/tweet?text={title}&url={url}"),
        linkedin: format!("https://www.linkedin.com/sharing/share-offsite/?url={url}"),
        facebook: format!("https://www.facebook.com/sharer/sharer.php?u={url}"),
    }
}

// heading anchor generation, matching comrak's header_ids
#[derive(Default)]
struct Anchors {
    seen: HashMap<String, usize>,
}

impl Anchors {
    fn next(&mut self, title: &str) -> String {
        let base: String = title
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | ' '))
            .map(|c| if c == ' ' { '-' } else { c })
            .collect();

        let mut candidate = base.clone();
        let mut n = 0;
        while self.seen.contains_key(&candidate) {
            n += 1;
            candidate = format!("{base}-{n}");
        }

        self.seen.insert(candidate.clone(), 0);
        candidate
    }
}

pub fn blog_posts() -> &'static [BlogPost] {
    POSTS
}

static BY_SLUG: LazyLock<HashMap<&'static str, &'static BlogPost>> =
    LazyLock::new(|| POSTS.iter().map(|post| (post.slug, post)).collect());

pub fn find_post(slug: &str) -> Option<&'static BlogPost> {
    BY_SLUG.get(slug).copied()
}

// newest first
pub fn latest_posts(n: usize) -> Vec<&'static BlogPost> {
    let mut posts: Vec<&BlogPost> = POSTS.iter().collect();
    posts.sort_by(|a, b| b.date.cmp(a.date));
    posts.truncate(n);
    posts
}

static POSTS: &[BlogPost] = &[
    BlogPost {
        id: 1,
        slug: "building-scalable-react-applications",
        title: "Building Scalable React Applications",
        excerpt: "Learn best practices for structuring large React applications with performance in mind.",
        author: "Omar Ahsan",
        date: "2024-01-15",
        reading_time: 8,
        tags: &["React", "Performance", "Architecture"],
        category: BlogCategory::Frontend,
        image: "/assets/blog/scalable-react.webp",
        featured: true,
        content: r#"React makes it easy to start, but as an application grows the cost of every early structural decision shows up. These are the habits that have kept large codebases manageable for me.

## Component Architecture

Each component should have a single, well-defined purpose. That makes it easier to test, debug and reuse.

```jsx
function UserDashboard({ user }) {
  return (
    <div>
      <UserProfile user={user} />
      <UserPosts userId={user.id} />
      <UserNotifications userId={user.id} />
    </div>
  )
}
```

Prefer composition over inheritance: build complex components by combining simple ones.

## State Management

Not everything belongs in global state. Keep UI state local and lift it only when two siblings genuinely need it.

| Kind of state | Where it lives |
|---------------|----------------|
| Form input    | component      |
| Theme, user   | context        |
| Server data   | query cache    |

## Performance Optimization

Memoize expensive derived data, and split bundles along routes so that the first paint only pays for the page being shown.

```jsx
const filtered = useMemo(
  () => data.filter(item => item.category === filter),
  [data, filter]
)
```

## Code Organization

Group by feature rather than by file type. A `projects/` folder with its components, hooks and tests together is easier to navigate than three parallel trees.

## Testing Strategies

Test behaviour, not implementation. Pure helpers get unit tests; pages get a handful of integration tests that drive them the way a user would.

## Conclusion

1. **Architecture**: small, focused components
2. **State**: the right tool for each kind of state
3. **Performance**: measure, then memoize and split
4. **Organization**: feature folders
5. **Testing**: comprehensive, behaviour-level coverage
"#,
    },
    BlogPost {
        id: 2,
        slug: "modern-css-techniques-2024",
        title: "Modern CSS Techniques for 2024",
        excerpt: "Explore the latest CSS features and how to use them in your projects.",
        author: "Omar Ahsan",
        date: "2024-01-10",
        reading_time: 6,
        tags: &["CSS", "Web Design", "Frontend"],
        category: BlogCategory::Frontend,
        image: "/assets/blog/modern-css.webp",
        featured: false,
        content: r#"CSS keeps gaining features that used to need JavaScript or a preprocessor. Two of them changed how I lay out components.

## Container Queries

Container queries style an element based on the size of its container instead of the viewport.

```css
.card-container {
  container-type: inline-size;
}

@container (min-width: 400px) {
  .card {
    display: grid;
    grid-template-columns: 1fr 2fr;
  }
}
```

## CSS Grid Subgrid

Subgrid lets a nested grid line up with the tracks of its parent.

```css
.parent-grid {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 1rem;
}

.child-grid {
  display: grid;
  grid-column: span 2;
  grid-template-columns: subgrid;
}
```

## Custom Properties for Theming

A light and a dark palette are just two sets of variables. Switching the theme flips one attribute on the root element and every component follows.
"#,
    },
    BlogPost {
        id: 3,
        slug: "deploying-docker-cicd",
        title: "Deploying with Docker and CI/CD",
        excerpt: "A complete guide to containerizing your applications and setting up automated deployments.",
        author: "Omar Ahsan",
        date: "2024-01-05",
        reading_time: 12,
        tags: &["Docker", "DevOps", "CI/CD"],
        category: BlogCategory::DevOps,
        image: "/assets/blog/docker-cicd.webp",
        featured: false,
        content: r#"Shipping by hand works until the day it doesn't. This walks through the pipeline I use for small services.

## Writing the Dockerfile

Use a multi-stage build so the final image carries only the runtime and the build output.

```dockerfile
FROM node:20 AS build
WORKDIR /app
COPY . .
RUN npm ci && npm run build

FROM node:20-slim
COPY --from=build /app/dist /app
CMD ["node", "/app/server.js"]
```

## The Pipeline

Every push runs lint and tests. Every merge to `main` builds the image, tags it with the commit hash, and pushes it to the registry.

## Rolling Out

The host pulls the new tag and restarts the container behind a health check. If the check fails, the previous tag keeps serving.
"#,
    },
    BlogPost {
        id: 4,
        slug: "evolving-neural-networks-with-neat",
        title: "Evolving Neural Networks with NEAT",
        excerpt: "How NeuroEvolution of Augmenting Topologies grows networks from nothing, and what I learned teaching agents to play a game.",
        author: "Omar Ahsan",
        date: "2024-02-02",
        reading_time: 10,
        tags: &["AI", "NEAT", "Python", "Machine Learning"],
        category: BlogCategory::AiMl,
        image: "/assets/blog/neat.webp",
        featured: true,
        content: r#"Most neural networks have a fixed shape chosen by a human. NEAT evolves the shape too.

## Starting Minimal

Every genome starts as inputs wired straight to outputs. Structure is only added through mutation, so complexity has to earn its place.

## Speciation

New structure usually performs worse at first. Grouping genomes into species by their compatibility distance lets an innovation compete only with its close relatives until it has been tuned.

## Fitness

```python
def evaluate(genomes, config):
    for _, genome in genomes:
        net = neat.nn.FeedForwardNetwork.create(genome, config)
        genome.fitness = play(net)
```

## What Went Wrong

The first runs rewarded survival time alone, and the agents learned to hover in place. Adding a small reward for distance travelled fixed it.
"#,
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::filter::{CategoryFilter, filter};

    #[test]
    fn test_slugs_are_unique_and_indexed() {
        let slugs: HashSet<&str> = blog_posts().iter().map(|p| p.slug).collect();
        assert_eq!(slugs.len(), blog_posts().len());

        for post in blog_posts() {
            assert_eq!(find_post(post.slug).map(|p| p.id), Some(post.id));
        }
    }

    #[test]
    fn test_unknown_slug_is_none() {
        assert!(find_post("does-not-exist").is_none());
        assert!(find_post("").is_none());
    }

    #[test]
    fn test_every_post_is_well_formed() {
        for post in blog_posts() {
            assert!(!post.tags.is_empty(), "{}", post.slug);
            assert!(post.parsed_date().is_some(), "{}", post.slug);
            assert!(post.reading_time > 0);
        }
    }

    #[test]
    fn test_display_date() {
        let post = find_post("building-scalable-react-applications").unwrap();
        assert_eq!(post.display_date(), "January 15, 2024");
    }

    #[test]
    fn test_latest_posts_newest_first() {
        let latest = latest_posts(3);

        assert_eq!(latest.len(), 3);
        assert_eq!(latest[0].slug, "evolving-neural-networks-with-neat");
        assert!(latest.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn test_table_of_contents_skips_code_fences() {
        let post = find_post("building-scalable-react-applications").unwrap();
        let toc = post.table_of_contents();
        let titles: Vec<&str> = toc.iter().map(|e| e.title.as_str()).collect();

        assert_eq!(
            titles,
            vec![
                "Component Architecture",
                "State Management",
                "Performance Optimization",
                "Code Organization",
                "Testing Strategies",
                "Conclusion",
            ]
        );
        assert_eq!(toc[0].anchor, "component-architecture");
    }

    #[test]
    fn test_html_contains_toc_anchors() {
        let post = find_post("modern-css-techniques-2024").unwrap();
        let html = post.html();

        for entry in post.table_of_contents() {
            assert!(
                html.contains(&format!("id=\"{}\"", entry.anchor)),
                "missing anchor {}",
                entry.anchor
            );
        }
        assert!(html.contains("<pre>"));
    }

    #[test]
    fn test_anchor_deduplication() {
        let mut anchors = Anchors::default();

        assert_eq!(anchors.next("Setup"), "setup");
        assert_eq!(anchors.next("Setup"), "setup-1");
        assert_eq!(anchors.next("CI/CD & You"), "cicd--you");
    }

    #[test]
    fn test_share_links_are_encoded() {
        let links = share_links("CSS & You", "https://example.com/blog/a b");

        assert!(links.twitter.contains("text=CSS%20%26%20You"));
        assert!(links.twitter.contains("url=https%3A%2F%2Fexample.com%2Fblog%2Fa%20b"));
        assert!(links.facebook.ends_with("u=https%3A%2F%2Fexample.com%2Fblog%2Fa%20b"));
    }

    #[test]
    fn test_blog_filter_by_category() {
        let result = filter(blog_posts(), CategoryFilter::Only(BlogCategory::DevOps), "");
        let slugs: Vec<&str> = result.iter().map(|p| p.slug).collect();

        assert_eq!(slugs, vec!["deploying-docker-cicd"]);
    }
}
