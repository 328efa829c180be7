use std::fmt;

// content filtering
//
// the projects and blog pages share the same two-part filter: a closed category
// selection and a free-text search.  both must match for an item to survive, and
// the result is always a subsequence of the input in its original order
//
// featured/other partitioning is deliberately not part of the filter; callers split
// the filtered result themselves with partition_featured()

// a closed set of categories for one content type
//
// "All" is not a member of ALL -- it lives in CategoryFilter so that no content
// type can forget to include it
pub trait Category: Copy + Eq + fmt::Debug + 'static {
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }
}

pub trait Filterable {
    type Category: Category;

    fn title(&self) -> &str;

    fn description(&self) -> &str;

    fn tags(&self) -> &[&str];

    fn category(&self) -> Self::Category;
}

pub trait Featured {
    fn featured(&self) -> bool;
}

// references filter the same way as the items they point to, which lets the
// output of one filter() call feed straight into another
impl<T: Filterable + ?Sized> Filterable for &T {
    type Category = T::Category;

    fn title(&self) -> &str {
        (**self).title()
    }

    fn description(&self) -> &str {
        (**self).description()
    }

    fn tags(&self) -> &[&str] {
        (**self).tags()
    }

    fn category(&self) -> Self::Category {
        (**self).category()
    }
}

impl<T: Featured + ?Sized> Featured for &T {
    fn featured(&self) -> bool {
        (**self).featured()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl<C: Category> CategoryFilter<C> {
    // every selectable option, "All" first
    pub fn options() -> Vec<Self> {
        std::iter::once(CategoryFilter::All)
            .chain(C::ALL.iter().copied().map(CategoryFilter::Only))
            .collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "All" => Some(CategoryFilter::All),
            other => C::from_label(other).map(CategoryFilter::Only),
        }
    }

    pub fn matches(&self, category: C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl<C: Category> fmt::Display for CategoryFilter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

pub fn filter<'a, T: Filterable>(
    items: &'a [T],
    category: CategoryFilter<T::Category>,
    search: &str,
) -> Vec<&'a T> {
    let needle = search.to_lowercase();

    items
        .iter()
        .filter(|item| category.matches(item.category()) && matches_search(*item, &needle))
        .collect()
}

// needle must already be lowercased
fn matches_search<T: Filterable>(item: &T, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    let hit = |haystack: &str| haystack.to_lowercase().contains(needle);

    hit(item.title()) || hit(item.description()) || item.tags().iter().any(|tag| hit(*tag))
}

pub fn partition_featured<'a, T, I>(items: I) -> (Vec<&'a T>, Vec<&'a T>)
where
    T: Featured + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().partition(|item| item.featured())
}

// transient per-page filter state
//
// created when a page mounts and dropped when it unmounts; it is never persisted
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState<C> {
    pub search_term: String,
    pub category: CategoryFilter<C>,
}

impl<C> Default for FilterState<C> {
    fn default() -> Self {
        FilterState {
            search_term: String::new(),
            category: CategoryFilter::All,
        }
    }
}

impl<C: Category> FilterState<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: CategoryFilter<C>) -> Self {
        self.category = category;
        self
    }

    pub fn with_search(mut self, search_term: impl Into<String>) -> Self {
        self.search_term = search_term.into();
        self
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        self.category != CategoryFilter::All || !self.search_term.is_empty()
    }

    pub fn apply<'a, T: Filterable<Category = C>>(&self, items: &'a [T]) -> Vec<&'a T> {
        filter(items, self.category, &self.search_term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Kind {
        Frontend,
        Backend,
    }

    impl Category for Kind {
        const ALL: &'static [Self] = &[Kind::Frontend, Kind::Backend];

        fn label(self) -> &'static str {
            match self {
                Kind::Frontend => "Frontend",
                Kind::Backend => "Backend",
            }
        }
    }

    #[derive(Debug, PartialEq)]
    struct Item {
        id: u32,
        title: &'static str,
        description: &'static str,
        tags: &'static [&'static str],
        kind: Kind,
        featured: bool,
    }

    impl Filterable for Item {
        type Category = Kind;

        fn title(&self) -> &str {
            self.title
        }

        fn description(&self) -> &str {
            self.description
        }

        fn tags(&self) -> &[&str] {
            self.tags
        }

        fn category(&self) -> Kind {
            self.kind
        }
    }

    impl Featured for Item {
        fn featured(&self) -> bool {
            self.featured
        }
    }

    fn fixture() -> Vec<Item> {
        vec![
            Item {
                id: 1,
                title: "Storefront",
                description: "A shop with a cart and checkout",
                tags: &["React", "Stripe"],
                kind: Kind::Frontend,
                featured: true,
            },
            Item {
                id: 2,
                title: "Scraper",
                description: "Collects listings from the web",
                tags: &["Python", "API"],
                kind: Kind::Backend,
                featured: false,
            },
            Item {
                id: 3,
                title: "Kanban board",
                description: "Drag and drop task tracking",
                tags: &["Vue", "Firebase"],
                kind: Kind::Frontend,
                featured: false,
            },
        ]
    }

    fn ids<T: std::ops::Deref<Target = Item>>(items: &[T]) -> Vec<u32> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_unconstrained_filter_is_identity() {
        let items = fixture();
        let result = filter(&items, CategoryFilter::All, "");

        assert_eq!(ids(&result), vec![1, 2, 3]);
    }

    #[test]
    fn test_search_is_case_insensitive_over_tags() {
        let items = fixture();
        let result = filter(&items, CategoryFilter::All, "react");

        assert_eq!(ids(&result), vec![1]);

        let result = filter(&items, CategoryFilter::All, "REACT");
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn test_search_matches_title_and_description() {
        let items = fixture();

        assert_eq!(ids(&filter(&items, CategoryFilter::All, "kanban")), vec![3]);
        assert_eq!(ids(&filter(&items, CategoryFilter::All, "LISTINGS")), vec![2]);
        assert!(filter(&items, CategoryFilter::All, "haskell").is_empty());
    }

    #[test]
    fn test_category_preserves_source_order() {
        let items = fixture();
        let result = filter(&items, CategoryFilter::Only(Kind::Frontend), "");

        assert_eq!(ids(&result), vec![1, 3]);
    }

    #[test]
    fn test_category_and_search_must_both_match() {
        let items = fixture();

        assert!(filter(&items, CategoryFilter::Only(Kind::Backend), "react").is_empty());
        assert_eq!(
            ids(&filter(&items, CategoryFilter::Only(Kind::Backend), "api")),
            vec![2]
        );
    }

    #[test]
    fn test_filter_is_idempotent() {
        let items = fixture();

        for category in CategoryFilter::<Kind>::options() {
            for search in ["", "a", "vue", "the web", "zzz"] {
                let once = filter(&items, category, search);
                let twice = filter(&once, category, search);

                let once_ids: Vec<u32> = once.iter().map(|i| i.id).collect();
                let twice_ids: Vec<u32> = twice.iter().map(|i| i.id).collect();
                assert_eq!(once_ids, twice_ids, "{category} / {search:?}");
            }
        }
    }

    #[test]
    fn test_every_result_satisfies_both_conditions() {
        let items = fixture();

        for category in CategoryFilter::<Kind>::options() {
            for search in ["", "R", "dr", "python"] {
                for item in filter(&items, category, search) {
                    assert!(category.matches(item.kind));

                    let needle = search.to_lowercase();
                    let hay = [item.title, item.description]
                        .into_iter()
                        .chain(item.tags.iter().copied())
                        .any(|s| s.to_lowercase().contains(&needle));
                    assert!(hay);
                }
            }
        }
    }

    #[test]
    fn test_partition_featured_keeps_order() {
        let items = fixture();
        let (featured, other) = partition_featured(&items);

        assert_eq!(ids(&featured), vec![1]);
        assert_eq!(ids(&other), vec![2, 3]);
    }

    #[test]
    fn test_clear_resets_state() {
        let items = fixture();
        let mut state = FilterState::new()
            .with_category(CategoryFilter::Only(Kind::Backend))
            .with_search("API");

        assert!(state.is_active());
        assert_eq!(ids(&state.apply(&items)), vec![2]);

        state.clear();

        assert_eq!(state.category, CategoryFilter::All);
        assert_eq!(state.search_term, "");
        assert!(!state.is_active());
        assert_eq!(ids(&state.apply(&items)), vec![1, 2, 3]);
    }

    #[test]
    fn test_category_options_start_with_all() {
        let options = CategoryFilter::<Kind>::options();

        assert_eq!(options[0], CategoryFilter::All);
        assert_eq!(options.len(), Kind::ALL.len() + 1);
        assert_eq!(CategoryFilter::<Kind>::parse("All"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::<Kind>::parse("Backend"),
            Some(CategoryFilter::Only(Kind::Backend))
        );
        assert_eq!(CategoryFilter::<Kind>::parse("Mobile"), None);
    }
}
