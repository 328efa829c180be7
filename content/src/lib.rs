// static site content
//
// everything the pages display is compiled into the binary: there is no create,
// update or delete, so every accessor hands out 'static references

pub mod blog;
pub mod filter;
pub mod profile;
pub mod project;
pub mod testimonial;
pub mod timeline;

pub use blog::{BlogCategory, BlogPost, blog_posts, find_post, latest_posts};
pub use filter::{Category, CategoryFilter, Featured, FilterState, Filterable, filter, partition_featured};
pub use project::{Project, ProjectCategory, ProjectStatus, projects};
pub use testimonial::{Testimonial, testimonials};
pub use timeline::{EntryKind, TimelineEntry, timeline};

pub const SITE_NAME: &str = "Omar Ahsan";
