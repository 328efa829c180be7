pub mod backgrounds;
pub mod blossom;
pub mod card3d;
pub mod carousel;
pub mod error;
pub mod footer;
pub mod glass;
pub mod icons;
pub mod image;
pub mod modal;
pub mod navigation;
pub mod particles;
pub mod post;
pub mod project;
pub mod scroll_progress;
pub mod scroll_top;
pub mod search_bar;
pub mod skill;
pub mod tag;
pub mod timeline;
