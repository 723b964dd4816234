pub mod animated;
pub mod common;
pub mod icon;
pub mod pages;
pub mod platform;
pub mod sections;
pub mod styles;

pub use pages::{HomePage, NotFoundPage};
pub use styles::SiteStyles;
