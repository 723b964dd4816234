//! Application pages module
//!
//! - Home page (the whole studio site)
//! - Not found page

mod home;
mod not_found;

pub use home::HomePage;
pub use not_found::NotFoundPage;
