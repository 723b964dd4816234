//! Page sections in document order.

mod about;
mod approach;
mod contact;
mod footer;
mod header;
mod hero;
mod services;
mod work;

pub use about::AboutSection;
pub use approach::ApproachSection;
pub use contact::ContactSection;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use services::ServicesSection;
pub use work::WorkSection;
