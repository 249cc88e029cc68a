// Page sections, in mounting order

mod about;
mod contact;
mod experience;
mod footer;
mod hero;
mod nav;
mod portfolio;
mod seo;
mod services;

pub use about::About;
pub use contact::Contact;
pub use experience::Experience;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Navbar;
pub use portfolio::PortfolioGrid;
pub use seo::SeoMeta;
pub use services::Services;
