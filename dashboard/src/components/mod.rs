//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod footer;
mod home;
mod info;
mod login;
mod navbar;
mod rewards;
mod search;
mod upload;
mod view_menu;

pub use footer::Footer;
pub use home::Home;
pub use info::{ContactUs, Faq, GetQuote, NotFound, Sitemap};
pub use login::Login;
pub use navbar::NavBar;
pub use rewards::Rewards;
pub use search::SearchMenu;
pub use upload::UploadMenu;
pub use view_menu::ViewMenu;
