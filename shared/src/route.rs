//! ==============================================================================
//! route.rs - path to page mapping
//! ==============================================================================
//!
//! an ordered table evaluated first-match. NotFound is the catch-all and
//! is never in the table itself, so every path resolves to exactly one page.
//!
//! ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    View,
    Upload,
    Rewards,
    Login,
    Sitemap,
    ContactUs,
    GetQuote,
    Faq,
    NotFound,
}

/// (path, route) pairs in match order
pub const ROUTES: &[(&str, Route)] = &[
    ("/", Route::Home),
    ("/view", Route::View),
    ("/upload", Route::Upload),
    ("/rewards", Route::Rewards),
    ("/login", Route::Login),
    ("/sitemap", Route::Sitemap),
    ("/contact-us", Route::ContactUs),
    ("/get-quote", Route::GetQuote),
    ("/faq", Route::Faq),
];

impl Route {
    /// resolve a location pathname; a single trailing slash is ignored
    pub fn resolve(path: &str) -> Route {
        let path = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(trimmed) => trimmed,
        };

        ROUTES
            .iter()
            .find(|(pattern, _)| *pattern == path)
            .map(|(_, route)| *route)
            .unwrap_or(Route::NotFound)
    }

    /// canonical path, None for the catch-all
    pub fn path(self) -> Option<&'static str> {
        ROUTES
            .iter()
            .find(|(_, route)| *route == self)
            .map(|(pattern, _)| *pattern)
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::View => "View/Search Menu",
            Route::Upload => "Upload Menu",
            Route::Rewards => "View Rewards",
            Route::Login => "Login",
            Route::Sitemap => "Site Map",
            Route::ContactUs => "Contact Us",
            Route::GetQuote => "Get a Quote",
            Route::Faq => "FAQ",
            Route::NotFound => "Page Not Found",
        }
    }
}

// ==============================================================================
// tests
// ==============================================================================
