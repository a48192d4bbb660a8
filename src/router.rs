//! Fragment Router
//!
//! Maps the URL fragment (`#/about`) to one of the static page views.

/// Static page views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    About,
    Volunteer,
    Contact,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Home, Route::About, Route::Volunteer, Route::Contact];

    /// Parse a fragment; `#`/`/` prefixes are optional, unknown values are Home.
    ///
    /// Bare `#about` style fragments also resolve to their page, where the
    /// old site only matched `#/about` and sent footer links to Home.
    pub fn from_fragment(fragment: &str) -> Self {
        let path = fragment.trim();
        let path = path.strip_prefix('#').unwrap_or(path);
        let path = path.strip_prefix('/').unwrap_or(path);
        match path {
            "about" => Route::About,
            "volunteer" => Route::Volunteer,
            "contact" => Route::Contact,
            _ => Route::Home,
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            Route::Home => "#/",
            Route::About => "#/about",
            Route::Volunteer => "#/volunteer",
            Route::Contact => "#/contact",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Volunteer => "Volunteer",
            Route::Contact => "Contact",
        }
    }
}

/// Route for the browser's current `location.hash`
pub fn current_route() -> Route {
    let hash = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    Route::from_fragment(&hash)
}

/// Smooth-scroll the window back to the top
pub fn scroll_to_top() {
    if let Some(win) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}
