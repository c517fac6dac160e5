use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use navshell_core::prelude::{MenuTemplate, ShellConfig};

// Module Declarations
pub mod components;
pub mod dom;
pub mod hooks;
pub mod pages;

use components::gallery::ImgGallery;
use components::layout::MainLayout;
use pages::{
    AboutIntro, AboutPrivacy, AboutTerms, Home, MoreNew, MoreOuter, MorePants, MorePopular,
    MoreShoes, MoreTop, NotFound,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(MainLayout)]
        #[route("/")]
        Home {},

        // About
        #[route("/about/intro")]
        AboutIntro {},
        #[route("/about/privacy")]
        AboutPrivacy {},
        #[route("/about/terms")]
        AboutTerms {},

        // More
        #[route("/more/new")]
        MoreNew {},
        #[route("/more/popular")]
        MorePopular {},
        #[route("/more/top")]
        MoreTop {},
        #[route("/more/outer")]
        MoreOuter {},
        #[route("/more/pants")]
        MorePants {},
        #[route("/more/shoes")]
        MoreShoes {},

        // Examples
        #[route("/example/img-gallery")]
        ImgGallery {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

// Bundled shell configuration (timings, gallery, optional menu override)
static SHELL_CONFIG: &str = include_str!("../assets/shell.json");

/// Menu pathnames that only reach the catch-all page
pub fn unrouted_pathnames(template: &MenuTemplate) -> Vec<String> {
    template
        .pathnames()
        .filter(|pathname| match pathname.parse::<Route>() {
            Ok(Route::NotFound { .. }) | Err(_) => true,
            Ok(_) => false,
        })
        .map(str::to_string)
        .collect()
}

/// Parse the bundled configuration, falling back to defaults
pub fn load_shell_config() -> ShellConfig {
    let config = match ShellConfig::from_json_str(SHELL_CONFIG) {
        Ok(config) => config,
        Err(err) => {
            warn!(%err, "bundled shell config unreadable, using defaults");
            ShellConfig::default()
        }
    };
    for pathname in unrouted_pathnames(&config.menu_template()) {
        warn!(%pathname, "menu entry has no matching route");
    }
    config
}

#[component]
pub fn App() -> Element {
    use_context_provider(load_shell_config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navshell_core::prelude::MenuEntry;

    #[test]
    fn test_site_menu_is_fully_routed() {
        assert!(unrouted_pathnames(&MenuTemplate::site_menu()).is_empty());
    }

    #[test]
    fn test_unknown_pathname_is_reported() {
        let template = MenuTemplate::new(vec![
            MenuEntry::leaf(0, "Home", "/"),
            MenuEntry::leaf(1, "Blog", "/blog"),
        ])
        .unwrap();
        assert_eq!(unrouted_pathnames(&template), vec!["/blog".to_string()]);
    }

    #[test]
    fn test_bundled_config_parses() {
        assert!(ShellConfig::from_json_str(SHELL_CONFIG).is_ok());
    }
}
