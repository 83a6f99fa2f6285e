pub mod api;
pub mod browser;
pub mod config;
pub mod pages;

use config::ApiConfig;
use dioxus::prelude::*;
use pages::{AppLayout, Home, NotFound};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_context_provider(ApiConfig::from_build_env);

    rsx! {
        document::Title { "Br Dev Streamers" }
        document::Script { src: TAILWIND_CDN }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
