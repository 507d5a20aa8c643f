use dioxus::prelude::*;
use dioxus_router::{Link, Routable, Router};

use crate::config::use_runtime_config;
use crate::page::PortfolioPage;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const FONT_AWESOME: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

#[component]
pub fn App() -> Element {
    let config_resource = use_runtime_config();
    let Some(config) = config_resource() else {
        return rsx! {
            document::Title { "Portfolio" }
            div { class: "page loading",
                p { "Loading..." }
            }
        };
    };

    use_context_provider(|| config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: FONT_AWESOME }
        Router::<Route> {}
    }
}

#[derive(Clone, PartialEq, Routable)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn Home() -> Element {
    rsx! {
        document::Title { "Portfolio" }
        PortfolioPage {}
    }
}

#[component]
fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        document::Title { "Not Found | Portfolio" }
        div { class: "not-found",
            h1 { "404" }
            p { "Nothing lives at /{path}" }
            Link { to: Route::Home {}, class: "btn btn-primary", "Back home" }
        }
    }
}
