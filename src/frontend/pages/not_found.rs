use crate::frontend::app::routes::Route;
use crate::frontend::components::page_layout::PageLayout;
use dioxus::prelude::*;
use dioxus_router::Link;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    use_hook(|| log::warn!("No route for {path}"));

    rsx! {
        PageLayout {
            div {
                class: "content",
                h1 { "Page not found" }
                p { "Nothing lives at {path}." }
                Link { to: Route::Login {}, "Back to sign in" }
            }
        }
    }
}
