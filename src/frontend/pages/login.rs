use crate::frontend::app::routes::Route;
use crate::frontend::components::page_layout::PageLayout;
use crate::frontend::services::session::Session;
use dioxus::{events::KeyboardEvent, prelude::*};
use dioxus_router::use_navigator;
use std::time::Duration;
use tokio::time::sleep;

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    let session = use_context::<Session>();
    let mut username = use_signal(String::new);
    let mut hide_ui = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let is_valid = move || Session::is_valid_username(&username.read());

    let on_keypress = move |e: KeyboardEvent| {
        if e.key() != Key::Enter {
            return;
        }
        if !is_valid() {
            error.set(Some(
                "Use 3-16 letters, digits or underscores".to_string(),
            ));
            return;
        }

        let token = Session::issue_token(&username.read());
        if let Err(err) = session.sign_in(&token) {
            log::error!("Failed to store session token: {err}");
            error.set(Some("Could not save your session".to_string()));
            return;
        }

        error.set(None);
        hide_ui.set(true);
        spawn(async move {
            sleep(Duration::from_millis(300)).await;
            nav.push(Route::Tasks {});
        });
    };

    rsx! {
        PageLayout {
            hidden: hide_ui(),
            div {
                class: "content",
                h1 { "Sign in" }
                input {
                    class: "inline-input",
                    r#type: "text",
                    value: "{username()}",
                    maxlength: "16",
                    oninput: move |e| username.set(e.value()),
                    onkeypress: on_keypress,
                    placeholder: "Username",
                    autofocus: true
                }
                div {
                    class: "error-message",
                    if let Some(message) = error() {
                        "{message}"
                    }
                }
            }
        }
    }
}
