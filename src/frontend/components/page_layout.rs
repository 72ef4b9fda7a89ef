use dioxus::prelude::*;

const STYLES: &str = include_str!("../../../assets/main.css");

#[component]
pub fn PageLayout(children: Element, #[props(default)] hidden: bool) -> Element {
    let mut show_ui = use_signal(|| false);

    use_effect(move || {
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
            show_ui.set(true);
        });
    });

    let visible = show_ui() && !hidden;

    rsx! {
        style { dangerous_inner_html: STYLES }

        div {
            class: if visible { "page-container fade-in" } else { "page-container fade-out" },
            {children}
        }
    }
}
