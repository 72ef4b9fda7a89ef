use crate::frontend::app::routes::Route;
use crate::frontend::components::page_layout::PageLayout;
use crate::frontend::services::session::Session;
use dioxus::{events::KeyboardEvent, prelude::*};
use dioxus_router::use_navigator;

/// One entry on the board. Kept in memory for the lifetime of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub id: usize,
    pub title: String,
    pub done: bool,
}

/// Appends a task unless the title is blank. Returns whether one was added.
pub fn add_task(tasks: &mut Vec<TaskItem>, title: &str) -> bool {
    let title = title.trim();
    if title.is_empty() {
        return false;
    }

    let id = tasks.iter().map(|t| t.id + 1).max().unwrap_or(0);
    tasks.push(TaskItem {
        id,
        title: title.to_string(),
        done: false,
    });
    true
}

pub fn toggle_task(tasks: &mut [TaskItem], id: usize) {
    if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
        task.done = !task.done;
    }
}

#[component]
pub fn Tasks() -> Element {
    let nav = use_navigator();
    let session = use_context::<Session>();
    let mut tasks = use_signal(Vec::<TaskItem>::new);
    let mut draft = use_signal(String::new);

    let on_keypress = move |e: KeyboardEvent| {
        if e.key() == Key::Enter && add_task(&mut tasks.write(), &draft.read()) {
            draft.set(String::new());
        }
    };

    let sign_out = move |_: MouseEvent| match session.sign_out() {
        Ok(()) => {
            nav.push(Route::Login {});
        }
        Err(e) => log::error!("Failed to sign out: {e}"),
    };

    let remaining = tasks.read().iter().filter(|t| !t.done).count();

    rsx! {
        PageLayout {
            div {
                class: "content",
                h1 { "Tasks" }
                p { "{remaining} open" }
                input {
                    class: "inline-input",
                    r#type: "text",
                    value: "{draft()}",
                    oninput: move |e| draft.set(e.value()),
                    onkeypress: on_keypress,
                    placeholder: "Add a task and press Enter"
                }
                ul {
                    class: "task-list",
                    for task in tasks() {
                        li {
                            key: "{task.id}",
                            class: if task.done { "task done" } else { "task" },
                            input {
                                r#type: "checkbox",
                                checked: task.done,
                                onchange: move |_| toggle_task(&mut tasks.write(), task.id),
                            }
                            span { "{task.title}" }
                        }
                    }
                }
                button {
                    class: "button secondary",
                    onclick: sign_out,
                    "Sign out"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_titles_are_ignored() {
        let mut tasks = Vec::new();
        assert!(!add_task(&mut tasks, "   "));
        assert!(tasks.is_empty());
    }

    #[test]
    fn ids_stay_unique_and_toggle_flips() {
        let mut tasks = Vec::new();
        assert!(add_task(&mut tasks, " write report "));
        assert!(add_task(&mut tasks, "review"));
        assert_eq!(tasks[0].title, "write report");
        assert_ne!(tasks[0].id, tasks[1].id);

        let second = tasks[1].id;
        toggle_task(&mut tasks, second);
        assert!(tasks[1].done);
        assert!(!tasks[0].done);

        toggle_task(&mut tasks, second);
        assert!(!tasks[1].done);
    }
}
