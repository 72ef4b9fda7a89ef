//! Layout that runs the navigation guard before rendering a route.

use crate::frontend::app::guard::{Navigation, NavigationRequest, before_each};
use crate::frontend::app::routes::Route;
use crate::frontend::services::session::Session;

use dioxus::prelude::*;
use dioxus_router::{Outlet, use_navigator, use_route};
use std::cell::RefCell;
use std::rc::Rc;

#[component]
pub fn NavigationGuard() -> Element {
    let route = use_route::<Route>();
    let nav = use_navigator();
    let session = use_context::<Session>();
    // Last route we let through; not reactive, only read on the next navigation.
    let previous = use_hook(|| Rc::new(RefCell::new(None::<Route>)));

    let from = previous.borrow().clone();
    let request = NavigationRequest {
        to: &route,
        from: from.as_ref(),
    };

    match before_each(request, session.is_authenticated()) {
        Navigation::Proceed => {
            *previous.borrow_mut() = Some(route.clone());
            rsx! { Outlet::<Route> {} }
        }
        Navigation::Redirect(target) => {
            nav.replace(target);
            rsx! {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::{MemoryStorage, Storage};
    use crate::frontend::app::routes::resolve;
    use crate::frontend::services::session::TOKEN_KEY;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_history::{History, MemoryHistory};
    use dioxus_router::Router;

    #[derive(Clone)]
    struct Harness {
        history: Rc<dyn History>,
        session: Session,
    }

    fn harness(props: Harness) -> Element {
        use_context_provider(|| props.history.clone());
        use_context_provider(|| props.session.clone());
        rsx! { Router::<Route> {} }
    }

    /// Mounts the router at `path` and returns where it ended up after the first render.
    fn land_on(path: &str, token: Option<&str>) -> Route {
        let storage = Rc::new(MemoryStorage::new());
        if let Some(token) = token {
            storage.set_item(TOKEN_KEY, token).unwrap();
        }
        let history = Rc::new(MemoryHistory::with_initial_path(path));

        let mut vdom = VirtualDom::new_with_props(
            harness,
            Harness {
                history: history.clone(),
                session: Session::new(storage),
            },
        );
        vdom.rebuild_in_place();

        resolve(&history.current_route()).unwrap()
    }

    #[test]
    fn tasks_without_token_lands_on_login() {
        assert_eq!(land_on("/tasks", None), Route::Login {});
    }

    #[test]
    fn tasks_with_token_stays() {
        assert_eq!(land_on("/tasks", Some("abc")), Route::Tasks {});
    }

    #[test]
    fn login_with_token_moves_to_tasks() {
        assert_eq!(land_on("/login", Some("abc")), Route::Tasks {});
    }

    #[test]
    fn login_without_token_stays() {
        assert_eq!(land_on("/login", None), Route::Login {});
    }

    #[test]
    fn unknown_path_is_left_alone() {
        assert_eq!(
            land_on("/nowhere", Some("abc")),
            Route::NotFound {
                segments: vec!["nowhere".to_string()]
            }
        );
    }
}
