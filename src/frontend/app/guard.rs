//! Global navigation guard.

use crate::frontend::app::routes::Route;

/// A navigation attempt as seen by the guard.
#[derive(Debug, Clone, Copy)]
pub struct NavigationRequest<'a> {
    pub to: &'a Route,
    /// `None` on the first navigation.
    pub from: Option<&'a Route>,
}

/// What the router should do with a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect(Route),
}

/// Decides a navigation from the destination and whether a session token exists.
///
/// Token presence is the whole check; the token itself is never inspected.
pub fn before_each(request: NavigationRequest<'_>, has_token: bool) -> Navigation {
    let to = request.to;

    let decision = if to.meta().requires_auth && !has_token {
        Navigation::Redirect(Route::Login {})
    } else if matches!(to, Route::Login {}) && has_token {
        Navigation::Redirect(Route::Tasks {})
    } else {
        Navigation::Proceed
    };

    log::debug!(
        "Guard: {} -> {} [{}] (token: {has_token}) => {decision:?}",
        request.from.map_or_else(|| "-".to_string(), Route::path),
        to.path(),
        to.name(),
    );

    decision
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::{MemoryStorage, Storage};
    use crate::frontend::app::routes::resolve;
    use crate::frontend::services::session::{Session, TOKEN_KEY};
    use std::rc::Rc;

    fn navigate(path: &str, token: Option<&str>) -> Navigation {
        let storage = Rc::new(MemoryStorage::new());
        if let Some(token) = token {
            storage.set_item(TOKEN_KEY, token).unwrap();
        }
        let session = Session::new(storage);
        let to = resolve(path).unwrap();
        before_each(
            NavigationRequest {
                to: &to,
                from: None,
            },
            session.is_authenticated(),
        )
    }

    #[test]
    fn tasks_without_token_goes_to_login() {
        assert_eq!(
            navigate("/tasks", None),
            Navigation::Redirect(Route::Login {})
        );
    }

    #[test]
    fn tasks_with_token_proceeds() {
        assert_eq!(navigate("/tasks", Some("abc")), Navigation::Proceed);
    }

    #[test]
    fn login_with_token_goes_to_tasks() {
        assert_eq!(
            navigate("/login", Some("abc")),
            Navigation::Redirect(Route::Tasks {})
        );
    }

    #[test]
    fn login_without_token_proceeds() {
        assert_eq!(navigate("/login", None), Navigation::Proceed);
    }

    #[test]
    fn root_is_resolved_before_the_guard() {
        assert_eq!(navigate("/", None), Navigation::Proceed);
        assert_eq!(
            navigate("/", Some("abc")),
            Navigation::Redirect(Route::Tasks {})
        );
    }

    #[test]
    fn empty_token_counts_as_missing() {
        assert_eq!(
            navigate("/tasks", Some("")),
            Navigation::Redirect(Route::Login {})
        );
        assert_eq!(navigate("/login", Some("")), Navigation::Proceed);
    }

    #[test]
    fn previous_route_does_not_change_the_outcome() {
        let to = Route::Tasks {};
        let from = Route::Login {};
        let request = NavigationRequest {
            to: &to,
            from: Some(&from),
        };
        assert_eq!(
            before_each(request, false),
            Navigation::Redirect(Route::Login {})
        );
        assert_eq!(before_each(request, true), Navigation::Proceed);
    }
}
