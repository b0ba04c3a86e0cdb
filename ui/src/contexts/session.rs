//! Session flags written by the login flow elsewhere in the application.
//!
//! The dashboard never writes these; it reads them once on startup and clears
//! them on logout. Everything else goes through [`SessionHandle`].

use std::rc::Rc;
use yew::prelude::*;

use crate::utils::{local_storage, read_storage};

pub const LOGGED_IN_KEY: &str = "isLoggedIn";
pub const ROLE_KEY: &str = "userRole";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub logged_in: bool,
    pub role: Option<String>,
}

impl Session {
    /// Interpret raw storage values. Only the exact string "true" counts as
    /// logged in.
    pub fn from_entries(logged_in: Option<&str>, role: Option<&str>) -> Self {
        Self {
            logged_in: logged_in == Some("true"),
            role: role
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(str::to_string),
        }
    }

    /// Role to show in the header; none unless the visitor is signed in.
    pub fn signed_in_role(&self) -> Option<&str> {
        self.role.as_deref().filter(|_| self.logged_in)
    }

    pub fn load() -> Self {
        Self::from_entries(
            read_storage(LOGGED_IN_KEY).as_deref(),
            read_storage(ROLE_KEY).as_deref(),
        )
    }
}

pub enum SessionAction {
    LoggedOut,
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::LoggedOut => Rc::new(Session::default()),
        }
    }
}

pub type SessionContext = UseReducerHandle<Session>;

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component]
pub fn SessionProvider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(Session::load);

    html! {
        <ContextProvider<SessionContext> context={session}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

#[derive(Clone)]
pub struct SessionHandle {
    context: SessionContext,
}

impl SessionHandle {
    pub fn new(context: SessionContext) -> Self {
        Self { context }
    }

    pub fn session(&self) -> &Session {
        &self.context
    }

    /// Clear the stored flags and leave for the site root.
    ///
    /// This is a full page load so no in-memory state survives.
    pub fn logout(&self) {
        if let Some(storage) = local_storage() {
            for key in [LOGGED_IN_KEY, ROLE_KEY] {
                if storage.remove_item(key).is_err() {
                    tracing::warn!(key, "Failed to clear session flag");
                }
            }
        }
        self.context.dispatch(SessionAction::LoggedOut);

        let navigated = web_sys::window()
            .map(|window| window.location().set_href("/").is_ok())
            .unwrap_or(false);
        if !navigated {
            tracing::error!("Failed to navigate to site root after logout");
        }
    }
}

#[hook]
pub fn use_session() -> SessionHandle {
    let context = use_context::<SessionContext>()
        .expect("use_session must be used within a SessionProvider");
    SessionHandle::new(context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_literal_true_counts_as_logged_in() {
        assert!(Session::from_entries(Some("true"), None).logged_in);
        assert!(!Session::from_entries(Some("yes"), None).logged_in);
        assert!(!Session::from_entries(None, Some("admin")).logged_in);
    }

    #[test]
    fn role_is_shown_only_when_signed_in() {
        let admin = Session::from_entries(Some("true"), Some("admin"));
        assert_eq!(admin.signed_in_role(), Some("admin"));

        let stale = Session::from_entries(Some("false"), Some("admin"));
        assert_eq!(stale.signed_in_role(), None);
    }

    #[test]
    fn blank_role_is_absent() {
        let session = Session::from_entries(Some("true"), Some("  "));
        assert_eq!(session.role, None);
    }

    #[test]
    fn logout_resets_session() {
        let session = Rc::new(Session::from_entries(Some("true"), Some("admin")));
        let next = session.reduce(SessionAction::LoggedOut);
        assert_eq!(*next, Session::default());
    }
}
