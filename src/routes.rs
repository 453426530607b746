// ============================================================================
// ROUTES - Route table and session-derived route guard
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Spinner;
use crate::context::use_auth;
use crate::views::Layout;

#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[at("/tickets")]
    MyTickets,
    #[at("/all-tickets")]
    AllTickets,
    #[at("/tickets/open")]
    OpenTickets,
    #[at("/tickets/in-progress")]
    InProgressTickets,
    #[at("/tickets/resolved")]
    ResolvedTickets,
    #[at("/create-ticket")]
    CreateTicket,
    // Admin area: linked from the navigation menu, not yet backed by pages.
    #[at("/admin/users")]
    AdminUsers,
    #[at("/admin/categories")]
    AdminCategories,
    #[at("/admin/agents")]
    AdminAgents,
    #[at("/admin/settings")]
    AdminSettings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// What the guard decides for a navigation target. Pure data so the state
/// machine is testable without a browser.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GuardOutcome {
    /// Session not resolved yet: render a spinner, never redirect.
    Wait,
    /// Anonymous visitor on a protected route.
    RedirectToLogin,
    /// Authenticated visitor on a public-only route.
    RedirectToDashboard,
    /// Render the requested view.
    Render,
}

pub fn protected_outcome(authenticated: bool, loading: bool) -> GuardOutcome {
    if loading {
        GuardOutcome::Wait
    } else if !authenticated {
        GuardOutcome::RedirectToLogin
    } else {
        GuardOutcome::Render
    }
}

pub fn public_outcome(authenticated: bool, loading: bool) -> GuardOutcome {
    if loading {
        GuardOutcome::Wait
    } else if authenticated {
        GuardOutcome::RedirectToDashboard
    } else {
        GuardOutcome::Render
    }
}

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    pub children: Children,
}

/// Protected routes render inside the authenticated shell; anonymous
/// visitors are sent to the login page.
#[function_component(ProtectedRoute)]
pub fn protected_route(props: &GuardProps) -> Html {
    let auth = use_auth();
    match protected_outcome(auth.session.user.is_some(), auth.session.is_loading) {
        GuardOutcome::Wait => html! { <Spinner full_screen={true} /> },
        GuardOutcome::RedirectToLogin => html! { <Redirect<Route> to={Route::Login} /> },
        _ => html! { <Layout>{ props.children.clone() }</Layout> },
    }
}

/// Public-only routes (login/register) render standalone; authenticated
/// visitors are sent to the dashboard.
#[function_component(PublicRoute)]
pub fn public_route(props: &GuardProps) -> Html {
    let auth = use_auth();
    match public_outcome(auth.session.user.is_some(), auth.session.is_loading) {
        GuardOutcome::Wait => html! { <Spinner full_screen={true} /> },
        GuardOutcome::RedirectToDashboard => html! { <Redirect<Route> to={Route::Dashboard} /> },
        _ => html! { <>{ props.children.clone() }</> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_never_redirects() {
        assert_eq!(protected_outcome(false, true), GuardOutcome::Wait);
        assert_eq!(protected_outcome(true, true), GuardOutcome::Wait);
        assert_eq!(public_outcome(false, true), GuardOutcome::Wait);
        assert_eq!(public_outcome(true, true), GuardOutcome::Wait);
    }

    #[test]
    fn anonymous_on_protected_redirects_to_login() {
        assert_eq!(protected_outcome(false, false), GuardOutcome::RedirectToLogin);
    }

    #[test]
    fn authenticated_on_protected_renders() {
        assert_eq!(protected_outcome(true, false), GuardOutcome::Render);
    }

    #[test]
    fn authenticated_on_public_only_redirects_to_dashboard() {
        assert_eq!(public_outcome(true, false), GuardOutcome::RedirectToDashboard);
    }

    #[test]
    fn anonymous_on_public_only_renders() {
        assert_eq!(public_outcome(false, false), GuardOutcome::Render);
    }

    #[test]
    fn route_paths_are_stable() {
        assert_eq!(Route::Login.to_path(), "/login");
        assert_eq!(Route::Dashboard.to_path(), "/dashboard");
        assert_eq!(Route::OpenTickets.to_path(), "/tickets/open");
    }
}
