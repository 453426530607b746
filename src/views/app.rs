// ============================================================================
// APP VIEW - root component: providers, router, route table
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::{AuthProvider, ThemeProvider, ToastProvider};
use crate::models::TicketStatus;
use crate::routes::{ProtectedRoute, PublicRoute, Route};
use crate::views::{
    AllTicketsView, CreateTicketView, DashboardView, LoginView, MyTicketsView, NotFoundView,
    RegisterView, StatusBoardView,
};

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::Login} /> },
        Route::Login => html! {
            <PublicRoute><LoginView /></PublicRoute>
        },
        Route::Register => html! {
            <PublicRoute><RegisterView /></PublicRoute>
        },
        Route::Dashboard => html! {
            <ProtectedRoute><DashboardView /></ProtectedRoute>
        },
        Route::MyTickets => html! {
            <ProtectedRoute><MyTicketsView /></ProtectedRoute>
        },
        Route::AllTickets => html! {
            <ProtectedRoute><AllTicketsView /></ProtectedRoute>
        },
        Route::OpenTickets => html! {
            <ProtectedRoute><StatusBoardView status={TicketStatus::Open} /></ProtectedRoute>
        },
        Route::InProgressTickets => html! {
            <ProtectedRoute><StatusBoardView status={TicketStatus::InProgress} /></ProtectedRoute>
        },
        Route::ResolvedTickets => html! {
            <ProtectedRoute><StatusBoardView status={TicketStatus::Resolved} /></ProtectedRoute>
        },
        Route::CreateTicket => html! {
            <ProtectedRoute><CreateTicketView /></ProtectedRoute>
        },
        // Linked from the admin navigation tier; no pages behind them yet,
        // so they fall through to the catch-all like any unknown path.
        Route::AdminUsers
        | Route::AdminCategories
        | Route::AdminAgents
        | Route::AdminSettings
        | Route::NotFound => html! { <NotFoundView /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ThemeProvider>
            <ToastProvider>
                <AuthProvider>
                    <BrowserRouter>
                        <Switch<Route> render={switch} />
                    </BrowserRouter>
                </AuthProvider>
            </ToastProvider>
        </ThemeProvider>
    }
}
