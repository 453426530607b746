use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::use_auth;
use crate::models::{TicketPriority, TicketStats, TicketStatus};
use crate::routes::Route;
use crate::utils::format_timestamp;

// Mock data - replace with actual API calls once the stats endpoint lands.
const MOCK_STATS: TicketStats = TicketStats {
    total: 156,
    open: 23,
    in_progress: 8,
    resolved: 15,
    closed: 110,
    avg_resolution_time: 4.2,
    total_comments: 89,
};

struct MockRecentTicket {
    id: &'static str,
    subject: &'static str,
    status: TicketStatus,
    priority: TicketPriority,
    created_at: &'static str,
    created_by: &'static str,
}

const MOCK_RECENT_TICKETS: [MockRecentTicket; 3] = [
    MockRecentTicket {
        id: "TCK-001",
        subject: "Unable to access email account",
        status: TicketStatus::Open,
        priority: TicketPriority::High,
        created_at: "2024-01-15T10:30:00Z",
        created_by: "John Doe",
    },
    MockRecentTicket {
        id: "TCK-002",
        subject: "Software installation request",
        status: TicketStatus::InProgress,
        priority: TicketPriority::Medium,
        created_at: "2024-01-15T09:15:00Z",
        created_by: "Jane Smith",
    },
    MockRecentTicket {
        id: "TCK-003",
        subject: "Printer not working",
        status: TicketStatus::Resolved,
        priority: TicketPriority::Low,
        created_at: "2024-01-15T08:00:00Z",
        created_by: "Mike Johnson",
    },
];

#[function_component(DashboardView)]
pub fn dashboard_view() -> Html {
    let auth = use_auth();
    let name = auth
        .session
        .user
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_default();

    html! {
        <div class="page dashboard">
            <div class="page-header">
                <div>
                    <h1>{ format!("Welcome back, {}!", name) }</h1>
                    <p class="page-subtitle">
                        {"Here's what's happening with your support tickets today."}
                    </p>
                </div>
                <Link<Route> to={Route::CreateTicket} classes="btn-primary">
                    {"➕ Create Ticket"}
                </Link<Route>>
            </div>

            <div class="stats-grid">
                <div class="stat-card">
                    <span class="stat-label">{"Total Tickets"}</span>
                    <span class="stat-value">{ MOCK_STATS.total }</span>
                </div>
                <div class="stat-card">
                    <span class="stat-label">{"Open"}</span>
                    <span class="stat-value">{ MOCK_STATS.open }</span>
                </div>
                <div class="stat-card">
                    <span class="stat-label">{"In Progress"}</span>
                    <span class="stat-value">{ MOCK_STATS.in_progress }</span>
                </div>
                <div class="stat-card">
                    <span class="stat-label">{"Resolved"}</span>
                    <span class="stat-value">{ MOCK_STATS.resolved }</span>
                </div>
            </div>

            <div class="panel">
                <div class="panel-header">
                    <h2>{"Recent Tickets"}</h2>
                    <span class="panel-hint">
                        { format!("avg resolution {:.1}h", MOCK_STATS.avg_resolution_time) }
                    </span>
                </div>
                <ul class="recent-tickets">
                    {
                        for MOCK_RECENT_TICKETS.iter().map(|ticket| html! {
                            <li key={ticket.id} class="recent-ticket">
                                <span class="ticket-id">{ ticket.id }</span>
                                <span class="ticket-subject">{ ticket.subject }</span>
                                <span class={classes!("badge", ticket.status.css_class())}>
                                    { ticket.status.icon() }{ " " }{ ticket.status.label() }
                                </span>
                                <span class={classes!("badge", ticket.priority.css_class())}>
                                    { ticket.priority.label() }
                                </span>
                                <span class="ticket-author">{ ticket.created_by }</span>
                                <span class="ticket-date">{ format_timestamp(ticket.created_at) }</span>
                            </li>
                        })
                    }
                </ul>
            </div>
        </div>
    }
}
