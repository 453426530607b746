pub mod all_tickets;
pub mod app;
pub mod auth_layout;
pub mod create_ticket;
pub mod dashboard;
pub mod header;
pub mod layout;
pub mod login;
pub mod my_tickets;
pub mod not_found;
pub mod register;
pub mod sidebar;
pub mod status_board;

pub use all_tickets::AllTicketsView;
pub use app::App;
pub use auth_layout::AuthLayout;
pub use create_ticket::CreateTicketView;
pub use dashboard::DashboardView;
pub use header::Header;
pub use layout::Layout;
pub use login::LoginView;
pub use my_tickets::MyTicketsView;
pub use not_found::NotFoundView;
pub use register::RegisterView;
pub use sidebar::Sidebar;
pub use status_board::StatusBoardView;
