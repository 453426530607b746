pub mod spinner;
pub mod ticket_card;

pub use spinner::Spinner;
pub use ticket_card::TicketCard;
