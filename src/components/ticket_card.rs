use yew::prelude::*;

use crate::models::{Ticket, VoteType};
use crate::utils::format_timestamp;

#[derive(Properties, PartialEq)]
pub struct TicketCardProps {
    pub ticket: Ticket,
    /// Voting controls; pages that only list tickets leave this unset.
    #[prop_or_default]
    pub on_vote: Option<Callback<(String, VoteType)>>,
}

#[function_component(TicketCard)]
pub fn ticket_card(props: &TicketCardProps) -> Html {
    let ticket = &props.ticket;

    let vote_buttons = props.on_vote.as_ref().map(|on_vote| {
        let upvote = {
            let on_vote = on_vote.clone();
            let id = ticket.id.clone();
            Callback::from(move |_: MouseEvent| on_vote.emit((id.clone(), VoteType::Up)))
        };
        let downvote = {
            let on_vote = on_vote.clone();
            let id = ticket.id.clone();
            Callback::from(move |_: MouseEvent| on_vote.emit((id.clone(), VoteType::Down)))
        };
        html! {
            <div class="ticket-votes">
                <button
                    class={classes!("btn-vote", (ticket.user_vote == Some(VoteType::Up)).then_some("active"))}
                    onclick={upvote}
                >
                    { format!("▲ {}", ticket.upvotes) }
                </button>
                <button
                    class={classes!("btn-vote", (ticket.user_vote == Some(VoteType::Down)).then_some("active"))}
                    onclick={downvote}
                >
                    { format!("▼ {}", ticket.downvotes) }
                </button>
            </div>
        }
    });

    html! {
        <div class="ticket-card">
            <div class="ticket-card-header">
                <span class="ticket-id">{ &ticket.id }</span>
                <span class={classes!("badge", ticket.status.css_class())}>
                    { ticket.status.icon() }{ " " }{ ticket.status.label() }
                </span>
                <span class={classes!("badge", ticket.priority.css_class())}>
                    { ticket.priority.label() }
                </span>
            </div>
            <h3 class="ticket-subject">{ &ticket.subject }</h3>
            <p class="ticket-description">{ &ticket.description }</p>
            <div class="ticket-card-footer">
                <span class="ticket-category">{ &ticket.category }</span>
                <span class="ticket-author">{ &ticket.created_by.name }</span>
                <span class="ticket-date">{ format_timestamp(&ticket.created_at) }</span>
                <span class="ticket-comments">{ format!("💬 {}", ticket.comments.len()) }</span>
                {
                    if let Some(ref agent) = ticket.assigned_agent {
                        html! { <span class="ticket-assignee">{ format!("→ {}", agent.name) }</span> }
                    } else {
                        html! {}
                    }
                }
                { vote_buttons.unwrap_or_default() }
            </div>
        </div>
    }
}
