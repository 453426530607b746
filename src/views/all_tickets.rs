use yew::prelude::*;

use crate::components::{Spinner, TicketCard};
use crate::context::{use_auth, use_toast};
use crate::models::{Ticket, TicketFilter, VoteType};
use crate::services::ApiClient;

/// Every ticket in the system, with voting and assignment actions.
/// Reached through the agent navigation tier; the backend enforces who
/// may actually act.
#[function_component(AllTicketsView)]
pub fn all_tickets_view() -> Html {
    let auth = use_auth();
    let toast = use_toast();
    let tickets = use_state(Vec::<Ticket>::new);
    let loading = use_state(|| true);
    // Bumped to force a refetch after a mutation.
    let refresh = use_state(|| 0u32);

    {
        let tickets = tickets.clone();
        let loading = loading.clone();
        let toast = toast.clone();
        use_effect_with(*refresh, move |_| {
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.tickets(&TicketFilter::default()).await {
                    Ok(list) => {
                        log::info!("📥 Loaded {} tickets", list.len());
                        tickets.set(list);
                    }
                    Err(e) => {
                        log::error!("❌ Failed to load tickets: {}", e);
                        toast.error(e.to_string());
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_vote = {
        let toast = toast.clone();
        let refresh = refresh.clone();
        Callback::from(move |(ticket_id, vote): (String, VoteType)| {
            let toast = toast.clone();
            let refresh = refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.vote(&ticket_id, vote).await {
                    Ok(()) => refresh.set(*refresh + 1),
                    Err(e) => {
                        log::error!("❌ Vote failed: {}", e);
                        toast.error(e.to_string());
                    }
                }
            });
        })
    };

    let on_assign_to_me = {
        let toast = toast.clone();
        let refresh = refresh.clone();
        let user_id = auth.session.user.as_ref().map(|u| u.id.clone());
        Callback::from(move |ticket_id: String| {
            let Some(user_id) = user_id.clone() else {
                return;
            };
            let toast = toast.clone();
            let refresh = refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.assign(&ticket_id, &user_id).await {
                    Ok(()) => {
                        toast.success("Ticket assigned");
                        refresh.set(*refresh + 1);
                    }
                    Err(e) => {
                        log::error!("❌ Assign failed: {}", e);
                        toast.error(e.to_string());
                    }
                }
            });
        })
    };

    html! {
        <div class="page tickets">
            <div class="page-header">
                <h1>{"All Tickets"}</h1>
            </div>

            {
                if *loading {
                    html! { <Spinner /> }
                } else if tickets.is_empty() {
                    html! {
                        <div class="empty-state">
                            <div class="empty-icon">{"📥"}</div>
                            <p>{"No tickets yet"}</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="ticket-list">
                            {
                                for tickets.iter().map(|ticket| {
                                    let assign = {
                                        let on_assign_to_me = on_assign_to_me.clone();
                                        let id = ticket.id.clone();
                                        Callback::from(move |_: MouseEvent| {
                                            on_assign_to_me.emit(id.clone())
                                        })
                                    };
                                    html! {
                                        <div key={ticket.id.clone()} class="ticket-row">
                                            <TicketCard
                                                ticket={ticket.clone()}
                                                on_vote={Some(on_vote.clone())}
                                            />
                                            {
                                                if ticket.assigned_agent.is_none() {
                                                    html! {
                                                        <button class="btn-secondary" onclick={assign}>
                                                            {"Assign to me"}
                                                        </button>
                                                    }
                                                } else {
                                                    html! {}
                                                }
                                            }
                                        </div>
                                    }
                                })
                            }
                        </div>
                    }
                }
            }
        </div>
    }
}
